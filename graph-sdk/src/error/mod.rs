use thiserror::Error;

use crate::model::MutationKind;

pub mod api_err;

pub type Reason = String;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// caller error, never reaches the graph service
    #[error("invalid relationship operation: {0}")]
    Validation(Reason),
    /// the same mutation is still in flight
    #[error("{0} is already in flight")]
    Busy(MutationKind),
    /// the graph service rejected the mutation, local state untouched
    #[error("{kind} failed: {reason}")]
    MutationFailed { kind: MutationKind, reason: Reason },
    /// the mutation went through but reading back failed, local state is stale
    #[error("{kind} applied but refresh failed: {reason}")]
    RefreshFailed { kind: MutationKind, reason: Reason },
    /// initial load of the viewer's graph failed
    #[error("sync failed: {0}")]
    SyncFailed(Reason),
    /// request server error
    #[error("request server error: {0}")]
    Network(api_err::Error),
    /// decode config or payload error
    #[error("convert error: {0}")]
    Convert(Reason),
}

impl Error {
    pub fn validation(reason: impl Into<Reason>) -> Self {
        Self::Validation(reason.into())
    }

    pub fn network(kind: api_err::ErrorKind, details: impl Into<String>) -> Self {
        Self::Network(api_err::Error::new(kind, details))
    }

    /// whether the graph service state changed even though an error is reported
    pub fn is_applied(&self) -> bool {
        matches!(self, Error::RefreshFailed { .. })
    }

    /// the cache should not be trusted until the next successful fetch
    pub fn is_stale(&self) -> bool {
        matches!(self, Error::RefreshFailed { .. } | Error::SyncFailed(_))
    }
}

impl From<api_err::Error> for Error {
    fn from(value: api_err::Error) -> Self {
        Self::Network(value)
    }
}

impl From<serde_json::Error> for Error {
    fn from(value: serde_json::Error) -> Self {
        Self::Convert(value.to_string())
    }
}

pub use crate::Result;
