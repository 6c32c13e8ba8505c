use std::fmt::{Display, Formatter, Result};

use serde::{Deserialize, Serialize};

/// error kinds reported by the graph service
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ErrorKind {
    UnknownError,
    NotFound,
    UnAuthorized,
    BadRequest,
    Conflict,
    InternalServer,
    Timeout,
}

/// error body of a failed graph service call
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Error {
    kind: ErrorKind,
    details: Option<String>,
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match &self.details {
            Some(details) => write!(f, "{:?}: {}", self.kind, details),
            None => write!(f, "{:?}", self.kind),
        }
    }
}

impl Error {
    pub fn new(kind: ErrorKind, details: impl Into<String>) -> Self {
        Error {
            kind,
            details: Some(details.into()),
        }
    }

    pub fn unknown_error() -> Self {
        Error {
            kind: ErrorKind::UnknownError,
            details: None,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }
}
