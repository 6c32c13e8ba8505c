pub mod friend;
pub mod user;

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

/// relationship between the viewer and a subject, derived and never stored
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RelationshipStatus {
    #[default]
    Stranger,
    Friend,
    OutgoingPending,
    IncomingPending,
}

/// the three predicates for one subject
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Relationship {
    pub is_friend: bool,
    pub is_outgoing_pending: bool,
    pub is_incoming_pending: bool,
}

impl Relationship {
    /// collapse the predicates into one status.
    /// stale data may make several of them true at once,
    /// friendship wins, then a request waiting on the viewer
    pub fn status(&self) -> RelationshipStatus {
        if self.is_friend {
            RelationshipStatus::Friend
        } else if self.is_incoming_pending {
            RelationshipStatus::IncomingPending
        } else if self.is_outgoing_pending {
            RelationshipStatus::OutgoingPending
        } else {
            RelationshipStatus::Stranger
        }
    }

    /// more than one predicate holds, the cache is mid-refresh or stale
    pub fn is_inconsistent(&self) -> bool {
        [
            self.is_friend,
            self.is_outgoing_pending,
            self.is_incoming_pending,
        ]
        .iter()
        .filter(|v| **v)
        .count()
            > 1
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MutationKind {
    SendRequest,
    AcceptRequest,
    RejectRequest,
    Unfriend,
}

impl Display for MutationKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            MutationKind::SendRequest => write!(f, "send_request"),
            MutationKind::AcceptRequest => write!(f, "accept_request"),
            MutationKind::RejectRequest => write!(f, "reject_request"),
            MutationKind::Unfriend => write!(f, "unfriend"),
        }
    }
}
