//! Pure state transitions for projects, tasks, requests, and users.
//!
//! Every function takes the current entity (by value) plus the operation's
//! arguments and returns the next entity state, or a [`CoreError`] when a
//! precondition fails. Nothing is persisted here; callers write the returned
//! entities back in whatever order the operation requires.
//!
//! [`CoreError`]: crate::error::CoreError

pub mod project;
pub mod task;
pub mod user;

use crate::status::RequestStatus;

/// Outcome chosen by a leader for a pending request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Approve,
    Reject,
}

impl Decision {
    /// The terminal request status this decision produces.
    pub fn status(self) -> RequestStatus {
        match self {
            Decision::Approve => RequestStatus::Approved,
            Decision::Reject => RequestStatus::Rejected,
        }
    }
}
