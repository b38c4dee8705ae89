//! Status enums for projects, tasks, and requests.
//!
//! Each variant serializes to the lowercase, hyphenated string stored in the
//! JSON documents (`"in-progress"`, `"approved"`, ...).

use std::fmt;

use serde::{Deserialize, Serialize};

macro_rules! define_status_enum {
    (
        $(#[$meta:meta])*
        $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident = $val:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $( $(#[$vmeta])* #[serde(rename = $val)] $variant ),+
        }

        impl $name {
            /// The wire name of this status.
            pub fn as_str(self) -> &'static str {
                match self {
                    $( $name::$variant => $val ),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

define_status_enum! {
    /// Project lifecycle status.
    ProjectStatus {
        #[default]
        Planning = "planning",
        InProgress = "in-progress",
        Completed = "completed",
    }
}

define_status_enum! {
    /// Task lifecycle status. `Completed` is terminal.
    TaskStatus {
        #[default]
        Pending = "pending",
        InProgress = "in-progress",
        Completed = "completed",
    }
}

define_status_enum! {
    /// Decision status shared by contribution and extension requests.
    RequestStatus {
        #[default]
        Pending = "pending",
        Approved = "approved",
        Rejected = "rejected",
    }
}

impl TaskStatus {
    pub fn is_terminal(self) -> bool {
        self == TaskStatus::Completed
    }
}

impl RequestStatus {
    pub fn is_terminal(self) -> bool {
        self != RequestStatus::Pending
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn statuses_serialize_to_wire_names() {
        assert_eq!(
            serde_json::to_string(&ProjectStatus::InProgress).unwrap(),
            "\"in-progress\""
        );
        assert_eq!(
            serde_json::to_string(&TaskStatus::Completed).unwrap(),
            "\"completed\""
        );
        assert_eq!(
            serde_json::to_string(&RequestStatus::Rejected).unwrap(),
            "\"rejected\""
        );
    }

    #[test]
    fn statuses_read_from_wire_names() {
        let status: TaskStatus = serde_json::from_str("\"in-progress\"").unwrap();
        assert_eq!(status, TaskStatus::InProgress);
        let status: RequestStatus = serde_json::from_str("\"approved\"").unwrap();
        assert_eq!(status, RequestStatus::Approved);
        assert!(serde_json::from_str::<ProjectStatus>("\"archived\"").is_err());
        assert_eq!(ProjectStatus::InProgress.to_string(), "in-progress");
    }

    #[test]
    fn terminal_states() {
        assert!(TaskStatus::Completed.is_terminal());
        assert!(!TaskStatus::InProgress.is_terminal());
        assert!(RequestStatus::Approved.is_terminal());
        assert!(RequestStatus::Rejected.is_terminal());
        assert!(!RequestStatus::Pending.is_terminal());
    }
}
