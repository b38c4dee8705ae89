//! The single "current user" session record.

use serde::{Deserialize, Serialize};

use crate::types::{EntityId, Timestamp};

/// Pointer to the signed-in user. Absent means signed out.
///
/// Also reads the older layouts: a bare user id string, and a record
/// without `signedInAt`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "SessionRepr")]
pub struct Session {
    pub user_id: EntityId,
    pub signed_in_at: Option<Timestamp>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum SessionRepr {
    Record {
        #[serde(rename = "userId")]
        user_id: EntityId,
        #[serde(rename = "signedInAt", default)]
        signed_in_at: Option<Timestamp>,
    },
    UserId(EntityId),
}

impl From<SessionRepr> for Session {
    fn from(repr: SessionRepr) -> Self {
        match repr {
            SessionRepr::Record {
                user_id,
                signed_in_at,
            } => Self {
                user_id,
                signed_in_at,
            },
            SessionRepr::UserId(user_id) => Self {
                user_id,
                signed_in_at: None,
            },
        }
    }
}
