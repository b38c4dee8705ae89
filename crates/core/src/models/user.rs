//! User entity model and DTOs.

use serde::{Deserialize, Serialize};

use crate::types::{EntityId, Timestamp};

/// Full user document from the `users` collection.
///
/// Contains the password hash -- NEVER return this to API clients directly.
/// Use [`UserProfile`] for external-facing output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: EntityId,
    pub email: String,
    pub password_hash: String,
    pub name: String,
    #[serde(default)]
    pub bio: String,
    #[serde(default)]
    pub points: u64,
    #[serde(default)]
    pub badges: Vec<Badge>,
    pub joined_date: Timestamp,
}

/// An achievement shown on a user's profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Badge {
    pub id: String,
    pub name: String,
    pub description: String,
    pub icon: String,
    pub earned_date: Timestamp,
}

/// Safe user representation for API responses (no password hash).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: EntityId,
    pub email: String,
    pub name: String,
    pub bio: String,
    pub points: u64,
    pub badges: Vec<Badge>,
    pub joined_date: Timestamp,
}

impl User {
    pub fn has_badge(&self, badge_id: &str) -> bool {
        self.badges.iter().any(|b| b.id == badge_id)
    }
}

impl From<&User> for UserProfile {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.clone(),
            email: user.email.clone(),
            name: user.name.clone(),
            bio: user.bio.clone(),
            points: user.points,
            badges: user.badges.clone(),
            joined_date: user.joined_date,
        }
    }
}

impl From<User> for UserProfile {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            email: user.email,
            name: user.name,
            bio: user.bio,
            points: user.points,
            badges: user.badges,
            joined_date: user.joined_date,
        }
    }
}

/// DTO for a profile edit. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfile {
    pub name: Option<String>,
    pub bio: Option<String>,
}
