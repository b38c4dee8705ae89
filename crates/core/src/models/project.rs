//! Project entity model and DTOs.
//!
//! A project document embeds its likes, comments, and contribution requests;
//! those have no identity outside the owning project.

use serde::{Deserialize, Serialize};

use crate::status::{ProjectStatus, RequestStatus};
use crate::types::{EntityId, Timestamp};

/// Role given to users added through an approved contribution request.
pub const CONTRIBUTOR_ROLE: &str = "Contributor";

/// A project document from the `projects` collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: EntityId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub github_link: String,
    pub leader_id: EntityId,
    /// Users associated with the project other than the leader.
    #[serde(default)]
    pub team_members: Vec<TeamMember>,
    #[serde(default)]
    pub status: ProjectStatus,
    /// Percentage (0-100) of the project's tasks that are completed.
    #[serde(default)]
    pub progress: u8,
    pub created_date: Timestamp,
    #[serde(default)]
    pub completed_date: Option<Timestamp>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default = "default_is_public")]
    pub is_public: bool,
    #[serde(default)]
    pub likes: Likes,
    #[serde(default)]
    pub comments: Vec<Comment>,
    #[serde(default)]
    pub contribution_requests: Vec<ContributionRequest>,
}

fn default_is_public() -> bool {
    true
}

impl Project {
    pub fn is_leader(&self, user_id: &str) -> bool {
        self.leader_id == user_id
    }

    /// `true` for the leader and for every user in `team_members`.
    pub fn is_team_member(&self, user_id: &str) -> bool {
        self.is_leader(user_id) || self.team_members.iter().any(|m| m.user_id == user_id)
    }

    /// The pending contribution request from `user_id`, if any.
    pub fn pending_request_from(&self, user_id: &str) -> Option<&ContributionRequest> {
        self.contribution_requests
            .iter()
            .find(|r| r.user_id == user_id && r.status == RequestStatus::Pending)
    }
}

/// A non-leader participant of a project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamMember {
    pub user_id: EntityId,
    /// Free-text role, e.g. "Designer" or "Contributor".
    pub role: String,
}

/// A comment on a public project. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: EntityId,
    pub user_id: EntityId,
    pub content: String,
    pub created_date: Timestamp,
}

/// A non-member's request to join a project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContributionRequest {
    pub id: EntityId,
    pub user_id: EntityId,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub status: RequestStatus,
    pub created_date: Timestamp,
}

// ---------------------------------------------------------------------------
// Likes
// ---------------------------------------------------------------------------

/// The set of users who liked a project.
///
/// The like count is always the size of the set. Stored as
/// `{"count": n, "userIds": [...]}`; the older bare-list and bare-count
/// shapes are accepted on read. A bare count names no likers and therefore
/// reads as an empty set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "LikesRepr", into = "LikesDocument")]
pub struct Likes {
    user_ids: Vec<EntityId>,
}

impl Likes {
    pub fn count(&self) -> usize {
        self.user_ids.len()
    }

    pub fn contains(&self, user_id: &str) -> bool {
        self.user_ids.iter().any(|id| id == user_id)
    }

    pub fn user_ids(&self) -> &[EntityId] {
        &self.user_ids
    }

    /// Add a liker. Returns `false` if the user already liked the project.
    pub fn insert(&mut self, user_id: &str) -> bool {
        if self.contains(user_id) {
            return false;
        }
        self.user_ids.push(user_id.to_string());
        true
    }

    /// Remove a liker. Returns `false` if the user had not liked the project.
    pub fn remove(&mut self, user_id: &str) -> bool {
        let before = self.user_ids.len();
        self.user_ids.retain(|id| id != user_id);
        self.user_ids.len() != before
    }

    /// Flip the user's like. Returns whether the user likes the project afterwards.
    pub fn toggle(&mut self, user_id: &str) -> bool {
        if self.remove(user_id) {
            false
        } else {
            self.user_ids.push(user_id.to_string());
            true
        }
    }
}

impl FromIterator<EntityId> for Likes {
    fn from_iter<I: IntoIterator<Item = EntityId>>(iter: I) -> Self {
        let mut likes = Likes::default();
        for id in iter {
            likes.insert(&id);
        }
        likes
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct LikesDocument {
    count: usize,
    user_ids: Vec<EntityId>,
}

impl From<Likes> for LikesDocument {
    fn from(likes: Likes) -> Self {
        Self {
            count: likes.user_ids.len(),
            user_ids: likes.user_ids,
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum LikesRepr {
    Document {
        #[serde(rename = "userIds", default)]
        user_ids: Vec<EntityId>,
    },
    Ids(Vec<EntityId>),
    Count(serde::de::IgnoredAny),
}

impl From<LikesRepr> for Likes {
    fn from(repr: LikesRepr) -> Self {
        match repr {
            LikesRepr::Document { user_ids } | LikesRepr::Ids(user_ids) => {
                user_ids.into_iter().collect()
            }
            LikesRepr::Count(_) => Likes::default(),
        }
    }
}

// ---------------------------------------------------------------------------
// DTOs
// ---------------------------------------------------------------------------

/// DTO for creating a new project. The creator becomes the leader.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProject {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub github_link: String,
    #[serde(default)]
    pub tags: Vec<String>,
    /// Defaults to `true` if omitted.
    pub is_public: Option<bool>,
    /// Initial team members chosen at creation time (leader excluded).
    #[serde(default)]
    pub team_members: Vec<TeamMember>,
}

/// DTO for editing project details. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProject {
    pub name: Option<String>,
    pub description: Option<String>,
    pub github_link: Option<String>,
    pub tags: Option<Vec<String>>,
    pub is_public: Option<bool>,
}
