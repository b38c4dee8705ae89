//! Task entity model and DTOs.

use serde::{Deserialize, Serialize};

use crate::status::{RequestStatus, TaskStatus};
use crate::types::{Date, EntityId, Timestamp};

/// Points awarded for a task when the creator does not choose a value.
pub const DEFAULT_TASK_POINTS: u32 = 10;

/// A task document from the `tasks` collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: EntityId,
    pub project_id: EntityId,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub assigned_to: EntityId,
    #[serde(default)]
    pub status: TaskStatus,
    #[serde(default, deserialize_with = "lenient_date::deserialize")]
    pub deadline: Option<Date>,
    pub created_date: Timestamp,
    /// Set only when the task is completed.
    #[serde(default)]
    pub completed_date: Option<Timestamp>,
    pub points: u32,
    #[serde(default)]
    pub extension_requests: Vec<ExtensionRequest>,
}

impl Task {
    pub fn is_completed(&self) -> bool {
        self.status == TaskStatus::Completed
    }
}

/// An assignee's request to move a task's deadline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtensionRequest {
    pub id: EntityId,
    /// Older documents do not record the requester.
    #[serde(default)]
    pub requested_by: Option<EntityId>,
    pub requested_date: Timestamp,
    pub new_deadline: Date,
    #[serde(default)]
    pub reason: String,
    #[serde(default)]
    pub status: RequestStatus,
}

/// DTO for creating a task inside a project.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTask {
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub assigned_to: EntityId,
    #[serde(default)]
    pub deadline: Option<Date>,
    /// Defaults to [`DEFAULT_TASK_POINTS`] if omitted.
    pub points: Option<u32>,
}

/// Deadlines submitted from form inputs may be an empty string.
mod lenient_date {
    use serde::{Deserialize, Deserializer};

    use crate::types::Date;

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<Date>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw: Option<String> = Option::deserialize(deserializer)?;
        match raw.as_deref().map(str::trim) {
            None | Some("") => Ok(None),
            Some(s) => {
                // Accept a full timestamp as well as a bare date.
                let date_part = s.get(..10).unwrap_or(s);
                Date::parse_from_str(date_part, "%Y-%m-%d")
                    .map(Some)
                    .map_err(serde::de::Error::custom)
            }
        }
    }
}
