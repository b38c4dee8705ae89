//! Project transitions: creation, details, status, membership, likes,
//! comments, and contribution requests.

use crate::error::CoreError;
use crate::lifecycle::Decision;
use crate::models::project::{CreateProject, UpdateProject, CONTRIBUTOR_ROLE};
use crate::models::{Comment, ContributionRequest, Likes, Project, Task, TeamMember};
use crate::progress::progress_of;
use crate::status::{ProjectStatus, RequestStatus};
use crate::types::{new_id, Timestamp};
use crate::validation::{normalize_tags, required_text, MAX_COMMENT_LENGTH, MAX_NAME_LENGTH};

/// Fail with [`CoreError::Unauthorized`] unless `user_id` leads the project.
pub fn ensure_leader(project: &Project, user_id: &str, action: &str) -> Result<(), CoreError> {
    if !project.is_leader(user_id) {
        return Err(CoreError::Unauthorized(format!(
            "Only the project leader can {action}"
        )));
    }
    Ok(())
}

/// Build a new project led by `leader_id`.
///
/// The leader and duplicate users are dropped from the initial team. Callers
/// are responsible for checking that the remaining members exist.
pub fn new_project(
    leader_id: &str,
    input: CreateProject,
    now: Timestamp,
) -> Result<Project, CoreError> {
    let name = required_text("Name", &input.name, MAX_NAME_LENGTH)?;

    let mut team_members: Vec<TeamMember> = Vec::with_capacity(input.team_members.len());
    for member in input.team_members {
        if member.user_id == leader_id || team_members.iter().any(|m| m.user_id == member.user_id)
        {
            continue;
        }
        team_members.push(TeamMember {
            user_id: member.user_id,
            role: member.role.trim().to_string(),
        });
    }

    Ok(Project {
        id: new_id(),
        name,
        description: input.description.trim().to_string(),
        github_link: input.github_link.trim().to_string(),
        leader_id: leader_id.to_string(),
        team_members,
        status: ProjectStatus::Planning,
        progress: 0,
        created_date: now,
        completed_date: None,
        tags: normalize_tags(&input.tags),
        is_public: input.is_public.unwrap_or(true),
        likes: Likes::default(),
        comments: Vec::new(),
        contribution_requests: Vec::new(),
    })
}

/// Recompute progress from the project's full task list.
pub fn with_progress(mut project: Project, tasks: &[Task]) -> Project {
    project.progress = progress_of(tasks);
    project
}

/// Project state after one of its tasks was completed.
///
/// Progress is recomputed over `tasks` (which must already contain the
/// completed task) and a project still in planning moves to in-progress.
pub fn after_task_completed(project: Project, tasks: &[Task]) -> Project {
    let mut project = with_progress(project, tasks);
    if project.status == ProjectStatus::Planning {
        project.status = ProjectStatus::InProgress;
    }
    project
}

/// Apply a leader's edit to the project's descriptive fields.
pub fn update_details(
    mut project: Project,
    acting_user_id: &str,
    changes: UpdateProject,
) -> Result<Project, CoreError> {
    ensure_leader(&project, acting_user_id, "edit the project")?;
    if let Some(name) = changes.name {
        project.name = required_text("Name", &name, MAX_NAME_LENGTH)?;
    }
    if let Some(description) = changes.description {
        project.description = description.trim().to_string();
    }
    if let Some(link) = changes.github_link {
        project.github_link = link.trim().to_string();
    }
    if let Some(tags) = changes.tags {
        project.tags = normalize_tags(&tags);
    }
    if let Some(is_public) = changes.is_public {
        project.is_public = is_public;
    }
    Ok(project)
}

/// Change the project status.
///
/// Entering `completed` stamps `completed_date`; leaving it clears the stamp.
pub fn set_status(
    mut project: Project,
    acting_user_id: &str,
    status: ProjectStatus,
    now: Timestamp,
) -> Result<Project, CoreError> {
    ensure_leader(&project, acting_user_id, "change the project status")?;
    if project.status == status {
        return Err(CoreError::InvalidState(format!(
            "Project {} is already {status}",
            project.id
        )));
    }
    project.completed_date = (status == ProjectStatus::Completed).then_some(now);
    project.status = status;
    Ok(project)
}

/// Remove a team member. The leader is never in the team list and cannot be removed.
pub fn remove_member(
    mut project: Project,
    acting_user_id: &str,
    member_id: &str,
) -> Result<Project, CoreError> {
    ensure_leader(&project, acting_user_id, "remove team members")?;
    if project.is_leader(member_id) {
        return Err(CoreError::InvalidState(
            "The project leader cannot be removed from the team".into(),
        ));
    }
    let before = project.team_members.len();
    project.team_members.retain(|m| m.user_id != member_id);
    if project.team_members.len() == before {
        return Err(CoreError::not_found("TeamMember", member_id));
    }
    Ok(project)
}

// ---------------------------------------------------------------------------
// Likes and comments
// ---------------------------------------------------------------------------

/// Flip the user's like. Returns the project and whether the user now likes it.
pub fn toggle_like(mut project: Project, user_id: &str) -> (Project, bool) {
    let liked = project.likes.toggle(user_id);
    (project, liked)
}

/// Set the user's like to `liked`. Repeating the same intent is a no-op.
pub fn set_like(mut project: Project, user_id: &str, liked: bool) -> Project {
    if liked {
        project.likes.insert(user_id);
    } else {
        project.likes.remove(user_id);
    }
    project
}

pub fn add_comment(
    mut project: Project,
    user_id: &str,
    content: &str,
    now: Timestamp,
) -> Result<Project, CoreError> {
    let content = required_text("Comment", content, MAX_COMMENT_LENGTH)?;
    project.comments.push(Comment {
        id: new_id(),
        user_id: user_id.to_string(),
        content,
        created_date: now,
    });
    Ok(project)
}

// ---------------------------------------------------------------------------
// Contribution requests
// ---------------------------------------------------------------------------

/// Append a pending request from a user who is not yet on the team.
pub fn request_contribution(
    mut project: Project,
    requester_id: &str,
    message: &str,
    now: Timestamp,
) -> Result<Project, CoreError> {
    if project.is_team_member(requester_id) {
        return Err(CoreError::InvalidState(format!(
            "User {requester_id} is already on project {}",
            project.id
        )));
    }
    if project.pending_request_from(requester_id).is_some() {
        return Err(CoreError::InvalidState(format!(
            "User {requester_id} already has a pending request on project {}",
            project.id
        )));
    }
    project.contribution_requests.push(ContributionRequest {
        id: new_id(),
        user_id: requester_id.to_string(),
        message: message.trim().to_string(),
        status: RequestStatus::Pending,
        created_date: now,
    });
    Ok(project)
}

/// Approve or reject one pending contribution request.
///
/// Approval adds the requester to the team as a contributor unless they are
/// already a member. Rejection never touches the team.
pub fn decide_contribution(
    mut project: Project,
    request_id: &str,
    acting_user_id: &str,
    decision: Decision,
) -> Result<Project, CoreError> {
    ensure_leader(&project, acting_user_id, "decide contribution requests")?;
    let request = project
        .contribution_requests
        .iter_mut()
        .find(|r| r.id == request_id)
        .ok_or_else(|| CoreError::not_found("ContributionRequest", request_id))?;
    if request.status.is_terminal() {
        return Err(CoreError::InvalidState(format!(
            "Contribution request {request_id} is already {}",
            request.status
        )));
    }
    request.status = decision.status();
    let requester = request.user_id.clone();

    if decision == Decision::Approve && !project.is_team_member(&requester) {
        project.team_members.push(TeamMember {
            user_id: requester,
            role: CONTRIBUTOR_ROLE.to_string(),
        });
    }
    Ok(project)
}
