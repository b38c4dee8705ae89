//! Task transitions: creation, start, completion, and deadline extensions.

use crate::error::CoreError;
use crate::lifecycle::Decision;
use crate::models::task::{CreateTask, DEFAULT_TASK_POINTS};
use crate::models::{ExtensionRequest, Project, Task};
use crate::status::{RequestStatus, TaskStatus};
use crate::types::{new_id, Date, Timestamp};
use crate::validation::{required_text, validate_points, MAX_NAME_LENGTH};

/// Build a new pending task inside `project`.
///
/// Only the project leader may create tasks, and the assignee must be the
/// leader or one of the team members.
pub fn new_task(
    project: &Project,
    acting_user_id: &str,
    input: CreateTask,
    now: Timestamp,
) -> Result<Task, CoreError> {
    if !project.is_leader(acting_user_id) {
        return Err(CoreError::Unauthorized(
            "Only the project leader can create tasks".into(),
        ));
    }
    let title = required_text("Title", &input.title, MAX_NAME_LENGTH)?;
    let points = input.points.unwrap_or(DEFAULT_TASK_POINTS);
    validate_points(points)?;
    if !project.is_team_member(&input.assigned_to) {
        return Err(CoreError::Validation(format!(
            "User {} is not a member of project {}",
            input.assigned_to, project.id
        )));
    }

    Ok(Task {
        id: new_id(),
        project_id: project.id.clone(),
        title,
        description: input.description.trim().to_string(),
        assigned_to: input.assigned_to,
        status: TaskStatus::Pending,
        deadline: input.deadline,
        created_date: now,
        completed_date: None,
        points,
        extension_requests: Vec::new(),
    })
}

fn ensure_assignee(task: &Task, user_id: &str, action: &str) -> Result<(), CoreError> {
    if task.assigned_to != user_id {
        return Err(CoreError::Unauthorized(format!(
            "Only the assignee can {action} this task"
        )));
    }
    Ok(())
}

fn ensure_not_completed(task: &Task) -> Result<(), CoreError> {
    if task.status.is_terminal() {
        return Err(CoreError::InvalidState(format!(
            "Task {} is already completed",
            task.id
        )));
    }
    Ok(())
}

/// Move a pending task to in-progress.
pub fn start(mut task: Task, acting_user_id: &str) -> Result<Task, CoreError> {
    ensure_assignee(&task, acting_user_id, "start")?;
    if task.status != TaskStatus::Pending {
        return Err(CoreError::InvalidState(format!(
            "Task {} is {}, only pending tasks can be started",
            task.id, task.status
        )));
    }
    task.status = TaskStatus::InProgress;
    Ok(task)
}

/// Mark the task completed. Points are credited separately by
/// [`award_points`](crate::lifecycle::user::award_points).
pub fn complete(mut task: Task, acting_user_id: &str, now: Timestamp) -> Result<Task, CoreError> {
    ensure_not_completed(&task)?;
    ensure_assignee(&task, acting_user_id, "complete")?;
    task.status = TaskStatus::Completed;
    task.completed_date = Some(now);
    Ok(task)
}

/// Append a pending extension request from the assignee.
pub fn request_extension(
    mut task: Task,
    requester_id: &str,
    new_deadline: Date,
    reason: &str,
    now: Timestamp,
) -> Result<Task, CoreError> {
    ensure_assignee(&task, requester_id, "request an extension for")?;
    ensure_not_completed(&task)?;
    task.extension_requests.push(ExtensionRequest {
        id: new_id(),
        requested_by: Some(requester_id.to_string()),
        requested_date: now,
        new_deadline,
        reason: reason.trim().to_string(),
        status: RequestStatus::Pending,
    });
    Ok(task)
}

/// Approve or reject one pending extension request.
///
/// Approval moves the task's deadline to the requested date. Other requests
/// on the task are left untouched either way.
pub fn decide_extension(
    mut task: Task,
    project: &Project,
    request_id: &str,
    acting_user_id: &str,
    decision: Decision,
) -> Result<Task, CoreError> {
    if !project.is_leader(acting_user_id) {
        return Err(CoreError::Unauthorized(
            "Only the project leader can decide extension requests".into(),
        ));
    }
    let request = task
        .extension_requests
        .iter_mut()
        .find(|r| r.id == request_id)
        .ok_or_else(|| CoreError::not_found("ExtensionRequest", request_id))?;
    if request.status.is_terminal() {
        return Err(CoreError::InvalidState(format!(
            "Extension request {request_id} is already {}",
            request.status
        )));
    }
    request.status = decision.status();
    if decision == Decision::Approve {
        task.deadline = Some(request.new_deadline);
    }
    Ok(task)
}
