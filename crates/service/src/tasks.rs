//! Task operations: creation, start, completion, deletion, and extensions.

use chrono::Utc;
use hivemind_core::lifecycle::{project as project_rules, task as rules, user as user_rules, Decision};
use hivemind_core::models::task::CreateTask;
use hivemind_core::models::{Project, Task, User};
use hivemind_core::types::Date;
use hivemind_db::repositories::{ProjectRepo, TaskRepo, UserRepo};
use hivemind_db::Collection;

use crate::{DomainService, ServiceResult};

/// Every entity written by [`DomainService::complete_task`].
#[derive(Debug, Clone)]
pub struct TaskCompletion {
    pub task: Task,
    /// The assignee after points and badges were credited.
    pub user: User,
    pub project: Project,
}

impl DomainService {
    /// Create a task in a project. Leader only; the project's progress is
    /// recomputed to include the new task.
    pub async fn create_task(
        &self,
        project_id: &str,
        acting_user_id: &str,
        input: CreateTask,
    ) -> ServiceResult<Task> {
        let _guard = self.lock([(Collection::Projects, project_id.to_string())]).await;
        let project = self.load_project(project_id).await?;
        let task = rules::new_task(&project, acting_user_id, input, Utc::now())?;

        let task = TaskRepo::save(self.store(), &task).await?;
        let tasks = TaskRepo::list_by_project(self.store(), project_id).await?;
        let project = project_rules::with_progress(project, &tasks);
        ProjectRepo::save(self.store(), &project).await?;

        tracing::info!(task_id = %task.id, project_id, assigned_to = %task.assigned_to, "Task created");
        Ok(task)
    }

    pub async fn start_task(&self, task_id: &str, acting_user_id: &str) -> ServiceResult<Task> {
        let _guard = self.lock([(Collection::Tasks, task_id.to_string())]).await;
        let task = self.load_task(task_id).await?;
        let task = rules::start(task, acting_user_id)?;
        let task = TaskRepo::save(self.store(), &task).await?;
        tracing::info!(task_id, "Task started");
        Ok(task)
    }

    /// Complete a task and credit its points to the assignee.
    ///
    /// Writes task, then user, then project. The writes are not atomic: a
    /// storage failure part-way leaves the earlier writes in place.
    pub async fn complete_task(
        &self,
        task_id: &str,
        acting_user_id: &str,
    ) -> ServiceResult<TaskCompletion> {
        // Assignee and project never change, so they can be read before locking.
        let peek = self.load_task(task_id).await?;
        let _guard = self
            .lock([
                (Collection::Tasks, task_id.to_string()),
                (Collection::Users, peek.assigned_to.clone()),
                (Collection::Projects, peek.project_id.clone()),
            ])
            .await;

        let now = Utc::now();
        let task = self.load_task(task_id).await?;
        let task = rules::complete(task, acting_user_id, now)?;
        let user = self.load_user(&task.assigned_to).await?;
        let project = self.load_project(&task.project_id).await?;

        let task = TaskRepo::save(self.store(), &task).await?;

        let badges_before = user.badges.len();
        let user = user_rules::award_points(user, task.points, now);
        let user = UserRepo::save(self.store(), &user).await?;

        let tasks = TaskRepo::list_by_project(self.store(), &task.project_id).await?;
        let project = project_rules::after_task_completed(project, &tasks);
        let project = ProjectRepo::save(self.store(), &project).await?;

        tracing::info!(
            task_id,
            user_id = %user.id,
            project_id = %project.id,
            points = task.points,
            total_points = user.points,
            new_badges = user.badges.len() - badges_before,
            progress = project.progress,
            "Task completed"
        );
        Ok(TaskCompletion {
            task,
            user,
            project,
        })
    }

    /// Delete a task (leader only) and recompute the project's progress.
    pub async fn delete_task(&self, task_id: &str, acting_user_id: &str) -> ServiceResult<()> {
        let peek = self.load_task(task_id).await?;
        let _guard = self
            .lock([
                (Collection::Tasks, task_id.to_string()),
                (Collection::Projects, peek.project_id.clone()),
            ])
            .await;

        let task = self.load_task(task_id).await?;
        let project = self.load_project(&task.project_id).await?;
        project_rules::ensure_leader(&project, acting_user_id, "delete tasks")?;

        TaskRepo::delete(self.store(), task_id).await?;
        let tasks = TaskRepo::list_by_project(self.store(), &project.id).await?;
        let project = project_rules::with_progress(project, &tasks);
        ProjectRepo::save(self.store(), &project).await?;

        tracing::info!(task_id, project_id = %project.id, "Task deleted");
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Extension requests
    // -----------------------------------------------------------------------

    pub async fn request_extension(
        &self,
        task_id: &str,
        requester_id: &str,
        new_deadline: Date,
        reason: &str,
    ) -> ServiceResult<Task> {
        let _guard = self.lock([(Collection::Tasks, task_id.to_string())]).await;
        let task = self.load_task(task_id).await?;
        let task = rules::request_extension(task, requester_id, new_deadline, reason, Utc::now())?;
        let task = TaskRepo::save(self.store(), &task).await?;
        tracing::info!(task_id, requester_id, %new_deadline, "Extension requested");
        Ok(task)
    }

    pub async fn approve_extension(
        &self,
        task_id: &str,
        request_id: &str,
        acting_user_id: &str,
    ) -> ServiceResult<Task> {
        self.decide_extension(task_id, request_id, acting_user_id, Decision::Approve)
            .await
    }

    pub async fn reject_extension(
        &self,
        task_id: &str,
        request_id: &str,
        acting_user_id: &str,
    ) -> ServiceResult<Task> {
        self.decide_extension(task_id, request_id, acting_user_id, Decision::Reject)
            .await
    }

    async fn decide_extension(
        &self,
        task_id: &str,
        request_id: &str,
        acting_user_id: &str,
        decision: Decision,
    ) -> ServiceResult<Task> {
        let _guard = self.lock([(Collection::Tasks, task_id.to_string())]).await;
        let task = self.load_task(task_id).await?;
        let project = self.load_project(&task.project_id).await?;
        let task = rules::decide_extension(task, &project, request_id, acting_user_id, decision)?;
        let task = TaskRepo::save(self.store(), &task).await?;
        tracing::info!(task_id, request_id, ?decision, "Extension request decided");
        Ok(task)
    }
}
