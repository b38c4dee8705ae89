//! Read-side queries behind the community feed, project pages, and dashboard.

use hivemind_core::models::{Project, Task, UserProfile};
use hivemind_core::search::{matches_query, UserProjects};
use hivemind_core::status::ProjectStatus;
use hivemind_db::repositories::{ProjectRepo, TaskRepo, UserRepo};
use serde::Serialize;

use crate::{DomainService, ServiceResult};

/// Per-user summary shown on the dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dashboard {
    pub user_id: String,
    pub points: u64,
    pub badge_count: usize,
    pub active_tasks: usize,
    pub completed_tasks: usize,
    pub active_projects: usize,
    pub completed_projects: usize,
}

impl DomainService {
    pub async fn list_users(&self) -> ServiceResult<Vec<UserProfile>> {
        Ok(UserRepo::list(self.store())
            .await?
            .into_iter()
            .map(UserProfile::from)
            .collect())
    }

    pub async fn get_user(&self, user_id: &str) -> ServiceResult<UserProfile> {
        Ok(self.load_user(user_id).await?.into())
    }

    pub async fn list_projects(&self) -> ServiceResult<Vec<Project>> {
        Ok(ProjectRepo::list(self.store()).await?)
    }

    pub async fn get_project(&self, project_id: &str) -> ServiceResult<Project> {
        self.load_project(project_id).await
    }

    /// Public projects whose name, description, or tags match `query`.
    pub async fn public_projects(&self, query: Option<&str>) -> ServiceResult<Vec<Project>> {
        let projects = ProjectRepo::list_public(self.store()).await?;
        Ok(match query {
            Some(q) => projects.into_iter().filter(|p| matches_query(p, q)).collect(),
            None => projects,
        })
    }

    /// Projects the user leads and projects the user collaborates on.
    pub async fn projects_for_user(&self, user_id: &str) -> ServiceResult<UserProjects> {
        self.load_user(user_id).await?;
        let projects = ProjectRepo::list_for_user(self.store(), user_id).await?;
        Ok(UserProjects::split(projects, user_id))
    }

    pub async fn get_task(&self, task_id: &str) -> ServiceResult<Task> {
        self.load_task(task_id).await
    }

    pub async fn tasks_for_project(&self, project_id: &str) -> ServiceResult<Vec<Task>> {
        self.load_project(project_id).await?;
        Ok(TaskRepo::list_by_project(self.store(), project_id).await?)
    }

    pub async fn tasks_for_user(&self, user_id: &str) -> ServiceResult<Vec<Task>> {
        self.load_user(user_id).await?;
        Ok(TaskRepo::list_by_assignee(self.store(), user_id).await?)
    }

    pub async fn dashboard(&self, user_id: &str) -> ServiceResult<Dashboard> {
        let user = self.load_user(user_id).await?;
        let tasks = TaskRepo::list_by_assignee(self.store(), user_id).await?;
        let projects = ProjectRepo::list_for_user(self.store(), user_id).await?;

        let completed_tasks = tasks.iter().filter(|t| t.is_completed()).count();
        let completed_projects = projects
            .iter()
            .filter(|p| p.status == ProjectStatus::Completed)
            .count();

        Ok(Dashboard {
            user_id: user.id,
            points: user.points,
            badge_count: user.badges.len(),
            active_tasks: tasks.len() - completed_tasks,
            completed_tasks,
            active_projects: projects.len() - completed_projects,
            completed_projects,
        })
    }
}
