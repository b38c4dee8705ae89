//! Project operations: creation, edits, membership, likes, comments, and
//! contribution requests.

use chrono::Utc;
use hivemind_core::lifecycle::{project as rules, Decision};
use hivemind_core::models::project::{CreateProject, UpdateProject};
use hivemind_core::models::Project;
use hivemind_core::status::ProjectStatus;
use hivemind_db::repositories::ProjectRepo;
use hivemind_db::Collection;
use serde::Serialize;

use crate::{DomainService, ServiceResult};

/// Result of [`DomainService::toggle_like`].
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LikeOutcome {
    pub project: Project,
    /// Whether the user likes the project after the toggle.
    pub liked: bool,
}

impl DomainService {
    /// Create a project led by `leader_id`. Initial team members must exist.
    pub async fn create_project(
        &self,
        leader_id: &str,
        input: CreateProject,
    ) -> ServiceResult<Project> {
        self.load_user(leader_id).await?;
        for member in &input.team_members {
            if member.user_id != leader_id {
                self.load_user(&member.user_id).await?;
            }
        }
        let project = rules::new_project(leader_id, input, Utc::now())?;
        let project = ProjectRepo::save(self.store(), &project).await?;
        tracing::info!(project_id = %project.id, leader_id, "Project created");
        Ok(project)
    }

    pub async fn update_project(
        &self,
        project_id: &str,
        acting_user_id: &str,
        changes: UpdateProject,
    ) -> ServiceResult<Project> {
        let _guard = self.lock([(Collection::Projects, project_id.to_string())]).await;
        let project = self.load_project(project_id).await?;
        let project = rules::update_details(project, acting_user_id, changes)?;
        let project = ProjectRepo::save(self.store(), &project).await?;
        tracing::info!(project_id, "Project updated");
        Ok(project)
    }

    pub async fn set_project_status(
        &self,
        project_id: &str,
        acting_user_id: &str,
        status: ProjectStatus,
    ) -> ServiceResult<Project> {
        let _guard = self.lock([(Collection::Projects, project_id.to_string())]).await;
        let project = self.load_project(project_id).await?;
        let from = project.status;
        let project = rules::set_status(project, acting_user_id, status, Utc::now())?;
        let project = ProjectRepo::save(self.store(), &project).await?;
        tracing::info!(project_id, %from, to = %status, "Project status changed");
        Ok(project)
    }

    pub async fn remove_team_member(
        &self,
        project_id: &str,
        acting_user_id: &str,
        member_id: &str,
    ) -> ServiceResult<Project> {
        let _guard = self.lock([(Collection::Projects, project_id.to_string())]).await;
        let project = self.load_project(project_id).await?;
        let project = rules::remove_member(project, acting_user_id, member_id)?;
        let project = ProjectRepo::save(self.store(), &project).await?;
        tracing::info!(project_id, member_id, "Team member removed");
        Ok(project)
    }

    /// Delete a project. Its tasks are left in place.
    pub async fn delete_project(&self, project_id: &str, acting_user_id: &str) -> ServiceResult<()> {
        let _guard = self.lock([(Collection::Projects, project_id.to_string())]).await;
        let project = self.load_project(project_id).await?;
        rules::ensure_leader(&project, acting_user_id, "delete the project")?;
        ProjectRepo::delete(self.store(), project_id).await?;
        tracing::info!(project_id, "Project deleted");
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Likes and comments
    // -----------------------------------------------------------------------

    pub async fn toggle_like(&self, project_id: &str, user_id: &str) -> ServiceResult<LikeOutcome> {
        let _guard = self.lock([(Collection::Projects, project_id.to_string())]).await;
        self.load_user(user_id).await?;
        let project = self.load_project(project_id).await?;
        let (project, liked) = rules::toggle_like(project, user_id);
        let project = ProjectRepo::save(self.store(), &project).await?;
        tracing::info!(project_id, user_id, liked, "Like toggled");
        Ok(LikeOutcome { project, liked })
    }

    /// Like or unlike by intent. Repeating the same intent changes nothing.
    pub async fn set_like(
        &self,
        project_id: &str,
        user_id: &str,
        liked: bool,
    ) -> ServiceResult<Project> {
        let _guard = self.lock([(Collection::Projects, project_id.to_string())]).await;
        self.load_user(user_id).await?;
        let project = self.load_project(project_id).await?;
        if project.likes.contains(user_id) == liked {
            return Ok(project);
        }
        let project = rules::set_like(project, user_id, liked);
        let project = ProjectRepo::save(self.store(), &project).await?;
        tracing::info!(project_id, user_id, liked, "Like set");
        Ok(project)
    }

    pub async fn add_comment(
        &self,
        project_id: &str,
        user_id: &str,
        content: &str,
    ) -> ServiceResult<Project> {
        let _guard = self.lock([(Collection::Projects, project_id.to_string())]).await;
        self.load_user(user_id).await?;
        let project = self.load_project(project_id).await?;
        let project = rules::add_comment(project, user_id, content, Utc::now())?;
        let project = ProjectRepo::save(self.store(), &project).await?;
        tracing::info!(project_id, user_id, "Comment added");
        Ok(project)
    }

    // -----------------------------------------------------------------------
    // Contribution requests
    // -----------------------------------------------------------------------

    pub async fn request_contribution(
        &self,
        project_id: &str,
        requester_id: &str,
        message: &str,
    ) -> ServiceResult<Project> {
        let _guard = self.lock([(Collection::Projects, project_id.to_string())]).await;
        self.load_user(requester_id).await?;
        let project = self.load_project(project_id).await?;
        let project = rules::request_contribution(project, requester_id, message, Utc::now())?;
        let project = ProjectRepo::save(self.store(), &project).await?;
        tracing::info!(project_id, requester_id, "Contribution requested");
        Ok(project)
    }

    pub async fn approve_contribution(
        &self,
        project_id: &str,
        request_id: &str,
        acting_user_id: &str,
    ) -> ServiceResult<Project> {
        self.decide_contribution(project_id, request_id, acting_user_id, Decision::Approve)
            .await
    }

    pub async fn reject_contribution(
        &self,
        project_id: &str,
        request_id: &str,
        acting_user_id: &str,
    ) -> ServiceResult<Project> {
        self.decide_contribution(project_id, request_id, acting_user_id, Decision::Reject)
            .await
    }

    async fn decide_contribution(
        &self,
        project_id: &str,
        request_id: &str,
        acting_user_id: &str,
        decision: Decision,
    ) -> ServiceResult<Project> {
        let _guard = self.lock([(Collection::Projects, project_id.to_string())]).await;
        let project = self.load_project(project_id).await?;
        let project = rules::decide_contribution(project, request_id, acting_user_id, decision)?;
        let project = ProjectRepo::save(self.store(), &project).await?;
        tracing::info!(project_id, request_id, ?decision, "Contribution request decided");
        Ok(project)
    }
}
