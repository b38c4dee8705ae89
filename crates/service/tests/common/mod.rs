#![allow(dead_code)]

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use hivemind_core::models::project::CreateProject;
use hivemind_core::models::task::CreateTask;
use hivemind_core::models::{Project, Task, TeamMember, User};
use hivemind_db::repositories::UserRepo;
use hivemind_db::{Collection, DataStore, Document, MemoryStore, StoreResult};
use hivemind_service::DomainService;

pub fn service() -> DomainService {
    DomainService::new(Arc::new(MemoryStore::new()))
}

/// A service whose store yields to the scheduler after every read and
/// before every write, so unlocked read-modify-write cycles interleave.
pub fn yielding_service() -> DomainService {
    DomainService::new(Arc::new(YieldingStore(MemoryStore::new())))
}

struct YieldingStore(MemoryStore);

#[async_trait]
impl DataStore for YieldingStore {
    fn backend_tag(&self) -> &'static str {
        "yielding"
    }

    async fn list_all(&self, collection: Collection) -> StoreResult<Vec<Document>> {
        let docs = self.0.list_all(collection).await;
        tokio::task::yield_now().await;
        docs
    }

    async fn get_by_id(&self, collection: Collection, id: &str) -> StoreResult<Option<Document>> {
        let doc = self.0.get_by_id(collection, id).await;
        tokio::task::yield_now().await;
        doc
    }

    async fn upsert(&self, collection: Collection, document: Document) -> StoreResult<Document> {
        tokio::task::yield_now().await;
        self.0.upsert(collection, document).await
    }

    async fn delete(&self, collection: Collection, id: &str) -> StoreResult<bool> {
        tokio::task::yield_now().await;
        self.0.delete(collection, id).await
    }

    async fn get_singleton(&self, collection: Collection) -> StoreResult<Option<Document>> {
        self.0.get_singleton(collection).await
    }

    async fn set_singleton(&self, collection: Collection, document: Document) -> StoreResult<()> {
        self.0.set_singleton(collection, document).await
    }

    async fn clear_singleton(&self, collection: Collection) -> StoreResult<()> {
        self.0.clear_singleton(collection).await
    }
}

/// Insert a user directly, skipping registration and password hashing.
pub async fn user(service: &DomainService, id: &str) -> User {
    let user = User {
        id: id.into(),
        email: format!("{id}@example.com"),
        password_hash: String::new(),
        name: id.to_string(),
        bio: String::new(),
        points: 0,
        badges: Vec::new(),
        joined_date: Utc::now(),
    };
    UserRepo::save(service.store(), &user).await.unwrap()
}

/// A project led by `leader` with `members` on the team.
pub async fn project(service: &DomainService, leader: &str, members: &[&str]) -> Project {
    service
        .create_project(
            leader,
            CreateProject {
                name: "HiveMind".into(),
                description: "Collaborative project tracker".into(),
                tags: vec!["rust".into()],
                team_members: members
                    .iter()
                    .map(|m| TeamMember {
                        user_id: m.to_string(),
                        role: "Developer".into(),
                    })
                    .collect(),
                ..Default::default()
            },
        )
        .await
        .unwrap()
}

pub async fn task(
    service: &DomainService,
    project: &Project,
    assignee: &str,
    points: Option<u32>,
) -> Task {
    service
        .create_task(
            &project.id,
            &project.leader_id,
            CreateTask {
                title: "Ship it".into(),
                description: String::new(),
                assigned_to: assignee.into(),
                deadline: chrono::NaiveDate::from_ymd_opt(2026, 5, 1),
                points,
            },
        )
        .await
        .unwrap()
}
