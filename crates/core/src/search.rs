//! Project listing filters used by the community feed and user pages.

use serde::Serialize;

use crate::models::Project;

/// Case-insensitive match of `query` against a project's name, description,
/// and tags. An empty query matches everything.
pub fn matches_query(project: &Project, query: &str) -> bool {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return true;
    }
    project.name.to_lowercase().contains(&needle)
        || project.description.to_lowercase().contains(&needle)
        || project
            .tags
            .iter()
            .any(|tag| tag.to_lowercase().contains(&needle))
}

/// Projects a user leads or belongs to, split into the two groups shown on
/// the projects page.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct UserProjects {
    pub leading: Vec<Project>,
    pub collaborating: Vec<Project>,
}

impl UserProjects {
    pub fn split(projects: impl IntoIterator<Item = Project>, user_id: &str) -> Self {
        let mut out = Self::default();
        for project in projects {
            if project.is_leader(user_id) {
                out.leading.push(project);
            } else if project.is_team_member(user_id) {
                out.collaborating.push(project);
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;
    use crate::models::{Likes, TeamMember};
    use crate::status::ProjectStatus;

    fn project(id: &str, leader: &str, members: &[&str]) -> Project {
        Project {
            id: id.into(),
            name: format!("Project {id}"),
            description: "A hive of activity".into(),
            github_link: String::new(),
            leader_id: leader.into(),
            team_members: members
                .iter()
                .map(|m| TeamMember {
                    user_id: m.to_string(),
                    role: "Dev".into(),
                })
                .collect(),
            status: ProjectStatus::Planning,
            progress: 0,
            created_date: Utc::now(),
            completed_date: None,
            tags: vec!["Rust".into(), "open-source".into()],
            is_public: true,
            likes: Likes::default(),
            comments: Vec::new(),
            contribution_requests: Vec::new(),
        }
    }

    #[test]
    fn query_matches_name_description_and_tags() {
        let p = project("alpha", "u1", &[]);
        assert!(matches_query(&p, "ALPHA"));
        assert!(matches_query(&p, "hive"));
        assert!(matches_query(&p, "rust"));
        assert!(matches_query(&p, ""));
        assert!(!matches_query(&p, "python"));
    }

    #[test]
    fn split_separates_led_and_collaborating() {
        let projects = vec![
            project("a", "u1", &[]),
            project("b", "u2", &["u1"]),
            project("c", "u3", &["u4"]),
        ];
        let split = UserProjects::split(projects, "u1");
        assert_eq!(split.leading.len(), 1);
        assert_eq!(split.leading[0].id, "a");
        assert_eq!(split.collaborating.len(), 1);
        assert_eq!(split.collaborating[0].id, "b");
    }
}
