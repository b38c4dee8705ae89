//! Entity documents.
//!
//! Each submodule contains:
//! - A `Serialize` + `Deserialize` entity struct matching the stored JSON
//!   document (camelCase field names)
//! - The `Deserialize` input DTOs used to create or change that entity

pub mod project;
pub mod session;
pub mod task;
pub mod user;

pub use project::{Comment, ContributionRequest, Likes, Project, TeamMember};
pub use session::Session;
pub use task::{ExtensionRequest, Task};
pub use user::{Badge, User, UserProfile};
