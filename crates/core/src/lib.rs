//! HiveMind domain core.
//!
//! Entity types, status enums, and the pure transition rules for projects,
//! tasks, and requests. Nothing in here performs I/O, so the storage and
//! HTTP layers can share the same rules and tests can exercise them directly.

pub mod badges;
pub mod error;
pub mod lifecycle;
pub mod models;
pub mod progress;
pub mod search;
pub mod status;
pub mod types;
pub mod validation;
