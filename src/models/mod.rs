//! Core data models for TaskVault

pub mod credential;
pub mod record;

pub use credential::Credential;
pub use record::{Objective, Task, UserRecord};
