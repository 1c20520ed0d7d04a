//! TaskVault - Console-based objective and task tracker
//!
//! This library provides the core functionality for TaskVault: file-backed
//! persistence of per-user objective/task records with an optional toy
//! stream cipher for at-rest obfuscation. The cipher is keyed by the user's
//! password and is an obfuscation layer, not a security boundary.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Storage-root path management
//! - `error`: Custom error types
//! - `models`: Core data models (records, objectives, tasks, credentials)
//! - `crypto`: Stream cipher variants and passphrase handling
//! - `storage`: Text file storage layer and the per-user record store
//! - `services`: Business logic layer (objective/task/user CRUD)
//! - `display`: Console page formatting
//! - `cli`: Interactive session loop
//!
//! # Example
//!
//! ```rust,ignore
//! use taskvault::config::VaultPaths;
//! use taskvault::models::Credential;
//! use taskvault::services::ObjectiveService;
//! use taskvault::storage::UserStore;
//!
//! let store = UserStore::new(VaultPaths::new()?);
//! let cred = Credential::new("alice", Some("hunter2".into()));
//! let record = ObjectiveService::new(&store).add(&cred, "Gym")?;
//! ```

pub mod cli;
pub mod config;
pub mod crypto;
pub mod display;
pub mod error;
pub mod models;
pub mod services;
pub mod storage;

pub use error::{VaultError, VaultResult};
