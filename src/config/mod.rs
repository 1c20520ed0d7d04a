//! Configuration and path management for TaskVault

pub mod paths;

pub use paths::VaultPaths;
