//! Path management for TaskVault
//!
//! Provides XDG-compliant path resolution for the storage root.
//!
//! ## Path Resolution Order
//!
//! 1. `TASKVAULT_DATA_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/taskvault` or `~/.config/taskvault`
//! 3. Windows: `%APPDATA%\taskvault`

use std::path::PathBuf;

use crate::error::VaultError;

/// Manages all paths used by TaskVault
#[derive(Debug, Clone)]
pub struct VaultPaths {
    /// Base directory for all TaskVault data
    base_dir: PathBuf,
}

impl VaultPaths {
    /// Create a new VaultPaths instance
    ///
    /// Path resolution:
    /// 1. `TASKVAULT_DATA_DIR` env var (explicit override)
    /// 2. Unix: `$XDG_CONFIG_HOME/taskvault` or `~/.config/taskvault`
    /// 3. Windows: `%APPDATA%\taskvault`
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, VaultError> {
        let base_dir = if let Ok(custom) = std::env::var("TASKVAULT_DATA_DIR") {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create VaultPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory (~/.config/taskvault/ or equivalent)
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the directory holding per-user record files
    pub fn users_dir(&self) -> PathBuf {
        self.base_dir.join("users")
    }

    /// Get the record file path for a user name
    ///
    /// One file per user; the file name tracks the record's current
    /// `user_name` field.
    pub fn user_file(&self, user_name: &str) -> PathBuf {
        self.users_dir().join(format!("{}.txt", user_name))
    }

    /// Ensure all required directories exist
    pub fn ensure_directories(&self) -> Result<(), VaultError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| VaultError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.users_dir())
            .map_err(|e| VaultError::Io(format!("Failed to create users directory: {}", e)))?;

        Ok(())
    }
}

/// Resolve the default data directory path based on platform
#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, VaultError> {
    // Unix (Linux/macOS): Use XDG_CONFIG_HOME if set, otherwise ~/.config
    let config_base = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let home = std::env::var("HOME").expect("HOME environment variable not set");
            PathBuf::from(home).join(".config")
        });
    Ok(config_base.join("taskvault"))
}

/// Resolve the default data directory path based on platform
#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, VaultError> {
    // Windows: Use APPDATA
    let appdata = std::env::var("APPDATA")
        .map_err(|_| VaultError::Config("Could not determine APPDATA directory".into()))?;
    Ok(PathBuf::from(appdata).join("taskvault"))
}
