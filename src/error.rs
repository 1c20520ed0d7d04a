//! Custom error types for TaskVault
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for TaskVault operations
#[derive(Error, Debug)]
pub enum VaultError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// Empty or otherwise degenerate cipher key
    #[error("Invalid cipher key: {0}")]
    InvalidKey(String),

    /// Cipher-level failure (e.g. input character outside the working alphabet)
    #[error("Cipher error: {0}")]
    Cipher(String),

    /// Stored content cannot be parsed into a valid record
    #[error("Deserialize error: {0}")]
    Deserialize(String),

    /// An ordinal does not address an existing objective or task
    #[error("{entity_type} ordinal {ordinal} out of range (1..={len})")]
    OutOfRange {
        entity_type: &'static str,
        ordinal: usize,
        len: usize,
    },

    /// Storage errors
    #[error("Storage error: {0}")]
    Storage(String),
}

impl VaultError {
    /// Create an out-of-range error for objectives
    pub fn objective_out_of_range(ordinal: usize, len: usize) -> Self {
        Self::OutOfRange {
            entity_type: "Objective",
            ordinal,
            len,
        }
    }

    /// Create an out-of-range error for tasks
    pub fn task_out_of_range(ordinal: usize, len: usize) -> Self {
        Self::OutOfRange {
            entity_type: "Task",
            ordinal,
            len,
        }
    }

    /// Check if this is an out-of-range error
    pub fn is_out_of_range(&self) -> bool {
        matches!(self, Self::OutOfRange { .. })
    }

    /// Check if this is a deserialize error
    pub fn is_deserialize(&self) -> bool {
        matches!(self, Self::Deserialize(_))
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for VaultError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for VaultError {
    fn from(err: serde_json::Error) -> Self {
        Self::Deserialize(err.to_string())
    }
}

/// Result type alias for TaskVault operations
pub type VaultResult<T> = Result<T, VaultError>;
