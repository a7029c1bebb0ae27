//! # Error Types
//!
//! Structured error types for fence_core. The engine sanitizes most inputs
//! by clamping, so errors are reserved for inputs that cannot be clamped
//! into something meaningful (a zero post spacing, a height the material is
//! not sold in) and for project file I/O.
//!
//! ## Example
//!
//! ```rust
//! use fence_core::errors::{FenceError, FenceResult};
//!
//! fn validate_spacing(spacing_ft: f64) -> FenceResult<()> {
//!     if spacing_ft <= 0.0 {
//!         return Err(FenceError::InvalidInput {
//!             field: "post_spacing_ft".to_string(),
//!             value: spacing_ft.to_string(),
//!             reason: "Spacing must be positive".to_string(),
//!         });
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for fence_core operations
pub type FenceResult<T> = Result<T, FenceError>;

/// Structured error type for takeoff and project file operations.
///
/// Each variant carries enough context for a caller to report the problem
/// against the offending field.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum FenceError {
    /// An input value is invalid and cannot be clamped
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// Height is not stocked for the selected material
    #[error("Unsupported height for {material}: {height_ft} ft (allowed: {allowed})")]
    UnsupportedHeight {
        material: String,
        height_ft: u32,
        allowed: String,
    },

    /// File I/O error
    #[error("File error: {operation} on '{path}' - {reason}")]
    FileError {
        operation: String,
        path: String,
        reason: String,
    },

    /// File is locked by another user/process
    #[error("File locked: '{path}' is locked by {locked_by} since {locked_at}")]
    FileLocked {
        path: String,
        locked_by: String,
        locked_at: String,
    },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },

    /// Schema version mismatch
    #[error("Version mismatch: file version {file_version}, expected {expected_version}")]
    VersionMismatch {
        file_version: String,
        expected_version: String,
    },
}

impl FenceError {
    /// Create an InvalidInput error
    pub fn invalid_input(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        FenceError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create an UnsupportedHeight error listing the allowed heights
    pub fn unsupported_height(material: impl Into<String>, height_ft: u32, allowed: &[u32]) -> Self {
        let allowed = allowed
            .iter()
            .map(|h| h.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        FenceError::UnsupportedHeight {
            material: material.into(),
            height_ft,
            allowed,
        }
    }

    /// Create a FileError
    pub fn file_error(operation: impl Into<String>, path: impl Into<String>, reason: impl Into<String>) -> Self {
        FenceError::FileError {
            operation: operation.into(),
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create a FileLocked error
    pub fn file_locked(path: impl Into<String>, locked_by: impl Into<String>, locked_at: impl Into<String>) -> Self {
        FenceError::FileLocked {
            path: path.into(),
            locked_by: locked_by.into(),
            locked_at: locked_at.into(),
        }
    }

    /// Check if this is a recoverable error (e.g., can retry)
    pub fn is_recoverable(&self) -> bool {
        matches!(self, FenceError::FileLocked { .. })
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            FenceError::InvalidInput { .. } => "INVALID_INPUT",
            FenceError::UnsupportedHeight { .. } => "UNSUPPORTED_HEIGHT",
            FenceError::FileError { .. } => "FILE_ERROR",
            FenceError::FileLocked { .. } => "FILE_LOCKED",
            FenceError::SerializationError { .. } => "SERIALIZATION_ERROR",
            FenceError::VersionMismatch { .. } => "VERSION_MISMATCH",
        }
    }
}

impl From<serde_json::Error> for FenceError {
    fn from(e: serde_json::Error) -> Self {
        FenceError::SerializationError {
            reason: e.to_string(),
        }
    }
}
