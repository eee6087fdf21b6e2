//! Error types for prereq operations.
//!
//! This module defines [`PrereqError`], the error type used by the
//! configuration and CLI layers, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Unmet requirements are not errors; they surface as messages and a
//!   `false` from [`Checker::requirements_met`](crate::requirements::Checker::requirements_met)
//! - Use `PrereqError` for loading and validating manifests and host snapshots
//! - Use `anyhow::Error` (via `PrereqError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for prereq operations.
#[derive(Debug, Error)]
pub enum PrereqError {
    /// Requirement manifest not found at expected location.
    #[error("Manifest not found: {path}")]
    ManifestNotFound { path: PathBuf },

    /// Failed to parse the requirement manifest.
    #[error("Failed to parse manifest at {path}: {message}")]
    ManifestParseError { path: PathBuf, message: String },

    /// Manifest parsed but its values are invalid.
    #[error("Invalid manifest: {message}")]
    ManifestValidationError { message: String },

    /// Host snapshot not found at expected location.
    #[error("Host snapshot not found: {path}")]
    HostSnapshotNotFound { path: PathBuf },

    /// Failed to parse the host snapshot.
    #[error("Failed to parse host snapshot at {path}: {message}")]
    HostSnapshotParseError { path: PathBuf, message: String },

    /// One or more requirements are unmet.
    #[error("{name} has {count} unmet requirement(s)")]
    RequirementsNotMet { name: String, count: usize },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for prereq operations.
pub type Result<T> = std::result::Result<T, PrereqError>;
