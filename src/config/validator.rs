//! Manifest validation rules.
//!
//! - `name` and `target` must be non-empty
//! - every requirement field must be non-empty
//! - version requirements must contain a numeric component

use crate::config::schema::{Manifest, RequirementConfig};
use crate::error::{PrereqError, Result};
use crate::requirements::Version;

/// Validation error with context.
#[derive(Debug, Clone)]
pub struct ValidationError {
    /// Rule identifier
    pub rule: String,
    /// Human-readable error message
    pub message: String,
    /// Zero-based index of the offending requirement, if any
    pub requirement: Option<usize>,
}

/// Validate a manifest and return all errors.
///
/// Collects every problem rather than stopping at the first one.
pub fn validate_manifest(manifest: &Manifest) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if manifest.name.trim().is_empty() {
        errors.push(ValidationError {
            rule: "missing-name".to_string(),
            message: "Manifest 'name' must not be empty".to_string(),
            requirement: None,
        });
    }

    if manifest.target.trim().is_empty() {
        errors.push(ValidationError {
            rule: "missing-target".to_string(),
            message: "Manifest 'target' must not be empty".to_string(),
            requirement: None,
        });
    }

    for (index, req) in manifest.requirements.iter().enumerate() {
        errors.extend(validate_requirement(index, req));
    }

    errors
}

fn validate_requirement(index: usize, req: &RequirementConfig) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    let mut require = |field: &str, value: &str| {
        if value.trim().is_empty() {
            errors.push(ValidationError {
                rule: "empty-field".to_string(),
                message: format!(
                    "Requirement {} ({}) has an empty '{}'",
                    index + 1,
                    req.kind(),
                    field
                ),
                requirement: Some(index),
            });
        }
    };

    match req {
        RequirementConfig::ClassExists { name } | RequirementConfig::FunctionExists { name } => {
            require("name", name.as_str());
        }
        RequirementConfig::RuntimeAtLeast { version }
        | RequirementConfig::PlatformAtLeast { version } => {
            require("version", version.as_str());
        }
        RequirementConfig::SiblingActive { id, name } => {
            require("id", id.as_str());
            require("name", name.as_str());
        }
    }

    if let RequirementConfig::RuntimeAtLeast { version }
    | RequirementConfig::PlatformAtLeast { version } = req
    {
        if !version.trim().is_empty() && Version::parse(version).components().is_empty() {
            errors.push(ValidationError {
                rule: "invalid-version".to_string(),
                message: format!(
                    "Requirement {} ({}) has no numeric version in '{}'",
                    index + 1,
                    req.kind(),
                    version
                ),
                requirement: Some(index),
            });
        }
    }

    errors
}

/// Validate a manifest, folding every error into one `PrereqError`.
pub fn validate(manifest: &Manifest) -> Result<()> {
    let errors = validate_manifest(manifest);
    if errors.is_empty() {
        return Ok(());
    }

    let message = errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ");
    Err(PrereqError::ManifestValidationError { message })
}
