//! Manifest and host snapshot discovery and loading.
//!
//! Both files live in a `.prereq/` directory under the project root unless
//! an explicit path overrides them.

use crate::config::schema::{HostSnapshot, Manifest};
use crate::error::{PrereqError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Directory holding prereq files inside a project.
pub const PREREQ_DIR: &str = ".prereq";

/// Manifest file name inside [`PREREQ_DIR`].
pub const MANIFEST_FILE: &str = "requirements.yml";

/// Host snapshot file name inside [`PREREQ_DIR`].
pub const HOST_FILE: &str = "host.yml";

/// Resolved locations of the files prereq reads.
#[derive(Debug, Clone)]
pub struct ConfigPaths {
    /// Requirement manifest
    pub manifest: PathBuf,

    /// Host snapshot; `None` means use the default snapshot
    pub host: Option<PathBuf>,
}

impl ConfigPaths {
    /// Resolve paths for `project_root`, honoring explicit overrides.
    ///
    /// An explicit host path is always used; the default host path is only
    /// used when the file exists.
    pub fn resolve(
        project_root: &Path,
        manifest_override: Option<&Path>,
        host_override: Option<&Path>,
    ) -> Self {
        let manifest = manifest_override
            .map(Path::to_path_buf)
            .unwrap_or_else(|| project_root.join(PREREQ_DIR).join(MANIFEST_FILE));

        let host = match host_override {
            Some(path) => Some(path.to_path_buf()),
            None => {
                let path = project_root.join(PREREQ_DIR).join(HOST_FILE);
                path.exists().then_some(path)
            }
        };

        Self { manifest, host }
    }
}

/// Load and parse a requirement manifest.
///
/// # Errors
///
/// Returns `ManifestNotFound` if the file doesn't exist.
/// Returns `ManifestParseError` if the YAML is invalid.
pub fn load_manifest(path: &Path) -> Result<Manifest> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            PrereqError::ManifestNotFound {
                path: path.to_path_buf(),
            }
        } else {
            PrereqError::Io(e)
        }
    })?;

    parse_manifest(&content, path)
}

/// Parse YAML content into a [`Manifest`].
pub fn parse_manifest(content: &str, source_path: &Path) -> Result<Manifest> {
    serde_yaml::from_str(content).map_err(|e| PrereqError::ManifestParseError {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Load and parse a host snapshot.
///
/// # Errors
///
/// Returns `HostSnapshotNotFound` if the file doesn't exist.
/// Returns `HostSnapshotParseError` if the YAML is invalid.
pub fn load_host_snapshot(path: &Path) -> Result<HostSnapshot> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            PrereqError::HostSnapshotNotFound {
                path: path.to_path_buf(),
            }
        } else {
            PrereqError::Io(e)
        }
    })?;

    // An empty file means "all defaults".
    if content.trim().is_empty() {
        return Ok(HostSnapshot::default());
    }

    serde_yaml::from_str(&content).map_err(|e| PrereqError::HostSnapshotParseError {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Load the manifest and host snapshot described by `paths`.
pub fn load(paths: &ConfigPaths) -> Result<(Manifest, HostSnapshot)> {
    let manifest = load_manifest(&paths.manifest)?;
    let snapshot = match &paths.host {
        Some(path) => load_host_snapshot(path)?,
        None => HostSnapshot::default(),
    };

    tracing::debug!(
        "Loaded manifest {} ({} requirements)",
        paths.manifest.display(),
        manifest.requirements.len()
    );

    Ok((manifest, snapshot))
}
