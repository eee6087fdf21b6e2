//! Configuration loading, parsing, and validation.
//!
//! - Schema definitions in [`schema`]
//! - File discovery and loading in [`loader`]
//! - Validation in [`validator`]
//! - Manifest-to-checker construction in [`build`]
//!
//! # Example
//!
//! ```
//! use prereq::config::{load, validate, ConfigPaths};
//! use tempfile::TempDir;
//! use std::fs;
//!
//! let temp = TempDir::new().unwrap();
//! let dir = temp.path().join(".prereq");
//! fs::create_dir_all(&dir).unwrap();
//! fs::write(dir.join("requirements.yml"), "name: Demo\ntarget: demo.php\n").unwrap();
//!
//! let paths = ConfigPaths::resolve(temp.path(), None, None);
//! let (manifest, _snapshot) = load(&paths).unwrap();
//! validate(&manifest).unwrap();
//! assert_eq!(manifest.name, "Demo");
//! ```
//!
//! # File Locations
//!
//! - Manifest: `.prereq/requirements.yml` (or `--manifest`)
//! - Host snapshot: `.prereq/host.yml` (or `--host`); defaults apply when absent

pub mod build;
pub mod loader;
pub mod schema;
pub mod validator;

pub use loader::{
    load, load_host_snapshot, load_manifest, parse_manifest, ConfigPaths, HOST_FILE,
    MANIFEST_FILE, PREREQ_DIR,
};
pub use schema::{ComponentVersion, HostSnapshot, Manifest, RequirementConfig};
pub use validator::{validate, validate_manifest, ValidationError};
