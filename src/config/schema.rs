//! Configuration schema definitions.
//!
//! These structs map to the two YAML files prereq reads: the requirement
//! manifest (`.prereq/requirements.yml`) and the host snapshot
//! (`.prereq/host.yml`).

use serde::{Deserialize, Serialize};

/// Root of the requirement manifest.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manifest {
    /// Component display name used in notices
    pub name: String,

    /// Reference passed to the host when deactivating
    pub target: String,

    /// Requirements in evaluation order
    #[serde(default)]
    pub requirements: Vec<RequirementConfig>,
}

/// A single requirement entry, tagged by `kind`.
///
/// ```yaml
/// requirements:
///   - kind: runtime_at_least
///     version: "7.0"
///   - kind: sibling_active
///     id: woocommerce/woocommerce.php
///     name: WooCommerce
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RequirementConfig {
    /// A class must be registered
    ClassExists { name: String },

    /// A callable must be registered
    FunctionExists { name: String },

    /// Minimum runtime version
    RuntimeAtLeast { version: String },

    /// Minimum platform version
    PlatformAtLeast { version: String },

    /// A sibling component must be active
    SiblingActive { id: String, name: String },
}

impl RequirementConfig {
    /// The `kind` tag as written in YAML.
    pub fn kind(&self) -> &'static str {
        match self {
            RequirementConfig::ClassExists { .. } => "class_exists",
            RequirementConfig::FunctionExists { .. } => "function_exists",
            RequirementConfig::RuntimeAtLeast { .. } => "runtime_at_least",
            RequirementConfig::PlatformAtLeast { .. } => "platform_at_least",
            RequirementConfig::SiblingActive { .. } => "sibling_active",
        }
    }
}

/// Name and version of a runtime or platform.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentVersion {
    /// Display name (e.g. "PHP", "WordPress")
    pub name: String,

    /// Reported version string; suffixes are allowed
    pub version: String,
}

impl ComponentVersion {
    /// Create a name/version pair.
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
        }
    }
}

/// Observable state of a host platform.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HostSnapshot {
    /// Runtime the host runs on
    pub runtime: ComponentVersion,

    /// The hosting platform itself
    pub platform: ComponentVersion,

    /// Registered class names
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub classes: Vec<String>,

    /// Registered function names
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub functions: Vec<String>,

    /// Identifiers of active sibling components
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub active_components: Vec<String>,

    /// Whether a one-time "activated" acknowledgment is pending
    pub activation_signal: bool,
}

impl Default for HostSnapshot {
    fn default() -> Self {
        Self {
            runtime: default_runtime(),
            platform: default_platform(),
            classes: Vec::new(),
            functions: Vec::new(),
            active_components: Vec::new(),
            activation_signal: false,
        }
    }
}

fn default_runtime() -> ComponentVersion {
    ComponentVersion::new("Rust", env!("CARGO_PKG_RUST_VERSION"))
}

fn default_platform() -> ComponentVersion {
    ComponentVersion::new("prereq", env!("CARGO_PKG_VERSION"))
}
