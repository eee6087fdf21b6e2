//! prereq - Fluent requirement checks for host-managed components.
//!
//! A component registers its preconditions (minimum runtime or platform
//! version, required classes and functions, active sibling components) on a
//! [`Checker`](requirements::Checker). The checker evaluates them on demand,
//! renders an HTML notice listing the unmet ones, and asks the host to
//! deactivate the component when anything fails.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Manifest and host snapshot loading and validation
//! - [`error`] - Error types and result aliases
//! - [`host`] - Host platform collaborators and lifecycle hooks
//! - [`requirements`] - Requirements, the checker, and version comparison
//! - [`ui`] - Terminal output
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use prereq::host::StaticHost;
//! use prereq::requirements::Checker;
//!
//! let host = Arc::new(StaticHost::default());
//! let mut checker = Checker::make("My Plugin", "my-plugin/my-plugin.php", host);
//! checker
//!     .add_check(|| true, "Always fine")
//!     .add_check(|| "", "Empty strings are falsy");
//!
//! assert!(!checker.requirements_met());
//! assert_eq!(checker.unmet_messages(), vec!["Empty strings are falsy"]);
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod host;
pub mod requirements;
pub mod ui;

pub use error::{PrereqError, Result};
