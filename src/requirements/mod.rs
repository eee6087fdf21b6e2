//! Requirement definitions and checking.
//!
//! A [`Checker`] owns an ordered list of [`Requirement`]s for one host
//! component, evaluates them, and reports or deactivates on failure.
//!
//! # Modules
//!
//! - [`checker`] - The checker and its builder methods
//! - [`notice`] - HTML notice markup and escaping
//! - [`requirement`] - The requirement trait and closure-backed variant
//! - [`truthy`] - Coercion of predicate results to met / not met
//! - [`version`] - Lenient dotted version comparison

pub mod checker;
pub mod notice;
pub mod requirement;
pub mod truthy;
pub mod version;

pub use checker::{CheckReport, Checker, RequirementResult};
pub use notice::esc_html;
pub use requirement::{ClosureRequirement, Requirement};
pub use truthy::Truthy;
pub use version::Version;
