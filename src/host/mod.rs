//! Host platform collaborators.
//!
//! The checker never talks to the hosting platform directly. Everything it
//! needs (symbol lookups, version providers, the active-component list and
//! the deactivation command) goes through the [`Host`] trait, and lifecycle
//! wiring goes through [`HookRegistrar`].
//!
//! # Modules
//!
//! - [`hooks`] - Lifecycle hook points and an in-process registry
//! - [`snapshot`] - A [`Host`] backed by a static snapshot of host state

pub mod hooks;
pub mod snapshot;

pub use hooks::{hook, HookCallback, HookPoint, HookRegistrar, HookRegistry};
pub use snapshot::StaticHost;

/// Queries and commands the hosting platform provides to a checker.
///
/// Implementations that carry mutable state (the activation signal, the
/// deactivated set) use interior mutability; all methods take `&self`.
pub trait Host: Send + Sync {
    /// Whether a class/type is registered under `name`.
    fn class_exists(&self, name: &str) -> bool;

    /// Whether a callable is registered under `name`.
    fn function_exists(&self, name: &str) -> bool;

    /// Identifiers of currently active sibling components.
    fn active_components(&self) -> Vec<String>;

    /// Display name of the runtime (e.g. "PHP").
    fn runtime_name(&self) -> String;

    /// Version string reported by the runtime.
    fn runtime_version(&self) -> String;

    /// Display name of the platform (e.g. "WordPress").
    fn platform_name(&self) -> String;

    /// Version string reported by the platform.
    fn platform_version(&self) -> String;

    /// Deactivate the component identified by `target`.
    fn deactivate(&self, target: &str);

    /// Suppress the one-time "activated" acknowledgment, if one is pending.
    fn clear_activation_signal(&self);
}
