//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results. Commands are
//! routed by [`CommandDispatcher`].
//!
//! Exit codes: `0` when every requirement is met, `1` when any is unmet
//! (or the target was deactivated), `2` when configuration cannot be loaded.

pub mod check;
pub mod context;
pub mod deactivate;
pub mod dispatcher;
pub mod lifecycle;
pub mod notice;

pub use context::CheckContext;
pub use dispatcher::{Command, CommandDispatcher, CommandResult};
