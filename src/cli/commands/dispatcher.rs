//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing CLI subcommands

use crate::cli::args::{CheckArgs, Cli, Commands};
use crate::config::ConfigPaths;
use crate::error::Result;
use crate::ui::UserInterface;

/// Trait for command implementations.
pub trait Command {
    /// Execute the command.
    ///
    /// # Arguments
    ///
    /// * `ui` - User interface for displaying output
    ///
    /// # Returns
    ///
    /// A [`CommandResult`] indicating success/failure and exit code.
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher {
    paths: ConfigPaths,
}

impl CommandDispatcher {
    /// Create a new dispatcher reading from `paths`.
    pub fn new(paths: ConfigPaths) -> Self {
        Self { paths }
    }

    /// Get the resolved config paths.
    pub fn paths(&self) -> &ConfigPaths {
        &self.paths
    }

    /// Dispatch and execute a command.
    pub fn dispatch(&self, cli: &Cli, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        match &cli.command {
            Some(Commands::Check(args)) => {
                super::check::CheckCommand::new(&self.paths, args.clone()).execute(ui)
            }
            Some(Commands::Notice) => super::notice::NoticeCommand::new(&self.paths).execute(ui),
            Some(Commands::Deactivate) => {
                super::deactivate::DeactivateCommand::new(&self.paths).execute(ui)
            }
            Some(Commands::Lifecycle) => {
                super::lifecycle::LifecycleCommand::new(&self.paths).execute(ui)
            }
            None => super::check::CheckCommand::new(&self.paths, CheckArgs::default()).execute(ui),
        }
    }
}
