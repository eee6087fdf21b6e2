//! Notice command implementation.
//!
//! The `prereq notice` command prints the HTML error notice. It prints
//! nothing when every requirement is met.

use crate::config::ConfigPaths;
use crate::error::Result;
use crate::ui::UserInterface;

use super::context::CheckContext;
use super::dispatcher::{Command, CommandResult};

/// The notice command implementation.
pub struct NoticeCommand {
    paths: ConfigPaths,
}

impl NoticeCommand {
    /// Create a new notice command.
    pub fn new(paths: &ConfigPaths) -> Self {
        Self {
            paths: paths.clone(),
        }
    }
}

impl Command for NoticeCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let Some(ctx) = CheckContext::load_or_report(&self.paths, ui)? else {
            return Ok(CommandResult::failure(2));
        };

        let notice = ctx.checker.notice();
        if !notice.is_empty() {
            ui.raw(&format!("{}\n", notice));
        }

        Ok(CommandResult::success())
    }
}
