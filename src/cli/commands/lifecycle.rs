//! Lifecycle command implementation.
//!
//! The `prereq lifecycle` command registers the checker's hooks, fires the
//! init point and then the render point, and prints what the render hooks
//! wrote.

use std::io;
use std::rc::Rc;

use crate::config::ConfigPaths;
use crate::error::Result;
use crate::host::{HookPoint, HookRegistry};
use crate::ui::UserInterface;

use super::context::CheckContext;
use super::dispatcher::{Command, CommandResult};

/// The lifecycle command implementation.
pub struct LifecycleCommand {
    paths: ConfigPaths,
}

impl LifecycleCommand {
    /// Create a new lifecycle command.
    pub fn new(paths: &ConfigPaths) -> Self {
        Self {
            paths: paths.clone(),
        }
    }
}

impl Command for LifecycleCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let Some(ctx) = CheckContext::load_or_report(&self.paths, ui)? else {
            return Ok(CommandResult::failure(2));
        };

        let target = ctx.checker.target().to_string();
        let checker = Rc::new(ctx.checker);
        let mut registry = HookRegistry::new();
        checker.register_for_lifecycle_hooks(&mut registry);

        registry.fire(HookPoint::Init, &mut io::sink())?;

        let mut rendered = Vec::new();
        registry.fire(HookPoint::Render, &mut rendered)?;
        let rendered = String::from_utf8_lossy(&rendered);
        if !rendered.is_empty() {
            ui.raw(&format!("{}\n", rendered));
        }

        if ctx.host.is_deactivated(&target) {
            Ok(CommandResult::failure(1))
        } else {
            Ok(CommandResult::success())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::MockUI;
    use std::fs;
    use tempfile::TempDir;

    fn run(manifest: &str) -> (CommandResult, MockUI) {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("reqs.yml");
        fs::write(&path, manifest).unwrap();

        let paths = ConfigPaths::resolve(temp.path(), Some(&path), None);
        let mut ui = MockUI::new();
        let result = LifecycleCommand::new(&paths).execute(&mut ui).unwrap();
        (result, ui)
    }

    #[test]
    fn unmet_requirements_deactivate_and_render() {
        let (result, ui) = run(
            "name: Some Plugin\ntarget: p.php\nrequirements:\n  - kind: platform_at_least\n    version: \"999\"\n",
        );

        assert_eq!(result.exit_code, 1);
        assert_eq!(
            ui.raw_output(),
            "<div class=\"notice notice-error\"><p>Some Plugin deactivated: prereq 999 or newer is required</p></div>\n"
        );
    }

    #[test]
    fn met_requirements_render_nothing() {
        let (result, ui) = run(
            "name: Some Plugin\ntarget: p.php\nrequirements:\n  - kind: platform_at_least\n    version: \"0.1\"\n",
        );

        assert!(result.success);
        assert_eq!(ui.raw_output(), "");
    }
}
