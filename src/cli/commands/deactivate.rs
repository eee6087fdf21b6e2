//! Deactivate command implementation.
//!
//! The `prereq deactivate` command asks the host to deactivate the target
//! when any requirement is unmet, then reports what the host recorded.

use crate::config::ConfigPaths;
use crate::error::Result;
use crate::ui::UserInterface;

use super::context::CheckContext;
use super::dispatcher::{Command, CommandResult};

/// The deactivate command implementation.
pub struct DeactivateCommand {
    paths: ConfigPaths,
}

impl DeactivateCommand {
    /// Create a new deactivate command.
    pub fn new(paths: &ConfigPaths) -> Self {
        Self {
            paths: paths.clone(),
        }
    }
}

impl Command for DeactivateCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let Some(ctx) = CheckContext::load_or_report(&self.paths, ui)? else {
            return Ok(CommandResult::failure(2));
        };

        let signal_was_pending = ctx.host.activation_signal_pending();

        if !ctx.checker.deactivate() {
            ui.success(&format!(
                "{} meets all requirements; nothing to deactivate",
                ctx.checker.name()
            ));
            return Ok(CommandResult::success());
        }

        for message in ctx.checker.unmet_messages() {
            ui.message(&format!("  {}", message));
        }
        ui.warning(&format!("Deactivated {}", ctx.checker.target()));
        if signal_was_pending && !ctx.host.activation_signal_pending() {
            ui.message("Suppressed pending activation notice");
        }

        Ok(CommandResult::failure(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::MockUI;
    use std::fs;
    use tempfile::TempDir;

    fn run(manifest: &str, host: &str) -> (CommandResult, MockUI) {
        let temp = TempDir::new().unwrap();
        let manifest_path = temp.path().join("reqs.yml");
        let host_path = temp.path().join("host.yml");
        fs::write(&manifest_path, manifest).unwrap();
        fs::write(&host_path, host).unwrap();

        let paths = ConfigPaths::resolve(temp.path(), Some(&manifest_path), Some(&host_path));
        let mut ui = MockUI::new();
        let result = DeactivateCommand::new(&paths).execute(&mut ui).unwrap();
        (result, ui)
    }

    #[test]
    fn deactivates_when_unmet() {
        let (result, ui) = run(
            "name: Some Plugin\ntarget: some-plugin/some-plugin.php\nrequirements:\n  - kind: sibling_active\n    id: woocommerce/woocommerce.php\n    name: WooCommerce\n",
            "activation_signal: true\n",
        );

        assert_eq!(result.exit_code, 1);
        assert!(ui.has_warning("Deactivated some-plugin/some-plugin.php"));
        assert!(ui.has_message("WooCommerce must be installed and active"));
        assert!(ui.has_message("Suppressed pending activation notice"));
    }

    #[test]
    fn leaves_target_alone_when_met() {
        let (result, ui) = run(
            "name: Some Plugin\ntarget: p.php\nrequirements:\n  - kind: sibling_active\n    id: woocommerce/woocommerce.php\n    name: WooCommerce\n",
            "active_components: [woocommerce/woocommerce.php]\n",
        );

        assert!(result.success);
        assert!(ui.has_success("nothing to deactivate"));
        assert!(ui.warnings().is_empty());
    }

    #[test]
    fn missing_host_file_is_an_error() {
        let temp = TempDir::new().unwrap();
        let manifest_path = temp.path().join("reqs.yml");
        fs::write(&manifest_path, "name: A\ntarget: a\n").unwrap();

        let paths = ConfigPaths::resolve(
            temp.path(),
            Some(&manifest_path),
            Some(&temp.path().join("absent.yml")),
        );
        let mut ui = MockUI::new();
        let result = DeactivateCommand::new(&paths).execute(&mut ui);
        assert!(matches!(
            result,
            Err(crate::error::PrereqError::HostSnapshotNotFound { .. })
        ));
    }
}
