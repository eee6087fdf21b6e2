//! Check command implementation.
//!
//! The `prereq check` command evaluates every requirement and lists each
//! one as met or unmet, either as styled lines or as a JSON report.

use crate::cli::args::CheckArgs;
use crate::config::ConfigPaths;
use crate::error::{PrereqError, Result};
use crate::ui::UserInterface;

use super::context::CheckContext;
use super::dispatcher::{Command, CommandResult};

/// The check command implementation.
pub struct CheckCommand {
    paths: ConfigPaths,
    args: CheckArgs,
}

impl CheckCommand {
    /// Create a new check command.
    pub fn new(paths: &ConfigPaths, args: CheckArgs) -> Self {
        Self {
            paths: paths.clone(),
            args,
        }
    }
}

impl Command for CheckCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let Some(ctx) = CheckContext::load_or_report(&self.paths, ui)? else {
            return Ok(CommandResult::failure(2));
        };

        let report = ctx.checker.report();

        if self.args.json {
            let json = serde_json::to_string_pretty(&report).map_err(anyhow::Error::from)?;
            ui.raw(&format!("{}\n", json));
        } else {
            let met = report.results.iter().filter(|r| r.met).count();
            ui.message(&format!(
                "{}: {} of {} requirements met",
                report.name,
                met,
                report.results.len()
            ));

            for result in &report.results {
                if result.met {
                    ui.success(&result.message);
                } else {
                    ui.failure(&result.message);
                }
            }

            if report.met {
                ui.success("All requirements met");
            } else {
                let err = PrereqError::RequirementsNotMet {
                    name: report.name.clone(),
                    count: report.unmet().count(),
                };
                ui.error(&err.to_string());
            }
        }

        if report.met {
            Ok(CommandResult::success())
        } else {
            Ok(CommandResult::failure(1))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{HOST_FILE, MANIFEST_FILE, PREREQ_DIR};
    use crate::ui::MockUI;
    use std::fs;
    use tempfile::TempDir;

    const HOST: &str = r#"
runtime:
  name: PHP
  version: 7.0.15
classes: [DateTime]
"#;

    fn setup_project(manifest: &str) -> TempDir {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join(PREREQ_DIR);
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join(MANIFEST_FILE), manifest).unwrap();
        fs::write(dir.join(HOST_FILE), HOST).unwrap();
        temp
    }

    fn run(temp: &TempDir, args: CheckArgs) -> (CommandResult, MockUI) {
        let paths = ConfigPaths::resolve(temp.path(), None, None);
        let mut ui = MockUI::new();
        let result = CheckCommand::new(&paths, args).execute(&mut ui).unwrap();
        (result, ui)
    }

    #[test]
    fn all_met_succeeds() {
        let temp = setup_project(
            "name: Some Plugin\ntarget: p.php\nrequirements:\n  - kind: class_exists\n    name: DateTime\n",
        );
        let (result, ui) = run(&temp, CheckArgs::default());

        assert!(result.success);
        assert!(ui.has_message("Some Plugin: 1 of 1 requirements met"));
        assert_eq!(
            ui.successes(),
            &[
                "The DateTime class is required but missing".to_string(),
                "All requirements met".to_string(),
            ]
        );
        assert!(ui.failures().is_empty());
    }

    #[test]
    fn every_requirement_is_listed_with_its_status() {
        let temp = setup_project(
            "name: Some Plugin\ntarget: p.php\nrequirements:\n  - kind: class_exists\n    name: DateTime\n  - kind: class_exists\n    name: NotReal\n",
        );
        let (result, ui) = run(&temp, CheckArgs::default());

        assert_eq!(result.exit_code, 1);
        assert_eq!(
            ui.successes(),
            &["The DateTime class is required but missing".to_string()]
        );
        assert_eq!(
            ui.failures(),
            &["The NotReal class is required but missing".to_string()]
        );
    }

    #[test]
    fn unmet_requirements_fail_with_failures() {
        let temp = setup_project(
            "name: Some Plugin\ntarget: p.php\nrequirements:\n  - kind: class_exists\n    name: NotReal\n  - kind: runtime_at_least\n    version: \"8.0\"\n",
        );
        let (result, ui) = run(&temp, CheckArgs::default());

        assert!(!result.success);
        assert_eq!(result.exit_code, 1);
        assert_eq!(
            ui.failures(),
            &[
                "The NotReal class is required but missing".to_string(),
                "PHP 8.0 or newer is required".to_string(),
            ]
        );
        assert!(ui.has_error("Some Plugin has 2 unmet requirement(s)"));
    }

    #[test]
    fn json_output_contains_report() {
        let temp = setup_project(
            "name: Some Plugin\ntarget: p.php\nrequirements:\n  - kind: class_exists\n    name: NotReal\n",
        );
        let (result, ui) = run(&temp, CheckArgs { json: true });

        assert_eq!(result.exit_code, 1);
        let json: serde_json::Value = serde_json::from_str(ui.raw_output()).unwrap();
        assert_eq!(json["name"], "Some Plugin");
        assert_eq!(json["met"], false);
        assert_eq!(
            json["results"][0]["message"],
            "The NotReal class is required but missing"
        );
    }

    #[test]
    fn missing_manifest_exits_with_two() {
        let temp = TempDir::new().unwrap();
        let (result, ui) = run(&temp, CheckArgs::default());
        assert_eq!(result.exit_code, 2);
        assert!(ui.has_error("No requirement manifest found"));
    }
}
