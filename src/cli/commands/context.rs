//! Shared setup for commands: load, validate, and build the checker.

use std::sync::Arc;

use crate::config::{load, validate, ConfigPaths};
use crate::error::{PrereqError, Result};
use crate::host::StaticHost;
use crate::requirements::Checker;
use crate::ui::UserInterface;

/// A checker wired to the snapshot host it evaluates against.
pub struct CheckContext {
    /// The checker built from the manifest.
    pub checker: Checker,
    /// The host the checker queries; inspect it after deactivation.
    pub host: Arc<StaticHost>,
}

impl CheckContext {
    /// Load the manifest and host snapshot at `paths` and build a checker.
    pub fn load(paths: &ConfigPaths) -> Result<Self> {
        let (manifest, snapshot) = load(paths)?;
        validate(&manifest)?;

        let host = Arc::new(StaticHost::new(snapshot));
        let checker = manifest.build_checker(host.clone());

        Ok(Self { checker, host })
    }

    /// Like [`CheckContext::load`], but reports a missing manifest through
    /// `ui` and returns `None` instead of an error.
    pub fn load_or_report(paths: &ConfigPaths, ui: &mut dyn UserInterface) -> Result<Option<Self>> {
        match Self::load(paths) {
            Ok(ctx) => Ok(Some(ctx)),
            Err(PrereqError::ManifestNotFound { path }) => {
                ui.error(&format!(
                    "No requirement manifest found at {}. Create one or pass --manifest.",
                    path.display()
                ));
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }
}
