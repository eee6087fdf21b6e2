//! Requirement checker.
//!
//! The [`Checker`] owns an ordered list of requirements for one host
//! component. It evaluates them on demand, renders a notice for the unmet
//! ones and asks the host to deactivate the component when anything fails.
//! Nothing is cached between calls.

use std::fmt;
use std::io::{self, Write};
use std::rc::Rc;
use std::sync::Arc;

use serde::Serialize;

use crate::host::{hook, Host, HookPoint, HookRegistrar};
use crate::requirements::notice::{failure_line, NOTICE_CLOSE, NOTICE_OPEN};
use crate::requirements::requirement::{ClosureRequirement, Requirement};
use crate::requirements::truthy::Truthy;
use crate::requirements::version::Version;

/// Evaluates a component's requirements and reacts to failures.
///
/// Builder methods take `&mut self` and return it so calls chain:
///
/// ```
/// use std::sync::Arc;
/// use prereq::config::{ComponentVersion, HostSnapshot};
/// use prereq::host::StaticHost;
/// use prereq::requirements::Checker;
///
/// let host = Arc::new(StaticHost::new(HostSnapshot {
///     runtime: ComponentVersion::new("PHP", "7.4.3"),
///     classes: vec!["DateTime".to_string()],
///     ..HostSnapshot::default()
/// }));
///
/// let mut checker = Checker::make("Some Plugin", "some-plugin/some-plugin.php", host);
/// checker
///     .runtime_at_least("7.0")
///     .class_exists_check("DateTime")
///     .class_exists_check("NotReal");
///
/// assert!(!checker.requirements_met());
/// assert_eq!(
///     checker.notice(),
///     r#"<div class="notice notice-error"><p>Some Plugin deactivated: The NotReal class is required but missing</p></div>"#
/// );
/// ```
pub struct Checker {
    name: String,
    target: String,
    host: Arc<dyn Host>,
    requirements: Vec<Box<dyn Requirement>>,
}

impl Checker {
    /// Create a checker for the component `target`, reported as `name`.
    pub fn new(name: impl Into<String>, target: impl Into<String>, host: Arc<dyn Host>) -> Self {
        Self {
            name: name.into(),
            target: target.into(),
            host,
            requirements: Vec::new(),
        }
    }

    /// Same as [`Checker::new`]; reads better at the head of a chain.
    pub fn make(name: impl Into<String>, target: impl Into<String>, host: Arc<dyn Host>) -> Self {
        Self::new(name, target, host)
    }

    /// Display name used in notices.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Opaque reference handed to the host on deactivation.
    pub fn target(&self) -> &str {
        &self.target
    }

    /// Number of attached requirements.
    pub fn len(&self) -> usize {
        self.requirements.len()
    }

    /// Whether no requirements are attached.
    pub fn is_empty(&self) -> bool {
        self.requirements.is_empty()
    }

    /// Append a requirement.
    pub fn add_requirement(&mut self, requirement: impl Requirement + 'static) -> &mut Self {
        self.requirements.push(Box::new(requirement));
        self
    }

    /// Append a predicate-backed requirement.
    pub fn add_check<F, T>(&mut self, predicate: F, message: impl Into<String>) -> &mut Self
    where
        F: Fn() -> T + 'static,
        T: Truthy,
    {
        self.add_requirement(ClosureRequirement::new(predicate, message))
    }

    /// Require a class registered under `class_name`.
    pub fn class_exists_check(&mut self, class_name: &str) -> &mut Self {
        let host = Arc::clone(&self.host);
        let name = class_name.to_string();
        self.add_check(
            move || host.class_exists(&name),
            format!("The {} class is required but missing", class_name),
        )
    }

    /// Require a callable registered under `function_name`.
    pub fn function_exists_check(&mut self, function_name: &str) -> &mut Self {
        let host = Arc::clone(&self.host);
        let name = function_name.to_string();
        self.add_check(
            move || host.function_exists(&name),
            format!("The {} function is required but missing", function_name),
        )
    }

    /// Require the host runtime to be at least `version`.
    pub fn runtime_at_least(&mut self, version: &str) -> &mut Self {
        let host = Arc::clone(&self.host);
        let required = Version::parse(version);
        let message = format!("{} {} or newer is required", self.host.runtime_name(), version);
        self.add_check(
            move || Version::parse(&host.runtime_version()) >= required,
            message,
        )
    }

    /// Require the host platform to be at least `version`.
    pub fn platform_at_least(&mut self, version: &str) -> &mut Self {
        let host = Arc::clone(&self.host);
        let required = Version::parse(version);
        let message = format!("{} {} or newer is required", self.host.platform_name(), version);
        self.add_check(
            move || Version::parse(&host.platform_version()) >= required,
            message,
        )
    }

    /// Require the sibling component `identifier` to be active.
    pub fn sibling_active(&mut self, identifier: &str, display_name: &str) -> &mut Self {
        let host = Arc::clone(&self.host);
        let id = identifier.to_string();
        self.add_check(
            move || host.active_components().iter().any(|c| *c == id),
            format!("{} must be installed and active", display_name),
        )
    }

    /// Whether every requirement is met. True when none are attached.
    ///
    /// Every requirement is evaluated, in insertion order, even after one
    /// fails.
    pub fn requirements_met(&self) -> bool {
        let unmet = self
            .requirements
            .iter()
            .map(|r| r.is_met())
            .filter(|met| !met)
            .count();

        tracing::debug!(
            "{}: {} of {} requirements met",
            self.name,
            self.requirements.len() - unmet,
            self.requirements.len()
        );

        unmet == 0
    }

    /// Messages of the requirements that are currently unmet, in order.
    pub fn unmet_messages(&self) -> Vec<String> {
        self.requirements
            .iter()
            .filter(|r| !r.is_met())
            .map(|r| r.message().to_string())
            .collect()
    }

    /// Write an error notice listing each unmet requirement.
    ///
    /// Writes nothing when all requirements are met.
    pub fn notify(&self, out: &mut dyn Write) -> io::Result<()> {
        if self.requirements_met() {
            return Ok(());
        }

        out.write_all(NOTICE_OPEN.as_bytes())?;
        for requirement in &self.requirements {
            if requirement.is_met() {
                continue;
            }
            tracing::debug!("{}: unmet: {}", self.name, requirement.message());
            out.write_all(failure_line(&self.name, requirement.message()).as_bytes())?;
        }
        out.write_all(NOTICE_CLOSE.as_bytes())?;

        Ok(())
    }

    /// The notice [`Checker::notify`] would write, as a string.
    pub fn notice(&self) -> String {
        let mut buf = Vec::new();
        // Writing to a Vec cannot fail.
        let _ = self.notify(&mut buf);
        String::from_utf8_lossy(&buf).into_owned()
    }

    /// Deactivate the target through the host if any requirement is unmet.
    ///
    /// Returns whether a deactivation was issued.
    pub fn deactivate(&self) -> bool {
        if self.requirements_met() {
            return false;
        }

        tracing::info!("{} does not meet its requirements; deactivating", self.name);
        self.host.clear_activation_signal();
        self.host.deactivate(&self.target);
        true
    }

    /// Register [`Checker::deactivate`] at [`HookPoint::Init`] and
    /// [`Checker::notify`] at [`HookPoint::Render`].
    pub fn register_for_lifecycle_hooks(self: &Rc<Self>, registrar: &mut dyn HookRegistrar) {
        let checker = Rc::clone(self);
        registrar.register(
            HookPoint::Init,
            hook(move |_| {
                checker.deactivate();
                Ok(())
            }),
        );

        let checker = Rc::clone(self);
        registrar.register(HookPoint::Render, hook(move |out| checker.notify(out)));
    }

    /// Evaluate every requirement into a serializable report.
    pub fn report(&self) -> CheckReport {
        let results: Vec<RequirementResult> = self
            .requirements
            .iter()
            .map(|r| RequirementResult {
                message: r.message().to_string(),
                met: r.is_met(),
            })
            .collect();

        CheckReport {
            name: self.name.clone(),
            target: self.target.clone(),
            met: results.iter().all(|r| r.met),
            results,
        }
    }
}

impl fmt::Debug for Checker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Checker")
            .field("name", &self.name)
            .field("target", &self.target)
            .field(
                "requirements",
                &self
                    .requirements
                    .iter()
                    .map(|r| r.message())
                    .collect::<Vec<_>>(),
            )
            .finish_non_exhaustive()
    }
}

/// Outcome of a single requirement in a [`CheckReport`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RequirementResult {
    /// The requirement's failure message.
    pub message: String,
    /// Whether it was met.
    pub met: bool,
}

/// Snapshot of one evaluation pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckReport {
    /// Checker display name.
    pub name: String,
    /// Deactivation target.
    pub target: String,
    /// Whether every requirement was met.
    pub met: bool,
    /// Per-requirement results in insertion order.
    pub results: Vec<RequirementResult>,
}

impl CheckReport {
    /// Results that were not met.
    pub fn unmet(&self) -> impl Iterator<Item = &RequirementResult> {
        self.results.iter().filter(|r| !r.met)
    }
}
