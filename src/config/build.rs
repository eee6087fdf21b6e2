//! Turning a manifest into a [`Checker`].

use std::sync::Arc;

use crate::config::schema::{Manifest, RequirementConfig};
use crate::host::Host;
use crate::requirements::Checker;

impl Manifest {
    /// Build a checker with one requirement per manifest entry, in order.
    pub fn build_checker(&self, host: Arc<dyn Host>) -> Checker {
        let mut checker = Checker::make(self.name.as_str(), self.target.as_str(), host);
        for requirement in &self.requirements {
            apply(&mut checker, requirement);
        }
        checker
    }
}

fn apply(checker: &mut Checker, requirement: &RequirementConfig) {
    match requirement {
        RequirementConfig::ClassExists { name } => {
            checker.class_exists_check(name);
        }
        RequirementConfig::FunctionExists { name } => {
            checker.function_exists_check(name);
        }
        RequirementConfig::RuntimeAtLeast { version } => {
            checker.runtime_at_least(version);
        }
        RequirementConfig::PlatformAtLeast { version } => {
            checker.platform_at_least(version);
        }
        RequirementConfig::SiblingActive { id, name } => {
            checker.sibling_active(id, name);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ComponentVersion, HostSnapshot};
    use crate::host::StaticHost;

    fn host() -> Arc<StaticHost> {
        Arc::new(StaticHost::new(HostSnapshot {
            runtime: ComponentVersion::new("PHP", "8.1.2"),
            platform: ComponentVersion::new("WordPress", "6.4"),
            classes: vec!["DateTime".to_string()],
            functions: vec!["phpversion".to_string()],
            active_components: vec!["woocommerce/woocommerce.php".to_string()],
            activation_signal: false,
        }))
    }

    #[test]
    fn empty_manifest_builds_empty_checker() {
        let manifest = Manifest {
            name: "A".to_string(),
            target: "a.php".to_string(),
            requirements: vec![],
        };
        let checker = manifest.build_checker(host());
        assert!(checker.is_empty());
        assert_eq!(checker.name(), "A");
        assert_eq!(checker.target(), "a.php");
    }

    #[test]
    fn entries_map_to_builders_in_order() {
        let manifest = Manifest {
            name: "Some Plugin".to_string(),
            target: "some-plugin.php".to_string(),
            requirements: vec![
                RequirementConfig::ClassExists {
                    name: "NotReal".to_string(),
                },
                RequirementConfig::FunctionExists {
                    name: "phpversion".to_string(),
                },
                RequirementConfig::RuntimeAtLeast {
                    version: "8.2".to_string(),
                },
                RequirementConfig::PlatformAtLeast {
                    version: "6.0".to_string(),
                },
                RequirementConfig::SiblingActive {
                    id: "jetpack/jetpack.php".to_string(),
                    name: "Jetpack".to_string(),
                },
            ],
        };

        let checker = manifest.build_checker(host());
        assert_eq!(checker.len(), 5);
        assert_eq!(
            checker.unmet_messages(),
            vec![
                "The NotReal class is required but missing",
                "PHP 8.2 or newer is required",
                "Jetpack must be installed and active",
            ]
        );
    }
}
