//! A host backed by a fixed snapshot of platform state.
//!
//! `StaticHost` answers every query from a [`HostSnapshot`] (usually loaded
//! from `.prereq/host.yml`) and records deactivations in memory so callers
//! can report what happened.

use std::sync::{Mutex, MutexGuard};

use crate::config::HostSnapshot;

use super::Host;

#[derive(Debug)]
struct HostState {
    activation_signal: bool,
    deactivated: Vec<String>,
}

/// In-memory [`Host`] driven by a [`HostSnapshot`].
///
/// Class and function lookups ignore ASCII case.
#[derive(Debug)]
pub struct StaticHost {
    snapshot: HostSnapshot,
    state: Mutex<HostState>,
}

impl StaticHost {
    /// Create a host from a snapshot.
    pub fn new(snapshot: HostSnapshot) -> Self {
        let state = HostState {
            activation_signal: snapshot.activation_signal,
            deactivated: Vec::new(),
        };
        Self {
            snapshot,
            state: Mutex::new(state),
        }
    }

    /// The snapshot this host answers from.
    pub fn snapshot(&self) -> &HostSnapshot {
        &self.snapshot
    }

    /// Targets deactivated so far, in order.
    pub fn deactivated(&self) -> Vec<String> {
        self.state().deactivated.clone()
    }

    /// Whether `target` has been deactivated.
    pub fn is_deactivated(&self, target: &str) -> bool {
        self.state().deactivated.iter().any(|t| t == target)
    }

    /// Whether the one-time activation acknowledgment is still pending.
    pub fn activation_signal_pending(&self) -> bool {
        self.state().activation_signal
    }

    fn state(&self) -> MutexGuard<'_, HostState> {
        // State is plain data; a poisoned lock still holds a usable value.
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl Default for StaticHost {
    fn default() -> Self {
        Self::new(HostSnapshot::default())
    }
}

impl From<HostSnapshot> for StaticHost {
    fn from(snapshot: HostSnapshot) -> Self {
        Self::new(snapshot)
    }
}

impl Host for StaticHost {
    fn class_exists(&self, name: &str) -> bool {
        self.snapshot
            .classes
            .iter()
            .any(|c| c.eq_ignore_ascii_case(name))
    }

    fn function_exists(&self, name: &str) -> bool {
        self.snapshot
            .functions
            .iter()
            .any(|f| f.eq_ignore_ascii_case(name))
    }

    fn active_components(&self) -> Vec<String> {
        // A deactivated component is no longer active.
        let state = self.state();
        self.snapshot
            .active_components
            .iter()
            .filter(|c| !state.deactivated.contains(c))
            .cloned()
            .collect()
    }

    fn runtime_name(&self) -> String {
        self.snapshot.runtime.name.clone()
    }

    fn runtime_version(&self) -> String {
        self.snapshot.runtime.version.clone()
    }

    fn platform_name(&self) -> String {
        self.snapshot.platform.name.clone()
    }

    fn platform_version(&self) -> String {
        self.snapshot.platform.version.clone()
    }

    fn deactivate(&self, target: &str) {
        let mut state = self.state();
        if !state.deactivated.iter().any(|t| t == target) {
            tracing::info!("Deactivating {}", target);
            state.deactivated.push(target.to_string());
        }
    }

    fn clear_activation_signal(&self) {
        self.state().activation_signal = false;
    }
}
