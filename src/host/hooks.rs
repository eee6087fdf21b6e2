//! Lifecycle hook points.

use std::collections::BTreeMap;
use std::fmt;
use std::io::{self, Write};

/// The two extension points a checker hooks into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum HookPoint {
    /// Early initialization; the checker deactivates its target here.
    Init,
    /// Later rendering; the checker writes its notice here.
    Render,
}

impl HookPoint {
    /// Name used when wiring into a host's own hook system.
    pub fn name(&self) -> &'static str {
        match self {
            HookPoint::Init => "on_init_check",
            HookPoint::Render => "on_render_report",
        }
    }
}

impl fmt::Display for HookPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Callback invoked when a hook point fires. Init callbacks ignore the sink.
pub type HookCallback = Box<dyn Fn(&mut dyn Write) -> io::Result<()>>;

/// Box a closure as a [`HookCallback`].
pub fn hook<F>(callback: F) -> HookCallback
where
    F: Fn(&mut dyn Write) -> io::Result<()> + 'static,
{
    Box::new(callback)
}

/// Something that accepts callbacks for hook points.
pub trait HookRegistrar {
    /// Register `callback` to run when `point` fires.
    fn register(&mut self, point: HookPoint, callback: HookCallback);
}

/// In-process registrar that runs callbacks in registration order.
#[derive(Default)]
pub struct HookRegistry {
    hooks: BTreeMap<HookPoint, Vec<HookCallback>>,
}

impl HookRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of callbacks registered for `point`.
    pub fn count(&self, point: HookPoint) -> usize {
        self.hooks.get(&point).map_or(0, Vec::len)
    }

    /// Run every callback registered for `point`, stopping at the first
    /// write error.
    pub fn fire(&self, point: HookPoint, sink: &mut dyn Write) -> io::Result<()> {
        let callbacks = self.hooks.get(&point).map(Vec::as_slice).unwrap_or(&[]);
        tracing::debug!("Firing {} ({} callbacks)", point, callbacks.len());
        for callback in callbacks {
            callback(&mut *sink)?;
        }
        Ok(())
    }
}

impl HookRegistrar for HookRegistry {
    fn register(&mut self, point: HookPoint, callback: HookCallback) {
        self.hooks.entry(point).or_default().push(callback);
    }
}

impl fmt::Debug for HookRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HookRegistry")
            .field("init", &self.count(HookPoint::Init))
            .field("render", &self.count(HookPoint::Render))
            .finish()
    }
}
