//! Ordered accumulation of pipeline slots.

use std::sync::Arc;

use tracing::debug;

use crate::plugin::Plugin;

/// Growable plugin sequence built one slot at a time.
///
/// Skipped slots leave nothing behind, so [`finish`](Self::finish) never
/// has to filter.
#[derive(Debug, Default)]
pub struct PluginSequence {
    plugins: Vec<Arc<Plugin>>,
}

impl PluginSequence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one plugin.
    pub fn push(&mut self, plugin: Plugin) -> &mut Self {
        self.plugins.push(Arc::new(plugin));
        self
    }

    /// Append the plugin built by `build` when `condition` holds. `build` is
    /// not called otherwise.
    pub fn push_if<F>(&mut self, condition: bool, slot: &str, build: F) -> &mut Self
    where
        F: FnOnce() -> Plugin,
    {
        if condition {
            self.push(build());
        } else {
            debug!(slot, "Pipeline slot skipped");
        }
        self
    }

    /// Append a caller-supplied tier, preserving its order.
    pub fn extend<'a, I>(&mut self, plugins: I) -> &mut Self
    where
        I: IntoIterator<Item = &'a Arc<Plugin>>,
    {
        self.plugins.extend(plugins.into_iter().cloned());
        self
    }

    pub fn len(&self) -> usize {
        self.plugins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plugins.is_empty()
    }

    pub fn finish(self) -> Vec<Arc<Plugin>> {
        self.plugins
    }
}
