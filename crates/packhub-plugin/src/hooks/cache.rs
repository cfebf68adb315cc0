//! Memoized hook resolution for one pipeline.

use std::sync::Arc;

use dashmap::DashMap;
use tracing::{debug, trace};

use super::definitions::HookName;
use super::handler::SharedHandler;
use super::sorter::sort_plugins_by_hook;
use crate::plugin::Plugin;

/// The sorted plugins and handlers for one hook.
///
/// Cloning shares the underlying slices, so two lookups of a cached hook
/// return pointer-equal results.
#[derive(Debug, Clone)]
pub struct ResolvedHook {
    /// Plugins implementing the hook, in execution order.
    pub plugins: Arc<[Arc<Plugin>]>,
    /// Their handlers, in the same order.
    pub handlers: Arc<[SharedHandler]>,
}

impl ResolvedHook {
    fn compute(hook: HookName, plugins: &[Arc<Plugin>]) -> Self {
        let sorted = sort_plugins_by_hook(hook, plugins);
        let handlers: Vec<SharedHandler> = sorted
            .iter()
            .filter_map(|plugin| plugin.normalized_hook(hook))
            .map(|entry| Arc::clone(entry.handler))
            .collect();

        Self {
            plugins: sorted.into(),
            handlers: handlers.into(),
        }
    }
}

/// Hook name → resolved hook for one plugin sequence, filled lazily and
/// never evicted.
///
/// The cache owns the sequence it resolves against, so every entry is
/// derived from that sequence alone. Hits are served through a shared read
/// guard. A miss computes the result without holding any lock and then
/// inserts it; when two callers race on the same hook the first insert wins
/// and both see that value.
#[derive(Debug)]
pub struct HookResolutionCache {
    plugins: Arc<[Arc<Plugin>]>,
    resolved: DashMap<HookName, ResolvedHook>,
}

impl HookResolutionCache {
    /// Creates an empty cache over `plugins`.
    pub fn new(plugins: Arc<[Arc<Plugin>]>) -> Self {
        Self {
            plugins,
            resolved: DashMap::new(),
        }
    }

    /// The sequence hooks are resolved against.
    pub fn plugins(&self) -> &Arc<[Arc<Plugin>]> {
        &self.plugins
    }

    /// Returns the resolution for `hook`, computing it on the first request.
    pub fn resolve(&self, hook: HookName) -> ResolvedHook {
        if let Some(hit) = self.resolved.get(&hook) {
            trace!(hook = %hook, "Hook resolution cache hit");
            return hit.value().clone();
        }

        let computed = ResolvedHook::compute(hook, &self.plugins);
        debug!(
            hook = %hook,
            plugin_count = computed.plugins.len(),
            "Hook resolved"
        );

        self.resolved.entry(hook).or_insert(computed).value().clone()
    }

    /// Whether `hook` has been resolved.
    pub fn contains(&self, hook: HookName) -> bool {
        self.resolved.contains_key(&hook)
    }

    /// Number of resolved hooks.
    pub fn len(&self) -> usize {
        self.resolved.len()
    }

    /// Whether no hook has been resolved yet.
    pub fn is_empty(&self) -> bool {
        self.resolved.is_empty()
    }
}
