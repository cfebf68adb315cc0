//! Dependency optimizer trait and the per-session registry.

use std::fmt;
use std::sync::Arc;

use dashmap::DashMap;

/// A running dependency pre-bundler.
///
/// Implemented by the optimizer crate; the module resolution plugin only
/// looks optimizers up through [`DepsOptimizerRegistry`].
pub trait DepsOptimizer: Send + Sync + fmt::Debug + 'static {
    /// Whether a resolved file path points into the optimized deps cache.
    fn is_optimized_dep_file(&self, id: &str) -> bool;

    /// Whether a dev-server URL points into the optimized deps cache.
    fn is_optimized_dep_url(&self, url: &str) -> bool;
}

/// Optimizers registered for one session, keyed by environment.
///
/// Cloning shares the underlying map.
#[derive(Clone, Default)]
pub struct DepsOptimizerRegistry {
    optimizers: Arc<DashMap<bool, Arc<dyn DepsOptimizer>>>,
}

impl DepsOptimizerRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers the optimizer for the client (`ssr == false`) or SSR
    /// environment, replacing any previous one.
    pub fn register(&self, ssr: bool, optimizer: Arc<dyn DepsOptimizer>) {
        self.optimizers.insert(ssr, optimizer);
    }

    /// Returns the optimizer for an environment, if one is running.
    pub fn get(&self, ssr: bool) -> Option<Arc<dyn DepsOptimizer>> {
        self.optimizers.get(&ssr).map(|entry| Arc::clone(entry.value()))
    }
}

impl fmt::Debug for DepsOptimizerRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DepsOptimizerRegistry")
            .field("client", &self.optimizers.contains_key(&false))
            .field("ssr", &self.optimizers.contains_key(&true))
            .finish()
    }
}
