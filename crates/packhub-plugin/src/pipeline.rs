//! The composed pipeline and its per-hook views.

use std::sync::Arc;

use packhub_core::config::ResolvedConfig;
use packhub_core::result::AppResult;

use crate::composer::{self, UserPlugins};
use crate::hooks::cache::{HookResolutionCache, ResolvedHook};
use crate::hooks::definitions::HookName;
use crate::hooks::handler::SharedHandler;
use crate::plugin::Plugin;
use crate::provider::BuildPluginProvider;

/// An immutable plugin sequence together with the hook resolution cache
/// scoped to it.
///
/// The cache owns the sequence. Cloning shares both. A configuration reload
/// composes a new pipeline; this one is never modified.
#[derive(Debug, Clone)]
pub struct PluginPipeline {
    hooks: Arc<HookResolutionCache>,
}

impl PluginPipeline {
    /// Wrap an already composed sequence.
    pub fn new(plugins: Vec<Arc<Plugin>>) -> Self {
        Self {
            hooks: Arc::new(HookResolutionCache::new(plugins.into())),
        }
    }

    /// Compose the pipeline for a configuration.
    pub async fn compose(
        config: &ResolvedConfig,
        user: &UserPlugins,
        provider: &dyn BuildPluginProvider,
    ) -> AppResult<Self> {
        let plugins = composer::resolve_plugins(config, user, provider).await?;
        Ok(Self::new(plugins))
    }

    /// The master sequence.
    pub fn plugins(&self) -> &[Arc<Plugin>] {
        self.hooks.plugins()
    }

    pub fn len(&self) -> usize {
        self.plugins().len()
    }

    pub fn is_empty(&self) -> bool {
        self.plugins().is_empty()
    }

    /// Plugin names in pipeline order.
    pub fn names(&self) -> Vec<&str> {
        self.plugins().iter().map(|plugin| plugin.name()).collect()
    }

    /// Both resolved views of a hook.
    pub fn resolve_hook(&self, hook: HookName) -> ResolvedHook {
        self.hooks.resolve(hook)
    }

    /// Plugins taking part in `hook`, `pre` first and `post` last.
    pub fn sorted_plugins(&self, hook: HookName) -> Arc<[Arc<Plugin>]> {
        self.resolve_hook(hook).plugins
    }

    /// The handlers of [`sorted_plugins`](Self::sorted_plugins), in the same
    /// order.
    pub fn sorted_handlers(&self, hook: HookName) -> Arc<[SharedHandler]> {
        self.resolve_hook(hook).handlers
    }

    /// The cache backing the hook views.
    pub fn hook_cache(&self) -> &HookResolutionCache {
        &self.hooks
    }
}
