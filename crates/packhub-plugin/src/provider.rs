//! Build-mode plugin contributions.

use std::sync::Arc;

use async_trait::async_trait;

use packhub_core::config::ResolvedConfig;
use packhub_core::result::AppResult;

use crate::plugin::Plugin;

/// Plugins contributed for `build`, spliced into the pipeline at two
/// fixed positions.
#[derive(Debug, Clone, Default)]
pub struct BuildPlugins {
    /// Inserted after the import URL rewriters.
    pub pre: Vec<Arc<Plugin>>,
    /// Inserted after the caller's `post` tier.
    pub post: Vec<Arc<Plugin>>,
}

impl BuildPlugins {
    /// No contributions.
    pub fn empty() -> Self {
        Self::default()
    }
}

/// Supplies the build-mode plugin set.
///
/// The composer only awaits this for `build`. Providers may still be asked
/// outside build mode by other callers and should return
/// [`BuildPlugins::empty`] there.
#[async_trait]
pub trait BuildPluginProvider: Send + Sync {
    /// Produce the `{pre, post}` contribution for a configuration.
    async fn build_plugins(&self, config: &ResolvedConfig) -> AppResult<BuildPlugins>;
}

/// Provider that never contributes anything.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmptyBuildPlugins;

#[async_trait]
impl BuildPluginProvider for EmptyBuildPlugins {
    async fn build_plugins(&self, _config: &ResolvedConfig) -> AppResult<BuildPlugins> {
        Ok(BuildPlugins::empty())
    }
}

/// Provider returning a fixed contribution in build mode.
#[derive(Debug, Clone, Default)]
pub struct StaticBuildPlugins {
    plugins: BuildPlugins,
}

impl StaticBuildPlugins {
    pub fn new(pre: Vec<Arc<Plugin>>, post: Vec<Arc<Plugin>>) -> Self {
        Self {
            plugins: BuildPlugins { pre, post },
        }
    }
}

#[async_trait]
impl BuildPluginProvider for StaticBuildPlugins {
    async fn build_plugins(&self, config: &ResolvedConfig) -> AppResult<BuildPlugins> {
        if config.is_build() {
            Ok(self.plugins.clone())
        } else {
            Ok(BuildPlugins::empty())
        }
    }
}
