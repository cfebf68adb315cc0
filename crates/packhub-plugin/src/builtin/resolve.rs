//! Module resolution plugin.

use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use async_trait::async_trait;
use serde_json::json;
use tracing::trace;

use packhub_core::config::ResolvedConfig;
use packhub_core::config::resolve::ResolveConfig;
use packhub_core::config::ssr::{SsrConfig, SsrFormat};
use packhub_core::result::AppResult;
use packhub_core::traits::deps_optimizer::DepsOptimizer;
use packhub_core::types::package::PackageCache;

use super::BuiltinHook;
use crate::hooks::definitions::HookName;
use crate::hooks::handler::{HookContext, HookHandler, HookResult};
use crate::plugin::Plugin;

pub const RESOLVE: &str = "packhub:resolve";

/// Looks up the dependency optimizer for the client (`false`) or SSR
/// (`true`) environment.
pub type DepsOptimizerAccessor = Arc<dyn Fn(bool) -> Option<Arc<dyn DepsOptimizer>> + Send + Sync>;

/// Decides whether a bare import stays external in the SSR bundle.
pub type ExternalizePredicate = Arc<dyn Fn(&str) -> bool + Send + Sync>;

/// Options the resolution plugin runs with.
#[derive(Clone)]
pub struct ResolvePluginOptions {
    pub resolve: ResolveConfig,
    pub root: PathBuf,
    pub is_production: bool,
    pub is_build: bool,
    /// Resolve ids as source modules.
    pub as_src: bool,
    pub package_cache: PackageCache,
    pub ssr_config: SsrConfig,
    pub get_deps_optimizer: DepsOptimizerAccessor,
    /// Present only for ESM SSR builds.
    pub should_externalize: Option<ExternalizePredicate>,
}

impl ResolvePluginOptions {
    /// Options derived from a resolved configuration.
    pub fn from_config(config: &ResolvedConfig) -> Self {
        let registry = config.deps_optimizers.clone();
        let get_deps_optimizer: DepsOptimizerAccessor = Arc::new(move |ssr| registry.get(ssr));

        let should_externalize = (config.is_build()
            && config.build.ssr.is_enabled()
            && config.ssr.format != SsrFormat::Cjs)
            .then(|| {
                let ssr = config.ssr.clone();
                Arc::new(move |id: &str| ssr.should_externalize(id)) as ExternalizePredicate
            });

        Self {
            resolve: config.resolve.clone(),
            root: config.root.clone(),
            is_production: config.is_production,
            is_build: config.is_build(),
            as_src: true,
            package_cache: config.package_cache.clone(),
            ssr_config: config.ssr.clone(),
            get_deps_optimizer,
            should_externalize,
        }
    }
}

impl fmt::Debug for ResolvePluginOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResolvePluginOptions")
            .field("root", &self.root)
            .field("is_production", &self.is_production)
            .field("is_build", &self.is_build)
            .field("as_src", &self.as_src)
            .field("should_externalize", &self.should_externalize.is_some())
            .finish_non_exhaustive()
    }
}

/// Resolves bare imports, package entry points, and optimized dependencies.
pub fn resolve_plugin(options: ResolvePluginOptions) -> Plugin {
    Plugin::new(RESOLVE)
        .with_meta("root", json!(options.root))
        .with_meta("is_production", json!(options.is_production))
        .with_meta("as_src", json!(options.as_src))
        .with_meta("main_fields", json!(options.resolve.main_fields))
        .with_meta("conditions", json!(options.resolve.conditions))
        .with_meta("extensions", json!(options.resolve.extensions))
        .on(HookName::Load, BuiltinHook { plugin: RESOLVE })
        .on(HookName::ResolveId, ResolveHook { options })
}

#[derive(Debug)]
struct ResolveHook {
    options: ResolvePluginOptions,
}

#[async_trait]
impl HookHandler for ResolveHook {
    async fn handle(&self, context: &HookContext) -> AppResult<HookResult> {
        let Some(id) = context.str_arg("id") else {
            return Ok(HookResult::Continue);
        };
        let ssr = context.flag("ssr");

        if ssr {
            if let Some(externalize) = &self.options.should_externalize {
                if externalize(id) {
                    trace!(id, "Externalized for SSR");
                    return Ok(HookResult::Return(json!({ "id": id, "external": true })));
                }
            }
        }

        if let Some(optimizer) = (self.options.get_deps_optimizer)(ssr) {
            if optimizer.is_optimized_dep_url(id) || optimizer.is_optimized_dep_file(id) {
                trace!(id, ssr, "Resolved to optimized dependency");
                return Ok(HookResult::Return(json!({ "id": id })));
            }
        }

        Ok(HookResult::Continue)
    }
}
