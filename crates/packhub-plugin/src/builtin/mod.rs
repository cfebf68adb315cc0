//! Built-in plugins contributed by the composer.
//!
//! Each factory returns a named plugin declaring the hooks it takes part in.
//! The module graph engine supplies the bodies of these hooks; here most of
//! them are [`BuiltinHook`] placeholders that pass control to the next
//! handler. The package-data watcher and the resolver carry their own
//! handlers because their behavior depends only on state owned by the
//! resolved configuration.

pub mod alias;
pub mod build;
pub mod json;
pub mod packages;
pub mod resolve;
pub mod server;
pub mod transform;

use async_trait::async_trait;
use tracing::trace;

use packhub_core::result::AppResult;

use crate::hooks::definitions::HookName;
use crate::hooks::handler::{HookContext, HookHandler, HookResult};
use crate::plugin::Plugin;

pub use alias::{alias_plugin, pre_alias_plugin};
pub use build::{
    build_html_plugin, ensure_watch_plugin, metadata_plugin, module_preload_polyfill_plugin,
    optimized_deps_build_plugin, optimized_deps_plugin,
};
pub use json::{JsonPluginOptions, json_plugin};
pub use packages::watch_package_data_plugin;
pub use resolve::{ResolvePluginOptions, resolve_plugin};
pub use server::{client_injections_plugin, import_analysis_plugin};
pub use transform::{
    asset_import_meta_url_plugin, asset_plugin, css_plugin, css_post_plugin, define_plugin,
    dynamic_import_vars_plugin, esbuild_plugin, html_inline_proxy_plugin, import_glob_plugin,
    wasm_fallback_plugin, wasm_helper_plugin, web_worker_plugin, worker_import_meta_url_plugin,
};

/// Placeholder body for a built-in hook whose implementation lives in the
/// engine.
#[derive(Debug)]
pub struct BuiltinHook {
    plugin: &'static str,
}

#[async_trait]
impl HookHandler for BuiltinHook {
    async fn handle(&self, context: &HookContext) -> AppResult<HookResult> {
        trace!(plugin = self.plugin, hook = %context.hook, "Built-in hook passed through");
        Ok(HookResult::Continue)
    }
}

/// A plugin named `name` with placeholder handlers for `hooks`.
pub(crate) fn builtin(name: &'static str, hooks: &[HookName]) -> Plugin {
    hooks.iter().fold(Plugin::new(name), |plugin, hook| {
        plugin.on(*hook, BuiltinHook { plugin: name })
    })
}
