//! Plugins that depend on the command being run.

use serde_json::json;

use packhub_core::config::ResolvedConfig;

use super::builtin;
use crate::hooks::definitions::HookName;
use crate::plugin::Plugin;

pub const ENSURE_WATCH: &str = "packhub:ensure-watch";
pub const BUILD_METADATA: &str = "packhub:build-metadata";
pub const MODULE_PRELOAD_POLYFILL: &str = "packhub:modulepreload-polyfill";
pub const OPTIMIZED_DEPS_BUILD: &str = "packhub:optimized-deps-build";
pub const OPTIMIZED_DEPS: &str = "packhub:optimized-deps";
pub const BUILD_HTML: &str = "packhub:build-html";

/// Registers every loaded file with the watcher in `build --watch`.
pub fn ensure_watch_plugin() -> Plugin {
    builtin(ENSURE_WATCH, &[HookName::Load])
}

/// Attaches asset and CSS bookkeeping to rendered chunks.
pub fn metadata_plugin() -> Plugin {
    builtin(BUILD_METADATA, &[HookName::RenderChunk])
}

/// Serves the module preload polyfill module.
pub fn module_preload_polyfill_plugin(config: &ResolvedConfig) -> Plugin {
    builtin(
        MODULE_PRELOAD_POLYFILL,
        &[HookName::ResolveId, HookName::Load],
    )
    .with_meta("ssr", json!(config.build.ssr.is_enabled()))
}

/// Dependency optimizer hooks for `build`.
pub fn optimized_deps_build_plugin(config: &ResolvedConfig) -> Plugin {
    builtin(
        OPTIMIZED_DEPS_BUILD,
        &[
            HookName::BuildStart,
            HookName::ResolveId,
            HookName::Load,
            HookName::Transform,
        ],
    )
    .with_meta("include", json!(config.optimize_deps.include))
    .with_meta("exclude", json!(config.optimize_deps.exclude))
}

/// Dependency optimizer hooks for the dev server.
pub fn optimized_deps_plugin(config: &ResolvedConfig) -> Plugin {
    builtin(OPTIMIZED_DEPS, &[HookName::ResolveId, HookName::Load])
        .with_meta("include", json!(config.optimize_deps.include))
        .with_meta("exclude", json!(config.optimize_deps.exclude))
}

/// Turns HTML entry points into modules and emits the final HTML.
pub fn build_html_plugin(config: &ResolvedConfig) -> Plugin {
    builtin(
        BUILD_HTML,
        &[HookName::Transform, HookName::GenerateBundle],
    )
    .with_meta("root", json!(config.root))
}
