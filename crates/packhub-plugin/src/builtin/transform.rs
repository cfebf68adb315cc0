//! Content plugins that run for both commands.

use serde_json::json;

use packhub_core::config::ResolvedConfig;
use packhub_core::config::transform::EsbuildConfig;

use super::builtin;
use crate::hooks::definitions::HookName;
use crate::plugin::Plugin;

pub const HTML_INLINE_PROXY: &str = "packhub:html-inline-proxy";
pub const CSS: &str = "packhub:css";
pub const ESBUILD: &str = "packhub:esbuild";
pub const WASM_HELPER: &str = "packhub:wasm-helper";
pub const WORKER: &str = "packhub:worker";
pub const ASSET: &str = "packhub:asset";
pub const WASM_FALLBACK: &str = "packhub:wasm-fallback";
pub const DEFINE: &str = "packhub:define";
pub const CSS_POST: &str = "packhub:css-post";
pub const WORKER_IMPORT_META_URL: &str = "packhub:worker-import-meta-url";
pub const ASSET_IMPORT_META_URL: &str = "packhub:asset-import-meta-url";
pub const DYNAMIC_IMPORT_VARS: &str = "packhub:dynamic-import-vars";
pub const IMPORT_GLOB: &str = "packhub:import-glob";

/// Loads inline `<script>` and `<style>` blocks of HTML files as modules.
pub fn html_inline_proxy_plugin(_config: &ResolvedConfig) -> Plugin {
    builtin(HTML_INLINE_PROXY, &[HookName::ResolveId, HookName::Load])
}

/// Compiles stylesheets.
pub fn css_plugin(config: &ResolvedConfig) -> Plugin {
    builtin(CSS, &[HookName::BuildStart, HookName::Transform])
        .with_meta("dev_sourcemap", json!(config.css.dev_sourcemap))
}

/// Transpiles TypeScript and JSX.
pub fn esbuild_plugin(config: &ResolvedConfig) -> Plugin {
    let plugin = builtin(ESBUILD, &[HookName::ConfigureServer, HookName::Transform]);
    match &config.esbuild {
        EsbuildConfig::Options(options) => plugin
            .with_meta("jsx", json!(options.jsx))
            .with_meta("jsx_factory", json!(options.jsx_factory))
            .with_meta("jsx_fragment", json!(options.jsx_fragment)),
        EsbuildConfig::Flag(_) => plugin,
    }
}

/// Serves the WebAssembly instantiation helper.
pub fn wasm_helper_plugin(_config: &ResolvedConfig) -> Plugin {
    builtin(WASM_HELPER, &[HookName::ResolveId, HookName::Load])
}

/// Bundles `?worker` imports.
pub fn web_worker_plugin(config: &ResolvedConfig) -> Plugin {
    builtin(
        WORKER,
        &[
            HookName::BuildStart,
            HookName::Load,
            HookName::Transform,
            HookName::RenderChunk,
            HookName::GenerateBundle,
        ],
    )
    .with_meta("is_build", json!(config.is_build()))
}

/// Serves and emits static assets.
pub fn asset_plugin(_config: &ResolvedConfig) -> Plugin {
    builtin(
        ASSET,
        &[
            HookName::BuildStart,
            HookName::ResolveId,
            HookName::Load,
            HookName::RenderChunk,
            HookName::GenerateBundle,
        ],
    )
}

/// Rejects direct `.wasm` imports that no other plugin handled.
pub fn wasm_fallback_plugin() -> Plugin {
    builtin(WASM_FALLBACK, &[HookName::Load])
}

/// Replaces compile-time constants.
pub fn define_plugin(config: &ResolvedConfig) -> Plugin {
    builtin(DEFINE, &[HookName::Transform]).with_meta("mode", json!(config.mode))
}

/// Collects compiled CSS into chunks and emitted stylesheets.
pub fn css_post_plugin(_config: &ResolvedConfig) -> Plugin {
    builtin(
        CSS_POST,
        &[
            HookName::RenderStart,
            HookName::Transform,
            HookName::RenderChunk,
            HookName::AugmentChunkHash,
            HookName::GenerateBundle,
        ],
    )
}

/// Bundles `new Worker(new URL(..., import.meta.url))` targets.
pub fn worker_import_meta_url_plugin(_config: &ResolvedConfig) -> Plugin {
    builtin(WORKER_IMPORT_META_URL, &[HookName::Transform])
}

/// Rewrites `new URL(..., import.meta.url)` asset references.
pub fn asset_import_meta_url_plugin(_config: &ResolvedConfig) -> Plugin {
    builtin(ASSET_IMPORT_META_URL, &[HookName::Transform])
}

/// Expands `import()` calls with template-string paths.
pub fn dynamic_import_vars_plugin(_config: &ResolvedConfig) -> Plugin {
    builtin(
        DYNAMIC_IMPORT_VARS,
        &[HookName::ResolveId, HookName::Load, HookName::Transform],
    )
}

/// Expands `import.meta.glob` calls.
pub fn import_glob_plugin(config: &ResolvedConfig) -> Plugin {
    builtin(IMPORT_GLOB, &[HookName::ConfigResolved, HookName::Transform])
        .with_meta("root", json!(config.root))
}
