//! Pipeline composition.
//!
//! [`resolve_plugins`] assembles the master plugin sequence for one
//! configuration. Slots are visited in a fixed order and each either
//! contributes nothing, one built-in plugin, or a caller-supplied tier.

pub mod sequence;
pub mod user;

use std::sync::Arc;

use tracing::info;

use packhub_core::config::ResolvedConfig;
use packhub_core::result::AppResult;

use crate::builtin::{self, JsonPluginOptions, ResolvePluginOptions};
use crate::plugin::Plugin;
use crate::provider::{BuildPluginProvider, BuildPlugins};

pub use sequence::PluginSequence;
pub use user::UserPlugins;

/// Compose the master pipeline.
///
/// The build provider is awaited before anything is assembled, and only for
/// `build`. Its error is returned unchanged and no pipeline is produced.
pub async fn resolve_plugins(
    config: &ResolvedConfig,
    user: &UserPlugins,
    provider: &dyn BuildPluginProvider,
) -> AppResult<Vec<Arc<Plugin>>> {
    let is_build = config.is_build();
    let build_plugins = if is_build {
        provider.build_plugins(config).await?
    } else {
        BuildPlugins::empty()
    };

    let mut sequence = PluginSequence::new();

    sequence
        .push_if(config.is_watch(), builtin::build::ENSURE_WATCH, || {
            builtin::ensure_watch_plugin()
        })
        .push_if(is_build, builtin::build::BUILD_METADATA, || {
            builtin::metadata_plugin()
        })
        .push(builtin::watch_package_data_plugin(
            config.package_cache.clone(),
        ))
        .push(builtin::pre_alias_plugin(config))
        .push(builtin::alias_plugin(&config.resolve.alias))
        .extend(&user.pre);

    sequence
        .push_if(
            config.build.module_preload.polyfill_enabled(),
            builtin::build::MODULE_PRELOAD_POLYFILL,
            || builtin::module_preload_polyfill_plugin(config),
        )
        .push_if(
            config.is_deps_optimizer_enabled(false) || config.is_deps_optimizer_enabled(true),
            builtin::build::OPTIMIZED_DEPS,
            || {
                if is_build {
                    builtin::optimized_deps_build_plugin(config)
                } else {
                    builtin::optimized_deps_plugin(config)
                }
            },
        )
        .push(builtin::resolve_plugin(ResolvePluginOptions::from_config(
            config,
        )))
        .push(builtin::html_inline_proxy_plugin(config))
        .push(builtin::css_plugin(config))
        .push_if(
            config.esbuild.is_enabled(),
            builtin::transform::ESBUILD,
            || builtin::esbuild_plugin(config),
        )
        .push(builtin::json_plugin(
            JsonPluginOptions::from_config(&config.json),
            is_build,
        ))
        .push(builtin::wasm_helper_plugin(config))
        .push(builtin::web_worker_plugin(config))
        .push(builtin::asset_plugin(config))
        .extend(&user.normal);

    sequence
        .push(builtin::wasm_fallback_plugin())
        .push(builtin::define_plugin(config))
        .push(builtin::css_post_plugin(config))
        .push_if(is_build, builtin::build::BUILD_HTML, || {
            builtin::build_html_plugin(config)
        })
        .push(builtin::worker_import_meta_url_plugin(config))
        .push(builtin::asset_import_meta_url_plugin(config))
        .extend(&build_plugins.pre)
        .push(builtin::dynamic_import_vars_plugin(config))
        .push(builtin::import_glob_plugin(config))
        .extend(&user.post)
        .extend(&build_plugins.post);

    // Server plugins see the fully rewritten module graph, so they go last.
    sequence
        .push_if(!is_build, builtin::server::CLIENT_INJECT, || {
            builtin::client_injections_plugin(config)
        })
        .push_if(!is_build, builtin::server::IMPORT_ANALYSIS, || {
            builtin::import_analysis_plugin(config)
        });

    let plugins = sequence.finish();
    info!(
        command = %config.command,
        plugin_count = plugins.len(),
        user_plugins = user.len(),
        "Plugin pipeline composed"
    );
    Ok(plugins)
}
