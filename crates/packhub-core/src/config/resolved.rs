//! Configuration resolved for a single build or serve session.

use std::path::PathBuf;

use tracing::debug;

use super::build::BuildConfig;
use super::optimize_deps::OptimizeDepsConfig;
use super::resolve::ResolveConfig;
use super::ssr::SsrConfig;
use super::transform::{CssConfig, EsbuildConfig, JsonConfig};
use super::{AppConfig, Command};
use crate::traits::deps_optimizer::DepsOptimizerRegistry;
use crate::types::package::PackageCache;

/// Configuration bound to one command, plus the runtime handles the plugin
/// pipeline shares for the lifetime of the session.
///
/// A reload produces a new `ResolvedConfig`; existing ones are never
/// patched in place.
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    /// The command being run.
    pub command: Command,
    /// Project root directory.
    pub root: PathBuf,
    /// Resolved mode name.
    pub mode: String,
    /// Whether this is a production session.
    pub is_production: bool,
    /// Build settings.
    pub build: BuildConfig,
    /// Module resolution settings.
    pub resolve: ResolveConfig,
    /// SSR settings.
    pub ssr: SsrConfig,
    /// Dependency pre-bundling for the client environment.
    pub optimize_deps: OptimizeDepsConfig,
    /// Script-transform settings.
    pub esbuild: EsbuildConfig,
    /// JSON import settings.
    pub json: JsonConfig,
    /// CSS settings.
    pub css: CssConfig,
    /// Shared `package.json` data cache.
    pub package_cache: PackageCache,
    /// Dependency optimizers registered for this session.
    pub deps_optimizers: DepsOptimizerRegistry,
}

impl ResolvedConfig {
    /// Bind an [`AppConfig`] to a command.
    pub fn resolve(config: AppConfig, command: Command) -> Self {
        let mode = config.mode.unwrap_or_else(|| match command {
            Command::Build => "production".to_string(),
            Command::Serve => "development".to_string(),
        });
        let is_production = mode == "production";

        debug!(command = %command, mode = %mode, root = %config.root, "Configuration resolved");

        Self {
            command,
            root: PathBuf::from(config.root),
            mode,
            is_production,
            build: config.build,
            resolve: config.resolve,
            ssr: config.ssr,
            optimize_deps: config.optimize_deps,
            esbuild: config.esbuild,
            json: config.json,
            css: config.css,
            package_cache: PackageCache::new(),
            deps_optimizers: DepsOptimizerRegistry::new(),
        }
    }

    /// Whether the command is `build`.
    pub fn is_build(&self) -> bool {
        self.command == Command::Build
    }

    /// Whether this is a build in watch mode.
    pub fn is_watch(&self) -> bool {
        self.is_build() && self.build.watch
    }

    /// Whether the dependency optimizer runs for the client (`ssr == false`)
    /// or SSR (`ssr == true`) environment.
    pub fn is_deps_optimizer_enabled(&self, ssr: bool) -> bool {
        let optimize_deps = if ssr {
            &self.ssr.optimize_deps
        } else {
            &self.optimize_deps
        };
        optimize_deps.is_enabled_for(self.command)
    }
}
