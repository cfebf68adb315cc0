//! Build-mode configuration.

use serde::{Deserialize, Serialize};

/// Settings that only apply when running the `build` command.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BuildConfig {
    /// Rebuild on file changes.
    #[serde(default)]
    pub watch: bool,
    /// Module preload policy.
    #[serde(default)]
    pub module_preload: ModulePreload,
    /// Produce an SSR bundle. Either a flag or the SSR entry path.
    #[serde(default)]
    pub ssr: SsrBuild,
}

/// Module preload policy: a plain flag or an options table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ModulePreload {
    /// `module_preload = true | false`
    Flag(bool),
    /// `[build.module_preload]` with options.
    Options(ModulePreloadOptions),
}

/// Options table form of [`ModulePreload`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModulePreloadOptions {
    /// Inject the module preload polyfill.
    #[serde(default = "default_true")]
    pub polyfill: bool,
}

impl ModulePreload {
    /// Whether the preload polyfill should be injected.
    pub fn polyfill_enabled(&self) -> bool {
        match self {
            Self::Flag(enabled) => *enabled,
            Self::Options(options) => options.polyfill,
        }
    }
}

impl Default for ModulePreload {
    fn default() -> Self {
        Self::Options(ModulePreloadOptions { polyfill: true })
    }
}

/// SSR build target: a flag or an explicit entry module.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SsrBuild {
    /// `ssr = true | false`
    Flag(bool),
    /// `ssr = "src/entry-server.ts"`
    Entry(String),
}

impl SsrBuild {
    /// Whether the build targets SSR.
    pub fn is_enabled(&self) -> bool {
        match self {
            Self::Flag(enabled) => *enabled,
            Self::Entry(entry) => !entry.is_empty(),
        }
    }
}

impl Default for SsrBuild {
    fn default() -> Self {
        Self::Flag(false)
    }
}

fn default_true() -> bool {
    true
}
