//! Script-transform, JSON, and CSS settings.

use serde::{Deserialize, Serialize};

/// `esbuild = false` or an options table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EsbuildConfig {
    /// `esbuild = true | false`
    Flag(bool),
    /// `[esbuild]` options table.
    Options(EsbuildOptions),
}

impl EsbuildConfig {
    /// The script-transform plugin is kept unless explicitly disabled.
    pub fn is_enabled(&self) -> bool {
        !matches!(self, Self::Flag(false))
    }
}

impl Default for EsbuildConfig {
    fn default() -> Self {
        Self::Options(EsbuildOptions::default())
    }
}

/// Script-transform options.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EsbuildOptions {
    /// JSX mode (`"transform"`, `"automatic"`, `"preserve"`).
    #[serde(default)]
    pub jsx: Option<String>,
    /// JSX factory function.
    #[serde(default)]
    pub jsx_factory: Option<String>,
    /// JSX fragment factory.
    #[serde(default)]
    pub jsx_fragment: Option<String>,
    /// Code injected into every transformed JSX file.
    #[serde(default)]
    pub jsx_inject: Option<String>,
}

/// JSON import settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct JsonConfig {
    /// Expose top-level keys as named exports. Unset means `true`.
    #[serde(default)]
    pub named_exports: Option<bool>,
    /// Emit `JSON.parse("...")` instead of object literals.
    #[serde(default)]
    pub stringify: bool,
}

/// CSS settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CssConfig {
    /// Emit source maps for CSS during development.
    #[serde(default)]
    pub dev_sourcemap: bool,
}
