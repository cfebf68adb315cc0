//! Module resolution configuration.

use serde::{Deserialize, Serialize};

/// Module resolution settings shared by the alias and resolve plugins.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResolveConfig {
    /// Alias table, applied in order.
    #[serde(default)]
    pub alias: Vec<AliasEntry>,
    /// Extra export conditions.
    #[serde(default)]
    pub conditions: Vec<String>,
    /// `package.json` fields tried when resolving a package entry.
    #[serde(default = "default_main_fields")]
    pub main_fields: Vec<String>,
    /// Extensions tried for extensionless imports.
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,
    /// Packages forced to resolve to a single copy.
    #[serde(default)]
    pub dedupe: Vec<String>,
    /// Try relative paths before bare package names.
    #[serde(default)]
    pub prefer_relative: bool,
    /// Keep symlinked paths instead of their real paths.
    #[serde(default)]
    pub preserve_symlinks: bool,
}

/// One alias rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AliasEntry {
    /// Import specifier (or prefix) to match.
    pub find: String,
    /// Replacement path.
    pub replacement: String,
}

impl Default for ResolveConfig {
    fn default() -> Self {
        Self {
            alias: Vec::new(),
            conditions: Vec::new(),
            main_fields: default_main_fields(),
            extensions: default_extensions(),
            dedupe: Vec::new(),
            prefer_relative: false,
            preserve_symlinks: false,
        }
    }
}

fn default_main_fields() -> Vec<String> {
    ["browser", "module", "jsnext:main", "jsnext"]
        .into_iter()
        .map(String::from)
        .collect()
}

fn default_extensions() -> Vec<String> {
    [".mjs", ".js", ".mts", ".ts", ".jsx", ".tsx", ".json"]
        .into_iter()
        .map(String::from)
        .collect()
}
