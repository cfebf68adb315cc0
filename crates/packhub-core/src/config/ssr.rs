//! Server-side rendering configuration.

use serde::{Deserialize, Serialize};

use super::optimize_deps::OptimizeDepsConfig;

/// SSR settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SsrConfig {
    /// Output module format of the SSR bundle.
    #[serde(default)]
    pub format: SsrFormat,
    /// Runtime the SSR bundle targets.
    #[serde(default)]
    pub target: SsrTarget,
    /// Dependencies always externalized.
    #[serde(default)]
    pub external: Vec<String>,
    /// Dependencies always bundled.
    #[serde(default)]
    pub no_external: Vec<String>,
    /// Dependency pre-bundling for the SSR environment.
    #[serde(default = "OptimizeDepsConfig::ssr_default")]
    pub optimize_deps: OptimizeDepsConfig,
}

impl Default for SsrConfig {
    fn default() -> Self {
        Self {
            format: SsrFormat::default(),
            target: SsrTarget::default(),
            external: Vec::new(),
            no_external: Vec::new(),
            optimize_deps: OptimizeDepsConfig::ssr_default(),
        }
    }
}

/// SSR output module format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SsrFormat {
    /// ES modules.
    #[default]
    Esm,
    /// CommonJS.
    Cjs,
}

/// SSR runtime target.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SsrTarget {
    /// Node.js.
    #[default]
    Node,
    /// Web workers and edge runtimes.
    Webworker,
}

impl SsrConfig {
    /// Whether an import should stay external in the SSR bundle.
    ///
    /// Relative, absolute, and virtual ids are always bundled. Bare package
    /// imports are externalized unless listed in `no_external`; `external`
    /// wins over everything else.
    pub fn should_externalize(&self, id: &str) -> bool {
        let package = package_name(id);
        if self.external.iter().any(|name| name == package) {
            return true;
        }
        if !is_bare_import(id) {
            return false;
        }
        if self.target == SsrTarget::Webworker {
            return false;
        }
        !self.no_external.iter().any(|name| name == package)
    }
}

fn is_bare_import(id: &str) -> bool {
    !(id.is_empty()
        || id.starts_with('.')
        || id.starts_with('/')
        || id.starts_with('\0')
        || id.starts_with("virtual:")
        || id.contains(":/"))
}

/// `@scope/name/sub/path` → `@scope/name`, `name/sub` → `name`.
fn package_name(id: &str) -> &str {
    let segments = if id.starts_with('@') { 2 } else { 1 };
    match id.match_indices('/').nth(segments - 1) {
        Some((index, _)) => &id[..index],
        None => id,
    }
}
