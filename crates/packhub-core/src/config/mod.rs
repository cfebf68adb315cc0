//! Application configuration schemas.
//!
//! All configuration structs are deserialized from TOML files via the
//! `config` crate. Each sub-module represents a logical configuration
//! section. [`ResolvedConfig`] adds the command being run and the runtime
//! handles shared by the plugin pipeline.

pub mod build;
pub mod logging;
pub mod optimize_deps;
pub mod resolve;
pub mod resolved;
pub mod ssr;
pub mod transform;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use self::build::BuildConfig;
use self::logging::LoggingConfig;
use self::optimize_deps::OptimizeDepsConfig;
use self::resolve::ResolveConfig;
use self::ssr::SsrConfig;
use self::transform::{CssConfig, EsbuildConfig, JsonConfig};

pub use self::resolved::ResolvedConfig;

use crate::error::AppError;

/// Root application configuration.
///
/// This struct is the top-level deserialization target for the merged
/// TOML configuration files (default.toml + environment overlay).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Project root directory.
    #[serde(default = "default_root")]
    pub root: String,
    /// Mode name. Defaults to `production` for builds and `development`
    /// for the dev server.
    #[serde(default)]
    pub mode: Option<String>,
    /// Build settings.
    #[serde(default)]
    pub build: BuildConfig,
    /// Module resolution settings.
    #[serde(default)]
    pub resolve: ResolveConfig,
    /// SSR settings.
    #[serde(default)]
    pub ssr: SsrConfig,
    /// Dependency pre-bundling for the client environment.
    #[serde(default)]
    pub optimize_deps: OptimizeDepsConfig,
    /// Script-transform settings.
    #[serde(default)]
    pub esbuild: EsbuildConfig,
    /// JSON import settings.
    #[serde(default)]
    pub json: JsonConfig,
    /// CSS settings.
    #[serde(default)]
    pub css: CssConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            root: default_root(),
            mode: None,
            build: BuildConfig::default(),
            resolve: ResolveConfig::default(),
            ssr: SsrConfig::default(),
            optimize_deps: OptimizeDepsConfig::default(),
            esbuild: EsbuildConfig::default(),
            json: JsonConfig::default(),
            css: CssConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from TOML files.
    ///
    /// Merges `{dir}/default.toml` with the `{dir}/{env}.toml` overlay and
    /// environment variables prefixed with `PACKHUB__`.
    pub fn load(dir: &str, env: &str) -> Result<Self, AppError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name(&format!("{dir}/default")).required(false))
            .add_source(config::File::with_name(&format!("{dir}/{env}")).required(false))
            .add_source(
                config::Environment::with_prefix("PACKHUB")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| AppError::configuration(format!("Failed to build config: {e}")))?;

        config
            .try_deserialize()
            .map_err(|e| AppError::configuration(format!("Failed to deserialize config: {e}")))
    }

    /// Parse configuration from an in-memory TOML document.
    pub fn from_toml(source: &str) -> Result<Self, AppError> {
        let config = config::Config::builder()
            .add_source(config::File::from_str(source, config::FileFormat::Toml))
            .build()?;

        Ok(config.try_deserialize()?)
    }
}

/// The command a configuration is resolved for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Command {
    /// Production build.
    Build,
    /// Development server.
    Serve,
}

impl Command {
    /// Returns the string name of this command.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Build => "build",
            Self::Serve => "serve",
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Command {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "build" => Ok(Self::Build),
            "serve" | "dev" => Ok(Self::Serve),
            other => Err(AppError::configuration(format!("Unknown command '{other}'"))),
        }
    }
}

fn default_root() -> String {
    ".".to_string()
}
