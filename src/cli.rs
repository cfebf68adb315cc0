//! Command-line arguments and dispatch.

use clap::{Parser, Subcommand};

use packhub_core::config::{AppConfig, Command, ResolvedConfig};
use packhub_core::error::AppError;
use packhub_plugin::composer::UserPlugins;
use packhub_plugin::hooks::definitions::HookName;
use packhub_plugin::pipeline::PluginPipeline;
use packhub_plugin::provider::EmptyBuildPlugins;

use crate::output::{self, OutputFormat};

/// PackHub: plugin pipeline inspector
#[derive(Debug, Parser)]
#[command(name = "packhub", version, about, long_about = None)]
pub struct Cli {
    /// Directory holding `default.toml` and the environment overlays
    #[arg(short, long, default_value = "config")]
    pub config_dir: String,

    /// Environment overlay to apply on top of `default.toml`
    #[arg(short, long, default_value = "development")]
    pub env: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Print the resolved order of one hook instead of the whole pipeline
    #[arg(long, global = true)]
    pub hook: Option<HookName>,

    /// Command to compose the pipeline for
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Compose the production build pipeline
    Build {
        /// Rebuild on file changes
        #[arg(short, long)]
        watch: bool,
    },
    /// Compose the dev server pipeline
    #[command(alias = "dev")]
    Serve,
}

impl Cli {
    /// Load configuration from the config directory and environment.
    pub fn load_configuration(&self) -> Result<AppConfig, AppError> {
        let mut config = AppConfig::load(&self.config_dir, &self.env)?;
        if let Commands::Build { watch: true } = self.command {
            config.build.watch = true;
        }
        Ok(config)
    }

    /// Execute the command.
    pub async fn execute(&self, config: AppConfig) -> Result<(), AppError> {
        let command = match self.command {
            Commands::Build { .. } => Command::Build,
            Commands::Serve => Command::Serve,
        };

        tracing::info!(
            command = %command,
            config_dir = %self.config_dir,
            env = %self.env,
            "Composing plugin pipeline"
        );

        let resolved = ResolvedConfig::resolve(config, command);
        let pipeline =
            PluginPipeline::compose(&resolved, &UserPlugins::default(), &EmptyBuildPlugins).await?;

        match self.hook {
            Some(hook) => output::print_hook(&pipeline, hook, self.format),
            None => output::print_pipeline(&pipeline, self.format),
        }
    }
}
