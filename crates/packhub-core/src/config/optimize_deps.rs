//! Dependency optimizer configuration.

use serde::{Deserialize, Serialize};

use super::Command;

/// Dependency pre-bundling settings for one environment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OptimizeDepsConfig {
    /// When the optimizer is switched off.
    #[serde(default)]
    pub disabled: OptimizerDisabled,
    /// Dependencies always pre-bundled.
    #[serde(default)]
    pub include: Vec<String>,
    /// Dependencies never pre-bundled.
    #[serde(default)]
    pub exclude: Vec<String>,
}

impl Default for OptimizeDepsConfig {
    fn default() -> Self {
        Self {
            disabled: OptimizerDisabled::default(),
            include: Vec::new(),
            exclude: Vec::new(),
        }
    }
}

impl OptimizeDepsConfig {
    /// Default for the SSR environment, where pre-bundling is opt-in.
    pub fn ssr_default() -> Self {
        Self {
            disabled: OptimizerDisabled::Flag(true),
            ..Self::default()
        }
    }

    /// Whether the optimizer runs for the given command.
    pub fn is_enabled_for(&self, command: Command) -> bool {
        match (&self.disabled, command) {
            (OptimizerDisabled::Flag(disabled), _) => !disabled,
            (OptimizerDisabled::Phase(DisabledPhase::Build), Command::Build) => false,
            (OptimizerDisabled::Phase(DisabledPhase::Dev), Command::Serve) => false,
            (OptimizerDisabled::Phase(_), _) => true,
        }
    }
}

/// `disabled = true | false | "build" | "dev"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OptimizerDisabled {
    /// Disabled (or enabled) everywhere.
    Flag(bool),
    /// Disabled only in one phase.
    Phase(DisabledPhase),
}

impl Default for OptimizerDisabled {
    fn default() -> Self {
        Self::Phase(DisabledPhase::Build)
    }
}

/// Phase in which the optimizer is switched off.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisabledPhase {
    /// Disabled for `build`.
    Build,
    /// Disabled for `serve`.
    Dev,
}
