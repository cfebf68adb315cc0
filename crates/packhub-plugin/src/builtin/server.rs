//! Dev-server-only plugins. The composer always places these last.

use packhub_core::config::ResolvedConfig;

use super::builtin;
use crate::hooks::definitions::HookName;
use crate::plugin::Plugin;

pub const CLIENT_INJECT: &str = "packhub:client-inject";
pub const IMPORT_ANALYSIS: &str = "packhub:import-analysis";

/// Fills in the HMR client's runtime constants.
pub fn client_injections_plugin(_config: &ResolvedConfig) -> Plugin {
    builtin(CLIENT_INJECT, &[HookName::BuildStart, HookName::Transform])
}

/// Rewrites imports to dev-server URLs and records the module graph.
pub fn import_analysis_plugin(_config: &ResolvedConfig) -> Plugin {
    builtin(IMPORT_ANALYSIS, &[HookName::ConfigureServer, HookName::Transform])
}
