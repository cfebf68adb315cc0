//! JSON module plugin.

use serde::{Deserialize, Serialize};
use serde_json::json;

use packhub_core::config::transform::JsonConfig;

use super::builtin;
use crate::hooks::definitions::HookName;
use crate::plugin::Plugin;

pub const JSON: &str = "packhub:json";

/// Options the JSON plugin runs with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JsonPluginOptions {
    /// Expose top-level keys as named exports.
    pub named_exports: bool,
    /// Emit `JSON.parse("...")` instead of object literals.
    pub stringify: bool,
}

impl JsonPluginOptions {
    /// `named_exports` defaults to `true`; the user's JSON settings win.
    pub fn from_config(config: &JsonConfig) -> Self {
        Self {
            named_exports: config.named_exports.unwrap_or(true),
            stringify: config.stringify,
        }
    }
}

/// Turns `.json` imports into ES modules.
pub fn json_plugin(options: JsonPluginOptions, is_build: bool) -> Plugin {
    builtin(JSON, &[HookName::Transform])
        .with_meta("named_exports", json!(options.named_exports))
        .with_meta("stringify", json!(options.stringify))
        .with_meta("is_build", json!(is_build))
}
