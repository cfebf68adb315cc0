//! Alias plugins.

use async_trait::async_trait;
use serde_json::json;

use packhub_core::config::ResolvedConfig;
use packhub_core::config::resolve::AliasEntry;
use packhub_core::result::AppResult;

use super::builtin;
use crate::hooks::definitions::HookName;
use crate::hooks::handler::{HookContext, HookHandler, HookResult};
use crate::plugin::Plugin;

/// Name of the internal pre-alias plugin.
pub const PRE_ALIAS: &str = "packhub:pre-alias";
/// Name of the entries-based alias plugin.
pub const ALIAS: &str = "alias";

/// Redirects bare imports of pre-bundled dependencies before user aliases
/// run.
pub fn pre_alias_plugin(config: &ResolvedConfig) -> Plugin {
    builtin(PRE_ALIAS, &[HookName::ResolveId]).with_meta("root", json!(config.root))
}

/// Rewrites import specifiers matching the alias table.
pub fn alias_plugin(entries: &[AliasEntry]) -> Plugin {
    let meta = entries
        .iter()
        .map(|entry| json!({ "find": entry.find, "replacement": entry.replacement }))
        .collect();

    Plugin::new(ALIAS)
        .on(
            HookName::ResolveId,
            AliasHook {
                entries: entries.to_vec(),
            },
        )
        .with_meta("entries", serde_json::Value::Array(meta))
}

#[derive(Debug)]
struct AliasHook {
    entries: Vec<AliasEntry>,
}

impl AliasHook {
    /// First matching entry wins. `find` matches the whole specifier or a
    /// `find/` prefix.
    fn rewrite(&self, id: &str) -> Option<String> {
        self.entries.iter().find_map(|entry| {
            if id == entry.find {
                Some(entry.replacement.clone())
            } else {
                id.strip_prefix(entry.find.as_str())
                    .filter(|rest| rest.starts_with('/'))
                    .map(|rest| format!("{}{}", entry.replacement, rest))
            }
        })
    }
}

#[async_trait]
impl HookHandler for AliasHook {
    async fn handle(&self, context: &HookContext) -> AppResult<HookResult> {
        let rewritten = context.str_arg("id").and_then(|id| self.rewrite(id));
        Ok(match rewritten {
            Some(id) => HookResult::Return(json!({ "id": id })),
            None => HookResult::Continue,
        })
    }
}
