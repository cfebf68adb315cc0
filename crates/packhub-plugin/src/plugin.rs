//! The plugin object: a name plus named hook slots.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::hooks::definitions::{HookName, HookOrder};
use crate::hooks::entry::{HookEntry, NormalizedHook};
use crate::hooks::handler::HookHandler;

/// Which caller tier a user plugin asks to be placed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Enforce {
    /// Placed before the core resolution plugins.
    Pre,
    /// Placed after the build plugins.
    Post,
}

/// A named unit contributing zero or more hook implementations.
///
/// Names are informational; the pipeline does not require them to be
/// unique.
#[derive(Debug, Clone)]
pub struct Plugin {
    name: String,
    enforce: Option<Enforce>,
    hooks: BTreeMap<HookName, HookEntry>,
    meta: BTreeMap<String, Value>,
}

impl Plugin {
    /// Creates a plugin with no hooks.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            enforce: None,
            hooks: BTreeMap::new(),
            meta: BTreeMap::new(),
        }
    }

    /// Sets the caller tier.
    pub fn with_enforce(mut self, enforce: Enforce) -> Self {
        self.enforce = Some(enforce);
        self
    }

    /// Sets a hook slot, replacing any previous entry.
    pub fn with_hook(mut self, hook: HookName, entry: HookEntry) -> Self {
        self.hooks.insert(hook, entry);
        self
    }

    /// Sets a bare handler for a hook.
    pub fn on(self, hook: HookName, handler: impl HookHandler) -> Self {
        self.with_hook(hook, HookEntry::direct(handler))
    }

    /// Attaches descriptive metadata (resolved options, flags).
    pub fn with_meta(mut self, key: impl Into<String>, value: Value) -> Self {
        self.meta.insert(key.into(), value);
        self
    }

    /// Plugin name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Caller tier, if any.
    pub fn enforce(&self) -> Option<Enforce> {
        self.enforce
    }

    /// The raw entry for a hook.
    pub fn hook(&self, hook: HookName) -> Option<&HookEntry> {
        self.hooks.get(&hook)
    }

    /// The callable entry for a hook, or `None` if the plugin does not
    /// define it or its entry cannot be called.
    pub fn normalized_hook(&self, hook: HookName) -> Option<NormalizedHook<'_>> {
        self.hook(hook).and_then(HookEntry::normalize)
    }

    /// Whether the plugin has a slot for a hook, callable or not.
    pub fn defines(&self, hook: HookName) -> bool {
        self.hooks.contains_key(&hook)
    }

    /// Metadata value by key.
    pub fn meta(&self, key: &str) -> Option<&Value> {
        self.meta.get(key)
    }

    /// A serializable description of the plugin.
    pub fn summary(&self) -> PluginSummary {
        PluginSummary {
            name: self.name.clone(),
            enforce: self.enforce,
            hooks: self
                .hooks
                .iter()
                .map(|(hook, entry)| HookSlotSummary {
                    hook: *hook,
                    order: entry.normalize().and_then(|normalized| normalized.order),
                    callable: entry.normalize().is_some(),
                })
                .collect(),
            meta: self.meta.clone(),
        }
    }
}

/// Serializable view of a [`Plugin`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PluginSummary {
    /// Plugin name.
    pub name: String,
    /// Caller tier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enforce: Option<Enforce>,
    /// Declared hook slots.
    pub hooks: Vec<HookSlotSummary>,
    /// Descriptive metadata.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub meta: BTreeMap<String, Value>,
}

/// Serializable view of one hook slot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HookSlotSummary {
    /// Hook name.
    pub hook: HookName,
    /// Ordering tag.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<HookOrder>,
    /// Whether the slot holds a handler.
    pub callable: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use packhub_core::AppResult;

    use crate::hooks::handler::{HookContext, HookResult};

    #[derive(Debug)]
    struct Noop;

    #[async_trait]
    impl HookHandler for Noop {
        async fn handle(&self, _context: &HookContext) -> AppResult<HookResult> {
            Ok(HookResult::Continue)
        }
    }

    fn noop() -> Noop {
        Noop
    }

    #[test]
    fn test_normalized_hook_skips_invalid_slots() {
        let plugin = Plugin::new("mixed")
            .on(HookName::Load, noop())
            .with_hook(HookName::Transform, HookEntry::Invalid(serde_json::json!({})));

        assert!(plugin.normalized_hook(HookName::Load).is_some());
        assert!(plugin.defines(HookName::Transform));
        assert!(plugin.normalized_hook(HookName::Transform).is_none());
        assert!(plugin.normalized_hook(HookName::ResolveId).is_none());
    }

    #[test]
    fn test_summary_lists_slots() {
        let plugin = Plugin::new("tagged")
            .with_enforce(Enforce::Pre)
            .with_hook(HookName::Transform, HookEntry::post(noop()))
            .with_meta("flag", Value::Bool(true));

        let summary = plugin.summary();
        assert_eq!(summary.name, "tagged");
        assert_eq!(summary.enforce, Some(Enforce::Pre));
        assert_eq!(summary.hooks.len(), 1);
        assert_eq!(summary.hooks[0].order, Some(HookOrder::Post));
        assert!(summary.hooks[0].callable);
        assert_eq!(summary.meta.get("flag"), Some(&Value::Bool(true)));
    }
}
