//! Hook handler trait and the values passed through it.

use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use packhub_core::result::AppResult;

use super::definitions::HookName;

/// Arguments for one hook invocation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HookContext {
    /// The hook being invoked.
    pub hook: HookName,
    /// Hook-specific arguments (`{"id": ..., "importer": ...}` for
    /// `resolve_id`, `{"code": ..., "id": ...}` for `transform`, ...).
    pub data: Value,
}

impl HookContext {
    /// Create a new hook context.
    pub fn new(hook: HookName, data: Value) -> Self {
        Self { hook, data }
    }

    /// Reads a string argument.
    pub fn str_arg(&self, key: &str) -> Option<&str> {
        self.data.get(key).and_then(Value::as_str)
    }

    /// Reads a boolean argument, defaulting to `false`.
    pub fn flag(&self, key: &str) -> bool {
        self.data.get(key).and_then(Value::as_bool).unwrap_or(false)
    }
}

/// What a handler produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum HookResult {
    /// Nothing to contribute; the engine moves on to the next handler.
    Continue,
    /// A hook-specific value (resolved id, loaded source, transformed code).
    Return(Value),
}

/// A callable hook implementation.
///
/// The pipeline only orders handlers; invoking them belongs to the engine.
#[async_trait]
pub trait HookHandler: Send + Sync + fmt::Debug + 'static {
    /// Execute the handler.
    async fn handle(&self, context: &HookContext) -> AppResult<HookResult>;
}

/// Shared handle to a hook implementation.
pub type SharedHandler = Arc<dyn HookHandler>;

/// Adapts a synchronous closure into a [`HookHandler`].
pub struct FnHook<F> {
    label: &'static str,
    func: F,
}

impl<F> FnHook<F>
where
    F: Fn(&HookContext) -> AppResult<HookResult> + Send + Sync + 'static,
{
    /// Wraps a closure. `label` only shows up in debug output.
    pub fn new(label: &'static str, func: F) -> Self {
        Self { label, func }
    }

    /// Wraps a closure into a [`SharedHandler`].
    pub fn shared(label: &'static str, func: F) -> SharedHandler {
        Arc::new(Self::new(label, func))
    }
}

impl<F> fmt::Debug for FnHook<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnHook").field("label", &self.label).finish()
    }
}

#[async_trait]
impl<F> HookHandler for FnHook<F>
where
    F: Fn(&HookContext) -> AppResult<HookResult> + Send + Sync + 'static,
{
    async fn handle(&self, context: &HookContext) -> AppResult<HookResult> {
        (self.func)(context)
    }
}
