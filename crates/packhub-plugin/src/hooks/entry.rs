//! Hook entry shapes and their normalization into `(order, handler)`.

use std::sync::Arc;

use serde_json::Value;

use super::definitions::HookOrder;
use super::handler::{HookHandler, SharedHandler};

/// A plugin's value for one hook slot.
#[derive(Debug, Clone)]
pub enum HookEntry {
    /// A bare handler. Runs in the `normal` bucket.
    Direct(SharedHandler),
    /// A handler decorated with an optional ordering tag.
    Ordered(Option<HookOrder>, SharedHandler),
    /// A declared value that is not callable, such as a decorated entry
    /// without a handler. Ignored by hook resolution.
    Invalid(Value),
}

impl HookEntry {
    /// A bare handler entry.
    pub fn direct(handler: impl HookHandler) -> Self {
        Self::Direct(Arc::new(handler))
    }

    /// A handler tagged to run before untagged entries.
    pub fn pre(handler: impl HookHandler) -> Self {
        Self::Ordered(Some(HookOrder::Pre), Arc::new(handler))
    }

    /// A handler tagged to run after untagged entries.
    pub fn post(handler: impl HookHandler) -> Self {
        Self::Ordered(Some(HookOrder::Post), Arc::new(handler))
    }

    /// Extracts the ordering tag and the handler.
    ///
    /// Returns `None` for entries that cannot be called.
    pub fn normalize(&self) -> Option<NormalizedHook<'_>> {
        match self {
            Self::Direct(handler) => Some(NormalizedHook {
                order: None,
                handler,
            }),
            Self::Ordered(order, handler) => Some(NormalizedHook {
                order: *order,
                handler,
            }),
            Self::Invalid(_) => None,
        }
    }
}

/// A hook entry reduced to what hook resolution needs.
#[derive(Debug, Clone, Copy)]
pub struct NormalizedHook<'a> {
    /// Ordering tag; `None` means the `normal` bucket.
    pub order: Option<HookOrder>,
    /// The callable.
    pub handler: &'a SharedHandler,
}
