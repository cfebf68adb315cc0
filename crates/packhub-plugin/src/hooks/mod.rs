//! Hook system: names, entry normalization, per-hook sorting, and the
//! resolution cache.

pub mod cache;
pub mod definitions;
pub mod entry;
pub mod handler;
pub mod sorter;

pub use cache::{HookResolutionCache, ResolvedHook};
pub use definitions::{HookName, HookOrder};
pub use entry::{HookEntry, NormalizedHook};
pub use handler::{FnHook, HookContext, HookHandler, HookResult, SharedHandler};
pub use sorter::sort_plugins_by_hook;
