//! # packhub-plugin
//!
//! Plugin pipeline for PackHub. Provides:
//!
//! - The plugin object and its hook slots (bare or order-tagged handlers)
//! - The built-in plugin catalogue
//! - Pipeline composition from built-in, caller, and build-mode plugins
//! - Per-hook `pre` / normal / `post` ordering with a memoized cache

pub mod builtin;
pub mod composer;
pub mod hooks;
pub mod pipeline;
pub mod plugin;
pub mod prelude;
pub mod provider;

pub use composer::{UserPlugins, resolve_plugins};
pub use hooks::cache::{HookResolutionCache, ResolvedHook};
pub use hooks::definitions::{HookName, HookOrder};
pub use hooks::entry::HookEntry;
pub use hooks::handler::{FnHook, HookContext, HookHandler, HookResult, SharedHandler};
pub use pipeline::PluginPipeline;
pub use plugin::{Enforce, Plugin};
pub use provider::{BuildPluginProvider, BuildPlugins, EmptyBuildPlugins, StaticBuildPlugins};
