//! Prelude for convenient imports.

pub use async_trait::async_trait;

pub use packhub_core::config::ResolvedConfig;
pub use packhub_core::result::AppResult;

pub use crate::composer::UserPlugins;
pub use crate::hooks::definitions::{HookName, HookOrder};
pub use crate::hooks::entry::HookEntry;
pub use crate::hooks::handler::{FnHook, HookContext, HookHandler, HookResult};
pub use crate::pipeline::PluginPipeline;
pub use crate::plugin::{Enforce, Plugin};
pub use crate::provider::{BuildPluginProvider, BuildPlugins};
