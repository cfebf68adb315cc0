//! Keeps the shared package data cache in sync with `package.json` edits.

use std::path::Path;

use async_trait::async_trait;
use tracing::debug;

use packhub_core::result::AppResult;
use packhub_core::types::package::PackageCache;

use super::BuiltinHook;
use crate::hooks::definitions::HookName;
use crate::hooks::handler::{HookContext, HookHandler, HookResult};
use crate::plugin::Plugin;

pub const WATCH_PACKAGE_DATA: &str = "packhub:watch-package-data";

/// Drops cached package data when a `package.json` changes on disk.
pub fn watch_package_data_plugin(cache: PackageCache) -> Plugin {
    Plugin::new(WATCH_PACKAGE_DATA)
        .on(
            HookName::BuildStart,
            BuiltinHook {
                plugin: WATCH_PACKAGE_DATA,
            },
        )
        .on(HookName::WatchChange, PackageWatchHook { cache })
}

#[derive(Debug)]
struct PackageWatchHook {
    cache: PackageCache,
}

#[async_trait]
impl HookHandler for PackageWatchHook {
    async fn handle(&self, context: &HookContext) -> AppResult<HookResult> {
        let Some(id) = context.str_arg("id") else {
            return Ok(HookResult::Continue);
        };
        if !id.ends_with("/package.json") {
            return Ok(HookResult::Continue);
        }
        if let Some(dir) = Path::new(id).parent() {
            let removed = self.cache.invalidate_dir(dir);
            debug!(file = %id, removed, "Package data invalidated");
        }
        Ok(HookResult::Continue)
    }
}
