//! Per-hook ordering of the plugin pipeline.

use std::sync::Arc;

use super::definitions::{HookName, HookOrder};
use crate::plugin::Plugin;

/// Orders the plugins that implement `hook`.
///
/// A single stable pass splits the pipeline into `pre`, untagged and `post`
/// buckets and concatenates them. Plugins keep their pipeline order inside a
/// bucket. Plugins without a callable entry for the hook are dropped.
pub fn sort_plugins_by_hook(hook: HookName, plugins: &[Arc<Plugin>]) -> Vec<Arc<Plugin>> {
    let mut pre = Vec::new();
    let mut normal = Vec::new();
    let mut post = Vec::new();

    for plugin in plugins {
        let Some(entry) = plugin.normalized_hook(hook) else {
            continue;
        };
        let bucket = match entry.order {
            Some(HookOrder::Pre) => &mut pre,
            Some(HookOrder::Post) => &mut post,
            None => &mut normal,
        };
        bucket.push(Arc::clone(plugin));
    }

    pre.append(&mut normal);
    pre.append(&mut post);
    pre
}
