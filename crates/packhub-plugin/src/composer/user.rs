//! Caller-supplied plugin tiers.

use std::sync::Arc;

use crate::plugin::{Enforce, Plugin};

/// The caller's plugins split into the three tiers the composer places at
/// different positions.
#[derive(Debug, Clone, Default)]
pub struct UserPlugins {
    pub pre: Vec<Arc<Plugin>>,
    pub normal: Vec<Arc<Plugin>>,
    pub post: Vec<Arc<Plugin>>,
}

impl UserPlugins {
    pub fn new(pre: Vec<Arc<Plugin>>, normal: Vec<Arc<Plugin>>, post: Vec<Arc<Plugin>>) -> Self {
        Self { pre, normal, post }
    }

    /// Split a flat list by each plugin's `enforce` setting, keeping the
    /// relative order within each tier.
    pub fn from_plugins<I>(plugins: I) -> Self
    where
        I: IntoIterator<Item = Arc<Plugin>>,
    {
        let mut tiers = Self::default();
        for plugin in plugins {
            match plugin.enforce() {
                Some(Enforce::Pre) => tiers.pre.push(plugin),
                Some(Enforce::Post) => tiers.post.push(plugin),
                None => tiers.normal.push(plugin),
            }
        }
        tiers
    }

    pub fn len(&self) -> usize {
        self.pre.len() + self.normal.len() + self.post.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
