//! Shared fixtures for integration tests.

#![allow(dead_code)]

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use packhub_core::config::build::ModulePreload;
use packhub_core::config::optimize_deps::OptimizerDisabled;
use packhub_core::config::{AppConfig, Command, ResolvedConfig};
use packhub_core::error::AppError;
use packhub_core::result::AppResult;
use packhub_plugin::hooks::entry::HookEntry;
use packhub_plugin::hooks::handler::{HookContext, HookHandler, HookResult};
use packhub_plugin::plugin::Plugin;
use packhub_plugin::provider::{BuildPluginProvider, BuildPlugins};

/// Handler that does nothing.
#[derive(Debug)]
pub struct Noop;

#[async_trait]
impl HookHandler for Noop {
    async fn handle(&self, _context: &HookContext) -> AppResult<HookResult> {
        Ok(HookResult::Continue)
    }
}

/// Resolve the default configuration for a command.
pub fn resolved(command: Command) -> ResolvedConfig {
    ResolvedConfig::resolve(AppConfig::default(), command)
}

/// Resolve a configuration after applying `edit` to the defaults.
pub fn resolved_with(command: Command, edit: impl FnOnce(&mut AppConfig)) -> ResolvedConfig {
    let mut config = AppConfig::default();
    edit(&mut config);
    ResolvedConfig::resolve(config, command)
}

/// Serve, no watch, no preload, optimizer disabled everywhere.
pub fn minimal_serve() -> ResolvedConfig {
    resolved_with(Command::Serve, |config| {
        config.build.watch = false;
        config.build.module_preload = ModulePreload::Flag(false);
        config.optimize_deps.disabled = OptimizerDisabled::Flag(true);
        config.ssr.optimize_deps.disabled = OptimizerDisabled::Flag(true);
    })
}

/// A plugin with one hook slot.
pub fn plugin(name: &str, hook: packhub_plugin::HookName, entry: HookEntry) -> Arc<Plugin> {
    Arc::new(Plugin::new(name).with_hook(hook, entry))
}

pub fn names(plugins: &[Arc<Plugin>]) -> Vec<String> {
    plugins.iter().map(|p| p.name().to_string()).collect()
}

/// Provider returning fixed plugins and counting how often it is asked.
#[derive(Debug, Default)]
pub struct CountingProvider {
    pub pre: Vec<Arc<Plugin>>,
    pub post: Vec<Arc<Plugin>>,
    pub calls: AtomicUsize,
}

impl CountingProvider {
    pub fn new(pre: &[&str], post: &[&str]) -> Self {
        let build = |names: &[&str]| -> Vec<Arc<Plugin>> {
            names.iter().map(|name| Arc::new(Plugin::new(*name))).collect()
        };
        Self {
            pre: build(pre),
            post: build(post),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl BuildPluginProvider for CountingProvider {
    async fn build_plugins(&self, _config: &ResolvedConfig) -> AppResult<BuildPlugins> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(BuildPlugins {
            pre: self.pre.clone(),
            post: self.post.clone(),
        })
    }
}

/// Provider that always fails.
#[derive(Debug)]
pub struct FailingProvider;

#[async_trait]
impl BuildPluginProvider for FailingProvider {
    async fn build_plugins(&self, _config: &ResolvedConfig) -> AppResult<BuildPlugins> {
        Err(AppError::plugin("bundler plugins failed to load"))
    }
}
