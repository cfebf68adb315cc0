//! Integration tests for per-hook resolution over a composed pipeline.

mod helpers;

use std::sync::Arc;

use serde_json::json;

use packhub_core::config::Command;
use packhub_plugin::composer::UserPlugins;
use packhub_plugin::hooks::definitions::HookName;
use packhub_plugin::hooks::entry::HookEntry;
use packhub_plugin::hooks::handler::{HookContext, HookResult};
use packhub_plugin::pipeline::PluginPipeline;
use packhub_plugin::provider::EmptyBuildPlugins;

use helpers::{Noop, names, plugin};

async fn serve_pipeline(user: UserPlugins) -> PluginPipeline {
    let config = helpers::resolved(Command::Serve);
    PluginPipeline::compose(&config, &user, &EmptyBuildPlugins)
        .await
        .expect("compose")
}

#[tokio::test]
async fn test_resolve_id_order_in_serve_pipeline() {
    let pipeline = serve_pipeline(UserPlugins::default()).await;
    let sorted = pipeline.sorted_plugins(HookName::ResolveId);

    assert_eq!(
        names(&sorted),
        [
            "packhub:pre-alias",
            "alias",
            "packhub:modulepreload-polyfill",
            "packhub:optimized-deps",
            "packhub:resolve",
            "packhub:html-inline-proxy",
            "packhub:wasm-helper",
            "packhub:asset",
            "packhub:dynamic-import-vars",
        ]
    );
}

#[tokio::test]
async fn test_order_tags_move_user_plugins_across_tiers() {
    let user = UserPlugins::new(
        vec![plugin("early-but-post", HookName::Transform, HookEntry::post(Noop))],
        vec![plugin("late-but-pre", HookName::Transform, HookEntry::pre(Noop))],
        vec![plugin("plain", HookName::Transform, HookEntry::direct(Noop))],
    );
    let pipeline = serve_pipeline(user).await;
    let sorted = names(&pipeline.sorted_plugins(HookName::Transform));

    assert_eq!(sorted.first().map(String::as_str), Some("late-but-pre"));
    assert_eq!(sorted.last().map(String::as_str), Some("early-but-post"));

    // Untagged plugins keep pipeline order: user `post` tier, then the
    // server plugins.
    let plain = sorted.iter().position(|n| n == "plain").expect("plain");
    assert_eq!(sorted[plain + 1], "packhub:client-inject");
    assert_eq!(sorted[plain + 2], "packhub:import-analysis");
}

#[tokio::test]
async fn test_malformed_entries_are_filtered() {
    let user = UserPlugins::new(
        vec![],
        vec![
            plugin(
                "no-handler",
                HookName::Load,
                HookEntry::Invalid(json!({ "order": "pre" })),
            ),
            plugin("string", HookName::Load, HookEntry::Invalid(json!("load"))),
            plugin("real", HookName::Load, HookEntry::pre(Noop)),
        ],
        vec![],
    );
    let pipeline = serve_pipeline(user).await;

    let sorted = names(&pipeline.sorted_plugins(HookName::Load));
    assert_eq!(sorted.first().map(String::as_str), Some("real"));
    assert!(!sorted.iter().any(|n| n == "no-handler" || n == "string"));
    assert_eq!(pipeline.sorted_handlers(HookName::Load).len(), sorted.len());
}

#[tokio::test]
async fn test_resolution_is_idempotent_and_independent() {
    let pipeline = serve_pipeline(UserPlugins::default()).await;

    let first = pipeline.sorted_handlers(HookName::Transform);
    let _ = pipeline.sorted_handlers(HookName::Load);
    let _ = pipeline.sorted_plugins(HookName::GenerateBundle);
    let second = pipeline.sorted_handlers(HookName::Transform);

    assert!(Arc::ptr_eq(&first, &second));
    assert_eq!(pipeline.hook_cache().len(), 3);
}

#[tokio::test]
async fn test_unimplemented_hook_resolves_empty() {
    let pipeline = serve_pipeline(UserPlugins::default()).await;
    assert!(pipeline.sorted_plugins(HookName::RenderError).is_empty());
    assert!(pipeline.sorted_handlers(HookName::RenderError).is_empty());
    assert!(pipeline.hook_cache().contains(HookName::RenderError));
}

#[tokio::test]
async fn test_handlers_follow_sorted_plugins() {
    let config = helpers::resolved(Command::Serve);
    let user = UserPlugins::new(
        vec![],
        vec![plugin("first", HookName::ResolveId, HookEntry::pre(Noop))],
        vec![],
    );
    let pipeline = PluginPipeline::compose(&config, &user, &EmptyBuildPlugins)
        .await
        .expect("compose");

    let handlers = pipeline.sorted_handlers(HookName::ResolveId);
    let plugins = pipeline.sorted_plugins(HookName::ResolveId);
    assert_eq!(handlers.len(), plugins.len());

    // The alias plugin comes third: after `first` and the pre-alias plugin.
    let context = HookContext::new(HookName::ResolveId, json!({ "id": "react" }));
    assert_eq!(
        handlers[2].handle(&context).await.expect("alias"),
        HookResult::Continue
    );
    assert_eq!(plugins[2].name(), "alias");
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_resolution_converges() {
    let pipeline = serve_pipeline(UserPlugins::default()).await;

    let tasks: Vec<_> = (0..16)
        .map(|_| {
            let pipeline = pipeline.clone();
            tokio::spawn(async move { pipeline.sorted_plugins(HookName::Transform) })
        })
        .collect();

    let results = futures::future::join_all(tasks).await;
    let cached = pipeline.sorted_plugins(HookName::Transform);
    for result in results {
        let sorted = result.expect("task");
        assert_eq!(names(&sorted), names(&cached));
    }
    assert_eq!(pipeline.hook_cache().len(), 1);
}
