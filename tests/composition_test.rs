//! Integration tests for pipeline composition.

mod helpers;

use std::sync::Arc;

use packhub_core::config::build::{ModulePreload, ModulePreloadOptions, SsrBuild};
use packhub_core::config::optimize_deps::{DisabledPhase, OptimizerDisabled};
use packhub_core::config::transform::EsbuildConfig;
use packhub_core::config::Command;
use packhub_core::error::ErrorKind;
use packhub_plugin::composer::{UserPlugins, resolve_plugins};
use packhub_plugin::plugin::{Enforce, Plugin};
use packhub_plugin::provider::EmptyBuildPlugins;

use helpers::{CountingProvider, FailingProvider, names};

const SERVE_DEFAULT: [&str; 22] = [
    "packhub:watch-package-data",
    "packhub:pre-alias",
    "alias",
    "packhub:modulepreload-polyfill",
    "packhub:optimized-deps",
    "packhub:resolve",
    "packhub:html-inline-proxy",
    "packhub:css",
    "packhub:esbuild",
    "packhub:json",
    "packhub:wasm-helper",
    "packhub:worker",
    "packhub:asset",
    "packhub:wasm-fallback",
    "packhub:define",
    "packhub:css-post",
    "packhub:worker-import-meta-url",
    "packhub:asset-import-meta-url",
    "packhub:dynamic-import-vars",
    "packhub:import-glob",
    "packhub:client-inject",
    "packhub:import-analysis",
];

const BUILD_DEFAULT: [&str; 21] = [
    "packhub:build-metadata",
    "packhub:watch-package-data",
    "packhub:pre-alias",
    "alias",
    "packhub:modulepreload-polyfill",
    "packhub:resolve",
    "packhub:html-inline-proxy",
    "packhub:css",
    "packhub:esbuild",
    "packhub:json",
    "packhub:wasm-helper",
    "packhub:worker",
    "packhub:asset",
    "packhub:wasm-fallback",
    "packhub:define",
    "packhub:css-post",
    "packhub:build-html",
    "packhub:worker-import-meta-url",
    "packhub:asset-import-meta-url",
    "packhub:dynamic-import-vars",
    "packhub:import-glob",
];

#[tokio::test]
async fn test_serve_default_order() {
    let config = helpers::resolved(Command::Serve);
    let plugins = resolve_plugins(&config, &UserPlugins::default(), &EmptyBuildPlugins)
        .await
        .expect("compose");
    assert_eq!(names(&plugins), SERVE_DEFAULT);
}

#[tokio::test]
async fn test_build_default_order() {
    let config = helpers::resolved(Command::Build);
    let plugins = resolve_plugins(&config, &UserPlugins::default(), &EmptyBuildPlugins)
        .await
        .expect("compose");
    assert_eq!(names(&plugins), BUILD_DEFAULT);
}

#[tokio::test]
async fn test_composition_is_deterministic() {
    let config = helpers::resolved(Command::Build);
    let user = UserPlugins::from_plugins([
        Arc::new(Plugin::new("vue")),
        Arc::new(Plugin::new("inspect").with_enforce(Enforce::Pre)),
        Arc::new(Plugin::new("compress").with_enforce(Enforce::Post)),
    ]);
    let provider = CountingProvider::new(&["bundle-pre"], &["bundle-post"]);

    let first = resolve_plugins(&config, &user, &provider).await.expect("first");
    let second = resolve_plugins(&config, &user, &provider).await.expect("second");
    assert_eq!(names(&first), names(&second));
    assert_eq!(provider.calls(), 2);
}

#[tokio::test]
async fn test_minimal_serve_scenario() {
    let config = helpers::minimal_serve();
    let plugins = resolve_plugins(&config, &UserPlugins::default(), &EmptyBuildPlugins)
        .await
        .expect("compose");
    let names = names(&plugins);

    for excluded in [
        "packhub:ensure-watch",
        "packhub:build-metadata",
        "packhub:modulepreload-polyfill",
        "packhub:optimized-deps",
        "packhub:optimized-deps-build",
        "packhub:build-html",
    ] {
        assert!(!names.iter().any(|n| n == excluded), "{excluded} included");
    }
    assert_eq!(
        names[names.len() - 2..],
        ["packhub:client-inject", "packhub:import-analysis"]
    );
}

#[tokio::test]
async fn test_server_plugins_stay_last_after_every_tier() {
    let config = helpers::resolved(Command::Serve);
    let user = UserPlugins::new(
        vec![Arc::new(Plugin::new("user-pre"))],
        vec![Arc::new(Plugin::new("user-normal"))],
        vec![Arc::new(Plugin::new("user-post"))],
    );
    let plugins = resolve_plugins(&config, &user, &EmptyBuildPlugins)
        .await
        .expect("compose");
    let names = names(&plugins);

    assert_eq!(
        names[names.len() - 3..],
        ["user-post", "packhub:client-inject", "packhub:import-analysis"]
    );
}

#[tokio::test]
async fn test_watch_bootstrap_only_in_build_watch() {
    let watch_build = helpers::resolved_with(Command::Build, |c| c.build.watch = true);
    let plugins = resolve_plugins(&watch_build, &UserPlugins::default(), &EmptyBuildPlugins)
        .await
        .expect("compose");
    assert_eq!(plugins[0].name(), "packhub:ensure-watch");
    assert_eq!(plugins[1].name(), "packhub:build-metadata");

    let watch_serve = helpers::resolved_with(Command::Serve, |c| c.build.watch = true);
    let plugins = resolve_plugins(&watch_serve, &UserPlugins::default(), &EmptyBuildPlugins)
        .await
        .expect("compose");
    assert!(plugins.iter().all(|p| p.name() != "packhub:ensure-watch"));
}

#[tokio::test]
async fn test_module_preload_policy() {
    let cases = [
        (ModulePreload::Flag(true), true),
        (ModulePreload::Flag(false), false),
        (ModulePreload::Options(ModulePreloadOptions { polyfill: true }), true),
        (ModulePreload::Options(ModulePreloadOptions { polyfill: false }), false),
    ];

    for (policy, expected) in cases {
        let config =
            helpers::resolved_with(Command::Build, |c| c.build.module_preload = policy.clone());
        let plugins = resolve_plugins(&config, &UserPlugins::default(), &EmptyBuildPlugins)
            .await
            .expect("compose");
        let included = plugins
            .iter()
            .any(|p| p.name() == "packhub:modulepreload-polyfill");
        assert_eq!(included, expected, "{policy:?}");
    }
}

#[tokio::test]
async fn test_optimizer_variant_follows_command() {
    let enabled = |c: &mut packhub_core::config::AppConfig| {
        c.optimize_deps.disabled = OptimizerDisabled::Flag(false);
    };

    let build = helpers::resolved_with(Command::Build, enabled);
    let plugins = resolve_plugins(&build, &UserPlugins::default(), &EmptyBuildPlugins)
        .await
        .expect("compose");
    let names = names(&plugins);
    assert!(names.iter().any(|n| n == "packhub:optimized-deps-build"));
    assert!(!names.iter().any(|n| n == "packhub:optimized-deps"));

    let serve = helpers::resolved_with(Command::Serve, enabled);
    let plugins = resolve_plugins(&serve, &UserPlugins::default(), &EmptyBuildPlugins)
        .await
        .expect("compose");
    assert!(plugins.iter().any(|p| p.name() == "packhub:optimized-deps"));
}

#[tokio::test]
async fn test_optimizer_enabled_by_ssr_environment_alone() {
    let config = helpers::resolved_with(Command::Serve, |c| {
        c.optimize_deps.disabled = OptimizerDisabled::Phase(DisabledPhase::Dev);
        c.ssr.optimize_deps.disabled = OptimizerDisabled::Flag(false);
    });
    assert!(!config.is_deps_optimizer_enabled(false));
    assert!(config.is_deps_optimizer_enabled(true));

    let plugins = resolve_plugins(&config, &UserPlugins::default(), &EmptyBuildPlugins)
        .await
        .expect("compose");
    assert!(plugins.iter().any(|p| p.name() == "packhub:optimized-deps"));
}

#[tokio::test]
async fn test_esbuild_disabled_drops_only_that_slot() {
    let config = helpers::resolved_with(Command::Serve, |c| c.esbuild = EsbuildConfig::Flag(false));
    let plugins = resolve_plugins(&config, &UserPlugins::default(), &EmptyBuildPlugins)
        .await
        .expect("compose");

    let expected: Vec<_> = SERVE_DEFAULT
        .iter()
        .filter(|name| **name != "packhub:esbuild")
        .map(|name| name.to_string())
        .collect();
    assert_eq!(names(&plugins), expected);
}

#[tokio::test]
async fn test_build_provider_splice_positions() {
    let config = helpers::resolved(Command::Build);
    let user = UserPlugins::new(vec![], vec![], vec![Arc::new(Plugin::new("user-post"))]);
    let provider = CountingProvider::new(&["bundle-pre-a", "bundle-pre-b"], &["bundle-post"]);

    let plugins = resolve_plugins(&config, &user, &provider).await.expect("compose");
    let names = names(&plugins);
    let position = |name: &str| names.iter().position(|n| n == name).expect(name);

    assert_eq!(
        position("bundle-pre-a"),
        position("packhub:asset-import-meta-url") + 1
    );
    assert_eq!(position("bundle-pre-b"), position("bundle-pre-a") + 1);
    assert_eq!(
        position("packhub:dynamic-import-vars"),
        position("bundle-pre-b") + 1
    );
    assert_eq!(position("bundle-post"), position("user-post") + 1);
    assert_eq!(position("bundle-post"), names.len() - 1);
}

#[tokio::test]
async fn test_provider_not_consulted_for_serve() {
    let config = helpers::resolved(Command::Serve);
    let provider = CountingProvider::new(&["bundle-pre"], &["bundle-post"]);

    let plugins = resolve_plugins(&config, &UserPlugins::default(), &provider)
        .await
        .expect("compose");
    assert_eq!(provider.calls(), 0);
    assert!(plugins.iter().all(|p| !p.name().starts_with("bundle-")));
}

#[tokio::test]
async fn test_provider_error_propagates() {
    let config = helpers::resolved(Command::Build);
    let err = resolve_plugins(&config, &UserPlugins::default(), &FailingProvider)
        .await
        .expect_err("provider failure");
    assert_eq!(err.kind, ErrorKind::Plugin);
    assert!(err.message.contains("bundler plugins failed to load"));

    let serve = helpers::resolved(Command::Serve);
    assert!(
        resolve_plugins(&serve, &UserPlugins::default(), &FailingProvider)
            .await
            .is_ok()
    );
}

#[tokio::test]
async fn test_ssr_build_keeps_slots() {
    let config = helpers::resolved_with(Command::Build, |c| c.build.ssr = SsrBuild::Flag(true));
    let plugins = resolve_plugins(&config, &UserPlugins::default(), &EmptyBuildPlugins)
        .await
        .expect("compose");
    assert_eq!(names(&plugins), BUILD_DEFAULT);
}
