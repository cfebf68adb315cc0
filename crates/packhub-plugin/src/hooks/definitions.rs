//! Hook names and ordering tags.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use packhub_core::error::AppError;

/// Every extension point a plugin may implement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HookName {
    // ── Build ──
    /// Replace or adjust the input options.
    Options,
    /// A build is starting.
    BuildStart,
    /// Resolve an import specifier to a module id.
    ResolveId,
    /// Resolve a dynamic `import()` target.
    ResolveDynamicImport,
    /// Load the source of a module id.
    Load,
    /// Transform loaded source.
    Transform,
    /// A module has been fully parsed.
    ModuleParsed,
    /// The module graph is complete.
    BuildEnd,
    /// A watched file changed.
    WatchChange,
    /// The watcher is closing.
    CloseWatcher,

    // ── Output generation ──
    /// Replace or adjust the output options.
    OutputOptions,
    /// Output generation is starting.
    RenderStart,
    /// Rewrite a dynamic import expression.
    RenderDynamicImport,
    /// Rewrite `import.meta.url` for an emitted file.
    ResolveFileUrl,
    /// Rewrite an `import.meta` property.
    ResolveImportMeta,
    /// Text prepended to a chunk.
    Banner,
    /// Text appended to a chunk.
    Footer,
    /// Text prepended inside the chunk wrapper.
    Intro,
    /// Text appended inside the chunk wrapper.
    Outro,
    /// Contribute to a chunk's content hash.
    AugmentChunkHash,
    /// Transform a rendered chunk.
    RenderChunk,
    /// Inspect or edit the bundle before it is written.
    GenerateBundle,
    /// The bundle has been written.
    WriteBundle,
    /// Output generation failed.
    RenderError,
    /// The bundle is closed.
    CloseBundle,

    // ── Dev server and configuration ──
    /// Adjust the user configuration before resolution.
    Config,
    /// The configuration has been resolved.
    ConfigResolved,
    /// Configure the dev server.
    ConfigureServer,
    /// Configure the preview server.
    ConfigurePreviewServer,
    /// Transform `index.html`.
    TransformIndexHtml,
    /// Custom hot-update handling.
    HandleHotUpdate,
}

impl HookName {
    /// All hook names, in declaration order.
    pub const ALL: [HookName; 31] = [
        Self::Options,
        Self::BuildStart,
        Self::ResolveId,
        Self::ResolveDynamicImport,
        Self::Load,
        Self::Transform,
        Self::ModuleParsed,
        Self::BuildEnd,
        Self::WatchChange,
        Self::CloseWatcher,
        Self::OutputOptions,
        Self::RenderStart,
        Self::RenderDynamicImport,
        Self::ResolveFileUrl,
        Self::ResolveImportMeta,
        Self::Banner,
        Self::Footer,
        Self::Intro,
        Self::Outro,
        Self::AugmentChunkHash,
        Self::RenderChunk,
        Self::GenerateBundle,
        Self::WriteBundle,
        Self::RenderError,
        Self::CloseBundle,
        Self::Config,
        Self::ConfigResolved,
        Self::ConfigureServer,
        Self::ConfigurePreviewServer,
        Self::TransformIndexHtml,
        Self::HandleHotUpdate,
    ];

    /// Returns the string name of this hook.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Options => "options",
            Self::BuildStart => "build_start",
            Self::ResolveId => "resolve_id",
            Self::ResolveDynamicImport => "resolve_dynamic_import",
            Self::Load => "load",
            Self::Transform => "transform",
            Self::ModuleParsed => "module_parsed",
            Self::BuildEnd => "build_end",
            Self::WatchChange => "watch_change",
            Self::CloseWatcher => "close_watcher",
            Self::OutputOptions => "output_options",
            Self::RenderStart => "render_start",
            Self::RenderDynamicImport => "render_dynamic_import",
            Self::ResolveFileUrl => "resolve_file_url",
            Self::ResolveImportMeta => "resolve_import_meta",
            Self::Banner => "banner",
            Self::Footer => "footer",
            Self::Intro => "intro",
            Self::Outro => "outro",
            Self::AugmentChunkHash => "augment_chunk_hash",
            Self::RenderChunk => "render_chunk",
            Self::GenerateBundle => "generate_bundle",
            Self::WriteBundle => "write_bundle",
            Self::RenderError => "render_error",
            Self::CloseBundle => "close_bundle",
            Self::Config => "config",
            Self::ConfigResolved => "config_resolved",
            Self::ConfigureServer => "configure_server",
            Self::ConfigurePreviewServer => "configure_preview_server",
            Self::TransformIndexHtml => "transform_index_html",
            Self::HandleHotUpdate => "handle_hot_update",
        }
    }
}

impl fmt::Display for HookName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HookName {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|hook| hook.as_str() == s)
            .ok_or_else(|| AppError::plugin(format!("Unknown hook '{s}'")))
    }
}

/// Ordering tag carried by a decorated hook entry.
///
/// An untagged entry runs in the `normal` bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HookOrder {
    /// Runs before untagged entries.
    Pre,
    /// Runs after untagged entries.
    Post,
}

impl fmt::Display for HookOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pre => f.write_str("pre"),
            Self::Post => f.write_str("post"),
        }
    }
}
