//! Text and JSON output for pipeline listings.

use serde::Serialize;

use packhub_core::error::AppError;
use packhub_plugin::hooks::definitions::HookName;
use packhub_plugin::pipeline::PluginPipeline;
use packhub_plugin::plugin::PluginSummary;

/// Output format selection
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// One plugin per line
    #[default]
    Text,
    /// JSON document
    Json,
}

#[derive(Debug, Serialize)]
struct HookListing {
    hook: HookName,
    plugins: Vec<PluginSummary>,
}

/// Print every plugin in pipeline order.
pub fn print_pipeline(pipeline: &PluginPipeline, format: OutputFormat) -> Result<(), AppError> {
    match format {
        OutputFormat::Text => {
            for (index, plugin) in pipeline.plugins().iter().enumerate() {
                let hooks: Vec<_> = plugin
                    .summary()
                    .hooks
                    .iter()
                    .map(|slot| slot.hook.as_str())
                    .collect();
                println!("{:>3}  {:<36} {}", index + 1, plugin.name(), hooks.join(", "));
            }
        }
        OutputFormat::Json => {
            let plugins: Vec<_> = pipeline.plugins().iter().map(|p| p.summary()).collect();
            println!("{}", serde_json::to_string_pretty(&plugins)?);
        }
    }
    Ok(())
}

/// Print the plugins taking part in one hook, in execution order.
pub fn print_hook(
    pipeline: &PluginPipeline,
    hook: HookName,
    format: OutputFormat,
) -> Result<(), AppError> {
    let sorted = pipeline.sorted_plugins(hook);
    match format {
        OutputFormat::Text => {
            if sorted.is_empty() {
                println!("No plugins implement `{}`.", hook);
            }
            for (index, plugin) in sorted.iter().enumerate() {
                let order = plugin
                    .normalized_hook(hook)
                    .and_then(|entry| entry.order)
                    .map(|order| order.to_string())
                    .unwrap_or_default();
                println!("{:>3}  {:<36} {}", index + 1, plugin.name(), order);
            }
        }
        OutputFormat::Json => {
            let listing = HookListing {
                hook,
                plugins: sorted.iter().map(|p| p.summary()).collect(),
            };
            println!("{}", serde_json::to_string_pretty(&listing)?);
        }
    }
    Ok(())
}
