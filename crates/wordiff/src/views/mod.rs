//! View rendering modules

mod inline;
mod stats;

pub use inline::{render_inline, InlineStyle};
pub use stats::render_stats;

use crate::cli::OutputFormat;
use crate::config::Settings;
use anyhow::Result;
use wordiff_core::render::{to_html, to_markup};
use wordiff_core::DiffResult;

/// Render a diff in the configured output format
pub fn render(result: &DiffResult, settings: &Settings) -> Result<String> {
    let mut out = match settings.format {
        OutputFormat::Inline => render_inline(
            result,
            &InlineStyle {
                color: settings.color,
                strikethrough_deletions: settings.strikethrough_deletions,
            },
        ),
        OutputFormat::Markup => to_markup(result),
        OutputFormat::Html => to_html(result),
        OutputFormat::Json => serde_json::to_string_pretty(result)?,
        OutputFormat::Stats => return Ok(render_stats(&result.stats(), settings.color)),
    };

    if !out.is_empty() && !out.ends_with('\n') {
        out.push('\n');
    }
    if settings.stats && matches!(settings.format, OutputFormat::Inline | OutputFormat::Markup) {
        out.push_str(&render_stats(&result.stats(), settings.color));
    }
    Ok(out)
}
