//! Stats panel

use crossterm::style::Stylize;
use unicode_width::UnicodeWidthStr;
use wordiff_core::DiffStats;

/// Render counters under a rule as wide as the counter line
pub fn render_stats(stats: &DiffStats, color: bool) -> String {
    let added = format!("+{} added", stats.additions);
    let deleted = format!("-{} deleted", stats.deletions);
    let modified = format!("~{} modified", stats.modifications);
    let unchanged = format!("{} unchanged", stats.unchanged);

    let plain = format!("{added}  {deleted}  {modified}  {unchanged}");
    let rule = "─".repeat(plain.width());

    let line = if color {
        format!(
            "{}  {}  {}  {}",
            added.green(),
            deleted.red(),
            modified.yellow(),
            unchanged.dim()
        )
    } else {
        plain
    };

    format!("{rule}\n{line}\n")
}
