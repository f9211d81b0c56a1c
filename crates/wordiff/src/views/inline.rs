//! Inline view - old and new tokens interleaved in one stream

use crossterm::style::{StyledContent, Stylize};
use std::fmt::Write;
use wordiff_core::token::is_whitespace_token;
use wordiff_core::{render, DiffOp, DiffResult};

#[derive(Debug, Clone, Copy)]
pub struct InlineStyle {
    pub color: bool,
    pub strikethrough_deletions: bool,
}

/// Render the diff as a single coloured stream.
///
/// Without colour there is no way to tell the sides apart, so the output
/// falls back to word-diff markup.
pub fn render_inline(result: &DiffResult, style: &InlineStyle) -> String {
    if !style.color {
        return render::to_markup(result);
    }

    let mut out = String::new();
    for op in &result.ops {
        match op {
            DiffOp::Unchanged { value } => out.push_str(value),
            DiffOp::Added { value } => push_styled(&mut out, insert_style(value)),
            DiffOp::Deleted { value } => push_styled(&mut out, delete_style(value, style)),
            DiffOp::Modified {
                old_value,
                new_value,
            } => {
                push_styled(&mut out, delete_style(old_value, style));
                push_styled(&mut out, new_value.as_str().yellow().bold());
            }
        }
    }
    out
}

fn push_styled(out: &mut String, content: StyledContent<&str>) {
    // Writing to a String cannot fail.
    let _ = write!(out, "{content}");
}

// Whitespace has no glyphs to colour, so it gets a background instead.
fn insert_style(text: &str) -> StyledContent<&str> {
    if is_whitespace_token(text) {
        text.on_dark_green()
    } else {
        text.green()
    }
}

fn delete_style<'a>(text: &'a str, style: &InlineStyle) -> StyledContent<&'a str> {
    if is_whitespace_token(text) {
        text.on_dark_red()
    } else if style.strikethrough_deletions {
        text.red().crossed_out()
    } else {
        text.red()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wordiff_core::DiffEngine;

    fn diff(old: &str, new: &str) -> DiffResult {
        DiffEngine::new().diff_strings(old, new).unwrap()
    }

    #[test]
    fn test_plain_falls_back_to_markup() {
        let style = InlineStyle {
            color: false,
            strikethrough_deletions: true,
        };
        let out = render_inline(&diff("hello world", "hello earth"), &style);
        assert_eq!(out, "hello [-world-]{+earth+}");
    }

    #[test]
    fn test_colored_keeps_all_text() {
        let style = InlineStyle {
            color: true,
            strikethrough_deletions: true,
        };
        let out = render_inline(&diff("hello world", "hello earth"), &style);

        assert!(out.starts_with("hello "));
        assert!(out.contains("world"));
        assert!(out.contains("earth"));
        assert!(out.contains('\u{1b}'));
    }

    #[test]
    fn test_unchanged_only_has_no_escapes() {
        let style = InlineStyle {
            color: true,
            strikethrough_deletions: false,
        };
        let out = render_inline(&diff("same text", "same text"), &style);
        assert_eq!(out, "same text");
    }
}
