//! Presentation-free renderers for a [`DiffResult`]
//!
//! These are adapters for callers that want a ready-made string rather than
//! walking the ops themselves. Styling is left entirely to the consumer.

use crate::change::DiffOp;
use crate::diff::DiffResult;

/// Render ops as inline `<span class="...">` elements.
///
/// Class names are `unchanged`, `added`, `deleted` and `modified`. A
/// modified op wraps a `deleted` span and an `added` span so both values
/// stay visible.
pub fn to_html(result: &DiffResult) -> String {
    let mut out = String::new();
    for op in &result.ops {
        match op {
            DiffOp::Modified {
                old_value,
                new_value,
            } => {
                out.push_str(r#"<span class="modified">"#);
                push_span(&mut out, "deleted", old_value);
                push_span(&mut out, "added", new_value);
                out.push_str("</span>");
            }
            DiffOp::Unchanged { value } | DiffOp::Added { value } | DiffOp::Deleted { value } => {
                push_span(&mut out, op.kind().as_str(), value);
            }
        }
    }
    out
}

/// Render ops in git's `--word-diff=plain` style: `[-old-]{+new+}`
pub fn to_markup(result: &DiffResult) -> String {
    let mut out = String::new();
    for op in &result.ops {
        match op {
            DiffOp::Unchanged { value } => out.push_str(value),
            DiffOp::Added { value } => push_wrapped(&mut out, "{+", value, "+}"),
            DiffOp::Deleted { value } => push_wrapped(&mut out, "[-", value, "-]"),
            DiffOp::Modified {
                old_value,
                new_value,
            } => {
                push_wrapped(&mut out, "[-", old_value, "-]");
                push_wrapped(&mut out, "{+", new_value, "+}");
            }
        }
    }
    out
}

fn push_wrapped(out: &mut String, open: &str, text: &str, close: &str) {
    out.push_str(open);
    out.push_str(text);
    out.push_str(close);
}

fn push_span(out: &mut String, class: &str, text: &str) {
    out.push_str("<span class=\"");
    out.push_str(class);
    out.push_str("\">");
    push_escaped(out, text);
    out.push_str("</span>");
}

fn push_escaped(out: &mut String, text: &str) {
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diff::DiffEngine;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_html_spans() {
        let result = DiffEngine::new()
            .diff_strings("hello world", "hello earth")
            .unwrap();

        assert_eq!(
            to_html(&result),
            concat!(
                r#"<span class="unchanged">hello</span>"#,
                r#"<span class="unchanged"> </span>"#,
                r#"<span class="modified"><span class="deleted">world</span>"#,
                r#"<span class="added">earth</span></span>"#,
            )
        );
    }

    #[test]
    fn test_html_escapes_text() {
        let result = DiffEngine::new().diff_strings("", "<b>&'\"").unwrap();
        assert_eq!(
            to_html(&result),
            r#"<span class="added">&lt;b&gt;&amp;&#39;&quot;</span>"#
        );
    }

    #[test]
    fn test_markup() {
        let result = DiffEngine::new()
            .diff_strings("one two three", "one 2 three four")
            .unwrap();

        assert_eq!(to_markup(&result), "one [-two-]{+2+} three{+ +}{+four+}");
    }

    #[test]
    fn test_markup_whitespace_split() {
        let result = DiffEngine::new().diff_strings("a b", "a\tb").unwrap();
        assert_eq!(to_markup(&result), "a[- -]{+\t+}b");
    }

    #[test]
    fn test_empty() {
        let result = DiffResult::default();
        assert_eq!(to_html(&result), "");
        assert_eq!(to_markup(&result), "");
    }
}
