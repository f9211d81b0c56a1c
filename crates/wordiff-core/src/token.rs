//! Input normalization and word/whitespace tokenization

use crate::diff::CompareOptions;
use regex::Regex;
use std::borrow::Cow;
use std::sync::OnceLock;

fn whitespace_run() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\s+").expect("whitespace pattern is valid"))
}

/// Apply the comparison options to a text before tokenizing.
///
/// Whitespace is collapsed first, then case is folded. The input is borrowed
/// untouched when neither option is set.
pub fn preprocess<'a>(text: &'a str, options: &CompareOptions) -> Cow<'a, str> {
    let mut text = Cow::Borrowed(text);
    if options.ignore_whitespace {
        text = Cow::Owned(whitespace_run().replace_all(&text, " ").trim().to_string());
    }
    if options.ignore_case {
        text = Cow::Owned(text.to_lowercase());
    }
    text
}

/// Split text into alternating runs of non-whitespace and whitespace.
///
/// Every whitespace run is kept as its own token, so concatenating the
/// result gives back `text` exactly. Tokens are never empty.
pub fn tokenize(text: &str) -> Vec<&str> {
    let mut tokens = Vec::new();
    let mut last = 0;
    for run in whitespace_run().find_iter(text) {
        if run.start() > last {
            tokens.push(&text[last..run.start()]);
        }
        tokens.push(run.as_str());
        last = run.end();
    }
    if last < text.len() {
        tokens.push(&text[last..]);
    }
    tokens
}

/// True for a whitespace run token
pub fn is_whitespace_token(token: &str) -> bool {
    !token.is_empty() && token.trim().is_empty()
}
