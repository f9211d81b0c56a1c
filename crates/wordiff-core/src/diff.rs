//! Diff computation engine

use crate::change::DiffOp;
use crate::matrix::AlignmentMatrix;
use crate::token::{is_whitespace_token, preprocess, tokenize};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, warn};

/// Default cap on `old_tokens * new_tokens` before the engine refuses to
/// build the alignment table.
pub const DEFAULT_MAX_CELLS: usize = 4_000_000;

#[derive(Error, Debug)]
pub enum DiffError {
    #[error("Failed to read file {}: {source}", .path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error(
        "Input too large: {old_tokens} x {new_tokens} tokens exceeds the limit of {limit} cells"
    )]
    TooLarge {
        old_tokens: usize,
        new_tokens: usize,
        limit: usize,
    },
}

impl DiffError {
    /// Check if the size guard rejected the input
    pub fn is_too_large(&self) -> bool {
        matches!(self, DiffError::TooLarge { .. })
    }
}

/// Normalizations applied to both texts before tokenizing
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompareOptions {
    /// Collapse whitespace runs to a single space and trim both ends
    pub ignore_whitespace: bool,
    /// Lowercase both texts
    pub ignore_case: bool,
}

/// Aggregate counts for a stats panel
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffStats {
    pub additions: usize,
    pub deletions: usize,
    pub modifications: usize,
    pub unchanged: usize,
}

impl DiffStats {
    pub fn total_changes(&self) -> usize {
        self.additions + self.deletions + self.modifications
    }
}

/// Result of a diff operation
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffResult {
    /// All operations in left-to-right order
    pub ops: Vec<DiffOp>,
    /// Number of `Added` ops
    pub additions: usize,
    /// Number of `Deleted` ops
    pub deletions: usize,
    /// Number of `Modified` ops
    pub modifications: usize,
}

impl DiffResult {
    pub fn has_changes(&self) -> bool {
        self.additions + self.deletions + self.modifications > 0
    }

    /// Get only the actual changes (excluding unchanged tokens)
    pub fn changes(&self) -> impl Iterator<Item = &DiffOp> {
        self.ops.iter().filter(|op| op.is_change())
    }

    /// Rebuild the (preprocessed) old text from the ops
    pub fn old_text(&self) -> String {
        self.ops.iter().filter_map(DiffOp::old_value).collect()
    }

    /// Rebuild the (preprocessed) new text from the ops
    pub fn new_text(&self) -> String {
        self.ops.iter().filter_map(DiffOp::new_value).collect()
    }

    pub fn stats(&self) -> DiffStats {
        DiffStats {
            additions: self.additions,
            deletions: self.deletions,
            modifications: self.modifications,
            unchanged: self.ops.len() - self.changes().count(),
        }
    }
}

/// A diff for a pair of files
#[derive(Debug, Clone)]
pub struct FileDiff {
    pub old_path: PathBuf,
    pub new_path: PathBuf,
    pub result: DiffResult,
}

/// The main diff engine
#[derive(Debug, Clone)]
pub struct DiffEngine {
    options: CompareOptions,
    /// Upper bound on `old_tokens * new_tokens`; `None` disables the guard
    max_cells: Option<usize>,
}

impl Default for DiffEngine {
    fn default() -> Self {
        Self {
            options: CompareOptions::default(),
            max_cells: Some(DEFAULT_MAX_CELLS),
        }
    }
}

impl DiffEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(mut self, options: CompareOptions) -> Self {
        self.options = options;
        self
    }

    pub fn with_ignore_whitespace(mut self, enabled: bool) -> Self {
        self.options.ignore_whitespace = enabled;
        self
    }

    pub fn with_ignore_case(mut self, enabled: bool) -> Self {
        self.options.ignore_case = enabled;
        self
    }

    pub fn with_max_cells(mut self, limit: Option<usize>) -> Self {
        self.max_cells = limit;
        self
    }

    pub fn options(&self) -> &CompareOptions {
        &self.options
    }

    pub fn max_cells(&self) -> Option<usize> {
        self.max_cells
    }

    /// Compute diff between two strings using the engine's own options
    pub fn diff_strings(&self, old: &str, new: &str) -> Result<DiffResult, DiffError> {
        self.compare(old, new, &self.options)
    }

    /// Compute a word-level diff between two texts.
    ///
    /// Both texts are normalized per `options`, split into word and
    /// whitespace tokens, aligned by minimum edit distance, and the alignment
    /// is walked back into ops. Fails only when the size guard trips.
    ///
    /// `options` is used as given; the engine's own options (set through
    /// `with_options` and friends) only apply to [`DiffEngine::diff_strings`]
    /// and [`DiffEngine::diff_files`]. The size guard always applies.
    pub fn compare(
        &self,
        text1: &str,
        text2: &str,
        options: &CompareOptions,
    ) -> Result<DiffResult, DiffError> {
        let text1 = preprocess(text1, options);
        let text2 = preprocess(text2, options);
        let old_tokens = tokenize(&text1);
        let new_tokens = tokenize(&text2);

        debug!(
            old_tokens = old_tokens.len(),
            new_tokens = new_tokens.len(),
            ignore_whitespace = options.ignore_whitespace,
            ignore_case = options.ignore_case,
            "comparing texts"
        );

        if let Some(limit) = self.max_cells {
            let cells = old_tokens.len().checked_mul(new_tokens.len());
            if !matches!(cells, Some(cells) if cells <= limit) {
                warn!(
                    old_tokens = old_tokens.len(),
                    new_tokens = new_tokens.len(),
                    limit,
                    "refusing to align oversized input"
                );
                return Err(DiffError::TooLarge {
                    old_tokens: old_tokens.len(),
                    new_tokens: new_tokens.len(),
                    limit,
                });
            }
        }

        let matrix = AlignmentMatrix::build(&old_tokens, &new_tokens);
        let result = reconstruct(&old_tokens, &new_tokens, &matrix);

        debug!(
            distance = matrix.distance(),
            additions = result.additions,
            deletions = result.deletions,
            modifications = result.modifications,
            "diff computed"
        );

        Ok(result)
    }

    /// Compute diff between two files
    pub fn diff_files(&self, old_path: &Path, new_path: &Path) -> Result<FileDiff, DiffError> {
        let read = |path: &Path| {
            std::fs::read_to_string(path).map_err(|source| DiffError::FileRead {
                path: path.to_path_buf(),
                source,
            })
        };
        let old_content = read(old_path)?;
        let new_content = read(new_path)?;

        let result = self.diff_strings(&old_content, &new_content)?;

        Ok(FileDiff {
            old_path: old_path.to_path_buf(),
            new_path: new_path.to_path_buf(),
            result,
        })
    }
}

/// Compare two texts with a default engine
pub fn compare(
    text1: &str,
    text2: &str,
    options: &CompareOptions,
) -> Result<DiffResult, DiffError> {
    DiffEngine::new().compare(text1, text2, options)
}

/// Walk the table from the bottom-right corner back to the origin.
///
/// On a mismatch, substitution wins ties over deletion, and deletion wins
/// ties over insertion. A substitution between two whitespace runs is split
/// into a deletion and an addition rather than reported as modified.
fn reconstruct(old: &[&str], new: &[&str], matrix: &AlignmentMatrix) -> DiffResult {
    let mut ops = Vec::with_capacity(old.len().max(new.len()));
    let mut additions = 0;
    let mut deletions = 0;
    let mut modifications = 0;

    let (mut i, mut j) = (old.len(), new.len());
    while i > 0 || j > 0 {
        if i == 0 {
            ops.push(DiffOp::added(new[j - 1]));
            additions += 1;
            j -= 1;
        } else if j == 0 {
            ops.push(DiffOp::deleted(old[i - 1]));
            deletions += 1;
            i -= 1;
        } else if old[i - 1] == new[j - 1] {
            ops.push(DiffOp::unchanged(old[i - 1]));
            i -= 1;
            j -= 1;
        } else {
            let delete_cost = matrix.get(i - 1, j);
            let insert_cost = matrix.get(i, j - 1);
            let replace_cost = matrix.get(i - 1, j - 1);

            if replace_cost <= delete_cost && replace_cost <= insert_cost {
                if is_whitespace_token(old[i - 1]) && is_whitespace_token(new[j - 1]) {
                    // Reversed below, so this reads deleted-then-added.
                    ops.push(DiffOp::added(new[j - 1]));
                    ops.push(DiffOp::deleted(old[i - 1]));
                    additions += 1;
                    deletions += 1;
                } else {
                    ops.push(DiffOp::modified(old[i - 1], new[j - 1]));
                    modifications += 1;
                }
                i -= 1;
                j -= 1;
            } else if delete_cost <= insert_cost {
                ops.push(DiffOp::deleted(old[i - 1]));
                deletions += 1;
                i -= 1;
            } else {
                ops.push(DiffOp::added(new[j - 1]));
                additions += 1;
                j -= 1;
            }
        }
    }

    ops.reverse();
    DiffResult {
        ops,
        additions,
        deletions,
        modifications,
    }
}
