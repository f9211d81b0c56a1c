//! Wordiff Core - Word-level diff engine
//!
//! This library splits two texts into word and whitespace tokens, aligns
//! them by minimum edit distance, and reports the result as an ordered list
//! of unchanged, added, deleted and modified tokens.

pub mod change;
pub mod diff;
pub mod matrix;
pub mod render;
pub mod token;

pub use change::{ChangeKind, DiffOp};
pub use diff::{
    compare, CompareOptions, DiffEngine, DiffError, DiffResult, DiffStats, FileDiff,
    DEFAULT_MAX_CELLS,
};
pub use matrix::AlignmentMatrix;
pub use token::{preprocess, tokenize};
