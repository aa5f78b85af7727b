//! # Word Hunt
//!
//! Finds every dictionary word that can be traced through adjacent cells of a
//! letter grid, as in Boggle or Word Hunt.
//!
//! The dictionary is stored in a prefix [`Trie`]; the grid search walks every
//! simple path from every cell and stops as soon as the letters collected so
//! far are not the start of any dictionary word.

pub mod error;
pub mod grid;
pub mod solver;
pub mod trie;

use std::fs;
use std::path::Path;

use tracing::debug;

pub use error::{Error, Result};
pub use grid::{Coord, Grid};
pub use solver::{solve_grid, solve_grid_with_paths, SolveConfig, WordHuntSolver};
pub use trie::{Trie, TrieNode};

/// Shortest word reported unless configured otherwise
pub const DEFAULT_MIN_LEN: usize = 3;

/// Load a word list, one word per line.
///
/// Lines are trimmed and lower-cased; anything shorter than `min_len` chars or
/// containing a non-alphabetic char is skipped.
pub fn load_words(path: impl AsRef<Path>, min_len: usize) -> Result<Vec<String>> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let words = parse_words(&text, min_len);
    debug!(path = %path.display(), words = words.len(), "loaded word list");
    Ok(words)
}

/// Filter an in-memory word list the same way as [`load_words`].
pub fn parse_words(text: &str, min_len: usize) -> Vec<String> {
    text.lines()
        .map(|line| line.trim().to_lowercase())
        .filter(|w| {
            !w.is_empty() && w.chars().count() >= min_len && w.chars().all(char::is_alphabetic)
        })
        .collect()
}
