//! Errors for grid construction and word-list loading.

use std::io;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Rows of different lengths
    #[error("row {row} has {found} cells, expected {expected}")]
    InvalidInput {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// A cell whose token is blank after trimming
    #[error("cell ({row}, {col}) is empty")]
    EmptyToken { row: usize, col: usize },

    /// Grid text that matches none of the accepted layouts
    #[error("invalid grid: {0}")]
    GridParse(String),

    /// A word list or grid file could not be read
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
