use std::num::ParseIntError;
use std::path::PathBuf;

use thiserror::Error;

/// Reasons reading or parsing puzzle input may fail.
#[derive(Debug, Error)]
pub enum InputError {
    /// The input file does not exist.
    #[error("file not found: {}", path.display())]
    NotFound {
        /// The path that was opened.
        path: PathBuf,
    },

    /// Any other failure reading the input file.
    #[error("error reading {}: {source}", path.display())]
    Io {
        /// The path that was read.
        path: PathBuf,
        /// The underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// A token expected to be an integer was not one. Lines are numbered from 1.
    #[error("line {line}: invalid integer: {source}")]
    ParseInt {
        /// Line holding the bad token.
        line: usize,
        /// Why the token did not parse.
        #[source]
        source: ParseIntError,
    },

    /// Grid rows of differing lengths.
    #[error("row {row} has {found} cells but the first row has {expected}")]
    RaggedGrid {
        /// Index of the first offending row, counting from 0.
        row: usize,
        /// Length of the first row.
        expected: usize,
        /// Length of the offending row.
        found: usize,
    },

    /// A grid with no rows or an empty first row.
    #[error("grid has no cells")]
    EmptyGrid,

    /// A line that does not have the expected layout.
    #[error("line {line}: {reason}")]
    MalformedLine {
        /// The offending line.
        line: usize,
        /// What was expected of it.
        reason: String,
    },
}

impl InputError {
    pub(crate) fn from_io(path: PathBuf, source: std::io::Error) -> Self {
        match source.kind() {
            std::io::ErrorKind::NotFound => Self::NotFound { path },
            _ => Self::Io { path, source },
        }
    }
}
