use core::result::Result as CoreResult;
use std::io::Error as IoError;
use std::path::PathBuf;

use thiserror::Error;

/// Result type for vector operations.
pub type Result<T> = CoreResult<T, VectorError>;

/// Errors that can occur while loading a vector model.
#[derive(Debug, Error)]
pub enum VectorError {
    /// Reading the model file failed.
    #[error("IO error: {0}")]
    Io(#[from] IoError),

    /// A line in the model file could not be parsed.
    #[error("parse error at line {line}: {message}")]
    Parse {
        /// One-based line number of the offending line.
        line: usize,
        /// What went wrong on that line.
        message: String,
    },

    /// A vector's dimensionality disagreed with the rest of the file.
    #[error("dimension mismatch at line {line}: expected {expected}, found {found}")]
    DimensionMismatch {
        /// One-based line number of the offending line.
        line: usize,
        /// Dimensionality established by the first vector.
        expected: usize,
        /// Dimensionality found on this line.
        found: usize,
    },

    /// The model file contained no vectors.
    #[error("empty vector model: {0}")]
    Empty(PathBuf),
}
