//! Error types for grid construction and parsing

use thiserror::Error;

/// Error type for building a grid from rows or text
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    /// Input contained no cells
    #[error("grid input is empty")]
    Empty,
    /// A row's width differs from the first row's
    #[error("row {row} is {actual} cells wide, expected {expected}")]
    RaggedRows {
        row: usize,
        expected: usize,
        actual: usize,
    },
}
