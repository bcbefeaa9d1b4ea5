//! Error types shared across the crate.

use thiserror::Error;

/// Result type alias for partitioning operations.
pub type Result<T> = std::result::Result<T, PartitionError>;

/// Errors raised by the partitioning engine and its input collaborators.
///
/// Every variant is fatal to the run that produced it. The heuristics are
/// randomized approximations, so nothing is retried.
#[derive(Error, Debug)]
pub enum PartitionError {
    /// No numbers were supplied, so the residue is undefined.
    #[error("input contains no numbers")]
    EmptyInput,

    /// The algorithm code is not one of `0, 1, 2, 3, 11, 12, 13`.
    #[error("invalid algorithm selector: {0}")]
    InvalidAlgorithmSelector(i64),

    /// An input value is negative or not finite.
    #[error("value {value} at index {index} is not a finite non-negative number")]
    InvalidValue {
        /// 0-based position in the input.
        index: usize,
        /// The rejected value.
        value: f64,
    },

    /// A solution does not fit its input: wrong length, a label outside
    /// `0..n`, or a sign other than `+1` / `-1`.
    #[error("invalid solution: {0}")]
    InvalidSolution(String),

    /// A line of the number file is not a finite non-negative real.
    #[error("line {line}: not a non-negative number: {content:?}")]
    MalformedNumericLine {
        /// 1-based line number.
        line: usize,
        /// The offending line, trimmed.
        content: String,
    },

    /// `pop` was called on an empty heap. Indicates a caller bug.
    #[error("pop on empty heap")]
    EmptyHeap,

    /// A search configuration failed validation.
    #[error("invalid search configuration: {0}")]
    InvalidConfig(String),

    /// Reading the number file failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
