//! Error types for tensr

use thiserror::Error;

/// Result type alias using tensr's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in tensr operations
#[derive(Error, Debug)]
pub enum Error {
    /// Supplied data length disagrees with the declared shape's element count
    #[error("shape mismatch: data has {got} elements, shape requires {expected}")]
    ShapeMismatch {
        /// Element count the shape requires
        expected: usize,
        /// Element count actually supplied
        got: usize,
    },

    /// Two shapes cannot be right-aligned under the broadcasting rule
    #[error("cannot broadcast shapes {lhs:?} and {rhs:?}")]
    BroadcastIncompatible {
        /// Left-hand side shape
        lhs: Vec<usize>,
        /// Right-hand side shape
        rhs: Vec<usize>,
    },

    /// An operand's buffer length disagrees with its own declared shape
    ///
    /// Defensive check on the identical-shape elementwise path; unreachable
    /// given correct construction.
    #[error("size mismatch: buffer holds {len} elements, shape requires {expected}")]
    SizeMismatch {
        /// Buffer length observed
        len: usize,
        /// Element count the shape requires
        expected: usize,
    },

    /// `dot` operands' contracted dimensions disagree in size
    #[error("dimension mismatch: inner dimensions {lhs} and {rhs} must agree")]
    DimensionMismatch {
        /// Left operand's contracted dimension
        lhs: usize,
        /// Right operand's contracted dimension
        rhs: usize,
    },

    /// `dot` invoked on an unsupported rank combination
    #[error("unsupported ranks for dot: {lhs}-d by {rhs}-d (only 1-d/2-d operands)")]
    UnsupportedRank {
        /// Left operand rank
        lhs: usize,
        /// Right operand rank
        rhs: usize,
    },

    /// I/O failure while reading a table file
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    /// A quoted field was still open at end of input
    #[error("unterminated quoted field starting at byte {offset}")]
    UnterminatedQuote {
        /// Byte offset of the opening quote
        offset: usize,
    },
}

impl Error {
    /// Create a shape mismatch error from element counts
    pub fn shape_mismatch(expected: usize, got: usize) -> Self {
        Self::ShapeMismatch { expected, got }
    }

    /// Create a broadcast incompatibility error from the original shapes
    pub fn broadcast(lhs: &[usize], rhs: &[usize]) -> Self {
        Self::BroadcastIncompatible {
            lhs: lhs.to_vec(),
            rhs: rhs.to_vec(),
        }
    }

    /// Create a dimension mismatch error from the two contracted dimensions
    pub fn dimension_mismatch(lhs: usize, rhs: usize) -> Self {
        Self::DimensionMismatch { lhs, rhs }
    }

    /// Create an unsupported rank error from the two operand ranks
    pub fn unsupported_rank(lhs: usize, rhs: usize) -> Self {
        Self::UnsupportedRank { lhs, rhs }
    }
}
