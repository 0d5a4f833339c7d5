//! Invariant violations raised by the algebra.
//!
//! None of these is recoverable: each one means either a bug or inputs that
//! break the homogeneity precondition. Callers abort the computation.

use thiserror::Error;

use crate::bidegree::Bidegree;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AlgebraError {
    /// A GF(2) cancellation found a different exponent on the row it should clear.
    #[error(
        "cancellation mismatch on row {row}: stored {stored}, incoming {incoming} \
         (element not homogeneous?)"
    )]
    CancellationMismatch {
        row: usize,
        stored: Bidegree,
        incoming: Bidegree,
    },
    /// A stored (non-transient) exponent went negative.
    #[error("negative exponent {exp} stored on row {row}")]
    NegativeExponent { row: usize, exp: Bidegree },
    /// A zero generator was found in a basis.
    #[error("generator {index} of the basis is zero")]
    NullGenerator { index: usize },
    #[error("saturation stopped: basis grew past {limit} generators")]
    BasisLimit { limit: usize },
    #[error("saturation stopped: more than {limit} pairs examined")]
    PairLimit { limit: u64 },
}
