//! Error types for Chebyshev polynomial evaluation.

use thiserror::Error;

/// Errors raised by the evaluation engine.
///
/// Arithmetic on [`ChebyshevPoly`](crate::ChebyshevPoly) is total; only
/// evaluation has a domain.
#[derive(Clone, Copy, Debug, Error, PartialEq)]
pub enum ChebyshevError {
    /// The evaluation point lies outside the closed interval [-1, 1].
    #[error("interpolation argument {x} is outside [-1, 1]")]
    OutOfDomain {
        /// The rejected evaluation point.
        x: f64,
    },
}

/// Result type for Chebyshev polynomial operations.
pub type Result<T> = std::result::Result<T, ChebyshevError>;
