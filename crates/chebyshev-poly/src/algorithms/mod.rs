//! Chebyshev series algorithms.
//!
//! Slice-level kernels used by [`ChebyshevPoly`](crate::ChebyshevPoly):
//! - Product-to-sum multiplication
//! - Clenshaw evaluation

pub mod clenshaw;
pub mod product;
