//! # chebyshev-poly
//!
//! Real polynomials in the Chebyshev basis of the first kind.
//!
//! This crate provides:
//! - A canonical, immutable polynomial type with trailing zeros trimmed
//! - Exact equality and zero tests
//! - Addition, subtraction and scaling
//! - Multiplication via the product-to-sum identity
//!   `T_n * T_m = (T_{n+m} + T_{|n-m|}) / 2`
//! - Evaluation on [-1, 1] via Clenshaw's recurrence
//!
//! ## Example
//!
//! ```
//! use chebyshev_poly::{ChebyshevPoly, T1, T2};
//!
//! let p = T1.multiply(&T2);
//! assert_eq!(p, ChebyshevPoly::new(vec![0.0, 0.5, 0.0, 0.5]));
//! assert!((T2.interpolate(0.5) - (-0.5)).abs() < 1e-12);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod algorithms;
pub mod chebyshev;
pub mod error;

#[cfg(test)]
mod proptests;

pub use chebyshev::{
    normalize, ChebyshevPoly, ONE, T0, T1, T2, T3, T4, T5, T6, T7, T8, T9, X, ZERO,
};
pub use error::{ChebyshevError, Result};
