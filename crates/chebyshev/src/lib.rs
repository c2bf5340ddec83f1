//! # Chebyshev
//!
//! Real polynomial arithmetic in the Chebyshev basis of the first kind.
//!
//! ## Features
//!
//! - **Canonical values**: trailing zero coefficients are trimmed at construction
//! - **Linear operations**: addition, subtraction, negation and scaling
//! - **Basis product**: multiplication without leaving the Chebyshev basis
//! - **Stable evaluation**: Clenshaw's recurrence on [-1, 1]
//!
//! ## Quick Start
//!
//! ```rust
//! use chebyshev::prelude::*;
//!
//! let p = ChebyshevPoly::new(vec![1.0, 2.0, 0.0]);
//! let q = p.multiply(&T1).add(&ONE);
//! assert_eq!(q.degree(), Some(2));
//! assert!((T2.interpolate(0.0) + 1.0).abs() < 1e-12);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use chebyshev_poly as poly;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use chebyshev_poly::{
        normalize, ChebyshevError, ChebyshevPoly, ONE, T0, T1, T2, T3, T4, T5, T6, T7, T8,
        T9, X, ZERO,
    };
}
