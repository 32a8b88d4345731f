//! # quadroots
//!
//! **Robust roots of quadratic equations in half, single and double precision.**
//!
//! quadroots solves `a·x² + b·x + c = 0` for every finite coefficient triple
//! without the overflow, underflow and cancellation failures of the textbook
//! formula, and classifies degenerate or invalid input instead of returning
//! garbage.
//!
//! ## Features
//!
//! - **Any magnitude**: coefficients from the smallest subnormal to the largest
//!   finite value, with intermediate values kept in range
//! - **Accurate**: a compensated discriminant and cancellation-free root
//!   assembly keep results within a few ulps
//! - **Generic**: one algorithm for `f16`, `f32` and `f64` through [`IeeeFloat`]
//! - **Total**: every input, NaN and infinity included, gets a [`RootType`]
//!
//! ## Quick Start
//!
//! ```rust
//! use quadroots::prelude::*;
//!
//! // Raw classification
//! let r = compute_roots(1.0f64, -3.0, 2.0);
//! assert_eq!(r.root_type, RootType::SuccessReal);
//!
//! // Typed roots
//! let roots = Quadratic::new(1.0f32, 2.0, 5.0).solve()?;
//! assert_eq!(roots, Roots::Complex { re: -1.0, im: 2.0 });
//! # Ok::<(), quadroots::Error>(())
//! ```
//!
//! ## Feature Flags
//!
//! - `f16` (default): half-precision support via the `half` crate

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod algorithm;
pub mod dtype;
pub mod error;

pub use algorithm::quadratic::{Quadratic, RootResult, RootType, Roots, compute_roots};
pub use dtype::{Complex, IeeeFloat, Precision};
pub use error::{Error, Result};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::algorithm::quadratic::{
        Quadratic, RootResult, RootType, Roots, compute_roots,
    };
    pub use crate::dtype::{Complex, IeeeFloat, Precision};
    pub use crate::error::{Error, Result};
}
