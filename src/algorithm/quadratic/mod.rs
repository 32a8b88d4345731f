//! Robust roots of quadratic equations
//!
//! Solves `a·x² + b·x + c = 0` for real coefficients in half, single and double
//! precision without spurious overflow, underflow or cancellation. A single
//! generic body serves every [`IeeeFloat`](crate::dtype::IeeeFloat) type.
//!
//! # Functions
//!
//! - [`compute_roots`] - Classify the equation and compute its roots
//! - [`Quadratic::solve`] - The same, returning typed [`Roots`] or an error
//!
//! # Accuracy
//!
//! For finite nonzero coefficients with roots in range, each real root (or the
//! real and imaginary part of a complex pair) is within a few ulps of the exact
//! value. The textbook formula fails in three places, each handled here:
//!
//! - `b² − 4ac` overflows or underflows: the discriminant is estimated from
//!   rescaled operands and its square root carried as `root · 2^scale`
//! - `b² ≈ 4ac`: a compensated determinant recovers the cancelled bits
//! - `−b ± R` cancels for the smaller root: it is recovered from the product
//!   of the roots, `c/a`
//!
//! # Output Convention
//!
//! [`RootResult`] carries two values whose meaning depends on its
//! [`RootType`]; see the table there. For complex pairs the second value is the
//! nonnegative imaginary magnitude.

pub mod core;
pub mod equation;
pub mod types;

pub use self::core::compute_roots;
pub use equation::Quadratic;
pub use types::{RootResult, RootType, Roots};
