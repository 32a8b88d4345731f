//! Error types for quadroots

use crate::dtype::Precision;
use thiserror::Error;

/// Result type alias using quadroots' Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors reported by the typed root API
///
/// The core [`compute_roots`](crate::algorithm::quadratic::compute_roots) never
/// fails: invalid input is encoded in its [`RootType`](crate::RootType). These
/// variants are produced when such a classification is converted into
/// [`Roots`](crate::Roots).
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// At least one coefficient is NaN
    #[error("Invalid {precision} coefficients: NaN input")]
    NanCoefficient {
        /// Precision of the offending equation
        precision: Precision,
    },

    /// At least one coefficient is infinite
    #[error("Invalid {precision} coefficients: infinite input")]
    InfiniteCoefficient {
        /// Precision of the offending equation
        precision: Precision,
    },

    /// `a = b = c = 0`: every number is a root
    #[error("Indeterminate equation: all coefficients are zero")]
    Indeterminate,

    /// `a = b = 0` with `c ≠ 0`: no number is a root
    #[error("Inconsistent equation: nonzero constant with vanishing a and b")]
    Inconsistent,
}
