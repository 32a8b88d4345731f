//! Floating-point type system for quadroots
//!
//! This module provides the [`IeeeFloat`] trait that connects Rust's float types
//! to the root-finding algorithms, the [`Precision`] descriptor naming each
//! supported binary format, and the [`Complex`] pair used to report complex roots.

pub mod complex;
mod float;

pub use complex::Complex;
pub use float::IeeeFloat;

use std::fmt;

// ============================================================================
// Precision Enum
// ============================================================================

/// IEEE-754 binary formats supported by quadroots
///
/// Every [`IeeeFloat`] implementation names its format through
/// [`IeeeFloat::PRECISION`], so generic code (and error messages) can report
/// which instantiation of the algorithm it is running.
///
/// # Format Layout
///
/// | Precision  | Rust type     | Bits | Exponent bits | Significand digits |
/// |------------|---------------|------|---------------|--------------------|
/// | **Half**   | `half::f16`   | 16   | 5             | 11                 |
/// | **Single** | `f32`         | 32   | 8             | 24                 |
/// | **Double** | `f64`         | 64   | 11            | 53                 |
///
/// The significand digit count includes the implicit leading bit.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum Precision {
    /// binary16 (requires the `f16` feature for the matching Rust type)
    Half,
    /// binary32
    Single,
    /// binary64
    Double,
}

impl Precision {
    /// Total storage width in bits
    #[inline]
    pub const fn bits(self) -> u32 {
        match self {
            Self::Half => 16,
            Self::Single => 32,
            Self::Double => 64,
        }
    }

    /// Width of the biased exponent field
    #[inline]
    pub const fn exponent_bits(self) -> u32 {
        match self {
            Self::Half => 5,
            Self::Single => 8,
            Self::Double => 11,
        }
    }

    /// Significand precision, implicit bit included (11, 24, 53)
    #[inline]
    pub const fn mantissa_digits(self) -> u32 {
        self.bits() - self.exponent_bits()
    }

    /// Short name for display (e.g., "f32")
    pub const fn name(self) -> &'static str {
        match self {
            Self::Half => "f16",
            Self::Single => "f32",
            Self::Double => "f64",
        }
    }
}

impl fmt::Display for Precision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
