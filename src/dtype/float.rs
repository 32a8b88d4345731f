//! IeeeFloat trait mapping Rust float types to their binary layout

use super::Precision;
use bytemuck::Pod;
use std::fmt::{Debug, Display};

/// Trait for IEEE-754 binary floating-point types the root finder operates on
///
/// This trait is the single seam between the generic algorithms and a concrete
/// precision. It exposes the bit layout of the format and the handful of
/// primitive operations the algorithms need beyond [`num_traits::Float`].
///
/// # Bounds
/// - `num_traits::Float` - sqrt, abs, classification, `mul_add`, limits
/// - `Pod` - Safe bit reinterpretation (bytemuck)
/// - `Debug + Display + Send + Sync + 'static` - Basic trait requirements
///
/// # Implementors
/// - `f32`, `f64`
/// - `half::f16` (requires "f16" feature); arithmetic that has no native
///   half-precision form is evaluated in `f64` and rounded once.
pub trait IeeeFloat: num_traits::Float + Pod + Debug + Display + Send + Sync + 'static {
    /// Unsigned integer with the same width as the float
    type Bits: Pod + Into<u64>;

    /// The binary format this type stores
    const PRECISION: Precision;

    /// Total storage width in bits
    const BITS: u32;

    /// Number of explicitly stored mantissa bits
    const MANTISSA_BITS: u32;

    /// Width of the biased exponent field
    const EXPONENT_BITS: u32;

    /// Bias subtracted from the exponent field
    const EXPONENT_BIAS: i32;

    /// Significand precision including the implicit leading bit
    const MANTISSA_DIGITS: i32 = Self::MANTISSA_BITS as i32 + 1;

    /// Reinterpret the value as its same-width unsigned integer
    #[inline]
    fn to_raw_bits(self) -> Self::Bits {
        bytemuck::cast(self)
    }

    /// Raw bit pattern widened to `u64`
    #[inline]
    fn raw_bits(self) -> u64 {
        self.to_raw_bits().into()
    }

    /// Multiply by `2^exp`, rounding once at the very end
    ///
    /// Intermediate overflow or underflow never occurs, even when `exp` lies far
    /// outside the exponent range of the format.
    fn scale_pow2(self, exp: i32) -> Self;

    /// Fused multiply-add: `self * a + b` with a single rounding
    #[inline]
    fn fused_mul_add(self, a: Self, b: Self) -> Self {
        self.mul_add(a, b)
    }

    /// Sign of the value as `-1`, `0` or `+1`
    ///
    /// Unlike `signum`, both zeros map to zero.
    #[inline]
    fn sign(self) -> Self {
        if self > Self::zero() {
            Self::one()
        } else if self < Self::zero() {
            -Self::one()
        } else {
            Self::zero()
        }
    }

    /// Magnitude of `self` with the sign bit of `sign`
    #[inline]
    fn copy_sign(self, sign: Self) -> Self {
        if sign.is_sign_negative() {
            -self.abs()
        } else {
            self.abs()
        }
    }

    /// The constant 2
    #[inline]
    fn two() -> Self {
        Self::one() + Self::one()
    }

    /// The constant 0.5
    #[inline]
    fn half() -> Self {
        Self::one() / Self::two()
    }
}

impl IeeeFloat for f64 {
    type Bits = u64;

    const PRECISION: Precision = Precision::Double;
    const BITS: u32 = 64;
    const MANTISSA_BITS: u32 = 52;
    const EXPONENT_BITS: u32 = 11;
    const EXPONENT_BIAS: i32 = 1023;

    #[inline]
    fn scale_pow2(self, exp: i32) -> Self {
        libm::scalbn(self, exp)
    }
}

impl IeeeFloat for f32 {
    type Bits = u32;

    const PRECISION: Precision = Precision::Single;
    const BITS: u32 = 32;
    const MANTISSA_BITS: u32 = 23;
    const EXPONENT_BITS: u32 = 8;
    const EXPONENT_BIAS: i32 = 127;

    #[inline]
    fn scale_pow2(self, exp: i32) -> Self {
        libm::scalbnf(self, exp)
    }
}

// ============================================================================
// Half-precision floating point (requires "f16" feature)
// ============================================================================

// Every f16 is exact in f64, so scaling there is exact. A product of two f16
// values needs 22 bits and is exact too; the f64 sum rounds only when the
// operands are more than 2^53 apart, and then either the result overflows f16
// or the smaller operand lies far below half an f16 ulp. The conversion back
// is therefore the only rounding that reaches the f16 result.
#[cfg(feature = "f16")]
impl IeeeFloat for half::f16 {
    type Bits = u16;

    const PRECISION: Precision = Precision::Half;
    const BITS: u32 = 16;
    const MANTISSA_BITS: u32 = 10;
    const EXPONENT_BITS: u32 = 5;
    const EXPONENT_BIAS: i32 = 15;

    #[inline]
    fn scale_pow2(self, exp: i32) -> Self {
        half::f16::from_f64(libm::scalbn(self.to_f64(), exp))
    }

    #[inline]
    fn fused_mul_add(self, a: Self, b: Self) -> Self {
        half::f16::from_f64(self.to_f64().mul_add(a.to_f64(), b.to_f64()))
    }
}
