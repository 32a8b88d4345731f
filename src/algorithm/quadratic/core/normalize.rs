//! Exponent/mantissa decomposition of finite floats

use crate::dtype::IeeeFloat;

/// A finite value split into sign, power of two and mantissa
///
/// For every finite nonzero input `sign · 2^exponent · mantissa` reproduces the
/// value bit for bit, with `1 ≤ mantissa < 2`. Zero of either sign maps to
/// `(+1, 0, 0)`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct NormalizedForm<F> {
    /// `+1` or `-1`
    pub sign: i32,
    /// Unbiased binary exponent
    pub exponent: i32,
    /// Significand in `[1, 2)`, or zero for a zero input
    pub mantissa: F,
}

impl<F: IeeeFloat> NormalizedForm<F> {
    /// Returns true for a negative input
    #[inline]
    pub fn is_negative(&self) -> bool {
        self.sign < 0
    }

    /// Rebuild the original value
    #[inline]
    pub fn value(&self) -> F {
        apply_sign(self.mantissa.scale_pow2(self.exponent), self.sign)
    }
}

/// Decompose a finite value into [`NormalizedForm`]
///
/// # Algorithm
///
/// 1. Reinterpret the value as its same-width unsigned integer
/// 2. Read the sign bit and the biased exponent field, subtract the bias
/// 3. Scale `|x|` by `2^-exponent`, which is exact
///
/// Subnormals have an all-zero exponent field, so step 3 leaves a value below
/// one. That value is itself a normal float and is normalized once more, its
/// exponent folded into the outer one. Recursion therefore stops after at most
/// two levels.
///
/// # Panics
///
/// Debug builds assert that `x` is finite. Callers route NaN and infinities
/// through the special-case classifier first.
pub fn normalize<F: IeeeFloat>(x: F) -> NormalizedForm<F> {
    debug_assert!(x.is_finite(), "normalize requires a finite value, got {x}");

    if x == F::zero() {
        return NormalizedForm {
            sign: 1,
            exponent: 0,
            mantissa: F::zero(),
        };
    }

    let bits = x.raw_bits();
    let sign = if (bits >> (F::BITS - 1)) & 1 == 1 { -1 } else { 1 };
    let field = (bits >> F::MANTISSA_BITS) & ((1u64 << F::EXPONENT_BITS) - 1);
    let exponent = field as i32 - F::EXPONENT_BIAS;
    let mantissa = x.abs().scale_pow2(-exponent);

    if field != 0 {
        return NormalizedForm {
            sign,
            exponent,
            mantissa,
        };
    }

    let inner = normalize(mantissa);
    NormalizedForm {
        sign,
        exponent: exponent + inner.exponent,
        mantissa: inner.mantissa,
    }
}

/// Negate `value` when `sign` is negative
#[inline]
pub(crate) fn apply_sign<F: IeeeFloat>(value: F, sign: i32) -> F {
    if sign < 0 { -value } else { value }
}
