//! Overflow-free square root of a quotient

use super::normalize::normalize;
use crate::dtype::IeeeFloat;

/// Compute `sqrt(|x / y|)` without forming `x / y`
///
/// A direct `sqrt(x / y)` overflows or underflows as soon as the quotient
/// leaves the exponent range, even when its square root would fit (for example
/// `x = 2^120`, `y = 2^-120` in `f32`).
///
/// # Algorithm
///
/// 1. Normalize both operands: `x = 2^xe · xf`, `y = 2^ye · yf`
/// 2. `q = xf / yf` lies in `(0.5, 2)`, so the division is always well scaled
/// 3. `e = xe - ye`; if `e` is odd, double `q` (now below 4) and decrement `e`
/// 4. Return `sqrt(q) · 2^(e/2)`, where the halving is exact
///
/// A zero `x` yields zero. `y` must be finite and nonzero, and a nonzero `x`
/// must share the sign of `y` (checked in debug builds).
pub fn div_root<F: IeeeFloat>(x: F, y: F) -> F {
    let xn = normalize(x);
    let yn = normalize(y);
    debug_assert!(y != F::zero(), "div_root divisor must be nonzero");
    debug_assert!(
        x == F::zero() || xn.sign * yn.sign > 0,
        "div_root needs a nonnegative ratio, got {x} / {y}"
    );

    let mut q = xn.mantissa / yn.mantissa;
    let mut e = xn.exponent - yn.exponent;
    if e & 1 != 0 {
        q = q * F::two();
        e -= 1;
    }

    q.sqrt().scale_pow2(e / 2)
}
