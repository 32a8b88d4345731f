//! Compensated 2×2 determinant

use crate::dtype::IeeeFloat;

/// Compute `a·b − c·d` with error compensation
///
/// When `a·b` and `c·d` nearly cancel, the direct expression loses every bit
/// the two products share. Kahan's fused-multiply-add scheme recovers the
/// rounding error of `c·d` exactly and folds it back in, giving a result
/// accurate to a couple of ulps of the difference itself.
///
/// # Algorithm
///
/// ```text
/// v1 = c·d                (rounded)
/// v2 = fma(-c, d, v1)     (v1 − c·d, exact)
/// v3 = fma(a, b, -v1)     (a·b − v1, one rounding)
/// return v3 + v2
/// ```
///
/// All four inputs must be finite and the products must stay in range; the
/// discriminant estimator rescales its operands to guarantee both.
#[inline]
pub fn det2x2<F: IeeeFloat>(a: F, b: F, c: F, d: F) -> F {
    let v1 = c * d;
    let v2 = (-c).fused_mul_add(d, v1);
    let v3 = a.fused_mul_add(b, -v1);
    v3 + v2
}
