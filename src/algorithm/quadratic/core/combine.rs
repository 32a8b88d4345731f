//! Root assembly: the public entry point of the algorithm

use super::discriminant::{DiscriminantRoot, discriminant_root};
use super::normalize::{apply_sign, normalize};
use super::special::classify_special;
use crate::algorithm::quadratic::types::{RootResult, RootType};
use crate::dtype::IeeeFloat;

/// Compute the roots of `a·x² + b·x + c = 0`
///
/// # Algorithm
///
/// 1. [`classify_special`] resolves NaN, infinities and zero coefficients
/// 2. [`discriminant_root`] estimates `sqrt(|b² − 4ac|) = root · 2^scale`
/// 3. For a nonnegative discriminant, with `R = root · 2^scale`:
///    ```text
///    q  = -b - copysign(R, b)      (no cancellation: both terms share a sign)
///    r1 = q / (2a)
///    r2 = c / (r1·a) = 2c / q      (product of the roots is c/a)
///    ```
///    When `|b|`, `R` or `|a|` reaches half the largest finite value, `q/2`
///    is instead assembled from normalized mantissas and exponents and both
///    quotients are formed from the mantissas, scaling by the power of two
///    last. No intermediate value overflows on that path.
/// 4. For a negative discriminant the roots are `-b/(2a) ± i·|R/(2a)|`
///
/// Never panics for any input bit pattern; see [`RootType`] for the meaning of
/// the two outputs.
///
/// # Examples
///
/// ```
/// use quadroots::{RootType, compute_roots};
///
/// let r = compute_roots(1.0f64, -3.0, 2.0);
/// assert_eq!(r.root_type, RootType::SuccessReal);
/// assert_eq!((r.r1, r.r2), (2.0, 1.0));
///
/// let r = compute_roots(1.0f32, 2.0, 5.0);
/// assert_eq!(r.root_type, RootType::SuccessComplex);
/// assert_eq!((r.r1, r.r2), (-1.0, 2.0));
/// ```
pub fn compute_roots<F: IeeeFloat>(a: F, b: F, c: F) -> RootResult<F> {
    if let Some(result) = classify_special(a, b, c) {
        return result;
    }

    let disc = discriminant_root(a, b, c);
    if disc.nonnegative {
        let (r1, r2) = real_roots(a, b, c, &disc);
        RootResult::new(r1, r2, RootType::SuccessReal)
    } else {
        let re = -half_quotient(b, a);
        let im = scaled_half_quotient(disc.root, disc.scale, a).abs();
        RootResult::new(re, im, RootType::SuccessComplex)
    }
}

fn real_roots<F: IeeeFloat>(a: F, b: F, c: F, disc: &DiscriminantRoot<F>) -> (F, F) {
    let half_max = F::max_value() * F::half();
    let root = disc.root.scale_pow2(disc.scale);

    if b.abs() < half_max && root < half_max && a.abs() < half_max {
        let q = -b - root.copy_sign(b);
        return (q / (a + a), F::two() * (c / q));
    }

    // |q|/2 = m · 2^(e-1) with m in [1, 4)
    let bn = normalize(b);
    let (m, e) = if disc.root == F::zero() {
        (bn.mantissa, bn.exponent)
    } else {
        let rn = normalize(disc.root);
        let r_exp = rn.exponent + disc.scale;
        let e = bn.exponent.max(r_exp);
        let m = bn.mantissa.scale_pow2(bn.exponent - e) + rn.mantissa.scale_pow2(r_exp - e);
        (m, e)
    };

    let an = normalize(a);
    let cn = normalize(c);
    let q_sign = -bn.sign;
    let r1 = apply_sign(
        (m / an.mantissa).scale_pow2(e - 1 - an.exponent),
        q_sign * an.sign,
    );
    let r2 = apply_sign(
        (cn.mantissa / m).scale_pow2(cn.exponent - e + 1),
        q_sign * cn.sign,
    );
    (r1, r2)
}

/// `x / (2a)`, avoiding the overflow of `2a`
#[inline]
fn half_quotient<F: IeeeFloat>(x: F, a: F) -> F {
    if a.abs() < F::max_value() * F::half() {
        x / (a + a)
    } else {
        x / a * F::half()
    }
}

/// `root · 2^scale / (2a)` without forming `root · 2^scale`
fn scaled_half_quotient<F: IeeeFloat>(root: F, scale: i32, a: F) -> F {
    let an = normalize(a);
    apply_sign(
        (root / an.mantissa).scale_pow2(scale - an.exponent - 1),
        an.sign,
    )
}
