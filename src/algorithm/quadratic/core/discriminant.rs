//! Scaled square root of the discriminant `b² − 4ac`

use super::det2x2::det2x2;
use super::normalize::normalize;
use crate::dtype::IeeeFloat;

/// Numerical regime picked by [`discriminant_root`]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Regime {
    /// `4ac` is negligible next to `b²`
    LinearDominant,
    /// `b²` is negligible next to `4ac`
    ProductDominant,
    /// Neither term dominates; cancellation is possible
    Comparable,
}

/// Square root of `|b² − 4ac|`, split as `root · 2^scale`
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct DiscriminantRoot<F> {
    /// Significand-sized factor of the square root
    pub root: F,
    /// Whether `b² − 4ac ≥ 0`
    pub nonnegative: bool,
    /// Power of two carried separately so `root` itself never overflows
    pub scale: i32,
    /// The regime that produced this estimate
    pub regime: Regime,
}

/// Pick the regime from the normalized exponents of `a`, `b` and `c`
///
/// `digits` is the significand precision `P` of the format. The margins
/// `P + 5` and `P + 1` are empirically validated boundaries; narrowing them
/// lets the neglected term leak into the last bits of the result.
#[inline]
pub fn select_regime(a_exp: i32, b_exp: i32, c_exp: i32, digits: i32) -> Regime {
    let b_sq = 2 * b_exp;
    let ac = a_exp + c_exp;
    if b_sq > ac + digits + 5 {
        Regime::LinearDominant
    } else if b_sq < ac - digits - 1 {
        Regime::ProductDominant
    } else {
        Regime::Comparable
    }
}

/// Estimate `sqrt(|b² − 4ac|)` for finite, nonzero `a`, `b` and `c`
///
/// The square root is returned as `root · 2^scale` together with the sign of
/// the discriminant. Every intermediate value stays finite for every finite
/// input.
///
/// # Algorithm
///
/// With `a = 2^aE · aF` (and likewise for `b`, `c`) and `P` significand digits:
///
/// - **Linear-dominant** (`2bE > aE + cE + P + 5`): `4ac` cannot reach the last
///   bit of `b²`, so the root is `|b|` and the discriminant is positive.
/// - **Product-dominant** (`2bE < aE + cE − P − 1`): `b²` is negligible. The
///   root is `sqrt(aF·cF) · 2^((aE+cE)/2 + 1)`, where an odd exponent sum moves
///   a factor two under the square root and the `+1` is the `4` of `4ac`. The
///   sign of the discriminant is the sign of `−ac`.
/// - **Comparable**: the coefficients themselves (not their mantissas) are
///   rescaled around `mid = (2bE + aE + cE) / 4`:
///
///   ```text
///   a' = a · 2^(2 − mid − deltaE)     deltaE = (aE − cE) / 2
///   b' = b · 2^(−mid)
///   c' = c · 2^(−mid + deltaE)
///   ```
///
///   so that `b'² − a'c' = (b² − 4ac) · 2^(−2·mid)` with all three operands near
///   one. The difference is taken with the compensated [`det2x2`].
pub fn discriminant_root<F: IeeeFloat>(a: F, b: F, c: F) -> DiscriminantRoot<F> {
    let an = normalize(a);
    let bn = normalize(b);
    let cn = normalize(c);

    let regime = select_regime(an.exponent, bn.exponent, cn.exponent, F::MANTISSA_DIGITS);
    log::trace!(
        "{} discriminant regime {:?} for exponents a={} b={} c={}",
        F::PRECISION,
        regime,
        an.exponent,
        bn.exponent,
        cn.exponent
    );

    match regime {
        Regime::LinearDominant => DiscriminantRoot {
            root: bn.mantissa,
            nonnegative: true,
            scale: bn.exponent,
            regime,
        },
        Regime::ProductDominant => {
            let mut exp_sum = an.exponent + cn.exponent;
            let mut product = an.mantissa * cn.mantissa;
            if exp_sum & 1 != 0 {
                product = product * F::two();
                exp_sum -= 1;
            }
            DiscriminantRoot {
                root: product.sqrt(),
                nonnegative: an.sign * cn.sign < 0,
                scale: exp_sum / 2 + 1,
                regime,
            }
        }
        Regime::Comparable => {
            let mid = (2 * bn.exponent + an.exponent + cn.exponent) / 4;
            let delta = (an.exponent - cn.exponent) / 2;

            let a_scaled = a.scale_pow2(2 - mid - delta);
            let b_scaled = b.scale_pow2(-mid);
            let c_scaled = c.scale_pow2(delta - mid);

            let d = det2x2(b_scaled, b_scaled, a_scaled, c_scaled);
            DiscriminantRoot {
                root: d.abs().sqrt(),
                nonnegative: d >= F::zero(),
                scale: mid,
                regime,
            }
        }
    }
}
