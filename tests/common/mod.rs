//! Common test utilities
#![allow(dead_code)]

use quadroots::IeeeFloat;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Seeded generator so failures reproduce
pub fn seeded_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

// ============================================================================
// ULP Distance
// ============================================================================

/// Distance between two f32 values in units of the last place
///
/// Maps the sign-magnitude bit patterns onto a monotonic integer line, so the
/// distance across zero counts every representable value in between.
pub fn ulps_f32(x: f32, y: f32) -> u64 {
    fn ordered(v: f32) -> i64 {
        let i = v.to_bits() as i32;
        (if i < 0 { i32::MIN - i } else { i }) as i64
    }
    (ordered(x) - ordered(y)).unsigned_abs()
}

/// Distance between two f64 values in units of the last place
pub fn ulps_f64(x: f64, y: f64) -> u64 {
    fn ordered(v: f64) -> i128 {
        let i = v.to_bits() as i64;
        (if i < 0 { i64::MIN - i } else { i }) as i128
    }
    (ordered(x) - ordered(y)).unsigned_abs().min(u64::MAX as u128) as u64
}

/// Distance between two f16 values in units of the last place
#[cfg(feature = "f16")]
pub fn ulps_f16(x: half::f16, y: half::f16) -> u64 {
    fn ordered(v: half::f16) -> i32 {
        let i = v.to_bits() as i16;
        (if i < 0 { i16::MIN - i } else { i }) as i32
    }
    (ordered(x) - ordered(y)).unsigned_abs() as u64
}

// ============================================================================
// Reference Solver
// ============================================================================

/// Roots computed in f64 from coefficients of a narrower format
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Reference {
    /// Two real roots, ascending
    Real(f64, f64),
    /// `re ± i·im` with `im ≥ 0`
    Complex(f64, f64),
}

/// Solve in f64 for coefficients that are exactly representable in f32
///
/// `b²` and `4ac` of f32 values are exact in f64, so the sign of the
/// discriminant is exact and its value carries a single rounding. Requires
/// finite, nonzero coefficients.
pub fn reference_roots(a: f64, b: f64, c: f64) -> Reference {
    let d = b * b - 4.0 * a * c;
    if d >= 0.0 {
        let q = -0.5 * (b + b.signum() * d.sqrt());
        let (r1, r2) = (q / a, c / q);
        if r1 <= r2 {
            Reference::Real(r1, r2)
        } else {
            Reference::Real(r2, r1)
        }
    } else {
        Reference::Complex(-b / (2.0 * a), ((-d).sqrt() / (2.0 * a)).abs())
    }
}

/// Sort a pair ascending
pub fn sorted<F: IeeeFloat>(x: F, y: F) -> (F, F) {
    if x <= y { (x, y) } else { (y, x) }
}

/// Whether `x` is a normal value of the format described by `min`/`max`
pub fn in_normal_range(x: f64, min_positive: f64, max: f64) -> bool {
    x == 0.0 || (x.abs() >= min_positive && x.abs() <= max)
}

// ============================================================================
// Residual Check
// ============================================================================

/// `|a·r² + b·r + c|` relative to the natural scale `|a|·r² + |b|·|r| + |c|`
///
/// Evaluated in f64 with fused multiply-adds.
pub fn relative_residual(a: f64, b: f64, c: f64, r: f64) -> f64 {
    let residual = a.mul_add(r, b).mul_add(r, c);
    let scale = a.abs() * r * r + b.abs() * r.abs() + c.abs();
    residual.abs() / scale
}

// ============================================================================
// Coefficient Generators
// ============================================================================

/// Random nonzero value `±m · 2^e`, `m` uniform in `[1, 2)`, `e` in `[-max_exp, max_exp]`
pub fn random_coeff<F: IeeeFloat>(rng: &mut StdRng, max_exp: i32) -> F
where
    F: From<f32>,
{
    let m: f32 = rng.random_range(1.0..2.0);
    let e = rng.random_range(-max_exp..=max_exp);
    let sign = if rng.random::<bool>() { -1.0 } else { 1.0 };
    <F as From<f32>>::from(sign * m).scale_pow2(e)
}

/// Random f32 triple with independent exponents in `[-max_exp, max_exp]`
pub fn random_triple_f32(rng: &mut StdRng, max_exp: i32) -> (f32, f32, f32) {
    (
        random_coeff(rng, max_exp),
        random_coeff(rng, max_exp),
        random_coeff(rng, max_exp),
    )
}

/// Random f32 triple with `b² ≈ 4ac`, the regime where cancellation bites
///
/// `b` is the f32 rounding of `2·sqrt(ac)`, so the discriminant is a handful
/// of ulps of `b²` with either sign.
pub fn near_double_root_f32(rng: &mut StdRng, max_exp: i32) -> (f32, f32, f32) {
    let a: f32 = random_coeff(rng, max_exp);
    let c = random_coeff::<f32>(rng, max_exp).abs().copysign(a);
    let b = (4.0 * a as f64 * c as f64).sqrt() as f32;
    let b = if rng.random::<bool>() { b } else { -b };
    (a, b, c)
}
