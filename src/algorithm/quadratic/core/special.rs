//! Classification of degenerate and invalid coefficients

use super::div_root::div_root;
use crate::algorithm::quadratic::types::{RootResult, RootType};
use crate::dtype::IeeeFloat;

/// Resolve inputs the general path must not see
///
/// Returns `Some` with the final result when one of the cases below applies,
/// `None` when `a`, `b` and `c` are all finite and nonzero.
///
/// Checks run in priority order, so NaN dominates infinity:
///
/// 1. any NaN → `InputHasNaN`
/// 2. any infinity → `InputHasInfinity`
/// 3. `a == 0`: `AllRealNumbers` if `b == c == 0`, else `OneRealRoot` with
///    `-c/b` under IEEE division (infinite when `b == 0`)
/// 4. `b == 0`: `a·x² + c = 0`. With `sign(a)·sign(c) ≤ 0` the roots are
///    `±sqrt(|c/a|)`; otherwise they are `0 ± i·sqrt(c/a)`
/// 5. `c == 0`: the roots are `0` and `-b/a`
pub fn classify_special<F: IeeeFloat>(a: F, b: F, c: F) -> Option<RootResult<F>> {
    let zero = F::zero();

    let result = if a.is_nan() || b.is_nan() || c.is_nan() {
        RootResult::without_roots(RootType::InputHasNaN)
    } else if a.is_infinite() || b.is_infinite() || c.is_infinite() {
        RootResult::without_roots(RootType::InputHasInfinity)
    } else if a == zero {
        if b == zero && c == zero {
            RootResult::without_roots(RootType::AllRealNumbers)
        } else {
            RootResult::new(-c / b, F::nan(), RootType::OneRealRoot)
        }
    } else if b == zero {
        if a.sign() * c.sign() <= zero {
            let r = div_root(-c, a);
            RootResult::new(r, -r, RootType::SuccessReal)
        } else {
            RootResult::new(zero, div_root(c, a), RootType::SuccessComplex)
        }
    } else if c == zero {
        RootResult::new(zero, -b / a, RootType::SuccessReal)
    } else {
        return None;
    };

    log::trace!("{} special case {:?}", F::PRECISION, result.root_type);
    Some(result)
}
