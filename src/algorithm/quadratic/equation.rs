//! The quadratic as a value

use super::core::compute_roots;
use super::types::{RootResult, RootType, Roots};
use crate::dtype::{Complex, IeeeFloat};
use crate::error::{Error, Result};

/// The polynomial `a·x² + b·x + c`
///
/// A thin owner of three coefficients that routes every query through the
/// robust [`compute_roots`]. Construction never validates: NaN and infinite
/// coefficients are reported when solving.
///
/// # Example
///
/// ```
/// use quadroots::{Quadratic, Roots};
///
/// let q = Quadratic::new(1.0f64, -3.0, 2.0);
/// assert_eq!(q.solve()?, Roots::Real(1.0, 2.0));
/// assert_eq!(q.eval(2.0), 0.0);
/// # Ok::<(), quadroots::Error>(())
/// ```
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Quadratic<F> {
    a: F,
    b: F,
    c: F,
}

impl<F: IeeeFloat> Quadratic<F> {
    /// Create from the leading, linear and constant coefficients
    #[inline]
    pub fn new(a: F, b: F, c: F) -> Self {
        Self { a, b, c }
    }

    /// Create from coefficients in ascending order `[c, b, a]`
    ///
    /// This is the constant-term-first convention of NumPy's polynomial module.
    #[inline]
    pub fn from_ascending(coeffs: [F; 3]) -> Self {
        let [c, b, a] = coeffs;
        Self::new(a, b, c)
    }

    /// The coefficients as `(a, b, c)`
    #[inline]
    pub fn coeffs(&self) -> (F, F, F) {
        (self.a, self.b, self.c)
    }

    /// Returns true when every coefficient is finite
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.a.is_finite() && self.b.is_finite() && self.c.is_finite()
    }

    /// Multiply every coefficient by `k`
    ///
    /// The roots are unchanged for any finite nonzero `k` as long as no
    /// coefficient overflows or underflows; a power of two is exact.
    #[inline]
    pub fn scaled(&self, k: F) -> Self {
        Self::new(self.a * k, self.b * k, self.c * k)
    }

    /// Raw classification and roots, see [`compute_roots`]
    #[inline]
    pub fn compute_roots(&self) -> RootResult<F> {
        compute_roots(self.a, self.b, self.c)
    }

    /// Solve into typed roots
    ///
    /// # Errors
    ///
    /// - [`Error::NanCoefficient`] / [`Error::InfiniteCoefficient`] for
    ///   non-finite coefficients
    /// - [`Error::Indeterminate`] when all coefficients are zero
    /// - [`Error::Inconsistent`] when `a == b == 0` and `c != 0`
    pub fn solve(&self) -> Result<Roots<F>> {
        let result = self.compute_roots();
        if result.root_type == RootType::OneRealRoot && self.b == F::zero() {
            return Err(Error::Inconsistent);
        }
        Roots::try_from(result)
    }

    /// Evaluate at a real point using fused multiply-adds
    #[inline]
    pub fn eval(&self, x: F) -> F {
        self.a.fused_mul_add(x, self.b).fused_mul_add(x, self.c)
    }

    /// Evaluate at a complex point
    pub fn eval_complex(&self, z: Complex<F>) -> Complex<F> {
        let acc = z * self.a + Complex::from_real(self.b);
        acc * z + Complex::from_real(self.c)
    }
}

impl<F: IeeeFloat> From<[F; 3]> for Quadratic<F> {
    /// Coefficients in descending order `[a, b, c]`
    fn from(coeffs: [F; 3]) -> Self {
        let [a, b, c] = coeffs;
        Self::new(a, b, c)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dtype::Precision;

    #[test]
    fn test_coefficient_orders() {
        let q = Quadratic::from_ascending([3.0f64, 2.0, 1.0]);
        assert_eq!(q.coeffs(), (1.0, 2.0, 3.0));
        assert_eq!(Quadratic::from([1.0f64, 2.0, 3.0]), q);
    }

    #[test]
    fn test_solve_real_and_complex() {
        let q = Quadratic::new(2.0f64, 2.0, -12.0);
        assert_eq!(q.solve(), Ok(Roots::Real(-3.0, 2.0)));

        let q = Quadratic::new(1.0f32, -2.0, 5.0);
        assert_eq!(q.solve(), Ok(Roots::Complex { re: 1.0, im: 2.0 }));
    }

    #[test]
    fn test_solve_linear_and_degenerate() {
        assert_eq!(Quadratic::new(0.0f64, 2.0, -8.0).solve(), Ok(Roots::Linear(4.0)));
        assert_eq!(
            Quadratic::new(0.0f64, 0.0, 1.0).solve(),
            Err(Error::Inconsistent)
        );
        assert_eq!(
            Quadratic::new(0.0f64, 0.0, 0.0).solve(),
            Err(Error::Indeterminate)
        );
        assert_eq!(
            Quadratic::new(1.0f64, f64::INFINITY, 0.0).solve(),
            Err(Error::InfiniteCoefficient {
                precision: Precision::Double
            })
        );
    }

    #[test]
    fn test_eval_at_roots() {
        let q = Quadratic::new(1.0f64, -5.0, 6.0);
        assert_eq!(q.eval(2.0), 0.0);
        assert_eq!(q.eval(3.0), 0.0);
        assert_eq!(q.eval(0.0), 6.0);

        let q = Quadratic::new(1.0f64, -2.0, 5.0);
        let z = q.eval_complex(Complex::new(1.0, 2.0));
        assert_eq!(z, Complex::zero());
    }

    #[test]
    fn test_scaled_keeps_roots() {
        let q = Quadratic::new(1.0f32, -5.0, 6.0);
        assert!(q.is_finite());
        let s = q.scaled(2f32.powi(100));
        assert_eq!(s.solve(), q.solve());
        assert!(!q.scaled(f32::MAX).is_finite());

        // 3 is not a power of two, but every scaled coefficient stays exact
        let q = Quadratic::new(1.0f64, -5.0, 6.0);
        let s = q.scaled(3.0);
        assert_eq!(s.coeffs(), (3.0, -15.0, 18.0));
        assert_eq!(s.solve(), q.solve());
    }
}
