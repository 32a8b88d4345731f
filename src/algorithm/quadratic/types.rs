//! Result types for quadratic root finding

use crate::dtype::{Complex, IeeeFloat};
use crate::error::{Error, Result};

/// Classification of a quadratic's roots
///
/// The meaning of [`RootResult::r1`] and [`RootResult::r2`] depends on this tag:
///
/// | RootType           | r1        | r2                  | meaning                  |
/// |--------------------|-----------|---------------------|--------------------------|
/// | `SuccessReal`      | root 1    | root 2              | two real roots           |
/// | `SuccessComplex`   | real part | imaginary magnitude | roots `r1 ± i·r2`        |
/// | `InputHasNaN`      | NaN       | NaN                 | invalid input            |
/// | `InputHasInfinity` | NaN       | NaN                 | invalid input            |
/// | `OneRealRoot`      | the root  | NaN                 | `a == 0`, linear         |
/// | `AllRealNumbers`   | NaN       | NaN                 | `a == b == c == 0`       |
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum RootType {
    /// Two real roots (possibly equal)
    SuccessReal,
    /// A complex-conjugate pair `r1 ± i·r2`
    SuccessComplex,
    /// At least one coefficient is NaN
    InputHasNaN,
    /// At least one coefficient is infinite (and none is NaN)
    InputHasInfinity,
    /// `a == 0`: the equation is linear with the root `-c/b`
    OneRealRoot,
    /// `a == b == c == 0`: every real number is a root
    AllRealNumbers,
}

impl RootType {
    /// Returns true for the two classifications of a genuine quadratic
    #[inline]
    pub const fn is_success(self) -> bool {
        matches!(self, Self::SuccessReal | Self::SuccessComplex)
    }

    /// Returns true when the coefficients contained NaN or infinity
    #[inline]
    pub const fn is_invalid_input(self) -> bool {
        matches!(self, Self::InputHasNaN | Self::InputHasInfinity)
    }
}

/// Outcome of [`compute_roots`](super::compute_roots)
///
/// Outputs that the [`RootType`] leaves unused hold NaN.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RootResult<F> {
    /// First output, see [`RootType`]
    pub r1: F,
    /// Second output, see [`RootType`]
    pub r2: F,
    /// Classification that gives `r1` and `r2` their meaning
    pub root_type: RootType,
}

impl<F: IeeeFloat> RootResult<F> {
    #[inline]
    pub(crate) fn new(r1: F, r2: F, root_type: RootType) -> Self {
        Self { r1, r2, root_type }
    }

    /// Result whose outputs are both unused
    #[inline]
    pub(crate) fn without_roots(root_type: RootType) -> Self {
        Self::new(F::nan(), F::nan(), root_type)
    }

    /// The classification tag
    #[inline]
    pub fn root_type(&self) -> RootType {
        self.root_type
    }

    /// Returns true for two real roots or a complex pair
    #[inline]
    pub fn is_success(&self) -> bool {
        self.root_type.is_success()
    }

    /// Both roots as complex numbers
    ///
    /// Real roots come back with zero imaginary parts; a complex pair comes back
    /// as `[r1 + i·r2, r1 − i·r2]`. Returns `None` for every other
    /// classification.
    pub fn complex_roots(&self) -> Option<[Complex<F>; 2]> {
        match self.root_type {
            RootType::SuccessReal => Some([Complex::from_real(self.r1), Complex::from_real(self.r2)]),
            RootType::SuccessComplex => {
                let z = Complex::new(self.r1, self.r2);
                Some([z, z.conj()])
            }
            _ => None,
        }
    }
}

/// Roots of a quadratic in typed form
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Roots<F> {
    /// Two real roots in ascending order
    Real(F, F),
    /// The complex-conjugate pair `re ± i·im`, with `im ≥ 0`
    Complex {
        /// Real part shared by both roots
        re: F,
        /// Imaginary magnitude
        im: F,
    },
    /// The single root of a linear equation
    Linear(F),
}

impl<F: IeeeFloat> TryFrom<RootResult<F>> for Roots<F> {
    type Error = Error;

    /// Convert a classification into typed roots
    ///
    /// A linear root is passed through as computed, so it is infinite when `b`
    /// vanishes or the division `-c/b` overflows. Use
    /// [`Quadratic::solve`](super::Quadratic::solve) to tell these apart.
    fn try_from(result: RootResult<F>) -> Result<Self> {
        let RootResult { r1, r2, root_type } = result;
        match root_type {
            RootType::SuccessReal if r2 < r1 => Ok(Self::Real(r2, r1)),
            RootType::SuccessReal => Ok(Self::Real(r1, r2)),
            RootType::SuccessComplex => Ok(Self::Complex { re: r1, im: r2 }),
            RootType::OneRealRoot => Ok(Self::Linear(r1)),
            RootType::InputHasNaN => Err(Error::NanCoefficient {
                precision: F::PRECISION,
            }),
            RootType::InputHasInfinity => Err(Error::InfiniteCoefficient {
                precision: F::PRECISION,
            }),
            RootType::AllRealNumbers => Err(Error::Indeterminate),
        }
    }
}
