//! Complex number type for reporting complex-conjugate roots
//!
//! A real quadratic with a negative discriminant has the roots `re ± i·im`.
//! [`Complex`] carries one such value in any [`IeeeFloat`] precision.
//!
//! # Storage Format
//!
//! `#[repr(C)]` with the real part first, matching the interleaved
//! (re, im) layout used by numpy and FFTW. A `Complex<F>` is `Pod` whenever `F` is.
//!
//! # Arithmetic Operations
//!
//! - Addition: `(a+bi) + (c+di) = (a+c) + (b+d)i`
//! - Multiplication: `(a+bi)(c+di) = (ac-bd) + (ad+bc)i`, and by a real scalar
//!
//! # Examples
//!
//! ```
//! use quadroots::dtype::Complex;
//!
//! let z = Complex::new(3.0f64, 4.0);
//! assert_eq!(z.magnitude_squared(), 25.0);
//! assert_eq!(z.conj(), Complex::new(3.0, -4.0));
//! ```

use super::IeeeFloat;
use bytemuck::{Pod, Zeroable};
use std::ops::{Add, Mul};

/// Complex number with real and imaginary parts of the same precision
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Complex<F> {
    /// Real part
    pub re: F,
    /// Imaginary part
    pub im: F,
}

// Safety: two fields of the same Pod type under repr(C) leave no padding
unsafe impl<F: IeeeFloat> Pod for Complex<F> {}
unsafe impl<F: IeeeFloat> Zeroable for Complex<F> {}

impl<F: IeeeFloat> Complex<F> {
    /// Create a new complex number
    #[inline]
    pub const fn new(re: F, im: F) -> Self {
        Self { re, im }
    }

    /// Complex number with zero imaginary part
    #[inline]
    pub fn from_real(re: F) -> Self {
        Self { re, im: F::zero() }
    }

    /// Zero complex number
    #[inline]
    pub fn zero() -> Self {
        Self::from_real(F::zero())
    }

    /// Complex conjugate: conj(a + bi) = a - bi
    #[inline]
    pub fn conj(self) -> Self {
        Self {
            re: self.re,
            im: -self.im,
        }
    }

    /// Squared magnitude: |z|² = re² + im²
    #[inline]
    pub fn magnitude_squared(self) -> F {
        self.re * self.re + self.im * self.im
    }
}

impl<F: IeeeFloat> Add for Complex<F> {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self {
            re: self.re + rhs.re,
            im: self.im + rhs.im,
        }
    }
}

impl<F: IeeeFloat> Mul for Complex<F> {
    type Output = Self;

    /// Complex multiplication: (a+bi)(c+di) = (ac-bd) + (ad+bc)i
    #[inline]
    fn mul(self, rhs: Self) -> Self {
        Self {
            re: self.re * rhs.re - self.im * rhs.im,
            im: self.re * rhs.im + self.im * rhs.re,
        }
    }
}

impl<F: IeeeFloat> Mul<F> for Complex<F> {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: F) -> Self {
        Self {
            re: self.re * rhs,
            im: self.im * rhs,
        }
    }
}
