//! Core quadratic root-finding algorithms
//!
//! Each stage of the root finder lives in its own module, generic over
//! [`IeeeFloat`](crate::dtype::IeeeFloat) so one body serves every precision.
//!
//! # Pipeline
//!
//! ```text
//! compute_roots
//!   ├─ classify_special      NaN / infinity / zero coefficients
//!   └─ discriminant_root     three-regime estimate of sqrt(|b² − 4ac|)
//!        ├─ normalize        sign, exponent, mantissa in [1, 2)
//!        └─ det2x2           compensated b'² − a'c'
//! ```
//!
//! [`div_root`] serves the `b == 0` special case.

mod combine;
mod det2x2;
mod discriminant;
mod div_root;
mod normalize;
mod special;

pub use combine::compute_roots;
pub use det2x2::det2x2;
pub use discriminant::{DiscriminantRoot, Regime, discriminant_root, select_regime};
pub use div_root::div_root;
pub use normalize::{NormalizedForm, normalize};
pub use special::classify_special;
