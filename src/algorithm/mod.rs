//! Root-finding algorithms
//!
//! Each algorithm is written once, generically over
//! [`IeeeFloat`](crate::dtype::IeeeFloat), and instantiated for every supported
//! precision. Precision-specific behavior is confined to the trait
//! implementations in [`dtype`](crate::dtype).
//!
//! # Available Algorithms
//!
//! - [`quadratic`] - Robust roots of `a·x² + b·x + c = 0`

pub mod quadratic;
