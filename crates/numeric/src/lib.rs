#![deny(clippy::all, clippy::pedantic)]
//! # Numeric Utilities
//!
//! Small, standalone numeric building blocks shared by the solver and the
//! procedural systems: k-th order statistics ([`quick_select`]), gradient
//! noise ([`noise3`]), uniformly sampled function tables ([`LookupTable`]),
//! a quick-and-dirty deterministic PRNG ([`QdRand`]), and the safe
//! logarithm/exponential pair used by the cloth stiffness encoding
//! ([`safe_log2`], [`safe_exp2`]).
//!
//! Everything here is allocation-light and branch-predictable; these
//! routines sit on per-frame paths.

pub mod noise;
pub mod rand;
pub mod scalar;
pub mod select;
pub mod table;

pub use noise::{fractal3, noise3};
pub use rand::QdRand;
pub use scalar::{safe_exp2, safe_log2, LOG2_SENTINEL};
pub use select::{median_split_by, quick_select, quick_select_by};
pub use table::LookupTable;
