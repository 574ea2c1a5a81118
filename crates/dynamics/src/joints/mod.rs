//! Per-step joint solver preparation.
//!
//! Each prep function is a pure transform from joint state and the two
//! body poses to the 1D constraint rows the external solver iterates
//! on. Rows are rebuilt every step; nothing here persists between
//! steps, so independent joints can be prepared in parallel.

pub mod distance;
