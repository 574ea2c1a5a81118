//! Cloth solver configuration.

pub mod phase;
