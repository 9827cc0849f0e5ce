//! Shared building blocks: error taxonomy, canvas sizing, and fixed-point pixel math.

pub mod core;
pub mod error;
pub(crate) mod math;
