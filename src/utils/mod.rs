//! Shared helper functionality.
//!
//! - [`math`] - Integer arithmetic used to derive and validate table shapes

pub mod math;

pub use math::{is_perfect_square, isqrt};
