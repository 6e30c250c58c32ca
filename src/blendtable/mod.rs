//! Blendtable definition files.
//!
//! # Key Components
//!
//! - [`BlendtableMetadata`] - Collects a table plus patterns and renders the definition file
//! - [`Blendtable`] - Validated square table of blend cells
//! - [`PatternMap`] / [`Pattern`] - Ordered pattern references

pub mod metadata;
pub mod pattern;
pub mod table;

pub use metadata::BlendtableMetadata;
pub use pattern::{Pattern, PatternInsert, PatternMap};
pub use table::Blendtable;

/// Version of the blendtable definition format written by this crate.
pub const FORMAT_VERSION: &str = "1";
