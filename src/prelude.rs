//! # bltable Prelude
//!
//! This module provides a convenient prelude for the most commonly used types
//! of the bltable library.

// ================================================================================================
// Core Types and Error Handling
// ================================================================================================

/// The main error type for all bltable operations
pub use crate::Error;

/// The result type used throughout bltable
pub use crate::Result;

/// Export configuration
pub use crate::config::{ExportConfig, OverwritePolicy};

// ================================================================================================
// Blendtable Definitions
// ================================================================================================

/// Main entry point for writing blendtable definition files
pub use crate::blendtable::BlendtableMetadata;

/// Table and pattern types
pub use crate::blendtable::{Blendtable, Pattern, PatternMap, FORMAT_VERSION};
