// Copyright 2025 Johann Kempter
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//
// SPDX-License-Identifier: Apache-2.0

#![doc(html_no_source)]
#![deny(missing_docs)]
#![deny(unsafe_code)]

//! # bltable
//!
//! Writer for openage blendtable definition files (`.bltable`).
//!
//! A blendtable is a square lookup table that selects how two terrain textures are
//! blended where their tiles meet. The converter stores it flattened together with the
//! blending patterns its cells refer to; this crate validates the table shape and renders
//! the definition file.
//!
//! ## Quick Start
//!
//! ```rust
//! use bltable::prelude::*;
//!
//! let mut metadata = BlendtableMetadata::new("terrain/blend", "blend.bltable");
//! metadata.set_table(vec![0, 1, 1, 0])?;
//! metadata.add_pattern(0, "pattern0.png");
//! metadata.add_pattern(1, "pattern1.png");
//!
//! let text = metadata.dump()?;
//! assert_eq!(
//!     text,
//!     "# openage blendtable definition file\n\n\
//!      version 1\n\n\
//!      blendtable [\n0 1\n1 0\n]\n\n\
//!      pattern 0 pattern0.png\npattern 1 pattern1.png\n\n"
//! );
//! # Ok::<(), bltable::Error>(())
//! ```
//!
//! ## Table Shape
//!
//! The width of a table is derived from its cell count with Newton's integer square
//! root ([`utils::isqrt`]). Tables whose count is not a perfect square are rejected
//! with [`Error::MalformedTable`] before they are stored, so a definition never holds
//! an invalid table.
//!
//! ## Logging
//!
//! The crate logs through the [`log`] facade and never installs a logger itself.
//! Rejected tables are reported at `warn`, accepted tables and replaced patterns at
//! `debug`, written files at `info`.
//!
//! ## Error Handling
//!
//! All operations return [`Result<T, Error>`](Result):
//!
//! ```rust
//! use bltable::{BlendtableMetadata, Error};
//!
//! let metadata: BlendtableMetadata<u8> = BlendtableMetadata::new("terrain", "blend.bltable");
//! match metadata.dump() {
//!     Ok(text) => println!("{text}"),
//!     Err(Error::NoTable) => println!("set a table first"),
//!     Err(e) => println!("Other error: {}", e),
//! }
//! ```
#[macro_use]
pub(crate) mod error;

/// Shared functionality which is used in unit tests
#[cfg(test)]
pub(crate) mod test;

/// Convenient re-exports of the most commonly used types.
///
/// # Example
///
/// ```rust
/// use bltable::prelude::*;
///
/// let mut metadata = BlendtableMetadata::with_config("terrain", "blend.bltable", ExportConfig::strict_order());
/// metadata.set_table(vec![0u8])?;
/// # Ok::<(), bltable::Error>(())
/// ```
pub mod prelude;

/// Blendtable definition files: square tables, patterns and the serializer
///
/// # Key Types
///
/// - [`blendtable::BlendtableMetadata`] - Serializer for `.bltable` files
/// - [`blendtable::Blendtable`] - Validated square table
/// - [`blendtable::PatternMap`] - Insertion-ordered pattern storage
pub mod blendtable;

/// Export configuration
pub mod config;

/// Integer helpers for table shapes
pub mod utils;

/// `bltable` Result type
///
/// A type alias for [`std::result::Result<T, Error>`] where the error type is always [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// `bltable` Error type
pub use error::Error;

pub use blendtable::{Blendtable, BlendtableMetadata, Pattern, PatternMap, FORMAT_VERSION};
pub use config::{ExportConfig, OverwritePolicy};
