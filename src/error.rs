use thiserror::Error;

macro_rules! config_error {
    // Single string version
    ($msg:expr) => {
        crate::Error::Config($msg.to_string())
    };

    // Format string with arguments version
    ($fmt:expr, $($arg:tt)*) => {
        crate::Error::Config(format!($fmt, $($arg)*))
    };
}

/// The generic Error type, which provides coverage for all errors this library can potentially
/// return.
///
/// Every error is terminal for the serialization attempt that produced it. No partial output
/// is ever returned alongside an error, callers decide whether to retry with corrected input.
///
/// # Error Categories
///
/// ## Table Errors
/// - [`Error::MalformedTable`] - The table is not a square matrix
/// - [`Error::NoTable`] - An operation required a table but none was set
///
/// ## I/O and Configuration Errors
/// - [`Error::FileError`] - Filesystem I/O errors while persisting a definition file
/// - [`Error::Config`] - Invalid configuration values
/// - [`Error::Format`] - A cell value could not be rendered
///
/// # Examples
///
/// ```rust
/// use bltable::{BlendtableMetadata, Error};
///
/// let mut metadata = BlendtableMetadata::new("terrain/blend", "blend.bltable");
/// match metadata.set_table(vec![1, 2, 3, 4, 5]) {
///     Ok(()) => println!("table accepted"),
///     Err(Error::MalformedTable { entries }) => {
///         eprintln!("{} entries do not form a square", entries);
///     }
///     Err(e) => eprintln!("Other error: {}", e),
/// }
/// ```
#[derive(Error, Debug)]
pub enum Error {
    /// The element count of a table has no exact integer square root.
    ///
    /// Blending tables are stored flattened, so the width is derived from the
    /// element count. When `width * width` does not reproduce the count the
    /// table cannot be laid out as rows.
    ///
    /// # Fields
    ///
    /// * `entries` - The number of cells in the rejected table
    #[error("blendtable entries malformed: {entries} is not an integer square")]
    MalformedTable {
        /// The number of cells in the rejected table
        entries: usize,
    },

    /// A definition file was requested before any table was set.
    #[error("No blendtable has been set")]
    NoTable,

    /// File I/O error.
    ///
    /// Wraps standard I/O errors that can occur while writing a rendered
    /// definition file, such as missing directories or permission issues.
    #[error("{0}")]
    FileError(#[from] std::io::Error),

    /// A cell value failed to format itself.
    ///
    /// Only reachable through a `Display` implementation that returns an error.
    #[error("Failed to format a table cell")]
    Format(#[from] std::fmt::Error),

    /// Invalid configuration value.
    ///
    /// Raised when a configuration option cannot be interpreted, for example
    /// an unknown overwrite policy name.
    #[error("Invalid configuration - {0}")]
    Config(String),
}
