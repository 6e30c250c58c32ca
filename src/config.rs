//! Export configuration for blendtable definition files
//!
//! This module provides the options that influence how a
//! [`crate::BlendtableMetadata`] stores patterns and persists its rendered
//! output. Rendering itself has no options: the text format is fixed.

use std::str::FromStr;

use strum::{Display, EnumIter, EnumString, IntoStaticStr};

use crate::Result;

/// What happens to the output position of a pattern whose id is added again.
///
/// Pattern lines are rendered in insertion order. Re-adding an existing id always
/// replaces its filename; the policy only decides where the line ends up.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumString, EnumIter, IntoStaticStr,
)]
#[strum(serialize_all = "kebab-case")]
pub enum OverwritePolicy {
    /// The entry keeps the position of its first insertion.
    #[default]
    KeepPosition,
    /// The entry is moved behind all other patterns.
    MoveToEnd,
}

impl OverwritePolicy {
    /// Parses a policy from its kebab-case name (`keep-position`, `move-to-end`).
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Config`] if `name` does not match any policy.
    pub fn from_name(name: &str) -> Result<Self> {
        Self::from_str(name).map_err(|_| config_error!("unknown overwrite policy '{}'", name))
    }
}

/// Configuration for a blendtable definition export
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExportConfig {
    /// Output position of re-added patterns (default: keep first position)
    pub overwrite_policy: OverwritePolicy,

    /// Create missing parent directories in `write_to_dir` (default: true)
    pub create_missing_dirs: bool,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            overwrite_policy: OverwritePolicy::KeepPosition,
            create_missing_dirs: true,
        }
    }
}

impl ExportConfig {
    /// Creates a configuration in which the last write of a pattern id also
    /// decides its output position
    #[must_use]
    pub fn strict_order() -> Self {
        Self {
            overwrite_policy: OverwritePolicy::MoveToEnd,
            ..Self::default()
        }
    }

    /// Creates a configuration that never touches the directory structure
    ///
    /// Writing into a directory that does not exist fails with
    /// [`crate::Error::FileError`] instead.
    #[must_use]
    pub fn existing_dirs_only() -> Self {
        Self {
            create_missing_dirs: false,
            ..Self::default()
        }
    }

    /// Sets the overwrite policy.
    #[must_use]
    pub fn with_overwrite_policy(mut self, policy: OverwritePolicy) -> Self {
        self.overwrite_policy = policy;
        self
    }
}
