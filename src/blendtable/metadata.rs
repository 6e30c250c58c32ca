//! Blendtable definition file serializer.
//!
//! [`BlendtableMetadata`] collects a square blending table plus the patterns its cells
//! refer to, and formats them as a `.bltable` definition file:
//!
//! ```text
//! # openage blendtable definition file
//!
//! version 1
//!
//! blendtable [
//! 1 2
//! 3 4
//! ]
//!
//! pattern 0 a.png
//!
//! ```
//!
//! Rendering is a pure function of the collected state. Persisting the text is left to
//! [`BlendtableMetadata::write_to`] and friends, which only wrap the rendered string.

use std::{
    fmt::{self, Write as _},
    fs,
    io::Write,
    path::{Path, PathBuf},
};

use log::{debug, info, trace, warn};

use crate::{
    blendtable::{
        pattern::{PatternInsert, PatternMap},
        table::Blendtable,
        FORMAT_VERSION,
    },
    config::ExportConfig,
    utils::isqrt,
    Error, Result,
};

/// Collects blendtable metadata and formats it as a `.bltable` definition file.
///
/// The table is only ever stored after its shape was validated, so a set table is
/// always square. Patterns are rendered in insertion order; see
/// [`crate::OverwritePolicy`] for what happens when an id is added twice.
///
/// # Examples
///
/// ```rust
/// use bltable::BlendtableMetadata;
///
/// let mut metadata = BlendtableMetadata::new("terrain/blend", "blend.bltable");
/// metadata.set_table(vec![1, 2, 3, 4])?;
/// metadata.add_pattern(0, "a.png");
///
/// let text = metadata.dump()?;
/// assert!(text.contains("blendtable [\n1 2\n3 4\n]\n\npattern 0 a.png\n\n"));
/// # Ok::<(), bltable::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct BlendtableMetadata<T> {
    targetdir: PathBuf,
    filename: String,
    table: Option<Blendtable<T>>,
    patterns: PatternMap,
    config: ExportConfig,
}

impl<T> BlendtableMetadata<T> {
    /// Creates an empty definition with the default [`ExportConfig`].
    ///
    /// # Arguments
    ///
    /// * `targetdir` - Directory of the definition file, relative to an export root
    /// * `filename` - Name of the definition file
    pub fn new(targetdir: impl Into<PathBuf>, filename: impl Into<String>) -> Self {
        Self::with_config(targetdir, filename, ExportConfig::default())
    }

    /// Creates an empty definition with an explicit configuration.
    pub fn with_config(
        targetdir: impl Into<PathBuf>,
        filename: impl Into<String>,
        config: ExportConfig,
    ) -> Self {
        BlendtableMetadata {
            targetdir: targetdir.into(),
            filename: filename.into(),
            table: None,
            patterns: PatternMap::new(),
            config,
        }
    }

    /// Defines a pattern in the table.
    ///
    /// An existing entry for `pattern_id` is replaced. Adding the same id and
    /// filename again leaves the definition unchanged.
    ///
    /// # Arguments
    ///
    /// * `pattern_id` - Pattern identifier used by the table cells
    /// * `filename` - Path to the pattern file
    pub fn add_pattern(&mut self, pattern_id: u32, filename: impl Into<String>) {
        let filename = filename.into();
        if let PatternInsert::Replaced(previous) =
            self.patterns
                .insert(pattern_id, filename, self.config.overwrite_policy)
        {
            debug!(
                "{}: pattern {pattern_id} replaced (was '{previous}', policy {})",
                self, self.config.overwrite_policy
            );
        }
    }

    /// Sets the blending table from its flattened `n x n` cells.
    ///
    /// The candidate is validated before it is stored. On failure the previously
    /// set table, if any, stays in place.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MalformedTable`] if the number of cells is not a perfect square.
    pub fn set_table<I>(&mut self, table: I) -> Result<()>
    where
        I: IntoIterator<Item = T>,
    {
        match Blendtable::from_iter_checked(table) {
            Ok(table) => {
                debug!(
                    "{}: accepted {}x{} blendtable",
                    self,
                    table.width(),
                    table.width()
                );
                self.table = Some(table);
                Ok(())
            }
            Err(err) => {
                warn!("{}: rejected blendtable - {err}", self);
                Err(err)
            }
        }
    }

    /// Sets an already validated table.
    pub fn set_blendtable(&mut self, table: Blendtable<T>) {
        self.table = Some(table);
    }

    /// Returns the width of the stored table.
    ///
    /// This is the Newton integer square root of the cell count: the exact root for
    /// square counts, the floor of the real root otherwise. Without a table the count
    /// is taken as zero.
    #[must_use]
    pub fn compute_width(&self) -> usize {
        isqrt(self.table.as_ref().map_or(0, Blendtable::len))
    }

    /// Checks that the stored table is an `n x n` matrix.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoTable`] if no table was set, or [`Error::MalformedTable`] if
    /// the cell count is not the square of [`Self::compute_width`].
    pub fn validate_shape(&self) -> Result<()> {
        let Some(table) = &self.table else {
            return Err(Error::NoTable);
        };

        let width = self.compute_width();
        if width * width != table.len() {
            return Err(Error::MalformedTable {
                entries: table.len(),
            });
        }

        Ok(())
    }

    /// The stored table, if one was set.
    #[must_use]
    pub fn table(&self) -> Option<&Blendtable<T>> {
        self.table.as_ref()
    }

    /// The defined patterns in output order.
    #[must_use]
    pub fn patterns(&self) -> &PatternMap {
        &self.patterns
    }

    /// Directory of the definition file, relative to an export root.
    #[must_use]
    pub fn targetdir(&self) -> &Path {
        &self.targetdir
    }

    /// Name of the definition file.
    #[must_use]
    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// The active export configuration.
    #[must_use]
    pub fn config(&self) -> &ExportConfig {
        &self.config
    }
}

impl<T: fmt::Display> BlendtableMetadata<T> {
    /// Renders the complete definition file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoTable`] if no table was set, or [`Error::Format`] if a cell's
    /// `Display` implementation fails.
    pub fn dump(&self) -> Result<String> {
        let table = self.table.as_ref().ok_or(Error::NoTable)?;
        self.validate_shape()?;

        trace!(
            "{}: rendering {} rows and {} patterns",
            self,
            table.width(),
            self.patterns.len()
        );

        let mut output = String::new();
        self.render_into(table, &mut output)?;
        Ok(output)
    }

    /// Alias for [`Self::dump`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoTable`] if no table was set.
    pub fn render(&self) -> Result<String> {
        self.dump()
    }

    fn render_into(&self, table: &Blendtable<T>, out: &mut String) -> fmt::Result {
        // header
        out.push_str("# openage blendtable definition file\n\n");

        // version
        writeln!(out, "version {FORMAT_VERSION}")?;
        out.push('\n');

        // blendtable
        out.push_str("blendtable [\n");
        for row in table.rows() {
            Blendtable::fmt_row(row, out)?;
            out.push('\n');
        }
        out.push_str("]\n\n");

        // pattern definitions
        for pattern in &self.patterns {
            writeln!(out, "{pattern}")?;
        }

        out.push('\n');
        Ok(())
    }

    /// Renders the definition file into `writer`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoTable`] if no table was set, or [`Error::FileError`] if
    /// writing fails.
    pub fn write_to<W: Write>(&self, mut writer: W) -> Result<()> {
        let text = self.dump()?;
        writer.write_all(text.as_bytes())?;
        writer.flush()?;
        Ok(())
    }

    /// Renders the definition file and writes it to `path`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoTable`] if no table was set, or [`Error::FileError`] if
    /// the file cannot be written.
    pub fn write_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let text = self.dump()?;
        self.write_text(path.as_ref(), &text)
    }

    /// Writes the definition file to `<root>/<targetdir>/<filename>`.
    ///
    /// Missing directories are created when [`ExportConfig::create_missing_dirs`] is set.
    /// Nothing is created on disk if rendering fails. Returns the path of the written file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoTable`] if no table was set, or [`Error::FileError`] if
    /// a directory or the file cannot be written.
    pub fn write_to_dir<P: AsRef<Path>>(&self, root: P) -> Result<PathBuf> {
        let text = self.dump()?;

        let dir = root.as_ref().join(&self.targetdir);
        if self.config.create_missing_dirs {
            fs::create_dir_all(&dir)?;
        }

        let path = dir.join(&self.filename);
        self.write_text(&path, &text)?;
        Ok(path)
    }

    fn write_text(&self, path: &Path, text: &str) -> Result<()> {
        fs::write(path, text)?;
        info!("{}: wrote {}", self, path.display());
        Ok(())
    }
}

impl<T> fmt::Display for BlendtableMetadata<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BlendtableMetadata<{}>", self.filename)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        config::OverwritePolicy,
        test::{create_cells, create_metadata, table_rows},
    };

    const HEADER: &str = "# openage blendtable definition file\n\nversion 1\n\n";

    fn metadata() -> BlendtableMetadata<u32> {
        BlendtableMetadata::new("terrain/blend", "blend.bltable")
    }

    #[test_log::test]
    fn test_dump_scenario() {
        let mut metadata = metadata();
        metadata.set_table(vec![1, 2, 3, 4]).unwrap();
        metadata.add_pattern(0, "a.png");

        let expected = format!("{HEADER}blendtable [\n1 2\n3 4\n]\n\npattern 0 a.png\n\n");
        assert_eq!(metadata.dump().unwrap(), expected);
        assert_eq!(metadata.render().unwrap(), expected);
    }

    #[test]
    fn test_square_tables_render_width_rows() {
        for width in 0..24usize {
            let metadata = create_metadata(width, &[0, 1]);
            assert_eq!(metadata.compute_width(), width);
            assert!(metadata.validate_shape().is_ok());

            let text = metadata.dump().unwrap();
            let rows = table_rows(&text);
            assert_eq!(rows.len(), width);
            for row in rows {
                assert_eq!(row.split(' ').count(), width);
                assert!(!row.starts_with(' ') && !row.ends_with(' '));
            }
        }
    }

    #[test]
    fn test_non_square_tables_rejected() {
        for width in 1..24usize {
            for extra in 1..=(2 * width) {
                let mut cells = create_cells(width);
                cells.extend(std::iter::repeat(0).take(extra));
                let mut metadata: BlendtableMetadata<u32> = BlendtableMetadata::new("", "t");
                let err = metadata.set_table(cells).unwrap_err();
                assert!(
                    matches!(err, Error::MalformedTable { entries } if entries == width * width + extra)
                );
            }
        }
    }

    #[test]
    fn test_dump_empty_table() {
        let mut metadata = metadata();
        metadata.set_table(Vec::new()).unwrap();
        assert_eq!(metadata.compute_width(), 0);
        assert!(metadata.validate_shape().is_ok());
        assert_eq!(
            metadata.dump().unwrap(),
            format!("{HEADER}blendtable [\n]\n\n\n")
        );
    }

    #[test_log::test]
    fn test_set_table_rejects_non_square() {
        let mut metadata = metadata();
        let err = metadata.set_table(vec![1, 2, 3, 4, 5]).unwrap_err();
        assert!(matches!(err, Error::MalformedTable { entries: 5 }));
        assert!(err.to_string().contains('5'));
        assert!(metadata.table().is_none());
    }

    #[test]
    fn test_failed_set_keeps_previous_table() {
        let mut metadata = metadata();
        metadata.set_table(vec![1, 2, 3, 4]).unwrap();
        assert!(metadata.set_table(vec![1, 2, 3]).is_err());

        assert_eq!(metadata.compute_width(), 2);
        assert_eq!(metadata.table().unwrap().cells(), &[1, 2, 3, 4]);
        assert!(metadata.validate_shape().is_ok());
    }

    #[test]
    fn test_no_table() {
        let metadata = metadata();
        assert_eq!(metadata.compute_width(), 0);
        assert!(matches!(metadata.dump(), Err(Error::NoTable)));
        assert!(matches!(metadata.validate_shape(), Err(Error::NoTable)));
        assert!(matches!(
            metadata.write_to(Vec::new()),
            Err(Error::NoTable)
        ));
    }

    #[test]
    fn test_set_table_replaces() {
        let mut metadata = metadata();
        metadata.set_table(vec![1, 2, 3, 4]).unwrap();
        metadata.set_table((0..9).collect::<Vec<_>>()).unwrap();
        assert_eq!(metadata.compute_width(), 3);
        assert!(metadata
            .dump()
            .unwrap()
            .contains("blendtable [\n0 1 2\n3 4 5\n6 7 8\n]\n"));
    }

    #[test]
    fn test_pattern_order_keep_position() {
        let mut metadata = metadata();
        metadata.set_table(vec![0]).unwrap();
        metadata.add_pattern(3, "c.png");
        metadata.add_pattern(1, "a.png");
        metadata.add_pattern(2, "b.png");
        metadata.add_pattern(1, "z.png");

        let text = metadata.dump().unwrap();
        assert!(text.ends_with("]\n\npattern 3 c.png\npattern 1 z.png\npattern 2 b.png\n\n"));
    }

    #[test_log::test]
    fn test_pattern_order_move_to_end() {
        let mut metadata: BlendtableMetadata<u32> = BlendtableMetadata::with_config(
            "terrain",
            "blend.bltable",
            ExportConfig::strict_order(),
        );
        assert_eq!(
            metadata.config().overwrite_policy,
            OverwritePolicy::MoveToEnd
        );
        metadata.set_table(vec![0]).unwrap();
        metadata.add_pattern(3, "c.png");
        metadata.add_pattern(1, "a.png");
        metadata.add_pattern(2, "b.png");
        metadata.add_pattern(1, "z.png");

        let text = metadata.dump().unwrap();
        assert!(text.ends_with("]\n\npattern 3 c.png\npattern 2 b.png\npattern 1 z.png\n\n"));
    }

    #[test]
    fn test_string_cells() {
        let mut metadata: BlendtableMetadata<&str> = BlendtableMetadata::new("", "x.bltable");
        metadata
            .set_table(["0", "1", "1", "0", "2", "2", "1", "0", "0"])
            .unwrap();
        let text = metadata.dump().unwrap();
        assert!(text.contains("blendtable [\n0 1 1\n0 2 2\n1 0 0\n]\n"));
    }

    #[test]
    fn test_write_to_buffer() {
        let mut metadata = metadata();
        metadata.set_table(vec![5]).unwrap();
        metadata.add_pattern(1, "p.png");

        let mut buffer = Vec::new();
        metadata.write_to(&mut buffer).unwrap();
        assert_eq!(String::from_utf8(buffer).unwrap(), metadata.dump().unwrap());
    }

    #[test]
    fn test_display() {
        assert_eq!(
            metadata().to_string(),
            "BlendtableMetadata<blend.bltable>"
        );
        assert_eq!(metadata().targetdir(), Path::new("terrain/blend"));
        assert_eq!(metadata().filename(), "blend.bltable");
    }
}
