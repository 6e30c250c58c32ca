//! Square blending lookup tables.
//!
//! A [`Blendtable`] stores its cells flattened in row-major order. The width is
//! derived from the cell count with [`crate::utils::isqrt`] and the constructor
//! rejects every count that is not a perfect square, so a value of this type is
//! always a well-formed `width x width` matrix.

use std::fmt;

use crate::{utils::isqrt, Error, Result};

/// A validated square matrix of blend cells stored in row-major order.
///
/// # Examples
///
/// ```rust
/// use bltable::Blendtable;
///
/// let table = Blendtable::new(vec![1, 2, 3, 4])?;
/// assert_eq!(table.width(), 2);
/// assert_eq!(table.row(1), Some(&[3, 4][..]));
///
/// assert!(Blendtable::new(vec![1, 2, 3]).is_err());
/// # Ok::<(), bltable::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Blendtable<T> {
    cells: Vec<T>,
    width: usize,
}

impl<T> Blendtable<T> {
    /// Creates a table from its flattened cells.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MalformedTable`] if the number of cells is not a perfect square.
    pub fn new(cells: Vec<T>) -> Result<Self> {
        let width = isqrt(cells.len());
        if width * width != cells.len() {
            return Err(Error::MalformedTable {
                entries: cells.len(),
            });
        }

        Ok(Blendtable { cells, width })
    }

    /// Collects cells from an iterator and validates the resulting shape.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MalformedTable`] if the iterator does not yield a perfect
    /// square number of cells.
    pub fn from_iter_checked<I>(cells: I) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
    {
        Self::new(cells.into_iter().collect())
    }

    /// Side length of the table.
    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Total number of cells (`width * width`).
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Returns `true` for the zero-width table.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// All cells in row-major order.
    #[must_use]
    pub fn cells(&self) -> &[T] {
        &self.cells
    }

    /// Returns row `idx`, i.e. the cells `idx * width .. idx * width + width`.
    #[must_use]
    pub fn row(&self, idx: usize) -> Option<&[T]> {
        if idx >= self.width {
            return None;
        }

        let start = idx * self.width;
        self.cells.get(start..start + self.width)
    }

    /// Iterates over the `width` rows of the table.
    pub fn rows(&self) -> impl ExactSizeIterator<Item = &[T]> + '_ {
        (0..self.width).map(move |idx| {
            let start = idx * self.width;
            &self.cells[start..start + self.width]
        })
    }

    /// Consumes the table and returns its flattened cells.
    #[must_use]
    pub fn into_cells(self) -> Vec<T> {
        self.cells
    }
}

impl<T> TryFrom<Vec<T>> for Blendtable<T> {
    type Error = Error;

    fn try_from(cells: Vec<T>) -> Result<Self> {
        Self::new(cells)
    }
}

impl<T: fmt::Display> Blendtable<T> {
    /// Writes one row as its cells joined by single spaces, without a line terminator.
    pub(crate) fn fmt_row(row: &[T], f: &mut impl fmt::Write) -> fmt::Result {
        let mut cells = row.iter();
        if let Some(first) = cells.next() {
            write!(f, "{first}")?;
            for cell in cells {
                write!(f, " {cell}")?;
            }
        }
        Ok(())
    }
}

/// Renders the rows, each followed by a newline.
impl<T: fmt::Display> fmt::Display for Blendtable<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            Self::fmt_row(row, f)?;
            writeln!(f)?;
        }
        Ok(())
    }
}
