//! Collectible-presence grid supplied by the host each observation.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A two-dimensional boolean grid stored row-major.
///
/// Cell `(x, y)` is column `x` of row `y`. The shape is validated at
/// construction so that every observation handed to the encoder has a
/// well-formed layout.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BitGrid {
    width: usize,
    height: usize,
    cells: Vec<bool>,
}

impl BitGrid {
    /// Create an empty grid (every cell false).
    pub fn new(width: usize, height: usize) -> Self {
        BitGrid {
            width,
            height,
            cells: vec![false; width * height],
        }
    }

    /// Build a grid from rows of cells.
    ///
    /// # Errors
    ///
    /// Returns [`Error::RaggedGrid`] if any row's length differs from the
    /// first row's.
    pub fn from_rows(rows: &[Vec<bool>]) -> Result<Self> {
        let width = rows.first().map_or(0, Vec::len);
        for (index, row) in rows.iter().enumerate() {
            if row.len() != width {
                return Err(Error::RaggedGrid {
                    row: index,
                    expected: width,
                    got: row.len(),
                });
            }
        }
        Ok(BitGrid {
            width,
            height: rows.len(),
            cells: rows.iter().flatten().copied().collect(),
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Cell value at `(x, y)`, or `None` when out of bounds.
    pub fn get(&self, x: usize, y: usize) -> Option<bool> {
        if x < self.width && y < self.height {
            Some(self.cells[y * self.width + x])
        } else {
            None
        }
    }

    /// Set the cell at `(x, y)`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfBounds`] if `(x, y)` falls outside the grid.
    pub fn set(&mut self, x: usize, y: usize, value: bool) -> Result<()> {
        if x < self.width && y < self.height {
            self.cells[y * self.width + x] = value;
            Ok(())
        } else {
            Err(Error::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            })
        }
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> &[bool] {
        &self.cells
    }
}
