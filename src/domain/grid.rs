//! Single-band reflectance grids.
//!
//! A `SpectralGrid` is a dense `height × width` matrix of `f64` values. Values are
//! conceptually reflectances in `[0, 1]` (or NDVI in `[-1, 1]` for derived grids),
//! but no range is enforced: the arithmetic layer accepts whatever the sensor or
//! generator produced.
//!
//! Grids are immutable once built; derived products are new grids.

use std::fmt;

use nalgebra::DMatrix;
use serde::{Deserialize, Serialize};

use crate::error::GridError;

/// Grid dimensions in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridShape {
    pub height: usize,
    pub width: usize,
}

impl GridShape {
    pub fn new(height: usize, width: usize) -> Self {
        Self { height, width }
    }

    /// Total pixel count, `None` if it does not fit in `usize`.
    pub fn cell_count(self) -> Option<usize> {
        self.height.checked_mul(self.width)
    }

    pub fn is_empty(self) -> bool {
        self.height == 0 || self.width == 0
    }
}

impl fmt::Display for GridShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.height, self.width)
    }
}

/// A single spectral band (or a per-pixel index derived from bands).
#[derive(Debug, Clone, PartialEq)]
pub struct SpectralGrid {
    data: DMatrix<f64>,
}

impl SpectralGrid {
    /// Wrap an existing matrix. Rows are the grid height, columns the width.
    pub fn from_matrix(data: DMatrix<f64>) -> Result<Self, GridError> {
        if data.nrows() == 0 || data.ncols() == 0 {
            return Err(GridError::EmptyGrid);
        }
        Ok(Self { data })
    }

    /// Build a grid from row-major nested rows (all rows must have the same length).
    pub fn from_rows(rows: &[Vec<f64>]) -> Result<Self, GridError> {
        let width = rows.first().map(Vec::len).unwrap_or(0);
        if width == 0 {
            return Err(GridError::EmptyGrid);
        }

        let mut flat = Vec::with_capacity(rows.len() * width);
        for (i, row) in rows.iter().enumerate() {
            if row.len() != width {
                return Err(GridError::RaggedRows {
                    row: i + 1,
                    expected: width,
                    actual: row.len(),
                });
            }
            flat.extend_from_slice(row);
        }

        Self::from_matrix(DMatrix::from_row_slice(rows.len(), width, &flat))
    }

    /// Build a grid by evaluating `f(row, col)` for every pixel.
    pub fn from_fn(
        shape: GridShape,
        f: impl FnMut(usize, usize) -> f64,
    ) -> Result<Self, GridError> {
        if shape.is_empty() {
            return Err(GridError::EmptyGrid);
        }
        let bytes = shape
            .cell_count()
            .and_then(|n| n.checked_mul(std::mem::size_of::<f64>()));
        if bytes.is_none_or(|b| b > isize::MAX as usize) {
            return Err(GridError::TooLarge { shape });
        }
        Ok(Self {
            data: DMatrix::from_fn(shape.height, shape.width, f),
        })
    }

    /// A grid with every pixel set to `value`.
    pub fn filled(shape: GridShape, value: f64) -> Result<Self, GridError> {
        Self::from_fn(shape, |_, _| value)
    }

    pub fn shape(&self) -> GridShape {
        GridShape::new(self.data.nrows(), self.data.ncols())
    }

    pub fn height(&self) -> usize {
        self.data.nrows()
    }

    pub fn width(&self) -> usize {
        self.data.ncols()
    }

    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        self.data.get((row, col)).copied()
    }

    pub fn as_matrix(&self) -> &DMatrix<f64> {
        &self.data
    }

    /// Iterate over all pixel values (column-major order).
    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.data.iter().copied()
    }

    /// Copy a single row out as a `Vec` (row-major consumers, e.g. CSV export).
    pub fn row(&self, row: usize) -> Vec<f64> {
        self.data.row(row).iter().copied().collect()
    }

    /// Arithmetic mean over every pixel.
    pub fn mean(&self) -> f64 {
        self.data.sum() / self.data.len() as f64
    }
}
