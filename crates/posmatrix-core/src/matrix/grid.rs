//! Fixed-shape 2-D flag grids backing the digest stores.
//!
//! Both backings hold the same logical `rows x columns` grid in one flat
//! buffer and are indistinguishable through [`BitGrid`]:
//!
//! - [`BoolGrid`]: one `bool` per cell.
//! - [`PackedGrid`]: one bit per cell, `columns.div_ceil(8)` bytes per row.

/// A fixed-shape grid of flags addressed by `(row, column)`.
///
/// Callers stay within `0..rows()` and `0..columns()`; the shape never changes
/// after construction.
pub trait BitGrid {
    /// Creates a grid with every cell cleared.
    fn with_shape(rows: usize, columns: usize) -> Self
    where
        Self: Sized;

    /// Number of rows.
    fn rows(&self) -> usize;

    /// Number of columns.
    fn columns(&self) -> usize;

    /// Sets the flag at `(row, column)`.
    fn set(&mut self, row: usize, column: usize);

    /// Clears the flag at `(row, column)`.
    fn clear(&mut self, row: usize, column: usize);

    /// Tests the flag at `(row, column)`.
    fn get(&self, row: usize, column: usize) -> bool;

    /// True if no flag in `row` is set.
    fn row_is_empty(&self, row: usize) -> bool;

    /// Clears every cell.
    fn clear_all(&mut self);

    /// Number of set cells.
    fn count_set(&self) -> usize;

    /// Bytes used by the backing buffer.
    fn memory_bytes(&self) -> usize;
}

/// Dense grid with one `bool` per cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoolGrid {
    cells: Vec<bool>,
    rows: usize,
    columns: usize,
}

impl BoolGrid {
    #[inline]
    fn offset(&self, row: usize, column: usize) -> usize {
        debug_assert!(row < self.rows && column < self.columns);
        row * self.columns + column
    }
}

impl BitGrid for BoolGrid {
    fn with_shape(rows: usize, columns: usize) -> Self {
        Self {
            cells: vec![false; rows * columns],
            rows,
            columns,
        }
    }

    fn rows(&self) -> usize {
        self.rows
    }

    fn columns(&self) -> usize {
        self.columns
    }

    #[inline]
    fn set(&mut self, row: usize, column: usize) {
        let i = self.offset(row, column);
        self.cells[i] = true;
    }

    #[inline]
    fn clear(&mut self, row: usize, column: usize) {
        let i = self.offset(row, column);
        self.cells[i] = false;
    }

    #[inline]
    fn get(&self, row: usize, column: usize) -> bool {
        self.cells[self.offset(row, column)]
    }

    fn row_is_empty(&self, row: usize) -> bool {
        let start = row * self.columns;
        !self.cells[start..start + self.columns].contains(&true)
    }

    fn clear_all(&mut self) {
        self.cells.fill(false);
    }

    fn count_set(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }

    fn memory_bytes(&self) -> usize {
        self.cells.len()
    }
}

/// Packed grid with one bit per cell.
///
/// Bits past `columns` in the last byte of a row are never set, so a row is
/// empty exactly when all of its bytes are zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackedGrid {
    bytes: Vec<u8>,
    rows: usize,
    columns: usize,
    stride: usize,
}

impl PackedGrid {
    #[inline]
    fn locate(&self, row: usize, column: usize) -> (usize, u8) {
        debug_assert!(row < self.rows && column < self.columns);
        let byte_index = row * self.stride + column / 8;
        let mask = 1u8 << (column % 8);
        (byte_index, mask)
    }

    /// Bytes per row.
    #[must_use]
    pub fn stride(&self) -> usize {
        self.stride
    }
}

impl BitGrid for PackedGrid {
    fn with_shape(rows: usize, columns: usize) -> Self {
        let stride = columns.div_ceil(8);
        Self {
            bytes: vec![0u8; rows * stride],
            rows,
            columns,
            stride,
        }
    }

    fn rows(&self) -> usize {
        self.rows
    }

    fn columns(&self) -> usize {
        self.columns
    }

    #[inline]
    fn set(&mut self, row: usize, column: usize) {
        let (i, mask) = self.locate(row, column);
        self.bytes[i] |= mask;
    }

    #[inline]
    fn clear(&mut self, row: usize, column: usize) {
        let (i, mask) = self.locate(row, column);
        self.bytes[i] &= !mask;
    }

    #[inline]
    fn get(&self, row: usize, column: usize) -> bool {
        let (i, mask) = self.locate(row, column);
        self.bytes[i] & mask != 0
    }

    fn row_is_empty(&self, row: usize) -> bool {
        let start = row * self.stride;
        self.bytes[start..start + self.stride].iter().all(|&b| b == 0)
    }

    fn clear_all(&mut self) {
        self.bytes.fill(0);
    }

    fn count_set(&self) -> usize {
        self.bytes.iter().map(|b| b.count_ones() as usize).sum()
    }

    fn memory_bytes(&self) -> usize {
        self.bytes.len()
    }
}
