//! Literal length-indexed matrix.
//!
//! Keys are sequences of path-name characters (`-./0-9a-z`, case-insensitive)
//! of length `1..=max_len`. A key of length `n` lives in layer `z = n - 1`,
//! which has `n` rows; keys of different lengths never share a cell.
//!
//! # Layout
//!
//! All layers are packed into one flat buffer. Layer `z` starts at row
//! `z * (z + 1) / 2`, so the buffer holds `max_len * (max_len + 1) / 2` rows
//! of `alphabet.len()` cells.
//!
//! # Deletion
//!
//! Each cell holds a counter. With [`DeletionPolicy::OccupancyCount`] the
//! counter is the number of live insertions using the cell and `unset`
//! decrements it; with [`DeletionPolicy::RowEmptiness`] the counter is a 0/1
//! flag and `unset` applies the row-emptiness heuristic (see
//! [`DigestMatrix`](super::DigestMatrix)) within the key's layer.
//!
//! Neither policy makes membership exact: cells are per position, so keys
//! built from positions of other inserted keys of the same length report as
//! present. Removing such a key decrements cells owned by the keys it was
//! built from, so under [`DeletionPolicy::OccupancyCount`] live keys are only
//! safe when callers remove keys they actually inserted.
//!
//! Depth is capped at [`MAX_LITERAL_DEPTH`]; larger requests are clamped.

use serde::{Deserialize, Serialize};

use crate::alphabet::Alphabet;
use crate::error::{Error, Result};

use super::pretty::LayerView;
use super::MembershipSet;

/// Column alphabet of the literal store.
pub const LITERAL_ALPHABET: Alphabet = Alphabet::PathName;

/// Largest accepted `max_len`.
///
/// The store allocates `n * (n + 1) / 2` rows, so depth is capped.
pub const MAX_LITERAL_DEPTH: usize = 4096;

/// How `unset` decides which cells to clear.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeletionPolicy {
    /// Per-cell insertion counters. Removing a key that was inserted never
    /// clears a cell still used by another live key; removing a key that
    /// `contains` rejects is a no-op.
    ///
    /// A key that was never inserted but is covered position by position by
    /// live keys passes `contains`, and removing it decrements their cells.
    #[default]
    OccupancyCount,
    /// One flag per cell. Removal clears the key's last cell, then clears the
    /// key's cell in row `y - 1` whenever row `y` of the layer is empty.
    RowEmptiness,
}

/// Exact-encoding membership set for keys up to `max_len` characters.
#[derive(Debug, Clone)]
pub struct LiteralMatrix {
    cells: Vec<u32>,
    max_len: usize,
    alphabet: Alphabet,
    policy: DeletionPolicy,
}

impl LiteralMatrix {
    /// Creates an empty matrix with the default deletion policy,
    /// [`DeletionPolicy::OccupancyCount`].
    ///
    /// Under that policy `unset` of a key `contains` rejects changes nothing.
    /// Use [`LiteralMatrix::with_policy`] with [`DeletionPolicy::RowEmptiness`]
    /// for the unconditional last-cell clearing of the row-emptiness rule.
    ///
    /// `max_len` above [`MAX_LITERAL_DEPTH`] is clamped.
    #[must_use]
    pub fn new(max_len: usize) -> Self {
        Self::with_policy(max_len, DeletionPolicy::default())
    }

    /// Creates an empty matrix with an explicit deletion policy.
    ///
    /// `max_len` above [`MAX_LITERAL_DEPTH`] is clamped.
    #[must_use]
    pub fn with_policy(max_len: usize, policy: DeletionPolicy) -> Self {
        let requested = max_len;
        let max_len = bounded_depth(requested);
        if max_len != requested {
            tracing::warn!(
                requested,
                max_len,
                "Literal matrix depth clamped to the supported maximum"
            );
        }

        let alphabet = LITERAL_ALPHABET;
        let rows = layer_start(max_len);
        let cells = vec![0u32; rows * alphabet.len()];

        tracing::debug!(
            max_len,
            rows,
            columns = alphabet.len(),
            ?policy,
            memory_bytes = cells.len() * std::mem::size_of::<u32>(),
            "Created literal matrix"
        );

        Self {
            cells,
            max_len,
            alphabet,
            policy,
        }
    }

    #[inline]
    fn cell(&self, z: usize, y: usize, x: usize) -> usize {
        debug_assert!(z < self.max_len && y <= z && x < self.alphabet.len());
        (layer_start(z) + y) * self.alphabet.len() + x
    }

    fn row_is_empty(&self, z: usize, y: usize) -> bool {
        let start = self.cell(z, y, 0);
        self.cells[start..start + self.alphabet.len()]
            .iter()
            .all(|&c| c == 0)
    }

    /// Checks length and every character; returns the key's layer.
    fn validate(&self, key: &[char]) -> Result<usize> {
        if key.is_empty() || key.len() > self.max_len {
            tracing::trace!(
                length = key.len(),
                max = self.max_len,
                "Rejected literal key: invalid length"
            );
            return Err(Error::InvalidLength {
                length: key.len(),
                max: self.max_len,
            });
        }

        if let Some(&bad) = key.iter().find(|&&c| !self.alphabet.contains(c)) {
            tracing::trace!(character = ?bad, "Rejected literal key: invalid character");
            return Err(Error::InvalidCharacter(bad));
        }

        Ok(key.len() - 1)
    }

    /// Inserts `key`.
    ///
    /// The key is validated in full before any cell changes, so a rejected
    /// key leaves the matrix untouched.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidLength`] if `key` is empty or longer than `max_len`.
    /// - [`Error::InvalidCharacter`] if `key` has a character outside the alphabet.
    pub fn set(&mut self, key: &[char]) -> Result<()> {
        let z = self.validate(key)?;

        for (y, &c) in key.iter().enumerate() {
            let i = self.cell(z, y, self.alphabet.char_to_index(c)?);
            self.cells[i] = match self.policy {
                DeletionPolicy::OccupancyCount => self.cells[i].saturating_add(1),
                DeletionPolicy::RowEmptiness => 1,
            };
        }

        Ok(())
    }

    /// Returns true if every cell of `key` is set in its layer.
    ///
    /// Scans from the last position to the first. Invalid keys are never
    /// members.
    #[must_use]
    pub fn contains(&self, key: &[char]) -> bool {
        if key.is_empty() || key.len() > self.max_len {
            return false;
        }
        let z = key.len() - 1;

        for (y, &c) in key.iter().enumerate().rev() {
            match self.alphabet.char_to_index(c) {
                Ok(x) if self.cells[self.cell(z, y, x)] > 0 => {}
                _ => return false,
            }
        }

        true
    }

    /// Removes `key` according to the matrix's [`DeletionPolicy`].
    ///
    /// # Errors
    ///
    /// Same validation as [`LiteralMatrix::set`]; a rejected key leaves the
    /// matrix untouched.
    pub fn unset(&mut self, key: &[char]) -> Result<()> {
        let z = self.validate(key)?;

        match self.policy {
            DeletionPolicy::OccupancyCount => self.unset_counted(key, z),
            DeletionPolicy::RowEmptiness => self.unset_row_emptiness(key, z),
        }
    }

    fn unset_counted(&mut self, key: &[char], z: usize) -> Result<()> {
        if !self.contains(key) {
            tracing::trace!(layer = z, "Skipped unset of absent literal key");
            return Ok(());
        }

        for (y, &c) in key.iter().enumerate() {
            let i = self.cell(z, y, self.alphabet.char_to_index(c)?);
            self.cells[i] -= 1;
        }

        Ok(())
    }

    fn unset_row_emptiness(&mut self, key: &[char], z: usize) -> Result<()> {
        let last = self.cell(z, z, self.alphabet.char_to_index(key[z])?);
        self.cells[last] = 0;

        for y in (1..=z).rev() {
            if self.row_is_empty(z, y) {
                let i = self.cell(z, y - 1, self.alphabet.char_to_index(key[y - 1])?);
                self.cells[i] = 0;
            }
        }

        Ok(())
    }

    /// Clears every cell.
    pub fn clear(&mut self) {
        self.cells.fill(0);
    }

    /// Number of set cells across all layers.
    #[must_use]
    pub fn occupied_cells(&self) -> usize {
        self.cells.iter().filter(|&&c| c > 0).count()
    }

    /// True if no cell is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|&c| c == 0)
    }

    /// Longest accepted key.
    #[must_use]
    pub fn max_len(&self) -> usize {
        self.max_len
    }

    /// Column alphabet.
    #[must_use]
    pub fn alphabet(&self) -> Alphabet {
        self.alphabet
    }

    /// Deletion policy.
    #[must_use]
    pub fn policy(&self) -> DeletionPolicy {
        self.policy
    }

    /// Bytes used by the cell buffer.
    #[must_use]
    pub fn memory_bytes(&self) -> usize {
        self.cells.len() * std::mem::size_of::<u32>()
    }

    pub(crate) fn is_set(&self, z: usize, y: usize, x: usize) -> bool {
        self.cells[self.cell(z, y, x)] > 0
    }

    /// Diagnostic view of the layer holding keys of length `size`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidLength`] if `size` is outside `1..=max_len`.
    pub fn layer(&self, size: usize) -> Result<LayerView<'_>> {
        if size == 0 || size > self.max_len {
            return Err(Error::InvalidLength {
                length: size,
                max: self.max_len,
            });
        }
        Ok(LayerView::new(self, size - 1))
    }

    /// Renders the layer holding keys of length `size` as a text grid.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidLength`] if `size` is outside `1..=max_len`.
    pub fn pretty_print(&self, size: usize) -> Result<String> {
        Ok(self.layer(size)?.to_string())
    }
}

impl MembershipSet for LiteralMatrix {
    type Key = [char];

    fn set(&mut self, key: &[char]) -> Result<()> {
        LiteralMatrix::set(self, key)
    }

    fn contains(&self, key: &[char]) -> bool {
        LiteralMatrix::contains(self, key)
    }

    fn unset(&mut self, key: &[char]) -> Result<()> {
        LiteralMatrix::unset(self, key)
    }
}

/// Clamps a requested depth to `0..=MAX_LITERAL_DEPTH`.
pub(crate) const fn bounded_depth(max_len: usize) -> usize {
    if max_len > MAX_LITERAL_DEPTH {
        MAX_LITERAL_DEPTH
    } else {
        max_len
    }
}

/// First row of layer `z`: layers `0..z` hold `1 + 2 + ... + z` rows.
///
/// `z` never exceeds [`MAX_LITERAL_DEPTH`], far below overflow.
#[inline]
const fn layer_start(z: usize) -> usize {
    z * (z + 1) / 2
}
