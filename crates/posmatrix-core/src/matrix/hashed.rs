//! Digest-keyed bit matrix (16 rows x 36 columns).
//!
//! Row `y` holds the hex digit at position `y` of the key's digest. Distinct
//! keys whose digests agree at a position share that cell, so:
//!
//! - `contains` can report keys that were never inserted, and
//! - `unset` approximates reference counting by row emptiness: after clearing
//!   the key's last cell it walks back towards row 0 and clears the key's
//!   cell in row `y - 1` whenever row `y` holds no flag at all.
//!
//! The second rule can clear a cell still needed by another key whose digest
//! shares the trailing run of emptied rows, and it leaves shared cells set
//! when every row stays occupied. Both are accepted costs of a fixed 16-row
//! structure.

use crate::alphabet::Alphabet;
use crate::digest::{DigestEncoder, HexDigest, StringHasher, Xxh64Hasher, DIGEST_WIDTH};
use crate::error::Result;

use super::grid::{BitGrid, BoolGrid, PackedGrid};
use super::pretty::GridView;
use super::MembershipSet;

/// Column alphabet of the digest stores. Covers every hex digit.
pub const DIGEST_ALPHABET: Alphabet = Alphabet::Alphanumeric;

/// Digest-keyed membership set over a [`BitGrid`] backing.
#[derive(Debug, Clone)]
pub struct DigestMatrix<G = BoolGrid, H = Xxh64Hasher> {
    grid: G,
    encoder: DigestEncoder<H>,
    alphabet: Alphabet,
}

/// Dense-bool backed digest matrix.
pub type HashMatrix<H = Xxh64Hasher> = DigestMatrix<BoolGrid, H>;

/// Packed-bit backed digest matrix.
pub type PackedHashMatrix<H = Xxh64Hasher> = DigestMatrix<PackedGrid, H>;

impl<G: BitGrid> DigestMatrix<G, Xxh64Hasher> {
    /// Creates an empty matrix hashing with XXH64 (seed 0).
    #[must_use]
    pub fn new() -> Self {
        Self::with_hasher(Xxh64Hasher::default())
    }
}

impl<G: BitGrid> Default for DigestMatrix<G, Xxh64Hasher> {
    fn default() -> Self {
        Self::new()
    }
}

impl<G: BitGrid, H: StringHasher> DigestMatrix<G, H> {
    /// Creates an empty matrix with a custom hasher.
    #[must_use]
    pub fn with_hasher(hasher: H) -> Self {
        let alphabet = DIGEST_ALPHABET;
        let grid = G::with_shape(DIGEST_WIDTH, alphabet.len());

        tracing::debug!(
            rows = grid.rows(),
            columns = grid.columns(),
            memory_bytes = grid.memory_bytes(),
            "Created digest matrix"
        );

        Self {
            grid,
            encoder: DigestEncoder::new(hasher),
            alphabet,
        }
    }

    /// Returns the row key sequence of `s`.
    #[must_use]
    pub fn digest(&self, s: &str) -> HexDigest {
        self.encoder.encode(s)
    }

    /// Resolves every digit of `digest` to its column.
    fn columns_of(&self, digest: &HexDigest) -> Result<[usize; DIGEST_WIDTH]> {
        let mut columns = [0usize; DIGEST_WIDTH];
        for (slot, c) in columns.iter_mut().zip(digest.chars()) {
            *slot = self.alphabet.char_to_index(c)?;
        }
        Ok(columns)
    }

    /// Inserts `s`. The empty string is a no-op.
    ///
    /// # Errors
    ///
    /// Never fails with the built-in alphabet; the `Result` mirrors
    /// [`LiteralMatrix::set`](super::LiteralMatrix::set).
    pub fn set(&mut self, s: &str) -> Result<()> {
        let digest = self.encoder.encode(s);
        let columns = self.columns_of(&digest)?;

        for (y, &x) in columns[..digest.len()].iter().enumerate() {
            self.grid.set(y, x);
        }

        Ok(())
    }

    /// Returns true if every cell of `s`'s digest is set.
    ///
    /// Scans from the last digit to the first. False for the empty string.
    #[must_use]
    pub fn contains(&self, s: &str) -> bool {
        let digest = self.encoder.encode(s);
        if digest.is_empty() {
            return false;
        }

        for (y, c) in digest.chars().enumerate().rev() {
            match self.alphabet.char_to_index(c) {
                Ok(x) if self.grid.get(y, x) => {}
                _ => return false,
            }
        }

        true
    }

    /// Removes `s` using row-emptiness propagation. The empty string is a no-op.
    ///
    /// # Errors
    ///
    /// Never fails with the built-in alphabet.
    pub fn unset(&mut self, s: &str) -> Result<()> {
        let digest = self.encoder.encode(s);
        if digest.is_empty() {
            return Ok(());
        }
        let columns = self.columns_of(&digest)?;

        let last = digest.len() - 1;
        self.grid.clear(last, columns[last]);

        for y in (1..=last).rev() {
            if self.grid.row_is_empty(y) {
                self.grid.clear(y - 1, columns[y - 1]);
            }
        }

        Ok(())
    }

    /// Clears every cell.
    pub fn clear(&mut self) {
        self.grid.clear_all();
    }

    /// Number of set cells.
    #[must_use]
    pub fn occupied_cells(&self) -> usize {
        self.grid.count_set()
    }

    /// True if no cell is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        (0..self.grid.rows()).all(|y| self.grid.row_is_empty(y))
    }

    /// Number of rows (always [`DIGEST_WIDTH`]).
    #[must_use]
    pub fn rows(&self) -> usize {
        self.grid.rows()
    }

    /// Number of columns (alphabet size).
    #[must_use]
    pub fn columns(&self) -> usize {
        self.grid.columns()
    }

    /// Column alphabet.
    #[must_use]
    pub fn alphabet(&self) -> Alphabet {
        self.alphabet
    }

    /// Backing grid.
    #[must_use]
    pub fn grid(&self) -> &G {
        &self.grid
    }

    /// Bytes used by the backing grid.
    #[must_use]
    pub fn memory_bytes(&self) -> usize {
        self.grid.memory_bytes()
    }

    /// Diagnostic view of the whole grid.
    #[must_use]
    pub fn view(&self) -> GridView<'_, G> {
        GridView::new(&self.grid, self.alphabet)
    }
}

impl<G: BitGrid, H: StringHasher> MembershipSet for DigestMatrix<G, H> {
    type Key = str;

    fn set(&mut self, key: &str) -> Result<()> {
        DigestMatrix::set(self, key)
    }

    fn contains(&self, key: &str) -> bool {
        DigestMatrix::contains(self, key)
    }

    fn unset(&mut self, key: &str) -> Result<()> {
        DigestMatrix::unset(self, key)
    }
}
