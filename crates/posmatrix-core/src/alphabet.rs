//! Alphabet codec: maps symbols to dense column indices and back.
//!
//! Two closed alphabets exist:
//!
//! | Alphabet | Symbols | Columns |
//! |---|---|---|
//! | [`Alphabet::Alphanumeric`] | `0-9`, `a-z` | 36 |
//! | [`Alphabet::PathName`] | `-`, `.`, `/`, `0-9`, `a-z` | 39 |
//!
//! Alphabetic input is case-folded before lookup. Because the index range is
//! contiguous, every matrix row can be stored as a fixed-width bit vector.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

const DIGITS: usize = 10;
const LETTERS: usize = 26;
const PATH_SYMBOL_COUNT: usize = 3;
static PATH_SYMBOLS: [char; PATH_SYMBOL_COUNT] = ['-', '.', '/'];

/// A closed, ordered symbol set mapped bijectively onto `0..len()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Alphabet {
    /// Digits then lowercase letters. Covers every hex digit.
    Alphanumeric,
    /// `-`, `.`, `/`, then digits, then lowercase letters.
    ///
    /// Covers hierarchical names such as `namespace/name.v1-beta`.
    PathName,
}

impl Alphabet {
    /// Number of symbols, i.e. matrix columns.
    #[must_use]
    pub const fn len(self) -> usize {
        self.symbol_offset() + DIGITS + LETTERS
    }

    /// Always false: both alphabets are non-empty.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        false
    }

    const fn symbol_offset(self) -> usize {
        match self {
            Self::Alphanumeric => 0,
            Self::PathName => PATH_SYMBOL_COUNT,
        }
    }

    /// Maps a character to its column index.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidCharacter`] if `c` (after case folding) is not
    /// part of this alphabet.
    pub fn char_to_index(self, c: char) -> Result<usize> {
        let folded = fold_case(c);
        let offset = self.symbol_offset();

        match folded {
            '0'..='9' => Ok(offset + (folded as usize - '0' as usize)),
            'a'..='z' => Ok(offset + DIGITS + (folded as usize - 'a' as usize)),
            _ if offset > 0 => PATH_SYMBOLS
                .iter()
                .position(|&s| s == folded)
                .ok_or(Error::InvalidCharacter(c)),
            _ => Err(Error::InvalidCharacter(c)),
        }
    }

    /// Maps a column index back to its (lowercase) character.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`] if `index >= self.len()`.
    pub fn index_to_char(self, index: usize) -> Result<char> {
        let offset = self.symbol_offset();

        let c = if index < offset {
            PATH_SYMBOLS[index]
        } else if index < offset + DIGITS {
            char::from(b'0' + (index - offset) as u8)
        } else if index < self.len() {
            char::from(b'a' + (index - offset - DIGITS) as u8)
        } else {
            return Err(Error::IndexOutOfRange {
                index,
                len: self.len(),
            });
        };

        Ok(c)
    }

    /// Iterates the symbols in column order.
    pub fn symbols(self) -> impl Iterator<Item = char> {
        let offset = self.symbol_offset();
        PATH_SYMBOLS[..offset]
            .iter()
            .copied()
            .chain('0'..='9')
            .chain('a'..='z')
    }

    /// Returns true if `c` is part of this alphabet.
    #[must_use]
    pub fn contains(self, c: char) -> bool {
        self.char_to_index(c).is_ok()
    }
}

/// Unicode simple lowercase: the first scalar of the full lowercase mapping.
fn fold_case(c: char) -> char {
    if c.is_ascii() {
        return c.to_ascii_lowercase();
    }
    c.to_lowercase().next().unwrap_or(c)
}
