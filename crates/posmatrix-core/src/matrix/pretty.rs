//! Text rendering of matrix grids for debugging.
//!
//! ```text
//!     - . / 0 1 2 ...
//!  0: . . . . X . ...
//!  1: X . . . . . ...
//! ```
//!
//! One column per alphabet symbol, `X` for a set cell and `.` otherwise. Row
//! labels are right-aligned to the wider of the largest row index and the
//! largest column index.

use std::fmt;

use crate::alphabet::Alphabet;

use super::grid::BitGrid;
use super::literal::LiteralMatrix;

fn decimal_width(n: usize) -> usize {
    n.checked_ilog10().map_or(1, |digits| digits as usize + 1)
}

fn render(
    f: &mut fmt::Formatter<'_>,
    alphabet: Alphabet,
    rows: usize,
    is_set: impl Fn(usize, usize) -> bool,
) -> fmt::Result {
    let width = decimal_width(alphabet.len() - 1).max(decimal_width(rows.saturating_sub(1)));

    write!(f, "{:width$}", "", width = width + 2)?;
    for symbol in alphabet.symbols() {
        write!(f, "{symbol} ")?;
    }
    writeln!(f)?;

    for y in 0..rows {
        write!(f, "{y:>width$}: ")?;
        for x in 0..alphabet.len() {
            f.write_str(if is_set(y, x) { "X " } else { ". " })?;
        }
        writeln!(f)?;
    }

    Ok(())
}

/// One length layer of a [`LiteralMatrix`].
#[derive(Debug, Clone, Copy)]
pub struct LayerView<'a> {
    matrix: &'a LiteralMatrix,
    layer: usize,
}

impl<'a> LayerView<'a> {
    pub(crate) fn new(matrix: &'a LiteralMatrix, layer: usize) -> Self {
        Self { matrix, layer }
    }

    /// Key length shown by this view.
    #[must_use]
    pub fn key_len(&self) -> usize {
        self.layer + 1
    }
}

impl fmt::Display for LayerView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let z = self.layer;
        render(f, self.matrix.alphabet(), z + 1, |y, x| {
            self.matrix.is_set(z, y, x)
        })
    }
}

/// The full grid of a [`DigestMatrix`](super::DigestMatrix).
#[derive(Debug)]
pub struct GridView<'a, G> {
    grid: &'a G,
    alphabet: Alphabet,
}

impl<'a, G: BitGrid> GridView<'a, G> {
    pub(crate) fn new(grid: &'a G, alphabet: Alphabet) -> Self {
        Self { grid, alphabet }
    }
}

impl<G: BitGrid> fmt::Display for GridView<'_, G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render(f, self.alphabet, self.grid.rows(), |y, x| self.grid.get(y, x))
    }
}
