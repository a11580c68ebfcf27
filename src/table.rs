//! The alignment table: a grid of scored cells with operation tags.
//!
//! Cells carry no back-pointers. Traceback recomputes each predecessor
//! index from the stored [`Op`] and the current `(i, j)`, which keeps the
//! table a plain owned value with no internal references.
//!
//! Storage is a flat `Vec<Cell>` with one offset per row, so a banded
//! table only allocates the corridor: O(rows * (2d+1)) cells instead of
//! the full rectangle.

use crate::band::Band;
use crate::costs::INDEL;

/// Operation that produced a cell's value.
///
/// Determines the predecessor during traceback: `Delete` came from
/// `(i-1, j)`, `Insert` from `(i, j-1)`, `MatchSub` from `(i-1, j-1)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Op {
    /// Not yet filled. Only the origin keeps this tag after the fill.
    Unset,
    /// Consume a row character against a gap.
    Delete,
    /// Consume a column character against a gap.
    Insert,
    /// Consume one character from each sequence (match or substitution).
    MatchSub,
}

/// One table entry: minimum accumulated cost plus the operation chosen.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Cell {
    /// Minimum cost to align the prefixes ending at this cell.
    pub value: i32,
    /// Operation that achieved `value`.
    pub op: Op,
}

impl Cell {
    const UNSET: Cell = Cell {
        value: 0,
        op: Op::Unset,
    };
}

/// A `(rows+1) x (cols+1)` grid of cells, optionally restricted to a
/// diagonal corridor. Built fresh per alignment, filled once, consumed by
/// traceback.
pub struct Table {
    rows: usize,
    cols: usize,
    band: Band,
    /// `row_starts[i]` is the offset of row `i`'s first populated cell;
    /// length `rows + 2` so every row has an exclusive end.
    row_starts: Vec<usize>,
    cells: Vec<Cell>,
}

impl Table {
    /// Allocate the table and fill the base-case row and column.
    ///
    /// # Panics
    /// Panics in banded mode if `rows > cols`: the caller orients the
    /// shorter sequence along rows so the corridor reaches the final row.
    pub fn new(rows: usize, cols: usize, band: Band) -> Self {
        if band.is_banded() {
            assert!(rows <= cols, "banded tables require rows <= cols");
        }
        let mut row_starts = Vec::with_capacity(rows + 2);
        let mut total = 0;
        for i in 0..=rows {
            row_starts.push(total);
            total += band.col_hi(i, cols) - band.col_lo(i) + 1;
        }
        row_starts.push(total);

        let mut table = Table {
            rows,
            cols,
            band,
            row_starts,
            cells: vec![Cell::UNSET; total],
        };
        table.fill_base_cases();
        table
    }

    /// Number of row characters (table height minus the base row).
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of column characters.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Corridor configuration this table was built with.
    pub fn band(&self) -> Band {
        self.band
    }

    /// Whether `(i, j)` is a populated cell.
    #[inline]
    pub fn contains(&self, i: usize, j: usize) -> bool {
        self.band.contains(i, j, self.rows, self.cols)
    }

    #[inline]
    fn index(&self, i: usize, j: usize) -> usize {
        debug_assert!(self.contains(i, j), "({i},{j}) outside populated region");
        self.row_starts[i] + (j - self.band.col_lo(i))
    }

    /// Read a populated cell.
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> Cell {
        self.cells[self.index(i, j)]
    }

    /// Write a populated cell.
    #[inline]
    pub(crate) fn set(&mut self, i: usize, j: usize, cell: Cell) {
        let idx = self.index(i, j);
        self.cells[idx] = cell;
    }

    /// Terminal cell of the fill: the bottom-right corner, or in banded
    /// mode the last corridor cell of the final row when the corner lies
    /// outside the corridor.
    pub fn terminal(&self) -> (usize, usize) {
        (self.rows, self.band.col_hi(self.rows, self.cols))
    }

    /// Base cases: `(0,0)` stays 0/unset; the populated prefix of the
    /// first column is the pure-deletion path, the populated prefix of
    /// the first row the pure-insertion path.
    fn fill_base_cases(&mut self) {
        for i in 1..=self.rows {
            if !self.contains(i, 0) {
                break;
            }
            self.set(
                i,
                0,
                Cell {
                    value: i as i32 * INDEL,
                    op: Op::Delete,
                },
            );
        }
        for j in 1..=self.cols {
            if !self.contains(0, j) {
                break;
            }
            self.set(
                0,
                j,
                Cell {
                    value: j as i32 * INDEL,
                    op: Op::Insert,
                },
            );
        }
    }
}
