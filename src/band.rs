//! Corridor configuration for table fills.
//!
//! A [`Band`] is an explicit, copyable value passed into every function
//! that needs to know which cells of the table exist. Corridor membership
//! is a pure function of `(i, j)` and the configuration; there is no
//! implicit mode state read from the aligner.
//!
//! In banded mode the populated region is the symmetric diagonal window
//! `|i - j| <= half_width`. Two consequences used elsewhere:
//! - only the first `half_width` cells of each base edge exist, and
//! - the last populated cell of row `i` is column `min(cols, i + half_width)`.

/// Fill mode: the full rectangle, or a diagonal corridor of fixed
/// half-width.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Band {
    /// Populate every cell of the `(rows+1) x (cols+1)` table.
    Full,
    /// Populate only cells with `|i - j| <= half_width`.
    Banded {
        /// Corridor half-width `d`.
        half_width: usize,
    },
}

impl Band {
    /// Default corridor half-width `d`.
    pub const DEFAULT_HALF_WIDTH: usize = 3;

    /// Banded configuration with the default half-width.
    pub fn banded() -> Self {
        Band::Banded {
            half_width: Self::DEFAULT_HALF_WIDTH,
        }
    }

    /// True in banded mode.
    #[inline]
    pub fn is_banded(&self) -> bool {
        matches!(self, Band::Banded { .. })
    }

    /// First populated column of row `i`.
    #[inline]
    pub fn col_lo(&self, i: usize) -> usize {
        match self {
            Band::Full => 0,
            Band::Banded { half_width } => i.saturating_sub(*half_width),
        }
    }

    /// Last populated column of row `i`, clipped to the table edge.
    #[inline]
    pub fn col_hi(&self, i: usize, cols: usize) -> usize {
        match self {
            Band::Full => cols,
            Band::Banded { half_width } => cols.min(i + half_width),
        }
    }

    /// Whether `(i, j)` is a populated cell of a `(rows+1) x (cols+1)`
    /// table under this configuration.
    #[inline]
    pub fn contains(&self, i: usize, j: usize, rows: usize, cols: usize) -> bool {
        i <= rows && j <= cols && j >= self.col_lo(i) && j <= self.col_hi(i, cols)
    }
}
