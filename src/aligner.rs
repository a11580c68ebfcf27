//! Table fill, traceback, and the public alignment contract.
//!
//! Both modes share one recurrence. The only banded-specific rule is that
//! a candidate operation is legal iff its predecessor cell is populated,
//! which the corridor membership test decides per cell. That single rule
//! subsumes every boundary case: at the lower corridor edge the insert
//! predecessor falls outside the corridor, at the upper edge the delete
//! predecessor does, and near the last columns the clipped window keeps
//! all predecessors inside the table.

use crate::band::Band;
use crate::costs::{pair_cost, GAP, INDEL};
use crate::error::AlignError;
use crate::table::{Cell, Op, Table};
use crate::utils::preview;

/// Result of one alignment: the optimal score and both aligned strings,
/// truncated to the preview length, with `-` as the gap character.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Alignment {
    /// Minimum accumulated cost over the complete alignment path. May be
    /// negative, since matches are rewarded.
    pub score: i32,
    /// Preview of `seq1` with gaps inserted.
    pub seq1_aligned: String,
    /// Preview of `seq2` with gaps inserted.
    pub seq2_aligned: String,
}

/// A validated alignment configuration.
///
/// Construction checks the configuration once; [`Aligner::align`] may then
/// be called repeatedly. Each call builds its own table, so one `Aligner`
/// can serve concurrent callers.
///
/// ```
/// use band_align::{Aligner, Band};
///
/// let aligner = Aligner::new(Band::Full, 1000).unwrap();
/// let result = aligner.align(b"ACGT", b"ACGT");
/// assert_eq!(result.score, -12);
/// ```
#[derive(Debug)]
pub struct Aligner {
    band: Band,
    align_length: usize,
}

impl Aligner {
    /// Create an aligner for the given corridor configuration and
    /// per-sequence length bound.
    pub fn new(band: Band, align_length: usize) -> Result<Self, AlignError> {
        if align_length == 0 {
            return Err(AlignError::InvalidAlignLength);
        }
        Ok(Self { band, align_length })
    }

    /// Corridor configuration.
    pub fn band(&self) -> Band {
        self.band
    }

    /// Per-sequence length bound.
    pub fn align_length(&self) -> usize {
        self.align_length
    }

    /// Align two sequences and reconstruct the optimal path.
    pub fn align(&self, seq1: &[u8], seq2: &[u8]) -> Alignment {
        let s1 = &seq1[..seq1.len().min(self.align_length)];
        let s2 = &seq2[..seq2.len().min(self.align_length)];

        // Banded fills keep the shorter sequence on rows so the corridor
        // stays centered despite length asymmetry.
        let swap = self.band.is_banded() && s1.len() > s2.len();
        let (rows_seq, cols_seq) = if swap { (s2, s1) } else { (s1, s2) };

        #[cfg(feature = "tracing")]
        let span = tracing::trace_span!(
            "align",
            rows = rows_seq.len(),
            cols = cols_seq.len(),
            banded = self.band.is_banded()
        );
        #[cfg(feature = "tracing")]
        let _enter = span.enter();

        let mut table = Table::new(rows_seq.len(), cols_seq.len(), self.band);
        fill(&mut table, rows_seq, cols_seq);
        let (score, rows_aligned, cols_aligned) = traceback(&table, rows_seq, cols_seq);

        let (a1, a2) = if swap {
            (cols_aligned, rows_aligned)
        } else {
            (rows_aligned, cols_aligned)
        };
        Alignment {
            score,
            seq1_aligned: preview(&a1),
            seq2_aligned: preview(&a2),
        }
    }
}

/// Align `seq1` against `seq2`.
///
/// `banded` selects the corridor mode with the default half-width;
/// `align_length` bounds how many characters of each sequence take part.
///
/// ```
/// use band_align::align;
///
/// let result = align(b"polynomial", b"exponential", false, 1000).unwrap();
/// assert_eq!(result.score, -1);
/// assert_eq!(result.seq1_aligned, "polynom-ial");
/// assert_eq!(result.seq2_aligned, "exponential");
/// ```
pub fn align(
    seq1: &[u8],
    seq2: &[u8],
    banded: bool,
    align_length: usize,
) -> Result<Alignment, AlignError> {
    let band = if banded { Band::banded() } else { Band::Full };
    Ok(Aligner::new(band, align_length)?.align(seq1, seq2))
}

/// Align many independent pairs across a rayon pool.
///
/// Alignments share no state beyond the read-only configuration, so pairs
/// are embarrassingly parallel.
#[cfg(feature = "parallel")]
pub fn align_batch(
    pairs: &[(&[u8], &[u8])],
    banded: bool,
    align_length: usize,
) -> Result<Vec<Alignment>, AlignError> {
    use rayon::prelude::*;

    let band = if banded { Band::banded() } else { Band::Full };
    let aligner = Aligner::new(band, align_length)?;
    Ok(pairs
        .par_iter()
        .map(|(s1, s2)| aligner.align(s1, s2))
        .collect())
}

/// Fill every populated interior cell in row-major order, which respects
/// the `(i-1, j)`, `(i, j-1)`, `(i-1, j-1)` dependencies.
fn fill(table: &mut Table, rows_seq: &[u8], cols_seq: &[u8]) {
    let cols = table.cols();
    for i in 1..=table.rows() {
        let ch = rows_seq[i - 1];
        let lo = table.band().col_lo(i).max(1);
        let hi = table.band().col_hi(i, cols);
        for j in lo..=hi {
            let cell = compute_cell(table, i, j, ch, cols_seq[j - 1]);
            table.set(i, j, cell);
        }
    }
}

/// Choose the cheapest legal operation for interior cell `(i, j)`.
///
/// On a character match the diagonal step is taken outright: adjacent
/// cells differ by at most `INDEL`, so `diag + MATCH` is always a minimum.
/// Otherwise ties between equal-cost candidates resolve by the fixed
/// precedence delete, insert, substitute; the scan below runs in reverse
/// precedence and lets a candidate displace the incumbent on `<=`, which
/// leaves the highest-precedence minimum in place. A candidate is legal
/// iff its predecessor cell is populated; the diagonal predecessor of a
/// populated interior cell always is.
fn compute_cell(table: &Table, i: usize, j: usize, row_ch: u8, col_ch: u8) -> Cell {
    let diag = table.get(i - 1, j - 1).value;
    let mut best = Cell {
        value: diag + pair_cost(row_ch, col_ch),
        op: Op::MatchSub,
    };
    if row_ch == col_ch {
        return best;
    }

    if table.contains(i, j - 1) {
        let value = table.get(i, j - 1).value + INDEL;
        if value <= best.value {
            best = Cell {
                value,
                op: Op::Insert,
            };
        }
    }
    if table.contains(i - 1, j) {
        let value = table.get(i - 1, j).value + INDEL;
        if value <= best.value {
            best = Cell {
                value,
                op: Op::Delete,
            };
        }
    }
    best
}

/// Walk back from the terminal cell to the origin, reconstructing both
/// aligned sequences. Predecessor indices are recomputed from the stored
/// operation tags; no back-pointers exist.
fn traceback(table: &Table, rows_seq: &[u8], cols_seq: &[u8]) -> (i32, Vec<u8>, Vec<u8>) {
    let (mut i, mut j) = table.terminal();
    let score = table.get(i, j).value;

    let mut rows_aligned = Vec::with_capacity(i + j);
    let mut cols_aligned = Vec::with_capacity(i + j);
    while i > 0 || j > 0 {
        match table.get(i, j).op {
            Op::MatchSub => {
                rows_aligned.push(rows_seq[i - 1]);
                cols_aligned.push(cols_seq[j - 1]);
                i -= 1;
                j -= 1;
            }
            Op::Delete => {
                rows_aligned.push(rows_seq[i - 1]);
                cols_aligned.push(GAP);
                i -= 1;
            }
            Op::Insert => {
                rows_aligned.push(GAP);
                cols_aligned.push(cols_seq[j - 1]);
                j -= 1;
            }
            Op::Unset => unreachable!("traceback reached an unfilled cell at ({i},{j})"),
        }
    }
    rows_aligned.reverse();
    cols_aligned.reverse();
    (score, rows_aligned, cols_aligned)
}
