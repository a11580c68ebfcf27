//! Corridor boundary behavior: clipped terminals, orientation, and the
//! edges of the populated region.

use band_align::{align, Aligner, Band};

#[test]
fn length_gap_beyond_the_corridor_uses_the_clipped_terminal() {
    // Lengths differ by 16, far more than 2d+1 = 7: the bottom-right
    // corner is outside the corridor, so the terminal is (4, 4 + d) and
    // only seven columns of the longer sequence are consumed.
    let long = vec![b'C'; 20];
    let result = align(b"AAAA", &long, true, 1000).unwrap();
    // Four substitutions plus three inserts.
    assert_eq!(result.score, 19);
    assert_eq!(result.seq1_aligned.len(), 7);
    assert_eq!(result.seq2_aligned, "CCCCCCC");
}

#[test]
fn longer_first_argument_keeps_its_role() {
    // The banded fill orients the shorter sequence along rows internally;
    // the returned strings must still match the argument order.
    let long = vec![b'C'; 20];
    let swapped = align(&long, b"AAAA", true, 1000).unwrap();
    assert_eq!(swapped.score, 19);
    assert_eq!(swapped.seq1_aligned, "CCCCCCC");
    assert_eq!(swapped.seq2_aligned.len(), 7);
    assert_eq!(swapped.seq2_aligned.matches('-').count(), 3);
}

#[test]
fn single_char_against_long_sequence() {
    let long = vec![b'G'; 50];
    let result = align(b"G", &long, true, 1000).unwrap();
    // Terminal is (1, 1 + d): one match plus d inserts. The stored
    // operations make the match consume the final corridor cell, so the
    // gap run comes first.
    assert_eq!(result.score, -3 + 3 * 5);
    assert_eq!(result.seq1_aligned, "---G");
}

#[test]
fn empty_sequence_in_banded_mode_stays_in_corridor() {
    let result = align(b"", b"ACGTACGT", true, 1000).unwrap();
    // Row zero only reaches column d.
    assert_eq!(result.score, 15);
    assert_eq!(result.seq1_aligned, "---");
    assert_eq!(result.seq2_aligned, "ACG");
}

#[test]
fn zero_half_width_follows_the_diagonal_only() {
    let aligner = Aligner::new(Band::Banded { half_width: 0 }, 100).unwrap();
    let result = aligner.align(b"ACGT", b"AGGT");
    // Three matches and one substitution, no gaps possible.
    assert_eq!(result.score, -8);
    assert_eq!(result.seq1_aligned, "ACGT");
    assert_eq!(result.seq2_aligned, "AGGT");
}

#[test]
fn corridor_exactly_reaches_the_corner() {
    // cols - rows == d: the corner is the last corridor cell of the final
    // row, so the clipped terminal and the corner coincide.
    let result = align(b"AAAA", b"AAAAAAA", true, 1000).unwrap();
    assert_eq!(result.score, 4 * -3 + 3 * 5);
    assert_eq!(result.seq1_aligned, "---AAAA");
    assert_eq!(result.seq2_aligned, "AAAAAAA");
}

#[test]
fn wide_band_degenerates_to_the_full_fill() {
    let aligner = Aligner::new(Band::Banded { half_width: 64 }, 100).unwrap();
    let banded = aligner.align(b"GATTACA", b"GCATGCU");
    let full = align(b"GATTACA", b"GCATGCU", false, 100).unwrap();
    assert_eq!(banded.score, full.score);
    assert_eq!(banded.seq1_aligned, full.seq1_aligned);
    assert_eq!(banded.seq2_aligned, full.seq2_aligned);
}
