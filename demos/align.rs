//! Example: align two words in full and banded mode.
//!
//! Run with:
//! `cargo run --example align`

use band_align::align;

fn main() {
    let seq1 = b"polynomial";
    let seq2 = b"exponential";

    for (label, banded) in [("full", false), ("banded", true)] {
        let result = align(seq1, seq2, banded, 1000).expect("positive bound");
        println!("{label} alignment score: {}", result.score);
        println!("  seq1: {}", result.seq1_aligned);
        println!("  seq2: {}", result.seq2_aligned);
    }
}
