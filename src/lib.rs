//! Full and banded pairwise sequence alignment.
//!
//! This crate aligns two byte sequences with edit-distance-style dynamic
//! programming and reconstructs the optimal alignment by traceback.
//!
//! ## Core idea
//! 1. Build a `(rows+1) x (cols+1)` table of costs, either the full
//!    rectangle or a diagonal corridor of fixed half-width ([`Band`]).
//! 2. Fill cells with a three-way recurrence (match/substitute, insert,
//!    delete) with fixed penalties; each cell records the operation that
//!    produced its minimum.
//! 3. Walk back from the terminal cell, rebuilding both aligned strings.
//!
//! The full fill costs O(n·m) time and space; the banded fill costs
//! O(n·k) for corridor width k = 2d+1, at the price of only considering
//! near-diagonal alignments.
//!
//! ## Quick start
//! ```
//! use band_align::align;
//!
//! let result = align(b"polynomial", b"exponential", true, 1000).unwrap();
//! assert_eq!(result.score, -1);
//! assert_eq!(result.seq1_aligned, "polynom-ial");
//! ```
//!
//! Scores are minimized: a match is rewarded with a negative cost, so more
//! similar sequences score lower.

pub mod aligner;
pub mod band;
pub mod costs;
pub mod error;
pub mod table;
pub mod utils;

#[cfg(feature = "parallel")]
pub use crate::aligner::align_batch;
pub use crate::aligner::{align, Aligner, Alignment};
pub use crate::band::Band;
pub use crate::error::AlignError;
pub use crate::utils::PREVIEW_LEN;
