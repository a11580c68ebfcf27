//! Scoring constants and the pairwise character cost.
//!
//! The model is fixed rather than configurable per call: a negative match
//! reward, a small substitution penalty, and a larger insertion/deletion
//! penalty. Because `MATCH` is negative, longer exact matches strictly
//! lower the total, so the *minimum* accumulated cost is optimal.

/// Reward for aligning two identical characters.
pub const MATCH: i32 = -3;

/// Penalty for aligning two distinct characters.
pub const SUB: i32 = 1;

/// Penalty for an insertion or a deletion.
pub const INDEL: i32 = 5;

/// Gap character used in reconstructed alignment strings.
pub const GAP: u8 = b'-';

/// Cost of aligning `a` against `b` on the diagonal.
#[inline]
pub fn pair_cost(a: u8, b: u8) -> i32 {
    if a == b {
        MATCH
    } else {
        SUB
    }
}
