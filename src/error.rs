//! Configuration errors reported by the public entry points.

use thiserror::Error;

/// Errors from invalid alignment configuration.
///
/// The algorithm itself is total for any pair of sequences; only the
/// configuration can be rejected.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AlignError {
    /// The per-sequence length bound must be positive.
    #[error("align_length must be positive")]
    InvalidAlignLength,
}
