//! Assorted small helpers.

use std::borrow::Cow;

/// Maximum number of characters kept in each returned alignment string.
pub const PREVIEW_LEN: usize = 100;

/// Convert a reconstructed alignment to its bounded preview string.
///
/// Truncation happens after full reconstruction, so scores are always
/// computed over the complete path even when the preview is shorter.
pub fn preview(aligned: &[u8]) -> String {
    let cut = aligned.len().min(PREVIEW_LEN);
    match String::from_utf8_lossy(&aligned[..cut]) {
        Cow::Borrowed(s) => s.to_owned(),
        Cow::Owned(s) => s,
    }
}

#[cfg(test)]
mod tests {
    use super::{preview, PREVIEW_LEN};

    #[test]
    fn short_input_is_unchanged() {
        assert_eq!(preview(b"AC-GT"), "AC-GT");
        assert_eq!(preview(b""), "");
    }

    #[test]
    fn long_input_is_truncated() {
        let long = vec![b'A'; PREVIEW_LEN + 50];
        let p = preview(&long);
        assert_eq!(p.len(), PREVIEW_LEN);
        assert!(p.bytes().all(|b| b == b'A'));
    }

    #[test]
    fn boundary_length_is_kept_whole() {
        let exact = vec![b'G'; PREVIEW_LEN];
        assert_eq!(preview(&exact).len(), PREVIEW_LEN);
    }
}
