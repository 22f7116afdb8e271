// Copyright 2026 Logan Magee
//
// SPDX-License-Identifier: LicenseRef-Proprietary

//! Bad-character-rule substring search.
//!
//! A simplified Boyer-Moore: each window is compared right to left, and on a
//! mismatch the window advances by the precomputed shift of the text byte
//! that failed to match. The good-suffix rule is omitted.

use std::cmp;

/// The number of distinct byte values a shift table entry can be indexed by
const ALPHABET_SIZE: usize = 256;

/// Returns the index of the leftmost occurrence of `pattern` in `text`, or
/// [`None`] if `pattern` does not occur.
///
/// An empty pattern matches at index 0. A pattern longer than the text is
/// never found.
///
/// This operation is *O*(*n* · *m*) in the worst case, but mismatching
/// windows are typically skipped in sub-linear time.
///
/// # Examples
///
/// ```
/// assert_eq!(substr::boyer_moore::find(b"hello world", b"world"), Some(6));
/// assert_eq!(substr::boyer_moore::find(b"hello world", b"xyz"), None);
/// ```
#[must_use]
pub fn find(text: &[u8], pattern: &[u8]) -> Option<usize> {
    let n = text.len();
    let m = pattern.len();

    if m == 0 {
        return Some(0);
    }
    if m > n {
        return None;
    }

    let table = shift_table(pattern);

    let mut index = 0;
    while index <= n - m {
        // Compare the window right to left
        let mut j = m - 1;
        while text[index + j] == pattern[j] {
            if j == 0 {
                return Some(index);
            }
            j -= 1;
        }

        // The raw shift can be zero or negative once part of the window has
        // already matched, so the advance is clamped to at least one position.
        let shift = table[text[index + j] as usize];
        index += cmp::max(1, shift.saturating_sub(m - 1 - j));
    }

    None
}

/// Builds the bad-character shift table for `pattern`.
///
/// Each entry holds the distance from the rightmost occurrence of that byte
/// to the end of the pattern; bytes absent from the pattern shift by the full
/// pattern length. The final pattern byte is excluded from the table — no
/// mismatch is ever looked up for it, and including it would produce zero
/// shifts.
fn shift_table(pattern: &[u8]) -> [usize; ALPHABET_SIZE] {
    let m = pattern.len();
    let mut table = [m; ALPHABET_SIZE];

    for (i, &byte) in pattern.iter().take(m - 1).enumerate() {
        table[byte as usize] = m - 1 - i;
    }

    table
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_leftmost_occurrence() {
        assert_eq!(find(b"abxabcabcaby", b"abcaby"), Some(6));
    }

    #[test]
    fn finds_leftmost_of_overlapping_repeats() {
        assert_eq!(find(b"aaaaa", b"aaa"), Some(0));
    }

    #[test]
    fn missing_pattern_is_not_found() {
        assert_eq!(find(b"hello world", b"xyz"), None);
    }

    #[test]
    fn empty_pattern_matches_at_zero() {
        assert_eq!(find(b"abc", b""), Some(0));
        assert_eq!(find(b"", b""), Some(0));
    }

    #[test]
    fn pattern_longer_than_text_is_not_found() {
        assert_eq!(find(b"", b"a"), None);
        assert_eq!(find(b"ab", b"abc"), None);
    }

    #[test]
    fn finds_match_at_end_of_text() {
        assert_eq!(find(b"abcdef", b"def"), Some(3));
    }

    #[test]
    fn finds_pattern_equal_to_text() {
        assert_eq!(find(b"needle", b"needle"), Some(0));
    }

    #[test]
    fn mismatch_behind_matched_suffix_still_advances() {
        // The mismatching byte 'a' carries a shift of 1 while two suffix
        // bytes have already matched, so the unclamped advance would be
        // negative.
        assert_eq!(find(b"aaabaa", b"baa"), Some(3));
    }

    #[test]
    fn absent_byte_shifts_past_the_window() {
        assert_eq!(find(b"zzzzzzabc", b"abc"), Some(6));
    }

    #[test]
    fn shift_table_excludes_last_pattern_byte() {
        let table = shift_table(b"abcab");

        assert_eq!(table[b'a' as usize], 1, "rightmost non-final 'a' is at index 3");
        assert_eq!(table[b'b' as usize], 3, "the final 'b' must not overwrite the index 1 entry");
        assert_eq!(table[b'c' as usize], 2, "'c' occurs at index 2");
        assert_eq!(table[b'z' as usize], 5, "absent bytes shift by the pattern length");
    }
}
