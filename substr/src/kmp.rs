// Copyright 2026 Logan Magee
//
// SPDX-License-Identifier: LicenseRef-Proprietary

//! Knuth-Morris-Pratt substring search.
//!
//! A failure table built from the pattern alone records, for every pattern
//! prefix, the length of its longest proper prefix that is also a suffix. On
//! a mismatch the pattern cursor falls back through the table instead of
//! re-examining text bytes already known to match.

/// Returns the index of the leftmost occurrence of `pattern` in `text`, or
/// [`None`] if `pattern` does not occur.
///
/// An empty pattern matches at index 0. A pattern longer than the text is
/// never found.
///
/// This operation is *O*(*n* + *m*).
///
/// # Examples
///
/// ```
/// assert_eq!(substr::kmp::find(b"hello world", b"world"), Some(6));
/// assert_eq!(substr::kmp::find(b"hello world", b"xyz"), None);
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

    let lps = failure_table(pattern);

    let mut i = 0;
    let mut j = 0;
    while i < n {
        if text[i] == pattern[j] {
            i += 1;
            j += 1;
            if j == m {
                return Some(i - j);
            }
        } else if j != 0 {
            // Fall back without advancing the text cursor
            j = lps[j - 1];
        } else {
            i += 1;
        }
    }

    None
}

/// Builds the failure table for `pattern`: `lps[i]` is the length of the
/// longest proper prefix of the pattern that is also a suffix of
/// `pattern[..=i]`.
///
/// The fallback step `prefix_len = lps[prefix_len - 1]` does not advance `i`;
/// `prefix_len` strictly decreases along each fallback chain, bounded by the
/// prior progress of `i`, which keeps construction linear.
fn failure_table(pattern: &[u8]) -> Vec<usize> {
    let m = pattern.len();
    let mut lps = vec![0; m];

    let mut prefix_len = 0;
    let mut i = 1;
    while i < m {
        if pattern[i] == pattern[prefix_len] {
            prefix_len += 1;
            lps[i] = prefix_len;
            i += 1;
        } else if prefix_len != 0 {
            prefix_len = lps[prefix_len - 1];
        } else {
            lps[i] = 0;
            i += 1;
        }
    }

    lps
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
    fn fallback_resumes_from_matched_prefix() {
        // Matching "abab" and then failing on the final byte must resume
        // from the two-byte prefix, not from scratch.
        assert_eq!(find(b"ababcababd", b"ababd"), Some(5));
    }

    #[test]
    fn finds_self_similar_pattern_in_periodic_text() {
        assert_eq!(find(b"aabaabaaab", b"aabaaab"), Some(3));
    }

    #[test]
    fn failure_table_of_distinct_bytes_is_all_zero() {
        assert_eq!(failure_table(b"abcdef"), vec![0; 6]);
    }

    #[test]
    fn failure_table_records_prefix_suffix_lengths() {
        assert_eq!(failure_table(b"aabaaac"), vec![0, 1, 0, 1, 2, 2, 0]);
        assert_eq!(failure_table(b"abcaby"), vec![0, 0, 0, 1, 2, 0]);
    }

    #[test]
    fn failure_table_of_repeated_byte_counts_up() {
        assert_eq!(failure_table(b"zzzz"), vec![0, 1, 2, 3]);
    }
}
