// Copyright 2026 Logan Magee
//
// SPDX-License-Identifier: LicenseRef-Proprietary

//! Rabin-Karp substring search.
//!
//! A rolling polynomial hash of the current text window is compared against
//! the pattern hash, and windows whose hashes collide are verified byte by
//! byte. Equal hashes are only ever a candidate: under modular reduction
//! distinct windows can share a hash, so the verification step is part of the
//! contract rather than an optimization.

/// Returns the index of the leftmost occurrence of `pattern` in `text`, or
/// [`None`] if `pattern` does not occur.
///
/// Hashing uses the default [`HashConfig`]. An empty pattern matches at
/// index 0. A pattern longer than the text is never found.
///
/// This operation is *O*(*n* + *m*) expected time.
///
/// # Examples
///
/// ```
/// assert_eq!(substr::rabin_karp::find(b"hello world", b"world"), Some(6));
/// assert_eq!(substr::rabin_karp::find(b"hello world", b"xyz"), None);
/// ```
#[must_use]
pub fn find(text: &[u8], pattern: &[u8]) -> Option<usize> {
    find_with_config(text, pattern, &HashConfig::new())
}

/// Returns the index of the leftmost occurrence of `pattern` in `text` using
/// a caller-supplied hash configuration, or [`None`] if `pattern` does not
/// occur.
///
/// The hash parameters influence only how many windows are verified byte by
/// byte; every configuration returns the same result for the same inputs.
///
/// # Panics
///
/// Panics if `config` carries a modulus of zero.
///
/// # Examples
///
/// ```
/// use substr::HashConfig;
///
/// let found = substr::rabin_karp::find_with_config(
///     b"hello world",
///     b"world",
///     HashConfig::new().modulus(1_000_000_007),
/// );
///
/// assert_eq!(found, Some(6));
/// ```
#[must_use]
pub fn find_with_config(text: &[u8], pattern: &[u8], config: &HashConfig) -> Option<usize> {
    assert_ne!(config.modulus, 0, "hash modulus must be nonzero");

    let n = text.len();
    let m = pattern.len();

    if m == 0 {
        return Some(0);
    }
    if m > n {
        return None;
    }

    // Widen once so no u32 base/modulus combination can overflow below
    let base = u64::from(config.base);
    let modulus = u64::from(config.modulus);

    // base^(m-1) mod modulus, the weight of a window's leading byte
    let mut weight = 1;
    for _ in 0..m - 1 {
        weight = (weight * base) % modulus;
    }

    // Horner's rule over the pattern and the first text window
    let mut pattern_hash = 0;
    let mut window_hash = 0;
    for i in 0..m {
        pattern_hash = (base * pattern_hash + u64::from(pattern[i])) % modulus;
        window_hash = (base * window_hash + u64::from(text[i])) % modulus;
    }

    for i in 0..=n - m {
        // A hash match is only a candidate until the bytes agree
        if pattern_hash == window_hash && &text[i..i + m] == pattern {
            return Some(i);
        }

        if i < n - m {
            // Drop the leading byte, then append the next one. Adding the
            // modulus before reducing keeps the subtraction from wrapping
            // below zero.
            window_hash =
                (window_hash + modulus - u64::from(text[i]) * weight % modulus) % modulus;
            window_hash = (window_hash * base + u64::from(text[i + m])) % modulus;
        }
    }

    None
}

/// Configuration for the rolling hash.
///
/// The defaults mirror the classic textbook parameters: base 256 so that
/// every byte value is its own digit, and the small prime modulus 101. A
/// small modulus makes hash collisions routine, which keeps the verification
/// path exercised; callers searching large corpora should pick a large prime
/// modulus to cut down on candidate checks.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub struct HashConfig {
    base: u32,
    modulus: u32,
}

impl HashConfig {
    /// Creates a new rolling-hash configuration with the default base and
    /// modulus.
    ///
    /// This configuration can be reused across searches.
    pub const fn new() -> Self {
        Self {
            base: Self::DEFAULT_BASE,
            modulus: Self::DEFAULT_MODULUS,
        }
    }

    /// Sets the base, i.e., the radix window bytes are interpreted in.
    pub fn base(&mut self, base: u32) -> &mut Self {
        self.base = base;
        self
    }

    /// Sets the modulus all hash arithmetic is reduced by.
    ///
    /// The modulus should be prime; a composite modulus merely produces more
    /// collisions and therefore more verification work. A modulus of zero is
    /// rejected at search time.
    pub fn modulus(&mut self, modulus: u32) -> &mut Self {
        self.modulus = modulus;
        self
    }

    /// The default hash base, treating each byte as one digit
    pub const DEFAULT_BASE: u32 = 256;

    /// The default hash modulus, a deliberately small prime
    pub const DEFAULT_MODULUS: u32 = 101;
}

impl Default for HashConfig {
    fn default() -> Self {
        Self::new()
    }
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
    fn colliding_window_is_rejected_unless_bytes_match() {
        // Under the default base 256 and modulus 101 (256 ≡ 54), the window
        // "aW" (54 * 97 + 87 = 5325 ≡ 73) collides with the pattern "cP"
        // (54 * 99 + 80 = 5426 ≡ 73). The collision at index 0 must be
        // rejected in favor of the real match at index 4.
        assert_eq!(find(b"aWxycP", b"cP"), Some(4));
    }

    #[test]
    fn degenerate_modulus_collides_on_every_window() {
        // A modulus of one hashes every window to zero, so each window is a
        // candidate and correctness rests entirely on verification.
        let mut config = HashConfig::new();
        config.modulus(1);

        assert_eq!(find_with_config(b"hello world", b"world", &config), Some(6));
        assert_eq!(find_with_config(b"hello world", b"xyz", &config), None);
    }

    #[test]
    fn large_prime_modulus_finds_the_same_index() {
        let found = find_with_config(
            b"abxabcabcaby",
            b"abcaby",
            HashConfig::new().base(31).modulus(1_000_000_007),
        );

        assert_eq!(found, Some(6));
    }

    #[test]
    #[should_panic]
    fn zero_modulus_panics() {
        let mut config = HashConfig::new();
        config.modulus(0);

        let _ = find_with_config(b"abc", b"b", &config);
    }

    #[test]
    fn default_config_matches_new() {
        assert_eq!(HashConfig::default(), HashConfig::new());
        assert_eq!(HashConfig::DEFAULT_BASE, 256);
        assert_eq!(HashConfig::DEFAULT_MODULUS, 101);
    }
}
