// Copyright 2026 Logan Magee
//
// SPDX-License-Identifier: LicenseRef-Proprietary

//! Exact substring search for byte strings.
//!
//! This crate provides three independent implementations of first-occurrence
//! substring search, each exposing the same contract:
//!
//! - [`boyer_moore::find`] — right-to-left window comparison with
//!   bad-character shifts
//! - [`kmp::find`] — Knuth-Morris-Pratt failure-table scan
//! - [`rabin_karp::find`] — rolling-hash candidate filtering with mandatory
//!   verification
//!
//! All three locate the leftmost occurrence of `pattern` in `text` and return
//! its start index, or [`None`] when the pattern does not occur. They agree on
//! every edge case so their results are directly comparable:
//!
//! - an empty pattern matches at index 0
//! - a pattern longer than the text is never found
//!
//! # Examples
//!
//! ```
//! let text = b"abxabcabcaby";
//! let pattern = b"abcaby";
//!
//! assert_eq!(substr::boyer_moore::find(text, pattern), Some(6));
//! assert_eq!(substr::kmp::find(text, pattern), Some(6));
//! assert_eq!(substr::rabin_karp::find(text, pattern), Some(6));
//! ```

pub mod boyer_moore;
pub mod kmp;
pub mod rabin_karp;

pub use rabin_karp::HashConfig;
