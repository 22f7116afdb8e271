// Copyright 2026 Logan Magee
//
// SPDX-License-Identifier: LicenseRef-Proprietary

use std::{
    fmt::{self, Display, Formatter},
    time::Duration,
};

/// A substring search algorithm the harness can time.
///
/// Each variant dispatches to the matching searcher in [`substr`].
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize), serde(rename_all = "kebab-case"))]
pub enum Algorithm {
    /// Bad character rule matcher
    BoyerMoore,
    /// Failure table matcher
    Kmp,
    /// Rolling hash matcher
    RabinKarp,
}

impl Algorithm {
    /// Every algorithm the harness times, in report order.
    pub const ALL: [Self; 3] = [Self::BoyerMoore, Self::Kmp, Self::RabinKarp];

    /// Returns the name this algorithm goes by in report output.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Algorithm::BoyerMoore => "boyer-moore",
            Algorithm::Kmp => "kmp",
            Algorithm::RabinKarp => "rabin-karp",
        }
    }

    /// Searches `text` for `pattern` with this algorithm's searcher.
    ///
    /// Returns the index of the leftmost occurrence of `pattern`, or [`None`] if `text` does not
    /// contain it. Every variant returns the same index for the same inputs; they differ only in
    /// how long they take to find it.
    #[must_use]
    pub fn find(self, text: &[u8], pattern: &[u8]) -> Option<usize> {
        match self {
            Algorithm::BoyerMoore => substr::boyer_moore::find(text, pattern),
            Algorithm::Kmp => substr::kmp::find(text, pattern),
            Algorithm::RabinKarp => substr::rabin_karp::find(text, pattern),
        }
    }
}

impl Display for Algorithm {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Aggregate timing for one pattern searched with one algorithm.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Sample {
    /// The index the search returned, or [`None`] if the pattern was not found.
    pub found: Option<usize>,
    /// Wall time summed over every timed repeat.
    pub total: Duration,
    /// Wall time per repeat.
    pub mean: Duration,
}

/// Measurements for a single algorithm over both benchmark patterns.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct AlgorithmTiming {
    /// The algorithm that was timed
    pub algorithm: Algorithm,
    /// Timing for the pattern expected to occur in the corpus
    pub present: Sample,
    /// Timing for the pattern expected not to occur in the corpus
    pub absent: Sample,
}

/// The results of one benchmark run over a corpus.
///
/// A report holds one [`AlgorithmTiming`] per algorithm, in [`Algorithm::ALL`] order. Its
/// [`Display`] implementation renders a small table; with the `serde` feature enabled the whole
/// report can also be serialized, e.g. to JSON.
#[derive(Clone, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Report {
    /// Length of the corpus in bytes
    pub corpus_len: usize,
    /// Number of timed repeats behind each measurement
    pub repeats: u32,
    /// Per-algorithm measurements
    pub timings: Vec<AlgorithmTiming>,
}

impl Display for Report {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        writeln!(
            f,
            "corpus: {} bytes, {} timed repeat(s) per pattern",
            self.corpus_len, self.repeats,
        )?;
        write!(
            f,
            "{:<12} {:>8} {:>14} {:>14}",
            "algorithm", "found", "present mean", "absent mean",
        )?;

        for timing in &self.timings {
            let found = match timing.present.found {
                Some(index) => index.to_string(),
                None => "-".to_string(),
            };

            write!(
                f,
                "\n{:<12} {:>8} {:>14?} {:>14?}",
                timing.algorithm.name(),
                found,
                timing.present.mean,
                timing.absent.mean,
            )?;
        }

        Ok(())
    }
}
