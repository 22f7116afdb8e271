// Copyright 2026 Logan Magee
//
// SPDX-License-Identifier: LicenseRef-Proprietary

use std::{
    error::Error,
    fmt::{self, Display, Formatter},
    fs, hint, io,
    path::Path,
    time::Instant,
};

use crate::report::{Algorithm, AlgorithmTiming, Report, Sample};

/// An error indicating that a benchmark run failed.
///
/// # Examples
///
/// ```
/// use findbench::{BenchConfig, BenchError};
///
/// let result = findbench::measure(b"corpus", b"corp", b"zzz", BenchConfig::new().repeats(0));
///
/// assert!(matches!(result, Err(BenchError::ZeroRepeats)));
/// ```
#[derive(Debug)]
pub enum BenchError {
    /// An I/O error occurred
    Io(io::Error),
    /// The configured repeat count was zero
    ZeroRepeats,
}

impl Display for BenchError {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            BenchError::Io(e) => write!(f, "I/O error: {e}"),
            BenchError::ZeroRepeats => write!(f, "repeat count must be at least 1"),
        }
    }
}

impl Error for BenchError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            BenchError::Io(e) => e.source(),
            _ => None,
        }
    }
}

impl From<io::Error> for BenchError {
    fn from(value: io::Error) -> Self {
        BenchError::Io(value)
    }
}

/// Times every algorithm against a corpus file with default options
///
/// Reads the file at `corpus` and measures how long each algorithm in [`Algorithm::ALL`] takes to
/// search its contents for `present` (a pattern expected to occur) and for `absent` (a pattern
/// expected not to occur).
///
/// This function is a shorthand for [`run_with_config()`] called with the default options. If you
/// want to tune the repeat or warmup counts, see that function instead.
///
/// # Errors
///
/// Returns an error if reading the corpus file fails.
///
/// # Examples
///
/// ```no_run
/// # fn main() -> Result<(), findbench::BenchError> {
/// let report = findbench::run("corpus.txt", b"needle", b"missing")?;
///
/// println!("{report}");
/// # Ok(())
/// # }
/// ```
pub fn run<P>(corpus: P, present: &[u8], absent: &[u8]) -> Result<Report, BenchError>
where
    P: AsRef<Path>,
{
    run_with_config(corpus, present, absent, &BenchConfig::default())
}

/// Times every algorithm against a corpus file
///
/// Reads the file at `corpus` and measures how long each algorithm in [`Algorithm::ALL`] takes to
/// search its contents for `present` (a pattern expected to occur) and for `absent` (a pattern
/// expected not to occur).
///
/// # Errors
///
/// Returns an error if reading the corpus file fails or if `config` requests zero repeats.
///
/// # Examples
///
/// ```no_run
/// use findbench::BenchConfig;
///
/// # fn main() -> Result<(), findbench::BenchError> {
/// let report = findbench::run_with_config(
///     "corpus.txt",
///     b"needle",
///     b"missing",
///     BenchConfig::new().repeats(100).warmup(3),
/// )?;
///
/// println!("{report}");
/// # Ok(())
/// # }
/// ```
pub fn run_with_config<P>(
    corpus: P,
    present: &[u8],
    absent: &[u8],
    config: &BenchConfig,
) -> Result<Report, BenchError>
where
    P: AsRef<Path>,
{
    let text = fs::read(corpus)?;

    measure(&text, present, absent, config)
}

/// Times every algorithm against an in-memory corpus
///
/// Measures how long each algorithm in [`Algorithm::ALL`] takes to search `text` for `present` (a
/// pattern expected to occur) and for `absent` (a pattern expected not to occur). The returned
/// report holds one row per algorithm with both measurements and the index each search returned.
///
/// Each measurement is the wall time of the configured number of repeats of the same search,
/// taken after the configured number of untimed warmup searches.
///
/// # Errors
///
/// Returns an error if `config` requests zero repeats.
///
/// # Examples
///
/// ```
/// use findbench::BenchConfig;
///
/// # fn main() -> Result<(), findbench::BenchError> {
/// let corpus = b"the quick brown fox jumps over the lazy dog";
///
/// let report = findbench::measure(corpus, b"lazy", b"unicorn", &BenchConfig::new())?;
///
/// assert_eq!(report.timings.len(), 3);
/// assert_eq!(report.timings[0].present.found, Some(35));
/// assert_eq!(report.timings[0].absent.found, None);
/// # Ok(())
/// # }
/// ```
pub fn measure(
    text: &[u8],
    present: &[u8],
    absent: &[u8],
    config: &BenchConfig,
) -> Result<Report, BenchError> {
    if config.repeats == 0 {
        return Err(BenchError::ZeroRepeats);
    }

    let timings = Algorithm::ALL
        .iter()
        .map(|&algorithm| AlgorithmTiming {
            algorithm,
            present: time_search(algorithm, text, present, config),
            absent: time_search(algorithm, text, absent, config),
        })
        .collect();

    Ok(Report {
        corpus_len: text.len(),
        repeats: config.repeats,
        timings,
    })
}

// Callers must reject a zero repeat count before timing; the mean divides by it.
fn time_search(algorithm: Algorithm, text: &[u8], pattern: &[u8], config: &BenchConfig) -> Sample {
    for _ in 0..config.warmup {
        hint::black_box(algorithm.find(hint::black_box(text), hint::black_box(pattern)));
    }

    let mut found = None;

    let start = Instant::now();
    for _ in 0..config.repeats {
        found = hint::black_box(algorithm.find(hint::black_box(text), hint::black_box(pattern)));
    }
    let total = start.elapsed();

    Sample {
        found,
        total,
        mean: total / config.repeats,
    }
}

/// Configuration for a benchmark run.
///
/// This struct can be used to trade run time for measurement stability. The defaults give a quick
/// single-shot measurement; raise the counts when comparing algorithms on small corpora, where a
/// single search finishes too quickly to time reliably.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub struct BenchConfig {
    repeats: u32,
    warmup: u32,
}

impl BenchConfig {
    /// Creates a new configuration for benchmark runs
    ///
    /// This configuration can be reused across runs.
    pub const fn new() -> Self {
        Self {
            repeats: Self::DEFAULT_REPEATS,
            warmup: Self::DEFAULT_WARMUP,
        }
    }

    /// Sets the number of timed repeats per pattern.
    ///
    /// Each pattern is searched this many times and the total wall time is divided by it to
    /// produce the mean. Higher values smooth out scheduler noise at the cost of a longer run.
    ///
    /// A value of 0 is rejected by the harness because it would produce no measurements.
    pub fn repeats(&mut self, repeats: u32) -> &mut Self {
        self.repeats = repeats;
        self
    }

    /// Sets the number of untimed warmup searches per pattern.
    ///
    /// Warmup searches run before the timed repeats so that cache and page faults taken on first
    /// touch of the corpus do not land in the measurement.
    pub fn warmup(&mut self, warmup: u32) -> &mut Self {
        self.warmup = warmup;
        self
    }

    /// The default number of timed repeats
    ///
    /// We set this to 1 because searches over the corpus sizes the harness is meant for take long
    /// enough to time in a single pass.
    pub const DEFAULT_REPEATS: u32 = 1;

    /// The default number of warmup searches
    ///
    /// We set this to 0 because warmup mainly matters for corpora small enough to sit entirely in
    /// cache.
    pub const DEFAULT_WARMUP: u32 = 0;
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self::new()
    }
}
