// Copyright 2026 Logan Magee
//
// SPDX-License-Identifier: LicenseRef-Proprietary

//! Benchmarking harness for exact substring search algorithms.
//!
//! This crate times the three searchers in [`substr`] against the same corpus, searching once for
//! a pattern known to occur in it and once for a pattern known not to, and collects the
//! measurements into a single [`Report`]. Comparing the two columns shows how each algorithm
//! degrades when it has to scan the whole corpus without finding anything.
//!
//! # Examples
//!
//! Measuring an in-memory corpus:
//!
//! ```
//! use findbench::BenchConfig;
//!
//! # fn main() -> Result<(), findbench::BenchError> {
//! let corpus = b"the quick brown fox jumps over the lazy dog";
//!
//! let report = findbench::measure(corpus, b"lazy", b"unicorn", &BenchConfig::new())?;
//!
//! assert_eq!(report.timings.len(), 3);
//! # Ok(())
//! # }
//! ```
//!
//! Benchmarking a corpus file with tuned repeat counts:
//!
//! ```no_run
//! use findbench::BenchConfig;
//!
//! # fn main() -> Result<(), findbench::BenchError> {
//! let report = findbench::run_with_config(
//!     "corpus.txt",
//!     b"needle",
//!     b"missing",
//!     BenchConfig::new().repeats(100).warmup(3),
//! )?;
//!
//! println!("{report}");
//! # Ok(())
//! # }
//! ```

mod report;
mod run;

pub use report::{Algorithm, AlgorithmTiming, Report, Sample};
pub use run::{measure, run, run_with_config, BenchConfig, BenchError};
