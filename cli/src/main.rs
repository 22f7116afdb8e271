// Copyright 2026 Logan Magee
//
// SPDX-License-Identifier: LicenseRef-Proprietary

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use findbench::BenchConfig;

#[derive(Parser)]
struct Args {
    /// Corpus files to benchmark
    #[arg(required = true)]
    corpora: Vec<PathBuf>,

    /// A pattern expected to occur in each corpus
    #[arg(long)]
    present: String,

    /// A pattern expected not to occur in any corpus
    #[arg(long)]
    absent: String,

    /// Number of timed repeats per pattern
    #[arg(long, default_value_t = BenchConfig::DEFAULT_REPEATS)]
    repeats: u32,

    /// Number of untimed warmup searches per pattern
    #[arg(long, default_value_t = BenchConfig::DEFAULT_WARMUP)]
    warmup: u32,

    /// Print each report as JSON instead of a table
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let mut config = BenchConfig::new();
    config.repeats(args.repeats).warmup(args.warmup);

    for corpus in &args.corpora {
        let report = findbench::run_with_config(
            corpus,
            args.present.as_bytes(),
            args.absent.as_bytes(),
            &config,
        )
        .with_context(|| format!("Failed to benchmark corpus '{}'", corpus.display()))?;

        if args.json {
            let entry = serde_json::json!({
                "corpus": corpus.display().to_string(),
                "report": report,
            });
            println!("{}", serde_json::to_string_pretty(&entry)?);
        } else {
            println!("{}:", corpus.display());
            println!("{report}");
            println!();
        }
    }

    Ok(())
}
