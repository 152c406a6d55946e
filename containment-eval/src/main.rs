// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

//! Compare classic and multi-sketch FracMinHash containment estimates.
//!
//! Prints the true containment, the bias factor and the mean and deviation
//! from truth of both strategies, then an overlaid histogram of the two result
//! sequences. Log output goes to stderr and follows `RUST_LOG`.

use std::process::ExitCode;

use clap::CommandFactory;
use clap::Parser;
use clap::ValueEnum;
use clap::builder::RangedU64ValueParser;
use fracminhash::experiment::ExperimentConfig;
use fracminhash::experiment::SeedPolicy;
use fracminhash::experiment::run_experiment;
use fracminhash::histogram::render_overlay;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum MultisketchSeeds {
    /// Draw a fresh random seed for every inner sketch
    Fresh,
    /// Derive inner seeds from the trial seed shared with the classic strategy
    Derived,
}

impl From<MultisketchSeeds> for SeedPolicy {
    fn from(seeds: MultisketchSeeds) -> Self {
        match seeds {
            MultisketchSeeds::Fresh => SeedPolicy::Fresh,
            MultisketchSeeds::Derived => SeedPolicy::Derived,
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "containment-eval", version, about, long_about = None)]
struct Args {
    /// Size of set A
    #[arg(long, default_value_t = 10_000, value_parser = RangedU64ValueParser::<usize>::new().range(1..))]
    size1: usize,

    /// Size of set B before the common items are added
    #[arg(long, default_value_t = 10_000, value_parser = RangedU64ValueParser::<usize>::new())]
    size2: usize,

    /// Number of items of A forced into B
    #[arg(long, alias = "num_common", default_value_t = 1_000, value_parser = RangedU64ValueParser::<usize>::new())]
    num_common: usize,

    /// Number of trials per strategy
    #[arg(long, alias = "n_iter", default_value_t = 100, value_parser = RangedU64ValueParser::<usize>::new().range(1..))]
    n_iter: usize,

    /// Seed of the random generator
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Sampling fraction of the classic sketch, in (0, 1]
    #[arg(long, alias = "scale_factor", default_value_t = 0.01, value_parser = parse_scale_factor)]
    scale_factor: f64,

    /// Number of sketches averaged per multi-sketch trial
    #[arg(long, alias = "num_multisketches", default_value_t = 2, value_parser = RangedU64ValueParser::<usize>::new().range(1..))]
    num_multisketches: usize,

    /// How inner multi-sketch seeds are chosen
    #[arg(long, value_enum, default_value_t = MultisketchSeeds::Fresh)]
    multisketch_seeds: MultisketchSeeds,

    /// Number of histogram bins per series
    #[arg(long, default_value_t = 20, value_parser = RangedU64ValueParser::<usize>::new().range(1..))]
    bins: usize,

    /// Width of the longest histogram bar, in characters
    #[arg(long, default_value_t = 40)]
    width: usize,

    /// Do not print the histogram
    #[arg(long)]
    no_histogram: bool,

    /// Increase log verbosity (-v for info, -vv for debug); RUST_LOG takes precedence
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Args {
    fn experiment_config(&self) -> ExperimentConfig {
        ExperimentConfig {
            size1: self.size1,
            size2: self.size2,
            num_common: self.num_common,
            n_iter: self.n_iter,
            seed: self.seed,
            scale_factor: self.scale_factor,
            num_multisketches: self.num_multisketches,
            seed_policy: self.multisketch_seeds.into(),
        }
    }
}

fn parse_scale_factor(s: &str) -> Result<f64, String> {
    let value: f64 = s.parse().map_err(|e| format!("`{s}` is not a number: {e}"))?;
    if value > 0.0 && value <= 1.0 {
        Ok(value)
    } else {
        Err(format!("{value} is not in (0, 1]"))
    }
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(args.verbose);

    let config = args.experiment_config();
    if let Err(err) = config.validate() {
        Args::command()
            .error(clap::error::ErrorKind::ValueValidation, err)
            .exit();
    }

    info!(?config, "starting experiment");
    let mut rng = StdRng::seed_from_u64(config.seed);
    let report = match run_experiment(&config, &mut rng) {
        Ok(report) => report,
        Err(err) => {
            eprintln!("error: {err}");
            return ExitCode::FAILURE;
        }
    };

    print!("{report}");
    if !args.no_histogram {
        println!();
        print!(
            "{}",
            render_overlay(
                &[
                    ("classic", report.classic().estimates()),
                    ("multisketch", report.multisketch().estimates()),
                ],
                args.bins,
                args.width,
            )
        );
    }
    ExitCode::SUCCESS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_is_well_formed() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from(["containment-eval"]).unwrap();
        assert_eq!(args.experiment_config(), ExperimentConfig::default());
        assert_eq!(args.bins, 20);
        assert!(!args.no_histogram);
    }

    #[test]
    fn test_snake_case_aliases() {
        let args = Args::try_parse_from([
            "containment-eval",
            "--size1",
            "1000",
            "--num_common",
            "200",
            "--n_iter",
            "50",
            "--scale_factor",
            "0.05",
            "--num_multisketches",
            "3",
            "--seed",
            "1",
            "--multisketch-seeds",
            "derived",
        ])
        .unwrap();
        let config = args.experiment_config();
        assert_eq!(config.size1, 1_000);
        assert_eq!(config.num_common, 200);
        assert_eq!(config.n_iter, 50);
        assert_eq!(config.scale_factor, 0.05);
        assert_eq!(config.num_multisketches, 3);
        assert_eq!(config.seed, 1);
        assert_eq!(config.seed_policy, SeedPolicy::Derived);
    }

    #[test]
    fn test_rejects_bad_values() {
        for bad in [
            ["--scale-factor", "0"],
            ["--scale-factor", "1.5"],
            ["--scale-factor", "abc"],
            ["--n-iter", "0"],
            ["--num-multisketches", "0"],
            ["--size1", "-3"],
        ] {
            let argv = std::iter::once("containment-eval").chain(bad);
            assert!(Args::try_parse_from(argv).is_err(), "accepted {bad:?}");
        }
    }

    #[test]
    fn test_parse_scale_factor() {
        assert_eq!(parse_scale_factor("1"), Ok(1.0));
        assert_eq!(parse_scale_factor("0.01"), Ok(0.01));
        assert!(parse_scale_factor("-0.1").is_err());
        assert!(parse_scale_factor("NaN").is_err());
    }
}
