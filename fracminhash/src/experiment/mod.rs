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

//! Monte Carlo comparison of classic and multi-sketch containment estimates.
//!
//! # Overview
//!
//! An experiment draws a pair of sets with a known overlap, computes their
//! exact containment, then estimates it over `n_iter` random trials with two
//! strategies:
//!
//! * **classic**: one sketch per set at `scale_factor`;
//! * **multi-sketch**: the average of `num_multisketches` estimates, each at
//!   `scale_factor / num_multisketches`.
//!
//! Both strategies spend the same expected number of retained hashes per trial,
//! so their result sequences can be compared for bias and spread.
//!
//! All randomness comes from the generator passed to [`run_experiment`]; a
//! given configuration and generator state always produce the same report.
//!
//! # Examples
//!
//! ```
//! # use fracminhash::experiment::ExperimentConfig;
//! # use fracminhash::experiment::run_experiment;
//! # use rand::SeedableRng;
//! # use rand::rngs::StdRng;
//! let config = ExperimentConfig {
//!     size1: 2_000,
//!     size2: 2_000,
//!     num_common: 500,
//!     n_iter: 20,
//!     scale_factor: 0.1,
//!     ..Default::default()
//! };
//! let mut rng = StdRng::seed_from_u64(config.seed);
//! let report = run_experiment(&config, &mut rng).unwrap();
//! assert_eq!(report.classic().estimates().len(), 20);
//! assert!((report.classic().summary().mean() - report.true_containment()).abs() < 0.1);
//! ```

mod config;
mod report;
mod sets;
mod summary;
mod trials;

use rand::Rng;
use tracing::info;

pub use self::config::ExperimentConfig;
pub use self::config::SeedPolicy;
pub use self::report::ExperimentReport;
pub use self::report::StrategyResult;
pub use self::sets::ITEM_UPPER_BOUND;
pub use self::sets::SetPair;
pub use self::sets::generate_set;
pub use self::sets::generate_set_pair;
pub use self::sets::sample_items;
pub use self::summary::Summary;
pub use self::summary::bias_factor;
pub use self::summary::empty_sketch_probability;
pub use self::trials::derive_seed;
pub use self::trials::draw_trial_seeds;
pub use self::trials::estimate_containment;
pub use self::trials::run_classic;
pub use self::trials::run_multisketch;
use crate::error::Error;
use crate::sketch::exact_containment;

/// Run a complete experiment with randomness drawn from `rng`.
///
/// The generator is consumed in a fixed order: set A, the overlap sample, set
/// B, the trial seeds, then (under [`SeedPolicy::Fresh`]) the inner seeds of the
/// multi-sketch strategy.
///
/// # Errors
///
/// Fails if the configuration does not validate, or if a reference sketch
/// turns out empty during a trial.
pub fn run_experiment<R: Rng + ?Sized>(
    config: &ExperimentConfig,
    rng: &mut R,
) -> Result<ExperimentReport, Error> {
    config.validate()?;

    let sets = generate_set_pair(rng, config.size1, config.size2, config.num_common)?;
    let true_containment = exact_containment(sets.set_a(), sets.set_b())?;
    let bias_factor = bias_factor(config.scale_factor, config.size1);
    info!(
        set_a = sets.set_a().len(),
        set_b = sets.set_b().len(),
        true_containment,
        bias_factor,
        "generated set pair"
    );

    let seeds = draw_trial_seeds(rng, config.n_iter);

    let estimates = run_classic(&sets, &seeds, config.scale_factor)?;
    let summary = Summary::from_estimates(&estimates, true_containment)?;
    info!(
        mean = summary.mean(),
        rms_deviation = summary.rms_deviation(),
        "classic strategy done"
    );
    let classic = StrategyResult::new(estimates, summary);

    let estimates = run_multisketch(
        rng,
        &sets,
        &seeds,
        config.scale_factor,
        config.num_multisketches,
        config.seed_policy,
    )?;
    let summary = Summary::from_estimates(&estimates, true_containment)?;
    info!(
        mean = summary.mean(),
        rms_deviation = summary.rms_deviation(),
        "multisketch strategy done"
    );
    let multisketch = StrategyResult::new(estimates, summary);

    Ok(ExperimentReport {
        config: config.clone(),
        set_a_len: sets.set_a().len(),
        set_b_len: sets.set_b().len(),
        true_containment,
        bias_factor,
        classic,
        multisketch,
    })
}
