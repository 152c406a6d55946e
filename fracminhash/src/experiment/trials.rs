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

//! Trial loops of the classic and multi-sketch strategies.

use std::collections::HashSet;

use rand::Rng;
use tracing::debug;
use tracing::info_span;

use crate::error::Error;
use crate::experiment::SeedPolicy;
use crate::experiment::sets::SetPair;
use crate::hash::hash_item;
use crate::sketch::build_sketch;
use crate::sketch::sketch_containment;

/// Draw `n` distinct 32-bit hash seeds.
///
/// # Panics
///
/// If `n` exceeds the number of distinct `u32` values.
pub fn draw_trial_seeds<R: Rng + ?Sized>(rng: &mut R, n: usize) -> Vec<u32> {
    assert!(
        n as u64 <= u32::MAX as u64 + 1,
        "cannot draw {n} distinct 32-bit seeds"
    );
    let mut seen = HashSet::with_capacity(n);
    let mut seeds = Vec::with_capacity(n);
    while seeds.len() < n {
        let seed = rng.random::<u32>();
        if seen.insert(seed) {
            seeds.push(seed);
        }
    }
    seeds
}

/// Seed of the `index`-th inner sketch of an outer trial under
/// [`SeedPolicy::Derived`].
pub fn derive_seed(outer_seed: u32, index: usize) -> u32 {
    hash_item(index as u32, outer_seed)
}

/// Sketch both sets with one seed and estimate the containment of A in B.
pub fn estimate_containment(sets: &SetPair, seed: u32, scale_factor: f64) -> Result<f64, Error> {
    let sketch_a = build_sketch(sets.set_a(), seed, scale_factor);
    let sketch_b = build_sketch(sets.set_b(), seed, scale_factor);
    sketch_containment(&sketch_a, &sketch_b).map_err(|e| e.with_context("seed", seed))
}

/// Run the classic strategy: one sketch per set per seed.
pub fn run_classic(sets: &SetPair, seeds: &[u32], scale_factor: f64) -> Result<Vec<f64>, Error> {
    let span = info_span!("classic", trials = seeds.len(), scale_factor);
    let _guard = span.enter();

    let mut estimates = Vec::with_capacity(seeds.len());
    for (trial, &seed) in seeds.iter().enumerate() {
        let estimate = estimate_containment(sets, seed, scale_factor)?;
        debug!(trial, seed, estimate, "classic trial");
        estimates.push(estimate);
    }
    Ok(estimates)
}

/// Run the multi-sketch strategy.
///
/// Each outer trial averages `num_multisketches` estimates, each built at
/// `scale_factor / num_multisketches`. Inner seeds follow `policy`; with
/// [`SeedPolicy::Fresh`] they are drawn from `rng` and `seeds` only sets the
/// number of trials.
///
/// # Panics
///
/// If `num_multisketches` is zero.
pub fn run_multisketch<R: Rng + ?Sized>(
    rng: &mut R,
    sets: &SetPair,
    seeds: &[u32],
    scale_factor: f64,
    num_multisketches: usize,
    policy: SeedPolicy,
) -> Result<Vec<f64>, Error> {
    assert!(num_multisketches > 0, "num_multisketches must be positive");
    let inner_scale_factor = scale_factor / num_multisketches as f64;
    let span = info_span!(
        "multisketch",
        trials = seeds.len(),
        num_multisketches,
        inner_scale_factor,
        ?policy
    );
    let _guard = span.enter();

    let mut estimates = Vec::with_capacity(seeds.len());
    for (trial, &outer_seed) in seeds.iter().enumerate() {
        let mut total = 0.0;
        for index in 0..num_multisketches {
            let seed = match policy {
                SeedPolicy::Fresh => rng.random::<u32>(),
                SeedPolicy::Derived => derive_seed(outer_seed, index),
            };
            total += estimate_containment(sets, seed, inner_scale_factor)?;
        }
        let estimate = total / num_multisketches as f64;
        debug!(trial, outer_seed, estimate, "multisketch trial");
        estimates.push(estimate);
    }
    Ok(estimates)
}
