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

use crate::error::Error;
use crate::experiment::sets::ITEM_UPPER_BOUND;

/// How the multi-sketch strategy picks the seed of each inner sketch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SeedPolicy {
    /// Draw a fresh seed from the experiment's random generator for every
    /// inner sketch. The outer trial seed is not used.
    #[default]
    Fresh,
    /// Derive inner seeds from the outer trial seed, so both strategies are
    /// driven by the same seed list.
    Derived,
}

/// Parameters of one containment experiment.
#[derive(Debug, Clone, PartialEq)]
pub struct ExperimentConfig {
    /// Size of set A.
    pub size1: usize,
    /// Size of set B before the forced overlap is added.
    pub size2: usize,
    /// Number of items of A forced into B.
    pub num_common: usize,
    /// Number of trials per strategy.
    pub n_iter: usize,
    /// Seed of the experiment's random generator.
    pub seed: u64,
    /// Sampling fraction of the classic sketch.
    pub scale_factor: f64,
    /// Number of sketches averaged per multi-sketch trial.
    pub num_multisketches: usize,
    /// Seeding of the inner multi-sketches.
    pub seed_policy: SeedPolicy,
}

impl Default for ExperimentConfig {
    fn default() -> Self {
        Self {
            size1: 10_000,
            size2: 10_000,
            num_common: 1_000,
            n_iter: 100,
            seed: 42,
            scale_factor: 0.01,
            num_multisketches: 2,
            seed_policy: SeedPolicy::Fresh,
        }
    }
}

impl ExperimentConfig {
    /// Check that the experiment can run to completion.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::InsufficientPopulation`](crate::error::ErrorKind::InsufficientPopulation)
    /// if `num_common` exceeds `size1` or a set is larger than the item space, and
    /// [`ErrorKind::InvalidArgument`](crate::error::ErrorKind::InvalidArgument) for any
    /// other out-of-range parameter.
    pub fn validate(&self) -> Result<(), Error> {
        if self.size1 == 0 {
            return Err(Error::invalid_argument("size1 must be positive"));
        }
        for (name, size) in [("size1", self.size1), ("size2", self.size2)] {
            if size > ITEM_UPPER_BOUND as usize {
                return Err(Error::insufficient_population(size, ITEM_UPPER_BOUND as usize)
                    .with_context("parameter", name));
            }
        }
        if self.num_common > self.size1 {
            return Err(Error::insufficient_population(self.num_common, self.size1)
                .with_context("parameter", "num_common"));
        }
        if self.n_iter == 0 || self.n_iter as u64 > u32::MAX as u64 + 1 {
            return Err(Error::invalid_argument(format!(
                "n_iter must be in [1, 2^32], got {}",
                self.n_iter
            )));
        }
        if !(self.scale_factor > 0.0 && self.scale_factor <= 1.0) {
            return Err(Error::invalid_argument(format!(
                "scale_factor must be in (0, 1], got {}",
                self.scale_factor
            )));
        }
        if self.num_multisketches == 0 {
            return Err(Error::invalid_argument(
                "num_multisketches must be at least 1",
            ));
        }
        Ok(())
    }

    /// Scale factor of each inner sketch of the multi-sketch strategy.
    pub fn multisketch_scale_factor(&self) -> f64 {
        self.scale_factor / self.num_multisketches as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_default_is_valid() {
        let config = ExperimentConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.multisketch_scale_factor(), 0.005);
    }

    #[test]
    fn test_rejects_out_of_range() {
        let cases = [
            (
                ExperimentConfig {
                    num_common: 10_001,
                    ..Default::default()
                },
                ErrorKind::InsufficientPopulation,
            ),
            (
                ExperimentConfig {
                    size1: 0,
                    num_common: 0,
                    ..Default::default()
                },
                ErrorKind::InvalidArgument,
            ),
            (
                ExperimentConfig {
                    n_iter: 0,
                    ..Default::default()
                },
                ErrorKind::InvalidArgument,
            ),
            (
                ExperimentConfig {
                    scale_factor: 0.0,
                    ..Default::default()
                },
                ErrorKind::InvalidArgument,
            ),
            (
                ExperimentConfig {
                    scale_factor: f64::NAN,
                    ..Default::default()
                },
                ErrorKind::InvalidArgument,
            ),
            (
                ExperimentConfig {
                    num_multisketches: 0,
                    ..Default::default()
                },
                ErrorKind::InvalidArgument,
            ),
        ];
        for (config, kind) in cases {
            let err = config.validate().unwrap_err();
            assert_eq!(err.kind(), kind, "config: {config:?}");
        }
    }
}
