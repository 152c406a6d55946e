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

/// Summary statistics of a trial result sequence against the true containment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Summary {
    trials: usize,
    mean: f64,
    rms_deviation: f64,
    std_dev: f64,
    min: f64,
    max: f64,
    truth: f64,
}

impl Summary {
    /// Summarize `estimates` against `truth`.
    ///
    /// # Errors
    ///
    /// If `estimates` is empty.
    pub fn from_estimates(estimates: &[f64], truth: f64) -> Result<Self, Error> {
        if estimates.is_empty() {
            return Err(Error::invalid_argument(
                "cannot summarize an empty result sequence",
            ));
        }
        let n = estimates.len() as f64;
        let mean = estimates.iter().sum::<f64>() / n;
        let squared_error = estimates.iter().map(|e| (e - truth).powi(2)).sum::<f64>();
        let std_dev = if estimates.len() > 1 {
            let spread = estimates.iter().map(|e| (e - mean).powi(2)).sum::<f64>();
            (spread / (n - 1.0)).sqrt()
        } else {
            0.0
        };
        let min = estimates.iter().copied().fold(f64::INFINITY, f64::min);
        let max = estimates.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        Ok(Self {
            trials: estimates.len(),
            mean,
            rms_deviation: (squared_error / n).sqrt(),
            std_dev,
            min,
            max,
            truth,
        })
    }

    /// Returns the number of trials.
    pub fn trials(&self) -> usize {
        self.trials
    }

    /// Returns the mean estimate.
    pub fn mean(&self) -> f64 {
        self.mean
    }

    /// Returns the root-mean-square deviation of the estimates from the truth.
    pub fn rms_deviation(&self) -> f64 {
        self.rms_deviation
    }

    /// Returns `mean - truth`.
    pub fn bias(&self) -> f64 {
        self.mean - self.truth
    }

    /// Returns the sample standard deviation around the mean.
    pub fn std_dev(&self) -> f64 {
        self.std_dev
    }

    /// Returns the smallest estimate.
    pub fn min(&self) -> f64 {
        self.min
    }

    /// Returns the largest estimate.
    pub fn max(&self) -> f64 {
        self.max
    }
}

/// Probability that a sketch of `size` items at `scale_factor` keeps at least
/// one hash, `1 - (1 - scale_factor)^size`.
///
/// Sketch containment is only defined when the reference sketch is non-empty,
/// so this is the factor that conditions the estimator.
pub fn bias_factor(scale_factor: f64, size: usize) -> f64 {
    if size == 0 || scale_factor <= 0.0 {
        return 0.0;
    }
    if scale_factor >= 1.0 {
        return 1.0;
    }
    -(size as f64 * (-scale_factor).ln_1p()).exp_m1()
}

/// Probability that a sketch of `size` items at `scale_factor` is empty,
/// `(1 - scale_factor)^size`.
pub fn empty_sketch_probability(scale_factor: f64, size: usize) -> f64 {
    if size == 0 || scale_factor <= 0.0 {
        return 1.0;
    }
    if scale_factor >= 1.0 {
        return 0.0;
    }
    (size as f64 * (-scale_factor).ln_1p()).exp()
}

#[cfg(test)]
mod tests {
    use googletest::assert_that;
    use googletest::prelude::eq;
    use googletest::prelude::near;

    use super::*;

    #[test]
    fn test_summary() {
        let summary = Summary::from_estimates(&[0.1, 0.2, 0.3], 0.25).unwrap();
        assert_eq!(summary.trials(), 3);
        assert_that!(summary.mean(), near(0.2, 1e-12));
        assert_that!(summary.bias(), near(-0.05, 1e-12));
        // squared errors: 0.0225, 0.0025, 0.0025
        assert_that!(summary.rms_deviation(), near((0.0275f64 / 3.0).sqrt(), 1e-12));
        assert_that!(summary.std_dev(), near(0.1, 1e-12));
        assert_that!(summary.min(), eq(0.1));
        assert_that!(summary.max(), eq(0.3));
    }

    #[test]
    fn test_single_trial() {
        let summary = Summary::from_estimates(&[0.4], 0.5).unwrap();
        assert_that!(summary.std_dev(), eq(0.0));
        assert_that!(summary.rms_deviation(), near(0.1, 1e-12));
    }

    #[test]
    fn test_empty_sequence() {
        assert!(Summary::from_estimates(&[], 0.5).is_err());
    }

    #[test]
    fn test_bias_factor() {
        assert_that!(bias_factor(0.01, 10_000), near(1.0 - 0.99f64.powi(10_000), 1e-12));
        assert_that!(bias_factor(0.5, 1), near(0.5, 1e-15));
        assert_that!(bias_factor(0.5, 2), near(0.75, 1e-15));
        assert_that!(bias_factor(0.0, 100), eq(0.0));
        assert_that!(bias_factor(1.0, 100), eq(1.0));
        assert_that!(bias_factor(0.3, 0), eq(0.0));
    }

    #[test]
    fn test_empty_sketch_probability() {
        assert_that!(empty_sketch_probability(0.5, 3), near(0.125, 1e-15));
        assert_that!(empty_sketch_probability(0.05, 1_000), near(0.95f64.powi(1_000), 1e-30));
        assert!(empty_sketch_probability(0.05, 1_000) > 0.0);
        assert_that!(
            bias_factor(0.2, 7) + empty_sketch_probability(0.2, 7),
            near(1.0, 1e-12)
        );
    }
}
