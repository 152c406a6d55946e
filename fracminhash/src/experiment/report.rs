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

use std::fmt;

use crate::experiment::ExperimentConfig;
use crate::experiment::Summary;

/// Result sequence and summary of one sketching strategy.
#[derive(Debug, Clone)]
pub struct StrategyResult {
    estimates: Vec<f64>,
    summary: Summary,
}

impl StrategyResult {
    pub(crate) fn new(estimates: Vec<f64>, summary: Summary) -> Self {
        Self { estimates, summary }
    }

    /// Returns the containment estimate of every trial, in trial order.
    pub fn estimates(&self) -> &[f64] {
        &self.estimates
    }

    /// Returns the summary statistics of the estimates.
    pub fn summary(&self) -> &Summary {
        &self.summary
    }
}

/// Outcome of a containment experiment.
///
/// `Display` prints the human-readable report: true containment, bias factor,
/// then mean and deviation from truth of the classic and multi-sketch
/// strategies, one per line.
#[derive(Debug, Clone)]
pub struct ExperimentReport {
    pub(crate) config: ExperimentConfig,
    pub(crate) set_a_len: usize,
    pub(crate) set_b_len: usize,
    pub(crate) true_containment: f64,
    pub(crate) bias_factor: f64,
    pub(crate) classic: StrategyResult,
    pub(crate) multisketch: StrategyResult,
}

impl ExperimentReport {
    /// Returns the configuration the experiment ran with.
    pub fn config(&self) -> &ExperimentConfig {
        &self.config
    }

    /// Returns the size of set A.
    pub fn set_a_len(&self) -> usize {
        self.set_a_len
    }

    /// Returns the size of set B after the overlap was added.
    pub fn set_b_len(&self) -> usize {
        self.set_b_len
    }

    /// Returns the exact containment of A in B.
    pub fn true_containment(&self) -> f64 {
        self.true_containment
    }

    /// Returns `1 - (1 - scale_factor)^size1`.
    pub fn bias_factor(&self) -> f64 {
        self.bias_factor
    }

    /// Returns the classic strategy's results.
    pub fn classic(&self) -> &StrategyResult {
        &self.classic
    }

    /// Returns the multi-sketch strategy's results.
    pub fn multisketch(&self) -> &StrategyResult {
        &self.multisketch
    }
}

impl fmt::Display for ExperimentReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "True containment: {}", self.true_containment)?;
        writeln!(f, "Bias factor: {}", self.bias_factor)?;
        for (name, result) in [("classic", &self.classic), ("multisketch", &self.multisketch)] {
            let summary = result.summary();
            writeln!(f, "Average containment ({name}): {}", summary.mean())?;
            writeln!(
                f,
                "Standard deviation from true ({name}): {}",
                summary.rms_deviation()
            )?;
        }
        Ok(())
    }
}
