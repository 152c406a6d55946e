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

//! Text histograms for comparing result sequences.
//!
//! Bins are equal-width over a closed range; a value equal to the upper edge
//! falls in the last bin, and values outside the range or NaN are ignored.

const GLYPHS: [char; 4] = ['#', '*', '+', 'o'];

/// Equal-width histogram of a sequence of values.
#[derive(Debug, Clone, PartialEq)]
pub struct Histogram {
    low: f64,
    high: f64,
    counts: Vec<usize>,
}

impl Histogram {
    /// Bin `values` over their own range.
    ///
    /// When every value is equal, the range is widened by 0.5 on each side.
    ///
    /// # Panics
    ///
    /// If `bins` is zero.
    pub fn new(values: &[f64], bins: usize) -> Self {
        let (low, high) = value_range(values).unwrap_or((0.0, 1.0));
        Self::with_range(values, bins, low, high)
    }

    /// Bin `values` over `[low, high]`.
    ///
    /// # Panics
    ///
    /// If `bins` is zero, or `low > high`.
    pub fn with_range(values: &[f64], bins: usize, low: f64, high: f64) -> Self {
        assert!(bins > 0, "bins must be positive");
        assert!(low <= high, "invalid range [{low}, {high}]");
        let (low, high) = if low == high {
            (low - 0.5, high + 0.5)
        } else {
            (low, high)
        };

        let mut counts = vec![0; bins];
        let width = (high - low) / bins as f64;
        for &value in values {
            if !(low..=high).contains(&value) {
                continue;
            }
            let bin = (((value - low) / width) as usize).min(bins - 1);
            counts[bin] += 1;
        }
        Self { low, high, counts }
    }

    /// Returns the count of every bin.
    pub fn counts(&self) -> &[usize] {
        &self.counts
    }

    /// Returns the number of bins.
    pub fn bins(&self) -> usize {
        self.counts.len()
    }

    /// Returns the binned range.
    pub fn range(&self) -> (f64, f64) {
        (self.low, self.high)
    }

    /// Returns the `bins + 1` bin edges.
    pub fn bin_edges(&self) -> Vec<f64> {
        let bins = self.bins() as f64;
        (0..=self.bins())
            .map(|i| self.low + (self.high - self.low) * i as f64 / bins)
            .collect()
    }

    /// Returns the number of binned values.
    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }
}

/// Render labelled series as overlaid text histograms over a shared range.
///
/// The output starts with one legend line per series, followed by one row per
/// bin: the lower bin edge, then a bar and a count for each series. Bars are
/// scaled so the fullest bin of any series spans `width` glyphs.
///
/// # Panics
///
/// If `bins` is zero.
pub fn render_overlay(series: &[(&str, &[f64])], bins: usize, width: usize) -> String {
    assert!(bins > 0, "bins must be positive");
    let mut out = String::new();
    for (i, (label, values)) in series.iter().enumerate() {
        out.push_str(&format!(
            "{} {label} (n={})\n",
            GLYPHS[i % GLYPHS.len()],
            values.len()
        ));
    }

    let all = series.iter().flat_map(|(_, values)| values.iter().copied());
    let Some((low, high)) = value_range_of(all) else {
        out.push_str("(no data)\n");
        return out;
    };
    let histograms: Vec<Histogram> = series
        .iter()
        .map(|(_, values)| Histogram::with_range(values, bins, low, high))
        .collect();
    let peak = histograms
        .iter()
        .flat_map(|h| h.counts().iter().copied())
        .max()
        .unwrap_or(0)
        .max(1);
    let edges = histograms[0].bin_edges();

    for bin in 0..bins {
        let mut line = format!("{:>9.4} ", edges[bin]);
        for (i, histogram) in histograms.iter().enumerate() {
            let count = histogram.counts()[bin];
            let mut len = count * width / peak;
            if count > 0 {
                len = len.max(1);
            }
            line.push('|');
            line.extend(std::iter::repeat_n(GLYPHS[i % GLYPHS.len()], len));
            line.extend(std::iter::repeat_n(' ', width.saturating_sub(len)));
            line.push_str(&format!(" {count:>3} "));
        }
        out.push_str(line.trim_end());
        out.push('\n');
    }
    out
}

fn value_range(values: &[f64]) -> Option<(f64, f64)> {
    value_range_of(values.iter().copied())
}

fn value_range_of(values: impl Iterator<Item = f64>) -> Option<(f64, f64)> {
    values
        .filter(|v| v.is_finite())
        .fold(None, |range, v| match range {
            None => Some((v, v)),
            Some((low, high)) => Some((f64::min(low, v), f64::max(high, v))),
        })
}
