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

//! FracMinHash sketch implementation

use std::collections::BTreeSet;

use crate::Item;
use crate::error::Error;
use crate::hash::hash_item;

/// Size of the 32-bit hash space the threshold is measured against.
const HASH_SPACE: f64 = 4_294_967_296.0;

const DEFAULT_SEED: u32 = 0;
const DEFAULT_SCALE_FACTOR: f64 = 0.01;

/// A FracMinHash sketch: the hashes of every item whose hash falls at or below
/// `scale_factor * 2^32`.
///
/// Unlike a bottom-k sketch, the threshold is fixed up front, so the sketch
/// grows with the input and two sketches built with the same seed and scale
/// factor sample the same region of the hash space.
#[derive(Debug, Clone, PartialEq)]
pub struct FracMinHashSketch {
    seed: u32,
    scale_factor: f64,
    hashes: BTreeSet<u32>,
}

impl FracMinHashSketch {
    /// Create a new builder for FracMinHashSketch
    pub fn builder() -> FracMinHashSketchBuilder {
        FracMinHashSketchBuilder::default()
    }

    /// Update the sketch with an item.
    ///
    /// The item's hash is retained only if it passes the threshold. Distinct
    /// items with the same hash are kept once.
    pub fn update(&mut self, item: Item) {
        let hash = hash_item(item, self.seed);
        if self.accepts(hash) {
            self.hashes.insert(hash);
        }
    }

    /// Return true if a hash value passes this sketch's inclusion rule.
    pub fn accepts(&self, hash: u32) -> bool {
        self.scale_factor > 0.0 && (hash as f64) <= self.threshold()
    }

    /// Return the inclusion threshold, `scale_factor * 2^32`.
    pub fn threshold(&self) -> f64 {
        self.scale_factor * HASH_SPACE
    }

    /// Return the hash seed
    pub fn seed(&self) -> u32 {
        self.seed
    }

    /// Return the scale factor
    pub fn scale_factor(&self) -> f64 {
        self.scale_factor
    }

    /// Return number of retained hashes
    pub fn len(&self) -> usize {
        self.hashes.len()
    }

    /// Check if sketch is empty
    pub fn is_empty(&self) -> bool {
        self.hashes.is_empty()
    }

    /// Check whether a hash value is retained
    pub fn contains_hash(&self, hash: u32) -> bool {
        self.hashes.contains(&hash)
    }

    /// Return iterator over retained hash values in ascending order
    pub fn iter(&self) -> impl Iterator<Item = u32> + '_ {
        self.hashes.iter().copied()
    }

    /// Return the estimated number of distinct items seen, `len / scale_factor`.
    pub fn estimate_cardinality(&self) -> f64 {
        if self.is_empty() {
            return 0.0;
        }
        self.len() as f64 / self.scale_factor.min(1.0)
    }

    /// Return the number of hashes retained by both sketches.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::InvalidArgument`](crate::error::ErrorKind::InvalidArgument) if
    /// the sketches were built with a different seed or scale factor.
    pub fn intersection_size(&self, other: &FracMinHashSketch) -> Result<usize, Error> {
        self.ensure_comparable(other)?;
        let (small, large) = if self.len() <= other.len() {
            (self, other)
        } else {
            (other, self)
        };
        Ok(small.iter().filter(|h| large.contains_hash(*h)).count())
    }

    /// Estimate the containment of this sketch's source set in `other`'s.
    ///
    /// # Errors
    ///
    /// Fails if the sketches are not comparable, or if this sketch is empty.
    pub fn containment(&self, other: &FracMinHashSketch) -> Result<f64, Error> {
        let common = self.intersection_size(other)?;
        if self.is_empty() {
            return Err(Error::empty_reference("sketch")
                .with_context("seed", self.seed)
                .with_context("scale_factor", self.scale_factor));
        }
        Ok(common as f64 / self.len() as f64)
    }

    fn ensure_comparable(&self, other: &FracMinHashSketch) -> Result<(), Error> {
        if self.seed != other.seed {
            return Err(Error::incompatible_sketches("seed", self.seed, other.seed));
        }
        if self.scale_factor != other.scale_factor {
            return Err(Error::incompatible_sketches(
                "scale factor",
                self.scale_factor,
                other.scale_factor,
            ));
        }
        Ok(())
    }
}

impl Extend<Item> for FracMinHashSketch {
    fn extend<I: IntoIterator<Item = Item>>(&mut self, items: I) {
        for item in items {
            self.update(item);
        }
    }
}

/// Builder for FracMinHashSketch
#[derive(Debug, Clone)]
pub struct FracMinHashSketchBuilder {
    seed: u32,
    scale_factor: f64,
}

impl Default for FracMinHashSketchBuilder {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED,
            scale_factor: DEFAULT_SCALE_FACTOR,
        }
    }
}

impl FracMinHashSketchBuilder {
    /// Set hash seed.
    pub fn seed(mut self, seed: u32) -> Self {
        self.seed = seed;
        self
    }

    /// Set the target sampling fraction.
    ///
    /// Values at or below zero give a sketch that never retains anything, and
    /// values at or above one retain every hash.
    ///
    /// # Panics
    ///
    /// If scale_factor is NaN
    pub fn scale_factor(mut self, scale_factor: f64) -> Self {
        assert!(!scale_factor.is_nan(), "scale_factor must not be NaN");
        self.scale_factor = scale_factor;
        self
    }

    /// Build the FracMinHashSketch.
    pub fn build(self) -> FracMinHashSketch {
        FracMinHashSketch {
            seed: self.seed,
            scale_factor: self.scale_factor,
            hashes: BTreeSet::new(),
        }
    }
}
