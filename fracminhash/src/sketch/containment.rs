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

//! Exact and sketch-based containment.

use crate::ItemSet;
use crate::error::Error;
use crate::sketch::FracMinHashSketch;

/// Build a FracMinHash sketch of `set` under `seed` and `scale_factor`.
///
/// The result depends only on the arguments: the same set, seed and scale
/// factor always give the same sketch.
///
/// # Examples
///
/// ```
/// # use fracminhash::ItemSet;
/// # use fracminhash::sketch::build_sketch;
/// let set: ItemSet = (0..1000).collect();
/// let sketch = build_sketch(&set, 42, 1.0);
/// assert_eq!(sketch.len(), 1000);
/// assert!(build_sketch(&set, 42, 0.0).is_empty());
/// ```
pub fn build_sketch(set: &ItemSet, seed: u32, scale_factor: f64) -> FracMinHashSketch {
    let mut sketch = FracMinHashSketch::builder()
        .seed(seed)
        .scale_factor(scale_factor)
        .build();
    sketch.extend(set.iter().copied());
    sketch
}

/// Return `|set_a ∩ set_b| / |set_a|`.
///
/// # Errors
///
/// Returns [`ErrorKind::EmptyReference`](crate::error::ErrorKind::EmptyReference) if
/// `set_a` is empty.
///
/// # Examples
///
/// ```
/// # use fracminhash::ItemSet;
/// # use fracminhash::sketch::exact_containment;
/// let a: ItemSet = [1, 2, 3, 4].into_iter().collect();
/// let b: ItemSet = [3, 4, 5].into_iter().collect();
/// assert_eq!(exact_containment(&a, &b).unwrap(), 0.5);
/// ```
pub fn exact_containment(set_a: &ItemSet, set_b: &ItemSet) -> Result<f64, Error> {
    if set_a.is_empty() {
        return Err(Error::empty_reference("set"));
    }
    let common = set_a.intersection(set_b).count();
    Ok(common as f64 / set_a.len() as f64)
}

/// Estimate containment from two sketches built with the same seed and scale
/// factor.
///
/// # Errors
///
/// Fails if the sketches differ in seed or scale factor, or if `sketch_a` is
/// empty.
pub fn sketch_containment(
    sketch_a: &FracMinHashSketch,
    sketch_b: &FracMinHashSketch,
) -> Result<f64, Error> {
    sketch_a.containment(sketch_b)
}
