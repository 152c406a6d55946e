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

use std::collections::BTreeSet;

use fracminhash::ItemSet;
use fracminhash::error::ErrorKind;
use fracminhash::hash::hash_item;
use fracminhash::sketch::FracMinHashSketch;
use fracminhash::sketch::build_sketch;
use fracminhash::sketch::exact_containment;
use fracminhash::sketch::sketch_containment;
use googletest::assert_that;
use googletest::prelude::eq;
use googletest::prelude::near;

fn spread_set(n: u32) -> ItemSet {
    (0..n).map(|i| i.wrapping_mul(2_654_435_761) >> 1).collect()
}

#[test]
fn test_build_is_deterministic() {
    let set = spread_set(5_000);
    let first = build_sketch(&set, 77, 0.05);
    let second = build_sketch(&set, 77, 0.05);
    assert_eq!(first, second);
    assert!(!first.is_empty());
}

#[test]
fn test_full_scale_keeps_every_hash() {
    let set = spread_set(2_000);
    let sketch = build_sketch(&set, 3, 1.0);
    let hashes: BTreeSet<u32> = set.iter().map(|&item| hash_item(item, 3)).collect();
    assert_eq!(sketch.len(), hashes.len());
    assert!(sketch.iter().eq(hashes.iter().copied()));
}

#[test]
fn test_zero_scale_is_empty() {
    let set = spread_set(2_000);
    assert!(build_sketch(&set, 3, 0.0).is_empty());
    assert!(build_sketch(&set, 3, -0.5).is_empty());
    assert_eq!(build_sketch(&set, 3, 2.0).len(), build_sketch(&set, 3, 1.0).len());
}

#[test]
fn test_larger_scale_never_shrinks() {
    let set = spread_set(10_000);
    let scales = [0.001, 0.01, 0.05, 0.2, 0.5, 1.0];
    let sketches: Vec<FracMinHashSketch> =
        scales.iter().map(|&s| build_sketch(&set, 11, s)).collect();
    for pair in sketches.windows(2) {
        assert!(pair[0].len() <= pair[1].len());
        assert!(pair[0].iter().all(|h| pair[1].contains_hash(h)));
    }
}

#[test]
fn test_expected_sketch_size() {
    let set = spread_set(100_000);
    let sketch = build_sketch(&set, 42, 0.01);
    // mean 1000, standard deviation about 31
    assert_that!(sketch.len() as f64, near(1_000.0, 200.0));
    assert_that!(sketch.estimate_cardinality(), near(100_000.0, 20_000.0));
}

#[test]
fn test_exact_containment() {
    let a: ItemSet = (0..100).collect();
    let b: ItemSet = (0..1_000).collect();
    let c: ItemSet = (1_000..2_000).collect();
    assert_that!(exact_containment(&a, &b).unwrap(), eq(1.0));
    assert_that!(exact_containment(&a, &c).unwrap(), eq(0.0));
    assert_that!(exact_containment(&b, &a).unwrap(), eq(0.1));

    let empty = ItemSet::new();
    let err = exact_containment(&empty, &a).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::EmptyReference);
    assert_that!(exact_containment(&a, &empty).unwrap(), eq(0.0));
}

#[test]
fn test_sketch_containment_estimates_truth() {
    let a: ItemSet = (0..50_000).collect();
    let b: ItemSet = (40_000..100_000).collect();
    let truth = exact_containment(&a, &b).unwrap();
    assert_that!(truth, eq(0.2));

    let sa = build_sketch(&a, 5, 0.05);
    let sb = build_sketch(&b, 5, 0.05);
    // about 2500 retained hashes in A's sketch
    assert_that!(sketch_containment(&sa, &sb).unwrap(), near(truth, 0.05));
}

#[test]
fn test_subset_and_disjoint_sketches() {
    let a: ItemSet = (0..10_000).collect();
    let b: ItemSet = (0..20_000).collect();
    let c: ItemSet = (50_000..60_000).collect();
    let sa = build_sketch(&a, 8, 0.1);
    assert_that!(sketch_containment(&sa, &build_sketch(&b, 8, 0.1)).unwrap(), eq(1.0));
    assert_that!(sketch_containment(&sa, &sa).unwrap(), eq(1.0));
    assert!(sketch_containment(&sa, &build_sketch(&c, 8, 0.1)).unwrap() < 0.01);
}

#[test]
fn test_incomparable_sketches() {
    let set = spread_set(1_000);
    let base = build_sketch(&set, 1, 0.5);

    let err = sketch_containment(&base, &build_sketch(&set, 2, 0.5)).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    let err = sketch_containment(&base, &build_sketch(&set, 1, 0.25)).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);
}

#[test]
fn test_empty_reference_sketch() {
    let set = spread_set(1_000);
    let empty = build_sketch(&set, 1, 0.0);
    let err = sketch_containment(&empty, &build_sketch(&set, 1, 0.0)).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::EmptyReference);
}

#[test]
fn test_incremental_updates_match_build() {
    let set = spread_set(3_000);
    let mut sketch = FracMinHashSketch::builder()
        .seed(21)
        .scale_factor(0.1)
        .build();
    for &item in set.iter().rev() {
        sketch.update(item);
    }
    sketch.update(*set.iter().next().unwrap());
    assert_eq!(sketch, build_sketch(&set, 21, 0.1));
    assert_eq!(sketch.seed(), 21);
    assert_eq!(sketch.scale_factor(), 0.1);
}
