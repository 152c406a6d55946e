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

//! FracMinHash sketching and containment estimation.
//!
//! # Overview
//!
//! A FracMinHash sketch keeps every item whose 32-bit hash is at most
//! `scale_factor * 2^32`. The expected sketch size is `|set| * scale_factor`,
//! and because the rule is the same for every set hashed with the same seed,
//! the sketches of two sets can be intersected directly:
//!
//! ```text
//! C(A, B) = |A ∩ B| / |A|  ≈  |S(A) ∩ S(B)| / |S(A)|
//! ```
//!
//! The estimate is slightly biased because it is conditioned on `S(A)` being
//! non-empty; the probability of that event is `1 - (1 - s)^|A|`.
//!
//! # Usage
//!
//! ```rust
//! # use fracminhash::ItemSet;
//! # use fracminhash::sketch::build_sketch;
//! # use fracminhash::sketch::exact_containment;
//! # use fracminhash::sketch::sketch_containment;
//! let a: ItemSet = (0..20_000).collect();
//! let b: ItemSet = (10_000..40_000).collect();
//! let truth = exact_containment(&a, &b).unwrap();
//!
//! let sa = build_sketch(&a, 7, 0.1);
//! let sb = build_sketch(&b, 7, 0.1);
//! let estimate = sketch_containment(&sa, &sb).unwrap();
//! assert!((estimate - truth).abs() < 0.1);
//! ```

mod containment;
mod fracminhash;

pub use self::containment::build_sketch;
pub use self::containment::exact_containment;
pub use self::containment::sketch_containment;
pub use self::fracminhash::FracMinHashSketch;
pub use self::fracminhash::FracMinHashSketchBuilder;
