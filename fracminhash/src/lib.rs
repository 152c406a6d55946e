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

//! # FracMinHash containment estimation
//!
//! FracMinHash sketches keep the hashes of a fixed fraction of a set, chosen by
//! comparing each item's hash to a threshold. This crate builds such sketches,
//! estimates set containment from them, and runs Monte Carlo experiments that
//! measure how a single sketch compares with an average of several smaller
//! sketches.
//!
//! This library is divided into modules that constitute distinct groups of functionality.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![deny(missing_docs)]

pub mod error;
pub mod experiment;
pub mod hash;
pub mod histogram;
pub mod sketch;

use std::collections::BTreeSet;

/// An item of a set: an opaque non-negative integer identifier.
pub type Item = u32;

/// A set of distinct items.
///
/// Ordered so that sampling from a set depends only on its content and the
/// random generator.
pub type ItemSet = BTreeSet<Item>;
