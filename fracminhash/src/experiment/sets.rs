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

//! Synthetic ground-truth sets with a controlled overlap.

use rand::Rng;

use crate::Item;
use crate::ItemSet;
use crate::error::Error;

/// Items are drawn uniformly from `[0, ITEM_UPPER_BOUND)`.
pub const ITEM_UPPER_BOUND: Item = 1 << 31;

/// The two sets an experiment compares.
#[derive(Debug, Clone)]
pub struct SetPair {
    set_a: ItemSet,
    set_b: ItemSet,
    common: Vec<Item>,
}

impl SetPair {
    /// Returns set A, the reference set.
    pub fn set_a(&self) -> &ItemSet {
        &self.set_a
    }

    /// Returns set B.
    pub fn set_b(&self) -> &ItemSet {
        &self.set_b
    }

    /// Returns the items of A that were forced into B.
    pub fn common(&self) -> &[Item] {
        &self.common
    }
}

/// Draw `size` distinct items uniformly from `[0, 2^31)`.
///
/// # Errors
///
/// Fails if `size` exceeds the number of possible items.
pub fn generate_set<R: Rng + ?Sized>(rng: &mut R, size: usize) -> Result<ItemSet, Error> {
    if size > ITEM_UPPER_BOUND as usize {
        return Err(Error::insufficient_population(
            size,
            ITEM_UPPER_BOUND as usize,
        ));
    }
    let mut set = ItemSet::new();
    while set.len() < size {
        set.insert(rng.random_range(0..ITEM_UPPER_BOUND));
    }
    Ok(set)
}

/// Draw `amount` items of `set` without replacement.
///
/// The population is taken in ascending order, so the sample only depends on
/// the set's content and the generator state.
///
/// # Errors
///
/// Returns [`ErrorKind::InsufficientPopulation`](crate::error::ErrorKind::InsufficientPopulation)
/// if `amount` exceeds the size of `set`.
pub fn sample_items<R: Rng + ?Sized>(
    rng: &mut R,
    set: &ItemSet,
    amount: usize,
) -> Result<Vec<Item>, Error> {
    if amount > set.len() {
        return Err(Error::insufficient_population(amount, set.len()));
    }
    let population: Vec<Item> = set.iter().copied().collect();
    let picked = rand::seq::index::sample(rng, population.len(), amount);
    Ok(picked.into_iter().map(|i| population[i]).collect())
}

/// Build set A of `size1` items, and set B of `size2` fresh items plus
/// `num_common` items sampled from A.
///
/// B ends up with between `size2` and `size2 + num_common` items, depending on
/// how many of the sampled items were already drawn for B.
///
/// # Errors
///
/// Fails if `num_common > size1`, or a size exceeds the item space.
pub fn generate_set_pair<R: Rng + ?Sized>(
    rng: &mut R,
    size1: usize,
    size2: usize,
    num_common: usize,
) -> Result<SetPair, Error> {
    let set_a = generate_set(rng, size1).map_err(|e| e.with_context("set", "A"))?;
    let common =
        sample_items(rng, &set_a, num_common).map_err(|e| e.with_context("set", "A"))?;
    let mut set_b = generate_set(rng, size2).map_err(|e| e.with_context("set", "B"))?;
    set_b.extend(common.iter().copied());
    Ok(SetPair {
        set_a,
        set_b,
        common,
    })
}
