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

//! Hashing used by the FracMinHash inclusion rule.

mod murmurhash;

use std::hash::Hasher;

pub use self::murmurhash::MurmurHash3X86_32;
use crate::Item;

/// Hashes an item the way sketches see it: the decimal representation of the
/// item, run through MurmurHash3 x86 32-bit under `seed`.
///
/// Sketch membership matches tools that hash `str(item)` with mmh3.
pub fn hash_item(item: Item, seed: u32) -> u32 {
    let mut digits = [0u8; 10];
    let mut hasher = MurmurHash3X86_32::with_seed(seed);
    hasher.write(format_decimal(item, &mut digits));
    hasher.finish32()
}

/// Writes `value` in base 10 into the tail of `buf` and returns the digits.
fn format_decimal(mut value: u32, buf: &mut [u8; 10]) -> &[u8] {
    let mut start = buf.len();
    loop {
        start -= 1;
        buf[start] = b'0' + (value % 10) as u8;
        value /= 10;
        if value == 0 {
            break;
        }
    }
    &buf[start..]
}
