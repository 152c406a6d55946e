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

use std::hash::Hasher;

const C1: u32 = 0xcc9e2d51;
const C2: u32 = 0x1b873593;

/// The 32-bit x86 variant of MurmurHash3.
///
/// Its output is uniform over `[0, 2^32)` and depends on a `u32` seed, which is
/// what the FracMinHash inclusion rule needs. This is the same function as
/// `mmh3.hash(key, seed, signed=False)`, so sketches can be cross-checked
/// against other tooling. Changing the algorithm changes every sketch.
#[derive(Debug, Clone)]
pub struct MurmurHash3X86_32 {
    h1: u32,
    total: u32,
    buf: [u8; 4],
    buf_len: usize,
}

impl MurmurHash3X86_32 {
    /// Create a hasher with the given seed.
    pub fn with_seed(seed: u32) -> Self {
        MurmurHash3X86_32 {
            h1: seed,
            total: 0,
            buf: [0; 4],
            buf_len: 0,
        }
    }

    /// Return the 32-bit hash of the bytes written so far.
    pub fn finish32(&self) -> u32 {
        let mut h1 = self.h1;

        // tail
        if self.buf_len > 0 {
            let mut buf = [0u8; 4];
            buf[..self.buf_len].copy_from_slice(&self.buf[..self.buf_len]);
            h1 ^= mix_k1(u32::from_le_bytes(buf));
        }

        // the length is taken modulo 2^32, as in the reference implementation
        h1 ^= self.total.wrapping_add(self.buf_len as u32);
        fmix32(h1)
    }

    #[inline]
    fn update(&mut self, k1: u32) {
        self.h1 ^= mix_k1(k1);
        self.h1 = self.h1.rotate_left(13);
        self.h1 = self.h1.wrapping_mul(5).wrapping_add(0xe6546b64);
        self.total = self.total.wrapping_add(4);
    }
}

impl Hasher for MurmurHash3X86_32 {
    fn finish(&self) -> u64 {
        self.finish32() as u64
    }

    fn write(&mut self, mut bytes: &[u8]) {
        if self.buf_len + bytes.len() < 4 {
            self.buf[self.buf_len..self.buf_len + bytes.len()].copy_from_slice(bytes);
            self.buf_len += bytes.len();
            return;
        }

        if self.buf_len != 0 {
            let wanted = 4 - self.buf_len;
            self.buf[self.buf_len..].copy_from_slice(&bytes[..wanted]);
            self.update(u32::from_le_bytes(self.buf));
            bytes = &bytes[wanted..];
            self.buf_len = 0;
        }

        let mut blocks = bytes.chunks_exact(4);
        for block in &mut blocks {
            let mut k1 = [0u8; 4];
            k1.copy_from_slice(block);
            self.update(u32::from_le_bytes(k1));
        }

        let rem = blocks.remainder();
        if !rem.is_empty() {
            self.buf[..rem.len()].copy_from_slice(rem);
            self.buf_len = rem.len();
        }
    }
}

#[inline]
fn mix_k1(mut k1: u32) -> u32 {
    k1 = k1.wrapping_mul(C1);
    k1 = k1.rotate_left(15);
    k1.wrapping_mul(C2)
}

/// Finalization mix: force all bits of a hash block to avalanche.
#[inline]
fn fmix32(mut h: u32) -> u32 {
    h ^= h >> 16;
    h = h.wrapping_mul(0x85ebca6b);
    h ^= h >> 13;
    h = h.wrapping_mul(0xc2b2ae35);
    h ^ (h >> 16)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn murmurhash3_x86_32(key: &[u8], seed: u32) -> u32 {
        let mut hasher = MurmurHash3X86_32::with_seed(seed);
        hasher.write(key);
        hasher.finish32()
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(murmurhash3_x86_32(b"", 0), 0);
        assert_eq!(murmurhash3_x86_32(b"", 1), 0x514e28b7);
        assert_eq!(murmurhash3_x86_32(b"", 0xffffffff), 0x81f16f39);
    }

    #[test]
    fn test_known_vectors() {
        assert_eq!(murmurhash3_x86_32(&[0, 0, 0, 0], 0), 0x2362f9de);
        assert_eq!(murmurhash3_x86_32(b"aaaa", 0x9747b28c), 0x5a97808a);
        assert_eq!(murmurhash3_x86_32(b"Hello, world!", 0x9747b28c), 0x24884cba);
        assert_eq!(
            murmurhash3_x86_32(b"The quick brown fox jumps over the lazy dog", 0x9747b28c),
            0x2fa826cd
        );
    }

    #[test]
    fn test_matches_mmh3_unsigned() {
        // mmh3.hash("foo", signed=False) and mmh3.hash("foo", 42) & 0xffffffff
        assert_eq!(murmurhash3_x86_32(b"foo", 0), 4138058784);
        assert_eq!(murmurhash3_x86_32(b"foo", 42), 2972666014);
    }

    #[test]
    fn test_incremental_writes() {
        let key = b"The quick brown fox jumps over the lazy dog";
        let expected = murmurhash3_x86_32(key, 0x9747b28c);
        for split in [1, 2, 3, 5, 17, 42] {
            let mut hasher = MurmurHash3X86_32::with_seed(0x9747b28c);
            for piece in key.chunks(split) {
                hasher.write(piece);
            }
            assert_eq!(hasher.finish32(), expected, "split: {split}");
        }
    }
}
