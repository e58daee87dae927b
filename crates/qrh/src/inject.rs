// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Per-block length injection.
//!
//! The schema is a rolling 32-bit accumulator seeded once per message and
//! threaded by value through every absorbed block.

use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::consts::{CONSTANTS, WORDS};
use crate::word::rotl32_native;

/// Rolling domain-separation accumulator
#[derive(Zeroize, ZeroizeOnDrop)]
pub(crate) struct Schema(u32);

impl Schema {
    /// Seed from the constant table, keyed by `(input_len << 8) mod 16`
    pub(crate) fn seed(input_len: usize) -> Self {
        Self(CONSTANTS[(input_len << 8) % WORDS])
    }

    #[cfg(test)]
    pub(crate) fn from_raw(value: u32) -> Self {
        Self(value)
    }

    #[cfg(test)]
    pub(crate) fn as_u32(&self) -> u32 {
        self.0
    }

    /// Fold the block index and the message bit length into `words`.
    ///
    /// `block_index` is the byte offset of the block being absorbed. Returns
    /// the schema to carry into the next block.
    pub(crate) fn inject(
        mut self,
        words: &mut [u32; WORDS],
        input_len: usize,
        block_index: usize,
    ) -> Self {
        let bit_len = (input_len as u64).wrapping_mul(8);

        let len_lo = bit_len as u32;
        let len_hi = (bit_len >> 32) as u32;
        let blk = block_index as u32;

        let mut combined = self.0;

        combined ^= blk.rotate_left(22);
        combined ^= len_lo.rotate_left(17);
        combined ^= len_hi.rotate_left(13);

        self.0 ^= combined;
        combined = combined.wrapping_add(self.0);

        let len_rot = rotl32_native(input_len, 15);

        for i in 0..4u32 {
            let table = CONSTANTS[(i as usize + 1).wrapping_mul(len_rot) % WORDS];

            // Block bits are folded in unshifted on both halves; this is not
            // a rotation of `blk ^ combined`.
            let blk_fold = (blk ^ (combined << 23)) | (blk ^ (combined >> 9));

            let idx_seed =
                combined ^ self.0.rotate_left(11) ^ blk_fold ^ i.wrapping_mul(table);

            let x = ((idx_seed as usize & (WORDS - 1)) + i as usize) & (WORDS - 1);

            words[x] ^= combined.rotate_left(9);

            self.0 = self.0.wrapping_add(words[x]);
            self.0 ^= words[x];
            self.0 = self.0.rotate_left(19);

            combined ^= self.0;
        }

        combined.zeroize();
        self
    }
}
