// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! QRH-256 absorption loop and finalization

use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::consts::{BLOCK_LEN, CONSTANTS, HASH_LEN, WORDS};
use crate::inject::Schema;
use crate::permute::{ROUNDS, run_state};
use crate::word::{read_partial_word_le, read_word_le, rotl32_native, write_word_le};

/// QRH-256 hashing state.
///
/// Holds the 16-word state and the block buffer of one hash invocation.
/// Both are zeroized after every [`hash`](Self::hash) and on drop, so a
/// single instance can be reused for any number of messages.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct Qrh256State {
    // Working state, initialized from the constant table per message
    state: [u32; WORDS],

    // Current block as little-endian words, zero-filled past the input
    block: [u32; WORDS],
}

impl Default for Qrh256State {
    fn default() -> Self {
        Self::new()
    }
}

impl Qrh256State {
    /// Create a new, zeroized state
    pub fn new() -> Self {
        Self {
            state: [0; WORDS],
            block: [0; WORDS],
        }
    }

    /// Hash `data` into `out`.
    ///
    /// Accepts any input length, including zero.
    pub fn hash(&mut self, data: &[u8], out: &mut [u8; HASH_LEN]) {
        let input_len = data.len();

        self.state.copy_from_slice(&CONSTANTS);
        let mut schema = Schema::seed(input_len);

        let mut offset = 0;
        while offset < input_len {
            let block_len = core::cmp::min(input_len - offset, BLOCK_LEN);

            let next_offset = self.load_block(data, offset, block_len);
            self.mix_block();

            schema = schema.inject(&mut self.state, input_len, offset);
            run_state(&mut self.state, &ROUNDS);

            offset = next_offset;
        }

        self.whiten(input_len);
        self.finalize(out);

        schema.zeroize();
        self.zeroize();
    }

    /// Reset to the zeroized state
    pub fn reset(&mut self) {
        self.zeroize();
    }

    /// Decode `block_len` bytes at `offset` into the block buffer.
    ///
    /// Returns the offset just past the consumed bytes.
    fn load_block(&mut self, data: &[u8], offset: usize, block_len: usize) -> usize {
        self.block.zeroize();

        let mut cursor = offset;
        let full_words = block_len / 4;
        let partial = block_len % 4;

        for word in self.block[..full_words].iter_mut() {
            *word = read_word_le(data, &mut cursor);
        }

        if partial != 0 {
            self.block[full_words] = read_partial_word_le(data, &mut cursor, partial);
        }

        cursor
    }

    /// state[i] ^= block[i] + ROTL(block[i + 1], i)
    fn mix_block(&mut self) {
        for i in 0..WORDS {
            let mixed = self.block[i].wrapping_add(self.block[(i + 1) % WORDS].rotate_left(i as u32));
            self.state[i] ^= mixed;
        }

        self.block.zeroize();
    }

    /// Length whitening over words 0, 4, 8, 12
    fn whiten(&mut self, input_len: usize) {
        for i in (0..WORDS).step_by(4) {
            let shift = ((i * 5 + 7) % WORDS) + 10;
            self.state[i] ^= rotl32_native(input_len << shift, 6) as u32;
        }
    }

    /// Serialize words 0..8 as little-endian bytes
    fn finalize(&self, out: &mut [u8; HASH_LEN]) {
        for (chunk, word) in out.chunks_exact_mut(4).zip(self.state.iter()) {
            let chunk: &mut [u8; 4] = chunk
                .try_into()
                .expect("infallible: chunks_exact_mut yields 4-byte chunks");
            write_word_le(chunk, *word);
        }
    }

    #[cfg(test)]
    pub(crate) fn is_zeroized(&self) -> bool {
        self.state.iter().chain(self.block.iter()).all(|w| *w == 0)
    }
}

impl core::fmt::Debug for Qrh256State {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "Qrh256State {{ [protected] }}")
    }
}
