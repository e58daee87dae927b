// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Little-endian word codec.
//!
//! Readers take the input buffer plus a cursor and advance the cursor by the
//! number of bytes consumed.

/// Read 4 bytes at `*offset` as a little-endian word, advance `offset` by 4.
#[inline(always)]
pub(crate) fn read_word_le(buf: &[u8], offset: &mut usize) -> u32 {
    let bytes: [u8; 4] = buf[*offset..*offset + 4]
        .try_into()
        .expect("infallible: word slice is exactly 4 bytes");
    *offset += 4;

    u32::from_le_bytes(bytes)
}

/// Read the trailing `len` (1..=3) bytes at `*offset` as the low bytes of a
/// little-endian word. Missing high-order bytes are zero.
#[inline(always)]
pub(crate) fn read_partial_word_le(buf: &[u8], offset: &mut usize, len: usize) -> u32 {
    debug_assert!((1..4).contains(&len), "partial word must be 1..=3 bytes");

    let mut word = 0u32;
    for (i, byte) in buf[*offset..*offset + len].iter().enumerate() {
        word |= u32::from(*byte) << (8 * i);
    }
    *offset += len;

    word
}

/// Write `value` as 4 little-endian bytes
#[inline(always)]
pub(crate) fn write_word_le(out: &mut [u8; 4], value: u32) {
    *out = value.to_le_bytes();
}

/// 32-bit rotate pattern `(v << n) | (v >> (32 - n))` evaluated on a native
/// `usize`.
///
/// Length-derived values go through this instead of `u32::rotate_left`: on
/// 64-bit targets the bits shifted above position 31 are kept and fold back
/// in, which changes the low word once lengths grow.
#[inline(always)]
pub(crate) fn rotl32_native(value: usize, n: u32) -> usize {
    debug_assert!((1..32).contains(&n));

    (value << n) | (value >> (32 - n))
}
