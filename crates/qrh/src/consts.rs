// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

/// QRH-256 output size in bytes
pub const HASH_LEN: usize = 32;

/// QRH-256 block size in bytes
pub const BLOCK_LEN: usize = 64;

/// Number of 32-bit words in the state and in a block
pub const WORDS: usize = 16;

/// HMAC inner pad byte
pub(crate) const IPAD: u8 = 0x36;

/// HMAC outer pad byte
pub(crate) const OPAD: u8 = 0x5c;

/// Initial state and schema table.
///
/// The first eight words are the SHA-256 H(0) values, the rest are taken from
/// the SHA-224 initial values.
pub(crate) static CONSTANTS: [u32; WORDS] = [
    0x6A09E667, 0xBB67AE85, 0x3C6EF372, 0xA54FF53A, 0x510E527F, 0x9B05688C, 0x1F83D9AB, 0x5BE0CD19,
    0xC1059ED8, 0x367CD507, 0x3070DD17, 0xF70E5939, 0xFFC00B31, 0x68581511, 0x64F98FA7, 0xBEFA4FA4,
];

// HALF_ROUNDS, MATRIX_ROUNDS, DIFFUSIONS (generated by build.rs)
include!(concat!(env!("OUT_DIR"), "/rounds.rs"));
