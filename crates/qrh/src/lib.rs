// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! QRH-256 hash function and HMAC-QRH256
//!
//! QRH-256 maps any byte string to a 32-byte digest. Each 64-byte block is
//! mixed into a 16-word state, tagged with the block offset and message
//! length, and run through a fixed permutation of pairwise, matrix and
//! diffusion rounds. HMAC-QRH256 is the RFC 2104 composition over it.
//!
//! Round counts are a build-time choice, see [`Rounds`]. QRH-256 is an
//! experimental construction: it makes no constant-time claims and has no
//! published cryptanalysis.
//!
//! References:
//! - RFC 2104: HMAC: Keyed-Hashing for Message Authentication
//!   <https://datatracker.ietf.org/doc/html/rfc2104>
//!
//! ```
//! let mut digest = [0u8; qrh::HASH_LEN];
//! qrh::hash(b"The quick brown fox jumps over the lazy dog", &mut digest);
//!
//! let tag = qrh::hmac(b"key", b"message").expect("Failed to hmac(..)");
//! assert!(qrh::verify_hmac(b"key", b"message", &tag[..]).expect("Failed to verify_hmac(..)"));
//! ```

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

extern crate alloc;

#[cfg(test)]
mod tests;

mod buffer;
mod consts;
mod error;
mod hash;
mod hmac;
mod inject;
mod mac;
mod mix;
mod permute;
mod qrh256;
mod word;

pub use consts::{BLOCK_LEN, HASH_LEN, WORDS};
pub use error::QrhError;
pub use hash::{hash, hash_alloc};
pub use mac::{hmac, hmac_into, verify_hmac};
pub use permute::{ROUNDS, Rounds};
pub use qrh256::Qrh256State;
