// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use alloc::boxed::Box;

use crate::buffer::try_alloc_digest;
use crate::consts::HASH_LEN;
use crate::error::QrhError;
use crate::qrh256::Qrh256State;

/// QRH-256 digest of `input`, written into `out`.
///
/// Never fails: any input length is accepted, including zero.
///
/// # Example
///
/// ```
/// let mut digest = [0u8; qrh::HASH_LEN];
/// qrh::hash(b"abc", &mut digest);
/// ```
pub fn hash(input: &[u8], out: &mut [u8; HASH_LEN]) {
    let mut state = Qrh256State::new();
    state.hash(input, out);
}

/// QRH-256 digest of `input` in a freshly allocated buffer.
///
/// # Errors
///
/// [`QrhError::AllocationFailed`] if the digest buffer cannot be allocated.
pub fn hash_alloc(input: &[u8]) -> Result<Box<[u8; HASH_LEN]>, QrhError> {
    let mut digest = try_alloc_digest()?;
    hash(input, &mut digest);

    Ok(digest)
}
