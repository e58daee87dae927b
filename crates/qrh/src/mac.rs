// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use alloc::boxed::Box;

use subtle::ConstantTimeEq;
use zeroize::Zeroize;

use crate::buffer::try_alloc_digest;
use crate::consts::HASH_LEN;
use crate::error::QrhError;
use crate::hmac::HmacQrh256State;

/// HMAC-QRH256 tag of `message` under `key`, written into `out`.
///
/// Keys longer than the 64-byte block are hashed first; shorter keys are
/// zero-padded.
///
/// # Errors
///
/// [`QrhError::AllocationFailed`] if the inner message buffer cannot be
/// allocated.
pub fn hmac_into(key: &[u8], message: &[u8], out: &mut [u8; HASH_LEN]) -> Result<(), QrhError> {
    let mut state = HmacQrh256State::new();
    state.mac(key, message, out)
}

/// HMAC-QRH256 tag of `message` under `key` in a freshly allocated buffer.
///
/// # Errors
///
/// [`QrhError::AllocationFailed`] if the tag or the inner message buffer
/// cannot be allocated.
///
/// # Example
///
/// ```
/// let tag = qrh::hmac(b"key", b"message").expect("Failed to hmac(..)");
/// assert_eq!(tag.len(), qrh::HASH_LEN);
/// ```
pub fn hmac(key: &[u8], message: &[u8]) -> Result<Box<[u8; HASH_LEN]>, QrhError> {
    let mut tag = try_alloc_digest()?;
    hmac_into(key, message, &mut tag)?;

    Ok(tag)
}

/// Recompute the tag of `message` under `key` and compare it with `tag`.
///
/// The comparison is constant-time over the tag bytes. A `tag` whose length
/// is not [`HASH_LEN`] never matches.
///
/// # Errors
///
/// [`QrhError::AllocationFailed`] if the inner message buffer cannot be
/// allocated.
pub fn verify_hmac(key: &[u8], message: &[u8], tag: &[u8]) -> Result<bool, QrhError> {
    let mut expected = [0u8; HASH_LEN];
    hmac_into(key, message, &mut expected)?;

    let matches = bool::from(expected[..].ct_eq(tag));
    expected.zeroize();

    Ok(matches)
}
