// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use alloc::boxed::Box;
use alloc::vec::Vec;

use crate::consts::HASH_LEN;
use crate::error::QrhError;

/// Empty vector with room for exactly `capacity` bytes
pub(crate) fn try_with_capacity(capacity: usize) -> Result<Vec<u8>, QrhError> {
    let mut buf = Vec::new();
    buf.try_reserve_exact(capacity)
        .map_err(|_| QrhError::AllocationFailed {
            requested: capacity,
        })?;

    Ok(buf)
}

/// Zero-filled, heap-owned digest buffer
pub(crate) fn try_alloc_digest() -> Result<Box<[u8; HASH_LEN]>, QrhError> {
    let mut buf = try_with_capacity(HASH_LEN)?;
    buf.resize(HASH_LEN, 0);

    let digest: Box<[u8; HASH_LEN]> = buf
        .into_boxed_slice()
        .try_into()
        .expect("infallible: buffer holds exactly HASH_LEN bytes");

    Ok(digest)
}
