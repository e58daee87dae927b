// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! HMAC-QRH256 per the RFC 2104 composition

use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

use crate::buffer::try_with_capacity;
use crate::consts::{BLOCK_LEN, HASH_LEN, IPAD, OPAD};
use crate::error::QrhError;
use crate::qrh256::Qrh256State;

/// HMAC-QRH256 state with all intermediate buffers.
///
/// All sensitive data lives in this struct for guaranteed zeroization on drop.
#[derive(Zeroize, ZeroizeOnDrop)]
pub(crate) struct HmacQrh256State {
    /// Key copied in, or QRH-256(key) when key > BLOCK_LEN, zero-padded
    key_block: [u8; BLOCK_LEN],
    /// K ⊕ ipad (0x36 repeated)
    k_ipad: [u8; BLOCK_LEN],
    /// K ⊕ opad (0x5c repeated)
    k_opad: [u8; BLOCK_LEN],
    /// Inner hash result: QRH256(K ⊕ ipad || message)
    inner_hash: [u8; HASH_LEN],
    /// Outer message: K ⊕ opad || inner_hash
    outer_msg: [u8; BLOCK_LEN + HASH_LEN],
    /// Hash state shared by the key, inner and outer hashes
    qrh: Qrh256State,
}

impl HmacQrh256State {
    /// Create new HMAC-QRH256 state
    pub fn new() -> Self {
        Self {
            key_block: [0u8; BLOCK_LEN],
            k_ipad: [0u8; BLOCK_LEN],
            k_opad: [0u8; BLOCK_LEN],
            inner_hash: [0u8; HASH_LEN],
            outer_msg: [0u8; BLOCK_LEN + HASH_LEN],
            qrh: Qrh256State::new(),
        }
    }

    /// Fill `key_block` from `key`
    fn derive_key_block(&mut self, key: &[u8]) {
        // Prevent stale-bytes window
        self.key_block.zeroize();

        if key.len() > BLOCK_LEN {
            self.qrh.hash(key, &mut self.inner_hash);
            self.key_block[..HASH_LEN].copy_from_slice(&self.inner_hash);
            self.inner_hash.zeroize();
        } else {
            self.key_block[..key.len()].copy_from_slice(key);
        }
    }

    /// HMAC-QRH256 of `data` under `key`, written into `out`
    pub fn mac(&mut self, key: &[u8], data: &[u8], out: &mut [u8; HASH_LEN]) -> Result<(), QrhError> {
        self.derive_key_block(key);

        for ((ipad, opad), k) in self
            .k_ipad
            .iter_mut()
            .zip(self.k_opad.iter_mut())
            .zip(self.key_block.iter())
        {
            *ipad = k ^ IPAD;
            *opad = k ^ OPAD;
        }
        self.key_block.zeroize();

        // Inner hash: QRH256(k_ipad || data)
        let inner_len = BLOCK_LEN
            .checked_add(data.len())
            .ok_or(QrhError::AllocationFailed {
                requested: usize::MAX,
            })?;
        let mut inner_msg = Zeroizing::new(try_with_capacity(inner_len)?);
        inner_msg.extend_from_slice(&self.k_ipad);
        inner_msg.extend_from_slice(data);

        self.qrh.hash(&inner_msg, &mut self.inner_hash);
        self.k_ipad.zeroize();

        // Outer hash: QRH256(k_opad || inner_hash) -> out
        self.outer_msg[..BLOCK_LEN].copy_from_slice(&self.k_opad);
        self.outer_msg[BLOCK_LEN..].copy_from_slice(&self.inner_hash);
        self.qrh.hash(&self.outer_msg, out);

        // Zeroize HMAC intermediates immediately
        self.zeroize();

        Ok(())
    }

    #[cfg(test)]
    pub(crate) fn key_block_for(&mut self, key: &[u8]) -> [u8; BLOCK_LEN] {
        self.derive_key_block(key);
        let key_block = self.key_block;
        self.zeroize();

        key_block
    }

    #[cfg(test)]
    pub(crate) fn is_zeroized(&self) -> bool {
        self.key_block.iter().all(|b| *b == 0)
            && self.k_ipad.iter().all(|b| *b == 0)
            && self.k_opad.iter().all(|b| *b == 0)
            && self.inner_hash.iter().all(|b| *b == 0)
            && self.outer_msg.iter().all(|b| *b == 0)
            && self.qrh.is_zeroized()
    }
}
