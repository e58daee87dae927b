// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Minimal lowercase hex codec for digests and `--key-hex`

use anyhow::{Context, Result, bail};

pub fn encode(data: &[u8]) -> String {
    data.iter().map(|b| format!("{:02x}", b)).collect()
}

/// Decode a hex string, upper or lower case, no separators
pub fn decode(hex: &str) -> Result<Vec<u8>> {
    let digits = hex.as_bytes();
    if digits.len() % 2 != 0 {
        bail!("odd number of hex digits ({})", digits.len());
    }

    digits
        .chunks_exact(2)
        .map(|pair| -> Result<u8> { Ok((nibble(pair[0])? << 4) | nibble(pair[1])?) })
        .collect()
}

fn nibble(digit: u8) -> Result<u8> {
    char::from(digit)
        .to_digit(16)
        .map(|d| d as u8)
        .with_context(|| format!("invalid hex digit {:?}", char::from(digit)))
}
