// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::word::{read_partial_word_le, read_word_le, rotl32_native, write_word_le};

#[test]
fn test_read_word_le_advances_offset() {
    let buf = [0x01, 0x02, 0x03, 0x04, 0xaa, 0xbb, 0xcc, 0xdd];
    let mut offset = 0;

    assert_eq!(read_word_le(&buf, &mut offset), 0x0403_0201);
    assert_eq!(offset, 4);

    assert_eq!(read_word_le(&buf, &mut offset), 0xddcc_bbaa);
    assert_eq!(offset, 8);
}

#[test]
fn test_read_partial_word_le_zero_fills_high_bytes() {
    // Buffers end exactly at the partial word, so any over-read would panic
    let cases: [(&[u8], u32); 3] = [
        (&[0xab], 0x0000_00ab),
        (&[0xab, 0xcd], 0x0000_cdab),
        (&[0xab, 0xcd, 0xef], 0x00ef_cdab),
    ];

    for (buf, expected) in cases {
        let mut offset = 0;
        let word = read_partial_word_le(buf, &mut offset, buf.len());

        assert_eq!(word, expected, "partial word mismatch for {buf:02x?}");
        assert_eq!(offset, buf.len());
    }
}

#[test]
fn test_read_partial_word_le_at_offset() {
    let buf = [0xff, 0xff, 0xff, 0xff, 0x11, 0x22];
    let mut offset = 4;

    assert_eq!(read_partial_word_le(&buf, &mut offset, 2), 0x2211);
    assert_eq!(offset, 6);
}

#[test]
fn test_write_word_le() {
    let mut out = [0u8; 4];
    write_word_le(&mut out, 0x6a09_e667);

    assert_eq!(out, [0x67, 0xe6, 0x09, 0x6a]);
}

#[test]
fn test_rotl32_native_matches_u32_rotate_for_small_values() {
    for value in [0usize, 1, 0x1234, 0xffff, 0x7fff_ffff] {
        for n in [6u32, 15] {
            let expected = (value as u32).rotate_left(n);
            let native = rotl32_native(value, n) as u32;

            // Only agree while no bit reaches past position 31
            if (value as u64) << n <= u64::from(u32::MAX) {
                assert_eq!(native, expected, "value={value:#x}, n={n}");
            }
        }
    }
}

#[cfg(target_pointer_width = "64")]
#[test]
fn test_rotl32_native_keeps_high_bits() {
    // 1 << 40 has no bits inside the low word, yet the right shift folds it back
    let value = 1usize << 40;

    assert_eq!(rotl32_native(value, 6) as u32, 1 << 14);
    assert_eq!((value as u32).rotate_left(6), 0);
}
