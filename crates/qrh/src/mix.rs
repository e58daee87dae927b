// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Mixing primitives over 2, 3 and 4 state words.
//!
//! Every primitive addresses its words by index into the owned state, loads
//! them into locals, mixes, and stores them back. Indices passed to one call
//! are always distinct.

use crate::consts::WORDS;

/// Pairwise round on `s[a]`, `s[b]`
#[inline(always)]
pub(crate) fn round2(s: &mut [u32; WORDS], a: usize, b: usize) {
    let mut x = s[a];
    let mut y = s[b];

    x = x.wrapping_add(y | x);
    y = y.wrapping_add(y | x);

    x = x.wrapping_add(x.rotate_left(13));
    y = y.wrapping_add(y.rotate_left(14));

    y ^= y.rotate_left(15);
    x = x.wrapping_add(x.rotate_left(26));

    x = x.wrapping_add(x.rotate_left(11));
    y = y.wrapping_add(y.rotate_left(10));

    y ^= x.wrapping_add(y).rotate_left(23);
    x ^= y.wrapping_add(x).rotate_left(10);

    s[a] = x;
    s[b] = y;
}

/// Triple mix: each word accumulates the other two, then rotate-and-add.
#[inline(always)]
pub(crate) fn add3(s: &mut [u32; WORDS], a: usize, b: usize, c: usize) {
    let mut x = s[a];
    let mut y = s[b];
    let mut z = s[c];

    x = x.wrapping_add(z.wrapping_add(y));
    y = y.wrapping_add(x.wrapping_add(z));
    z = z.wrapping_add(x.wrapping_add(y));

    x = x.wrapping_add(z.rotate_left(19));
    y = y.wrapping_add(x.rotate_left(13));
    z = z.wrapping_add(y.rotate_left(8));

    s[a] = x;
    s[b] = y;
    s[c] = z;
}

/// Quarter round on four words.
///
/// Note the third and fourth steps overwrite `b` and `d` with rotations of
/// the *other* word (`d` and `b`).
#[inline(always)]
pub(crate) fn round4(s: &mut [u32; WORDS], a: usize, b: usize, c: usize, d: usize) {
    let mut w = s[a];
    let mut x = s[b];
    let mut y = s[c];
    let mut z = s[d];

    w = w.wrapping_add(x);
    x ^= z;
    x = x.rotate_left(9);
    w = w.rotate_left(6);

    y = y.wrapping_add(z);
    w ^= y;
    z = z.rotate_left(12);
    y = y.rotate_left(13);

    w = w.wrapping_add(x);
    y ^= z;
    x = z.rotate_left(14);
    w = w.rotate_left(25);

    y = y.wrapping_add(z);
    w ^= x;
    z = x.rotate_left(23);
    y = y.rotate_left(30);

    s[a] = w;
    s[b] = x;
    s[c] = y;
    s[d] = z;
}

/// Matrix round: triple mixes wrapped around a quarter round
#[inline(always)]
pub(crate) fn round_matrix(s: &mut [u32; WORDS], a: usize, b: usize, c: usize, d: usize) {
    add3(s, b, c, a);
    add3(s, a, c, d);
    round4(s, a, b, c, d);
    add3(s, b, d, a);
    add3(s, b, c, d);
}
