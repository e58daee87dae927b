// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! State permutation: half rounds, matrix rounds, diffusion sweeps.

use core::fmt;

use crate::consts::{DIFFUSIONS, HALF_ROUNDS, MATRIX_ROUNDS, WORDS};
use crate::mix::{round_matrix, round2};

/// Pairwise mixing schedule of one half round: four layers of four pairs,
/// the last layer wrapping 12..15 back onto 1, 2, 3, 0.
const HALF_ROUND_PAIRS: [(usize, usize); WORDS] = [
    (0, 5),
    (1, 6),
    (2, 7),
    (3, 4),
    (4, 9),
    (5, 10),
    (6, 11),
    (7, 8),
    (8, 13),
    (9, 14),
    (10, 15),
    (11, 12),
    (12, 1),
    (13, 2),
    (14, 3),
    (15, 0),
];

const COLUMNS: [[usize; 4]; 4] = [[0, 4, 8, 12], [1, 5, 9, 13], [2, 6, 10, 14], [3, 7, 11, 15]];

const DIAGONALS: [[usize; 4]; 4] = [[0, 5, 10, 15], [1, 6, 11, 12], [2, 7, 8, 13], [3, 4, 9, 14]];

/// Round counts of a QRH-256 variant.
///
/// Counts are fixed when the crate is built (`QRH_HALF_ROUNDS`,
/// `QRH_MATRIX_ROUNDS`, `QRH_DIFFUSIONS`). Every combination is a distinct
/// hash function. Matrix rounds dominate the cost of a block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rounds {
    /// Pairwise half rounds per block
    pub half_rounds: usize,
    /// Column + diagonal matrix rounds per block
    pub matrix_rounds: usize,
    /// Diffusion sweeps per block
    pub diffusions: usize,
}

/// The round counts this build was compiled with
pub const ROUNDS: Rounds = Rounds {
    half_rounds: HALF_ROUNDS,
    matrix_rounds: MATRIX_ROUNDS,
    diffusions: DIFFUSIONS,
};

impl fmt::Display for Rounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} half / {} matrix / {} diffusion",
            self.half_rounds, self.matrix_rounds, self.diffusions
        )
    }
}

/// Diffusion sweep.
///
/// Updates run in index order on the live array, so word `i` sees the
/// already-updated values of any lower index it reads.
#[inline(always)]
pub(crate) fn diffuse(words: &mut [u32; WORDS]) {
    for i in 0..WORDS {
        words[i] ^= words[(i + 7) % WORDS].rotate_left(11);
        words[i] = words[i].wrapping_add(words[(i + 3) % WORDS].rotate_left(17));
    }
}

/// Run the full permutation network once
pub(crate) fn run_state(state: &mut [u32; WORDS], rounds: &Rounds) {
    for _ in 0..rounds.half_rounds {
        for &(a, b) in HALF_ROUND_PAIRS.iter() {
            round2(state, a, b);
        }
    }

    for _ in 0..rounds.matrix_rounds {
        for &[a, b, c, d] in COLUMNS.iter() {
            round_matrix(state, a, b, c, d);
        }

        for &[a, b, c, d] in DIAGONALS.iter() {
            round_matrix(state, a, b, c, d);
        }
    }

    for _ in 0..rounds.diffusions {
        diffuse(state);
    }
}
