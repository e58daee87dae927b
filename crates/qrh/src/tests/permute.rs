// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::consts::WORDS;
use crate::permute::{ROUNDS, Rounds, diffuse, run_state};

const DEFAULT_ROUNDS: Rounds = Rounds {
    half_rounds: 4,
    matrix_rounds: 2,
    diffusions: 4,
};

fn counting_state() -> [u32; WORDS] {
    core::array::from_fn(|i| i as u32)
}

#[test]
fn test_diffuse_vector() {
    let mut words = counting_state();
    diffuse(&mut words);

    let expected = [
        0x0006_3800, 0x0008_4001, 0x000a_4802, 0x000c_5003, 0x000e_5804, 0x0010_6005, 0x0012_6806,
        0x0014_7007, 0x0016_7808, 0x31d8_0009, 0x421a_080a, 0x525c_100b, 0x629e_180c, 0xe2c0_2019,
        0x0302_281e, 0x2344_3023,
    ];

    assert_eq!(words, expected);
}

#[test]
fn test_diffuse_is_sequential() {
    // A single bit in word 0 reaches word 9 (reads word 0 via i + 7) and
    // word 13 (via i + 3), both after word 0 was already updated.
    let mut words = [0u32; WORDS];
    words[0] = 1;
    diffuse(&mut words);

    let mut expected = [0u32; WORDS];
    expected[0] = 1;
    expected[9] = 0x0000_0800;
    expected[13] = 0x0002_0000;

    assert_eq!(words, expected);
}

#[test]
fn test_run_state_vector() {
    let mut state = counting_state();
    run_state(&mut state, &DEFAULT_ROUNDS);

    let expected = [
        0xc32f_6b1b, 0xbcd3_982c, 0xc09d_c6af, 0x7a15_6725, 0xdd08_77ba, 0x025c_7c60, 0x02a3_52a8,
        0xd97c_80c0, 0x810e_0cf1, 0x9dc9_4a85, 0x25b3_e120, 0xb298_599b, 0xb919_bf16, 0x762c_89d6,
        0xb48f_4ec2, 0xf77a_4d10,
    ];

    assert_eq!(state, expected);
}

#[test]
fn test_run_state_zero_rounds_is_identity() {
    let none = Rounds {
        half_rounds: 0,
        matrix_rounds: 0,
        diffusions: 0,
    };

    let mut state = counting_state();
    run_state(&mut state, &none);

    assert_eq!(state, counting_state());
}

#[test]
fn test_run_state_diffusion_only_matches_diffuse() {
    let only_diffusion = Rounds {
        half_rounds: 0,
        matrix_rounds: 0,
        diffusions: 1,
    };

    let mut via_run = counting_state();
    run_state(&mut via_run, &only_diffusion);

    let mut via_diffuse = counting_state();
    diffuse(&mut via_diffuse);

    assert_eq!(via_run, via_diffuse);
}

#[test]
fn test_round_counts_change_output() {
    let mut baseline = counting_state();
    run_state(&mut baseline, &DEFAULT_ROUNDS);

    let variants = [
        Rounds {
            half_rounds: 5,
            ..DEFAULT_ROUNDS
        },
        Rounds {
            matrix_rounds: 3,
            ..DEFAULT_ROUNDS
        },
        Rounds {
            diffusions: 5,
            ..DEFAULT_ROUNDS
        },
    ];

    for variant in variants {
        let mut state = counting_state();
        run_state(&mut state, &variant);

        assert_ne!(state, baseline, "variant {variant} matched the default");
    }
}

#[cfg(qrh_default_rounds)]
#[test]
fn test_default_rounds() {
    assert_eq!(ROUNDS, DEFAULT_ROUNDS);
}

#[test]
fn test_rounds_display() {
    assert_eq!(
        format!("{DEFAULT_ROUNDS}"),
        "4 half / 2 matrix / 4 diffusion"
    );
    assert_eq!(
        format!("{ROUNDS}"),
        format!(
            "{} half / {} matrix / {} diffusion",
            ROUNDS.half_rounds, ROUNDS.matrix_rounds, ROUNDS.diffusions
        )
    );
}
