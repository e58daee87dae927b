// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

// Build script for QRH-256 round configuration
//
// Round counts are fixed at compile time. Any non-default value defines a
// different hash variant, so golden-vector tests are gated on
// `qrh_default_rounds`.

use std::env;
use std::fs;
use std::path::PathBuf;

const DEFAULT_HALF_ROUNDS: usize = 4;
const DEFAULT_MATRIX_ROUNDS: usize = 2;
const DEFAULT_DIFFUSIONS: usize = 4;

fn read_rounds(var: &str, default: usize) -> usize {
    println!("cargo:rerun-if-env-changed={var}");

    match env::var(var) {
        Ok(raw) => raw
            .trim()
            .parse()
            .unwrap_or_else(|_| panic!("{var} must be an unsigned integer, got {raw:?}")),
        Err(_) => default,
    }
}

fn main() {
    // Declare custom cfg to suppress unexpected_cfgs warnings
    println!("cargo:rustc-check-cfg=cfg(qrh_default_rounds)");
    println!("cargo:rerun-if-changed=build.rs");

    let half_rounds = read_rounds("QRH_HALF_ROUNDS", DEFAULT_HALF_ROUNDS);
    let matrix_rounds = read_rounds("QRH_MATRIX_ROUNDS", DEFAULT_MATRIX_ROUNDS);
    let diffusions = read_rounds("QRH_DIFFUSIONS", DEFAULT_DIFFUSIONS);

    if half_rounds == DEFAULT_HALF_ROUNDS
        && matrix_rounds == DEFAULT_MATRIX_ROUNDS
        && diffusions == DEFAULT_DIFFUSIONS
    {
        println!("cargo:rustc-cfg=qrh_default_rounds");
    }

    let out_dir = PathBuf::from(env::var("OUT_DIR").expect("cargo always sets OUT_DIR"));
    let generated = format!(
        "pub(crate) const HALF_ROUNDS: usize = {half_rounds};\n\
         pub(crate) const MATRIX_ROUNDS: usize = {matrix_rounds};\n\
         pub(crate) const DIFFUSIONS: usize = {diffusions};\n"
    );

    fs::write(out_dir.join("rounds.rs"), generated).expect("failed to write rounds.rs");
}
