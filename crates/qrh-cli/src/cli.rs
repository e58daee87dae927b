// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "qrh",
    version,
    about = "QRH-256 digests, HMAC-QRH256 tags and hash diagnostics"
)]
pub struct Cli {
    /// Log at debug level (RUST_LOG overrides)
    #[arg(short, long, global = true, action = clap::ArgAction::SetTrue)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the QRH-256 digest of each input
    Hash(HashArgs),
    /// Print the HMAC-QRH256 tag of each input
    Hmac(HmacArgs),
    /// Measure hash and HMAC throughput
    Bench(BenchArgs),
    /// Measure the share of digest bits flipped by single-bit input changes
    Avalanche(AvalancheArgs),
}

/// Inputs: `--text`, then files in order; stdin when neither is given.
#[derive(Args, Debug)]
pub struct InputArgs {
    /// Hash this string (UTF-8 bytes, no trailing newline)
    #[arg(long, value_name = "STRING")]
    pub text: Option<String>,

    /// Files to read; `-` is stdin
    #[arg(value_name = "FILE")]
    pub files: Vec<PathBuf>,
}

#[derive(Args, Debug)]
pub struct HashArgs {
    #[command(flatten)]
    pub input: InputArgs,
}

#[derive(Args, Debug)]
pub struct HmacArgs {
    /// MAC key
    #[arg(short, long, value_name = "KEY")]
    pub key: String,

    /// Decode `--key` as hex instead of taking its UTF-8 bytes
    #[arg(long, action = clap::ArgAction::SetTrue)]
    pub key_hex: bool,

    #[command(flatten)]
    pub input: InputArgs,
}

#[derive(Args, Debug)]
pub struct BenchArgs {
    /// Message size in bytes
    #[arg(long, value_name = "BYTES", default_value_t = 1024 * 1024)]
    pub size: usize,

    /// Runs per operation
    #[arg(long, value_name = "N", default_value_t = 64)]
    pub iterations: usize,
}

#[derive(Args, Debug)]
pub struct AvalancheArgs {
    /// Random messages to sample
    #[arg(long, value_name = "N", default_value_t = 64)]
    pub samples: usize,

    /// Length of each sampled message in bytes
    #[arg(long, value_name = "BYTES", default_value_t = 64)]
    pub len: usize,

    /// RNG seed, for reproducible runs
    #[arg(long, value_name = "SEED", default_value_t = 0x5152_4832)]
    pub seed: u64,
}
