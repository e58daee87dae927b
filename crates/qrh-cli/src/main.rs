// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! `qrh`: QRH-256 digests and HMAC-QRH256 tags from the command line, plus
//! throughput and avalanche diagnostics.
//!
//! Digests and reports go to stdout, logs to stderr.

mod cli;
mod commands;
mod hex;
mod logging;
mod stats;


use clap::Parser;

use crate::cli::Cli;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init_tracing(cli.verbose);

    commands::run(cli.command)
}
