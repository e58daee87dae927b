// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use std::fs;
use std::hint::black_box;
use std::io::{self, Read};
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result, bail};
use qrh::{HASH_LEN, ROUNDS};
use rand::{RngCore, SeedableRng, rngs::StdRng};
use tracing::{debug, info, warn};
use zeroize::Zeroizing;

use crate::cli::{AvalancheArgs, BenchArgs, Command, HashArgs, HmacArgs, InputArgs};
use crate::hex;
use crate::stats::{AvalancheReport, Throughput, bit_difference, percent_of_bits};

const FOX: &[u8] = b"The quick brown fox jumps over the lazy dog";
const FOX_DOF: &[u8] = b"The quick brown fox jumps over the lazy dof";

const BENCH_KEY: &[u8] = b"qrh-bench-key";

pub fn run(command: Command) -> Result<()> {
    match command {
        Command::Hash(args) => hash(args),
        Command::Hmac(args) => hmac(args),
        Command::Bench(args) => bench(args),
        Command::Avalanche(args) => avalanche(args),
    }
}

#[derive(Debug, PartialEq, Eq)]
pub(crate) enum Input {
    Text(String),
    File(PathBuf),
    Stdin,
}

impl Input {
    fn name(&self) -> String {
        match self {
            Input::Text(text) => format!("{:?}", text),
            Input::File(path) => path.display().to_string(),
            Input::Stdin => "-".to_string(),
        }
    }

    fn read(&self) -> io::Result<Vec<u8>> {
        match self {
            Input::Text(text) => Ok(text.as_bytes().to_vec()),
            Input::File(path) => fs::read(path),
            Input::Stdin => {
                let mut buf = Vec::new();
                io::stdin().lock().read_to_end(&mut buf)?;
                Ok(buf)
            }
        }
    }
}

pub(crate) fn collect_inputs(args: InputArgs) -> Vec<Input> {
    let mut inputs = Vec::with_capacity(args.files.len() + 1);

    if let Some(text) = args.text {
        inputs.push(Input::Text(text));
    }
    for path in args.files {
        if path.as_os_str() == "-" {
            inputs.push(Input::Stdin);
        } else {
            inputs.push(Input::File(path));
        }
    }

    if inputs.is_empty() {
        inputs.push(Input::Stdin);
    }

    inputs
}

/// Print `<hex>  <name>` for every input. Unreadable inputs are skipped and
/// turn the final result into an error.
fn digest_inputs<F>(inputs: Vec<Input>, mut digest: F) -> Result<()>
where
    F: FnMut(&[u8], &mut [u8; HASH_LEN]) -> Result<()>,
{
    let mut out = [0u8; HASH_LEN];
    let mut skipped = 0usize;
    let mut total_bytes = 0u64;

    for input in &inputs {
        let name = input.name();
        let data = match input.read() {
            Ok(data) => data,
            Err(err) => {
                warn!(input = %name, error = %err, "skipping unreadable input");
                skipped += 1;
                continue;
            }
        };

        debug!(input = %name, bytes = data.len(), "read input");
        digest(&data, &mut out)?;
        println!("{}  {}", hex::encode(&out), name);

        total_bytes += data.len() as u64;
    }

    info!(
        inputs = inputs.len() - skipped,
        bytes = total_bytes,
        "processed inputs"
    );

    if skipped > 0 {
        bail!("{} input(s) could not be read", skipped);
    }

    Ok(())
}

fn hash(args: HashArgs) -> Result<()> {
    digest_inputs(collect_inputs(args.input), |data, out| {
        qrh::hash(data, out);
        Ok(())
    })
}

fn hmac(args: HmacArgs) -> Result<()> {
    let key = Zeroizing::new(if args.key_hex {
        hex::decode(&args.key).context("--key is not valid hex")?
    } else {
        args.key.as_bytes().to_vec()
    });
    debug!(key_len = key.len(), "HMAC key ready");

    digest_inputs(collect_inputs(args.input), |data, out| {
        qrh::hmac_into(&key, data, out).context("HMAC-QRH256 failed")
    })
}

fn measure<F>(iterations: usize, bytes: u64, mut op: F) -> Result<Throughput>
where
    F: FnMut() -> Result<()>,
{
    let start = Instant::now();
    for _ in 0..iterations {
        op()?;
    }
    let throughput = Throughput::new(bytes, start.elapsed());

    debug!(elapsed = ?throughput.elapsed(), iterations, "measured");
    Ok(throughput)
}

fn bench(args: BenchArgs) -> Result<()> {
    if args.iterations == 0 {
        bail!("--iterations must be at least 1");
    }

    let data: Vec<u8> = (0..args.size).map(|i| i as u8).collect();
    let bytes = (args.size as u64).saturating_mul(args.iterations as u64);
    let mut out = [0u8; HASH_LEN];

    info!(
        rounds = %ROUNDS,
        size = args.size,
        iterations = args.iterations,
        "benchmarking"
    );

    let hash_rate = measure(args.iterations, bytes, || {
        qrh::hash(black_box(&data), black_box(&mut out));
        Ok(())
    })?;
    let hmac_rate = measure(args.iterations, bytes, || {
        qrh::hmac_into(BENCH_KEY, black_box(&data), black_box(&mut out))
            .context("HMAC-QRH256 failed")
    })?;

    println!("hash  {}", hash_rate);
    println!("hmac  {}", hmac_rate);

    Ok(())
}

fn avalanche(args: AvalancheArgs) -> Result<()> {
    if args.len == 0 {
        bail!("--len must be at least 1 byte");
    }

    let mut rng = StdRng::seed_from_u64(args.seed);
    let mut report = AvalancheReport::default();
    let mut message = vec![0u8; args.len];
    let mut base = [0u8; HASH_LEN];
    let mut flipped = [0u8; HASH_LEN];

    for sample in 0..args.samples {
        rng.fill_bytes(&mut message);
        qrh::hash(&message, &mut base);

        for bit in 0..args.len * 8 {
            message[bit / 8] ^= 1 << (bit % 8);
            qrh::hash(&message, &mut flipped);
            message[bit / 8] ^= 1 << (bit % 8);

            report.record(percent_of_bits(bit_difference(&base, &flipped), HASH_LEN));
        }

        debug!(sample, trials = report.trials(), "sampled message");
    }

    info!(rounds = %ROUNDS, seed = args.seed, len = args.len, "avalanche finished");
    println!("random   {}", report);

    let mut fox = [0u8; HASH_LEN];
    let mut fox_dof = [0u8; HASH_LEN];
    qrh::hash(FOX, &mut fox);
    qrh::hash(FOX_DOF, &mut fox_dof);

    let changed = bit_difference(&fox, &fox_dof);
    println!(
        "dog/dof  {} of {} bits ({:.2}%)",
        changed,
        HASH_LEN * 8,
        percent_of_bits(changed, HASH_LEN)
    );

    Ok(())
}
