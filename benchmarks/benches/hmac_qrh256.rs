// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};

use qrh::{HASH_LEN, hmac_into};

fn benchmark_hmac_qrh256(c: &mut Criterion) {
    let mut group = c.benchmark_group("hmac_qrh256");

    let key = b"benchmark-key-for-hmac-qrh256";

    for len in [32, 64, 256, 1024, 16 * 1024].iter() {
        group.throughput(Throughput::Bytes(*len as u64));
        group.bench_with_input(format!("{} bytes message", len), len, |b, &len| {
            let message = vec![0x5au8; len];
            let mut tag = [0u8; HASH_LEN];

            b.iter(|| {
                hmac_into(black_box(key), black_box(&message), black_box(&mut tag))
                    .expect("hmac failed");
            });
        });
    }
    group.finish();
}

fn benchmark_hmac_qrh256_long_key(c: &mut Criterion) {
    // Keys past the block length take the extra key hash
    let key = [0x0bu8; 128];
    let message = vec![0x5au8; 256];
    let mut tag = [0u8; HASH_LEN];

    c.bench_function("hmac_qrh256 128-byte key", |b| {
        b.iter(|| {
            hmac_into(black_box(&key), black_box(&message), black_box(&mut tag))
                .expect("hmac failed");
        });
    });
}

criterion_group!(benches, benchmark_hmac_qrh256, benchmark_hmac_qrh256_long_key);
criterion_main!(benches);
