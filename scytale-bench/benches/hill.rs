//! Hill Cipher Benchmarks
//!
//! Benchmarks key inversion and block throughput using the Criterion framework.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::rngs::StdRng;
use rand::SeedableRng;
use scytale_bench::{lowercase_message, MESSAGE_LENGTHS};
use scytale_core::Cipher;
use scytale_hill::{Hill, HillKey, KeyMatrix};

/// Benchmark key construction and inversion.
fn bench_key(c: &mut Criterion) {
    let mut group = c.benchmark_group("Hill Key");

    group.throughput(Throughput::Elements(1));

    group.bench_function("from_key", |b| {
        b.iter(|| black_box(KeyMatrix::from_key(black_box("gybnqkurp")).unwrap()))
    });

    let matrix = KeyMatrix::from_key("gybnqkurp").unwrap();
    group.bench_function("inverse", |b| {
        b.iter(|| black_box(black_box(&matrix).inverse().unwrap()))
    });

    group.bench_function("generate", |b| {
        let mut rng = StdRng::from_seed([1u8; 32]);
        b.iter(|| black_box(HillKey::generate(&mut rng)))
    });

    group.finish();
}

/// Benchmark encryption and decryption across message sizes.
fn bench_transform(c: &mut Criterion) {
    let mut group = c.benchmark_group("Hill Transform");
    let key = HillKey::new("gybnqkurp").unwrap();

    for len in MESSAGE_LENGTHS {
        let message = lowercase_message(len);
        let ciphertext = Hill::encrypt(&key, &message).unwrap();
        group.throughput(Throughput::Bytes(len as u64));

        group.bench_with_input(BenchmarkId::new("encrypt", len), &message, |b, m| {
            b.iter(|| black_box(Hill::encrypt(&key, m).unwrap()))
        });

        group.bench_with_input(BenchmarkId::new("decrypt", len), &ciphertext, |b, m| {
            b.iter(|| black_box(Hill::decrypt(&key, m).unwrap()))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_key, bench_transform);
criterion_main!(benches);
