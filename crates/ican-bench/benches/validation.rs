//! Validation benchmarks: checksum only, full validation, and BCAN checks.
#![allow(clippy::expect_used)]

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use ican_bench::{SizeTier, corrupt_check_digits, generate_codes};
use ican_core::{CryptoFilter, countries, is_valid, is_valid_checksum};

fn bench_validation(c: &mut Criterion) {
    let mut group = c.benchmark_group("validation");

    for (name, tier) in [("S", SizeTier::Small), ("M", SizeTier::Medium)] {
        let codes = generate_codes(&tier.config(42));
        let corrupted: Vec<String> = codes.iter().map(|c| corrupt_check_digits(c)).collect();

        group.throughput(Throughput::Elements(codes.len() as u64));

        group.bench_with_input(BenchmarkId::new("checksum", name), &codes, |b, codes| {
            b.iter(|| codes.iter().filter(|c| is_valid_checksum(c)).count());
        });

        group.bench_with_input(BenchmarkId::new("full", name), &codes, |b, codes| {
            b.iter(|| codes.iter().filter(|c| is_valid(c, CryptoFilter::Off)).count());
        });

        group.bench_with_input(
            BenchmarkId::new("full_corrupted", name),
            &corrupted,
            |b, codes| {
                b.iter(|| codes.iter().filter(|c| is_valid(c, CryptoFilter::Off)).count());
            },
        );

        group.bench_with_input(BenchmarkId::new("any_crypto", name), &codes, |b, codes| {
            b.iter(|| codes.iter().filter(|c| is_valid(c, CryptoFilter::AnyCrypto)).count());
        });
    }
    group.finish();
}

fn bench_examples(c: &mut Criterion) {
    let examples: Vec<&str> = countries().iter().map(|s| s.example()).collect();
    let mut group = c.benchmark_group("registry_examples");
    group.throughput(Throughput::Elements(examples.len() as u64));
    group.bench_function("validate_all", |b| {
        b.iter(|| {
            examples
                .iter()
                .filter(|e| is_valid(e, CryptoFilter::Off))
                .count()
        });
    });
    group.finish();
}

criterion_group!(benches, bench_validation, bench_examples);
criterion_main!(benches);
