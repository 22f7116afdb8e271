// Copyright 2026 Logan Magee
//
// SPDX-License-Identifier: LicenseRef-Proprietary

#![allow(missing_docs)]

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};

const SIZES: [usize; 3] = [1 << 10, 1 << 14, 1 << 18];
const FILLER: &[u8] = b"the quick brown fox jumps over the lazy dog. ";
const PRESENT: &[u8] = b"sphinx of black quartz";
const ABSENT: &[u8] = b"judge my vow";

type Finder = fn(&[u8], &[u8]) -> Option<usize>;

const FINDERS: [(&str, Finder); 3] = [
    ("boyer-moore", substr::boyer_moore::find),
    ("kmp", substr::kmp::find),
    ("rabin-karp", substr::rabin_karp::find),
];

/// Builds a corpus of exactly `size` bytes with `PRESENT` planted at the end
/// so the positive case still scans nearly the whole text.
fn corpus(size: usize) -> Vec<u8> {
    let mut text = Vec::with_capacity(size + FILLER.len());
    while text.len() < size {
        text.extend_from_slice(FILLER);
    }
    text.truncate(size);

    let at = size - PRESENT.len();
    text[at..].copy_from_slice(PRESENT);

    text
}

fn find_present(c: &mut Criterion) {
    let mut group = c.benchmark_group("find_present");

    for size in SIZES {
        let text = corpus(size);
        group.throughput(Throughput::Bytes(size as u64));

        for (name, finder) in FINDERS {
            group.bench_with_input(BenchmarkId::new(name, size), &text, |b, text| {
                b.iter(|| finder(text, PRESENT));
            });
        }
    }

    group.finish();
}

fn find_absent(c: &mut Criterion) {
    let mut group = c.benchmark_group("find_absent");

    for size in SIZES {
        let text = corpus(size);
        group.throughput(Throughput::Bytes(size as u64));

        for (name, finder) in FINDERS {
            group.bench_with_input(BenchmarkId::new(name, size), &text, |b, text| {
                b.iter(|| finder(text, ABSENT));
            });
        }
    }

    group.finish();
}

criterion_group!(benches, find_present, find_absent);
criterion_main!(benches);
