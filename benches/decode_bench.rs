// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 itsakeyfut
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use ia64dec::core::decoder::{normalize, Bundle, DecodeOp, BUNDLE_SIZE};
use ia64dec::core::disassembler::Disassembler;
use std::hint::black_box;

/// Pseudo-random bundles from a fixed xorshift seed
fn random_bundles(count: usize) -> Vec<[u8; BUNDLE_SIZE]> {
    let mut state = 0x9E37_79B9_7F4A_7C15u64;
    let mut next = || {
        state ^= state << 13;
        state ^= state >> 7;
        state ^= state << 17;
        state
    };
    (0..count)
        .map(|_| ((next() as u128) << 64 | next() as u128).to_le_bytes())
        .collect()
}

fn decode_benchmark(c: &mut Criterion) {
    c.bench_function("decode_zero_bundle", |b| {
        let bytes = [0u8; BUNDLE_SIZE];
        b.iter(|| black_box(Bundle::decode(black_box(&bytes))));
    });

    let mut group = c.benchmark_group("decode_random");
    for count in [64usize, 1024] {
        let bundles = random_bundles(count);
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::from_parameter(count), &bundles, |b, bundles| {
            b.iter(|| {
                bundles
                    .iter()
                    .filter(|bytes| Bundle::decode(bytes).is_some())
                    .count()
            });
        });
    }
    group.finish();
}

fn normalize_benchmark(c: &mut Criterion) {
    c.bench_function("normalize_all", |b| {
        b.iter(|| {
            for op in DecodeOp::ALL {
                black_box(normalize(black_box(op)));
            }
        });
    });
}

fn disassemble_benchmark(c: &mut Criterion) {
    let disassembler = Disassembler::default();
    let bundles: Vec<Bundle> = random_bundles(1024)
        .iter()
        .filter_map(Bundle::decode)
        .collect();

    c.bench_function("disassemble_valid_bundles", |b| {
        b.iter(|| {
            for (i, bundle) in bundles.iter().enumerate() {
                black_box(disassembler.disassemble_bundle(bundle, (i * BUNDLE_SIZE) as u64));
            }
        });
    });
}

criterion_group!(
    benches,
    decode_benchmark,
    normalize_benchmark,
    disassemble_benchmark
);
criterion_main!(benches);
