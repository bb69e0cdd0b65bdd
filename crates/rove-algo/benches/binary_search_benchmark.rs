// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rove_algo::binary_search::{equal_range_indices, lower_bound_index};
use std::hint::black_box;

const PROBES: usize = 1024;
const VALUE_SPACE: u64 = 1_000_000;

fn sorted_data(n: usize, rng: &mut StdRng) -> Vec<u64> {
    let mut data: Vec<u64> = (0..n).map(|_| rng.gen_range(0..VALUE_SPACE)).collect();
    data.sort_unstable();
    data
}

fn probe_keys(rng: &mut StdRng) -> Vec<u64> {
    (0..PROBES).map(|_| rng.gen_range(0..VALUE_SPACE)).collect()
}

fn bench_lower_bound(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0x5EED_CAFE);
    let mut group = c.benchmark_group("lower_bound");

    for &n in &[1_000usize, 32_000, 1_000_000] {
        let data = sorted_data(n, &mut rng);
        let probes = probe_keys(&mut rng);
        group.throughput(Throughput::Elements(PROBES as u64));
        group.bench_with_input(BenchmarkId::from_parameter(n), &data, |b, data| {
            b.iter(|| {
                let mut acc = 0usize;
                for key in &probes {
                    acc = acc.wrapping_add(lower_bound_index(data, black_box(key)));
                }
                acc
            })
        });
    }
    group.finish();
}

fn bench_equal_range(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0xB0A7_5EED);
    let mut group = c.benchmark_group("equal_range");

    for &n in &[1_000usize, 32_000, 1_000_000] {
        // A narrow value space forces long runs of duplicates.
        let mut data: Vec<u64> = (0..n).map(|_| rng.gen_range(0..256)).collect();
        data.sort_unstable();
        let probes: Vec<u64> = (0..PROBES).map(|_| rng.gen_range(0..256)).collect();
        group.throughput(Throughput::Elements(PROBES as u64));
        group.bench_with_input(BenchmarkId::from_parameter(n), &data, |b, data| {
            b.iter(|| {
                let mut acc = 0usize;
                for key in &probes {
                    let (lo, hi) = equal_range_indices(data, black_box(key));
                    acc = acc.wrapping_add(hi - lo);
                }
                acc
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_lower_bound, bench_equal_range);
criterion_main!(benches);
