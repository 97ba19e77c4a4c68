// MIT License
//
// Copyright (c) 2026 Raja Lehtihet & Wael El Oraiby
//
// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to deal
// in the Software without restriction, including without limitation the rights
// to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
// copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in all
// copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
// SOFTWARE.
//
use std::hint::black_box;
use std::sync::Arc;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use hyperplanes::{LshIndex, Projector};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rand_distr::StandardNormal;

fn random_vectors(rows: usize, dimensionality: usize, seed: u64) -> Vec<Vec<f64>> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..rows)
        .map(|_| {
            (0..dimensionality)
                .map(|_| rng.sample::<f64, _>(StandardNormal))
                .collect()
        })
        .collect()
}

fn bench_hash(c: &mut Criterion) {
    let mut group = c.benchmark_group("hash");
    for dimensionality in [64, 300] {
        let projector = Projector::with_seed(dimensionality, 1024, 25, 42).unwrap();
        let vectors = random_vectors(256, dimensionality, 1);
        group.bench_with_input(
            BenchmarkId::from_parameter(dimensionality),
            &vectors,
            |b, vectors| b.iter(|| projector.hash(black_box(vectors)).unwrap()),
        );
    }
    group.finish();
}

fn bench_build(c: &mut Criterion) {
    let projector = Arc::new(Projector::with_seed(300, 1024, 25, 42).unwrap());
    let corpus = random_vectors(2_000, 300, 2);
    c.bench_function("build_2000x300", |b| {
        b.iter(|| {
            let mut index = LshIndex::new(Arc::clone(&projector));
            index.build(black_box(&corpus)).unwrap();
            index
        })
    });
}

fn bench_query(c: &mut Criterion) {
    let projector = Arc::new(Projector::with_seed(300, 1024, 25, 42).unwrap());
    let corpus = random_vectors(10_000, 300, 3);
    let queries = random_vectors(64, 300, 4);
    let mut index = LshIndex::new(projector);
    index.build(&corpus).unwrap();

    c.bench_function("query_10000x300_top5", |b| {
        let mut next = 0;
        b.iter(|| {
            let query = &queries[next % queries.len()];
            next += 1;
            index.query(black_box(query), 5).unwrap()
        })
    });
}

criterion_group!(benches, bench_hash, bench_build, bench_query);
criterion_main!(benches);
