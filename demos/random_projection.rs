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
use std::sync::Arc;

use hyperplanes::{LshConfig, LshError, LshIndex, Projector};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rand_distr::StandardNormal;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // RUST_LOG=hyperplanes=debug shows projector and build events.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // 300-dimensional embeddings, up to 1024 buckets (10 planes), 25 universes.
    let config = LshConfig::new(300).with_seed(2026);
    let projector = Arc::new(Projector::from_config(&config)?);
    println!(
        "planes per universe: {}, buckets per universe: {}",
        projector.plane_count(),
        projector.bucket_capacity()
    );

    let mut rng = ChaCha8Rng::seed_from_u64(7);
    let mut random_vector = || -> Vec<f64> {
        (0..300)
            .map(|_| rng.sample::<f64, _>(StandardNormal))
            .collect()
    };

    // Hash one vector, then a batch of 13.
    let single = random_vector();
    println!("codes for one vector: {:?}", projector.hash_one(&single)?);
    let batch: Vec<Vec<f64>> = (0..13).map(|_| random_vector()).collect();
    println!("batch produced {} rows of codes", projector.hash(&batch)?.len());

    // Index a corpus and look up a perturbed copy of one of its vectors.
    let corpus: Vec<Vec<f64>> = (0..11_130).map(|_| random_vector()).collect();
    let mut index = LshIndex::new(Arc::clone(&projector));
    match index.query(&single, 5) {
        Err(LshError::IndexNotBuilt) => println!("querying before build is rejected"),
        other => println!("unexpected: {other:?}"),
    }
    index.build(&corpus)?;

    let stats = index.stats();
    println!(
        "indexed {} vectors, {} occupied buckets in universe 0",
        stats.size, stats.occupied_buckets[0]
    );

    let query: Vec<f64> = corpus[1234]
        .iter()
        .zip(random_vector())
        .map(|(value, noise)| value + 0.05 * noise)
        .collect();
    let ranked = index.query_with_votes(&query, 5)?;
    let pairs: Vec<_> = ranked.iter().map(|c| (c.id, c.votes)).collect();
    println!("top candidates for a noisy copy of #1234 (id, votes): {pairs:?}");

    let unrelated = random_vector();
    println!(
        "top candidates for an unrelated vector: {:?}",
        index.query(&unrelated, 5)?
    );

    Ok(())
}
