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
//! Property tests for hashing and index invariants.

use std::sync::Arc;

use hyperplanes::{LshConfig, LshError, LshIndex, Projector};
use proptest::prelude::*;

prop_compose! {
    fn arb_vector(dim: usize)(vec in prop::collection::vec(-10.0f64..10.0, dim)) -> Vec<f64> {
        vec
    }
}

prop_compose! {
    fn arb_corpus(dim: usize, max_rows: usize)
        (rows in prop::collection::vec(arb_vector(dim), 1..max_rows)) -> Vec<Vec<f64>> {
        rows
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn bucket_capacity_is_largest_power_of_two_not_above_request(max_buckets in 2usize..1_000_000) {
        let projector = Projector::with_seed(2, max_buckets, 1, 0).unwrap();
        let capacity = projector.bucket_capacity();
        prop_assert!(capacity.is_power_of_two());
        prop_assert!(capacity <= max_buckets);
        prop_assert!(capacity * 2 > max_buckets);
        prop_assert_eq!(capacity, 1usize << max_buckets.ilog2());
    }

    #[test]
    fn codes_stay_below_capacity(
        seed in any::<u64>(),
        max_buckets in 2usize..4096,
        vectors in prop::collection::vec(arb_vector(12), 0..20),
    ) {
        let projector = Projector::with_seed(12, max_buckets, 7, seed).unwrap();
        let codes = projector.hash(&vectors).unwrap();
        prop_assert_eq!(codes.len(), vectors.len());
        for row in &codes {
            prop_assert_eq!(row.len(), 7);
            for &code in row {
                prop_assert!(code < projector.bucket_capacity() as u64);
            }
        }
    }

    #[test]
    fn hashing_is_deterministic(seed in any::<u64>(), vector in arb_vector(9)) {
        let projector = Projector::with_seed(9, 256, 5, seed).unwrap();
        let first = projector.hash(&[vector.clone()]).unwrap();
        let second = projector.hash(&[vector.clone()]).unwrap();
        prop_assert_eq!(&first, &second);
        prop_assert_eq!(&first[0], &projector.hash_one(&vector).unwrap());
    }

    #[test]
    fn positive_scaling_keeps_codes(seed in any::<u64>(), vector in arb_vector(6), scale in 0.5f64..4.0) {
        let projector = Projector::with_seed(6, 64, 4, seed).unwrap();
        let scaled: Vec<f64> = vector.iter().map(|value| value * scale).collect();
        let original = projector.hash_one(&vector).unwrap();
        let rescaled = projector.hash_one(&scaled).unwrap();
        // Rounding can flip a projection that sits right at zero.
        let flipped = original
            .iter()
            .zip(&rescaled)
            .filter(|(left, right)| left != right)
            .count();
        prop_assert!(flipped <= 1);
    }

    #[test]
    fn each_universe_partitions_the_corpus(seed in any::<u64>(), corpus in arb_corpus(5, 40)) {
        let config = LshConfig::new(5).with_max_buckets(16).with_universe_count(4).with_seed(seed);
        let mut index = LshIndex::from_config(&config).unwrap();
        index.build(&corpus).unwrap();

        for universe in 0..4 {
            let mut ids: Vec<usize> = (0..16u64)
                .flat_map(|code| index.bucket(universe, code).iter().copied())
                .collect();
            ids.sort_unstable();
            prop_assert_eq!(ids, (0..corpus.len()).collect::<Vec<_>>());
        }
    }

    #[test]
    fn query_results_are_distinct_and_bounded(
        seed in any::<u64>(),
        corpus in arb_corpus(4, 30),
        query in arb_vector(4),
        top_k in 0usize..12,
    ) {
        let projector = Arc::new(Projector::with_seed(4, 8, 6, seed).unwrap());
        let mut index = LshIndex::new(projector);
        index.build(&corpus).unwrap();

        let ranked = index.query_with_votes(&query, top_k).unwrap();
        prop_assert!(ranked.len() <= top_k);
        prop_assert!(ranked.windows(2).all(|pair| pair[0].votes >= pair[1].votes));
        prop_assert!(ranked.iter().all(|candidate| candidate.id < corpus.len()));
        prop_assert!(ranked.iter().all(|candidate| (1..=6).contains(&candidate.votes)));

        let mut ids: Vec<_> = ranked.iter().map(|candidate| candidate.id).collect();
        ids.sort_unstable();
        ids.dedup();
        prop_assert_eq!(ids.len(), ranked.len());
    }

    #[test]
    fn empty_index_answers_nothing(seed in any::<u64>(), query in arb_vector(3), top_k in 0usize..10) {
        let mut index = LshIndex::new(Arc::new(Projector::with_seed(3, 32, 5, seed).unwrap()));
        let empty: Vec<Vec<f64>> = Vec::new();
        prop_assert_eq!(index.build(&empty), Err(LshError::EmptyCorpus));
        prop_assert!(index.query(&query, top_k).unwrap().is_empty());
    }

    #[test]
    fn wrong_length_is_rejected(dim in 1usize..16, other in 0usize..16) {
        prop_assume!(dim != other);
        let projector = Projector::with_seed(dim, 16, 2, 0).unwrap();
        let vector = vec![1.0; other];
        prop_assert_eq!(
            projector.hash_one(&vector),
            Err(LshError::DimensionMismatch { expected: dim, actual: other })
        );
    }
}
