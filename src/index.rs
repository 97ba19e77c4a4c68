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
//! Multi-universe LSH index over random hyperplane codes.
//!
//! Each universe maps a bucket code to the corpus positions that hashed into
//! it. A query collects the positions stored under its own code in every
//! universe and ranks them by how many universes agreed.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::{debug, trace, warn};

use crate::config::LshConfig;
use crate::projector::{BucketCode, Projector};
use crate::tally::{Candidate, VoteTally};
use crate::{LshError, Result};

/// Number of candidates callers usually ask for.
pub const DEFAULT_TOP_K: usize = 5;

/// Per-universe bucket load of a built index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexStats {
    /// Number of indexed vectors.
    pub size: usize,
    /// Non-empty buckets, one entry per universe.
    pub occupied_buckets: Vec<usize>,
    /// Length of the largest bucket, one entry per universe.
    pub largest_bucket: Vec<usize>,
}

/// Build-once, query-many LSH index.
///
/// The index shares its [`Projector`] through an [`Arc`]; queries must use the
/// same planes the corpus was hashed with. Identifiers are 0-based positions in
/// the corpus passed to [`LshIndex::build`].
///
/// # Example
/// ```rust
/// use std::sync::Arc;
///
/// use hyperplanes::{LshIndex, Projector};
///
/// let projector = Arc::new(Projector::with_seed(3, 64, 10, 7).unwrap());
/// let mut index = LshIndex::new(projector);
///
/// let corpus = vec![
///     vec![1.0, 0.9, 1.1],
///     vec![-4.0, 0.5, 2.0],
///     vec![1.0, 0.9, 1.1],
/// ];
/// index.build(&corpus).unwrap();
///
/// let ids = index.query(&[1.0, 0.9, 1.1], 2).unwrap();
/// assert_eq!(ids, vec![0, 2]);
/// ```
#[derive(Debug, Clone)]
pub struct LshIndex {
    projector: Arc<Projector>,
    buckets: Vec<HashMap<BucketCode, Vec<usize>>>,
    size: usize,
    built: bool,
}

impl LshIndex {
    /// Creates an empty, unbuilt index bound to `projector`.
    pub fn new(projector: Arc<Projector>) -> Self {
        let buckets = vec![HashMap::new(); projector.universe_count()];
        Self {
            projector,
            buckets,
            size: 0,
            built: false,
        }
    }

    /// Creates an empty index with a projector built from `config`.
    ///
    /// # Errors
    /// Returns [`LshError::InvalidConfiguration`] when the config is invalid.
    pub fn from_config(config: &LshConfig) -> Result<Self> {
        Ok(Self::new(Arc::new(Projector::from_config(config)?)))
    }

    /// Returns the projector shared with query callers.
    pub fn projector(&self) -> &Arc<Projector> {
        &self.projector
    }

    /// Returns the number of indexed vectors.
    pub fn len(&self) -> usize {
        self.size
    }

    /// Returns `true` when no vectors are indexed.
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Returns `true` once [`Self::build`] has run.
    pub fn is_built(&self) -> bool {
        self.built
    }

    /// Hashes `corpus` and replaces all bucket state with it.
    ///
    /// Vector `i` of the corpus gets identifier `i`. Invalid input leaves the
    /// previous state untouched.
    ///
    /// # Errors
    /// Returns [`LshError::DimensionMismatch`] or [`LshError::NonFiniteValue`]
    /// for malformed vectors. Returns [`LshError::EmptyCorpus`] when `corpus`
    /// is empty; the index is then built and empty, and queries return no
    /// candidates.
    pub fn build<V: AsRef<[f64]>>(&mut self, corpus: &[V]) -> Result<()> {
        let codes = self.projector.hash(corpus)?;

        let mut buckets: Vec<HashMap<BucketCode, Vec<usize>>> =
            vec![HashMap::new(); self.projector.universe_count()];
        for (id, row) in codes.iter().enumerate() {
            for (universe, &code) in row.iter().enumerate() {
                buckets[universe].entry(code).or_default().push(id);
            }
        }

        self.buckets = buckets;
        self.size = corpus.len();
        self.built = true;

        if corpus.is_empty() {
            warn!("built index from an empty corpus");
            return Err(LshError::EmptyCorpus);
        }

        debug!(
            size = self.size,
            universes = self.buckets.len(),
            occupied_buckets = self.buckets.iter().map(HashMap::len).sum::<usize>(),
            "built index"
        );
        Ok(())
    }

    /// Returns up to `top_k` identifiers ranked by cross-universe votes.
    ///
    /// Ties keep scan order: universes ascending, then bucket order. Fewer than
    /// `top_k` identifiers are returned when fewer were voted for.
    ///
    /// # Errors
    /// Returns [`LshError::IndexNotBuilt`] before the first build, and
    /// [`LshError::DimensionMismatch`] or [`LshError::NonFiniteValue`] for a
    /// malformed query.
    pub fn query(&self, vector: &[f64], top_k: usize) -> Result<Vec<usize>> {
        Ok(self
            .query_with_votes(vector, top_k)?
            .into_iter()
            .map(|candidate| candidate.id)
            .collect())
    }

    /// Same as [`Self::query`] but keeps the vote count of each identifier.
    ///
    /// # Errors
    /// Same conditions as [`Self::query`].
    pub fn query_with_votes(&self, vector: &[f64], top_k: usize) -> Result<Vec<Candidate>> {
        if !self.built {
            return Err(LshError::IndexNotBuilt);
        }

        let codes = self.projector.hash_one(vector)?;
        let mut tally = VoteTally::new();
        for (universe, &code) in codes.iter().enumerate() {
            tally.extend(self.bucket(universe, code).iter().copied());
        }

        trace!(candidates = tally.len(), top_k, "queried index");
        Ok(tally.top_k(top_k))
    }

    /// Returns the identifiers stored under `code` in `universe`.
    ///
    /// Empty for absent codes and out-of-range universes.
    pub fn bucket(&self, universe: usize, code: BucketCode) -> &[usize] {
        self.buckets
            .get(universe)
            .and_then(|table| table.get(&code))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Returns the number of non-empty buckets in `universe`.
    pub fn occupied_buckets(&self, universe: usize) -> usize {
        self.buckets.get(universe).map_or(0, HashMap::len)
    }

    /// Returns bucket load for every universe.
    pub fn stats(&self) -> IndexStats {
        IndexStats {
            size: self.size,
            occupied_buckets: self.buckets.iter().map(HashMap::len).collect(),
            largest_bucket: self
                .buckets
                .iter()
                .map(|table| table.values().map(Vec::len).max().unwrap_or(0))
                .collect(),
        }
    }
}
