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
//! Projector configuration.

use crate::{LshError, Result};

/// Default upper bound on buckets per universe.
pub const DEFAULT_MAX_BUCKETS: usize = 1024;

/// Default number of independent hyperplane families.
pub const DEFAULT_UNIVERSE_COUNT: usize = 25;

/// Parameters for a [`Projector`](crate::projector::Projector).
///
/// A config with a seed fully determines the hyperplanes, so storing the config
/// is enough to reproduce a projector later.
///
/// # Example
/// ```rust
/// use hyperplanes::LshConfig;
///
/// let config = LshConfig::new(300).with_max_buckets(1000).with_seed(7);
/// assert_eq!(config.plane_count(), 9);
/// assert_eq!(config.bucket_capacity(), 512);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LshConfig {
    /// Length of every vector hashed by the projector.
    pub dimensionality: usize,
    /// Requested bucket bound; the effective capacity rounds down to a power of two.
    pub max_buckets: usize,
    /// Number of independent hyperplane families.
    pub universe_count: usize,
    /// Seed for the plane generator. `None` draws a fresh seed at construction.
    pub seed: Option<u64>,
}

impl LshConfig {
    /// Creates a config with default bucket and universe counts and no seed.
    pub fn new(dimensionality: usize) -> Self {
        Self {
            dimensionality,
            max_buckets: DEFAULT_MAX_BUCKETS,
            universe_count: DEFAULT_UNIVERSE_COUNT,
            seed: None,
        }
    }

    /// Sets the requested bucket bound.
    pub fn with_max_buckets(mut self, max_buckets: usize) -> Self {
        self.max_buckets = max_buckets;
        self
    }

    /// Sets the number of hyperplane families.
    pub fn with_universe_count(mut self, universe_count: usize) -> Self {
        self.universe_count = universe_count;
        self
    }

    /// Fixes the plane generator seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Checks that the config describes a usable projector.
    ///
    /// # Errors
    /// Returns [`LshError::InvalidConfiguration`] when `dimensionality == 0`,
    /// `universe_count == 0` or `max_buckets < 2`.
    pub fn validate(&self) -> Result<()> {
        if self.dimensionality == 0 {
            return Err(LshError::InvalidConfiguration(
                "dimensionality must be greater than zero",
            ));
        }
        if self.universe_count == 0 {
            return Err(LshError::InvalidConfiguration(
                "universe_count must be greater than zero",
            ));
        }
        if self.max_buckets < 2 {
            return Err(LshError::InvalidConfiguration(
                "max_buckets must be at least 2",
            ));
        }
        Ok(())
    }

    /// Returns `floor(log2(max_buckets))`, the number of hyperplanes per universe.
    ///
    /// Zero when `max_buckets < 2`.
    pub fn plane_count(&self) -> usize {
        if self.max_buckets < 2 {
            return 0;
        }
        self.max_buckets.ilog2() as usize
    }

    /// Returns `2^plane_count`, the largest power of two not above `max_buckets`.
    pub fn bucket_capacity(&self) -> usize {
        1_usize << self.plane_count()
    }
}
