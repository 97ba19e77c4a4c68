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
//! Random hyperplane projector.
//!
//! Each universe holds `plane_count` random normals. A vector's bucket code in
//! a universe packs one bit per normal: the bit is set when the dot product is
//! non-negative, and bit `i` carries weight `2^i`.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rand_distr::StandardNormal;
use tracing::debug;

use crate::config::LshConfig;
use crate::{LshError, Result};

/// Integer bucket code of one vector in one universe.
pub type BucketCode = u64;

/// Immutable family of random hyperplanes grouped into universes.
///
/// Normals are stored row-major with shape
/// `(universe_count, dimensionality, plane_count)` and are never renormalized.
/// The effective bucket capacity is `2^floor(log2(max_buckets))`, so a request
/// for 1000 buckets yields 512.
///
/// # Example
/// ```rust
/// use hyperplanes::Projector;
///
/// let projector = Projector::with_seed(3, 16, 4, 42).unwrap();
/// assert_eq!(projector.bucket_capacity(), 16);
///
/// let codes = projector.hash(&[[1.0, 0.5, -2.0], [0.0, 1.0, 0.0]]).unwrap();
/// assert_eq!(codes.len(), 2);
/// assert!(codes.iter().flatten().all(|&code| code < 16));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Projector {
    dimensionality: usize,
    universe_count: usize,
    plane_count: usize,
    seed: Option<u64>,
    planes: Vec<f64>,
}

impl Projector {
    /// Creates a projector with freshly drawn random planes.
    ///
    /// # Errors
    /// Returns [`LshError::InvalidConfiguration`] for invalid dimensions.
    pub fn new(dimensionality: usize, max_buckets: usize, universe_count: usize) -> Result<Self> {
        Self::from_config(
            &LshConfig::new(dimensionality)
                .with_max_buckets(max_buckets)
                .with_universe_count(universe_count),
        )
    }

    /// Creates a projector whose planes are fully determined by `seed`.
    ///
    /// # Errors
    /// Returns [`LshError::InvalidConfiguration`] for invalid dimensions.
    pub fn with_seed(
        dimensionality: usize,
        max_buckets: usize,
        universe_count: usize,
        seed: u64,
    ) -> Result<Self> {
        Self::from_config(
            &LshConfig::new(dimensionality)
                .with_max_buckets(max_buckets)
                .with_universe_count(universe_count)
                .with_seed(seed),
        )
    }

    /// Creates a projector from a config, drawing planes from a standard normal.
    ///
    /// Without a configured seed a fresh one is drawn and kept, see [`Self::seed`].
    ///
    /// # Errors
    /// Returns [`LshError::InvalidConfiguration`] when the config is invalid.
    pub fn from_config(config: &LshConfig) -> Result<Self> {
        config.validate()?;

        let seed = config.seed.unwrap_or_else(rand::random);
        let plane_count = config.plane_count();
        let len = plane_len(config.universe_count, config.dimensionality, plane_count)?;

        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let planes = (0..len)
            .map(|_| rng.sample::<f64, _>(StandardNormal))
            .collect();

        debug!(
            dimensionality = config.dimensionality,
            universe_count = config.universe_count,
            plane_count,
            seed,
            "drew projector planes"
        );

        Ok(Self {
            dimensionality: config.dimensionality,
            universe_count: config.universe_count,
            plane_count,
            seed: Some(seed),
            planes,
        })
    }

    /// Creates a projector from explicit normals laid out as
    /// `(universe, dimension, plane)` in row-major order.
    ///
    /// # Errors
    /// Returns [`LshError::InvalidConfiguration`] for zero sizes, an oversized
    /// `plane_count`, a `planes` length that does not match the shape, or
    /// non-finite normals.
    pub fn from_planes(
        dimensionality: usize,
        universe_count: usize,
        plane_count: usize,
        planes: Vec<f64>,
    ) -> Result<Self> {
        if dimensionality == 0 {
            return Err(LshError::InvalidConfiguration(
                "dimensionality must be greater than zero",
            ));
        }
        if universe_count == 0 {
            return Err(LshError::InvalidConfiguration(
                "universe_count must be greater than zero",
            ));
        }
        if plane_count == 0 || plane_count >= usize::BITS as usize {
            return Err(LshError::InvalidConfiguration(
                "plane_count must be between 1 and the pointer width minus one",
            ));
        }
        if planes.len() != plane_len(universe_count, dimensionality, plane_count)? {
            return Err(LshError::InvalidConfiguration(
                "planes length must equal universe_count * dimensionality * plane_count",
            ));
        }
        if planes.iter().any(|value| !value.is_finite()) {
            return Err(LshError::InvalidConfiguration("planes must be finite"));
        }

        Ok(Self {
            dimensionality,
            universe_count,
            plane_count,
            seed: None,
            planes,
        })
    }

    /// Returns the required vector length.
    pub fn dimensionality(&self) -> usize {
        self.dimensionality
    }

    /// Returns the number of independent hyperplane families.
    pub fn universe_count(&self) -> usize {
        self.universe_count
    }

    /// Returns the number of hyperplanes per universe, i.e. bits per code.
    pub fn plane_count(&self) -> usize {
        self.plane_count
    }

    /// Returns the number of distinct codes per universe.
    pub fn bucket_capacity(&self) -> usize {
        1_usize << self.plane_count
    }

    /// Returns the seed the planes were drawn from, or `None` for explicit planes.
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Returns all normals in `(universe, dimension, plane)` row-major order.
    pub fn planes(&self) -> &[f64] {
        &self.planes
    }

    /// Returns the components of one hyperplane normal.
    pub fn normal(&self, universe: usize, plane: usize) -> Option<Vec<f64>> {
        if universe >= self.universe_count || plane >= self.plane_count {
            return None;
        }
        let start = universe * self.dimensionality * self.plane_count + plane;
        Some(
            self.planes[start..]
                .iter()
                .step_by(self.plane_count)
                .take(self.dimensionality)
                .copied()
                .collect(),
        )
    }

    /// Hashes a batch of vectors into bucket codes.
    ///
    /// Output has one row per input vector and one code per universe. A batch
    /// of one is the single-vector case.
    ///
    /// # Errors
    /// Returns [`LshError::DimensionMismatch`] when a vector has the wrong
    /// length, or [`LshError::NonFiniteValue`] when it holds NaN or infinity.
    pub fn hash<V: AsRef<[f64]>>(&self, vectors: &[V]) -> Result<Vec<Vec<BucketCode>>> {
        let mut projections = vec![0.0; self.plane_count];
        vectors
            .iter()
            .enumerate()
            .map(|(row, vector)| -> Result<Vec<BucketCode>> {
                let vector = vector.as_ref();
                self.check_vector(row, vector)?;
                Ok(self.codes(vector, &mut projections))
            })
            .collect()
    }

    /// Hashes one vector, returning one code per universe.
    ///
    /// # Errors
    /// Same conditions as [`Self::hash`].
    pub fn hash_one(&self, vector: &[f64]) -> Result<Vec<BucketCode>> {
        self.check_vector(0, vector)?;
        let mut projections = vec![0.0; self.plane_count];
        Ok(self.codes(vector, &mut projections))
    }

    pub(crate) fn check_vector(&self, row: usize, vector: &[f64]) -> Result<()> {
        if vector.len() != self.dimensionality {
            return Err(LshError::DimensionMismatch {
                expected: self.dimensionality,
                actual: vector.len(),
            });
        }
        if let Some(column) = vector.iter().position(|value| !value.is_finite()) {
            return Err(LshError::NonFiniteValue { row, column });
        }
        Ok(())
    }

    fn codes(&self, vector: &[f64], projections: &mut [f64]) -> Vec<BucketCode> {
        // Dividing by the largest magnitude keeps every sign and keeps the sums
        // finite, so huge components cannot overflow into a NaN projection.
        let largest = vector.iter().fold(0.0_f64, |acc, value| acc.max(value.abs()));
        let scale = if largest > 0.0 { largest } else { 1.0 };
        (0..self.universe_count)
            .map(|universe| self.code(universe, vector, scale, projections))
            .collect()
    }

    fn code(
        &self,
        universe: usize,
        vector: &[f64],
        scale: f64,
        projections: &mut [f64],
    ) -> BucketCode {
        projections.fill(0.0);

        let universe_len = self.dimensionality * self.plane_count;
        let universe_planes = &self.planes[universe * universe_len..(universe + 1) * universe_len];
        for (component, normals) in vector
            .iter()
            .zip(universe_planes.chunks_exact(self.plane_count))
        {
            for (projection, normal) in projections.iter_mut().zip(normals) {
                *projection += (component / scale) * normal;
            }
        }

        // Zero projections count as non-negative.
        projections
            .iter()
            .enumerate()
            .filter(|(_, projection)| **projection >= 0.0)
            .fold(0 as BucketCode, |code, (bit, _)| code | (1 << bit))
    }
}

fn plane_len(universe_count: usize, dimensionality: usize, plane_count: usize) -> Result<usize> {
    universe_count
        .checked_mul(dimensionality)
        .and_then(|len| len.checked_mul(plane_count))
        .ok_or(LshError::InvalidConfiguration(
            "universe_count * dimensionality * plane_count overflows",
        ))
}
