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
//! Random-projection locality sensitive hashing for dense vectors.
//!
//! The crate currently exposes:
//! - [`config::LshConfig`] for projector parameters and seeding.
//! - [`projector::Projector`] for hashing vectors into per-universe bucket codes.
//! - [`index::LshIndex`] for build-once, query-many candidate retrieval.
//! - [`tally::VoteTally`] for stable vote counting across universes.
//!
//! Vectors that share a sign pattern against many independent families of
//! random hyperplanes tend to point in similar directions, so the index ranks
//! candidates by how many universes put them in the query's bucket. Results are
//! approximate: a true neighbor can land in a different bucket in every
//! universe.

use thiserror::Error;

pub mod config;
pub mod index;
pub mod projector;
pub mod tally;

pub use config::LshConfig;
pub use index::{IndexStats, LshIndex};
pub use projector::{BucketCode, Projector};
pub use tally::{Candidate, VoteTally};

/// Errors returned by projector construction, hashing and index operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LshError {
    /// Returned when a constructor receives an invalid argument.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(&'static str),
    /// Returned when a vector's length differs from the projector dimensionality.
    #[error("dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },
    /// Returned when a vector holds a NaN or infinite component.
    #[error("non-finite value in vector {row} at position {column}")]
    NonFiniteValue { row: usize, column: usize },
    /// Returned by a build over zero vectors. The index is still left built and empty.
    #[error("corpus is empty")]
    EmptyCorpus,
    /// Returned when querying an index that has never been built.
    #[error("index has not been built")]
    IndexNotBuilt,
}

pub type Result<T> = std::result::Result<T, LshError>;
