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
//! Vote counting for multi-universe candidate retrieval.
//!
//! Every universe contributes one vote per identifier found in the query's
//! bucket. Ranking is by descending votes, ties keep first-seen order.

use std::collections::HashMap;

/// One ranked identifier and the number of universes that voted for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Candidate {
    /// Corpus position of the candidate.
    pub id: usize,
    /// Number of universes whose query bucket held the candidate.
    pub votes: usize,
}

/// Vote counter with a stable top-k.
///
/// # Example
/// ```rust
/// use hyperplanes::tally::VoteTally;
///
/// let mut tally = VoteTally::new();
/// tally.extend([4, 2, 9]);
/// tally.extend([2, 9]);
/// tally.extend([9]);
///
/// let ids: Vec<_> = tally.top_k(2).into_iter().map(|c| c.id).collect();
/// assert_eq!(ids, vec![9, 2]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct VoteTally {
    slots: HashMap<usize, usize>,
    entries: Vec<Candidate>,
    total_votes: usize,
}

impl VoteTally {
    /// Creates an empty tally.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of distinct identifiers voted for.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` when no vote has been cast.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the number of votes cast across all identifiers.
    pub fn total_votes(&self) -> usize {
        self.total_votes
    }

    /// Casts one vote for `id`.
    pub fn vote(&mut self, id: usize) {
        self.total_votes += 1;
        match self.slots.get(&id) {
            Some(&slot) => self.entries[slot].votes += 1,
            None => {
                self.slots.insert(id, self.entries.len());
                self.entries.push(Candidate { id, votes: 1 });
            }
        }
    }

    /// Casts one vote for each identifier, in iteration order.
    pub fn extend<I>(&mut self, ids: I)
    where
        I: IntoIterator<Item = usize>,
    {
        for id in ids {
            self.vote(id);
        }
    }

    /// Returns the vote count for `id`, zero when it was never seen.
    pub fn votes(&self, id: usize) -> usize {
        self.slots
            .get(&id)
            .map_or(0, |&slot| self.entries[slot].votes)
    }

    /// Returns up to `k` candidates sorted by votes descending.
    ///
    /// Equal counts keep the order in which identifiers were first voted for.
    pub fn top_k(&self, k: usize) -> Vec<Candidate> {
        if k == 0 {
            return Vec::new();
        }

        let mut ranked = self.entries.clone();
        // Stable sort: ties stay in first-seen order.
        ranked.sort_by(|left, right| right.votes.cmp(&left.votes));
        ranked.truncate(k.min(ranked.len()));
        ranked
    }

    /// Removes all votes.
    pub fn clear(&mut self) {
        self.slots.clear();
        self.entries.clear();
        self.total_votes = 0;
    }
}
