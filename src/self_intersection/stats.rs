// SPDX-License-Identifier: MIT
//
// Copyright (c) 2025 Alexandre Severino
//
// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to deal
// in the Software without restriction, including without limitation the rights
// to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
// copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
// SOFTWARE.

use std::{
    fmt,
    sync::atomic::{AtomicUsize, Ordering},
};

/// Counters describing one scan.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanStats {
    /// Facets boxed by the broad phase.
    pub facets: usize,
    /// Box pairs handed to the adjacency classifier.
    pub candidate_pairs: usize,
    /// Candidates skipped because the facets share an edge.
    pub shared_edge_pairs: usize,
    /// Candidates tested with the triangle/opposite-edge predicates.
    pub shared_vertex_pairs: usize,
    /// Candidates tested with the triangle/triangle predicate.
    pub disjoint_pairs: usize,
    /// Number of narrow-phase predicate evaluations.
    pub predicate_calls: usize,
    /// Reports handed to the sink.
    pub reported: usize,
    /// The sink stopped the scan before it finished.
    pub cancelled: bool,
}

impl fmt::Display for ScanStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} facets, {} candidate pairs ({} shared edge, {} shared vertex, {} disjoint), {} predicate calls, {} reported",
            self.facets,
            self.candidate_pairs,
            self.shared_edge_pairs,
            self.shared_vertex_pairs,
            self.disjoint_pairs,
            self.predicate_calls,
            self.reported
        )?;
        if self.cancelled {
            write!(f, " (stopped early)")?;
        }
        Ok(())
    }
}

/// Shared counters updated from the broad-phase callback, possibly from
/// several rayon workers at once.
#[derive(Debug, Default)]
pub(crate) struct ScanCounters {
    pub candidate_pairs: AtomicUsize,
    pub shared_edge_pairs: AtomicUsize,
    pub shared_vertex_pairs: AtomicUsize,
    pub disjoint_pairs: AtomicUsize,
    pub predicate_calls: AtomicUsize,
    pub reported: AtomicUsize,
}

impl ScanCounters {
    #[inline]
    pub fn bump(counter: &AtomicUsize) {
        counter.fetch_add(1, Ordering::Relaxed);
    }

    pub fn snapshot(&self, facets: usize, cancelled: bool) -> ScanStats {
        let load = |c: &AtomicUsize| c.load(Ordering::Relaxed);
        ScanStats {
            facets,
            candidate_pairs: load(&self.candidate_pairs),
            shared_edge_pairs: load(&self.shared_edge_pairs),
            shared_vertex_pairs: load(&self.shared_vertex_pairs),
            disjoint_pairs: load(&self.disjoint_pairs),
            predicate_calls: load(&self.predicate_calls),
            reported: load(&self.reported),
            cancelled,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snapshot_reads_counters() {
        let counters = ScanCounters::default();
        ScanCounters::bump(&counters.candidate_pairs);
        ScanCounters::bump(&counters.candidate_pairs);
        ScanCounters::bump(&counters.reported);

        let stats = counters.snapshot(10, true);
        assert_eq!(stats.facets, 10);
        assert_eq!(stats.candidate_pairs, 2);
        assert_eq!(stats.reported, 1);
        assert!(stats.cancelled);
        assert!(stats.to_string().ends_with("(stopped early)"));
    }
}
