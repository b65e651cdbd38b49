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

use tracing::trace;

use crate::mesh::surface::PolyhedralSurface;

/// Topological relation between two distinct facets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Adjacency<H, V> {
    /// One facet lies across an edge of the other.
    SharedEdge,
    /// The facets meet at `vertex`. `first` and `second` are the half-edges
    /// of each facet pointing at it, so the edge opposite the vertex runs
    /// from `next(h)` to `next(next(h))`.
    SharedVertex { vertex: V, first: H, second: H },
    Disjoint,
}

/// Classify the pair `(f1, f2)` of triangular facets.
///
/// Facets touching in two or three vertices without an edge link (only
/// possible on non-manifold or degenerate input) are reported as
/// [`Adjacency::SharedVertex`] at the first matching vertex.
pub fn classify<M: PolyhedralSurface>(
    mesh: &M,
    f1: M::Facet,
    f2: M::Facet,
) -> Adjacency<M::Halfedge, M::Vertex> {
    let h0 = mesh.facet_halfedge(f1);
    let h = [h0, mesh.next(h0), mesh.next(mesh.next(h0))];

    if h.iter().any(|&e| mesh.opposite_facet(e) == Some(f2)) {
        return Adjacency::SharedEdge;
    }

    let g0 = mesh.facet_halfedge(f2);
    let g = [g0, mesh.next(g0), mesh.next(mesh.next(g0))];

    let mut shared = None;
    let mut matches = 0;
    for &hi in &h {
        let v = mesh.target(hi);
        for &gj in &g {
            if mesh.target(gj) == v {
                matches += 1;
                shared.get_or_insert((v, hi, gj));
            }
        }
    }

    match shared {
        Some((vertex, first, second)) => {
            if matches > 1 {
                trace!(
                    ?f1,
                    ?f2,
                    matches,
                    "facets share several vertices but no edge, testing at the first"
                );
            }
            Adjacency::SharedVertex {
                vertex,
                first,
                second,
            }
        }
        None => Adjacency::Disjoint,
    }
}
