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

use std::{fmt::Debug, hash::Hash};

use crate::{geometry::point::Point3, mesh::core::Mesh, numeric::scalar::Scalar};

/// Read-only half-edge view of a polyhedral surface.
///
/// This is all the self-intersection detector needs from a mesh: facet
/// enumeration, walking a facet's boundary, the facet across an edge and
/// vertex identity. Handles are small copyable ids; equality of vertex
/// handles is topological identity, not coordinate equality.
pub trait PolyhedralSurface {
    type FT: Scalar;
    type Facet: Copy + Eq + Hash + Debug + Send + Sync;
    type Halfedge: Copy + Eq + Debug + Send + Sync;
    type Vertex: Copy + Eq + Debug + Send + Sync;

    fn facet_count(&self) -> usize;

    fn facets(&self) -> impl Iterator<Item = Self::Facet> + '_;

    /// Some half-edge on the boundary of `f`.
    fn facet_halfedge(&self, f: Self::Facet) -> Self::Halfedge;

    /// Next half-edge around the same facet.
    fn next(&self, h: Self::Halfedge) -> Self::Halfedge;

    /// Vertex `h` points to.
    fn target(&self, h: Self::Halfedge) -> Self::Vertex;

    /// Facet on the other side of `h`, `None` on the boundary.
    fn opposite_facet(&self, h: Self::Halfedge) -> Option<Self::Facet>;

    fn point(&self, v: Self::Vertex) -> &Point3<Self::FT>;

    fn facet_degree(&self, f: Self::Facet) -> usize {
        let start = self.facet_halfedge(f);
        let mut h = self.next(start);
        let mut degree = 1;
        while h != start {
            h = self.next(h);
            degree += 1;
        }
        degree
    }

    fn is_pure_triangle(&self) -> bool {
        self.facets().all(|f| self.facet_degree(f) == 3)
    }
}

impl<T: Scalar> PolyhedralSurface for Mesh<T> {
    type FT = T;
    type Facet = usize;
    type Halfedge = usize;
    type Vertex = usize;

    fn facet_count(&self) -> usize {
        self.faces.len()
    }

    fn facets(&self) -> impl Iterator<Item = usize> + '_ {
        0..self.faces.len()
    }

    fn facet_halfedge(&self, f: usize) -> usize {
        self.faces[f].half_edge
    }

    fn next(&self, h: usize) -> usize {
        self.half_edges[h].next
    }

    fn target(&self, h: usize) -> usize {
        self.half_edges[h].vertex
    }

    fn opposite_facet(&self, h: usize) -> Option<usize> {
        self.half_edges[self.half_edges[h].twin].face
    }

    fn point(&self, v: usize) -> &Point3<T> {
        &self.vertices[v].position
    }

    fn facet_degree(&self, f: usize) -> usize {
        self.face_degree(f)
    }

    fn is_pure_triangle(&self) -> bool {
        Mesh::is_pure_triangle(self)
    }
}
