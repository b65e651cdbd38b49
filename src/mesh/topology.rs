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

use smallvec::SmallVec;

use crate::{
    geometry::triangle::Triangle3,
    mesh::core::Mesh,
    numeric::scalar::Scalar,
};

impl<T: Scalar> Mesh<T> {
    pub fn target(&self, he: usize) -> usize {
        self.half_edges[he].vertex
    }

    /// Returns the indices of the half-edges bounding face `f`,
    /// in CCW order.
    pub fn face_half_edges(&self, f: usize) -> SmallVec<[usize; 3]> {
        let mut result = SmallVec::new();
        let start = self.faces[f].half_edge;
        let mut h = start;
        loop {
            result.push(h);
            h = self.half_edges[h].next;

            if h == start {
                break;
            }
        }
        result
    }

    /// Vertex loop of face `f`, starting at the head of its representative half-edge.
    pub fn face_vertices(&self, f: usize) -> SmallVec<[usize; 3]> {
        self.face_half_edges(f)
            .iter()
            .map(|&h| self.target(h))
            .collect()
    }

    pub fn face_degree(&self, f: usize) -> usize {
        self.face_half_edges(f).len()
    }

    pub fn is_pure_triangle(&self) -> bool {
        (0..self.faces.len()).all(|f| self.face_degree(f) == 3)
    }

    /// Face across each edge of `f`, in ring order; `None` on the boundary.
    pub fn faces_around_face(&self, f: usize) -> SmallVec<[Option<usize>; 3]> {
        self.face_half_edges(f)
            .iter()
            .map(|&h| self.half_edges[self.half_edges[h].twin].face)
            .collect()
    }

    pub fn are_faces_adjacent(&self, f1: usize, f2: usize) -> bool {
        self.faces_around_face(f1).contains(&Some(f2))
    }

    /// Geometry of triangular face `f`. Panics if `f` is not a triangle.
    pub fn face_triangle(&self, f: usize) -> Triangle3<T> {
        let vs = self.face_vertices(f);
        assert_eq!(vs.len(), 3, "face {} is not a triangle", f);
        Triangle3::new(
            &self.vertices[vs[0]].position,
            &self.vertices[vs[1]].position,
            &self.vertices[vs[2]].position,
        )
    }
}
