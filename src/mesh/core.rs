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

use std::collections::HashMap;

use smallvec::SmallVec;

use crate::{
    error::{MeshError, MeshResult},
    geometry::point::Point3,
    mesh::{face::Face, half_edge::HalfEdge, vertex::Vertex},
    numeric::scalar::Scalar,
};

/// Half-edge surface mesh stored in index arenas.
///
/// Every directed edge `(from, to)` maps to exactly one half-edge through
/// `edge_map`. Edges seen by a single face get a border twin with
/// `face == None`; border half-edges are not linked into boundary loops.
#[derive(Debug, Clone)]
pub struct Mesh<T: Scalar> {
    pub vertices: Vec<Vertex<T>>,
    pub half_edges: Vec<HalfEdge>,
    pub faces: Vec<Face>,

    pub edge_map: HashMap<(usize, usize), usize>,
}

impl<T: Scalar> Default for Mesh<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Scalar> Mesh<T> {
    pub fn new() -> Self {
        Self {
            vertices: Vec::new(),
            half_edges: Vec::new(),
            faces: Vec::new(),
            edge_map: HashMap::new(),
        }
    }

    /// Build a triangle mesh from a vertex list and index triples.
    pub fn from_triangles(points: Vec<Point3<T>>, triangles: &[[usize; 3]]) -> MeshResult<Self> {
        let mut mesh = Self::new();
        for p in points {
            mesh.add_vertex(p);
        }
        for &[a, b, c] in triangles {
            mesh.add_triangle(a, b, c)?;
        }
        Ok(mesh)
    }

    pub fn add_vertex(&mut self, position: Point3<T>) -> usize {
        let idx = self.vertices.len();
        self.vertices.push(Vertex::new(position));
        idx
    }

    /// Adds a triangle face given three vertex indices (in CCW order).
    pub fn add_triangle(&mut self, v0: usize, v1: usize, v2: usize) -> MeshResult<usize> {
        self.add_face(&[v0, v1, v2])
    }

    /// Adds a polygonal face given its vertex loop (in CCW order).
    /// Returns the index of the newly created face.
    pub fn add_face(&mut self, loop_vertices: &[usize]) -> MeshResult<usize> {
        self.check_face(loop_vertices)?;

        let face_idx = self.faces.len();
        let n = loop_vertices.len();
        let mut ring: SmallVec<[usize; 3]> = SmallVec::with_capacity(n);

        for i in 0..n {
            let from = loop_vertices[i];
            let to = loop_vertices[(i + 1) % n];

            if let Some(&he_idx) = self.edge_map.get(&(from, to)) {
                // A border half-edge left by the neighbor: claim it.
                self.half_edges[he_idx].face = Some(face_idx);
                ring.push(he_idx);
                continue;
            }

            let he_idx = self.half_edges.len();
            let mut he = HalfEdge::new(to);
            he.face = Some(face_idx);
            self.half_edges.push(he);
            self.edge_map.insert((from, to), he_idx);
            ring.push(he_idx);

            // Create border half-edge (to -> from). It lives "outside", so face=None.
            let border_idx = self.half_edges.len();
            let mut bhe = HalfEdge::new(from);
            bhe.twin = he_idx;
            bhe.next = border_idx;
            bhe.prev = border_idx;
            self.half_edges.push(bhe);
            self.edge_map.insert((to, from), border_idx);

            self.half_edges[he_idx].twin = border_idx;
        }

        // Link the face ring
        for i in 0..n {
            let h = ring[i];
            self.half_edges[h].next = ring[(i + 1) % n];
            self.half_edges[h].prev = ring[(i + n - 1) % n];
        }

        // Attach representative half-edges to vertices (don't overwrite if already set)
        for i in 0..n {
            self.vertices[loop_vertices[i]].half_edge.get_or_insert(ring[i]);
        }

        // representative half-edge ends at the first vertex of the loop
        self.faces.push(Face::new(ring[n - 1]));
        Ok(face_idx)
    }

    /// Validate a face loop without touching the mesh.
    fn check_face(&self, loop_vertices: &[usize]) -> MeshResult<()> {
        let n = loop_vertices.len();
        if n < 3 {
            return Err(MeshError::TooFewVertices(n));
        }

        for (i, &v) in loop_vertices.iter().enumerate() {
            if v >= self.vertices.len() {
                return Err(MeshError::InvalidVertexIndex {
                    index: v,
                    vertex_count: self.vertices.len(),
                });
            }
            if loop_vertices[..i].contains(&v) {
                return Err(MeshError::RepeatedVertex(v));
            }
        }

        for i in 0..n {
            let from = loop_vertices[i];
            let to = loop_vertices[(i + 1) % n];
            if let Some(&he_idx) = self.edge_map.get(&(from, to)) {
                if let Some(face) = self.half_edges[he_idx].face {
                    return Err(MeshError::NonManifoldEdge { from, to, face });
                }
            }
        }

        Ok(())
    }
}
