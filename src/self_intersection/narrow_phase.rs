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

use std::marker::PhantomData;

use tracing::trace;

use crate::{
    geometry::{segment::Segment3, triangle::Triangle3},
    kernel::kernel::Kernel3,
    mesh::surface::PolyhedralSurface,
    self_intersection::{
        adjacency::{Adjacency, classify},
        facet_box::FacetBox,
        sink::FacetIntersection,
        stats::ScanCounters,
    },
};

/// Turns candidate box pairs into confirmed intersection reports.
pub(crate) struct FacetIntersector<'a, K, M: PolyhedralSurface> {
    mesh: &'a M,
    counters: &'a ScanCounters,
    _kernel: PhantomData<fn() -> K>,
}

impl<'a, K, M> FacetIntersector<'a, K, M>
where
    K: Kernel3<FT = M::FT>,
    M: PolyhedralSurface,
{
    pub fn new(mesh: &'a M, counters: &'a ScanCounters) -> Self {
        Self {
            mesh,
            counters,
            _kernel: PhantomData,
        }
    }

    /// Triangle of the facet, starting at the head of its half-edge.
    fn triangle(&self, f: M::Facet) -> Triangle3<M::FT> {
        let h0 = self.mesh.facet_halfedge(f);
        let h1 = self.mesh.next(h0);
        let h2 = self.mesh.next(h1);
        Triangle3::new(
            self.mesh.point(self.mesh.target(h0)),
            self.mesh.point(self.mesh.target(h1)),
            self.mesh.point(self.mesh.target(h2)),
        )
    }

    /// Edge of the facet opposite the vertex `h` points at.
    fn opposite_segment(&self, h: M::Halfedge) -> Segment3<M::FT> {
        let h1 = self.mesh.next(h);
        let h2 = self.mesh.next(h1);
        Segment3::new(
            self.mesh.point(self.mesh.target(h1)),
            self.mesh.point(self.mesh.target(h2)),
        )
    }

    /// Narrow-phase test of one candidate pair.
    pub fn test(
        &self,
        a: &FacetBox<M::Facet>,
        b: &FacetBox<M::Facet>,
    ) -> Option<FacetIntersection<M::Facet, M::FT>> {
        ScanCounters::bump(&self.counters.candidate_pairs);
        let (f1, f2) = (a.facet, b.facet);

        let adjacency = classify(self.mesh, f1, f2);
        trace!(?f1, ?f2, ?adjacency, "candidate pair");

        let hit = match adjacency {
            Adjacency::SharedEdge => {
                ScanCounters::bump(&self.counters.shared_edge_pairs);
                return None;
            }
            Adjacency::SharedVertex { first, second, .. } => {
                ScanCounters::bump(&self.counters.shared_vertex_pairs);
                let t1 = self.triangle(f1);
                let t2 = self.triangle(f2);

                ScanCounters::bump(&self.counters.predicate_calls);
                let hit = K::do_intersect_triangle_segment(&t1, &self.opposite_segment(second))
                    || {
                        ScanCounters::bump(&self.counters.predicate_calls);
                        K::do_intersect_triangle_segment(&t2, &self.opposite_segment(first))
                    };
                hit.then_some((t1, t2))
            }
            Adjacency::Disjoint => {
                ScanCounters::bump(&self.counters.disjoint_pairs);
                let t1 = self.triangle(f1);
                let t2 = self.triangle(f2);

                ScanCounters::bump(&self.counters.predicate_calls);
                K::do_intersect_triangles(&t1, &t2).then_some((t1, t2))
            }
        };

        hit.map(|triangles| FacetIntersection {
            facets: (f1, f2),
            triangles,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        geometry::point::Point3, kernel::f64_kernel::F64Kernel, mesh::core::Mesh,
        self_intersection::facet_box::facet_boxes,
    };

    fn run(mesh: &Mesh<f64>, f1: usize, f2: usize) -> (bool, ScanCounters) {
        let counters = ScanCounters::default();
        let boxes = facet_boxes::<F64Kernel, _>(mesh);
        let hit = FacetIntersector::<F64Kernel, _>::new(mesh, &counters)
            .test(&boxes[f1], &boxes[f2])
            .is_some();
        (hit, counters)
    }

    #[test]
    fn folded_shared_edge_is_never_reported() {
        // second triangle folded flat onto the first
        let mesh = Mesh::from_triangles(
            vec![
                Point3::new(0.0, 0.0, 0.0),
                Point3::new(1.0, 0.0, 0.0),
                Point3::new(0.0, 1.0, 0.0),
                Point3::new(0.2, 0.5, 0.0),
            ],
            &[[0, 1, 2], [1, 0, 3]],
        )
        .unwrap();
        let (hit, counters) = run(&mesh, 0, 1);
        assert!(!hit);
        let stats = counters.snapshot(2, false);
        assert_eq!(stats.shared_edge_pairs, 1);
        assert_eq!(stats.predicate_calls, 0);
    }

    #[test]
    fn shared_vertex_piercing() {
        // second triangle hangs from vertex 0 through the first
        let mesh = Mesh::from_triangles(
            vec![
                Point3::new(0.0, 0.0, 0.0),
                Point3::new(2.0, 0.0, 0.0),
                Point3::new(0.0, 2.0, 0.0),
                Point3::new(0.5, 0.5, 1.0),
                Point3::new(0.5, 0.5, -1.0),
            ],
            &[[0, 1, 2], [0, 3, 4]],
        )
        .unwrap();
        let (hit, counters) = run(&mesh, 0, 1);
        assert!(hit);
        assert_eq!(counters.snapshot(2, false).shared_vertex_pairs, 1);
    }

    #[test]
    fn shared_vertex_touching_only() {
        let mesh = Mesh::from_triangles(
            vec![
                Point3::new(0.0, 0.0, 0.0),
                Point3::new(1.0, 0.0, 0.0),
                Point3::new(0.0, 1.0, 0.0),
                Point3::new(-1.0, 0.0, 1.0),
                Point3::new(-1.0, 0.0, -1.0),
            ],
            &[[0, 1, 2], [0, 3, 4]],
        )
        .unwrap();
        let (hit, counters) = run(&mesh, 0, 1);
        assert!(!hit);
        assert_eq!(counters.snapshot(2, false).predicate_calls, 2);
    }

    #[test]
    fn disjoint_crossing() {
        let mesh = Mesh::from_triangles(
            vec![
                Point3::new(0.0, 0.0, 0.0),
                Point3::new(2.0, 0.0, 0.0),
                Point3::new(0.0, 2.0, 0.0),
                Point3::new(0.5, 0.5, -1.0),
                Point3::new(0.5, 0.5, 1.0),
                Point3::new(0.6, -1.0, 0.0),
            ],
            &[[0, 1, 2], [3, 4, 5]],
        )
        .unwrap();
        let (hit, counters) = run(&mesh, 0, 1);
        assert!(hit);
        assert_eq!(counters.snapshot(2, false).disjoint_pairs, 1);
    }
}
