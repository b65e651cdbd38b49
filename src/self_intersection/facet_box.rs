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

use crate::{geometry::aabb::Aabb, kernel::kernel::Kernel3, mesh::surface::PolyhedralSurface};

/// Bounding box of one facet, tagged with a dense id and the facet handle.
#[derive(Debug, Clone, Copy)]
pub struct FacetBox<F> {
    pub id: usize,
    pub bbox: Aabb,
    pub facet: F,
}

impl<F> FacetBox<F> {
    pub fn new(id: usize, bbox: Aabb, facet: F) -> Self {
        Self { id, bbox, facet }
    }
}

/// Box every facet of a triangle mesh. Ids follow facet enumeration order.
///
/// # Panics
///
/// Panics if some facet is not a triangle.
pub fn facet_boxes<K, M>(mesh: &M) -> Vec<FacetBox<M::Facet>>
where
    K: Kernel3<FT = M::FT>,
    M: PolyhedralSurface,
{
    assert!(
        mesh.is_pure_triangle(),
        "self-intersection test requires a purely triangular mesh"
    );

    mesh.facets()
        .enumerate()
        .map(|(id, f)| {
            let h0 = mesh.facet_halfedge(f);
            let h1 = mesh.next(h0);
            let h2 = mesh.next(h1);
            let bbox = K::bbox(mesh.point(mesh.target(h0)))
                .union(&K::bbox(mesh.point(mesh.target(h1))))
                .union(&K::bbox(mesh.point(mesh.target(h2))));
            FacetBox::new(id, bbox, f)
        })
        .collect()
}
