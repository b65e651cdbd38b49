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

//! Self-intersection detection for triangulated surface meshes.
//!
//! Facet bounding boxes are paired by a recursive box-intersection broad
//! phase; each candidate pair is classified by adjacency and confirmed with
//! orientation-based predicates evaluated in the chosen [`Kernel3`].
//!
//! ```
//! use selfx::{F64Kernel, Mesh, Point3, is_self_intersecting};
//!
//! let mesh = Mesh::from_triangles(
//!     vec![
//!         Point3::new(0.0, 0.0, 0.0),
//!         Point3::new(1.0, 0.0, 0.0),
//!         Point3::new(1.0, 1.0, 0.0),
//!         Point3::new(0.0, 1.0, 0.0),
//!     ],
//!     &[[0, 1, 2], [0, 2, 3]],
//! )
//! .unwrap();
//! assert!(!is_self_intersecting::<F64Kernel, _>(&mesh));
//! ```

pub mod error;
pub mod geometry;
pub mod kernel;
pub mod mesh;
pub mod numeric;
pub mod self_intersection;

pub use error::{MeshError, MeshResult};
pub use geometry::{Aabb, Point3, Segment3, Triangle3};
pub use kernel::{BigRationalKernel, F64Kernel, Kernel3};
pub use mesh::{Mesh, PolyhedralSurface};
pub use numeric::{ExactRational, Scalar, Sign};
pub use self_intersection::{
    Adjacency, CollectingSink, FacetIntersection, IntersectionSink, ScanStats,
    SelfIntersectionParams, StopAtFirst, find_self_intersections, find_self_intersections_with,
    is_self_intersecting, is_self_intersecting_with, par_self_intersect, self_intersect,
    self_intersecting_facets,
};
