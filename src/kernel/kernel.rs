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

use crate::{
    geometry::{aabb::Aabb, point::Point3, segment::Segment3, triangle::Triangle3},
    kernel::predicates,
    numeric::scalar::Scalar,
};

/// Geometric kernel: a scalar type plus the predicates evaluated on it.
///
/// Both intersection predicates default to the closed-set tests of
/// [`predicates`], so a kernel only has to pick its number type. The
/// detector calls them through the kernel, so overriding one replaces it
/// for every scan.
pub trait Kernel3 {
    type FT: Scalar;

    /// Whether predicates evaluated with `FT` are exact.
    const EXACT: bool;

    /// Conservative `f64` box around a point.
    fn bbox(p: &Point3<Self::FT>) -> Aabb {
        Aabb::from_point(p)
    }

    fn do_intersect_triangles(t1: &Triangle3<Self::FT>, t2: &Triangle3<Self::FT>) -> bool {
        predicates::do_intersect_triangles(t1, t2)
    }

    fn do_intersect_triangle_segment(t: &Triangle3<Self::FT>, s: &Segment3<Self::FT>) -> bool {
        predicates::do_intersect_triangle_segment(t, s)
    }
}
