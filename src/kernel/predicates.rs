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

//! Closed-set intersection predicates built on orientation signs.
//!
//! Every predicate treats triangles and segments as closed point sets, so
//! touching configurations (shared points, an endpoint on an edge, coplanar
//! contact along a boundary) count as intersecting. Zero-area triangles are
//! handled as the union of their edges. The answers are exact whenever the
//! scalar type is exact.

use crate::{
    geometry::{point::Point3, segment::Segment3, triangle::Triangle3, vector::Vector3},
    kernel::orientation::{orient2d, orient3d},
    numeric::scalar::{Scalar, Sign},
};

/// Coordinates kept when projecting along the dominant axis of `normal`.
fn projection_axes<T: Scalar>(normal: &Vector3<T>) -> (usize, usize) {
    match normal.dominant_axis() {
        0 => (1, 2),
        1 => (2, 0),
        _ => (0, 1),
    }
}

fn mixed_signs(signs: &[Sign]) -> bool {
    signs.contains(&Sign::Positive) && signs.contains(&Sign::Negative)
}

fn all_strictly_same(signs: &[Sign; 3]) -> bool {
    signs[0] != Sign::Zero && signs.iter().all(|s| *s == signs[0])
}

fn ordered<'a, T: Scalar>(a: &'a T, b: &'a T) -> (&'a T, &'a T) {
    if a <= b { (a, b) } else { (b, a) }
}

fn intervals_overlap<T: Scalar>(p: &T, q: &T, r: &T, s: &T) -> bool {
    let (lo1, hi1) = ordered(p, q);
    let (lo2, hi2) = ordered(r, s);
    lo1 <= hi2 && lo2 <= hi1
}

/// Closed point-in-triangle test in 2D. The triangle must not be degenerate.
pub fn point_in_triangle_2d<T: Scalar>(p: &[T; 2], a: &[T; 2], b: &[T; 2], c: &[T; 2]) -> bool {
    let signs = [
        orient2d(a, b, p).sign(),
        orient2d(b, c, p).sign(),
        orient2d(c, a, p).sign(),
    ];
    !mixed_signs(&signs)
}

/// Closed segment/segment test in 2D, collinear overlaps included.
pub fn segments_intersect_2d<T: Scalar>(p: &[T; 2], q: &[T; 2], r: &[T; 2], s: &[T; 2]) -> bool {
    let o1 = orient2d(p, q, r).sign();
    let o2 = orient2d(p, q, s).sign();
    let o3 = orient2d(r, s, p).sign();
    let o4 = orient2d(r, s, q).sign();

    if o1.same_strict(o2) || o3.same_strict(o4) {
        return false;
    }
    if o1.is_zero() && o2.is_zero() && o3.is_zero() && o4.is_zero() {
        // collinear: overlap on both axes
        return (0..2).all(|i| intervals_overlap(&p[i], &q[i], &r[i], &s[i]));
    }
    true
}

/// Closed segment/segment test in 3D.
pub fn segments_intersect_3d<T: Scalar>(s1: &Segment3<T>, s2: &Segment3<T>) -> bool {
    let (p, q) = (&s1.a, &s1.b);
    let (r, s) = (&s2.a, &s2.b);

    if !orient3d(p, q, r, s).sign().is_zero() {
        return false;
    }

    let pq = p.vector_to(q);
    let rs = r.vector_to(s);
    let pr = p.vector_to(r);
    let ps = p.vector_to(s);
    let rp = r.vector_to(p);

    let plane = [pq.cross(&pr), pq.cross(&ps), rs.cross(&rp)]
        .into_iter()
        .find(|n| !n.is_zero());

    if let Some(normal) = plane {
        let (i0, i1) = projection_axes(&normal);
        return segments_intersect_2d(
            &p.project(i0, i1),
            &q.project(i0, i1),
            &r.project(i0, i1),
            &s.project(i0, i1),
        );
    }

    // all four points on one line (or coincident)
    match [&pq, &rs, &pr].into_iter().find(|v| !v.is_zero()) {
        Some(direction) => {
            let axis = direction.dominant_axis();
            intervals_overlap(&p[axis], &q[axis], &r[axis], &s[axis])
        }
        None => true,
    }
}

fn coplanar_triangle_segment<T: Scalar>(t: &Triangle3<T>, seg: &Segment3<T>) -> bool {
    let (i0, i1) = projection_axes(&t.normal());
    let [a, b, c] = t.vertices().map(|v| v.project(i0, i1));
    let p = seg.a.project(i0, i1);
    let q = seg.b.project(i0, i1);

    point_in_triangle_2d(&p, &a, &b, &c)
        || point_in_triangle_2d(&q, &a, &b, &c)
        || segments_intersect_2d(&p, &q, &a, &b)
        || segments_intersect_2d(&p, &q, &b, &c)
        || segments_intersect_2d(&p, &q, &c, &a)
}

/// Does the closed triangle `t` meet the closed segment `seg`?
pub fn do_intersect_triangle_segment<T: Scalar>(t: &Triangle3<T>, seg: &Segment3<T>) -> bool {
    if t.is_degenerate() {
        return t.edges().iter().any(|e| segments_intersect_3d(e, seg));
    }

    let (a, b, c) = (&t.a, &t.b, &t.c);
    let op = orient3d(a, b, c, &seg.a).sign();
    let oq = orient3d(a, b, c, &seg.b).sign();

    if op.same_strict(oq) {
        return false;
    }
    if op.is_zero() && oq.is_zero() {
        return coplanar_triangle_segment(t, seg);
    }

    // the segment meets the supporting plane in exactly one point;
    // it lies in the triangle iff the line sees every edge from the same side
    let signs = [
        orient3d(&seg.a, &seg.b, a, b).sign(),
        orient3d(&seg.a, &seg.b, b, c).sign(),
        orient3d(&seg.a, &seg.b, c, a).sign(),
    ];
    !mixed_signs(&signs)
}

fn vertex_signs<T: Scalar>(plane: &Triangle3<T>, points: [&Point3<T>; 3]) -> [Sign; 3] {
    points.map(|p| orient3d(&plane.a, &plane.b, &plane.c, p).sign())
}

/// Do the closed triangles `t1` and `t2` share at least one point?
pub fn do_intersect_triangles<T: Scalar>(t1: &Triangle3<T>, t2: &Triangle3<T>) -> bool {
    if t1.is_degenerate() {
        return t1
            .edges()
            .iter()
            .any(|e| do_intersect_triangle_segment(t2, e));
    }
    if t2.is_degenerate() {
        return t2
            .edges()
            .iter()
            .any(|e| do_intersect_triangle_segment(t1, e));
    }

    if all_strictly_same(&vertex_signs(t1, t2.vertices()))
        || all_strictly_same(&vertex_signs(t2, t1.vertices()))
    {
        return false;
    }

    // A non-empty intersection always contains a point of some edge of one
    // triangle lying in the other one.
    t2.edges()
        .iter()
        .any(|e| do_intersect_triangle_segment(t1, e))
        || t1
            .edges()
            .iter()
            .any(|e| do_intersect_triangle_segment(t2, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numeric::exact_rational::ExactRational;

    fn p(x: f64, y: f64, z: f64) -> Point3<f64> {
        Point3::new(x, y, z)
    }

    fn tri(a: Point3<f64>, b: Point3<f64>, c: Point3<f64>) -> Triangle3<f64> {
        Triangle3::new(&a, &b, &c)
    }

    fn seg(a: Point3<f64>, b: Point3<f64>) -> Segment3<f64> {
        Segment3::new(&a, &b)
    }

    fn unit_xy() -> Triangle3<f64> {
        tri(p(0.0, 0.0, 0.0), p(1.0, 0.0, 0.0), p(0.0, 1.0, 0.0))
    }

    #[test]
    fn segment_pierces_triangle() {
        let t = unit_xy();
        assert!(do_intersect_triangle_segment(
            &t,
            &seg(p(0.2, 0.2, -1.0), p(0.2, 0.2, 1.0))
        ));
        assert!(!do_intersect_triangle_segment(
            &t,
            &seg(p(0.8, 0.8, -1.0), p(0.8, 0.8, 1.0))
        ));
    }

    #[test]
    fn segment_stops_short_of_plane() {
        let t = unit_xy();
        assert!(!do_intersect_triangle_segment(
            &t,
            &seg(p(0.2, 0.2, 0.5), p(0.2, 0.2, 1.0))
        ));
    }

    #[test]
    fn segment_endpoint_touching_counts() {
        let t = unit_xy();
        assert!(do_intersect_triangle_segment(
            &t,
            &seg(p(0.2, 0.2, 0.0), p(0.2, 0.2, 1.0))
        ));
        // touching the edge
        assert!(do_intersect_triangle_segment(
            &t,
            &seg(p(0.5, 0.0, 0.0), p(0.5, -1.0, 1.0))
        ));
    }

    #[test]
    fn coplanar_segment_cases() {
        let t = unit_xy();
        // crosses the hypotenuse
        assert!(do_intersect_triangle_segment(
            &t,
            &seg(p(0.2, 0.2, 0.0), p(2.0, 2.0, 0.0))
        ));
        // entirely inside
        assert!(do_intersect_triangle_segment(
            &t,
            &seg(p(0.1, 0.1, 0.0), p(0.2, 0.1, 0.0))
        ));
        // outside, parallel to the hypotenuse
        assert!(!do_intersect_triangle_segment(
            &t,
            &seg(p(1.0, 0.5, 0.0), p(0.5, 1.0, 0.0))
        ));
    }

    #[test]
    fn perpendicular_triangles() {
        let t1 = tri(p(-1.0, -1.0, 0.0), p(1.0, -1.0, 0.0), p(0.0, 1.0, 0.0));
        let crossing = tri(p(-1.0, 0.0, -1.0), p(1.0, 0.0, -1.0), p(0.0, 0.0, 1.0));
        let apart = tri(p(-1.0, 5.0, -1.0), p(1.0, 5.0, -1.0), p(0.0, 5.0, 1.0));
        assert!(do_intersect_triangles(&t1, &crossing));
        assert!(do_intersect_triangles(&crossing, &t1));
        assert!(!do_intersect_triangles(&t1, &apart));
    }

    #[test]
    fn coplanar_triangles() {
        let big = tri(p(0.0, 0.0, 0.0), p(4.0, 0.0, 0.0), p(0.0, 4.0, 0.0));
        let inner = tri(p(0.5, 0.5, 0.0), p(1.0, 0.5, 0.0), p(0.5, 1.0, 0.0));
        let beside = tri(p(5.0, 0.0, 0.0), p(6.0, 0.0, 0.0), p(5.0, 1.0, 0.0));
        assert!(do_intersect_triangles(&big, &inner));
        assert!(do_intersect_triangles(&inner, &big));
        assert!(!do_intersect_triangles(&big, &beside));
    }

    #[test]
    fn degenerate_triangle_is_its_edges() {
        let t = unit_xy();
        let needle = tri(p(0.2, 0.2, -1.0), p(0.2, 0.2, 0.0), p(0.2, 0.2, 1.0));
        let far_needle = tri(p(3.0, 3.0, -1.0), p(3.0, 3.0, 0.0), p(3.0, 3.0, 1.0));
        assert!(do_intersect_triangles(&t, &needle));
        assert!(!do_intersect_triangles(&far_needle, &t));
    }

    #[test]
    fn collinear_segments_3d() {
        let a = seg(p(0.0, 0.0, 0.0), p(2.0, 2.0, 2.0));
        let b = seg(p(1.0, 1.0, 1.0), p(3.0, 3.0, 3.0));
        let c = seg(p(2.5, 2.5, 2.5), p(3.0, 3.0, 3.0));
        assert!(segments_intersect_3d(&a, &b));
        assert!(!segments_intersect_3d(&a, &c));
        let point = seg(p(1.0, 1.0, 1.0), p(1.0, 1.0, 1.0));
        assert!(segments_intersect_3d(&a, &point));
    }

    #[test]
    fn skew_segments_do_not_meet() {
        let a = seg(p(0.0, 0.0, 0.0), p(1.0, 0.0, 0.0));
        let b = seg(p(0.5, -1.0, 1.0), p(0.5, 1.0, 1.0));
        assert!(!segments_intersect_3d(&a, &b));
        let c = seg(p(0.5, -1.0, 0.0), p(0.5, 1.0, 0.0));
        assert!(segments_intersect_3d(&a, &c));
    }

    #[test]
    fn exact_touching_at_non_binary_coordinate() {
        // the segment endpoint sits exactly on the triangle at z = 1/3
        let r = |n: i64, d: i64| ExactRational::from_ratio(n, d);
        let t = Triangle3::new(
            &Point3::new(r(0, 1), r(0, 1), r(1, 3)),
            &Point3::new(r(1, 1), r(0, 1), r(1, 3)),
            &Point3::new(r(0, 1), r(1, 1), r(1, 3)),
        );
        let touching = Segment3::new(
            &Point3::new(r(1, 5), r(1, 5), r(1, 3)),
            &Point3::new(r(1, 5), r(1, 5), r(1, 1)),
        );
        let above = Segment3::new(
            &Point3::new(r(1, 5), r(1, 5), r(1, 3) + r(1, 1_000_000_000)),
            &Point3::new(r(1, 5), r(1, 5), r(1, 1)),
        );
        assert!(do_intersect_triangle_segment(&t, &touching));
        assert!(!do_intersect_triangle_segment(&t, &above));
    }
}
