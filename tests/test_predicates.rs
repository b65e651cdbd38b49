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

use selfx::kernel::orientation::orient3d;
use selfx::{
    BigRationalKernel, ExactRational, F64Kernel, Kernel3, Mesh, Point3, Scalar, Segment3, Sign,
    Triangle3, find_self_intersections,
};

fn tri(v: [[f64; 3]; 3]) -> Triangle3<f64> {
    let [a, b, c] = v.map(|[x, y, z]| Point3::new(x, y, z));
    Triangle3::new(&a, &b, &c)
}

fn exact_tri(v: [[f64; 3]; 3]) -> Triangle3<ExactRational> {
    let [a, b, c] = v.map(|p| Point3::new(
        ExactRational::try_from(p[0]).unwrap(),
        ExactRational::try_from(p[1]).unwrap(),
        ExactRational::try_from(p[2]).unwrap(),
    ));
    Triangle3::new(&a, &b, &c)
}

/// Both kernels must give `expected` on well-conditioned input.
fn check_triangles(t1: [[f64; 3]; 3], t2: [[f64; 3]; 3], expected: bool) {
    assert_eq!(F64Kernel::do_intersect_triangles(&tri(t1), &tri(t2)), expected);
    assert_eq!(F64Kernel::do_intersect_triangles(&tri(t2), &tri(t1)), expected);
    assert_eq!(
        BigRationalKernel::do_intersect_triangles(&exact_tri(t1), &exact_tri(t2)),
        expected
    );
}

const UNIT: [[f64; 3]; 3] = [[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]];

#[test]
fn test_triangles_overlap() {
    check_triangles(
        UNIT,
        [[0.1, 0.1, 0.0], [0.9, 0.1, 0.0], [0.1, 0.9, 0.0]],
        true,
    );
    check_triangles(
        UNIT,
        [[2.0, 2.0, 0.0], [3.0, 2.0, 0.0], [2.0, 3.0, 0.0]],
        false,
    );
}

#[test]
fn test_triangles_crossing_planes() {
    check_triangles(
        UNIT,
        [[0.25, 0.25, -1.0], [0.25, 0.25, 1.0], [0.5, -1.0, 0.0]],
        true,
    );
    // above the plane, overlapping in projection only
    check_triangles(
        UNIT,
        [[0.1, 0.1, 0.5], [0.9, 0.1, 0.5], [0.1, 0.9, 0.5]],
        false,
    );
}

#[test]
fn test_triangles_touching() {
    // vertex on an edge
    check_triangles(
        UNIT,
        [[0.5, 0.0, 0.0], [0.5, -1.0, 1.0], [0.5, -1.0, -1.0]],
        true,
    );
    // shared corner point, different vertices
    check_triangles(
        UNIT,
        [[1.0, 0.0, 0.0], [2.0, 0.0, 1.0], [2.0, 1.0, 1.0]],
        true,
    );
}

#[test]
fn test_triangle_segment() {
    let t = tri(UNIT);
    let s = |a: [f64; 3], b: [f64; 3]| {
        Segment3::new(&Point3::new(a[0], a[1], a[2]), &Point3::new(b[0], b[1], b[2]))
    };
    assert!(F64Kernel::do_intersect_triangle_segment(&t, &s([0.2, 0.2, -1.0], [0.2, 0.2, 1.0])));
    assert!(!F64Kernel::do_intersect_triangle_segment(&t, &s([0.8, 0.8, -1.0], [0.8, 0.8, 1.0])));
    assert!(F64Kernel::do_intersect_triangle_segment(&t, &s([-1.0, 0.5, 0.0], [2.0, 0.5, 0.0])));
    assert!(!F64Kernel::do_intersect_triangle_segment(&t, &s([-1.0, 2.0, 0.0], [2.0, 2.0, 0.0])));
}

#[test]
fn test_exact_orientation_of_nearly_coplanar_point() {
    let t = exact_tri(UNIT);
    let tiny = ExactRational::from_ratio(1, 1 << 40) * ExactRational::from_ratio(1, 1 << 40);
    let zero = ExactRational::from_ratio(0, 1);
    let quarter = ExactRational::from_ratio(1, 4);

    let above = Point3::new(quarter.clone(), quarter.clone(), tiny);
    let on = Point3::new(quarter.clone(), quarter, zero);
    assert_eq!(orient3d(&t.a, &t.b, &t.c, &above).sign(), Sign::Positive);
    assert_eq!(orient3d(&t.a, &t.b, &t.c, &on).sign(), Sign::Zero);
    assert_eq!(orient3d(&t.a, &t.b, &t.c, &t.a), ExactRational::from_ratio(0, 1));
}

/// Reports every disjoint pair whose boxes overlap.
struct BoxOnlyKernel;

impl Kernel3 for BoxOnlyKernel {
    type FT = f64;

    const EXACT: bool = false;

    fn do_intersect_triangles(_: &Triangle3<f64>, _: &Triangle3<f64>) -> bool {
        true
    }
}

#[test]
fn test_overridden_predicate_drives_the_scan() {
    // boxes overlap, but the second triangle stays clear of the first
    let mesh = Mesh::from_triangles(
        vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(0.0, 1.0, 0.0),
            Point3::new(0.75, 0.75, -1.0),
            Point3::new(0.75, 0.75, 1.0),
            Point3::new(2.0, 2.0, 0.0),
        ],
        &[[0, 1, 2], [3, 4, 5]],
    )
    .unwrap();
    assert!(find_self_intersections::<F64Kernel, _>(&mesh).is_empty());
    assert_eq!(find_self_intersections::<BoxOnlyKernel, _>(&mesh).len(), 1);
}
