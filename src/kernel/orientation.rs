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

use crate::{geometry::point::Point3, numeric::scalar::Scalar};

/// Returns:
/// - >0 if counter-clockwise
/// - <0 if clockwise
/// - =0 if collinear
pub fn orient2d<T: Scalar>(a: &[T; 2], b: &[T; 2], c: &[T; 2]) -> T {
    let abx = b[0].clone() - a[0].clone();
    let aby = b[1].clone() - a[1].clone();
    let acx = c[0].clone() - a[0].clone();
    let acy = c[1].clone() - a[1].clone();
    abx * acy - aby * acx
}

/// Signed volume of tetra (a,b,c,d): ((b-a) x (c-a)) · (d-a)
pub fn orient3d<T: Scalar>(a: &Point3<T>, b: &Point3<T>, c: &Point3<T>, d: &Point3<T>) -> T {
    let ab = a.vector_to(b);
    let ac = a.vector_to(c);
    let ad = a.vector_to(d);
    ab.cross(&ac).dot(&ad)
}

#[cfg(test)]
mod tests {
    use crate::geometry::point::Point3;
    use crate::kernel::orientation::orient2d;
    use crate::kernel::orientation::orient3d;
    use crate::numeric::exact_rational::ExactRational;
    use crate::numeric::scalar::{Scalar, Sign};

    #[test]
    fn ccw_test() {
        let a = [0.0, 0.0];
        let b = [1.0, 0.0];
        let c = [0.0, 1.0];

        assert!(orient2d(&a, &b, &c) > 0.0); // Counter-clockwise
        assert!(orient2d(&a, &c, &b) < 0.0);
    }

    #[test]
    fn orientation_3d_positive_volume() {
        let a = Point3::new(0.0, 0.0, 0.0);
        let b = Point3::new(1.0, 0.0, 0.0);
        let c = Point3::new(0.0, 1.0, 0.0);
        let d = Point3::new(0.0, 0.0, 1.0); // above the abc plane

        let vol = orient3d(&a, &b, &c, &d);
        assert!(vol > 0.0);
    }

    #[test]
    fn orientation_3d_negative_volume() {
        let a = Point3::new(0.0, 0.0, 0.0);
        let b = Point3::new(1.0, 0.0, 0.0);
        let c = Point3::new(0.0, 1.0, 0.0);
        let d = Point3::new(0.0, 0.0, -1.0); // below the abc plane

        let vol = orient3d(&a, &b, &c, &d);
        assert!(vol < 0.0);
    }

    #[test]
    fn orientation_3d_coplanar_exact() {
        // 0.1 and 0.3 are not representable in binary, rationals keep them exact
        let r = |n: i64| ExactRational::from_ratio(n, 10);
        let a = Point3::new(r(0), r(0), r(0));
        let b = Point3::new(r(1), r(2), r(3));
        let c = Point3::new(r(3), r(1), r(2));
        let d = Point3::new(r(4), r(3), r(5)); // b + c

        assert_eq!(orient3d(&a, &b, &c, &d).sign(), Sign::Zero);
    }
}
