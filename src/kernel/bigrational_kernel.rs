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

use crate::kernel::kernel::Kernel3;
use crate::numeric::exact_rational::ExactRational;

/// Kernel using rug::Rational (arbitrary-precision rationals backed by GMP)
pub struct BigRationalKernel;

impl Kernel3 for BigRationalKernel {
    type FT = ExactRational;

    const EXACT: bool = true;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{point::Point3, triangle::Triangle3};
    use crate::kernel::orientation::orient3d;
    use crate::numeric::scalar::{Scalar, Sign};

    #[test]
    fn nearly_touching_triangles_are_separated() {
        let r = |n: i64, d: i64| ExactRational::from_ratio(n, d);
        let t1 = Triangle3::new(
            &Point3::new(r(0, 1), r(0, 1), r(0, 1)),
            &Point3::new(r(1, 1), r(0, 1), r(0, 1)),
            &Point3::new(r(0, 1), r(1, 1), r(0, 1)),
        );
        // apex hovers 1e-30 above the plane of t1
        let t2 = Triangle3::new(
            &Point3::new(r(1, 4), r(1, 4), r(1, 1_000_000_000_000_000) * r(1, 1_000_000_000_000_000)),
            &Point3::new(r(1, 4), r(1, 4), r(1, 1)),
            &Point3::new(r(1, 2), r(1, 4), r(1, 1)),
        );
        assert!(!BigRationalKernel::do_intersect_triangles(&t1, &t2));
        assert_eq!(
            orient3d(&t1.a, &t1.b, &t1.c, &t2.a).sign(),
            Sign::Positive
        );
    }
}
