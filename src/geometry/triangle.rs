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
    geometry::{point::Point3, segment::Segment3, vector::Vector3},
    numeric::scalar::Scalar,
};

/// A closed triangle with vertices in winding order.
#[derive(Debug, Clone, PartialEq)]
pub struct Triangle3<T: Scalar> {
    pub a: Point3<T>,
    pub b: Point3<T>,
    pub c: Point3<T>,
}

impl<T: Scalar> Triangle3<T> {
    pub fn new(a: &Point3<T>, b: &Point3<T>, c: &Point3<T>) -> Self {
        Self {
            a: a.clone(),
            b: b.clone(),
            c: c.clone(),
        }
    }

    pub fn vertices(&self) -> [&Point3<T>; 3] {
        [&self.a, &self.b, &self.c]
    }

    /// The three edges `ab`, `bc`, `ca`.
    pub fn edges(&self) -> [Segment3<T>; 3] {
        [
            Segment3::new(&self.a, &self.b),
            Segment3::new(&self.b, &self.c),
            Segment3::new(&self.c, &self.a),
        ]
    }

    /// Unnormalized normal `(b - a) x (c - a)`.
    pub fn normal(&self) -> Vector3<T> {
        self.a.vector_to(&self.b).cross(&self.a.vector_to(&self.c))
    }

    /// Zero area: the three vertices are collinear or coincide.
    pub fn is_degenerate(&self) -> bool {
        self.normal().is_zero()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn degenerate_when_collinear() {
        let t = Triangle3::new(
            &Point3::new(0.0, 0.0, 0.0),
            &Point3::new(1.0, 1.0, 1.0),
            &Point3::new(2.0, 2.0, 2.0),
        );
        assert!(t.is_degenerate());

        let u = Triangle3::new(
            &Point3::new(0.0, 0.0, 0.0),
            &Point3::new(1.0, 0.0, 0.0),
            &Point3::new(0.0, 1.0, 0.0),
        );
        assert!(!u.is_degenerate());
        assert_eq!(u.normal().coords, [0.0, 0.0, 1.0]);
        assert_eq!(u.edges()[1], Segment3::new(&u.b, &u.c));
    }
}
