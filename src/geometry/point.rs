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

use std::ops::Index;

use crate::{geometry::vector::Vector3, numeric::scalar::Scalar};

#[derive(Clone, Debug, PartialEq)]
pub struct Point3<T: Scalar> {
    pub coords: [T; 3],
}

impl<T: Scalar> Point3<T> {
    pub fn new(x: T, y: T, z: T) -> Self {
        Point3 { coords: [x, y, z] }
    }

    /// Vector from `self` to `other`.
    pub fn vector_to(&self, other: &Point3<T>) -> Vector3<T> {
        Vector3::new(
            other.coords[0].clone() - self.coords[0].clone(),
            other.coords[1].clone() - self.coords[1].clone(),
            other.coords[2].clone() - self.coords[2].clone(),
        )
    }

    /// Drop one axis, keeping the two coordinates `(i0, i1)`.
    pub fn project(&self, i0: usize, i1: usize) -> [T; 2] {
        [self.coords[i0].clone(), self.coords[i1].clone()]
    }
}

impl<T: Scalar> Index<usize> for Point3<T> {
    type Output = T;
    fn index(&self, i: usize) -> &Self::Output {
        &self.coords[i]
    }
}
