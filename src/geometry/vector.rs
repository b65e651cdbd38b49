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

use crate::numeric::scalar::Scalar;

#[derive(Clone, Debug, PartialEq)]
pub struct Vector3<T: Scalar> {
    pub coords: [T; 3],
}

impl<T: Scalar> Vector3<T> {
    pub fn new(x: T, y: T, z: T) -> Self {
        Vector3 { coords: [x, y, z] }
    }

    pub fn dot(&self, other: &Vector3<T>) -> T {
        let [a0, a1, a2] = self.coords.clone();
        let [b0, b1, b2] = other.coords.clone();
        a0 * b0 + a1 * b1 + a2 * b2
    }

    pub fn cross(&self, other: &Vector3<T>) -> Vector3<T> {
        let [a0, a1, a2] = &self.coords;
        let [b0, b1, b2] = &other.coords;
        Vector3::new(
            a1.clone() * b2.clone() - a2.clone() * b1.clone(),
            a2.clone() * b0.clone() - a0.clone() * b2.clone(),
            a0.clone() * b1.clone() - a1.clone() * b0.clone(),
        )
    }

    pub fn is_zero(&self) -> bool {
        self.coords.iter().all(|c| c.sign().is_zero())
    }

    /// Axis of the largest absolute component. Ties resolve to the lower axis.
    pub fn dominant_axis(&self) -> usize {
        let mut best_i = 0usize;
        let mut best = self.coords[0].abs();
        for i in 1..3 {
            let c = self.coords[i].abs();
            if c > best {
                best_i = i;
                best = c;
            }
        }
        best_i
    }
}

impl<T: Scalar> Index<usize> for Vector3<T> {
    type Output = T;
    fn index(&self, i: usize) -> &Self::Output {
        &self.coords[i]
    }
}
