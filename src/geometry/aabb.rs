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

/// An axis-aligned `f64` bounding box in 3 dimensions.
///
/// Boxes are closed: boxes that only touch on a face, edge or corner intersect.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Aabb {
    pub min: [f64; 3],
    pub max: [f64; 3],
}

impl Aabb {
    pub fn new(min: [f64; 3], max: [f64; 3]) -> Self {
        Aabb { min, max }
    }

    /// Smallest box containing `p`, widened for inexact conversions.
    pub fn from_point<T: Scalar>(p: &Point3<T>) -> Self {
        let bounds: [(f64, f64); 3] = std::array::from_fn(|i| p[i].bbox_bounds());
        Aabb {
            min: bounds.map(|(lo, _)| lo),
            max: bounds.map(|(_, hi)| hi),
        }
    }

    pub fn union(&self, other: &Aabb) -> Aabb {
        let mins = std::array::from_fn(|i| self.min[i].min(other.min[i]));
        let maxs = std::array::from_fn(|i| self.max[i].max(other.max[i]));
        Aabb::new(mins, maxs)
    }

    /// Does this AABB intersect `other`?
    pub fn intersects(&self, other: &Aabb) -> bool {
        (0..3).all(|i| self.min[i] <= other.max[i] && other.min[i] <= self.max[i])
    }

    /// Lower corner of the intersection of two boxes. Only meaningful when they intersect.
    pub fn intersection_min_corner(&self, other: &Aabb) -> [f64; 3] {
        std::array::from_fn(|i| self.min[i].max(other.min[i]))
    }

    /// Center coordinate along axis `i`.
    pub fn center(&self, i: usize) -> f64 {
        0.5 * (self.min[i] + self.max[i])
    }
}
