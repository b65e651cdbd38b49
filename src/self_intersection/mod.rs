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

pub mod adjacency;
pub mod box_intersection;
pub mod detect;
pub mod facet_box;
pub(crate) mod narrow_phase;
pub mod params;
pub mod sink;
pub mod stats;

pub use adjacency::{Adjacency, classify};
pub use detect::{
    find_self_intersections, find_self_intersections_with, is_self_intersecting,
    is_self_intersecting_with, par_self_intersect, self_intersect, self_intersecting_facets,
};
pub use facet_box::{FacetBox, facet_boxes};
pub use params::SelfIntersectionParams;
pub use sink::{CollectingSink, FacetIntersection, IntersectionSink, StopAtFirst};
pub use stats::ScanStats;
