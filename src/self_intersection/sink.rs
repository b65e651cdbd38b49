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

use std::ops::ControlFlow;

use crate::{geometry::triangle::Triangle3, numeric::scalar::Scalar};

/// A confirmed intersecting facet pair.
#[derive(Debug, Clone, PartialEq)]
pub struct FacetIntersection<F, T: Scalar> {
    pub facets: (F, F),
    pub triangles: (Triangle3<T>, Triangle3<T>),
}

/// Consumer of intersection reports.
///
/// Returning `ControlFlow::Break` aborts the scan: no further candidate
/// pair is examined and no further report is delivered.
pub trait IntersectionSink<F, T: Scalar> {
    fn accept(&mut self, report: FacetIntersection<F, T>) -> ControlFlow<()>;
}

impl<F, T: Scalar, S: IntersectionSink<F, T> + ?Sized> IntersectionSink<F, T> for &mut S {
    fn accept(&mut self, report: FacetIntersection<F, T>) -> ControlFlow<()> {
        (**self).accept(report)
    }
}

/// Keeps every report.
#[derive(Debug, Clone)]
pub struct CollectingSink<F, T: Scalar> {
    pub reports: Vec<FacetIntersection<F, T>>,
}

impl<F, T: Scalar> Default for CollectingSink<F, T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F, T: Scalar> CollectingSink<F, T> {
    pub fn new() -> Self {
        Self {
            reports: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.reports.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reports.is_empty()
    }

    pub fn into_triangle_pairs(self) -> Vec<(Triangle3<T>, Triangle3<T>)> {
        self.reports.into_iter().map(|r| r.triangles).collect()
    }

    pub fn into_facet_pairs(self) -> Vec<(F, F)> {
        self.reports.into_iter().map(|r| r.facets).collect()
    }
}

impl<F, T: Scalar> IntersectionSink<F, T> for CollectingSink<F, T> {
    fn accept(&mut self, report: FacetIntersection<F, T>) -> ControlFlow<()> {
        self.reports.push(report);
        ControlFlow::Continue(())
    }
}

/// Remembers the first report and stops the scan.
#[derive(Debug, Clone)]
pub struct StopAtFirst<F, T: Scalar> {
    first: Option<FacetIntersection<F, T>>,
}

impl<F, T: Scalar> Default for StopAtFirst<F, T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F, T: Scalar> StopAtFirst<F, T> {
    pub fn new() -> Self {
        Self { first: None }
    }

    pub fn found(&self) -> bool {
        self.first.is_some()
    }

    pub fn into_first(self) -> Option<FacetIntersection<F, T>> {
        self.first
    }
}

impl<F, T: Scalar> IntersectionSink<F, T> for StopAtFirst<F, T> {
    fn accept(&mut self, report: FacetIntersection<F, T>) -> ControlFlow<()> {
        self.first.get_or_insert(report);
        ControlFlow::Break(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::point::Point3;

    fn report(f: usize) -> FacetIntersection<usize, f64> {
        let t = Triangle3::new(
            &Point3::new(0.0, 0.0, 0.0),
            &Point3::new(1.0, 0.0, 0.0),
            &Point3::new(0.0, 1.0, 0.0),
        );
        FacetIntersection {
            facets: (f, f + 1),
            triangles: (t.clone(), t),
        }
    }

    #[test]
    fn collecting_sink_never_breaks() {
        let mut sink = CollectingSink::new();
        assert!(sink.accept(report(0)).is_continue());
        assert!(sink.accept(report(4)).is_continue());
        assert_eq!(sink.len(), 2);
        assert_eq!(sink.into_facet_pairs(), vec![(0, 1), (4, 5)]);
    }

    #[test]
    fn stop_at_first_keeps_first() {
        let mut sink = StopAtFirst::new();
        assert!(!sink.found());
        assert!(sink.accept(report(2)).is_break());
        assert!(sink.accept(report(8)).is_break());
        assert!(sink.found());
        assert_eq!(sink.into_first().map(|r| r.facets), Some((2, 3)));
    }

    #[test]
    fn forwarding_through_mut_ref() {
        fn feed<S: IntersectionSink<usize, f64>>(mut sink: S) {
            let _ = sink.accept(report(1));
        }
        let mut inner = CollectingSink::new();
        feed(&mut inner);
        assert_eq!(inner.len(), 1);
    }
}
