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

//! Broad phase: all pairs of intersecting boxes in a set.
//!
//! The set is split recursively along the axis with the widest spread of
//! box centers, at a sampled median. Boxes straddling the split value go to
//! both halves. Each recursion level owns a half-open region of space and
//! only reports a pair there when the lower corner of the pair's
//! intersection lies inside it, so every pair is found in exactly one leaf.

use std::{
    ops::ControlFlow,
    sync::atomic::{AtomicBool, Ordering},
};

use rand::{Rng, SeedableRng, rngs::StdRng};
use tracing::trace;

use crate::self_intersection::facet_box::FacetBox;

/// Sample size for the approximate median.
const MEDIAN_SAMPLE: usize = 63;

/// Half-open box `[lo, hi)` of space owned by one recursion frame.
#[derive(Debug, Clone, Copy)]
struct Region {
    lo: [f64; 3],
    hi: [f64; 3],
}

impl Region {
    fn everywhere() -> Self {
        Region {
            lo: [f64::NEG_INFINITY; 3],
            hi: [f64::INFINITY; 3],
        }
    }

    fn contains(&self, p: &[f64; 3]) -> bool {
        (0..3).all(|i| self.lo[i] <= p[i] && (p[i] < self.hi[i] || self.hi[i] == f64::INFINITY))
    }

    fn below(&self, axis: usize, value: f64) -> Region {
        let mut r = *self;
        r.hi[axis] = value;
        r
    }

    fn above(&self, axis: usize, value: f64) -> Region {
        let mut r = *self;
        r.lo[axis] = value;
        r
    }
}

/// Outcome of splitting a working set.
struct Split {
    axis: usize,
    value: f64,
    left: Vec<usize>,
    right: Vec<usize>,
}

/// Tuning shared by every recursion frame.
#[derive(Debug, Clone, Copy)]
pub struct BoxScan {
    pub cutoff: usize,
    pub seed: u64,
}

impl BoxScan {
    pub fn new(cutoff: usize, seed: u64) -> Self {
        Self {
            cutoff: cutoff.max(1),
            seed,
        }
    }

    /// Hand every intersecting pair `(a, b)` with `a.id < b.id` to
    /// `callback`, once. Stops as soon as the callback breaks.
    ///
    /// Boxes are expected to carry their index in `boxes` as `id`.
    pub fn run<F, C>(&self, boxes: &[FacetBox<F>], callback: &mut C) -> ControlFlow<()>
    where
        C: FnMut(&FacetBox<F>, &FacetBox<F>) -> ControlFlow<()>,
    {
        let all: Vec<usize> = (0..boxes.len()).collect();
        self.recurse(boxes, &all, Region::everywhere(), 0, callback)
    }

    /// Parallel flavor of [`BoxScan::run`]. Working sets of at least `grain`
    /// boxes are split across the rayon pool; the first `Break` from any
    /// worker stops the others before their next pair.
    pub fn par_run<F, C>(&self, boxes: &[FacetBox<F>], grain: usize, callback: &C) -> ControlFlow<()>
    where
        F: Sync,
        C: Fn(&FacetBox<F>, &FacetBox<F>) -> ControlFlow<()> + Sync,
    {
        let all: Vec<usize> = (0..boxes.len()).collect();
        let stop = AtomicBool::new(false);
        self.par_recurse(boxes, &all, Region::everywhere(), 0, grain.max(2), &stop, callback)
    }

    fn recurse<F, C>(
        &self,
        boxes: &[FacetBox<F>],
        subset: &[usize],
        region: Region,
        depth: usize,
        callback: &mut C,
    ) -> ControlFlow<()>
    where
        C: FnMut(&FacetBox<F>, &FacetBox<F>) -> ControlFlow<()>,
    {
        match self.split(boxes, subset, depth) {
            None => brute_force(boxes, subset, &region, callback),
            Some(split) => {
                self.recurse(
                    boxes,
                    &split.left,
                    region.below(split.axis, split.value),
                    depth + 1,
                    callback,
                )?;
                self.recurse(
                    boxes,
                    &split.right,
                    region.above(split.axis, split.value),
                    depth + 1,
                    callback,
                )
            }
        }
    }

    #[allow(clippy::too_many_arguments)]
    fn par_recurse<F, C>(
        &self,
        boxes: &[FacetBox<F>],
        subset: &[usize],
        region: Region,
        depth: usize,
        grain: usize,
        stop: &AtomicBool,
        callback: &C,
    ) -> ControlFlow<()>
    where
        F: Sync,
        C: Fn(&FacetBox<F>, &FacetBox<F>) -> ControlFlow<()> + Sync,
    {
        if stop.load(Ordering::Relaxed) {
            return ControlFlow::Break(());
        }

        let mut guarded = |a: &FacetBox<F>, b: &FacetBox<F>| {
            if stop.load(Ordering::Relaxed) {
                return ControlFlow::Break(());
            }
            let flow = callback(a, b);
            if flow.is_break() {
                stop.store(true, Ordering::Relaxed);
            }
            flow
        };

        if subset.len() < grain {
            return self.recurse(boxes, subset, region, depth, &mut guarded);
        }

        match self.split(boxes, subset, depth) {
            None => brute_force(boxes, subset, &region, &mut guarded),
            Some(split) => {
                let (left, right) = rayon::join(
                    || {
                        self.par_recurse(
                            boxes,
                            &split.left,
                            region.below(split.axis, split.value),
                            depth + 1,
                            grain,
                            stop,
                            callback,
                        )
                    },
                    || {
                        self.par_recurse(
                            boxes,
                            &split.right,
                            region.above(split.axis, split.value),
                            depth + 1,
                            grain,
                            stop,
                            callback,
                        )
                    },
                );
                if left.is_break() || right.is_break() {
                    ControlFlow::Break(())
                } else {
                    ControlFlow::Continue(())
                }
            }
        }
    }

    /// Split `subset`, or `None` when it should be scanned directly.
    ///
    /// Axes are tried from the widest spread of box centers down; the first
    /// one whose sampled median leaves each side with fewer boxes wins.
    fn split<F>(&self, boxes: &[FacetBox<F>], subset: &[usize], depth: usize) -> Option<Split> {
        if subset.len() <= self.cutoff {
            return None;
        }

        let mut lo = [f64::INFINITY; 3];
        let mut hi = [f64::NEG_INFINITY; 3];
        for &i in subset {
            for axis in 0..3 {
                let c = boxes[i].bbox.center(axis);
                lo[axis] = lo[axis].min(c);
                hi[axis] = hi[axis].max(c);
            }
        }
        let spread: [f64; 3] = std::array::from_fn(|axis| hi[axis] - lo[axis]);
        let mut axes = [0, 1, 2];
        axes.sort_by(|&a, &b| spread[b].total_cmp(&spread[a]));

        // NaN spreads fail the comparison as well as coinciding centers
        for axis in axes.into_iter().filter(|&axis| spread[axis] > 0.0) {
            let value = self.approximate_median(boxes, subset, axis, depth);
            let left: Vec<usize> = subset
                .iter()
                .copied()
                .filter(|&i| boxes[i].bbox.min[axis] < value)
                .collect();
            let right: Vec<usize> = subset
                .iter()
                .copied()
                .filter(|&i| boxes[i].bbox.max[axis] >= value)
                .collect();

            if left.len() == subset.len() || right.len() == subset.len() {
                trace!(depth, size = subset.len(), axis, value, "axis made no progress");
                continue;
            }

            trace!(
                depth,
                axis,
                value,
                left = left.len(),
                right = right.len(),
                "split"
            );
            return Some(Split {
                axis,
                value,
                left,
                right,
            });
        }
        None
    }

    fn approximate_median<F>(
        &self,
        boxes: &[FacetBox<F>],
        subset: &[usize],
        axis: usize,
        depth: usize,
    ) -> f64 {
        let center = |i: usize| boxes[i].bbox.center(axis);
        let mut centers: Vec<f64> = if subset.len() <= MEDIAN_SAMPLE {
            subset.iter().map(|&i| center(i)).collect()
        } else {
            let mut rng = StdRng::seed_from_u64(
                self.seed ^ (depth as u64).wrapping_mul(0x9e37_79b9_7f4a_7c15) ^ subset.len() as u64,
            );
            (0..MEDIAN_SAMPLE)
                .map(|_| center(subset[rng.random_range(0..subset.len())]))
                .collect()
        };
        centers.sort_unstable_by(f64::total_cmp);
        centers[centers.len() / 2]
    }
}

/// Test every pair of `subset` whose intersection corner lies in `region`.
fn brute_force<F, C>(
    boxes: &[FacetBox<F>],
    subset: &[usize],
    region: &Region,
    callback: &mut C,
) -> ControlFlow<()>
where
    C: FnMut(&FacetBox<F>, &FacetBox<F>) -> ControlFlow<()>,
{
    for (k, &i) in subset.iter().enumerate() {
        let a = &boxes[i];
        for &j in &subset[k + 1..] {
            let b = &boxes[j];
            if a.bbox.intersects(&b.bbox)
                && region.contains(&a.bbox.intersection_min_corner(&b.bbox))
            {
                let (first, second) = if a.id < b.id { (a, b) } else { (b, a) };
                callback(first, second)?;
            }
        }
    }
    ControlFlow::Continue(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::aabb::Aabb;
    use std::sync::Mutex;

    fn unit_box(id: usize, x: f64, y: f64, z: f64) -> FacetBox<usize> {
        FacetBox::new(id, Aabb::new([x, y, z], [x + 1.0, y + 1.0, z + 1.0]), id)
    }

    fn grid(n: usize, step: f64) -> Vec<FacetBox<usize>> {
        let mut boxes = Vec::new();
        for i in 0..n {
            for j in 0..n {
                for k in 0..n {
                    let id = boxes.len();
                    boxes.push(unit_box(id, i as f64 * step, j as f64 * step, k as f64 * step));
                }
            }
        }
        boxes
    }

    fn collect(scan: &BoxScan, boxes: &[FacetBox<usize>]) -> Vec<(usize, usize)> {
        let mut pairs = Vec::new();
        let _ = scan.run(boxes, &mut |a: &FacetBox<usize>, b: &FacetBox<usize>| {
            pairs.push((a.id, b.id));
            ControlFlow::Continue(())
        });
        pairs.sort_unstable();
        pairs
    }

    #[test]
    fn split_recursion_matches_brute_force() {
        // step 0.75: neighbours overlap, including diagonals
        let boxes = grid(6, 0.75);
        let expected = collect(&BoxScan::new(usize::MAX, 1), &boxes);
        assert!(!expected.is_empty());
        for cutoff in [1, 2, 7, 50] {
            assert_eq!(collect(&BoxScan::new(cutoff, 1), &boxes), expected);
        }
    }

    #[test]
    fn pairs_are_ordered_and_unique() {
        let boxes = grid(5, 1.0); // touching boxes only
        let pairs = collect(&BoxScan::new(3, 9), &boxes);
        assert!(pairs.iter().all(|&(a, b)| a < b));
        let mut dedup = pairs.clone();
        dedup.dedup();
        assert_eq!(dedup.len(), pairs.len());
    }

    #[test]
    fn separated_boxes_yield_nothing() {
        let boxes = grid(4, 2.5);
        assert!(collect(&BoxScan::new(1, 0), &boxes).is_empty());
    }

    #[test]
    fn identical_boxes_fall_back_to_brute_force() {
        let boxes: Vec<_> = (0..20).map(|i| unit_box(i, 0.0, 0.0, 0.0)).collect();
        assert_eq!(collect(&BoxScan::new(1, 0), &boxes).len(), 20 * 19 / 2);
    }

    /// Long staggered slivers: every box straddles the x median, y separates them.
    fn slivers(n: usize) -> Vec<FacetBox<usize>> {
        (0..n)
            .map(|k| {
                let x = 10.0 * k as f64;
                let y = 0.05 * k as f64;
                FacetBox::new(k, Aabb::new([x, y, 0.0], [x + 2000.0, y + 0.01, 1.0]), k)
            })
            .collect()
    }

    #[test]
    fn split_falls_back_to_a_narrower_axis() {
        let boxes = slivers(100);
        let all: Vec<usize> = (0..boxes.len()).collect();
        let scan = BoxScan::new(4, 0);

        let split = scan.split(&boxes, &all, 0).expect("y separates the slivers");
        assert_eq!(split.axis, 1);
        assert!(split.left.len() < all.len());
        assert!(split.right.len() < all.len());
        assert!(collect(&scan, &boxes).is_empty());
    }

    #[test]
    fn sliver_scan_stays_in_small_leaves() {
        let boxes = slivers(400);
        let mut largest = 0;
        fn walk(scan: &BoxScan, boxes: &[FacetBox<usize>], subset: &[usize], largest: &mut usize) {
            match scan.split(boxes, subset, 0) {
                None => *largest = (*largest).max(subset.len()),
                Some(split) => {
                    walk(scan, boxes, &split.left, largest);
                    walk(scan, boxes, &split.right, largest);
                }
            }
        }
        let all: Vec<usize> = (0..boxes.len()).collect();
        walk(&BoxScan::new(8, 0), &boxes, &all, &mut largest);
        assert!(largest <= 8);
    }

    #[test]
    fn break_stops_the_scan() {
        let boxes = grid(5, 0.75);
        let mut seen = 0;
        let flow = BoxScan::new(4, 0).run(&boxes, &mut |_: &FacetBox<usize>, _: &FacetBox<usize>| {
            seen += 1;
            if seen == 3 {
                ControlFlow::Break(())
            } else {
                ControlFlow::Continue(())
            }
        });
        assert!(flow.is_break());
        assert_eq!(seen, 3);
    }

    #[test]
    fn parallel_matches_serial() {
        let boxes = grid(7, 0.75);
        let scan = BoxScan::new(8, 3);
        let expected = collect(&scan, &boxes);

        let pairs = Mutex::new(Vec::new());
        let flow = scan.par_run(&boxes, 16, &|a: &FacetBox<usize>, b: &FacetBox<usize>| {
            pairs.lock().unwrap().push((a.id, b.id));
            ControlFlow::Continue(())
        });
        assert!(flow.is_continue());
        let mut pairs = pairs.into_inner().unwrap();
        pairs.sort_unstable();
        assert_eq!(pairs, expected);
    }

    #[test]
    fn parallel_break_is_reported() {
        let boxes = grid(7, 0.75);
        let flow = BoxScan::new(8, 3)
            .par_run(&boxes, 16, &|_: &FacetBox<usize>, _: &FacetBox<usize>| {
                ControlFlow::Break(())
            });
        assert!(flow.is_break());
    }
}
