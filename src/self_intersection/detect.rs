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

use std::{
    ops::ControlFlow,
    sync::{Mutex, PoisonError},
};

use tracing::{debug, info, info_span};

use crate::{
    geometry::triangle::Triangle3,
    kernel::kernel::Kernel3,
    mesh::surface::PolyhedralSurface,
    self_intersection::{
        box_intersection::BoxScan,
        facet_box::{FacetBox, facet_boxes},
        narrow_phase::FacetIntersector,
        params::SelfIntersectionParams,
        sink::{CollectingSink, IntersectionSink, StopAtFirst},
        stats::{ScanCounters, ScanStats},
    },
};

/// Report every intersecting facet pair of `mesh` to `sink`, on the
/// current thread.
///
/// Facets sharing an edge are never reported. Facets sharing a vertex are
/// reported when the edge of one opposite that vertex meets the other.
/// Any other overlapping pair is reported when the triangles intersect.
/// Each unordered pair is reported at most once.
///
/// # Panics
///
/// Panics if some facet of `mesh` is not a triangle.
pub fn self_intersect<K, M, S>(mesh: &M, params: &SelfIntersectionParams, sink: &mut S) -> ScanStats
where
    K: Kernel3<FT = M::FT>,
    M: PolyhedralSurface,
    S: IntersectionSink<M::Facet, M::FT>,
{
    let span = info_span!(
        "self_intersect",
        facets = mesh.facet_count(),
        cutoff = params.effective_cutoff(),
        exact = K::EXACT
    );
    let _enter = span.enter();

    let boxes = facet_boxes::<K, M>(mesh);
    let counters = ScanCounters::default();
    let intersector = FacetIntersector::<K, M>::new(mesh, &counters);

    let mut on_pair = |a: &FacetBox<M::Facet>, b: &FacetBox<M::Facet>| match intersector.test(a, b) {
        Some(report) => {
            ScanCounters::bump(&counters.reported);
            sink.accept(report)
        }
        None => ControlFlow::Continue(()),
    };
    let flow = BoxScan::new(params.effective_cutoff(), params.seed).run(&boxes, &mut on_pair);

    finish(&counters, boxes.len(), flow)
}

/// Parallel form of [`self_intersect`]. The sink is locked only to accept a
/// confirmed report and is handed back once every worker has finished.
///
/// Report order is unspecified.
///
/// # Panics
///
/// Panics if some facet of `mesh` is not a triangle.
pub fn par_self_intersect<K, M, S>(
    mesh: &M,
    params: &SelfIntersectionParams,
    sink: S,
) -> (S, ScanStats)
where
    K: Kernel3<FT = M::FT>,
    M: PolyhedralSurface + Sync,
    S: IntersectionSink<M::Facet, M::FT> + Send,
{
    let span = info_span!(
        "par_self_intersect",
        facets = mesh.facet_count(),
        cutoff = params.effective_cutoff(),
        grain = params.parallel_grain,
        exact = K::EXACT
    );
    let _enter = span.enter();

    let boxes = facet_boxes::<K, M>(mesh);
    let counters = ScanCounters::default();
    let intersector = FacetIntersector::<K, M>::new(mesh, &counters);
    let sink = Mutex::new(sink);

    let on_pair = |a: &FacetBox<M::Facet>, b: &FacetBox<M::Facet>| match intersector.test(a, b) {
        Some(report) => {
            ScanCounters::bump(&counters.reported);
            sink.lock()
                .unwrap_or_else(PoisonError::into_inner)
                .accept(report)
        }
        None => ControlFlow::Continue(()),
    };
    let flow = BoxScan::new(params.effective_cutoff(), params.seed).par_run(
        &boxes,
        params.parallel_grain,
        &on_pair,
    );

    let stats = finish(&counters, boxes.len(), flow);
    (sink.into_inner().unwrap_or_else(PoisonError::into_inner), stats)
}

fn finish(counters: &ScanCounters, facets: usize, flow: ControlFlow<()>) -> ScanStats {
    let stats = counters.snapshot(facets, flow.is_break());
    debug!(%stats, "scan finished");
    if stats.reported > 0 {
        info!(
            reported = stats.reported,
            cancelled = stats.cancelled,
            "mesh is self-intersecting"
        );
    } else {
        info!("no self-intersections found");
    }
    stats
}

/// Run the scan selected by `params` into `sink`.
fn scan<K, M, S>(mesh: &M, params: &SelfIntersectionParams, mut sink: S) -> (S, ScanStats)
where
    K: Kernel3<FT = M::FT>,
    M: PolyhedralSurface + Sync,
    S: IntersectionSink<M::Facet, M::FT> + Send,
{
    if params.parallel {
        par_self_intersect::<K, M, S>(mesh, params, sink)
    } else {
        let stats = self_intersect::<K, M, S>(mesh, params, &mut sink);
        (sink, stats)
    }
}

/// All intersecting triangle pairs of `mesh`, with default parameters.
///
/// # Panics
///
/// Panics if some facet of `mesh` is not a triangle.
pub fn find_self_intersections<K, M>(mesh: &M) -> Vec<(Triangle3<M::FT>, Triangle3<M::FT>)>
where
    K: Kernel3<FT = M::FT>,
    M: PolyhedralSurface + Sync,
{
    find_self_intersections_with::<K, M>(mesh, &SelfIntersectionParams::default())
}

pub fn find_self_intersections_with<K, M>(
    mesh: &M,
    params: &SelfIntersectionParams,
) -> Vec<(Triangle3<M::FT>, Triangle3<M::FT>)>
where
    K: Kernel3<FT = M::FT>,
    M: PolyhedralSurface + Sync,
{
    scan::<K, M, _>(mesh, params, CollectingSink::new())
        .0
        .into_triangle_pairs()
}

/// Handles of all intersecting facet pairs, lower box id first.
pub fn self_intersecting_facets<K, M>(
    mesh: &M,
    params: &SelfIntersectionParams,
) -> Vec<(M::Facet, M::Facet)>
where
    K: Kernel3<FT = M::FT>,
    M: PolyhedralSurface + Sync,
{
    scan::<K, M, _>(mesh, params, CollectingSink::new())
        .0
        .into_facet_pairs()
}

/// Whether any two facets of `mesh` intersect. Stops at the first hit.
///
/// # Panics
///
/// Panics if some facet of `mesh` is not a triangle.
pub fn is_self_intersecting<K, M>(mesh: &M) -> bool
where
    K: Kernel3<FT = M::FT>,
    M: PolyhedralSurface + Sync,
{
    is_self_intersecting_with::<K, M>(mesh, &SelfIntersectionParams::default())
}

pub fn is_self_intersecting_with<K, M>(mesh: &M, params: &SelfIntersectionParams) -> bool
where
    K: Kernel3<FT = M::FT>,
    M: PolyhedralSurface + Sync,
{
    scan::<K, M, _>(mesh, params, StopAtFirst::new()).0.found()
}
