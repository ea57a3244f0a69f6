//! Stage drivers for the search pipeline.
//!
//! Sequential drivers issue lookups in candidate order. The rayon drivers fan
//! out the independent lookups, then feed results to the tracker in candidate
//! order so both paths produce the same output for a deterministic source.

use crate::candidate::topk::PeakTracker;
use crate::elevation::ElevationSource;
use crate::point::{LatLon, Point};
use crate::search::ascent::ascend;
#[cfg(feature = "rayon")]
use crate::search::ascent::{neighbor_points, select_highest};
use crate::trace::{trace_candidate, trace_event, trace_span};
use crate::util::PeakSeekResult;
#[cfg(feature = "rayon")]
use rayon::prelude::*;

/// Looks up the starting elevation of every candidate, one call each.
pub(crate) fn sample_elevations<S: ElevationSource + ?Sized>(
    source: &S,
    coords: &[LatLon],
) -> PeakSeekResult<Vec<Point>> {
    let _span = trace_span!("sample_candidates", count = coords.len()).entered();

    let mut out = Vec::with_capacity(coords.len());
    for &coord in coords {
        let elevation = source.elevation(coord.lat, coord.lon)?;
        out.push(Point::at(coord, elevation));
    }

    trace_event!("candidates_sampled", count = out.len());
    Ok(out)
}

/// Starting elevations looked up in parallel (rayon).
#[cfg(feature = "rayon")]
pub(crate) fn sample_elevations_par<S: ElevationSource + ?Sized>(
    source: &S,
    coords: &[LatLon],
) -> PeakSeekResult<Vec<Point>> {
    let _span = trace_span!("sample_candidates", count = coords.len(), parallel = true).entered();

    let out: Vec<Point> = coords
        .par_iter()
        .map(|&coord| {
            source
                .elevation(coord.lat, coord.lon)
                .map(|elevation| Point::at(coord, elevation))
        })
        .collect::<PeakSeekResult<_>>()?;

    trace_event!("candidates_sampled", count = out.len());
    Ok(out)
}

/// Climbs one step from each candidate and offers the winner to `tracker`.
pub(crate) fn ascend_candidates<S: ElevationSource + ?Sized>(
    source: &S,
    candidates: &[Point],
    step: f64,
    tracker: &mut PeakTracker,
) -> PeakSeekResult<()> {
    let _span = trace_span!("ascend_candidates", count = candidates.len()).entered();

    for &candidate in candidates {
        let best = ascend(source, candidate, step)?;
        trace_candidate!(
            "local_high_point",
            lat = best.lat,
            lon = best.lon,
            elevation = best.elevation
        );
        tracker.push(best);
    }

    Ok(())
}

/// Neighbour lookups fanned out per candidate (rayon); tracker fed in order.
#[cfg(feature = "rayon")]
pub(crate) fn ascend_candidates_par<S: ElevationSource + ?Sized>(
    source: &S,
    candidates: &[Point],
    step: f64,
    tracker: &mut PeakTracker,
) -> PeakSeekResult<()> {
    let _span = trace_span!(
        "ascend_candidates",
        count = candidates.len(),
        parallel = true
    )
    .entered();

    let neighborhoods: Vec<[Point; 4]> = candidates
        .par_iter()
        .map(|candidate| neighbor_points(source, candidate.coord(), step))
        .collect::<PeakSeekResult<_>>()?;

    for (&candidate, neighbors) in candidates.iter().zip(neighborhoods) {
        let best = select_highest(candidate, neighbors);
        trace_candidate!(
            "local_high_point",
            lat = best.lat,
            lon = best.lon,
            elevation = best.elevation
        );
        tracker.push(best);
    }

    Ok(())
}
