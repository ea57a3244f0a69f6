//! Single-step ascent around a candidate.
//!
//! Each candidate is compared against its four diagonal neighbours once; the
//! winner is final. There is no iteration to convergence.

use crate::elevation::ElevationSource;
use crate::point::{LatLon, Point};
use crate::util::PeakSeekResult;

/// Returns the four diagonal neighbours of `coord` at `step` degrees.
///
/// Order: (+,+), (-,-), (+,-), (-,+). The order matters for tie-breaking.
pub fn diagonal_neighbors(coord: LatLon, step: f64) -> [LatLon; 4] {
    [
        coord.offset(step, step),
        coord.offset(-step, -step),
        coord.offset(step, -step),
        coord.offset(-step, step),
    ]
}

/// Picks the highest of the four neighbours and the candidate.
///
/// Ties resolve by first match in the order neighbour 1..4, then the
/// candidate, using exact float equality against the maximum. Differences in
/// the last bit of a returned elevation can change the winner.
/// A NaN elevation never wins: `f64::max` skips it, so the comparison
/// falls back to the remaining points instead of failing.
pub fn select_highest(candidate: Point, neighbors: [Point; 4]) -> Point {
    let max = neighbors
        .iter()
        .fold(candidate.elevation, |acc, n| acc.max(n.elevation));

    neighbors
        .into_iter()
        .chain(std::iter::once(candidate))
        .find(|p| p.elevation == max)
        .unwrap_or(candidate)
}

/// Looks up the four neighbours of `candidate` and returns the local winner.
pub fn ascend<S: ElevationSource + ?Sized>(
    source: &S,
    candidate: Point,
    step: f64,
) -> PeakSeekResult<Point> {
    let neighbors = neighbor_points(source, candidate.coord(), step)?;
    Ok(select_highest(candidate, neighbors))
}

/// Looks up elevations for the four diagonal neighbours, in order.
pub(crate) fn neighbor_points<S: ElevationSource + ?Sized>(
    source: &S,
    coord: LatLon,
    step: f64,
) -> PeakSeekResult<[Point; 4]> {
    let [n1, n2, n3, n4] = diagonal_neighbors(coord, step);
    Ok([
        Point::at(n1, source.elevation(n1.lat, n1.lon)?),
        Point::at(n2, source.elevation(n2.lat, n2.lon)?),
        Point::at(n3, source.elevation(n3.lat, n3.lon)?),
        Point::at(n4, source.elevation(n4.lat, n4.lon)?),
    ])
}
