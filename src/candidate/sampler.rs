//! Uniform-by-area sampling of candidate coordinates inside a disk.

use crate::point::LatLon;
use crate::util::math::disk_offset;
use rand::Rng;

/// Draws `count` coordinates uniformly by area within `radius` degrees of
/// `center`.
///
/// The disk lives in coordinate space, not on the geoid: latitude and
/// longitude offsets are both bounded by `radius` degrees. Each draw takes an
/// angle sample first and a radius sample second, so a seeded RNG yields the
/// same sequence on every run.
pub fn sample_disk<R: Rng + ?Sized>(
    center: LatLon,
    count: usize,
    radius: f64,
    rng: &mut R,
) -> Vec<LatLon> {
    let mut out = Vec::with_capacity(count);
    for _ in 0..count {
        let u_angle: f64 = rng.random();
        let u_radius: f64 = rng.random();
        let (dlat, dlon) = disk_offset(u_angle, u_radius, radius);
        out.push(center.offset(dlat, dlon));
    }
    out
}
