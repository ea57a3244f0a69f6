//! Geometry helpers for disk sampling.

use std::f64::consts::TAU;

/// Maps two unit samples to an offset inside a disk of `radius`.
///
/// `u_angle` and `u_radius` are expected in `[0, 1)`. The square root on the
/// radial sample keeps the density uniform per unit area.
pub(crate) fn disk_offset(u_angle: f64, u_radius: f64, radius: f64) -> (f64, f64) {
    let angle = u_angle * TAU;
    let hyp = u_radius.sqrt() * radius;
    let (sin, cos) = angle.sin_cos();
    (cos * hyp, sin * hyp)
}
