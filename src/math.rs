//! Mathematical utilities shared by the ephemeris and event solvers.

use core::f64::consts::{PI, TAU};

/// Degrees to radians factor.
pub const RAD: f64 = PI / 180.0;

/// Normalizes an angle in radians to the range [0, 2π).
pub fn normalize_radians(radians: f64) -> f64 {
    let normalized = radians % TAU;
    if normalized < 0.0 {
        normalized + TAU
    } else {
        normalized
    }
}

/// Rounds to the nearest integer, with ties going towards positive infinity.
///
/// `f64::round` sends ties away from zero, which picks a different day for
/// negative day counts that land exactly on a half.
#[inline]
pub fn round_half_up(x: f64) -> f64 {
    (x + 0.5).floor()
}
