//! Reference frame conversions shared by the Sun and Moon.
//!
//! Formulas follow <http://aa.quae.nl/en/reken/hemelpositie.html>. All angles are
//! radians. The hour angle convention makes the azimuth measured from south,
//! increasing towards the west.

use crate::math::RAD;
use crate::types::Position;

/// Obliquity of the Earth's axis.
const OBLIQUITY: f64 = RAD * 23.4397;

/// Equatorial coordinates of a body, in radians.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct EquatorialCoords {
    pub(crate) right_ascension: f64,
    pub(crate) declination: f64,
}

impl EquatorialCoords {
    /// Converts ecliptic longitude `l` and latitude `b` to the equatorial frame.
    pub(crate) fn from_ecliptic(l: f64, b: f64) -> Self {
        Self {
            right_ascension: right_ascension(l, b),
            declination: declination(l, b),
        }
    }

    /// Local hour angle of the body at day count `d` for an observer at west longitude `lw`.
    pub(crate) fn hour_angle(&self, d: f64, lw: f64) -> f64 {
        sidereal_time(d, lw) - self.right_ascension
    }
}

fn right_ascension(l: f64, b: f64) -> f64 {
    (l.sin() * OBLIQUITY.cos() - b.tan() * OBLIQUITY.sin()).atan2(l.cos())
}

fn declination(l: f64, b: f64) -> f64 {
    (b.sin() * OBLIQUITY.cos() + b.cos() * OBLIQUITY.sin() * l.sin()).asin()
}

/// Azimuth for hour angle `h`, observer latitude `phi` and declination `dec`.
pub(crate) fn azimuth(h: f64, phi: f64, dec: f64) -> f64 {
    h.sin().atan2(h.cos() * phi.sin() - dec.tan() * phi.cos())
}

/// Geometric altitude for hour angle `h`, observer latitude `phi` and declination `dec`.
pub(crate) fn altitude(h: f64, phi: f64, dec: f64) -> f64 {
    (phi.sin() * dec.sin() + phi.cos() * dec.cos() * h.cos()).asin()
}

/// Converts an hour angle and declination to azimuth/altitude for latitude `phi`.
///
/// Near the poles precision degrades, but the result stays defined for any
/// latitude in [-π/2, π/2].
pub(crate) fn to_horizontal(h: f64, phi: f64, dec: f64) -> Position {
    Position::new(azimuth(h, phi, dec), altitude(h, phi, dec))
}

/// Local sidereal time at day count `d` for west longitude `lw`.
pub(crate) fn sidereal_time(d: f64, lw: f64) -> f64 {
    RAD * (280.16 + 360.985_623_5 * d) - lw
}

/// Parallactic angle (Meeus, Astronomical Algorithms, formula 14.1).
pub(crate) fn parallactic_angle(h: f64, phi: f64, dec: f64) -> f64 {
    h.sin().atan2(phi.tan() * dec.cos() - dec.sin() * h.cos())
}

/// Atmospheric refraction for a true altitude, in radians.
///
/// Meeus formula 16.4 (`1.02 / tan(h + 10.26 / (h + 5.10))` arc minutes),
/// valid for altitudes at or above the horizon. Negative altitudes are clamped
/// to zero, since the formula divides by zero at h = -0.08901179; everything
/// below the horizon therefore gets the horizon correction.
pub(crate) fn astro_refraction(altitude: f64) -> f64 {
    let h = altitude.max(0.0);
    0.000_296_7 / (h + 0.003_125_36 / (h + 0.089_011_79)).tan()
}
