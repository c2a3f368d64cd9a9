//! Lunar ephemeris, the Moon's position in the sky and its illumination.
//!
//! First order series from <http://aa.quae.nl/en/reken/hemelpositie.html>;
//! illumination follows Meeus, Astronomical Algorithms, chapter 48.

use core::f64::consts::PI;

use chrono::{DateTime, TimeZone};

use crate::coords::{EquatorialCoords, altitude, astro_refraction, parallactic_angle, to_horizontal};
use crate::error::check_coordinates;
use crate::math::RAD;
use crate::sun::sun_coords;
use crate::time::to_days;
use crate::{MoonIllumination, MoonPosition, Result};

pub mod rise_set;

pub use rise_set::{DayStart, rise_set};

/// Mean distance from the Earth to the Sun in kilometers.
const SUN_DISTANCE_KM: f64 = 149_598_000.0;

/// Equatorial coordinates of the Moon with its distance.
#[derive(Debug, Clone, Copy)]
pub(crate) struct MoonCoords {
    pub(crate) equatorial: EquatorialCoords,
    /// Distance to the Earth's center in kilometers
    pub(crate) distance: f64,
}

/// Geocentric coordinates of the Moon for day count `d`.
pub(crate) fn moon_coords(d: f64) -> MoonCoords {
    // ecliptic longitude
    let l0 = RAD * (218.316 + 13.176_396 * d);
    // mean anomaly
    let m = RAD * (134.963 + 13.064_993 * d);
    // argument of latitude
    let f = RAD * (93.272 + 13.229_350 * d);

    let l = l0 + RAD * 6.289 * m.sin();
    let b = RAD * 5.128 * f.sin();

    MoonCoords {
        equatorial: EquatorialCoords::from_ecliptic(l, b),
        distance: 385_001.0 - 20_905.0 * m.cos(),
    }
}

/// Apparent altitude of the Moon, refraction included, for day count `d`.
pub(crate) fn apparent_altitude(d: f64, lw: f64, phi: f64) -> f64 {
    let coords = moon_coords(d).equatorial;
    let h = altitude(coords.hour_angle(d, lw), phi, coords.declination);
    h + astro_refraction(h)
}

/// Calculates the Moon's position for an instant and observer location.
///
/// # Errors
/// Returns `InvalidLatitude` or `InvalidLongitude` for out-of-range coordinates.
///
/// # Example
/// ```
/// use chrono::{TimeZone, Utc};
///
/// let date = Utc.with_ymd_and_hms(2013, 3, 5, 0, 0, 0).unwrap();
/// let moon = suncalc::moon::position(&date, 50.5, 30.5).unwrap();
/// assert!((moon.distance() - 364_121.37).abs() < 0.01);
/// ```
pub fn position<Tz: TimeZone>(
    datetime: &DateTime<Tz>,
    latitude: f64,
    longitude: f64,
) -> Result<MoonPosition> {
    check_coordinates(latitude, longitude)?;

    let lw = RAD * -longitude;
    let phi = RAD * latitude;
    let d = to_days(datetime);

    let coords = moon_coords(d);
    let dec = coords.equatorial.declination;
    let h = coords.equatorial.hour_angle(d, lw);

    let horizontal = to_horizontal(h, phi, dec);
    let altitude = horizontal.altitude() + astro_refraction(horizontal.altitude());

    Ok(MoonPosition::new(
        horizontal.azimuth(),
        altitude,
        coords.distance,
        parallactic_angle(h, phi, dec),
    ))
}

/// Calculates the illuminated fraction, phase and bright limb angle of the Moon.
///
/// Illumination does not depend on the observer, only on the instant.
///
/// # Example
/// ```
/// use chrono::{TimeZone, Utc};
///
/// let date = Utc.with_ymd_and_hms(2013, 3, 5, 0, 0, 0).unwrap();
/// let illumination = suncalc::moon::illumination(&date);
/// assert!((illumination.fraction() - 0.4848).abs() < 1e-4);
/// assert!(!illumination.is_waxing());
/// ```
#[must_use]
pub fn illumination<Tz: TimeZone>(datetime: &DateTime<Tz>) -> MoonIllumination {
    let d = to_days(datetime);
    illumination_between(&sun_coords(d), &moon_coords(d))
}

fn illumination_between(s: &EquatorialCoords, m: &MoonCoords) -> MoonIllumination {
    let md = m.equatorial;
    let delta_ra = s.right_ascension - md.right_ascension;

    // geocentric elongation of the Moon from the Sun; rounding can leave the
    // cosine just outside [-1, 1] near conjunction
    let phi = (s.declination.sin() * md.declination.sin()
        + s.declination.cos() * md.declination.cos() * delta_ra.cos())
    .clamp(-1.0, 1.0)
    .acos();
    // selenocentric elongation of the Earth from the Sun
    let inc = (SUN_DISTANCE_KM * phi.sin()).atan2(m.distance - SUN_DISTANCE_KM * phi.cos());
    let angle = (s.declination.cos() * delta_ra.sin()).atan2(
        s.declination.sin() * md.declination.cos()
            - s.declination.cos() * md.declination.sin() * delta_ra.cos(),
    );

    let sign = if angle < 0.0 { -1.0 } else { 1.0 };
    MoonIllumination::new(
        (1.0 + inc.cos()) / 2.0,
        (0.5 + 0.5 * inc * sign / PI).rem_euclid(1.0),
        angle,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    const EPSILON: f64 = 1e-12;

    fn reference_date() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2013, 3, 5, 0, 0, 0).unwrap()
    }

    #[test]
    fn test_reference_position() {
        let moon = position(&reference_date(), 50.5, 30.5).unwrap();

        assert!((moon.azimuth() - -0.978_399_952_243_822_6).abs() < EPSILON);
        assert!((moon.altitude() - 0.014_551_482_243_892_203).abs() < EPSILON);
        assert!((moon.distance() - 364_121.372_562_561_94).abs() < 1e-6);
        assert!((moon.parallactic_angle() - -0.598_321_176_042_340_1).abs() < EPSILON);
    }

    #[test]
    fn test_apparent_altitude_matches_position() {
        let date = reference_date();
        let moon = position(&date, 50.5, 30.5).unwrap();
        let altitude = apparent_altitude(to_days(&date), RAD * -30.5, RAD * 50.5);
        assert!((moon.altitude() - altitude).abs() < EPSILON);
    }

    #[test]
    fn test_reference_illumination() {
        let illumination = illumination(&reference_date());

        assert!((illumination.fraction() - 0.484_806_820_245_637_4).abs() < EPSILON);
        assert!((illumination.phase() - 0.754_836_883_853_876_2).abs() < EPSILON);
        assert!((illumination.angle() - 1.673_294_267_857_834_6).abs() < EPSILON);
    }

    #[test]
    fn test_distance_bounds() {
        for hour in 0..(24 * 30_u16) {
            let d = 4_800.0 + f64::from(hour) / 24.0;
            let distance = moon_coords(d).distance;
            assert!((364_096.0..=405_906.0).contains(&distance));
        }
    }

    #[test]
    fn test_illumination_ranges_over_a_month() {
        let start = reference_date();
        for day in 0..30 {
            let date = start + chrono::Duration::days(day);
            let illumination = illumination(&date);
            assert!((0.0..=1.0).contains(&illumination.fraction()));
            assert!((0.0..1.0).contains(&illumination.phase()));
            assert!(illumination.angle().abs() <= PI);
        }
    }

    #[test]
    fn test_illumination_at_conjunction() {
        for (ra, dec) in [(1.0, 0.3), (4.2, -0.4), (0.0, 0.0), (2.5, 0.409)] {
            let coords = EquatorialCoords {
                right_ascension: ra,
                declination: dec,
            };
            let moon = MoonCoords {
                equatorial: coords,
                distance: 384_400.0,
            };
            let illumination = illumination_between(&coords, &moon);

            assert!(illumination.fraction() < 1e-12);
            assert!((0.0..1.0).contains(&illumination.phase()));
            assert!(illumination.phase().min(1.0 - illumination.phase()) < 1e-6);
            assert!(!illumination.angle().is_nan());
        }
    }
}
