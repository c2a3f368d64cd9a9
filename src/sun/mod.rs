//! Solar ephemeris and the Sun's position in the sky.
//!
//! Low precision series (about one arc minute) from
//! <http://aa.quae.nl/en/reken/zonpositie.html>. The Sun is taken to lie on
//! the ecliptic.

use chrono::{DateTime, TimeZone};

use crate::coords::{EquatorialCoords, to_horizontal};
use crate::error::check_coordinates;
use crate::math::RAD;
use crate::time::to_days;
use crate::{Position, Result};

pub mod times;

pub use times::times_utc;

/// Solar mean anomaly for day count `d`.
pub(crate) fn solar_mean_anomaly(d: f64) -> f64 {
    RAD * (357.529_1 + 0.985_600_28 * d)
}

/// Ecliptic longitude from the mean anomaly `m`.
pub(crate) fn ecliptic_longitude(m: f64) -> f64 {
    // equation of center
    let c = RAD * (1.914_8 * m.sin() + 0.02 * (2.0 * m).sin() + 0.000_3 * (3.0 * m).sin());
    // perihelion of the Earth
    let p = RAD * 102.937_2;

    m + c + p + core::f64::consts::PI
}

/// Equatorial coordinates of the Sun for day count `d`.
pub(crate) fn sun_coords(d: f64) -> EquatorialCoords {
    let m = solar_mean_anomaly(d);
    let l = ecliptic_longitude(m);
    EquatorialCoords::from_ecliptic(l, 0.0)
}

/// Calculates the Sun's position for an instant and observer location.
///
/// # Arguments
/// * `datetime` - Instant, in any time zone
/// * `latitude` - Observer latitude in degrees (-90 to +90)
/// * `longitude` - Observer longitude in degrees (-180 to +180)
///
/// # Returns
/// Azimuth (south-based, see [`Position`]) and geometric altitude in radians.
///
/// # Errors
/// Returns `InvalidLatitude` or `InvalidLongitude` for out-of-range coordinates.
///
/// # Example
/// ```
/// use chrono::{TimeZone, Utc};
///
/// let noon = Utc.with_ymd_and_hms(2013, 6, 21, 10, 0, 0).unwrap();
/// let position = suncalc::sun::position(&noon, 50.5, 30.5).unwrap();
/// assert!(position.is_above_horizon());
/// ```
pub fn position<Tz: TimeZone>(
    datetime: &DateTime<Tz>,
    latitude: f64,
    longitude: f64,
) -> Result<Position> {
    check_coordinates(latitude, longitude)?;

    let lw = RAD * -longitude;
    let phi = RAD * latitude;
    let d = to_days(datetime);

    let coords = sun_coords(d);
    let h = coords.hour_angle(d, lw);

    Ok(to_horizontal(h, phi, coords.declination))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    const EPSILON: f64 = 1e-12;

    #[test]
    fn test_reference_position() {
        let date = Utc.with_ymd_and_hms(2013, 3, 5, 0, 0, 0).unwrap();
        let position = position(&date, 50.5, 30.5).unwrap();

        assert!((position.azimuth() - -2.500_317_590_716_838_5).abs() < EPSILON);
        assert!((position.altitude() - -0.700_040_683_878_161_1).abs() < EPSILON);
    }

    #[test]
    fn test_declination_range_over_a_year() {
        let limit = RAD * 23.4397 + 1e-9;
        for day in 0..366_u16 {
            let coords = sun_coords(f64::from(day) + 4_800.0);
            assert!(coords.declination.abs() <= limit);
        }
    }

    #[test]
    fn test_june_solstice_declination() {
        // 2013-06-21 12:00 UTC
        let date = Utc.with_ymd_and_hms(2013, 6, 21, 12, 0, 0).unwrap();
        let dec = sun_coords(to_days(&date)).declination.to_degrees();
        assert!((dec - 23.44).abs() < 0.05, "declination {dec}");
    }

    #[test]
    fn test_invalid_coordinates() {
        let date = Utc.with_ymd_and_hms(2013, 3, 5, 0, 0, 0).unwrap();
        assert!(position(&date, 91.0, 0.0).is_err());
        assert!(position(&date, 0.0, -181.0).is_err());
        assert!(position(&date, f64::NAN, 0.0).is_err());
    }
}
