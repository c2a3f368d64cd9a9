//! Light phase times for one day.
//!
//! Solar transit comes from an analytic approximation with one refinement
//! step: the mean anomaly is evaluated at the approximate transit and the
//! equation of time terms are applied on top. Each table entry then needs one
//! hour angle, and its morning crossing mirrors the evening one around transit.

use core::f64::consts::TAU;

use chrono::{DateTime, TimeZone, Utc};
use log::debug;

use super::{ecliptic_longitude, solar_mean_anomaly};
use crate::coords::EquatorialCoords;
use crate::error::{check_coordinates, check_height};
use crate::math::{RAD, round_half_up};
use crate::time::{J2000, from_julian, to_days};
use crate::{Error, EventTable, Result, SunTime, SunTimes};

const J0: f64 = 0.0009;

/// Solar transit cycle number closest to day count `d`.
fn julian_cycle(d: f64, lw: f64) -> f64 {
    round_half_up(d - J0 - lw / TAU)
}

/// Approximate day count at which the sun reaches hour angle `ht`.
fn approx_transit(ht: f64, lw: f64, n: f64) -> f64 {
    J0 + (ht + lw) / TAU + n
}

/// Corrects an approximate day count with the equation of time.
fn solar_transit_julian(ds: f64, m: f64, l: f64) -> f64 {
    J2000 + ds + 0.0053 * m.sin() - 0.0069 * (2.0 * l).sin()
}

/// Hour angle at which the sun reaches altitude `h`.
///
/// The cosine of the hour angle leaves [-1, 1] when the sun never reaches `h`
/// on this day (polar day or night for that altitude). That case is reported
/// as `None` rather than a NaN.
fn hour_angle(h: f64, phi: f64, dec: f64) -> Option<f64> {
    let cos_w = (h.sin() - phi.sin() * dec.sin()) / (phi.cos() * dec.cos());
    (-1.0..=1.0).contains(&cos_w).then(|| cos_w.acos())
}

/// Horizon dip in degrees for an observer `height` meters above the surroundings.
pub(crate) fn observer_angle(height: f64) -> f64 {
    -2.076 * height.sqrt() / 60.0
}

/// Transit quantities shared by every table entry.
struct Transit {
    lw: f64,
    phi: f64,
    n: f64,
    m: f64,
    l: f64,
    dec: f64,
    noon: f64,
}

impl Transit {
    fn new(d: f64, latitude: f64, longitude: f64) -> Self {
        let lw = RAD * -longitude;
        let phi = RAD * latitude;

        let n = julian_cycle(d, lw);
        let ds = approx_transit(0.0, lw, n);

        let m = solar_mean_anomaly(ds);
        let l = ecliptic_longitude(m);
        let dec = EquatorialCoords::from_ecliptic(l, 0.0).declination;

        Self {
            lw,
            phi,
            n,
            m,
            l,
            dec,
            noon: solar_transit_julian(ds, m, l),
        }
    }

    /// Julian dates of the morning and evening crossings of altitude `h0` (radians).
    fn crossings(&self, h0: f64) -> Option<(f64, f64)> {
        let w = hour_angle(h0, self.phi, self.dec)?;
        let a = approx_transit(w, self.lw, self.n);
        let set = solar_transit_julian(a, self.m, self.l);
        Some((self.noon - (set - self.noon), set))
    }
}

/// Calculates solar noon, nadir and the crossings of every table entry, in UTC.
///
/// The day is the solar day whose transit is closest to `date`. Pass local
/// noon, or any instant within 12 hours of that day's transit. Local midnight
/// is not enough: west of Greenwich it lies closer to the previous transit.
///
/// # Arguments
/// * `date` - Instant near solar noon of the day of interest
/// * `latitude` - Observer latitude in degrees (-90 to +90)
/// * `longitude` - Observer longitude in degrees (-180 to +180)
/// * `height` - Observer height in meters; lowers every target altitude by the horizon dip
/// * `table` - Light phases to solve
///
/// # Returns
/// Entries whose altitude is not reached on this day are `None`.
///
/// # Errors
/// Returns `InvalidLatitude`, `InvalidLongitude` or `InvalidHeight` for invalid
/// input, or `InvalidDateTime` if solar noon falls outside chrono's range.
///
/// # Example
/// ```
/// use chrono::{TimeZone, Utc};
/// use suncalc::{EventTable, sun};
///
/// let date = Utc.with_ymd_and_hms(2013, 3, 5, 0, 0, 0).unwrap();
/// let times = sun::times_utc(&date, 50.5, 30.5, 0.0, &EventTable::default()).unwrap();
///
/// let sunrise = times.get("sunrise").unwrap();
/// assert_eq!(sunrise.format("%H:%M").to_string(), "04:34");
/// ```
pub fn times_utc<Tz: TimeZone>(
    date: &DateTime<Tz>,
    latitude: f64,
    longitude: f64,
    height: f64,
    table: &EventTable,
) -> Result<SunTimes<DateTime<Utc>>> {
    check_coordinates(latitude, longitude)?;
    check_height(height)?;

    let transit = Transit::new(to_days(date), latitude, longitude);
    let dh = observer_angle(height);

    let solar_noon = from_julian(transit.noon)
        .ok_or(Error::invalid_datetime("solar noon is outside the supported range"))?;
    let nadir = from_julian(transit.noon - 0.5)
        .ok_or(Error::invalid_datetime("nadir is outside the supported range"))?;

    let mut events = Vec::with_capacity(table.len() * 2);
    for event in table {
        let crossings = transit.crossings((event.angle() + dh) * RAD);
        if crossings.is_none() {
            debug!(
                "sun does not reach {}° at ({latitude}, {longitude}) on {solar_noon}",
                event.angle()
            );
        }

        let (rise, set) = crossings.map_or((None, None), |(rise, set)| {
            (from_julian(rise), from_julian(set))
        });
        events.push(SunTime::new(event.rise_label().to_string(), rise));
        events.push(SunTime::new(event.set_label().to_string(), set));
    }

    Ok(SunTimes::new(solar_noon, nadir, events))
}
