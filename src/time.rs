//! Conversions between instants and the continuous day counts used by the ephemeris.
//!
//! Julian dates here are the plain astronomical count anchored at noon, computed
//! linearly from Unix milliseconds; there is no ΔT or leap second correction.
//! Day counts are Julian dates re-based on J2000.0, which is what the solar and
//! lunar series take as input.

use chrono::{DateTime, TimeZone, Utc};

/// Milliseconds per day (86,400,000)
const MILLIS_PER_DAY: f64 = 86_400_000.0;

/// Julian Day Number of the Unix epoch day (1970-01-01, counted from noon)
const J1970: f64 = 2_440_588.0;

/// Julian Day Number for J2000.0 epoch (2000-01-01 12:00:00 UTC)
pub const J2000: f64 = 2_451_545.0;

/// Converts an instant to a Julian date.
///
/// Sub-millisecond parts of the instant are kept as a fraction.
///
/// # Example
/// ```
/// # use suncalc::time::to_julian;
/// use chrono::{TimeZone, Utc};
///
/// let epoch = Utc.with_ymd_and_hms(1970, 1, 1, 0, 0, 0).unwrap();
/// assert_eq!(to_julian(&epoch), 2_440_587.5);
/// ```
pub fn to_julian<Tz: TimeZone>(datetime: &DateTime<Tz>) -> f64 {
    let millis = datetime.timestamp_millis() as f64
        + f64::from(datetime.timestamp_subsec_nanos() % 1_000_000) / 1e6;
    millis / MILLIS_PER_DAY - 0.5 + J1970
}

/// Converts a Julian date back to a UTC instant.
///
/// # Returns
/// `None` if the value is not finite or falls outside the range chrono can
/// represent. Event solvers rely on this to turn an undefined hour angle into
/// an absent event.
#[must_use]
pub fn from_julian(julian_date: f64) -> Option<DateTime<Utc>> {
    let millis = (julian_date + 0.5 - J1970) * MILLIS_PER_DAY;
    if !millis.is_finite() {
        return None;
    }

    let mut seconds = (millis / 1000.0).floor();
    let mut nanos = ((millis - seconds * 1000.0) * 1e6).round();
    if nanos >= 1e9 {
        seconds += 1.0;
        nanos -= 1e9;
    }
    if seconds.abs() >= i64::MAX as f64 {
        return None;
    }

    DateTime::from_timestamp(seconds as i64, nanos as u32)
}

/// Converts an instant to days since J2000.0.
pub fn to_days<Tz: TimeZone>(datetime: &DateTime<Tz>) -> f64 {
    to_julian(datetime) - J2000
}

/// Converts days since J2000.0 back to a UTC instant.
///
/// Exact inverse of [`to_days`] to well below a millisecond.
#[must_use]
pub fn from_days(days: f64) -> Option<DateTime<Utc>> {
    from_julian(days + J2000)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, FixedOffset};

    const EPSILON: f64 = 1e-9;

    #[test]
    fn test_specific_julian_dates() {
        // Unix epoch: 1970-01-01 00:00:00 UTC
        let unix_epoch = Utc.with_ymd_and_hms(1970, 1, 1, 0, 0, 0).unwrap();
        assert!((to_julian(&unix_epoch) - 2_440_587.5).abs() < EPSILON);

        // Y2K: 2000-01-01 00:00:00 UTC
        let y2k = Utc.with_ymd_and_hms(2000, 1, 1, 0, 0, 0).unwrap();
        assert!((to_julian(&y2k) - 2_451_544.5).abs() < EPSILON);
    }

    #[test]
    fn test_j2000_is_day_zero() {
        let j2000 = Utc.with_ymd_and_hms(2000, 1, 1, 12, 0, 0).unwrap();
        assert!(to_days(&j2000).abs() < EPSILON);
        assert_eq!(from_days(0.0), Some(j2000));
    }

    #[test]
    fn test_offset_does_not_change_day_count() {
        let utc = Utc.with_ymd_and_hms(2013, 3, 5, 0, 0, 0).unwrap();
        let kyiv = FixedOffset::east_opt(2 * 3600)
            .unwrap()
            .with_ymd_and_hms(2013, 3, 5, 2, 0, 0)
            .unwrap();
        assert_eq!(to_days(&utc), to_days(&kyiv));
    }

    #[test]
    fn test_round_trip_keeps_milliseconds() {
        let instant = Utc.with_ymd_and_hms(2013, 3, 5, 4, 34, 56).unwrap()
            + Duration::milliseconds(440);
        let back = from_days(to_days(&instant)).unwrap();
        let error = (back - instant).num_microseconds().unwrap().abs();
        assert!(error < 1_000, "round trip drifted by {error} µs");
    }

    #[test]
    fn test_round_trip_before_epoch() {
        let instant = Utc.with_ymd_and_hms(1899, 12, 31, 23, 59, 59).unwrap();
        let back = from_julian(to_julian(&instant)).unwrap();
        assert!((back - instant).num_milliseconds().abs() <= 1);
    }

    #[test]
    fn test_non_finite_has_no_instant() {
        assert!(from_julian(f64::NAN).is_none());
        assert!(from_julian(f64::INFINITY).is_none());
        assert!(from_days(f64::NEG_INFINITY).is_none());
        assert!(from_days(1e300).is_none());
    }
}
