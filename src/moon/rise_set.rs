//! Moonrise and moonset.
//!
//! The Moon moves too fast for a closed form, so the day is scanned in two
//! hour windows. Each window fits a parabola through the altitudes at its
//! start, middle and end and solves it for horizon crossings.

use chrono::{DateTime, Duration, NaiveTime, TimeZone};
use log::debug;

use super::apparent_altitude;
use crate::error::check_coordinates;
use crate::math::RAD;
use crate::time::to_days;
use crate::{Error, MoonTimes, Result};

/// Altitude of the Moon's center at rise and set, in radians.
const HORIZON: f64 = 0.133 * RAD;

const HOURS_PER_DAY: f64 = 24.0;

/// Where the 24 hour scan for moonrise and moonset starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DayStart {
    /// Midnight on the instant's local date in its own time zone
    #[default]
    LocalMidnight,
    /// Midnight UTC on the instant's UTC date, expressed in the instant's time zone
    UtcMidnight,
}

impl DayStart {
    /// Resolves the start of the day containing `date`.
    ///
    /// When local midnight falls into a daylight saving gap, the day starts at
    /// 01:00 local time instead.
    ///
    /// # Errors
    /// Returns `InvalidDateTime` if the local day has no start, which only
    /// happens for zones with gaps longer than an hour at midnight.
    pub fn start_of_day<Tz: TimeZone>(self, date: &DateTime<Tz>) -> Result<DateTime<Tz>> {
        match self {
            Self::LocalMidnight => {
                let tz = date.timezone();
                let day = date.date_naive();
                tz.from_local_datetime(&day.and_time(NaiveTime::MIN))
                    .earliest()
                    .or_else(|| tz.from_local_datetime(&day.and_hms_opt(1, 0, 0)?).earliest())
                    .ok_or(Error::invalid_datetime("local midnight does not exist"))
            }
            Self::UtcMidnight => {
                let utc_midnight = date
                    .naive_utc()
                    .date()
                    .and_time(NaiveTime::MIN);
                Ok(date.timezone().from_utc_datetime(&utc_midnight))
            }
        }
    }
}

/// Horizon crossings of a parabola within its window.
enum Crossings {
    None,
    One(f64),
    Two(f64, f64),
}

/// Parabola through altitudes sampled at x = -1, 0 and +1 (one hour apart).
struct Parabola {
    a: f64,
    b: f64,
    c: f64,
}

impl Parabola {
    fn through(h0: f64, h1: f64, h2: f64) -> Self {
        Self {
            a: (h0 + h2) / 2.0 - h1,
            b: (h2 - h0) / 2.0,
            c: h1,
        }
    }

    fn vertex(&self) -> f64 {
        -self.b / (2.0 * self.a)
    }

    /// Altitude at the vertex; negative means the curve peaks below the horizon
    /// or bottoms out below it.
    fn vertex_altitude(&self) -> f64 {
        let xe = self.vertex();
        (self.a * xe + self.b) * xe + self.c
    }

    /// Roots in [-1, 1], in ascending order.
    fn crossings(&self) -> Crossings {
        let discriminant = self.b * self.b - 4.0 * self.a * self.c;
        if discriminant < 0.0 {
            return Crossings::None;
        }

        let xe = self.vertex();
        let dx = discriminant.sqrt() / (self.a.abs() * 2.0);
        let (x1, x2) = (xe - dx, xe + dx);

        match (x1.abs() <= 1.0, x2.abs() <= 1.0) {
            (true, true) => Crossings::Two(x1, x2),
            (true, false) => Crossings::One(x1),
            (false, true) => Crossings::One(x2),
            (false, false) => Crossings::None,
        }
    }
}

fn hours_later<Tz: TimeZone>(start: &DateTime<Tz>, hours: f64) -> Result<DateTime<Tz>> {
    let delta = Duration::nanoseconds((hours * 3.6e12).round() as i64);
    start
        .clone()
        .checked_add_signed(delta)
        .ok_or(Error::invalid_datetime("moon time is outside the supported range"))
}

/// Calculates moonrise and moonset for the day containing `date`.
///
/// The scan covers 24 hours from the start of day chosen by `day_start`. A day
/// can have a rise without a set or the other way round, since the Moon rises
/// about 50 minutes later every day. If neither happens, the Moon is
/// classified as always up or always down for that day.
///
/// # Arguments
/// * `date` - Instant on the day of interest; results are in its time zone
/// * `latitude` - Observer latitude in degrees (-90 to +90)
/// * `longitude` - Observer longitude in degrees (-180 to +180)
/// * `day_start` - Whether the scan starts at local or UTC midnight
///
/// # Errors
/// Returns `InvalidLatitude` or `InvalidLongitude` for out-of-range
/// coordinates, or `InvalidDateTime` if the day has no representable start.
///
/// # Example
/// ```
/// use chrono::{TimeZone, Utc};
/// use suncalc::moon::{self, DayStart};
///
/// let date = Utc.with_ymd_and_hms(2013, 3, 4, 0, 0, 0).unwrap();
/// let times = moon::rise_set(&date, 50.5, 30.5, DayStart::LocalMidnight).unwrap();
///
/// assert_eq!(times.rise().unwrap().format("%H:%M").to_string(), "23:54");
/// assert_eq!(times.set().unwrap().format("%H:%M").to_string(), "07:47");
/// ```
pub fn rise_set<Tz: TimeZone>(
    date: &DateTime<Tz>,
    latitude: f64,
    longitude: f64,
    day_start: DayStart,
) -> Result<MoonTimes<DateTime<Tz>>> {
    check_coordinates(latitude, longitude)?;

    let start = day_start.start_of_day(date)?;
    let lw = RAD * -longitude;
    let phi = RAD * latitude;
    let d0 = to_days(&start);
    let altitude_at = |hours: f64| apparent_altitude(d0 + hours / HOURS_PER_DAY, lw, phi) - HORIZON;

    let mut h0 = altitude_at(0.0);
    let mut rise = None;
    let mut set = None;
    let mut ye = 0.0;

    // windows centered on hours 1, 3, ..., 23
    for hour in (1..24_u8).step_by(2) {
        let k = f64::from(hour);
        let h1 = altitude_at(k);
        let h2 = altitude_at(k + 1.0);

        let parabola = Parabola::through(h0, h1, h2);
        ye = parabola.vertex_altitude();

        match parabola.crossings() {
            Crossings::One(x) if h0 < 0.0 => rise = Some(k + x),
            Crossings::One(x) => set = Some(k + x),
            Crossings::Two(x1, x2) if ye < 0.0 => {
                rise = Some(k + x2);
                set = Some(k + x1);
            }
            Crossings::Two(x1, x2) => {
                rise = Some(k + x1);
                set = Some(k + x2);
            }
            Crossings::None => {}
        }

        if rise.is_some() && set.is_some() {
            break;
        }
        h0 = h2;
    }

    if rise.is_none() && set.is_none() {
        let always_up = ye > 0.0;
        debug!(
            "moon is always {} at ({latitude}, {longitude}) for the day starting {}",
            if always_up { "up" } else { "down" },
            start.naive_local()
        );
        return Ok(if always_up {
            MoonTimes::AlwaysUp
        } else {
            MoonTimes::AlwaysDown
        });
    }

    Ok(MoonTimes::Crossings {
        rise: rise.map(|hours| hours_later(&start, hours)).transpose()?,
        set: set.map(|hours| hours_later(&start, hours)).transpose()?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, Utc};

    fn assert_close<Tz: TimeZone>(
        actual: &DateTime<Tz>,
        expected: DateTime<Utc>,
        tolerance_ms: i64,
    ) {
        let delta = (actual.with_timezone(&Utc) - expected).num_milliseconds().abs();
        assert!(delta <= tolerance_ms, "expected {expected}, got {actual:?}");
    }

    #[test]
    fn test_parabola_two_crossings() {
        // Altitudes rising through the horizon and falling back: a hump
        let parabola = Parabola::through(-1.0, 1.0, -1.0);
        assert!(parabola.vertex_altitude() > 0.0);
        match parabola.crossings() {
            Crossings::Two(x1, x2) => {
                assert!((x1 + 0.5_f64.sqrt()).abs() < 1e-12);
                assert!((x2 - 0.5_f64.sqrt()).abs() < 1e-12);
            }
            _ => panic!("expected two crossings"),
        }
    }

    #[test]
    fn test_parabola_single_crossing() {
        let parabola = Parabola::through(-1.0, 0.5, 1.0);
        match parabola.crossings() {
            Crossings::One(x) => assert!((-1.0..0.0).contains(&x)),
            _ => panic!("expected one crossing"),
        }
    }

    #[test]
    fn test_parabola_without_crossing() {
        assert!(matches!(
            Parabola::through(1.0, 2.0, 1.5).crossings(),
            Crossings::None
        ));
        assert!(matches!(
            Parabola::through(-1.0, -2.0, -1.5).crossings(),
            Crossings::None
        ));
    }

    #[test]
    fn test_reference_rise_set() {
        let date = Utc.with_ymd_and_hms(2013, 3, 4, 0, 0, 0).unwrap();
        let times = rise_set(&date, 50.5, 30.5, DayStart::LocalMidnight).unwrap();

        let at = |h, m, s, ms| {
            Utc.with_ymd_and_hms(2013, 3, 4, h, m, s).unwrap() + Duration::milliseconds(ms)
        };
        assert_close(times.rise().unwrap(), at(23, 54, 29, 675), 5);
        assert_close(times.set().unwrap(), at(7, 47, 58, 850), 5);
        assert!(!times.is_always_up());
        assert!(!times.is_always_down());
    }

    #[test]
    fn test_local_midnight_uses_local_date() {
        let kyiv = FixedOffset::east_opt(2 * 3600).unwrap();
        let date = kyiv.with_ymd_and_hms(2013, 3, 5, 1, 0, 0).unwrap();

        let local = DayStart::LocalMidnight.start_of_day(&date).unwrap();
        assert_eq!(local, kyiv.with_ymd_and_hms(2013, 3, 5, 0, 0, 0).unwrap());

        // 01:00 in Kyiv is still 4 March in UTC
        let utc = DayStart::UtcMidnight.start_of_day(&date).unwrap();
        assert_eq!(
            utc.with_timezone(&Utc),
            Utc.with_ymd_and_hms(2013, 3, 4, 0, 0, 0).unwrap()
        );
        assert_eq!(utc.offset(), date.offset());
    }

    #[test]
    fn test_results_keep_the_input_zone() {
        let kyiv = FixedOffset::east_opt(2 * 3600).unwrap();
        let date = kyiv.with_ymd_and_hms(2013, 3, 4, 12, 0, 0).unwrap();
        let times = rise_set(&date, 50.5, 30.5, DayStart::UtcMidnight).unwrap();

        let set = times.set().unwrap();
        assert_eq!(set.offset(), &kyiv);
        assert_close(
            set,
            Utc.with_ymd_and_hms(2013, 3, 4, 7, 47, 58).unwrap() + Duration::milliseconds(850),
            5,
        );
    }

    #[test]
    fn test_always_up_and_down() {
        let at = |m, d| Utc.with_ymd_and_hms(2023, m, d, 0, 0, 0).unwrap();

        let up = rise_set(&at(6, 21), 78.22, 15.65, DayStart::UtcMidnight).unwrap();
        assert!(up.is_always_up());
        assert!(up.rise().is_none() && up.set().is_none());

        let down = rise_set(&at(6, 1), 78.22, 15.65, DayStart::UtcMidnight).unwrap();
        assert!(down.is_always_down());
    }

    #[test]
    fn test_invalid_coordinates() {
        let date = Utc.with_ymd_and_hms(2013, 3, 4, 0, 0, 0).unwrap();
        assert!(rise_set(&date, -90.5, 0.0, DayStart::LocalMidnight).is_err());
        assert!(rise_set(&date, 0.0, 200.0, DayStart::LocalMidnight).is_err());
    }
}
