//! Time zone boundary: resolving a coordinate to a zone and projecting UTC results into it.

use chrono::{DateTime, Duration, Offset, Utc};
use chrono_tz::Tz;
use log::warn;

use crate::{Error, Result, SunTimes};

/// A result time in the local zone of the observer, or why it could not be produced.
pub type ZonedTime = Result<DateTime<Tz>>;

/// Maps a geographic coordinate to an IANA time zone.
///
/// Implemented for [`TzfResolver`] (feature `tz-lookup`), [`FixedZone`] and any
/// `Fn(f64, f64) -> Result<Tz>` closure taking latitude and longitude.
///
/// # Example
/// ```
/// use suncalc::{Error, SunCalc};
///
/// let calc = SunCalc::with_resolver(|latitude: f64, longitude: f64| {
///     if longitude > 0.0 {
///         Ok(chrono_tz::Europe::Kyiv)
///     } else {
///         Err(Error::zone_resolution(latitude, longitude, "outside service area"))
///     }
/// });
/// assert_eq!(calc.time_zone(50.5, 30.5).unwrap(), chrono_tz::Europe::Kyiv);
/// assert!(calc.time_zone(50.5, -30.5).is_err());
/// ```
pub trait ZoneResolver: Send + Sync {
    /// Resolves the zone for a latitude and longitude in degrees.
    ///
    /// # Errors
    /// Returns `ZoneResolution` if no zone is known for the coordinate.
    fn resolve(&self, latitude: f64, longitude: f64) -> Result<Tz>;
}

impl<F> ZoneResolver for F
where
    F: Fn(f64, f64) -> Result<Tz> + Send + Sync,
{
    fn resolve(&self, latitude: f64, longitude: f64) -> Result<Tz> {
        self(latitude, longitude)
    }
}

/// Resolver that puts every coordinate in the same zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedZone(pub Tz);

impl ZoneResolver for FixedZone {
    fn resolve(&self, _latitude: f64, _longitude: f64) -> Result<Tz> {
        Ok(self.0)
    }
}

/// Resolver backed by the time zone boundary data bundled with `tzf-rs`.
///
/// Building the finder decodes the boundary data, which takes noticeable time;
/// create one resolver and share it (an engine clone shares it too).
#[cfg(feature = "tz-lookup")]
pub struct TzfResolver {
    finder: tzf_rs::DefaultFinder,
}

#[cfg(feature = "tz-lookup")]
impl TzfResolver {
    /// Loads the bundled boundary data.
    #[must_use]
    pub fn new() -> Self {
        Self {
            finder: tzf_rs::DefaultFinder::new(),
        }
    }
}

#[cfg(feature = "tz-lookup")]
impl Default for TzfResolver {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(feature = "tz-lookup")]
impl core::fmt::Debug for TzfResolver {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("TzfResolver").finish_non_exhaustive()
    }
}

#[cfg(feature = "tz-lookup")]
impl ZoneResolver for TzfResolver {
    fn resolve(&self, latitude: f64, longitude: f64) -> Result<Tz> {
        let name = self.finder.get_tz_name(longitude, latitude);
        if name.is_empty() {
            return Err(Error::zone_resolution(latitude, longitude, "no zone at this location"));
        }
        name.parse::<Tz>().map_err(|_| {
            Error::zone_resolution(latitude, longitude, format!("unknown zone name {name}"))
        })
    }
}

/// Expresses one UTC result in `zone`.
///
/// Fails if the local wall clock time cannot be represented, which only
/// happens at the edges of chrono's range.
fn to_zone(label: &str, utc: &DateTime<Utc>, zone: Tz) -> ZonedTime {
    let zoned = utc.with_timezone(&zone);
    let offset = Duration::seconds(i64::from(zoned.offset().fix().local_minus_utc()));
    if utc.naive_utc().checked_add_signed(offset).is_none() {
        let err = Error::zone_conversion(label, zone.name());
        warn!("{err}");
        return Err(err);
    }
    Ok(zoned)
}

/// Projects every entry into `zone`. A failing entry does not affect the others.
pub(crate) fn project(times: SunTimes<DateTime<Utc>>, zone: Tz) -> SunTimes<ZonedTime> {
    times.map(|label, utc| to_zone(label, &utc, zone))
}

/// Marks every entry as failed with the resolver's error.
pub(crate) fn unresolved(times: SunTimes<DateTime<Utc>>, error: &Error) -> SunTimes<ZonedTime> {
    times.map(|label, _| {
        warn!("dropping {label}: {error}");
        Err(error.clone())
    })
}
