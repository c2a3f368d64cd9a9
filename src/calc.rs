//! The engine: an event table and a zone resolver, applied to sun times.

use std::sync::Arc;

use chrono::{DateTime, TimeZone, Utc};
use log::debug;

use crate::zone::{ZoneResolver, ZonedTime, project, unresolved};
use crate::{EventTable, Result, SunEvent, SunTimes, sun};

/// Computes sun times for a location, expressed in the location's own time zone.
///
/// An engine is an immutable configuration snapshot. [`SunCalc::add_time`] and
/// [`SunCalc::with_event_table`] return a new engine, and clones share the zone
/// resolver, so one engine can serve many threads.
///
/// # Example
/// ```
/// # #[cfg(feature = "tz-lookup")] {
/// use chrono::{TimeZone, Timelike, Utc};
/// use suncalc::SunCalc;
///
/// let calc = SunCalc::new();
/// let date = Utc.with_ymd_and_hms(2023, 4, 19, 0, 0, 0).unwrap();
/// let times = calc.times(&date, 35.68, 139.65, 0.0).unwrap();
///
/// // Tokyo
/// let sunrise = times.get("sunrise").unwrap().as_ref().unwrap();
/// assert_eq!((sunrise.hour(), sunrise.minute()), (5, 5));
/// # }
/// ```
#[derive(Clone)]
pub struct SunCalc {
    table: EventTable,
    resolver: Arc<dyn ZoneResolver>,
}

impl SunCalc {
    /// Creates an engine with the built-in light phases and the bundled zone lookup.
    #[cfg(feature = "tz-lookup")]
    #[must_use]
    pub fn new() -> Self {
        Self::with_resolver(crate::zone::TzfResolver::new())
    }

    /// Creates an engine with the built-in light phases and a custom zone resolver.
    pub fn with_resolver<R: ZoneResolver + 'static>(resolver: R) -> Self {
        Self {
            table: EventTable::default(),
            resolver: Arc::new(resolver),
        }
    }

    /// Returns this engine with its event table replaced.
    #[must_use]
    pub fn with_event_table(self, table: EventTable) -> Self {
        Self { table, ..self }
    }

    /// Returns this engine with one more light phase.
    ///
    /// The engine this is called on is consumed; clone it first to keep the
    /// original table. Entries are appended even when an identical one exists.
    ///
    /// # Errors
    /// Returns `InvalidEventAngle` if the angle is outside -90 to +90 degrees.
    ///
    /// # Example
    /// ```
    /// use suncalc::{FixedZone, SunCalc};
    ///
    /// let calc = SunCalc::with_resolver(FixedZone(chrono_tz::UTC))
    ///     .add_time(-4.0, "blueHourEnd", "blueHour")
    ///     .unwrap();
    /// assert_eq!(calc.event_table().len(), 7);
    /// ```
    pub fn add_time(
        self,
        angle: f64,
        rise_label: impl Into<String>,
        set_label: impl Into<String>,
    ) -> Result<Self> {
        let event = SunEvent::new(angle, rise_label, set_label)?;
        Ok(Self {
            table: self.table.with_event(event),
            resolver: self.resolver,
        })
    }

    /// Gets the event table.
    #[must_use]
    pub const fn event_table(&self) -> &EventTable {
        &self.table
    }

    /// Resolves the time zone of a coordinate.
    ///
    /// # Errors
    /// Returns `ZoneResolution` if the resolver knows no zone for the coordinate.
    pub fn time_zone(&self, latitude: f64, longitude: f64) -> Result<chrono_tz::Tz> {
        self.resolver.resolve(latitude, longitude)
    }

    /// Calculates sun times in UTC with this engine's event table.
    ///
    /// # Errors
    /// See [`sun::times_utc`].
    pub fn times_utc<Tz: TimeZone>(
        &self,
        date: &DateTime<Tz>,
        latitude: f64,
        longitude: f64,
        height: f64,
    ) -> Result<SunTimes<DateTime<Utc>>> {
        sun::times_utc(date, latitude, longitude, height, &self.table)
    }

    /// Calculates sun times, each expressed in the local zone of the coordinate.
    ///
    /// Each entry carries its own outcome. If the zone cannot be resolved or a
    /// single time cannot be expressed in it, those entries are `Err` and a
    /// warning is logged; the remaining entries are unaffected.
    ///
    /// # Arguments
    /// * `date` - Instant near solar noon of the day of interest (see [`sun::times_utc`])
    /// * `latitude` - Observer latitude in degrees (-90 to +90)
    /// * `longitude` - Observer longitude in degrees (-180 to +180)
    /// * `height` - Observer height in meters (0 for ground level)
    ///
    /// # Errors
    /// Returns `InvalidLatitude`, `InvalidLongitude` or `InvalidHeight` before
    /// anything is computed.
    pub fn times<Tz: TimeZone>(
        &self,
        date: &DateTime<Tz>,
        latitude: f64,
        longitude: f64,
        height: f64,
    ) -> Result<SunTimes<ZonedTime>> {
        let times = self.times_utc(date, latitude, longitude, height)?;

        Ok(match self.time_zone(latitude, longitude) {
            Ok(zone) => {
                debug!("projecting sun times for ({latitude}, {longitude}) into {zone}");
                project(times, zone)
            }
            Err(err) => unresolved(times, &err),
        })
    }
}

#[cfg(feature = "tz-lookup")]
impl Default for SunCalc {
    fn default() -> Self {
        Self::new()
    }
}

impl core::fmt::Debug for SunCalc {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("SunCalc")
            .field("table", &self.table)
            .finish_non_exhaustive()
    }
}
