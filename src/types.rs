//! Result types for sun and moon calculations.

use core::f64::consts::PI;

use crate::math::normalize_radians;

/// Position of a body in the observer's sky.
///
/// Angles are radians. The azimuth is measured from south and increases
/// towards the west, so due south is 0, due west is π/2 and due east is -π/2.
/// Use [`Position::azimuth_from_north`] for the compass convention.
///
/// Altitude is geometric for the Sun; no refraction is applied.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    /// Azimuth in radians, south-based, increasing westward
    azimuth: f64,
    /// Altitude above the horizon in radians
    altitude: f64,
}

impl Position {
    pub(crate) const fn new(azimuth: f64, altitude: f64) -> Self {
        Self { azimuth, altitude }
    }

    /// Gets the azimuth in radians (0 = south, increasing westward).
    #[must_use]
    pub const fn azimuth(&self) -> f64 {
        self.azimuth
    }

    /// Gets the altitude in radians (0 = horizon, π/2 = zenith).
    #[must_use]
    pub const fn altitude(&self) -> f64 {
        self.altitude
    }

    /// Gets the azimuth in radians measured clockwise from north, in [0, 2π).
    ///
    /// # Example
    /// ```
    /// use chrono::{TimeZone, Utc};
    ///
    /// let date = Utc.with_ymd_and_hms(2013, 3, 5, 0, 0, 0).unwrap();
    /// let position = suncalc::sun::position(&date, 50.5, 30.5).unwrap();
    /// let compass = position.azimuth_from_north().to_degrees();
    /// assert!((0.0..360.0).contains(&compass));
    /// ```
    #[must_use]
    pub fn azimuth_from_north(&self) -> f64 {
        normalize_radians(self.azimuth + PI)
    }

    /// Checks if the body is above the horizon (altitude > 0).
    #[must_use]
    pub fn is_above_horizon(&self) -> bool {
        self.altitude > 0.0
    }
}

/// Position of the Moon in the observer's sky, with distance and parallactic angle.
///
/// Azimuth follows the same south-based convention as [`Position`]. Altitude
/// includes atmospheric refraction.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MoonPosition {
    azimuth: f64,
    altitude: f64,
    /// Distance from the Earth's center in kilometers
    distance: f64,
    parallactic_angle: f64,
}

impl MoonPosition {
    pub(crate) const fn new(
        azimuth: f64,
        altitude: f64,
        distance: f64,
        parallactic_angle: f64,
    ) -> Self {
        Self {
            azimuth,
            altitude,
            distance,
            parallactic_angle,
        }
    }

    /// Gets the azimuth in radians (0 = south, increasing westward).
    #[must_use]
    pub const fn azimuth(&self) -> f64 {
        self.azimuth
    }

    /// Gets the apparent altitude in radians, refraction included.
    #[must_use]
    pub const fn altitude(&self) -> f64 {
        self.altitude
    }

    /// Gets the Earth-Moon distance in kilometers.
    #[must_use]
    pub const fn distance(&self) -> f64 {
        self.distance
    }

    /// Gets the parallactic angle in radians.
    #[must_use]
    pub const fn parallactic_angle(&self) -> f64 {
        self.parallactic_angle
    }

    /// Gets the azimuth in radians measured clockwise from north, in [0, 2π).
    #[must_use]
    pub fn azimuth_from_north(&self) -> f64 {
        normalize_radians(self.azimuth + PI)
    }
}

/// Illuminated part of the Moon as seen from the Earth.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MoonIllumination {
    fraction: f64,
    phase: f64,
    angle: f64,
}

impl MoonIllumination {
    pub(crate) const fn new(fraction: f64, phase: f64, angle: f64) -> Self {
        Self {
            fraction,
            phase,
            angle,
        }
    }

    /// Gets the illuminated fraction of the disk, from 0 (new) to 1 (full).
    #[must_use]
    pub const fn fraction(&self) -> f64 {
        self.fraction
    }

    /// Gets the phase in [0, 1), wrapping from 1 back to 0 at new moon.
    ///
    /// | phase | name            |
    /// |-------|-----------------|
    /// | 0     | new moon        |
    /// | 0.25  | first quarter   |
    /// | 0.5   | full moon       |
    /// | 0.75  | last quarter    |
    #[must_use]
    pub const fn phase(&self) -> f64 {
        self.phase
    }

    /// Gets the midpoint angle in radians of the illuminated limb, counted
    /// eastward from the north point of the disk.
    ///
    /// The angle is negative while waxing and positive while waning.
    #[must_use]
    pub const fn angle(&self) -> f64 {
        self.angle
    }

    /// Checks if the Moon is waxing (phase below one half).
    #[must_use]
    pub fn is_waxing(&self) -> bool {
        self.phase < 0.5
    }
}

/// A labelled light phase boundary in a [`SunTimes`] result.
///
/// `time` is `None` when the sun never reaches the entry's altitude on that
/// day, as in polar summer or winter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SunTime<T> {
    label: String,
    time: Option<T>,
}

impl<T> SunTime<T> {
    pub(crate) const fn new(label: String, time: Option<T>) -> Self {
        Self { label, time }
    }

    /// Gets the label of this entry, e.g. `"sunrise"`.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Gets the time, if the event happens on this day.
    pub const fn time(&self) -> Option<&T> {
        self.time.as_ref()
    }

    /// Consumes the entry, returning the label and the time.
    pub fn into_parts(self) -> (String, Option<T>) {
        (self.label, self.time)
    }
}

/// Sun times for one day: solar noon, nadir and one rise/set pair per event table entry.
///
/// Entries keep the order of the table, rise label before set label. Labels are
/// not deduplicated; [`SunTimes::get`] returns the last entry with a label.
///
/// The time type is generic: [`crate::sun::times_utc`] produces
/// `SunTimes<DateTime<Utc>>` and [`crate::SunCalc::times`] produces
/// `SunTimes<ZonedTime>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SunTimes<T> {
    solar_noon: T,
    nadir: T,
    events: Vec<SunTime<T>>,
}

/// Label of the solar transit entry.
pub const SOLAR_NOON: &str = "solarNoon";

/// Label of the lowest point of the sun, twelve hours before solar noon.
pub const NADIR: &str = "nadir";

impl<T> SunTimes<T> {
    pub(crate) const fn new(solar_noon: T, nadir: T, events: Vec<SunTime<T>>) -> Self {
        Self {
            solar_noon,
            nadir,
            events,
        }
    }

    /// Gets the solar noon (transit).
    pub const fn solar_noon(&self) -> &T {
        &self.solar_noon
    }

    /// Gets the nadir, the darkest moment of the night before solar noon.
    pub const fn nadir(&self) -> &T {
        &self.nadir
    }

    /// Gets the rise/set entries in table order.
    #[must_use]
    pub fn events(&self) -> &[SunTime<T>] {
        &self.events
    }

    /// Looks up a time by label.
    ///
    /// Table entries take precedence over `solarNoon` and `nadir`, and a later
    /// entry shadows an earlier one with the same label.
    ///
    /// # Returns
    /// `None` if the label is unknown or the event does not happen on this day.
    ///
    /// # Example
    /// ```
    /// use chrono::{TimeZone, Utc};
    /// use suncalc::{EventTable, sun};
    ///
    /// let date = Utc.with_ymd_and_hms(2013, 3, 5, 0, 0, 0).unwrap();
    /// let times = sun::times_utc(&date, 50.5, 30.5, 0.0, &EventTable::default()).unwrap();
    /// assert!(times.get("sunrise").unwrap() < times.get("solarNoon").unwrap());
    /// assert!(times.get("moonrise").is_none());
    /// ```
    pub fn get(&self, label: &str) -> Option<&T> {
        if let Some(entry) = self.events.iter().rev().find(|entry| entry.label == label) {
            return entry.time();
        }
        match label {
            SOLAR_NOON => Some(&self.solar_noon),
            NADIR => Some(&self.nadir),
            _ => None,
        }
    }

    /// Checks if a label is present, whether or not its event happens.
    #[must_use]
    pub fn contains_label(&self, label: &str) -> bool {
        label == SOLAR_NOON
            || label == NADIR
            || self.events.iter().any(|entry| entry.label == label)
    }

    /// Iterates over all entries as `(label, time)`: solar noon, nadir, then the events.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&T>)> {
        [
            (SOLAR_NOON, Some(&self.solar_noon)),
            (NADIR, Some(&self.nadir)),
        ]
        .into_iter()
        .chain(self.events.iter().map(|entry| (entry.label(), entry.time())))
    }

    /// Number of entries, including solar noon and nadir.
    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len() + 2
    }

    /// Always false: solar noon and nadir are always present.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        false
    }

    /// Converts every time, passing its label along.
    ///
    /// Absent events stay absent.
    pub fn map<U, F>(self, mut f: F) -> SunTimes<U>
    where
        F: FnMut(&str, T) -> U,
    {
        let solar_noon = f(SOLAR_NOON, self.solar_noon);
        let nadir = f(NADIR, self.nadir);
        let events = self
            .events
            .into_iter()
            .map(|entry| {
                let time = entry.time.map(|time| f(&entry.label, time));
                SunTime::new(entry.label, time)
            })
            .collect();
        SunTimes::new(solar_noon, nadir, events)
    }
}

/// Moon rise and set for one day.
///
/// When the moon crosses the horizon at least one of `rise`/`set` is present.
/// Otherwise the day is classified as always up or always down, and neither
/// time is reported.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoonTimes<T> {
    /// The moon crosses the horizon at least once during the day
    Crossings {
        /// Time of moonrise, if it happens during the day
        rise: Option<T>,
        /// Time of moonset, if it happens during the day
        set: Option<T>,
    },
    /// The moon stays above the horizon for the whole day
    AlwaysUp,
    /// The moon stays below the horizon for the whole day
    AlwaysDown,
}

impl<T> MoonTimes<T> {
    /// Gets the moonrise time, if any.
    pub const fn rise(&self) -> Option<&T> {
        match self {
            Self::Crossings { rise, .. } => rise.as_ref(),
            Self::AlwaysUp | Self::AlwaysDown => None,
        }
    }

    /// Gets the moonset time, if any.
    pub const fn set(&self) -> Option<&T> {
        match self {
            Self::Crossings { set, .. } => set.as_ref(),
            Self::AlwaysUp | Self::AlwaysDown => None,
        }
    }

    /// Checks if the moon stays above the horizon all day.
    pub const fn is_always_up(&self) -> bool {
        matches!(self, Self::AlwaysUp)
    }

    /// Checks if the moon stays below the horizon all day.
    pub const fn is_always_down(&self) -> bool {
        matches!(self, Self::AlwaysDown)
    }

    /// Converts the rise and set times.
    pub fn map<U, F>(self, mut f: F) -> MoonTimes<U>
    where
        F: FnMut(T) -> U,
    {
        match self {
            Self::Crossings { rise, set } => MoonTimes::Crossings {
                rise: rise.map(&mut f),
                set: set.map(&mut f),
            },
            Self::AlwaysUp => MoonTimes::AlwaysUp,
            Self::AlwaysDown => MoonTimes::AlwaysDown,
        }
    }
}
