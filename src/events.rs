//! The table of light phases solved by [`crate::sun::times_utc`].
//!
//! Each entry pairs a sun altitude with the labels of the morning and evening
//! crossings. The table is an immutable value: extending it produces a new
//! table, so an engine can be shared across threads without locking.

use crate::error::check_event_angle;
use crate::Result;

/// A sun altitude with the labels of its morning and evening crossings.
///
/// With the `serde` feature this serializes as an `[angle, rise, set]` triple,
/// and the angle is validated on deserialization.
///
/// # Example
/// ```
/// # use suncalc::SunEvent;
/// let blue_hour = SunEvent::new(-4.0, "blueHourEnd", "blueHour").unwrap();
/// assert_eq!(blue_hour.angle(), -4.0);
/// assert_eq!(blue_hour.rise_label(), "blueHourEnd");
/// assert!(SunEvent::new(-120.0, "a", "b").is_err());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "(f64, String, String)", into = "(f64, String, String)")
)]
pub struct SunEvent {
    /// Sun altitude in degrees
    angle: f64,
    rise_label: String,
    set_label: String,
}

impl SunEvent {
    /// Creates an entry for a sun altitude in degrees.
    ///
    /// # Errors
    /// Returns `InvalidEventAngle` if the angle is outside -90 to +90 degrees.
    pub fn new(
        angle: f64,
        rise_label: impl Into<String>,
        set_label: impl Into<String>,
    ) -> Result<Self> {
        check_event_angle(angle)?;
        Ok(Self {
            angle,
            rise_label: rise_label.into(),
            set_label: set_label.into(),
        })
    }

    /// Gets the sun altitude in degrees.
    #[must_use]
    pub const fn angle(&self) -> f64 {
        self.angle
    }

    /// Gets the label of the morning crossing.
    #[must_use]
    pub fn rise_label(&self) -> &str {
        &self.rise_label
    }

    /// Gets the label of the evening crossing.
    #[must_use]
    pub fn set_label(&self) -> &str {
        &self.set_label
    }
}

impl TryFrom<(f64, String, String)> for SunEvent {
    type Error = crate::Error;

    fn try_from((angle, rise_label, set_label): (f64, String, String)) -> Result<Self> {
        Self::new(angle, rise_label, set_label)
    }
}

impl From<SunEvent> for (f64, String, String) {
    fn from(event: SunEvent) -> Self {
        (event.angle, event.rise_label, event.set_label)
    }
}

/// Built-in light phases: (angle, rise label, set label).
const BUILT_IN: [(f64, &str, &str); 6] = [
    (-0.833, "sunrise", "sunset"),
    (-0.3, "sunriseEnd", "sunsetStart"),
    (-6.0, "dawn", "dusk"),
    (-12.0, "nauticalDawn", "nauticalDusk"),
    (-18.0, "nightEnd", "night"),
    (6.0, "goldenHourEnd", "goldenHour"),
];

/// Ordered list of light phases.
///
/// The default table holds sunrise/sunset, the end of sunrise and start of
/// sunset, civil, nautical and astronomical twilight, and the golden hour.
/// Entries are never deduplicated: appending the same triple twice yields two
/// pairs of results.
///
/// # Example
/// ```
/// # use suncalc::{EventTable, SunEvent};
/// let table = EventTable::default()
///     .with_event(SunEvent::new(-4.0, "blueHourEnd", "blueHour").unwrap());
/// assert_eq!(table.len(), 7);
/// assert_eq!(EventTable::default().len(), 6);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct EventTable {
    entries: Vec<SunEvent>,
}

impl EventTable {
    /// Creates the table of built-in light phases.
    #[must_use]
    pub fn new() -> Self {
        BUILT_IN
            .iter()
            .map(|&(angle, rise_label, set_label)| SunEvent {
                angle,
                rise_label: rise_label.to_string(),
                set_label: set_label.to_string(),
            })
            .collect()
    }

    /// Creates a table without any entries.
    ///
    /// Sun times computed with an empty table still report solar noon and nadir.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Returns this table with `event` appended.
    #[must_use]
    pub fn with_event(mut self, event: SunEvent) -> Self {
        self.entries.push(event);
        self
    }

    /// Gets the entries in order.
    #[must_use]
    pub fn entries(&self) -> &[SunEvent] {
        &self.entries
    }

    /// Iterates over the entries in order.
    pub fn iter(&self) -> core::slice::Iter<'_, SunEvent> {
        self.entries.iter()
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Checks if the table has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for EventTable {
    fn default() -> Self {
        Self::new()
    }
}

impl FromIterator<SunEvent> for EventTable {
    fn from_iter<I: IntoIterator<Item = SunEvent>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a EventTable {
    type Item = &'a SunEvent;
    type IntoIter = core::slice::Iter<'a, SunEvent>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
