//! # SunCalc
//!
//! Sun and moon positions, light phases and moonrise/moonset for any place on Earth.
//!
//! This library provides low precision (about one arc minute, one minute of
//! time) closed-form ephemerides, good enough for scheduling around daylight:
//! - **Sun**: position, solar noon, nadir and the crossings of a configurable
//!   table of altitudes (sunrise/sunset, twilights, golden hour)
//! - **Moon**: position, distance, parallactic angle, illumination and rise/set
//!
//! Sun times can be projected into the observer's local time zone, resolved
//! from the coordinates with bundled boundary data.
//!
//! ## Feature Flags
//!
//! - `tz-lookup` (default): Resolve a coordinate's IANA time zone with `tzf-rs`
//! - `serde`: Serialize/deserialize event tables and position types
//!
//! **Configuration examples:**
//! ```toml
//! # Default: zone lookup included
//! suncalc = "0.1"
//!
//! # Bring your own zone resolver
//! suncalc = { version = "0.1", default-features = false }
//! ```
//!
//! ## Quick Start
//!
//! ### Sun and moon position
//! ```rust
//! use chrono::{TimeZone, Utc};
//! use suncalc::{moon, sun};
//!
//! let date = Utc.with_ymd_and_hms(2013, 3, 5, 0, 0, 0).unwrap();
//!
//! let position = sun::position(&date, 50.5, 30.5).unwrap();
//! println!("Sun altitude: {:.2}°", position.altitude().to_degrees());
//! println!("Sun azimuth: {:.2}° from north", position.azimuth_from_north().to_degrees());
//!
//! let moon = moon::position(&date, 50.5, 30.5).unwrap();
//! println!("Moon distance: {:.0} km", moon.distance());
//!
//! let illumination = moon::illumination(&date);
//! println!("Moon illuminated: {:.0}%", illumination.fraction() * 100.0);
//! ```
//!
//! ### Light phases in local time
//! ```rust
//! use chrono::{TimeZone, Utc};
//! use suncalc::{FixedZone, SunCalc};
//!
//! let calc = SunCalc::with_resolver(FixedZone(chrono_tz::Europe::Kyiv))
//!     .add_time(-4.0, "blueHourEnd", "blueHour")
//!     .unwrap();
//!
//! let date = Utc.with_ymd_and_hms(2013, 3, 5, 0, 0, 0).unwrap();
//! let times = calc.times(&date, 50.5, 30.5, 0.0).unwrap();
//!
//! for (label, time) in times.iter() {
//!     match time {
//!         Some(Ok(local)) => println!("{label}: {}", local.format("%H:%M")),
//!         Some(Err(err)) => println!("{label}: {err}"),
//!         None => println!("{label}: does not happen"),
//!     }
//! }
//! ```
//!
//! ### Moonrise and moonset
//! ```rust
//! use chrono::{TimeZone, Utc};
//! use suncalc::moon::{self, DayStart};
//!
//! let date = Utc.with_ymd_and_hms(2013, 3, 4, 0, 0, 0).unwrap();
//! match moon::rise_set(&date, 50.5, 30.5, DayStart::LocalMidnight).unwrap() {
//!     suncalc::MoonTimes::Crossings { rise, set } => {
//!         println!("Moonrise: {rise:?}");
//!         println!("Moonset: {set:?}");
//!     }
//!     suncalc::MoonTimes::AlwaysUp => println!("Moon up all day"),
//!     suncalc::MoonTimes::AlwaysDown => println!("Moon down all day"),
//! }
//! ```
//!
//! ## Coordinate System
//!
//! - **Angles**: radians throughout; latitude, longitude and event angles are degrees
//! - **Azimuth**: 0 = south, increasing westward (π/2 = west); use
//!   `azimuth_from_north()` for 0 = north, clockwise
//! - **Altitude**: 0 = horizon, π/2 = zenith
//!
//! ## References
//!
//! - Astronomy Answers, position of the Sun: <http://aa.quae.nl/en/reken/zonpositie.html>
//! - Astronomy Answers, position in the sky: <http://aa.quae.nl/en/reken/hemelpositie.html>
//! - Meeus, J. (1998). Astronomical Algorithms, 2nd ed. Willmann-Bell.

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![warn(clippy::pedantic, clippy::nursery, clippy::cargo, clippy::all)]
#![allow(
    clippy::module_name_repetitions,
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    clippy::cargo_common_metadata,
    clippy::multiple_crate_versions, // Acceptable for dev-dependencies
    clippy::float_cmp, // Exact comparisons of mathematical constants in tests
)]

// Public API exports
pub use crate::calc::SunCalc;
pub use crate::error::{Error, Result};
pub use crate::events::{EventTable, SunEvent};
pub use crate::moon::DayStart;
pub use crate::types::{
    MoonIllumination, MoonPosition, MoonTimes, NADIR, Position, SOLAR_NOON, SunTime, SunTimes,
};
#[cfg(feature = "tz-lookup")]
pub use crate::zone::TzfResolver;
pub use crate::zone::{FixedZone, ZoneResolver, ZonedTime};

// Body modules
pub mod moon;
pub mod sun;

// Core modules
pub mod calc;
pub mod error;
pub mod events;
pub mod types;
pub mod zone;

// Internal modules
mod coords;
mod math;

// Public modules
pub mod time;
