//! Error types for the sun and moon calculations.

use thiserror::Error;

/// Result type alias for operations in this crate.
pub type Result<T> = core::result::Result<T, Error>;

/// Errors that can occur while computing positions, light phases or zoned times.
///
/// Unreachable events (polar day/night, a moon that never crosses the horizon)
/// are not errors; they are reported through the result types instead.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Invalid latitude value (must be between -90 and +90 degrees).
    #[error("invalid latitude {value}° (must be between -90° and +90°)")]
    InvalidLatitude {
        /// The invalid latitude value provided.
        value: f64,
    },
    /// Invalid longitude value (must be between -180 and +180 degrees).
    #[error("invalid longitude {value}° (must be between -180° and +180°)")]
    InvalidLongitude {
        /// The invalid longitude value provided.
        value: f64,
    },
    /// Invalid observer height above the horizon.
    #[error("invalid observer height {value} m (must be finite and not negative)")]
    InvalidHeight {
        /// The invalid height value provided.
        value: f64,
    },
    /// Invalid sun altitude for a light phase entry.
    #[error("invalid event angle {value}° (must be between -90° and +90°)")]
    InvalidEventAngle {
        /// The invalid angle value provided.
        value: f64,
    },
    /// Date/time outside the representable range.
    #[error("invalid date/time: {message}")]
    InvalidDateTime {
        /// Description of the date/time constraint violation.
        message: &'static str,
    },
    /// No time zone could be resolved for a coordinate.
    #[error("no time zone for ({latitude}°, {longitude}°): {reason}")]
    ZoneResolution {
        /// Latitude that was looked up.
        latitude: f64,
        /// Longitude that was looked up.
        longitude: f64,
        /// What the resolver reported.
        reason: String,
    },
    /// A UTC result could not be expressed in local time.
    #[error("cannot express {label} in time zone {zone}")]
    ZoneConversion {
        /// Result entry that failed.
        label: String,
        /// Zone the entry was projected into.
        zone: String,
    },
}

impl Error {
    /// Creates an invalid latitude error.
    #[must_use]
    pub const fn invalid_latitude(value: f64) -> Self {
        Self::InvalidLatitude { value }
    }

    /// Creates an invalid longitude error.
    #[must_use]
    pub const fn invalid_longitude(value: f64) -> Self {
        Self::InvalidLongitude { value }
    }

    /// Creates an invalid height error.
    #[must_use]
    pub const fn invalid_height(value: f64) -> Self {
        Self::InvalidHeight { value }
    }

    /// Creates an invalid event angle error.
    #[must_use]
    pub const fn invalid_event_angle(value: f64) -> Self {
        Self::InvalidEventAngle { value }
    }

    /// Creates an invalid date/time error.
    #[must_use]
    pub const fn invalid_datetime(message: &'static str) -> Self {
        Self::InvalidDateTime { message }
    }

    /// Creates a zone resolution error.
    #[must_use]
    pub fn zone_resolution(latitude: f64, longitude: f64, reason: impl Into<String>) -> Self {
        Self::ZoneResolution {
            latitude,
            longitude,
            reason: reason.into(),
        }
    }

    /// Creates a zone conversion error.
    #[must_use]
    pub fn zone_conversion(label: impl Into<String>, zone: impl Into<String>) -> Self {
        Self::ZoneConversion {
            label: label.into(),
            zone: zone.into(),
        }
    }
}

/// Validates latitude is within the valid range (-90 to +90 degrees).
///
/// # Errors
/// Returns `InvalidLatitude` if latitude is outside -90 to +90 degrees.
pub fn check_latitude(latitude: f64) -> Result<()> {
    if !(-90.0..=90.0).contains(&latitude) {
        return Err(Error::invalid_latitude(latitude));
    }
    Ok(())
}

/// Validates longitude is within the valid range (-180 to +180 degrees).
///
/// # Errors
/// Returns `InvalidLongitude` if longitude is outside -180 to +180 degrees.
pub fn check_longitude(longitude: f64) -> Result<()> {
    if !(-180.0..=180.0).contains(&longitude) {
        return Err(Error::invalid_longitude(longitude));
    }
    Ok(())
}

/// Validates both latitude and longitude are within valid ranges.
///
/// # Errors
/// Returns `InvalidLatitude` or `InvalidLongitude` for out-of-range coordinates.
pub fn check_coordinates(latitude: f64, longitude: f64) -> Result<()> {
    check_latitude(latitude)?;
    check_longitude(longitude)?;
    Ok(())
}

/// Validates an observer height in meters.
///
/// # Errors
/// Returns `InvalidHeight` for negative or non-finite heights.
pub fn check_height(height: f64) -> Result<()> {
    if !height.is_finite() || height < 0.0 {
        return Err(Error::invalid_height(height));
    }
    Ok(())
}

/// Validates a light phase angle in degrees.
///
/// # Errors
/// Returns `InvalidEventAngle` if the angle is outside -90 to +90 degrees.
pub fn check_event_angle(angle: f64) -> Result<()> {
    if !(-90.0..=90.0).contains(&angle) {
        return Err(Error::invalid_event_angle(angle));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latitude_validation() {
        assert!(check_latitude(0.0).is_ok());
        assert!(check_latitude(90.0).is_ok());
        assert!(check_latitude(-90.0).is_ok());
        assert!(check_latitude(50.5).is_ok());

        assert!(check_latitude(91.0).is_err());
        assert!(check_latitude(-91.0).is_err());
        assert!(check_latitude(f64::NAN).is_err());
        assert!(check_latitude(f64::INFINITY).is_err());
    }

    #[test]
    fn test_longitude_validation() {
        assert!(check_longitude(0.0).is_ok());
        assert!(check_longitude(180.0).is_ok());
        assert!(check_longitude(-180.0).is_ok());
        assert!(check_longitude(30.5).is_ok());

        assert!(check_longitude(181.0).is_err());
        assert!(check_longitude(-181.0).is_err());
        assert!(check_longitude(f64::NAN).is_err());
    }

    #[test]
    fn test_height_validation() {
        assert!(check_height(0.0).is_ok());
        assert!(check_height(2000.0).is_ok());

        assert!(check_height(-1.0).is_err());
        assert!(check_height(f64::NAN).is_err());
        assert!(check_height(f64::INFINITY).is_err());
    }

    #[test]
    fn test_event_angle_validation() {
        assert!(check_event_angle(-0.833).is_ok());
        assert!(check_event_angle(90.0).is_ok());
        assert!(check_event_angle(-90.0).is_ok());

        assert!(check_event_angle(-95.0).is_err());
        assert!(check_event_angle(f64::NAN).is_err());
    }

    #[test]
    fn test_error_display() {
        let err = Error::invalid_latitude(95.0);
        assert_eq!(
            err.to_string(),
            "invalid latitude 95° (must be between -90° and +90°)"
        );

        let err = Error::invalid_height(-3.0);
        assert_eq!(
            err.to_string(),
            "invalid observer height -3 m (must be finite and not negative)"
        );

        let err = Error::zone_conversion("sunrise", "Europe/Kyiv");
        assert_eq!(
            err.to_string(),
            "cannot express sunrise in time zone Europe/Kyiv"
        );
    }
}
