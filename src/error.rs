//! Error types for solar geometry and irradiance calculations.

use core::fmt;

/// Result type alias for operations in this crate.
pub type Result<T> = core::result::Result<T, Error>;

/// Errors that can occur during solar geometry and irradiance calculations.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Invalid latitude value (must be between -90 and +90 degrees).
    InvalidLatitude {
        /// The invalid latitude value provided.
        value: f64,
    },
    /// Invalid longitude value (must be between -180 and +180 degrees).
    InvalidLongitude {
        /// The invalid longitude value provided.
        value: f64,
    },
    /// Invalid surface tilt angle (must be between 0 and 180 degrees).
    InvalidTilt {
        /// The invalid tilt value provided.
        value: f64,
    },
    /// Invalid surface azimuth (must be between -180 and +180 degrees).
    InvalidSurfaceAzimuth {
        /// The invalid azimuth value provided.
        value: f64,
    },
    /// Invalid ground albedo (must be between 0 and 1).
    InvalidAlbedo {
        /// The invalid albedo value provided.
        value: f64,
    },
    /// Invalid calendar date (month 1-12, day 1-31).
    InvalidDate {
        /// The month value provided.
        month: u32,
        /// The day value provided.
        day: u32,
    },
    /// Invalid solar hour (must be between 0 and 24).
    InvalidSolarHour {
        /// The invalid hour value provided.
        value: f64,
    },
    /// Input outside the mathematically valid range of a formula.
    Domain {
        /// Description of the violated domain constraint.
        message: &'static str,
        /// The offending value.
        value: f64,
    },
    /// Malformed weather data encountered while parsing.
    InvalidWeatherData {
        /// One-based line number of the offending input line.
        line: usize,
        /// Description of the problem.
        message: &'static str,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLatitude { value } => {
                write!(
                    f,
                    "invalid latitude {value}° (must be between -90° and +90°)"
                )
            }
            Self::InvalidLongitude { value } => {
                write!(
                    f,
                    "invalid longitude {value}° (must be between -180° and +180°)"
                )
            }
            Self::InvalidTilt { value } => {
                write!(f, "invalid tilt {value}° (must be between 0° and 180°)")
            }
            Self::InvalidSurfaceAzimuth { value } => {
                write!(
                    f,
                    "invalid surface azimuth {value}° (must be between -180° and +180°)"
                )
            }
            Self::InvalidAlbedo { value } => {
                write!(f, "invalid albedo {value} (must be between 0 and 1)")
            }
            Self::InvalidDate { month, day } => {
                write!(f, "invalid calendar date: month {month}, day {day}")
            }
            Self::InvalidSolarHour { value } => {
                write!(f, "invalid solar hour {value} (must be between 0 and 24)")
            }
            Self::Domain { message, value } => {
                write!(f, "domain error: {message} (got {value})")
            }
            Self::InvalidWeatherData { line, message } => {
                write!(f, "invalid weather data at line {line}: {message}")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

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

    /// Creates an invalid tilt error.
    #[must_use]
    pub const fn invalid_tilt(value: f64) -> Self {
        Self::InvalidTilt { value }
    }

    /// Creates an invalid surface azimuth error.
    #[must_use]
    pub const fn invalid_surface_azimuth(value: f64) -> Self {
        Self::InvalidSurfaceAzimuth { value }
    }

    /// Creates an invalid albedo error.
    #[must_use]
    pub const fn invalid_albedo(value: f64) -> Self {
        Self::InvalidAlbedo { value }
    }

    /// Creates a domain error.
    #[must_use]
    pub const fn domain(message: &'static str, value: f64) -> Self {
        Self::Domain { message, value }
    }

    /// Creates a weather data parsing error.
    #[must_use]
    pub const fn invalid_weather_data(line: usize, message: &'static str) -> Self {
        Self::InvalidWeatherData { line, message }
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

/// Validates a surface tilt angle (0° horizontal, 180° downward-facing).
///
/// # Errors
/// Returns `InvalidTilt` if tilt is outside 0 to 180 degrees.
pub fn check_tilt(tilt: f64) -> Result<()> {
    if !(0.0..=180.0).contains(&tilt) {
        return Err(Error::invalid_tilt(tilt));
    }
    Ok(())
}

/// Validates a surface azimuth (0° south, sign per the model family's
/// convention).
///
/// # Errors
/// Returns `InvalidSurfaceAzimuth` if azimuth is outside -180 to +180 degrees.
pub fn check_surface_azimuth(azimuth: f64) -> Result<()> {
    if !(-180.0..=180.0).contains(&azimuth) {
        return Err(Error::invalid_surface_azimuth(azimuth));
    }
    Ok(())
}

/// Validates a ground albedo coefficient.
///
/// # Errors
/// Returns `InvalidAlbedo` if albedo is outside 0 to 1.
pub fn check_albedo(albedo: f64) -> Result<()> {
    if !(0.0..=1.0).contains(&albedo) {
        return Err(Error::invalid_albedo(albedo));
    }
    Ok(())
}

/// Validates a solar hour (0 to 24).
///
/// # Errors
/// Returns `InvalidSolarHour` for values outside 0 to 24.
pub fn check_solar_hour(hour: f64) -> Result<()> {
    if !(0.0..=24.0).contains(&hour) {
        return Err(Error::InvalidSolarHour { value: hour });
    }
    Ok(())
}
