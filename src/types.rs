//! Core value types for solar geometry and irradiance calculations.
//!
//! All types are immutable: inputs go in through validating constructors,
//! results come out, and nothing retains state between calls.

use crate::error::{
    check_albedo, check_latitude, check_longitude, check_solar_hour, check_surface_azimuth,
    check_tilt,
};
use crate::{Error, Result};

/// Cumulative days before each month in the fixed non-leap reference year.
const CUMULATIVE_DAYS: [u32; 12] = [0, 31, 59, 90, 120, 151, 181, 212, 243, 273, 304, 334];

/// Days in each month of the fixed non-leap reference year.
const DAYS_IN_MONTH: [u32; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// Geographic position of a weather station or building site.
///
/// Latitude and longitude are in degrees; altitude, when present, is in
/// kilometres above sea level (the Hottel clear-sky correlations want km).
/// The timezone offset, when present, is the clock offset from UTC in hours.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Location {
    latitude: f64,
    longitude: f64,
    altitude_km: Option<f64>,
    timezone: Option<f64>,
}

impl Location {
    /// Creates a new location from latitude and longitude in degrees.
    ///
    /// # Errors
    /// Returns `InvalidLatitude` or `InvalidLongitude` for out-of-range
    /// coordinates.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self> {
        check_latitude(latitude)?;
        check_longitude(longitude)?;
        Ok(Self {
            latitude,
            longitude,
            altitude_km: None,
            timezone: None,
        })
    }

    /// Returns a copy of this location with the given altitude in kilometres.
    #[must_use]
    pub const fn with_altitude_km(mut self, altitude_km: f64) -> Self {
        self.altitude_km = Some(altitude_km);
        self
    }

    /// Returns a copy of this location with the given UTC offset in hours.
    #[must_use]
    pub const fn with_timezone(mut self, timezone: f64) -> Self {
        self.timezone = Some(timezone);
        self
    }

    /// Gets the latitude in degrees (-90 to +90, north positive).
    #[must_use]
    pub const fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Gets the longitude in degrees (-180 to +180, east positive).
    #[must_use]
    pub const fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Gets the altitude in kilometres above sea level, if known.
    #[must_use]
    pub const fn altitude_km(&self) -> Option<f64> {
        self.altitude_km
    }

    /// Gets the clock offset from UTC in hours, if known.
    #[must_use]
    pub const fn timezone(&self) -> Option<f64> {
        self.timezone
    }
}

/// A proleptic (month, day) pair interpreted in a fixed non-leap reference
/// year.
///
/// Weather-station series carry month and day but no year; the whole crate
/// therefore maps dates onto a non-leap year (February has 28 days and
/// December 31 is day 365). Use [`CalendarDate::from_date_like`] when a real
/// calendar date with year is available.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarDate {
    month: u32,
    day: u32,
}

impl CalendarDate {
    /// Creates a calendar date from month (1-12) and day of month.
    ///
    /// # Errors
    /// Returns `InvalidDate` if the month is outside 1-12 or the day does
    /// not exist in that month of the non-leap reference year.
    pub fn new(month: u32, day: u32) -> Result<Self> {
        if !(1..=12).contains(&month) || day < 1 || day > DAYS_IN_MONTH[(month - 1) as usize] {
            return Err(Error::InvalidDate { month, day });
        }
        Ok(Self { month, day })
    }

    /// Creates a calendar date from anything chrono considers a date.
    ///
    /// February 29 has no counterpart in the non-leap reference year and is
    /// rejected.
    ///
    /// # Errors
    /// Returns `InvalidDate` for February 29.
    #[cfg(feature = "chrono")]
    pub fn from_date_like<T: chrono::Datelike>(date: &T) -> Result<Self> {
        Self::new(date.month(), date.day())
    }

    /// Gets the month (1-12).
    #[must_use]
    pub const fn month(&self) -> u32 {
        self.month
    }

    /// Gets the day of month.
    #[must_use]
    pub const fn day(&self) -> u32 {
        self.day
    }

    /// Gets the day of year in the non-leap reference year (1-365).
    #[must_use]
    pub fn day_of_year(&self) -> u32 {
        CUMULATIVE_DAYS[(self.month - 1) as usize] + self.day
    }
}

/// Sun position for a given day, hour and latitude.
///
/// Angles are in degrees. The azimuth sign convention follows the formula
/// family that produced the position (measured from south in both); an
/// altitude of exactly 0 means the sun is at or below the horizon and it is
/// the caller's responsibility to filter such hours before feeding them to
/// the irradiance model.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SunPosition {
    declination: f64,
    hour_angle: f64,
    altitude: f64,
    azimuth: f64,
}

impl SunPosition {
    /// Creates a sun position from precomputed angles in degrees.
    #[must_use]
    pub const fn new(declination: f64, hour_angle: f64, altitude: f64, azimuth: f64) -> Self {
        Self {
            declination,
            hour_angle,
            altitude,
            azimuth,
        }
    }

    /// Gets the solar declination in degrees (roughly ±23.45).
    #[must_use]
    pub const fn declination(&self) -> f64 {
        self.declination
    }

    /// Gets the hour angle in degrees.
    #[must_use]
    pub const fn hour_angle(&self) -> f64 {
        self.hour_angle
    }

    /// Gets the solar altitude above the horizon in degrees.
    #[must_use]
    pub const fn altitude(&self) -> f64 {
        self.altitude
    }

    /// Gets the solar azimuth in degrees (0 = south).
    #[must_use]
    pub const fn azimuth(&self) -> f64 {
        self.azimuth
    }

    /// Gets the solar zenith angle in degrees (90 − altitude).
    #[must_use]
    pub fn zenith(&self) -> f64 {
        90.0 - self.altitude
    }

    /// Checks if the sun is above the horizon.
    #[must_use]
    pub fn is_sun_up(&self) -> bool {
        self.altitude > 0.0
    }
}

/// An arbitrarily tilted and oriented receiving surface.
///
/// Tilt β is 0° for a horizontal upward-facing surface, 90° for a vertical
/// one and up to 180° for downward-facing components. Azimuth γ is the
/// deviation of the surface normal's horizontal projection from south; its
/// sign follows the selected [`SolarModel`](crate::SolarModel) family's
/// azimuth convention. Albedo is the reflectance of the ground in front of
/// the surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Surface {
    tilt: f64,
    azimuth: f64,
    albedo: f64,
}

impl Surface {
    /// Default ground albedo used by [`Surface::with_orientation`].
    pub const DEFAULT_ALBEDO: f64 = 0.2;

    /// Creates a surface from tilt, azimuth and ground albedo.
    ///
    /// # Errors
    /// Returns `InvalidTilt`, `InvalidSurfaceAzimuth` or `InvalidAlbedo` for
    /// out-of-range values.
    pub fn new(tilt: f64, azimuth: f64, albedo: f64) -> Result<Self> {
        check_tilt(tilt)?;
        check_surface_azimuth(azimuth)?;
        check_albedo(albedo)?;
        Ok(Self {
            tilt,
            azimuth,
            albedo,
        })
    }

    /// Creates a surface with the default ground albedo of 0.2.
    ///
    /// # Errors
    /// Returns `InvalidTilt` or `InvalidSurfaceAzimuth` for out-of-range
    /// values.
    pub fn with_orientation(tilt: f64, azimuth: f64) -> Result<Self> {
        Self::new(tilt, azimuth, Self::DEFAULT_ALBEDO)
    }

    /// Gets the tilt angle β in degrees (0-180).
    #[must_use]
    pub const fn tilt(&self) -> f64 {
        self.tilt
    }

    /// Gets the surface azimuth γ in degrees (0 = south).
    #[must_use]
    pub const fn azimuth(&self) -> f64 {
        self.azimuth
    }

    /// Gets the ground albedo (0-1).
    #[must_use]
    pub const fn albedo(&self) -> f64 {
        self.albedo
    }
}

/// One hour of measured horizontal-plane irradiance from a weather station.
///
/// The hour is the solar hour label of the observation interval. Direct and
/// diffuse irradiance are on the horizontal plane in W/m². A measured sun
/// position (azimuth from south, zenith) may accompany observations sourced
/// from a weather file; when absent the sun position is computed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HourlyObservation {
    date: CalendarDate,
    hour: f64,
    direct_horizontal: f64,
    diffuse_horizontal: f64,
    sun_azimuth: Option<f64>,
    sun_zenith: Option<f64>,
}

impl HourlyObservation {
    /// Creates an hourly observation.
    ///
    /// # Errors
    /// Returns `InvalidDate` or `InvalidSolarHour` for out-of-range time
    /// components, or a `Domain` error for negative or non-finite irradiance.
    pub fn new(
        month: u32,
        day: u32,
        hour: f64,
        direct_horizontal: f64,
        diffuse_horizontal: f64,
    ) -> Result<Self> {
        let date = CalendarDate::new(month, day)?;
        check_solar_hour(hour)?;
        if !direct_horizontal.is_finite() || direct_horizontal < 0.0 {
            return Err(Error::domain(
                "direct horizontal irradiance must be finite and non-negative",
                direct_horizontal,
            ));
        }
        if !diffuse_horizontal.is_finite() || diffuse_horizontal < 0.0 {
            return Err(Error::domain(
                "diffuse horizontal irradiance must be finite and non-negative",
                diffuse_horizontal,
            ));
        }
        Ok(Self {
            date,
            hour,
            direct_horizontal,
            diffuse_horizontal,
            sun_azimuth: None,
            sun_zenith: None,
        })
    }

    /// Returns a copy of this observation carrying a measured sun position.
    #[must_use]
    pub const fn with_sun_position(mut self, azimuth: f64, zenith: f64) -> Self {
        self.sun_azimuth = Some(azimuth);
        self.sun_zenith = Some(zenith);
        self
    }

    /// Gets the calendar date of the observation.
    #[must_use]
    pub const fn date(&self) -> CalendarDate {
        self.date
    }

    /// Gets the month (1-12).
    #[must_use]
    pub const fn month(&self) -> u32 {
        self.date.month()
    }

    /// Gets the day of month.
    #[must_use]
    pub const fn day(&self) -> u32 {
        self.date.day()
    }

    /// Gets the solar hour of the observation.
    #[must_use]
    pub const fn hour(&self) -> f64 {
        self.hour
    }

    /// Gets the direct (beam) irradiance on the horizontal plane in W/m².
    #[must_use]
    pub const fn direct_horizontal(&self) -> f64 {
        self.direct_horizontal
    }

    /// Gets the diffuse irradiance on the horizontal plane in W/m².
    #[must_use]
    pub const fn diffuse_horizontal(&self) -> f64 {
        self.diffuse_horizontal
    }

    /// Gets the measured sun azimuth in degrees, if present.
    #[must_use]
    pub const fn sun_azimuth(&self) -> Option<f64> {
        self.sun_azimuth
    }

    /// Gets the measured sun zenith in degrees, if present.
    #[must_use]
    pub const fn sun_zenith(&self) -> Option<f64> {
        self.sun_zenith
    }
}

/// Direct and diffuse irradiance on an inclined surface for one hour.
///
/// Computed per observation, consumed by an aggregator or discarded; never
/// mutated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IrradianceResult {
    direct: f64,
    diffuse: f64,
}

impl IrradianceResult {
    /// Creates an irradiance result from direct and diffuse components in
    /// W/m².
    #[must_use]
    pub const fn new(direct: f64, diffuse: f64) -> Self {
        Self { direct, diffuse }
    }

    /// Gets the direct component in W/m² (beam plus circumsolar).
    #[must_use]
    pub const fn direct(&self) -> f64 {
        self.direct
    }

    /// Gets the diffuse component in W/m² (sky, horizon and ground terms).
    #[must_use]
    pub const fn diffuse(&self) -> f64 {
        self.diffuse
    }

    /// Gets the total irradiance on the surface in W/m².
    #[must_use]
    pub fn total(&self) -> f64 {
        self.direct + self.diffuse
    }
}
