//! Solar position: declination, equation of time, hour angle, altitude,
//! azimuth and zenith.
//!
//! Two published formula families are supported and selected through
//! [`SolarModel`]: the ISO/FDIS 52010-1:2015 model used for hourly building
//! energy calculations, and the classical correlations from Duffie & Beckman,
//! *Solar Engineering of Thermal Processes* (Wiley, 2013). The families use
//! different hour-angle and azimuth sign conventions; within one computation
//! a single model must be used throughout.

#![allow(clippy::similar_names)]

use crate::error::{check_latitude, check_solar_hour};
use crate::math::{
    acosd_clamped, asind_clamped, atand, clamp_unit, cosd, normalize_degrees_symmetric, sind, tand,
    TO_DEG,
};
use crate::types::{CalendarDate, SunPosition};
use crate::{Error, Result};

/// Selects the published formula family used for solar position and
/// extraterrestrial irradiance.
///
/// The two families differ in solar constant (1370 vs 1367 W/m²),
/// declination fit, equation of time and hour-angle convention. They are
/// never mixed within one computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SolarModel {
    /// ISO/FDIS 52010-1:2015, eqs. (1)-(16). Azimuths count east positive.
    /// Hour angle is labelled by the
    /// end of the observation hour: ω = (12.5 − t)·15, decreasing with solar
    /// hour.
    #[default]
    Iso52010,
    /// Duffie & Beckman (2013) correlations: Cooper declination, Spencer
    /// equation of time, ω = 15·(t − 12) increasing with solar hour.
    /// Azimuths count east negative, west positive.
    Duffie,
}

impl SolarModel {
    /// Gets the solar constant G_sc for this model in W/m².
    #[must_use]
    pub const fn solar_constant(&self) -> f64 {
        match self {
            Self::Iso52010 => 1370.0,
            Self::Duffie => 1367.0,
        }
    }

    /// Computes the solar declination δ in degrees for a day of year.
    ///
    /// Angular position of the sun at solar noon with respect to the plane
    /// of the equator, north positive, roughly within ±23.45°.
    #[must_use]
    pub fn declination(&self, day_of_year: u32) -> f64 {
        let n = f64::from(day_of_year);
        match self {
            // ISO 52010-1 eqs. (1), (2): polynomial in harmonics of the
            // earth orbit deviation R_dc.
            Self::Iso52010 => {
                let rdc = n * 360.0 / 365.0;
                0.33281 - 22.984 * cosd(rdc) - 0.3499 * cosd(2.0 * rdc) - 0.1398 * cosd(3.0 * rdc)
                    + 3.7872 * sind(rdc)
                    + 0.03205 * sind(2.0 * rdc)
                    + 0.07187 * sind(3.0 * rdc)
            }
            // Cooper (1969), eq. (1.6.1a).
            Self::Duffie => 23.45 * sind((284.0 + n) * 360.0 / 365.0),
        }
    }

    /// Computes the equation of time in minutes for a day of year.
    ///
    /// The ISO variant is the five-piece fit of ISO 52010-1 eqs. (3)-(7);
    /// the bucket boundaries at days 21, 136, 241 and 336 encode the
    /// empirical fit and are exact. The Duffie variant is Spencer (1971),
    /// eq. (1.5.3).
    #[must_use]
    pub fn equation_of_time(&self, day_of_year: u32) -> f64 {
        let n = f64::from(day_of_year);
        match self {
            // The fit's cosine arguments are in radians.
            Self::Iso52010 => {
                if day_of_year < 21 {
                    2.6 + 0.44 * n
                } else if day_of_year < 136 {
                    5.2 + 9.0 * cosd((n - 43.0) * 0.0357 * TO_DEG)
                } else if day_of_year < 241 {
                    1.4 - 5.0 * cosd((n - 135.0) * 0.0449 * TO_DEG)
                } else if day_of_year < 336 {
                    -6.3 - 10.0 * cosd((n - 306.0) * 0.036 * TO_DEG)
                } else {
                    0.45 * (n - 359.0)
                }
            }
            Self::Duffie => {
                let b = (n - 1.0) * 360.0 / 365.0;
                229.2
                    * (0.000075 + 0.001868 * cosd(b) - 0.032077 * sind(b)
                        - 0.014615 * cosd(2.0 * b)
                        - 0.04089 * sind(2.0 * b))
            }
        }
    }

    /// Computes the solar hour angle ω in degrees for a solar hour.
    ///
    /// Conventions differ per family: the ISO variant labels the hour by the
    /// end of the observation interval, ω = (12.5 − t)·15 wrapped into
    /// (−180, 180]; the Duffie variant is ω = 15·(t − 12), zero at solar
    /// noon, morning negative.
    #[must_use]
    pub fn hour_angle(&self, solar_hour: f64) -> f64 {
        match self {
            Self::Iso52010 => normalize_degrees_symmetric((12.5 - solar_hour) * 15.0),
            Self::Duffie => 15.0 * (solar_hour - 12.0),
        }
    }
}

/// Computes the time shift in hours between clock time and longitude-local
/// time, ISO 52010-1 eq. (8).
///
/// `timezone` is the clock offset from UTC in hours; `longitude` is in
/// degrees, east positive.
#[must_use]
pub fn time_shift(timezone: f64, longitude: f64) -> f64 {
    timezone - longitude / 15.0
}

/// Computes the solar time in hours for a clock time, ISO 52010-1 eq. (9).
#[must_use]
pub fn solar_time(
    model: SolarModel,
    clock_hour: f64,
    day_of_year: u32,
    timezone: f64,
    longitude: f64,
) -> f64 {
    clock_hour - model.equation_of_time(day_of_year) / 60.0 - time_shift(timezone, longitude)
}

/// Computes the solar-to-standard time correction in hours, Duffie &
/// Beckman eq. (1.5.2).
///
/// Longitudes follow the textbook's west-positive convention here:
/// `standard_meridian` is the reference meridian of the local time zone and
/// `longitude` the location's longitude, both in degrees west.
#[must_use]
pub fn solar_to_standard_time_correction(
    standard_meridian: f64,
    longitude: f64,
    day_of_year: u32,
) -> f64 {
    (4.0 * (standard_meridian - longitude) + SolarModel::Duffie.equation_of_time(day_of_year))
        / 60.0
}

/// Computes the solar altitude in degrees, ISO 52010-1 eq. (11).
///
/// Angle between the solar beam and the horizontal plane. Results below
/// 0.0001° (including negative ones, sun below the horizon) clamp to exactly
/// 0 so downstream divisions by sin(altitude) can be guarded in one place.
#[must_use]
pub fn solar_altitude(declination: f64, hour_angle: f64, latitude: f64) -> f64 {
    let altitude = asind_clamped(
        sind(declination) * sind(latitude) + cosd(declination) * cosd(latitude) * cosd(hour_angle),
    );
    if altitude < 0.0001 {
        0.0
    } else {
        altitude
    }
}

/// Computes the solar zenith angle in degrees from the altitude, ISO
/// 52010-1 eq. (12).
#[must_use]
pub fn zenith_from_altitude(altitude: f64) -> f64 {
    90.0 - altitude
}

/// Computes the solar altitude in degrees from the zenith angle.
#[must_use]
pub fn altitude_from_zenith(zenith: f64) -> f64 {
    90.0 - zenith
}

/// Computes the solar azimuth in degrees, ISO 52010-1 eqs. (13)-(16).
///
/// Angle from south, east positive, west negative, in [−180, 180]. The
/// result is selected among three branches from the signs of auxiliary sine
/// and cosine products.
///
/// # Errors
/// Returns a `Domain` error when the sun is at the zenith (altitude 90°),
/// where the azimuth is undefined.
pub fn solar_azimuth(
    declination: f64,
    hour_angle: f64,
    altitude: f64,
    latitude: f64,
) -> Result<f64> {
    let cos_altitude = cosd(asind_clamped(sind(altitude)));
    let sin_aux1 = cosd(declination) * sind(180.0 - hour_angle) / cos_altitude;
    let cos_aux1 = (cosd(latitude) * sind(declination)
        + sind(latitude) * cosd(declination) * cosd(180.0 - hour_angle))
        / cos_altitude;
    let azimuth_aux = asind_clamped(cosd(declination) * sind(180.0 - hour_angle)) / cos_altitude;

    let azimuth = if sin_aux1 >= 0.0 && cos_aux1 > 0.0 {
        180.0 - azimuth_aux
    } else if cos_aux1 < 0.0 {
        azimuth_aux
    } else {
        -(180.0 + azimuth_aux)
    };

    if !azimuth.is_finite() {
        return Err(Error::domain(
            "solar azimuth is undefined for the sun at the zenith",
            altitude,
        ));
    }
    Ok(azimuth)
}

/// Computes the solar zenith angle in degrees, Duffie & Beckman eq. (1.6.5).
#[must_use]
pub fn sun_zenith(latitude: f64, declination: f64, hour_angle: f64) -> f64 {
    acosd_clamped(
        cosd(latitude) * cosd(declination) * cosd(hour_angle) + sind(latitude) * sind(declination),
    )
}

/// Computes the solar azimuth in degrees from the zenith angle, Duffie &
/// Beckman eq. (1.6.6).
///
/// Angle from south, east negative, west positive, sign taken from the hour
/// angle.
///
/// # Errors
/// Returns a `Domain` error when the sun is at the zenith, where the
/// azimuth is undefined.
pub fn sun_azimuth_from_zenith(
    latitude: f64,
    declination: f64,
    hour_angle: f64,
    zenith: f64,
) -> Result<f64> {
    let ratio = (cosd(zenith) * sind(latitude) - sind(declination))
        / (sind(zenith) * cosd(latitude));
    if !ratio.is_finite() {
        return Err(Error::domain(
            "solar azimuth is undefined for the sun at the zenith",
            zenith,
        ));
    }
    // acos is non-negative, so the sign of the hour angle carries the
    // east/west information directly.
    let magnitude = acosd_clamped(clamp_unit(ratio));
    Ok(if hour_angle >= 0.0 {
        magnitude
    } else {
        -magnitude
    })
}

/// Computes the sunset hour angle ω_s in degrees, Duffie & Beckman
/// eq. (1.6.10).
///
/// Sunrise is the negative of the sunset hour angle. The arccosine argument
/// is clamped, so a polar night yields 0 and a polar day yields 180.
#[must_use]
pub fn sunset_hour_angle(latitude: f64, declination: f64) -> f64 {
    acosd_clamped(-tand(latitude) * tand(declination))
}

/// Computes the number of daylight hours, Duffie & Beckman eq. (1.6.11).
#[must_use]
pub fn daylight_hours(latitude: f64, declination: f64) -> f64 {
    2.0 * sunset_hour_angle(latitude, declination) / 15.0
}

/// Converts an hour angle in degrees to a solar hour.
///
/// Uses the Duffie convention (zero at noon, 15° per hour); useful to turn
/// sunrise and sunset hour angles into times.
#[must_use]
pub fn hour_angle_to_solar_hour(hour_angle: f64) -> f64 {
    12.0 + hour_angle / 15.0
}

/// Computes the profile angle in degrees for a surface with the given
/// azimuth, Duffie & Beckman eq. (1.6.12).
///
/// The projection of the solar altitude angle on a vertical plane normal to
/// the surface; used when calculating shading by overhangs.
#[must_use]
pub fn profile_angle(sun_altitude: f64, sun_azimuth: f64, surface_azimuth: f64) -> f64 {
    atand(tand(sun_altitude) / cosd(sun_azimuth - surface_azimuth))
}

/// Computes the full sun position for a date, solar hour and latitude.
///
/// Declination, hour angle and azimuth follow the selected model's formulas
/// and sign conventions. Under [`SolarModel::Iso52010`] the altitude clamps
/// at 0 when the sun is below the horizon; under [`SolarModel::Duffie`] it
/// goes negative.
///
/// # Errors
/// Returns `InvalidLatitude` or `InvalidSolarHour` for out-of-range inputs,
/// or a `Domain` error when the azimuth is undefined (sun at the zenith).
pub fn sun_position(
    model: SolarModel,
    date: CalendarDate,
    solar_hour: f64,
    latitude: f64,
) -> Result<SunPosition> {
    check_latitude(latitude)?;
    check_solar_hour(solar_hour)?;

    let day_of_year = date.day_of_year();
    let declination = model.declination(day_of_year);
    let hour_angle = model.hour_angle(solar_hour);

    match model {
        SolarModel::Iso52010 => {
            let altitude = solar_altitude(declination, hour_angle, latitude);
            let azimuth = solar_azimuth(declination, hour_angle, altitude, latitude)?;
            Ok(SunPosition::new(declination, hour_angle, altitude, azimuth))
        }
        SolarModel::Duffie => {
            let zenith = sun_zenith(latitude, declination, hour_angle);
            let azimuth = sun_azimuth_from_zenith(latitude, declination, hour_angle, zenith)?;
            Ok(SunPosition::new(
                declination,
                hour_angle,
                altitude_from_zenith(zenith),
                azimuth,
            ))
        }
    }
}
