//! Surface geometry: angle of incidence of the solar beam on tilted
//! surfaces, sun-surface angle transforms and air mass.

#![allow(clippy::similar_names)]

use crate::math::{acosd_clamped, cosd, normalize_degrees_symmetric, powf, sind};
use crate::types::Surface;

/// Computes the angle of incidence of the beam on a tilted surface in
/// degrees, ISO 52010-1 eq. (17) / Duffie & Beckman eq. (1.6.2).
///
/// The closed-form five-term cosine sum, valid for any tilt 0-180° and
/// surface azimuth. For a horizontal surface this equals the solar zenith
/// angle regardless of the surface azimuth.
#[must_use]
pub fn incidence_angle(
    declination: f64,
    hour_angle: f64,
    latitude: f64,
    surface: &Surface,
) -> f64 {
    let sd = sind(declination);
    let cd = cosd(declination);
    let sh = sind(hour_angle);
    let ch = cosd(hour_angle);
    let sl = sind(latitude);
    let cl = cosd(latitude);
    let sb = sind(surface.tilt());
    let cb = cosd(surface.tilt());
    let sg = sind(surface.azimuth());
    let cg = cosd(surface.azimuth());

    acosd_clamped(
        sd * sl * cb - sd * cl * sb * cg
            + cd * cl * cb * ch
            + cd * sl * sb * cg * ch
            + cd * sb * sg * sh,
    )
}

/// Computes the angle of incidence from an already known sun position,
/// Duffie & Beckman eq. (1.6.3).
///
/// Equivalent to [`incidence_angle`]; useful when the zenith and azimuth
/// come from a weather file rather than from the declination and hour
/// angle.
#[must_use]
pub fn incidence_angle_from_sun(sun_zenith: f64, sun_azimuth: f64, surface: &Surface) -> f64 {
    acosd_clamped(
        cosd(sun_zenith) * cosd(surface.tilt())
            + sind(sun_zenith) * sind(surface.tilt()) * cosd(sun_azimuth - surface.azimuth()),
    )
}

/// Computes the angle of incidence on a vertical surface in degrees,
/// Duffie & Beckman eq. (1.6.4).
///
/// Specialisation of the five-term formula for tilt β = 90°.
#[must_use]
pub fn incidence_angle_vertical(
    declination: f64,
    hour_angle: f64,
    latitude: f64,
    surface_azimuth: f64,
) -> f64 {
    acosd_clamped(
        -sind(declination) * cosd(latitude) * cosd(surface_azimuth)
            + cosd(declination) * sind(latitude) * cosd(surface_azimuth) * cosd(hour_angle)
            + cosd(declination) * sind(surface_azimuth) * sind(hour_angle),
    )
}

/// Computes the azimuth between the sun and an inclined surface in degrees,
/// ISO 52010-1 eq. (18), wrapped into (-180, 180].
#[must_use]
pub fn relative_azimuth(hour_angle: f64, surface_azimuth: f64) -> f64 {
    normalize_degrees_symmetric(hour_angle - surface_azimuth)
}

/// Computes the tilt angle between the sun and an inclined surface in
/// degrees, ISO 52010-1 eq. (19), wrapped into (-180, 180].
#[must_use]
pub fn relative_tilt(sun_zenith: f64, tilt: f64) -> f64 {
    normalize_degrees_symmetric(tilt - sun_zenith)
}

/// Computes the dimensionless air mass, ISO 52010-1 eqs. (20), (21).
///
/// 1/sin(altitude) for solar altitudes of 10° and above; below that a
/// Kasten-Young style correction keeps the value finite as the altitude
/// approaches zero.
#[must_use]
pub fn air_mass(solar_altitude: f64) -> f64 {
    let sin_altitude = sind(solar_altitude);
    if solar_altitude >= 10.0 {
        1.0 / sin_altitude
    } else {
        1.0 / (sin_altitude + 0.15 * powf(solar_altitude + 3.885, -1.253))
    }
}

/// Computes the ratio of beam irradiance on a tilted surface to that on the
/// horizontal plane, Duffie & Beckman eq. (1.8.1).
///
/// R_b = cos θ / cos θ_z for the given sun position and surface.
#[must_use]
pub fn beam_ratio(sun_zenith: f64, sun_azimuth: f64, surface: &Surface) -> f64 {
    cosd(incidence_angle_from_sun(sun_zenith, sun_azimuth, surface)) / cosd(sun_zenith)
}
