//! Irradiance decomposition on tilted surfaces per ISO/FDIS 52010-1:2015.
//!
//! Splits measured horizontal-plane irradiance into direct, circumsolar,
//! isotropic-diffuse, horizon-brightening and ground-reflected components on
//! an arbitrarily oriented surface, using the Perez anisotropic sky model
//! with the standard brightness-coefficient table (ISO 52010-1 table 9).
//!
//! The aggregation follows eqs. (37)-(39): the circumsolar share of the sky
//! diffuse moves into the direct total, and ground reflection adds to the
//! diffuse total.

use crate::math::{cosd, powi, sind, TO_RAD};
use crate::position::{solar_altitude, SolarModel};
use crate::surface::{air_mass, incidence_angle};
use crate::types::{HourlyObservation, IrradianceResult, Location, Surface};

/// Clearness parameter value meaning "no diffuse, sky fully clear".
///
/// Returned by [`clearness`] when the diffuse irradiance is below
/// 0.01 W/m², instead of dividing by a near-zero measurement.
pub const CLEARNESS_CLEAR_SKY: f64 = 999.0;

/// Diffuse irradiance below this many W/m² counts as "no diffuse".
const DIFFUSE_THRESHOLD: f64 = 0.01;

/// Constant κ of the clearness parameter, rad⁻³ (ISO 52010-1 eq. (30)).
const CLEARNESS_KAPPA: f64 = 1.014;

/// Substitute solar altitude in degrees used when converting horizontal beam
/// irradiance with the sun at the horizon (zenith 89.95°).
const HORIZON_MIN_ALTITUDE: f64 = 0.05;

/// Computes the extraterrestrial normal irradiance in W/m² for a day of
/// year, ISO 52010-1 eq. (27) / Duffie & Beckman eq. (1.4.1a).
///
/// The solar constant comes from the selected model (1370 W/m² for ISO,
/// 1367 W/m² for Duffie).
#[must_use]
pub fn extraterrestrial_normal(model: SolarModel, day_of_year: u32) -> f64 {
    model.solar_constant() * (1.0 + 0.033 * cosd(360.0 * f64::from(day_of_year) / 365.0))
}

/// Converts direct irradiance on the horizontal plane to beam (normal)
/// irradiance in W/m².
///
/// G_b = G_hor / sin(altitude). Altitudes below 0.05° (zenith beyond
/// 89.95°) substitute 0.05° so the division stays finite at the horizon.
#[must_use]
pub fn beam_normal_from_horizontal(direct_horizontal: f64, solar_altitude: f64) -> f64 {
    direct_horizontal / sind(solar_altitude.max(HORIZON_MIN_ALTITUDE))
}

/// Computes the direct irradiance on an inclined surface in W/m²,
/// ISO 52010-1 eq. (26).
///
/// Clipped at zero when the beam strikes the surface from behind.
#[must_use]
pub fn direct_on_surface(beam_normal: f64, incidence_angle: f64) -> f64 {
    (beam_normal * cosd(incidence_angle)).max(0.0)
}

/// Computes the dimensionless clearness parameter ε, ISO 52010-1 eq. (30).
///
/// Returns [`CLEARNESS_CLEAR_SKY`] when the diffuse irradiance is below
/// 0.01 W/m².
#[must_use]
pub fn clearness(beam_normal: f64, diffuse_horizontal: f64, solar_altitude: f64) -> f64 {
    if diffuse_horizontal < DIFFUSE_THRESHOLD {
        return CLEARNESS_CLEAR_SKY;
    }
    let kappa_term = CLEARNESS_KAPPA * powi(TO_RAD * solar_altitude, 3);
    ((diffuse_horizontal + beam_normal) / diffuse_horizontal + kappa_term) / (1.0 + kappa_term)
}

/// Perez brightness coefficients for one clearness bin
/// (ISO 52010-1 table 9).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BrightnessCoefficients {
    /// Circumsolar brightness coefficient f₁₁.
    pub f11: f64,
    /// Circumsolar brightness coefficient f₁₂.
    pub f12: f64,
    /// Circumsolar brightness coefficient f₁₃.
    pub f13: f64,
    /// Horizon brightness coefficient f₂₁.
    pub f21: f64,
    /// Horizon brightness coefficient f₂₂.
    pub f22: f64,
    /// Horizon brightness coefficient f₂₃.
    pub f23: f64,
}

/// Upper clearness bounds of the eight brightness bins.
const CLEARNESS_BINS: [f64; 7] = [1.065, 1.230, 1.500, 1.950, 2.280, 4.500, 6.200];

/// Coefficient rows of ISO 52010-1 table 9, one per clearness bin.
const BRIGHTNESS_TABLE: [BrightnessCoefficients; 8] = [
    BrightnessCoefficients { f11: -0.008, f12: 0.588, f13: -0.062, f21: -0.060, f22: 0.072, f23: -0.022 },
    BrightnessCoefficients { f11: 0.130, f12: 0.683, f13: -0.151, f21: -0.019, f22: 0.066, f23: -0.029 },
    BrightnessCoefficients { f11: 0.330, f12: 0.487, f13: -0.221, f21: 0.055, f22: -0.064, f23: -0.026 },
    BrightnessCoefficients { f11: 0.568, f12: 0.187, f13: -0.295, f21: 0.109, f22: -0.152, f23: -0.014 },
    BrightnessCoefficients { f11: 0.873, f12: -0.392, f13: -0.362, f21: 0.226, f22: -0.462, f23: 0.001 },
    BrightnessCoefficients { f11: 1.132, f12: -1.237, f13: -0.412, f21: 0.288, f22: -0.823, f23: 0.056 },
    BrightnessCoefficients { f11: 1.060, f12: -1.600, f13: -0.359, f21: 0.264, f22: -1.127, f23: 0.131 },
    BrightnessCoefficients { f11: 0.678, f12: -0.327, f13: -0.250, f21: 0.156, f22: -1.377, f23: 0.251 },
];

/// Looks up the brightness coefficients for a clearness parameter value
/// (ISO 52010-1 table 9).
///
/// A pure step function over the eight clearness bins; the coefficients
/// switch exactly at the documented thresholds.
#[must_use]
pub fn brightness_coefficients(clearness: f64) -> BrightnessCoefficients {
    for (bound, row) in CLEARNESS_BINS.iter().zip(BRIGHTNESS_TABLE.iter()) {
        if clearness < *bound {
            return *row;
        }
    }
    BRIGHTNESS_TABLE[7]
}

/// Computes the dimensionless sky brightness parameter Δ,
/// ISO 52010-1 eq. (32).
#[must_use]
pub fn sky_brightness(
    model: SolarModel,
    day_of_year: u32,
    diffuse_horizontal: f64,
    solar_altitude: f64,
) -> f64 {
    air_mass(solar_altitude) * diffuse_horizontal / extraterrestrial_normal(model, day_of_year)
}

/// Anisotropy terms shared by the sky-diffuse and circumsolar components.
struct SkyAnisotropy {
    f1: f64,
    f2: f64,
    /// Clipped cosine of the surface incidence angle.
    a: f64,
    /// Cosine of the zenith, kept away from the horizon singularity.
    b: f64,
}

fn sky_anisotropy(
    model: SolarModel,
    day_of_year: u32,
    beam_normal: f64,
    diffuse_horizontal: f64,
    solar_altitude: f64,
    incidence_angle: f64,
) -> SkyAnisotropy {
    let zenith = 90.0 - solar_altitude;
    let a = cosd(incidence_angle).max(0.0);
    // b is floored at cos 85° so the circumsolar ratio a/b stays bounded
    // near the horizon (ISO 52010-1 eq. (34)).
    let b = cosd(85.0).max(cosd(zenith));
    let coefficients =
        brightness_coefficients(clearness(beam_normal, diffuse_horizontal, solar_altitude));
    let delta = sky_brightness(model, day_of_year, diffuse_horizontal, solar_altitude);
    let f1 = (coefficients.f11 + coefficients.f12 * delta + coefficients.f13 * TO_RAD * zenith)
        .max(0.0);
    let f2 = coefficients.f21 + coefficients.f22 * delta + coefficients.f23 * TO_RAD * zenith;
    SkyAnisotropy { f1, f2, a, b }
}

/// Computes the sky diffuse irradiance on an inclined surface in W/m²
/// (without ground reflection), ISO 52010-1 eqs. (28)-(34).
///
/// Sum of the isotropic term (1−F₁)(1+cos β)/2, the circumsolar term
/// F₁·a/b and the horizon-brightening term F₂·sin β, scaled by the diffuse
/// horizontal irradiance. The circumsolar share is still included here; the
/// aggregation in [`total_diffuse_irradiance`] moves it to the direct total.
#[must_use]
pub fn diffuse_on_surface(
    model: SolarModel,
    day_of_year: u32,
    beam_normal: f64,
    diffuse_horizontal: f64,
    solar_altitude: f64,
    incidence_angle: f64,
    tilt: f64,
) -> f64 {
    let sky = sky_anisotropy(
        model,
        day_of_year,
        beam_normal,
        diffuse_horizontal,
        solar_altitude,
        incidence_angle,
    );
    diffuse_horizontal
        * ((1.0 - sky.f1) * (1.0 + cosd(tilt)) / 2.0
            + sky.f1 * sky.a / sky.b
            + sky.f2 * sind(tilt))
}

/// Computes the circumsolar irradiance on an inclined surface in W/m²,
/// ISO 52010-1 eq. (36).
#[must_use]
pub fn circumsolar(
    model: SolarModel,
    day_of_year: u32,
    beam_normal: f64,
    diffuse_horizontal: f64,
    solar_altitude: f64,
    incidence_angle: f64,
) -> f64 {
    let sky = sky_anisotropy(
        model,
        day_of_year,
        beam_normal,
        diffuse_horizontal,
        solar_altitude,
        incidence_angle,
    );
    diffuse_horizontal * sky.f1 * sky.a / sky.b
}

/// Computes the irradiance on an inclined surface due to ground reflection
/// in W/m², ISO 52010-1 eq. (35).
#[must_use]
pub fn ground_reflected(
    beam_normal: f64,
    diffuse_horizontal: f64,
    solar_altitude: f64,
    tilt: f64,
    albedo: f64,
) -> f64 {
    (diffuse_horizontal + beam_normal * sind(solar_altitude)) * albedo * (1.0 - cosd(tilt)) / 2.0
}

/// Per-hour inputs resolved from an observation, shared by the aggregators.
struct HourGeometry {
    day_of_year: u32,
    altitude: f64,
    beam_normal: f64,
    incidence: f64,
}

fn resolve_hour(
    model: SolarModel,
    observation: &HourlyObservation,
    location: &Location,
    surface: &Surface,
) -> HourGeometry {
    let day_of_year = observation.date().day_of_year();
    let declination = model.declination(day_of_year);
    let hour_angle = model.hour_angle(observation.hour());
    // Prefer the weather file's measured sun position; fall back to the
    // model's own geometry.
    let altitude = observation.sun_zenith().map_or_else(
        || solar_altitude(declination, hour_angle, location.latitude()),
        |zenith| (90.0 - zenith).max(0.0),
    );
    let beam_normal = beam_normal_from_horizontal(observation.direct_horizontal(), altitude);
    let incidence = incidence_angle(declination, hour_angle, location.latitude(), surface);
    HourGeometry {
        day_of_year,
        altitude,
        beam_normal,
        incidence,
    }
}

/// Computes the total direct irradiance on an inclined surface for one
/// hourly observation in W/m², ISO 52010-1 eq. (37).
///
/// Direct beam contribution plus the circumsolar share of the sky diffuse.
#[must_use]
pub fn total_direct_irradiance(
    model: SolarModel,
    observation: &HourlyObservation,
    location: &Location,
    surface: &Surface,
) -> f64 {
    let hour = resolve_hour(model, observation, location, surface);
    direct_on_surface(hour.beam_normal, hour.incidence)
        + circumsolar(
            model,
            hour.day_of_year,
            hour.beam_normal,
            observation.diffuse_horizontal(),
            hour.altitude,
            hour.incidence,
        )
}

/// Computes the total diffuse irradiance on an inclined surface for one
/// hourly observation in W/m², ISO 52010-1 eq. (38).
///
/// Sky diffuse minus the circumsolar share (which eq. (37) counts as
/// direct) plus the ground-reflected contribution.
#[must_use]
pub fn total_diffuse_irradiance(
    model: SolarModel,
    observation: &HourlyObservation,
    location: &Location,
    surface: &Surface,
) -> f64 {
    let hour = resolve_hour(model, observation, location, surface);
    let diffuse = diffuse_on_surface(
        model,
        hour.day_of_year,
        hour.beam_normal,
        observation.diffuse_horizontal(),
        hour.altitude,
        hour.incidence,
        surface.tilt(),
    );
    let circumsolar = circumsolar(
        model,
        hour.day_of_year,
        hour.beam_normal,
        observation.diffuse_horizontal(),
        hour.altitude,
        hour.incidence,
    );
    let ground = ground_reflected(
        hour.beam_normal,
        observation.diffuse_horizontal(),
        hour.altitude,
        surface.tilt(),
        surface.albedo(),
    );
    diffuse - circumsolar + ground
}

/// Computes both irradiance components on an inclined surface for one
/// hourly observation, ISO 52010-1 eq. (39).
///
/// `result.total()` is the total irradiance on the surface.
#[must_use]
pub fn hourly_irradiance(
    model: SolarModel,
    observation: &HourlyObservation,
    location: &Location,
    surface: &Surface,
) -> IrradianceResult {
    IrradianceResult::new(
        total_direct_irradiance(model, observation, location, surface),
        total_diffuse_irradiance(model, observation, location, surface),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::CalendarDate;

    const MODEL: SolarModel = SolarModel::Iso52010;

    #[test]
    fn test_extraterrestrial_normal() {
        // Perihelion side: above the solar constant
        assert!(extraterrestrial_normal(MODEL, 1) > 1370.0);
        // Aphelion side: below
        assert!(extraterrestrial_normal(MODEL, 182) < 1370.0);
        // Duffie variant, August 22 (example 2.8.1)
        let g_on = extraterrestrial_normal(SolarModel::Duffie, 234);
        assert!((g_on - 1338.49).abs() < 0.5, "got {g_on}");
    }

    #[test]
    fn test_beam_normal_horizon_substitution() {
        // Ordinary altitude: plain division
        let beam = beam_normal_from_horizontal(100.0, 30.0);
        assert!((beam - 200.0).abs() < 1e-9);
        // At the horizon the substitute altitude keeps the value finite
        let at_horizon = beam_normal_from_horizontal(1.0, 0.0);
        assert!(at_horizon.is_finite());
        assert_eq!(at_horizon, beam_normal_from_horizontal(1.0, 0.05));
    }

    #[test]
    fn test_direct_on_surface_clips_at_zero() {
        assert_eq!(direct_on_surface(500.0, 120.0), 0.0);
        let grazing = direct_on_surface(500.0, 60.0);
        assert!((grazing - 250.0).abs() < 1e-9);
    }

    #[test]
    fn test_clearness_sentinel() {
        assert_eq!(clearness(300.0, 0.0, 40.0), CLEARNESS_CLEAR_SKY);
        assert_eq!(clearness(300.0, 0.009, 40.0), CLEARNESS_CLEAR_SKY);
        let value = clearness(300.0, 100.0, 40.0);
        assert!(value.is_finite());
        assert!(value > 1.0);
    }

    #[test]
    fn test_brightness_coefficients_bucket_boundaries() {
        // Switch exactly at the documented thresholds
        let below = brightness_coefficients(1.0649);
        let above = brightness_coefficients(1.0651);
        assert_eq!(below.f11, -0.008);
        assert_eq!(above.f11, 0.130);
        assert_eq!(brightness_coefficients(1.065).f11, 0.130);

        assert_eq!(brightness_coefficients(1.4999).f11, 0.330);
        assert_eq!(brightness_coefficients(1.95).f11, 0.873);
        assert_eq!(brightness_coefficients(4.5).f11, 1.060);
        assert_eq!(brightness_coefficients(6.2).f11, 0.678);
        // The clear-sky sentinel lands in the last bucket
        assert_eq!(brightness_coefficients(CLEARNESS_CLEAR_SKY).f22, -1.377);
    }

    #[test]
    fn test_brightness_table_values() {
        let overcast = brightness_coefficients(1.0);
        assert_eq!(
            (overcast.f12, overcast.f13, overcast.f21, overcast.f22, overcast.f23),
            (0.588, -0.062, -0.060, 0.072, -0.022)
        );
        let intermediate = brightness_coefficients(2.0);
        assert_eq!(
            (intermediate.f11, intermediate.f12, intermediate.f13),
            (0.873, -0.392, -0.362)
        );
    }

    #[test]
    fn test_horizontal_surface_recovers_measured_irradiance() {
        // For tilt 0 the incidence angle equals the zenith, so the beam
        // conversion cancels and a/b is exactly 1: the total on the surface
        // must reproduce the measured horizontal direct plus diffuse.
        let location = Location::new(40.7, -3.7).unwrap();
        let surface = Surface::new(0.0, 0.0, 0.2).unwrap();
        let observation = HourlyObservation::new(7, 6, 11.0, 450.0, 120.0).unwrap();

        let result = hourly_irradiance(MODEL, &observation, &location, &surface);
        assert!((result.total() - 570.0).abs() < 1e-6, "got {}", result.total());
    }

    #[test]
    fn test_ground_reflected() {
        // Horizontal surface sees no ground reflection
        assert_eq!(ground_reflected(400.0, 150.0, 35.0, 0.0, 0.2), 0.0);
        // Vertical surface sees half the reflected global irradiance
        let vertical = ground_reflected(400.0, 150.0, 35.0, 90.0, 0.2);
        let global = 150.0 + 400.0 * sind(35.0);
        assert!((vertical - global * 0.2 * 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_total_decomposition_consistency() {
        // Direct + diffuse totals must equal the sum of the raw components
        // with the circumsolar counted exactly once.
        let location = Location::new(40.7, -3.7).unwrap();
        let surface = Surface::new(45.0, 15.0, 0.2).unwrap();
        let observation = HourlyObservation::new(7, 6, 11.0, 450.0, 120.0).unwrap();

        let day_of_year = CalendarDate::new(7, 6).unwrap().day_of_year();
        let declination = MODEL.declination(day_of_year);
        let hour_angle = MODEL.hour_angle(11.0);
        let altitude = solar_altitude(declination, hour_angle, location.latitude());
        let beam_normal = beam_normal_from_horizontal(450.0, altitude);
        let incidence = incidence_angle(declination, hour_angle, location.latitude(), &surface);

        let direct = direct_on_surface(beam_normal, incidence);
        let sky = diffuse_on_surface(MODEL, day_of_year, beam_normal, 120.0, altitude, incidence, 45.0);
        let ground = ground_reflected(beam_normal, 120.0, altitude, 45.0, 0.2);

        let result = hourly_irradiance(MODEL, &observation, &location, &surface);
        assert!((result.total() - (direct + sky + ground)).abs() < 1e-9);
        assert!(result.direct() > 0.0);
        assert!(result.diffuse() > 0.0);
    }

    #[test]
    fn test_measured_sun_position_is_preferred() {
        let location = Location::new(40.7, -3.7).unwrap();
        let surface = Surface::new(90.0, 0.0, 0.2).unwrap();
        let computed = HourlyObservation::new(7, 6, 11.0, 450.0, 120.0).unwrap();
        let measured = computed.with_sun_position(-20.0, 40.0);

        let from_computed = hourly_irradiance(MODEL, &computed, &location, &surface);
        let from_measured = hourly_irradiance(MODEL, &measured, &location, &surface);
        // A different measured zenith changes the beam normal conversion
        assert!(from_computed != from_measured);
    }
}
