//! Clear-sky irradiance estimation and diffuse-fraction correlations from
//! Duffie & Beckman, *Solar Engineering of Thermal Processes* (2013).
//!
//! Beam transmittance of the standard clear atmosphere after Hottel (1976),
//! diffuse transmittance after Liu & Jordan, daily and hourly
//! extraterrestrial radiation on the horizontal plane, and the Erbs
//! correlations splitting daily and monthly-average radiation into their
//! diffuse fraction.

use crate::math::{cosd, exp, polynomial, powi, sind};
use crate::position::SolarModel;
use crate::{Error, Result};

use core::f64::consts::PI;

/// Climate types of the Hottel standard clear atmosphere, selecting the
/// correction factors applied to the 23 km-visibility coefficients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClimateType {
    /// Tropical climate.
    Tropical,
    /// Midlatitude in summer.
    MidlatitudeSummer,
    /// Subarctic in summer.
    SubarcticSummer,
    /// Midlatitude in winter.
    MidlatitudeWinter,
}

impl ClimateType {
    /// Gets the Hottel correction factors (r₀, r₁, r_k) for this climate.
    #[must_use]
    pub const fn correction_factors(&self) -> (f64, f64, f64) {
        match self {
            Self::Tropical => (0.95, 0.98, 1.02),
            Self::MidlatitudeSummer => (0.97, 0.99, 1.02),
            Self::SubarcticSummer => (0.99, 0.99, 1.01),
            Self::MidlatitudeWinter => (1.03, 1.01, 1.00),
        }
    }
}

/// Computes the beam transmittance τ_b of the standard clear atmosphere,
/// Hottel (1976) / Duffie & Beckman eq. (2.8.1).
///
/// `altitude_km` is the site altitude in kilometres; the correlation is
/// valid up to 2.5 km.
///
/// # Errors
/// Returns a `Domain` error for altitudes outside 0-2.5 km or when the sun
/// is at or below the horizon (zenith ≥ 90°).
pub fn tau_beam(sun_zenith: f64, altitude_km: f64, climate: ClimateType) -> Result<f64> {
    if !(0.0..=2.5).contains(&altitude_km) {
        return Err(Error::domain(
            "Hottel correlation is only valid for altitudes between 0 and 2.5 km",
            altitude_km,
        ));
    }
    if !(0.0..90.0).contains(&sun_zenith) {
        return Err(Error::domain(
            "beam transmittance requires the sun above the horizon",
            sun_zenith,
        ));
    }
    let (r0, r1, rk) = climate.correction_factors();
    let a0 = r0 * (0.4237 - 0.00821 * powi(6.0 - altitude_km, 2));
    let a1 = r1 * (0.5055 + 0.00595 * powi(6.5 - altitude_km, 2));
    let k = rk * (0.2711 + 0.01858 * powi(2.5 - altitude_km, 2));
    Ok(a0 + a1 * exp(-k / cosd(sun_zenith)))
}

/// Computes the diffuse transmittance τ_d of the standard clear atmosphere
/// from the beam transmittance, Liu & Jordan / Duffie & Beckman
/// eq. (2.8.5).
#[must_use]
pub fn tau_diffuse(tau_beam: f64) -> f64 {
    0.271 - 0.294 * tau_beam
}

/// Computes the clear-sky beam irradiance normal to the radiation in W/m²,
/// G_cnb = τ_b · G_on (Duffie & Beckman eq. (2.8.2)).
#[must_use]
pub fn clear_sky_normal(tau_beam: f64, extraterrestrial_normal: f64) -> f64 {
    tau_beam * extraterrestrial_normal
}

/// Computes the clear-sky beam irradiance on the horizontal plane in W/m²,
/// G_cb = τ_b · G_on · cos θ_z (Duffie & Beckman eq. (2.8.3)).
#[must_use]
pub fn clear_sky_horizontal(tau_beam: f64, extraterrestrial_normal: f64, sun_zenith: f64) -> f64 {
    tau_beam * extraterrestrial_normal * cosd(sun_zenith)
}

/// Computes the extraterrestrial irradiance on the horizontal plane in
/// W/m², G_o = G_on · cos θ_z (Duffie & Beckman eq. (1.10.1)).
#[must_use]
pub fn extraterrestrial_horizontal(extraterrestrial_normal: f64, sun_zenith: f64) -> f64 {
    extraterrestrial_normal * cosd(sun_zenith)
}

/// Computes the daily extraterrestrial radiation on the horizontal plane
/// H_o in J/m², Duffie & Beckman eq. (1.10.3).
#[must_use]
pub fn daily_extraterrestrial(latitude: f64, day_of_year: u32) -> f64 {
    let declination = SolarModel::Duffie.declination(day_of_year);
    let sunset = crate::position::sunset_hour_angle(latitude, declination);
    let orbit = 1.0 + 0.033 * cosd(360.0 * f64::from(day_of_year) / 365.0);
    24.0 * 3600.0 * SolarModel::Duffie.solar_constant() / PI
        * orbit
        * (cosd(latitude) * cosd(declination) * sind(sunset)
            + PI * sunset / 180.0 * sind(latitude) * sind(declination))
}

/// Computes the extraterrestrial radiation on the horizontal plane I_o in
/// J/m² for an hour interval, Duffie & Beckman eq. (1.10.4).
///
/// `hour_start` and `hour_end` are solar hours; the hour angles are the
/// Duffie convention (ω = 15·(t − 12)).
#[must_use]
pub fn hourly_extraterrestrial(
    latitude: f64,
    day_of_year: u32,
    hour_start: f64,
    hour_end: f64,
) -> f64 {
    let declination = SolarModel::Duffie.declination(day_of_year);
    let omega1 = SolarModel::Duffie.hour_angle(hour_start);
    let omega2 = SolarModel::Duffie.hour_angle(hour_end);
    let orbit = 1.0 + 0.033 * cosd(360.0 * f64::from(day_of_year) / 365.0);
    12.0 * 3600.0 * SolarModel::Duffie.solar_constant() / PI
        * orbit
        * (cosd(latitude) * cosd(declination) * (sind(omega2) - sind(omega1))
            + PI * (omega2 - omega1) / 180.0 * sind(latitude) * sind(declination))
}

/// Computes the daily diffuse fraction H_d/H from the daily clearness
/// index, Erbs et al. / Duffie & Beckman eq. (2.11.1).
///
/// The correlation branches on the sunset hour angle at 81.4° and saturates
/// for very clear days.
#[must_use]
pub fn daily_diffuse_fraction(clearness_index: f64, sunset_hour_angle: f64) -> f64 {
    if sunset_hour_angle <= 81.4 {
        if clearness_index < 0.715 {
            polynomial(&[1.0, -0.2727, 2.4495, -11.9514, 9.3879], clearness_index)
        } else {
            0.143
        }
    } else if clearness_index < 0.722 {
        polynomial(&[1.0, 0.2832, -2.5557, 0.8448], clearness_index)
    } else {
        0.175
    }
}

/// Computes the monthly-average daily diffuse fraction H̄_d/H̄ from the
/// monthly-average clearness index, Erbs et al. / Duffie & Beckman
/// eq. (2.12.1).
///
/// Valid for mean clearness indices between 0.3 and 0.8.
#[must_use]
pub fn monthly_diffuse_fraction(mean_clearness_index: f64, sunset_hour_angle: f64) -> f64 {
    if sunset_hour_angle <= 81.4 {
        polynomial(&[1.391, -3.560, 4.189, -2.137], mean_clearness_index)
    } else {
        polynomial(&[1.311, -3.022, 3.427, -1.821], mean_clearness_index)
    }
}

/// Converts the clearness parameter of an hour to a sky-clearness flag used
/// by reporting tools: the dimensionless clearness index K_T = H/H_o.
///
/// Plain ratio helper; H and H_o must share units.
#[must_use]
pub fn clearness_index(radiation: f64, extraterrestrial: f64) -> f64 {
    radiation / extraterrestrial
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::irradiance::extraterrestrial_normal;
    use crate::position::{sun_zenith, sunset_hour_angle, SolarModel};

    #[test]
    fn test_tau_beam_example_281() {
        // Duffie & Beckman example 2.8.1: Madison, altitude 0.27 km,
        // latitude 43°, August 22, 11:30 solar
        let declination = SolarModel::Duffie.declination(234);
        let zenith = sun_zenith(43.0, declination, SolarModel::Duffie.hour_angle(11.5));
        let tau = tau_beam(zenith, 0.27, ClimateType::MidlatitudeSummer).unwrap();
        assert!((tau - 0.62).abs() < 0.005, "got {tau}");

        let g_on = extraterrestrial_normal(SolarModel::Duffie, 234);
        let g_cnb = clear_sky_normal(tau, g_on);
        assert!((g_cnb - 829.58).abs() < 0.5, "got {g_cnb}");
        let g_cb = clear_sky_horizontal(tau, g_on, zenith);
        assert!((g_cb - 701.51).abs() < 0.5, "got {g_cb}");
    }

    #[test]
    fn test_tau_diffuse_example_282() {
        // Continuation: diffuse transmittance and clear-sky diffuse
        let declination = SolarModel::Duffie.declination(234);
        let zenith = sun_zenith(43.0, declination, SolarModel::Duffie.hour_angle(11.5));
        let tau_b = tau_beam(zenith, 0.27, ClimateType::MidlatitudeSummer).unwrap();
        let tau_d = tau_diffuse(tau_b);
        assert!((tau_d - 0.089).abs() < 0.001, "got {tau_d}");

        let g_on = extraterrestrial_normal(SolarModel::Duffie, 234);
        let g_o = extraterrestrial_horizontal(g_on, zenith);
        assert!((g_o - 1131.85).abs() < 0.5, "got {g_o}");
        let g_cd = g_o * tau_d;
        assert!((g_cd - 100.49).abs() < 0.5, "got {g_cd}");
    }

    #[test]
    fn test_tau_beam_domain_checks() {
        assert!(tau_beam(30.0, 3.0, ClimateType::Tropical).is_err());
        assert!(tau_beam(30.0, -0.1, ClimateType::Tropical).is_err());
        assert!(tau_beam(90.0, 0.27, ClimateType::Tropical).is_err());
        assert!(tau_beam(95.0, 0.27, ClimateType::Tropical).is_err());
        assert!(tau_beam(30.0, 0.27, ClimateType::Tropical).is_ok());
    }

    #[test]
    fn test_daily_extraterrestrial_example_1101() {
        // Duffie & Beckman example 1.10.1: latitude 43°, April 15 (day 105),
        // published answer 33.8 MJ/m²
        let h_o = daily_extraterrestrial(43.0, 105);
        assert!((h_o / 1e6 - 33.8).abs() < 0.05, "got {}", h_o / 1e6);
    }

    #[test]
    fn test_hourly_extraterrestrial_example_1102() {
        // Duffie & Beckman example 1.10.2: latitude 43°, April 15, 10-11h,
        // published answer 3.79 MJ/m²
        let i_o = hourly_extraterrestrial(43.0, 105, 10.0, 11.0);
        assert!((i_o / 1e6 - 3.79).abs() < 0.01, "got {}", i_o / 1e6);
    }

    #[test]
    fn test_daily_diffuse_fraction_example_2111() {
        // Duffie & Beckman example 2.11.1: St. Louis, latitude 38.6°,
        // September 3 (day 246), H = 23.0 MJ
        let declination = SolarModel::Duffie.declination(246);
        let sunset = sunset_hour_angle(38.6, declination);
        assert!((sunset - 95.6).abs() < 0.05, "got {sunset}");
        let h_o = daily_extraterrestrial(38.6, 246);
        assert!((h_o / 1e6 - 33.25).abs() < 0.05);
        let k_t = clearness_index(23.0e6, h_o);
        assert!((k_t - 0.69).abs() < 0.005, "got {k_t}");
        // The book rounds the day's diffuse share to about a quarter
        let fraction = daily_diffuse_fraction(k_t, sunset);
        assert!((fraction - 0.253).abs() < 0.005, "got {fraction}");
        assert!((fraction * 23.0 - 5.8).abs() < 0.05);
    }

    #[test]
    fn test_monthly_diffuse_fraction_example_2121() {
        // Duffie & Beckman example 2.12.1: Madison, latitude 43°, June
        // (mean day June 11), H̄ = 23 MJ/m²
        let declination = SolarModel::Duffie.declination(162);
        let sunset = sunset_hour_angle(43.0, declination);
        assert!((sunset - 113.4).abs() < 0.05, "got {sunset}");
        let h_o = daily_extraterrestrial(43.0, 162);
        assert!((h_o / 1e6 - 41.78).abs() < 0.05);
        let k_t = clearness_index(23.0e6, h_o);
        assert!((k_t - 0.55).abs() < 0.005, "got {k_t}");
        let fraction = monthly_diffuse_fraction(k_t, sunset);
        assert!((fraction - 0.38).abs() < 0.005, "got {fraction}");
    }

    #[test]
    fn test_daily_diffuse_fraction_saturation() {
        // Very clear days saturate at the documented floors
        assert_eq!(daily_diffuse_fraction(0.9, 60.0), 0.143);
        assert_eq!(daily_diffuse_fraction(0.9, 100.0), 0.175);
        // Fully overcast: all radiation is diffuse
        assert!((daily_diffuse_fraction(0.0, 60.0) - 1.0).abs() < 1e-12);
        assert!((daily_diffuse_fraction(0.0, 100.0) - 1.0).abs() < 1e-12);
    }
}
