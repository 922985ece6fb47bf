//! Monthly accumulation of hourly irradiance results.
//!
//! Walks an hourly observation series (typically the 8760 rows of a
//! weather file), computes the irradiance on a surface for every hour and
//! accumulates energy per month. The accumulation assumes uniform one-hour
//! sampling: each W/m² value counts as one W·h/m².

use crate::irradiance::hourly_irradiance;
use crate::position::SolarModel;
use crate::types::{HourlyObservation, Location, Surface};

/// Accumulated monthly irradiation on a surface in kWh/m².
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MonthlyIrradiance {
    direct: f64,
    diffuse: f64,
}

impl MonthlyIrradiance {
    /// Gets the accumulated direct irradiation in kWh/m².
    #[must_use]
    pub const fn direct_kwh(&self) -> f64 {
        self.direct
    }

    /// Gets the accumulated diffuse irradiation in kWh/m².
    #[must_use]
    pub const fn diffuse_kwh(&self) -> f64 {
        self.diffuse
    }

    /// Gets the accumulated total irradiation in kWh/m².
    #[must_use]
    pub fn total_kwh(&self) -> f64 {
        self.direct + self.diffuse
    }
}

/// Accumulates hourly direct and diffuse irradiance on a surface into
/// monthly totals.
///
/// Index 0 of the returned array is January. Hours are processed
/// independently; the input series is not required to be sorted or
/// complete, and observations are never mutated (re-running over the same
/// slice yields identical totals). W·h accumulates to kWh by division by
/// 1000.
#[must_use]
pub fn monthly_totals(
    model: SolarModel,
    series: &[HourlyObservation],
    location: &Location,
    surface: &Surface,
) -> [MonthlyIrradiance; 12] {
    let mut totals = [MonthlyIrradiance::default(); 12];
    for observation in series {
        let result = hourly_irradiance(model, observation, location, surface);
        let entry = &mut totals[(observation.month() - 1) as usize];
        entry.direct += result.direct() / 1000.0;
        entry.diffuse += result.diffuse() / 1000.0;
    }
    totals
}
