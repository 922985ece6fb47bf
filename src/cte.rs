//! Reference climate constants of the Spanish building energy code (CTE).
//!
//! The CTE defines standard climate zones (a winter severity letter plus a
//! summer severity digit, e.g. `D3`) with reference weather data for the
//! peninsula and the Canary Islands. This module carries the constants
//! derived from those standard climates: reference latitudes, mean July
//! irradiation and clearness, and mean annual irradiation. Read-only data,
//! consumed by reporting tools; lookups on unknown codes return `None`.

/// Reference latitude in degrees for peninsular climate zones.
pub const PENINSULA_LATITUDE: f64 = 40.7;

/// Reference latitude in degrees for Canary Islands climate zones.
pub const CANARIAS_LATITUDE: f64 = 28.3;

/// Day of year of the mean day of July (July 17), used for the monthly
/// correlations.
pub const MEAN_JULY_DAY: u32 = 198;

/// Region of a CTE reference climate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    /// Iberian peninsula (and Balearic Islands).
    Peninsula,
    /// Canary Islands.
    Canarias,
}

impl Region {
    /// Gets the reference latitude in degrees for this region.
    #[must_use]
    pub const fn reference_latitude(&self) -> f64 {
        match self {
            Self::Peninsula => PENINSULA_LATITUDE,
            Self::Canarias => CANARIAS_LATITUDE,
        }
    }
}

/// Constants of one CTE reference climate.
///
/// Irradiation values are daily means in Wh/m²·day computed from the
/// standard climate's hourly series.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClimateZone {
    /// Zone code, winter severity letter plus summer severity digit.
    pub code: &'static str,
    /// Region the reference climate belongs to.
    pub region: Region,
    /// Mean daily global irradiation in July, Wh/m²·day.
    pub july_mean_daily: f64,
    /// Monthly-average clearness index for July.
    pub july_clearness: f64,
    /// Monthly-average diffuse fraction for July.
    pub july_diffuse_fraction: f64,
    /// Mean daily global irradiation over the year, Wh/m²·day.
    pub annual_mean_daily: f64,
}

impl ClimateZone {
    /// Gets the reference latitude in degrees for this zone's region.
    #[must_use]
    pub const fn reference_latitude(&self) -> f64 {
        self.region.reference_latitude()
    }
}

/// Constants for all CTE reference climates.
pub const CLIMATE_ZONES: [ClimateZone; 32] = [
    // Canary Islands
    ClimateZone { code: "A1", region: Region::Canarias, july_mean_daily: 5612.81, july_clearness: 0.531, july_diffuse_fraction: 0.522, annual_mean_daily: 4391.833 },
    ClimateZone { code: "A2", region: Region::Canarias, july_mean_daily: 6248.77, july_clearness: 0.591, july_diffuse_fraction: 0.445, annual_mean_daily: 4666.189 },
    ClimateZone { code: "A3", region: Region::Canarias, july_mean_daily: 6391.52, july_clearness: 0.605, july_diffuse_fraction: 0.411, annual_mean_daily: 4745.775 },
    ClimateZone { code: "A4", region: Region::Canarias, july_mean_daily: 6821.39, july_clearness: 0.645, july_diffuse_fraction: 0.364, annual_mean_daily: 4868.340 },
    ClimateZone { code: "B1", region: Region::Canarias, july_mean_daily: 5613.48, july_clearness: 0.531, july_diffuse_fraction: 0.513, annual_mean_daily: 4400.211 },
    ClimateZone { code: "B2", region: Region::Canarias, july_mean_daily: 6248.10, july_clearness: 0.591, july_diffuse_fraction: 0.438, annual_mean_daily: 4515.756 },
    ClimateZone { code: "B3", region: Region::Canarias, july_mean_daily: 6391.23, july_clearness: 0.605, july_diffuse_fraction: 0.409, annual_mean_daily: 4595.452 },
    ClimateZone { code: "B4", region: Region::Canarias, july_mean_daily: 6821.26, july_clearness: 0.645, july_diffuse_fraction: 0.367, annual_mean_daily: 4717.975 },
    ClimateZone { code: "C1", region: Region::Canarias, july_mean_daily: 5613.26, july_clearness: 0.531, july_diffuse_fraction: 0.493, annual_mean_daily: 3919.501 },
    ClimateZone { code: "C2", region: Region::Canarias, july_mean_daily: 6248.71, july_clearness: 0.591, july_diffuse_fraction: 0.427, annual_mean_daily: 4107.942 },
    ClimateZone { code: "C3", region: Region::Canarias, july_mean_daily: 6391.26, july_clearness: 0.605, july_diffuse_fraction: 0.406, annual_mean_daily: 4187.551 },
    ClimateZone { code: "C4", region: Region::Canarias, july_mean_daily: 6821.55, july_clearness: 0.645, july_diffuse_fraction: 0.375, annual_mean_daily: 4310.019 },
    ClimateZone { code: "D1", region: Region::Canarias, july_mean_daily: 5613.39, july_clearness: 0.531, july_diffuse_fraction: 0.545, annual_mean_daily: 3975.115 },
    ClimateZone { code: "D2", region: Region::Canarias, july_mean_daily: 6248.32, july_clearness: 0.591, july_diffuse_fraction: 0.426, annual_mean_daily: 4163.630 },
    ClimateZone { code: "D3", region: Region::Canarias, july_mean_daily: 6391.39, july_clearness: 0.605, july_diffuse_fraction: 0.405, annual_mean_daily: 4243.293 },
    ClimateZone { code: "E1", region: Region::Canarias, july_mean_daily: 5612.29, july_clearness: 0.531, july_diffuse_fraction: 0.531, annual_mean_daily: 3906.962 },
    ClimateZone { code: "α1", region: Region::Canarias, july_mean_daily: 5613.35, july_clearness: 0.531, july_diffuse_fraction: 0.521, annual_mean_daily: 5080.658 },
    ClimateZone { code: "α2", region: Region::Canarias, july_mean_daily: 6248.45, july_clearness: 0.591, july_diffuse_fraction: 0.413, annual_mean_daily: 5366.953 },
    ClimateZone { code: "α3", region: Region::Canarias, july_mean_daily: 6391.29, july_clearness: 0.605, july_diffuse_fraction: 0.415, annual_mean_daily: 5392.156 },
    ClimateZone { code: "α4", region: Region::Canarias, july_mean_daily: 6820.87, july_clearness: 0.645, july_diffuse_fraction: 0.375, annual_mean_daily: 5471.348 },
    // Peninsula
    ClimateZone { code: "A3", region: Region::Peninsula, july_mean_daily: 6391.42, july_clearness: 0.632, july_diffuse_fraction: 0.371, annual_mean_daily: 4746.003 },
    ClimateZone { code: "A4", region: Region::Peninsula, july_mean_daily: 6820.58, july_clearness: 0.675, july_diffuse_fraction: 0.327, annual_mean_daily: 4868.356 },
    ClimateZone { code: "B3", region: Region::Peninsula, july_mean_daily: 6392.10, july_clearness: 0.632, july_diffuse_fraction: 0.401, annual_mean_daily: 4595.452 },
    ClimateZone { code: "B4", region: Region::Peninsula, july_mean_daily: 6820.87, july_clearness: 0.675, july_diffuse_fraction: 0.340, annual_mean_daily: 4717.877 },
    ClimateZone { code: "C1", region: Region::Peninsula, july_mean_daily: 5613.65, july_clearness: 0.555, july_diffuse_fraction: 0.479, annual_mean_daily: 3919.586 },
    ClimateZone { code: "C2", region: Region::Peninsula, july_mean_daily: 6248.81, july_clearness: 0.618, july_diffuse_fraction: 0.397, annual_mean_daily: 4107.962 },
    ClimateZone { code: "C3", region: Region::Peninsula, july_mean_daily: 6391.26, july_clearness: 0.632, july_diffuse_fraction: 0.363, annual_mean_daily: 4187.540 },
    ClimateZone { code: "C4", region: Region::Peninsula, july_mean_daily: 6821.52, july_clearness: 0.675, july_diffuse_fraction: 0.330, annual_mean_daily: 4310.123 },
    ClimateZone { code: "D1", region: Region::Peninsula, july_mean_daily: 5613.16, july_clearness: 0.555, july_diffuse_fraction: 0.499, annual_mean_daily: 3975.205 },
    ClimateZone { code: "D2", region: Region::Peninsula, july_mean_daily: 6249.03, july_clearness: 0.618, july_diffuse_fraction: 0.382, annual_mean_daily: 4163.726 },
    ClimateZone { code: "D3", region: Region::Peninsula, july_mean_daily: 6391.90, july_clearness: 0.632, july_diffuse_fraction: 0.391, annual_mean_daily: 4243.211 },
    ClimateZone { code: "E1", region: Region::Peninsula, july_mean_daily: 5613.48, july_clearness: 0.555, july_diffuse_fraction: 0.496, annual_mean_daily: 3907.241 },
];

/// Finds the constants for a climate zone code in a region.
///
/// Returns `None` for unknown codes; callers commonly iterate over zone
/// enumerations that include codes absent in one of the regions.
#[must_use]
pub fn find_climate_zone(code: &str, region: Region) -> Option<&'static ClimateZone> {
    CLIMATE_ZONES
        .iter()
        .find(|zone| zone.code == code && zone.region == region)
}

/// Gets the monthly-average July clearness index for a summer severity
/// digit (1-4) in a region.
///
/// Returns `None` for severities outside 1-4.
#[must_use]
pub fn july_clearness_index(summer_severity: u8, region: Region) -> Option<f64> {
    let value = match (region, summer_severity) {
        (Region::Canarias, 1) => 0.531,
        (Region::Canarias, 2) => 0.591,
        (Region::Canarias, 3) => 0.605,
        (Region::Canarias, 4) => 0.645,
        (Region::Peninsula, 1) => 0.555,
        (Region::Peninsula, 2) => 0.618,
        (Region::Peninsula, 3) => 0.632,
        (Region::Peninsula, 4) => 0.675,
        _ => return None,
    };
    Some(value)
}
