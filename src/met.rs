//! Parser for the Spanish CTE `.met` hourly reference weather format.
//!
//! A `.met` file holds one standard climate year: a header with the file
//! name and station coordinates, then 8760 hourly records of temperature,
//! irradiance, humidity, wind and sun position. Requires the `std` feature
//! (the rest of the crate is `no_std`-compatible).
//!
//! Example:
//! ```no_run
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let contents = std::fs::read_to_string("zonaD3.met")?;
//! let data = solar_irradiance::met::parse_met(&contents)?;
//! println!("{}: {} hourly records", data.meta.climate_zone, data.hours.len());
//! # Ok(())
//! # }
//! ```

use crate::error::{Error, Result};
use crate::types::HourlyObservation;

/// Climate zone codes with a reference `.met` file. Codes with a `c`
/// suffix belong to the Canary Islands.
pub const ZONE_CODES: [&str; 32] = [
    "A1c", "A2c", "A3c", "A4c", "Alfa1c", "Alfa2c", "Alfa3c", "Alfa4c", "B1c", "B2c", "B3c",
    "B4c", "C1c", "C2c", "C3c", "C4c", "D1c", "D2c", "D3c", "E1c", "A3", "A4", "B3", "B4", "C1",
    "C2", "C3", "C4", "D1", "D2", "D3", "E1",
];

/// Station metadata from the header of a `.met` file.
#[derive(Debug, Clone, PartialEq)]
pub struct MetMeta {
    /// Climate file name as given on the first line, e.g. `zonaD3.met`.
    pub name: String,
    /// Climate zone code stripped from the file name, e.g. `D3`.
    pub climate_zone: String,
    /// Station latitude in degrees (north positive).
    pub latitude: f64,
    /// Station longitude in degrees (east positive).
    pub longitude: f64,
    /// Station altitude in metres above sea level.
    pub altitude: f64,
    /// Reference (time zone) longitude in degrees.
    pub reference_longitude: f64,
}

/// One hourly record of a `.met` file.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MetHour {
    /// Month of year (1-12).
    pub month: u32,
    /// Day of month (1-31).
    pub day: u32,
    /// Hour of day (1-24, solar time).
    pub hour: f64,
    /// Dry bulb temperature in °C.
    pub dry_bulb: f64,
    /// Effective sky temperature in °C.
    pub sky_temperature: f64,
    /// Direct irradiance on the horizontal plane in W/m².
    pub direct_horizontal: f64,
    /// Diffuse irradiance on the horizontal plane in W/m².
    pub diffuse_horizontal: f64,
    /// Specific humidity in kg of water per kg of dry air.
    pub specific_humidity: f64,
    /// Relative humidity in percent.
    pub relative_humidity: f64,
    /// Wind speed in m/s.
    pub wind_speed: f64,
    /// Wind direction in degrees from north (east positive).
    pub wind_direction: f64,
    /// Solar azimuth in degrees (east negative, west positive).
    pub sun_azimuth: f64,
    /// Solar zenith angle in degrees.
    pub sun_zenith: f64,
}

impl MetHour {
    /// Converts this record into an irradiance observation, carrying the
    /// file's tabulated sun position alongside the measured irradiance.
    ///
    /// # Errors
    /// Returns an error for invalid dates or out-of-range values, which a
    /// well-formed reference file never contains.
    pub fn observation(&self) -> Result<HourlyObservation> {
        Ok(HourlyObservation::new(
            self.month,
            self.day,
            self.hour,
            self.direct_horizontal,
            self.diffuse_horizontal,
        )?
        .with_sun_position(self.sun_azimuth, self.sun_zenith))
    }
}

/// A parsed `.met` climate file.
#[derive(Debug, Clone, PartialEq)]
pub struct MetData {
    /// Station metadata from the two header lines.
    pub meta: MetMeta,
    /// Hourly records, one per line after the header (8760 for a full year).
    pub hours: Vec<MetHour>,
}

impl MetData {
    /// Converts all hourly records into irradiance observations.
    ///
    /// # Errors
    /// Returns the first conversion error with its one-based line number.
    pub fn observations(&self) -> Result<Vec<HourlyObservation>> {
        self.hours
            .iter()
            .enumerate()
            .map(|(index, hour)| {
                hour.observation()
                    .map_err(|_| Error::invalid_weather_data(index + 3, "invalid hourly record"))
            })
            .collect()
    }
}

fn parse_field(field: Option<&str>, line: usize, message: &'static str) -> Result<f64> {
    field
        .and_then(|value| value.parse::<f64>().ok())
        .ok_or(Error::invalid_weather_data(line, message))
}

// Month and day casts are range-checked integral values, they cannot truncate.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn parse_hour_line(line: &str, line_number: usize) -> Result<MetHour> {
    let mut fields = line.split([' ', '\t', ',']).filter(|f| !f.is_empty());
    let mut next = |message| parse_field(fields.next(), line_number, message);

    let month = next("missing month")?;
    let day = next("missing day")?;
    if !(1.0..=12.0).contains(&month) || month.fract() != 0.0 {
        return Err(Error::invalid_weather_data(line_number, "month out of range"));
    }
    if !(1.0..=31.0).contains(&day) || day.fract() != 0.0 {
        return Err(Error::invalid_weather_data(line_number, "day out of range"));
    }
    Ok(MetHour {
        month: month as u32,
        day: day as u32,
        hour: next("missing hour")?,
        dry_bulb: next("missing dry bulb temperature")?,
        sky_temperature: next("missing sky temperature")?,
        direct_horizontal: next("missing direct horizontal irradiance")?,
        diffuse_horizontal: next("missing diffuse horizontal irradiance")?,
        specific_humidity: next("missing specific humidity")?,
        relative_humidity: next("missing relative humidity")?,
        wind_speed: next("missing wind speed")?,
        wind_direction: next("missing wind direction")?,
        sun_azimuth: next("missing sun azimuth")?,
        sun_zenith: next("missing sun zenith")?,
    })
}

/// Parses the contents of a `.met` climate file.
///
/// Blank lines after the header are skipped; line numbers in errors are
/// one-based positions in the input.
///
/// # Errors
/// Returns `InvalidWeatherData` naming the offending line when the header
/// is incomplete or an hourly record has missing or malformed fields.
pub fn parse_met(contents: &str) -> Result<MetData> {
    let mut lines = contents.lines().map(str::trim);

    let name = lines
        .next()
        .filter(|line| !line.is_empty())
        .ok_or(Error::invalid_weather_data(1, "missing climate file name"))?
        .to_owned();
    let climate_zone = name
        .strip_prefix("zona")
        .unwrap_or(&name)
        .strip_suffix(".met")
        .unwrap_or(&name)
        .to_owned();

    let location_line = lines
        .next()
        .ok_or(Error::invalid_weather_data(2, "missing location line"))?;
    let mut fields = location_line.split_whitespace();
    let mut next = |message| parse_field(fields.next(), 2, message);
    let meta = MetMeta {
        latitude: next("missing latitude")?,
        longitude: next("missing longitude")?,
        altitude: next("missing altitude")?,
        reference_longitude: next("missing reference longitude")?,
        name,
        climate_zone,
    };

    let hours = lines
        .enumerate()
        .filter(|(_, line)| !line.is_empty())
        .map(|(index, line)| parse_hour_line(line, index + 3))
        .collect::<Result<Vec<_>>>()?;

    Ok(MetData { meta, hours })
}
