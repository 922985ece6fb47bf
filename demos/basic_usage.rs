//! Basic sun position and tilted-surface irradiance calculation.

use solar_irradiance::{
    irradiance, position, CalendarDate, HourlyObservation, Location, SolarModel, Surface,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Madrid, mean day of July, solar noon
    let date = CalendarDate::new(7, 17)?;
    let latitude = 40.4;

    for model in [SolarModel::Iso52010, SolarModel::Duffie] {
        let sun = position::sun_position(model, date, 12.5, latitude)?;
        println!("{model:?}:");
        println!("  Declination: {:.3}°", sun.declination());
        println!("  Altitude: {:.3}°", sun.altitude());
        println!("  Azimuth: {:.3}°", sun.azimuth());
    }

    // Irradiance on a 30° south-tilted collector from measured
    // horizontal components
    let location = Location::new(latitude, -3.7)?;
    let collector = Surface::with_orientation(30.0, 0.0)?;
    let observation = HourlyObservation::new(7, 17, 12.5, 450.0, 120.0)?;

    let result =
        irradiance::hourly_irradiance(SolarModel::Iso52010, &observation, &location, &collector);
    println!("\n30° south collector at noon:");
    println!("  Direct: {:.1} W/m²", result.direct());
    println!("  Diffuse: {:.1} W/m²", result.diffuse());
    println!("  Total: {:.1} W/m²", result.total());

    Ok(())
}
