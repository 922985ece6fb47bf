//! Monthly irradiation report for the nine standard orientations from a
//! CTE `.met` climate file.
//!
//! Usage: `cargo run --example met_monthly -- zonaD3.met`

use solar_irradiance::{met, series, Location, SolarModel, Surface};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let path = std::env::args()
        .nth(1)
        .ok_or("usage: met_monthly <file.met>")?;
    let contents = std::fs::read_to_string(&path)?;
    let data = met::parse_met(&contents)?;

    println!(
        "{} ({}): lat {:.2}°, lon {:.2}°, {} records",
        data.meta.name,
        data.meta.climate_zone,
        data.meta.latitude,
        data.meta.longitude,
        data.hours.len()
    );

    let observations = data.observations()?;
    let location = Location::new(data.meta.latitude, data.meta.longitude)?;

    // Horizontal plus the eight vertical facades (azimuth east positive)
    let orientations = [
        ("Horiz.", Surface::with_orientation(0.0, 0.0)?),
        ("NE", Surface::with_orientation(90.0, 135.0)?),
        ("E", Surface::with_orientation(90.0, 90.0)?),
        ("SE", Surface::with_orientation(90.0, 45.0)?),
        ("S", Surface::with_orientation(90.0, 0.0)?),
        ("SW", Surface::with_orientation(90.0, -45.0)?),
        ("W", Surface::with_orientation(90.0, -90.0)?),
        ("NW", Surface::with_orientation(90.0, -135.0)?),
        ("N", Surface::with_orientation(90.0, 180.0)?),
    ];

    println!("\nMonthly total irradiation in kWh/m²:");
    print!("{:>8}", "");
    for month in 1..=12 {
        print!("{month:>7}");
    }
    println!("{:>8}", "year");

    for (label, surface) in orientations {
        let totals = series::monthly_totals(SolarModel::Iso52010, &observations, &location, &surface);
        print!("{label:>8}");
        let mut year = 0.0;
        for month in totals {
            print!("{:>7.1}", month.total_kwh());
            year += month.total_kwh();
        }
        println!("{year:>8.1}");
    }

    Ok(())
}
