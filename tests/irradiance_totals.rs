//! Tilted-surface irradiance totals for the nine standard building
//! orientations (horizontal roof plus eight vertical facades).

use solar_irradiance::{
    irradiance, series, HourlyObservation, IrradianceResult, Location, SolarModel, Surface,
};

const MODEL: SolarModel = SolarModel::Iso52010;

fn location() -> Location {
    Location::new(40.7, -3.7).unwrap()
}

/// Horizontal plus the eight vertical facades at 45° steps, azimuth
/// counted east positive as the ISO family does.
fn orientations() -> [(&'static str, Surface); 9] {
    [
        ("Horiz.", Surface::with_orientation(0.0, 0.0).unwrap()),
        ("NE", Surface::with_orientation(90.0, 135.0).unwrap()),
        ("E", Surface::with_orientation(90.0, 90.0).unwrap()),
        ("SE", Surface::with_orientation(90.0, 45.0).unwrap()),
        ("S", Surface::with_orientation(90.0, 0.0).unwrap()),
        ("SW", Surface::with_orientation(90.0, -45.0).unwrap()),
        ("W", Surface::with_orientation(90.0, -90.0).unwrap()),
        ("NW", Surface::with_orientation(90.0, -135.0).unwrap()),
        ("N", Surface::with_orientation(90.0, 180.0).unwrap()),
    ]
}

fn compute_all(observation: &HourlyObservation) -> [(&'static str, IrradianceResult); 9] {
    let location = location();
    orientations()
        .map(|(label, surface)| (label, irradiance::hourly_irradiance(MODEL, observation, &location, &surface)))
}

fn find(results: &[(&'static str, IrradianceResult)], label: &str) -> IrradianceResult {
    results
        .iter()
        .find(|(name, _)| *name == label)
        .map(|(_, result)| *result)
        .unwrap()
}

fn assert_close(value: f64, expected: f64, tolerance: f64, label: &str) {
    assert!(
        (value - expected).abs() < tolerance,
        "{label}: got {value}, expected {expected}"
    );
}

/// Solar noon in July: the sun sits due south, so east- and west-side
/// facades mirror each other exactly and the north half receives no beam.
#[test]
fn noon_orientation_set() {
    let observation = HourlyObservation::new(7, 17, 12.5, 450.0, 120.0).unwrap();
    let results = compute_all(&observation);

    let horizontal = find(&results, "Horiz.");
    assert_close(horizontal.direct(), 554.83, 0.01, "horizontal direct");
    assert_close(horizontal.diffuse(), 15.17, 0.01, "horizontal diffuse");
    assert_close(horizontal.total(), 570.0, 1e-9, "horizontal total");

    let south = find(&results, "S");
    assert_close(south.direct(), 195.76, 0.01, "south direct");

    // East/west symmetry at noon
    let south_east = find(&results, "SE");
    let south_west = find(&results, "SW");
    assert_close(south_east.direct(), 138.42, 0.01, "south-east direct");
    assert_close(
        south_east.direct(),
        south_west.direct(),
        1e-9,
        "SE/SW symmetry",
    );

    // The sun stands south of every facade past ±90°
    for label in ["E", "W", "NE", "NW", "N"] {
        assert_close(find(&results, label).direct(), 0.0, 1e-9, label);
    }

    // Every vertical shares the same sky, horizon and ground contributions
    for label in ["NE", "E", "SE", "S", "SW", "W", "NW", "N"] {
        assert_close(find(&results, label).diffuse(), 91.95, 0.01, label);
    }
}

/// Mid-morning: the beam swings to the east-side facades and the set
/// loses its noon symmetry.
#[test]
fn morning_orientation_set() {
    let observation = HourlyObservation::new(7, 17, 10.0, 380.0, 110.0).unwrap();
    let results = compute_all(&observation);

    let horizontal = find(&results, "Horiz.");
    assert_close(horizontal.direct(), 460.97, 0.01, "horizontal direct");
    assert_close(horizontal.diffuse(), 29.03, 0.01, "horizontal diffuse");
    assert_close(horizontal.total(), 490.0, 1e-9, "horizontal total");

    assert_close(find(&results, "E").direct(), 328.11, 0.01, "east direct");
    assert_close(find(&results, "SE").direct(), 316.73, 0.01, "south-east direct");
    assert_close(find(&results, "S").direct(), 119.81, 0.01, "south direct");
    for label in ["SW", "W", "NW", "N"] {
        assert_close(find(&results, label).direct(), 0.0, 1e-9, label);
    }
    assert_close(find(&results, "E").diffuse(), 89.77, 0.01, "east diffuse");
}

/// Accumulating the two hours over the nine orientations: monthly energy
/// equals the sum of the hourly results, and July is the only month hit.
#[test]
fn monthly_accumulation_matches_hourly_sum() {
    let series_data = [
        HourlyObservation::new(7, 17, 10.0, 380.0, 110.0).unwrap(),
        HourlyObservation::new(7, 17, 12.5, 450.0, 120.0).unwrap(),
    ];
    let location = location();

    for (label, surface) in orientations() {
        let expected: f64 = series_data
            .iter()
            .map(|observation| {
                irradiance::hourly_irradiance(MODEL, observation, &location, &surface).total()
            })
            .sum::<f64>()
            / 1000.0;

        let totals = series::monthly_totals(MODEL, &series_data, &location, &surface);
        assert_close(totals[6].total_kwh(), expected, 1e-12, label);
        for (index, month) in totals.iter().enumerate() {
            if index != 6 {
                assert_eq!(month.total_kwh(), 0.0, "{label} month {index}");
            }
        }
    }
}

/// A measured sun position from a weather file overrides the computed
/// altitude in the beam conversion, shifting the facade results.
#[test]
fn measured_sun_position_changes_facade_split() {
    let location = location();
    let south = Surface::with_orientation(90.0, 0.0).unwrap();

    let computed = HourlyObservation::new(7, 17, 10.0, 380.0, 110.0).unwrap();
    // Measured sun noticeably lower than the geometric position
    let measured = computed.with_sun_position(40.0, 45.0);

    let from_computed = irradiance::hourly_irradiance(MODEL, &computed, &location, &south);
    let from_measured = irradiance::hourly_irradiance(MODEL, &measured, &location, &south);
    assert!((from_computed.direct() - from_measured.direct()).abs() > 1.0);
    assert!(from_measured.direct() >= 0.0);
    assert!(from_measured.diffuse() >= 0.0);
}
