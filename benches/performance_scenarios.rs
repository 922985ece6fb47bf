use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use solar_irradiance::{
    irradiance, position, CalendarDate, HourlyObservation, Location, SolarModel, Surface,
};
use std::hint::black_box;

fn benchmark_single_calculation(c: &mut Criterion) {
    let date = CalendarDate::new(7, 17).unwrap();
    let lat = 40.7;

    c.bench_function("sun_position_iso52010", |b| {
        b.iter(|| {
            position::sun_position(
                black_box(SolarModel::Iso52010),
                black_box(date),
                black_box(12.5),
                black_box(lat),
            )
            .unwrap()
        })
    });

    c.bench_function("sun_position_duffie", |b| {
        b.iter(|| {
            position::sun_position(
                black_box(SolarModel::Duffie),
                black_box(date),
                black_box(12.5),
                black_box(lat),
            )
            .unwrap()
        })
    });

    let location = Location::new(lat, -3.7).unwrap();
    let surface = Surface::with_orientation(30.0, 0.0).unwrap();
    let observation = HourlyObservation::new(7, 17, 12.5, 450.0, 120.0).unwrap();

    c.bench_function("hourly_irradiance_single", |b| {
        b.iter(|| {
            irradiance::hourly_irradiance(
                black_box(SolarModel::Iso52010),
                black_box(&observation),
                black_box(&location),
                black_box(&surface),
            )
        })
    });
}

/// Synthetic daylight observations spread over the year, the access
/// pattern of a weather-file sweep.
fn yearly_series(count: usize) -> Vec<HourlyObservation> {
    let days = [17, 16, 16, 15, 15, 11, 17, 16, 15, 15, 14, 10];
    (0..count)
        .map(|i| {
            let month = (i % 12) as u32 + 1;
            let day = days[(month - 1) as usize];
            let hour = 8.0 + (i % 9) as f64;
            let direct = 50.0 + (i % 400) as f64;
            let diffuse = 30.0 + (i % 90) as f64;
            HourlyObservation::new(month, day, hour, direct, diffuse).unwrap()
        })
        .collect()
}

fn benchmark_series_fixed_surface(c: &mut Criterion) {
    let mut group = c.benchmark_group("series_fixed_surface");

    let location = Location::new(40.7, -3.7).unwrap();
    let surface = Surface::with_orientation(90.0, 0.0).unwrap();

    for &count in &[1000, 8760, 25000] {
        group.throughput(Throughput::Elements(count as u64));
        let series = yearly_series(count);

        group.bench_with_input(BenchmarkId::new("iso52010", count), &count, |b, _| {
            b.iter(|| {
                for observation in &series {
                    let _result = irradiance::hourly_irradiance(
                        black_box(SolarModel::Iso52010),
                        black_box(observation),
                        black_box(&location),
                        black_box(&surface),
                    );
                }
            })
        });

        group.bench_with_input(BenchmarkId::new("duffie", count), &count, |b, _| {
            b.iter(|| {
                for observation in &series {
                    let _result = irradiance::hourly_irradiance(
                        black_box(SolarModel::Duffie),
                        black_box(observation),
                        black_box(&location),
                        black_box(&surface),
                    );
                }
            })
        });
    }

    group.finish();
}

fn benchmark_orientation_sweep(c: &mut Criterion) {
    let mut group = c.benchmark_group("orientation_sweep");

    let location = Location::new(40.7, -3.7).unwrap();
    // Horizontal plus verticals at 45 degree steps, the standard set for
    // facade studies
    let surfaces: Vec<Surface> = std::iter::once(Surface::with_orientation(0.0, 0.0).unwrap())
        .chain((-3..=4).map(|i| Surface::with_orientation(90.0, f64::from(i) * 45.0).unwrap()))
        .collect();

    for &hours in &[1000, 8760] {
        let series = yearly_series(hours);
        group.throughput(Throughput::Elements((hours * surfaces.len()) as u64));

        group.bench_with_input(
            BenchmarkId::new("nine_orientations", hours),
            &hours,
            |b, _| {
                b.iter(|| {
                    for observation in &series {
                        for surface in &surfaces {
                            let _result = irradiance::hourly_irradiance(
                                black_box(SolarModel::Iso52010),
                                black_box(observation),
                                black_box(&location),
                                black_box(surface),
                            );
                        }
                    }
                })
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_single_calculation,
    benchmark_series_fixed_surface,
    benchmark_orientation_sweep
);

criterion_main!(benches);
