use chrono::{DateTime, Duration, Utc};
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;
use suncalc::moon::{self, DayStart};
use suncalc::{EventTable, FixedZone, SunCalc, sun};

fn benchmark_single_calculation(c: &mut Criterion) {
    let datetime = "2023-06-21T12:00:00Z".parse::<DateTime<Utc>>().unwrap();
    let lat = 37.7749;
    let lon = -122.4194;
    let table = EventTable::default();

    c.bench_function("sun_position", |b| {
        b.iter(|| sun::position(black_box(&datetime), black_box(lat), black_box(lon)).unwrap())
    });

    c.bench_function("sun_times_utc", |b| {
        b.iter(|| {
            sun::times_utc(
                black_box(&datetime),
                black_box(lat),
                black_box(lon),
                black_box(0.0),
                &table,
            )
            .unwrap()
        })
    });

    c.bench_function("moon_position", |b| {
        b.iter(|| moon::position(black_box(&datetime), black_box(lat), black_box(lon)).unwrap())
    });

    c.bench_function("moon_illumination", |b| {
        b.iter(|| moon::illumination(black_box(&datetime)))
    });

    c.bench_function("moon_rise_set", |b| {
        b.iter(|| {
            moon::rise_set(
                black_box(&datetime),
                black_box(lat),
                black_box(lon),
                DayStart::UtcMidnight,
            )
            .unwrap()
        })
    });
}

fn benchmark_daily_series_fixed_location(c: &mut Criterion) {
    let mut group = c.benchmark_group("daily_series_fixed_location");

    let base_datetime = "2023-01-01T00:00:00Z".parse::<DateTime<Utc>>().unwrap();
    let lat = 48.21;
    let lon = 16.37;
    let calc = SunCalc::with_resolver(FixedZone(chrono_tz::Europe::Vienna));

    for &count in &[365_u64, 3650] {
        group.throughput(Throughput::Elements(count));

        let dates: Vec<DateTime<Utc>> = (0..count)
            .map(|i| base_datetime + Duration::days(i as i64))
            .collect();

        group.bench_with_input(BenchmarkId::new("sun_times_zoned", count), &count, |b, _| {
            b.iter(|| {
                for date in &dates {
                    let _result = calc
                        .times(black_box(date), black_box(lat), black_box(lon), 0.0)
                        .unwrap();
                }
            })
        });

        group.bench_with_input(BenchmarkId::new("moon_rise_set", count), &count, |b, _| {
            b.iter(|| {
                for date in &dates {
                    let _result = moon::rise_set(
                        black_box(date),
                        black_box(lat),
                        black_box(lon),
                        DayStart::LocalMidnight,
                    )
                    .unwrap();
                }
            })
        });
    }

    group.finish();
}

fn benchmark_coordinate_sweep_fixed_time(c: &mut Criterion) {
    let mut group = c.benchmark_group("coordinate_sweep_fixed_time");

    let datetime = "2023-06-21T00:00:00Z".parse::<DateTime<Utc>>().unwrap();
    let table = EventTable::default();

    for &grid_size in &[30_usize, 70] {
        let count = grid_size * grid_size;
        group.throughput(Throughput::Elements(count as u64));

        let coords: Vec<(f64, f64)> = (0..grid_size)
            .flat_map(|i| {
                let lat = -80.0 + 160.0 * i as f64 / (grid_size - 1) as f64;
                (0..grid_size).map(move |j| {
                    let lon = -180.0 + 360.0 * j as f64 / (grid_size - 1) as f64;
                    (lat, lon)
                })
            })
            .collect();

        group.bench_with_input(
            BenchmarkId::new("sun_times_utc", format!("{grid_size}x{grid_size}")),
            &grid_size,
            |b, _| {
                b.iter(|| {
                    for &(lat, lon) in &coords {
                        let _result = sun::times_utc(
                            black_box(&datetime),
                            black_box(lat),
                            black_box(lon),
                            0.0,
                            &table,
                        )
                        .unwrap();
                    }
                })
            },
        );
    }

    group.finish();
}

#[cfg(feature = "tz-lookup")]
fn benchmark_zone_lookup(c: &mut Criterion) {
    let calc = SunCalc::new();
    let datetime = "2023-04-19T00:00:00Z".parse::<DateTime<Utc>>().unwrap();

    c.bench_function("time_zone_lookup", |b| {
        b.iter(|| calc.time_zone(black_box(35.68), black_box(139.65)).unwrap())
    });

    c.bench_function("sun_times_with_lookup", |b| {
        b.iter(|| {
            calc.times(black_box(&datetime), black_box(35.68), black_box(139.65), 0.0)
                .unwrap()
        })
    });
}

#[cfg(not(feature = "tz-lookup"))]
fn benchmark_zone_lookup(_c: &mut Criterion) {}

criterion_group!(
    benches,
    benchmark_single_calculation,
    benchmark_daily_series_fixed_location,
    benchmark_coordinate_sweep_fixed_time,
    benchmark_zone_lookup
);

criterion_main!(benches);
