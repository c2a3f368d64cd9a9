//! Print the light phases, moon times and illumination for a place and day.
//!
//! Usage: `cargo run --example light_phases -- [latitude] [longitude] [YYYY-MM-DD]`

use chrono::{NaiveDate, TimeZone, Utc};
use suncalc::moon::{self, DayStart};
use suncalc::{MoonTimes, SunCalc, sun};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut args = std::env::args().skip(1);
    let latitude: f64 = args.next().map_or(Ok(50.5), |arg| arg.parse())?;
    let longitude: f64 = args.next().map_or(Ok(30.5), |arg| arg.parse())?;
    let day = match args.next() {
        Some(arg) => NaiveDate::parse_from_str(&arg, "%Y-%m-%d")?,
        None => Utc::now().date_naive(),
    };

    #[cfg(feature = "tz-lookup")]
    let calc = SunCalc::new();
    #[cfg(not(feature = "tz-lookup"))]
    let calc = SunCalc::with_resolver(suncalc::FixedZone(chrono_tz::UTC));

    let calc = calc.add_time(-4.0, "blueHourEnd", "blueHour")?;
    let zone = calc.time_zone(latitude, longitude)?;
    println!("=== {day} at ({latitude}, {longitude}), {zone} ===\n");

    // local noon selects the requested day's transit on either side of Greenwich
    let date = zone
        .from_local_datetime(&day.and_hms_opt(12, 0, 0).ok_or("invalid day")?)
        .earliest()
        .ok_or("local noon does not exist on this day")?;

    let times = calc.times(&date, latitude, longitude, 0.0)?;
    for (label, time) in times.iter() {
        match time {
            Some(Ok(local)) => println!("{label:>14}: {}", local.format("%Y-%m-%d %H:%M:%S %Z")),
            Some(Err(err)) => println!("{label:>14}: {err}"),
            None => println!("{label:>14}: -"),
        }
    }

    let noon = times.solar_noon().as_ref().map_err(Clone::clone)?;
    let position = sun::position(noon, latitude, longitude)?;
    println!(
        "\nSun at noon: altitude {:.2}°, azimuth {:.2}° from north",
        position.altitude().to_degrees(),
        position.azimuth_from_north().to_degrees()
    );

    println!();
    match moon::rise_set(&date, latitude, longitude, DayStart::LocalMidnight)? {
        MoonTimes::Crossings { rise, set } => {
            let show = |time: Option<chrono::DateTime<chrono_tz::Tz>>| {
                time.map_or_else(|| "-".to_string(), |t| t.format("%H:%M").to_string())
            };
            println!("Moonrise: {}", show(rise));
            println!("Moonset:  {}", show(set));
        }
        MoonTimes::AlwaysUp => println!("Moon is up all day"),
        MoonTimes::AlwaysDown => println!("Moon is down all day"),
    }

    let illumination = moon::illumination(&date);
    println!(
        "Moon: {:.0}% illuminated, phase {:.2} ({})",
        illumination.fraction() * 100.0,
        illumination.phase(),
        if illumination.is_waxing() { "waxing" } else { "waning" }
    );

    Ok(())
}
