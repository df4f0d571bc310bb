#![allow(missing_docs, clippy::unwrap_used)]
use chrono::{Datelike, Duration, TimeZone, Timelike, Utc};
use psa_sunpos::{sun_position_at, Observer, SunCalculator};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Plataforma Solar de Almería
    let latitude = 37.0914;
    let longitude: f64 = -2.3581;
    let observer = Observer::new(latitude, longitude)?;
    let tz = chrono_tz::Europe::Madrid;

    let now = Utc::now();
    let local_now = now.with_timezone(&tz);

    println!("PSA Sun Position Example - Almería, Spain");
    println!("Location: {:.4}°N, {:.4}°W", latitude, longitude.abs());
    println!("Date: {}", local_now.format("%B %d, %Y"));
    println!("{:=<60}", "");

    let calc = SunCalculator::from_datetime(&now, observer);
    let jd = calc.julian_date();
    let equatorial = calc.equatorial();
    let position = calc.position();
    println!("Current Solar Position (at {}):", local_now.format("%H:%M:%S %Z"));
    println!("  Julian date: {:.6}", jd.julian_date);
    println!("  Right ascension: {:.4}°", equatorial.right_ascension.to_degrees());
    println!("  Declination: {:.4}°", equatorial.declination.to_degrees());
    println!("  Zenith angle: {:.2}°", position.zenith_degrees());
    println!("  Azimuth angle: {:.2}°", position.azimuth_degrees());
    println!("  Elevation angle: {:.2}°", position.elevation_degrees());
    println!();

    // Hourly table for today, local clock time
    println!("Hourly positions ({}):", tz);
    let midnight = tz
        .with_ymd_and_hms(local_now.year(), local_now.month(), local_now.day(), 0, 0, 0)
        .earliest()
        .ok_or("Local midnight does not exist")?;
    for hour in 0..24 {
        let local = midnight + Duration::hours(hour);
        let pos = sun_position_at(&local, &observer);
        let marker = if pos.is_above_horizon() { "" } else { "  (below horizon)" };
        println!(
            "  {:02}:00  azimuth {:6.2}°  elevation {:6.2}°{}",
            local.hour(),
            pos.azimuth_degrees(),
            pos.elevation_degrees(),
            marker
        );
    }
    Ok(())
}
