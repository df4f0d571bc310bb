use chrono::{DateTime, TimeZone};

use crate::math::div_trunc;
use crate::types::UtcInstant;

/// Julian Date of the J2000.0 epoch, noon UT on 2000-01-01.
pub const J2000_JD: f64 = 2_451_545.0;

/// Julian Day Number of a proleptic Gregorian calendar date.
///
/// Integer-only formula with truncating division (see `math::div_trunc`).
/// The result is the day number of the noon that starts on this date, so
/// midnight is `julian_day_number(..) as f64 - 0.5`.
pub fn julian_day_number(year: i32, month: u32, day: u32) -> i64 {
    let year = i64::from(year);
    let month = i64::from(month);
    let day = i64::from(day);

    let aux1 = div_trunc(month - 14, 12);
    div_trunc(1461 * (year + 4800 + aux1), 4) + div_trunc(367 * (month - 2 - 12 * aux1), 12)
        - div_trunc(3 * div_trunc(year + 4900 + aux1, 100), 4)
        + day
        - 32075
}

/// A UT instant expressed as a Julian Date.
///
/// - `julian_date`: continuous day count, days start at noon
/// - `elapsed_days`: `julian_date - 2451545.0`, days since J2000.0
/// - `decimal_hours`: UT time of day in hours; sidereal time needs it separately
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct JulianDate {
    /// Julian Date (UT)
    pub julian_date: f64,
    /// Days since J2000.0
    pub elapsed_days: f64,
    /// UT time of day in fractional hours
    pub decimal_hours: f64,
}

impl JulianDate {
    /// Builds the Julian Date for a calendar date plus a UT time of day in hours.
    pub fn from_calendar(year: i32, month: u32, day: u32, decimal_hours: f64) -> Self {
        let julian_date = julian_day_number(year, month, day) as f64 - 0.5 + decimal_hours / 24.0;
        Self {
            julian_date,
            elapsed_days: julian_date - J2000_JD,
            decimal_hours,
        }
    }

    /// Builds the Julian Date for a [`UtcInstant`].
    pub fn from_instant(instant: &UtcInstant) -> Self {
        Self::from_calendar(instant.year, instant.month, instant.day, instant.decimal_hours())
    }

    /// Builds the Julian Date for a chrono datetime in any time zone.
    ///
    /// The datetime is converted to UTC first. Sub-second precision comes from
    /// the nanosecond field, and a leap second is read as second 60.
    ///
    /// # Example
    ///
    /// ```
    /// use chrono::{TimeZone, Utc};
    /// use psa_sunpos::JulianDate;
    ///
    /// let j2000 = Utc.with_ymd_and_hms(2000, 1, 1, 12, 0, 0).unwrap();
    /// let jd = JulianDate::from_datetime(&j2000);
    /// assert_eq!(jd.julian_date, 2451545.0);
    /// assert_eq!(jd.elapsed_days, 0.0);
    /// ```
    pub fn from_datetime<Tz: TimeZone>(datetime: &DateTime<Tz>) -> Self {
        Self::from_instant(&UtcInstant::from_datetime(datetime))
    }
}
