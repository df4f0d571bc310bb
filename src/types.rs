use core::f64::consts::FRAC_PI_2;

use chrono::{DateTime, Datelike, NaiveDate, TimeZone, Timelike, Utc};
use log::debug;
use thiserror::Error;

/// Earliest year accepted by [`UtcInstant::new`], the first full year of the Gregorian calendar.
pub const MIN_YEAR: i32 = 1583;
/// Latest year accepted by [`UtcInstant::new`].
pub const MAX_YEAR: i32 = 9999;

/// Solar position in local horizontal coordinates.
///
/// - `azimuth`: radians in `[0, 2π)`, clockwise from true North (0 = N, π/2 = E, π = S, 3π/2 = W)
/// - `zenith`: radians from the local vertical (0 = overhead, π/2 = horizon), parallax-corrected
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SolarPosition {
    /// Azimuth angle in radians, clockwise from North
    pub azimuth: f64,
    /// Zenith angle in radians (0 = overhead, π/2 = horizon)
    pub zenith: f64,
}

impl SolarPosition {
    /// Elevation (altitude) angle above the horizon in radians, `π/2 - zenith`.
    pub fn elevation(&self) -> f64 {
        FRAC_PI_2 - self.zenith
    }

    /// Azimuth in degrees, clockwise from North.
    pub fn azimuth_degrees(&self) -> f64 {
        self.azimuth.to_degrees()
    }

    /// Zenith angle in degrees.
    pub fn zenith_degrees(&self) -> f64 {
        self.zenith.to_degrees()
    }

    /// Elevation angle in degrees.
    pub fn elevation_degrees(&self) -> f64 {
        self.elevation().to_degrees()
    }

    /// Whether the Sun's centre is above the geometric horizon.
    ///
    /// No refraction is applied, so this turns false a few minutes before
    /// the visible sunset.
    pub fn is_above_horizon(&self) -> bool {
        self.zenith < FRAC_PI_2
    }
}

/// A UTC calendar instant split into the components the algorithm consumes.
///
/// The fields are public so that any combination can be built directly,
/// including out-of-range values which still produce a (meaningless) result.
/// Use [`UtcInstant::new`] to have the components checked.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct UtcInstant {
    /// Gregorian year
    pub year: i32,
    /// Month, 1-12
    pub month: u32,
    /// Day of month, 1-31
    pub day: u32,
    /// Hour, 0-23
    pub hour: f64,
    /// Minute, 0-59
    pub minute: f64,
    /// Second, 0-60 (60 for a leap second), may be fractional
    pub second: f64,
}

impl UtcInstant {
    /// Creates a validated instant.
    ///
    /// # Errors
    ///
    /// - [`SunPosError::YearOutOfRange`] if `year` is outside [`MIN_YEAR`]..=[`MAX_YEAR`]
    /// - [`SunPosError::MonthOutOfRange`] if `month` is outside 1..=12
    /// - [`SunPosError::DayOutOfRange`] if `day` does not exist in that month
    /// - [`SunPosError::TimeOfDayOutOfRange`] if `hour` is outside `[0, 24)`, `minute` outside
    ///   `[0, 60)`, `second` outside `[0, 61)`, or any of them is not finite
    ///
    /// # Example
    ///
    /// ```
    /// use psa_sunpos::{SunPosError, UtcInstant};
    ///
    /// let noon = UtcInstant::new(2024, 2, 29, 12.0, 0.0, 0.0).unwrap();
    /// assert_eq!(noon.decimal_hours(), 12.0);
    ///
    /// assert_eq!(UtcInstant::new(2023, 2, 29, 12.0, 0.0, 0.0), Err(SunPosError::DayOutOfRange));
    /// ```
    pub fn new(year: i32, month: u32, day: u32, hour: f64, minute: f64, second: f64) -> Result<Self, SunPosError> {
        if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
            debug!("rejecting year {year}");
            return Err(SunPosError::YearOutOfRange);
        }
        if !(1..=12).contains(&month) {
            debug!("rejecting month {month}");
            return Err(SunPosError::MonthOutOfRange);
        }
        if NaiveDate::from_ymd_opt(year, month, day).is_none() {
            debug!("rejecting day {year}-{month:02}-{day:02}");
            return Err(SunPosError::DayOutOfRange);
        }
        if !(0.0..24.0).contains(&hour) || !(0.0..60.0).contains(&minute) || !(0.0..61.0).contains(&second) {
            debug!("rejecting time of day {hour}:{minute}:{second}");
            return Err(SunPosError::TimeOfDayOutOfRange);
        }
        Ok(Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        })
    }

    /// Takes the UTC calendar components of a chrono datetime in any time zone.
    ///
    /// Sub-second precision comes from the nanosecond field, and a leap
    /// second is read as second 60.
    pub fn from_datetime<Tz: TimeZone>(datetime: &DateTime<Tz>) -> Self {
        let utc = datetime.with_timezone(&Utc);
        Self {
            year: utc.year(),
            month: utc.month(),
            day: utc.day(),
            hour: f64::from(utc.hour()),
            minute: f64::from(utc.minute()),
            second: f64::from(utc.second()) + f64::from(utc.nanosecond()) / 1_000_000_000.0,
        }
    }

    /// Time of day as fractional hours, `hour + (minute + second / 60) / 60`.
    pub fn decimal_hours(&self) -> f64 {
        self.hour + (self.minute + self.second / 60.0) / 60.0
    }
}

/// Geographic position of the observer, in decimal degrees.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Observer {
    /// Latitude in degrees, positive North
    pub latitude: f64,
    /// Longitude in degrees, positive East
    pub longitude: f64,
}

impl Observer {
    /// Creates a validated observer.
    ///
    /// Longitude may be given either in `[-180, 180]` or in `[0, 360]`; it is
    /// used as given, without normalization.
    ///
    /// # Errors
    ///
    /// - [`SunPosError::LatitudeOutOfRange`] if `latitude` is outside `[-90, 90]` or not finite
    /// - [`SunPosError::LongitudeOutOfRange`] if `longitude` is outside `[-180, 360]` or not finite
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, SunPosError> {
        if !(-90.0..=90.0).contains(&latitude) {
            debug!("rejecting latitude {latitude}");
            return Err(SunPosError::LatitudeOutOfRange);
        }
        if !(-180.0..=360.0).contains(&longitude) {
            debug!("rejecting longitude {longitude}");
            return Err(SunPosError::LongitudeOutOfRange);
        }
        Ok(Self { latitude, longitude })
    }
}

/// Errors returned by the validating constructors.
///
/// The position calculation itself never fails; these only come from
/// [`UtcInstant::new`] and [`Observer::new`].
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SunPosError {
    /// Year outside [`MIN_YEAR`]..=[`MAX_YEAR`]
    #[error("Year out of range")]
    YearOutOfRange,

    /// Month outside 1..=12
    #[error("Month out of range")]
    MonthOutOfRange,

    /// Day does not exist in the given month
    #[error("Day out of range")]
    DayOutOfRange,

    /// Hour, minute or second outside its range, or not finite
    #[error("Time of day out of range")]
    TimeOfDayOutOfRange,

    /// Latitude outside [-90, 90] degrees, or not finite
    #[error("Latitude out of range")]
    LatitudeOutOfRange,

    /// Longitude outside [-180, 360] degrees, or not finite
    #[error("Longitude out of range")]
    LongitudeOutOfRange,
}
