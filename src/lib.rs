//! # PSA Sun Position
//!
//! Apparent position of the Sun (azimuth and zenith angle) for an observer on Earth at a UTC instant,
//! using the closed-form PSA algorithm of Blanco-Muriel et al. (Solar Energy 70(5), 2001).
//!
//! The calculation is a fixed chain of five stages, each exposed as its own type:
//!
//! 1. [`JulianDate`]: calendar date and UT time to Julian Date and days since J2000.0
//! 2. [`EclipticCoordinates`]: mean longitude, mean anomaly, ecliptic longitude and obliquity
//! 3. [`EquatorialCoordinates`]: right ascension and declination
//! 4. [`SiderealTime`] and [`HorizontalCoordinates`]: hour angle, azimuth and geocentric zenith angle
//! 5. [`parallax::correct_zenith`]: first-order parallax correction
//!
//! The fitted constants give an accuracy of about half an arcminute around the year 2000 and
//! degrade slowly away from it. Atmospheric refraction is not modelled.
//!
//! ## Basic Usage
//!
//! ```
//! use psa_sunpos::sun_position;
//!
//! // 2023 June solstice, 12:00 UTC, Plataforma Solar de Almería (37.09°N, 2.36°W)
//! let position = sun_position(2023, 6, 21, 12.0, 0.0, 0.0, 37.0914, -2.3581);
//! println!("Azimuth: {:.2}°", position.azimuth_degrees());
//! println!("Zenith: {:.2}°", position.zenith_degrees());
//! assert!(position.is_above_horizon());
//! ```
//!
//! With chrono and validated inputs:
//!
//! ```
//! use chrono::{TimeZone, Utc};
//! use psa_sunpos::{sun_position_at, Observer};
//!
//! let observer = Observer::new(40.7128, -74.006).unwrap();
//! let datetime = Utc.with_ymd_and_hms(2024, 3, 20, 17, 0, 0).unwrap();
//! let position = sun_position_at(&datetime, &observer);
//! assert!(position.azimuth >= 0.0 && position.azimuth < std::f64::consts::TAU);
//! ```
#![no_std]

pub mod ecliptic;
pub mod equatorial;
pub mod horizontal;
mod math;
pub mod parallax;
pub mod time;
mod types;

#[cfg(test)]
mod tests;

use core::cell::OnceCell;

use chrono::{DateTime, TimeZone};
use log::trace;

pub use crate::ecliptic::EclipticCoordinates;
pub use crate::equatorial::EquatorialCoordinates;
pub use crate::horizontal::{HorizontalCoordinates, SiderealTime};
pub use crate::time::{julian_day_number, JulianDate, J2000_JD};
pub use crate::types::{Observer, SolarPosition, SunPosError, UtcInstant, MAX_YEAR, MIN_YEAR};

/// Computes the Sun's azimuth and zenith angle.
///
/// # Arguments
///
/// * `year`, `month`, `day` - Gregorian calendar date in UTC
/// * `hours`, `minutes`, `seconds` - UTC time of day
/// * `latitude` - degrees, positive North
/// * `longitude` - degrees, positive East
///
/// # Returns
///
/// A [`SolarPosition`] with azimuth in `[0, 2π)` clockwise from North and the
/// parallax-corrected zenith angle, both in radians.
///
/// Inputs are not checked. Out-of-range values give a well-defined but
/// physically meaningless result, and `NaN` inputs give `NaN` outputs. Build
/// an [`UtcInstant`] and [`Observer`] through their constructors and use
/// [`SunCalculator`] when validation is wanted.
///
/// # Example
///
/// ```
/// use psa_sunpos::sun_position;
///
/// let pos = sun_position(1900, 1, 1, 0.0, 0.0, 0.0, 8.810983605709731, 50.80941535042398);
/// assert!((pos.azimuth_degrees() - 112.8247769190195).abs() < 1e-9);
/// assert!((pos.zenith_degrees() - 130.16899766003834).abs() < 1e-9);
/// ```
#[allow(clippy::too_many_arguments)]
pub fn sun_position(
    year: i32,
    month: u32,
    day: u32,
    hours: f64,
    minutes: f64,
    seconds: f64,
    latitude: f64,
    longitude: f64,
) -> SolarPosition {
    let instant = UtcInstant {
        year,
        month,
        day,
        hour: hours,
        minute: minutes,
        second: seconds,
    };
    let observer = Observer { latitude, longitude };
    SunCalculator::new(instant, observer).position()
}

/// Computes the Sun's azimuth and zenith angle for a chrono datetime.
///
/// The datetime may carry any time zone; it is converted to UTC before the
/// calendar components are read. See [`sun_position`] for the result.
pub fn sun_position_at<Tz: TimeZone>(datetime: &DateTime<Tz>, observer: &Observer) -> SolarPosition {
    SunCalculator::from_datetime(datetime, *observer).position()
}

/// Calculator for one instant and one observer that exposes every stage.
///
/// Each stage is computed on first access and cached, so asking for the
/// final [`position`](Self::position) after inspecting, say, the
/// [`equatorial`](Self::equatorial) coordinates does not repeat any work.
///
/// # Example
///
/// ```
/// use psa_sunpos::{Observer, SunCalculator, UtcInstant};
///
/// let instant = UtcInstant::new(2024, 6, 20, 20.0, 51.0, 0.0)?;
/// let observer = Observer::new(0.0, 0.0)?;
/// let calc = SunCalculator::new(instant, observer);
///
/// // Close to the June solstice the declination is near +23.44°
/// let declination = calc.equatorial().declination.to_degrees();
/// assert!((declination - 23.44).abs() < 0.05);
///
/// let position = calc.position();
/// assert!(position.zenith > 0.0);
/// # Ok::<(), psa_sunpos::SunPosError>(())
/// ```
#[derive(Clone, Debug)]
pub struct SunCalculator {
    instant: UtcInstant,
    observer: Observer,
    julian_date: OnceCell<JulianDate>,
    ecliptic: OnceCell<EclipticCoordinates>,
    equatorial: OnceCell<EquatorialCoordinates>,
    sidereal_time: OnceCell<SiderealTime>,
    horizontal: OnceCell<HorizontalCoordinates>,
    position: OnceCell<SolarPosition>,
}

impl SunCalculator {
    /// Creates a calculator. Nothing is computed until a stage is requested.
    pub fn new(instant: UtcInstant, observer: Observer) -> Self {
        Self {
            instant,
            observer,
            julian_date: OnceCell::new(),
            ecliptic: OnceCell::new(),
            equatorial: OnceCell::new(),
            sidereal_time: OnceCell::new(),
            horizontal: OnceCell::new(),
            position: OnceCell::new(),
        }
    }

    /// Creates a calculator for a chrono datetime in any time zone.
    pub fn from_datetime<Tz: TimeZone>(datetime: &DateTime<Tz>, observer: Observer) -> Self {
        Self::new(UtcInstant::from_datetime(datetime), observer)
    }

    /// The instant this calculator was built for.
    pub fn instant(&self) -> &UtcInstant {
        &self.instant
    }

    /// The observer this calculator was built for.
    pub fn observer(&self) -> &Observer {
        &self.observer
    }

    /// Stage 1: Julian Date and days since J2000.0.
    pub fn julian_date(&self) -> &JulianDate {
        self.julian_date.get_or_init(|| JulianDate::from_instant(&self.instant))
    }

    /// Stage 2: ecliptic longitude and obliquity, unreduced.
    pub fn ecliptic(&self) -> &EclipticCoordinates {
        self.ecliptic
            .get_or_init(|| EclipticCoordinates::from_elapsed_days(self.julian_date().elapsed_days))
    }

    /// Stage 3: right ascension and declination.
    pub fn equatorial(&self) -> &EquatorialCoordinates {
        self.equatorial
            .get_or_init(|| EquatorialCoordinates::from_ecliptic(self.ecliptic()))
    }

    /// Greenwich and local mean sidereal time.
    pub fn sidereal_time(&self) -> &SiderealTime {
        self.sidereal_time.get_or_init(|| {
            let jd = self.julian_date();
            SiderealTime::new(jd.elapsed_days, jd.decimal_hours, self.observer.longitude)
        })
    }

    /// Stage 4: hour angle, azimuth and geocentric zenith angle.
    pub fn horizontal(&self) -> &HorizontalCoordinates {
        self.horizontal.get_or_init(|| {
            HorizontalCoordinates::new(self.sidereal_time(), self.equatorial(), self.observer.latitude)
        })
    }

    /// Stage 5: the final, parallax-corrected solar position.
    pub fn position(&self) -> SolarPosition {
        *self.position.get_or_init(|| {
            let jd = self.julian_date();
            let ecliptic = self.ecliptic();
            let equatorial = self.equatorial();
            let horizontal = self.horizontal();
            trace!(
                "jd={} elapsed={} ecliptic_lon={} obliquity={}",
                jd.julian_date,
                jd.elapsed_days,
                ecliptic.longitude,
                ecliptic.obliquity
            );
            trace!(
                "ra={} dec={} hour_angle={} azimuth={} zenith={}",
                equatorial.right_ascension,
                equatorial.declination,
                horizontal.hour_angle,
                horizontal.azimuth,
                horizontal.zenith
            );
            SolarPosition {
                azimuth: horizontal.azimuth,
                zenith: parallax::correct_zenith(horizontal.zenith),
            }
        })
    }
}
