//! Local horizontal coordinates: sidereal time, hour angle, azimuth and zenith.

use core::f64::consts::PI;

#[allow(unused_imports)] // will be unused on std targets
use core_maths::CoreFloat;

use crate::equatorial::EquatorialCoordinates;
use crate::math::{clamped_acos, wrap_two_pi};

const GMST_0: f64 = 6.697_424_324_2;
const GMST_RATE: f64 = 0.065_709_828_3;
// 360 degrees per 24 sidereal hours
const DEGREES_PER_HOUR: f64 = 15.0;
const RAD: f64 = PI / 180.0;

/// Mean sidereal time at Greenwich and at the observer.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SiderealTime {
    /// Greenwich mean sidereal time in hours, not reduced to `[0, 24)`
    pub greenwich_hours: f64,
    /// Local mean sidereal time in radians, not reduced to `[0, 2π)`
    pub local_radians: f64,
}

impl SiderealTime {
    /// Sidereal time for `elapsed_days` since J2000.0, at UT `decimal_hours`,
    /// for an observer at `longitude` degrees east.
    ///
    /// The longitude is added as given; west longitudes must be negative
    /// (or expressed in `[180, 360)`).
    pub fn new(elapsed_days: f64, decimal_hours: f64, longitude: f64) -> Self {
        let greenwich_hours = GMST_0 + GMST_RATE * elapsed_days + decimal_hours;
        let local_radians = (greenwich_hours * DEGREES_PER_HOUR + longitude) * RAD;
        Self {
            greenwich_hours,
            local_radians,
        }
    }
}

/// Sun position in the observer's frame before parallax correction, radians.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct HorizontalCoordinates {
    /// Local hour angle, not reduced
    pub hour_angle: f64,
    /// Azimuth in `[0, 2π)`, clockwise from North
    pub azimuth: f64,
    /// Geocentric zenith angle in `[0, π]`
    pub zenith: f64,
}

impl HorizontalCoordinates {
    /// Projects the Sun's equatorial position onto the horizon of an observer
    /// at `latitude` degrees.
    ///
    /// At the poles `cos(latitude)` vanishes; the azimuth then degenerates
    /// to a function of the hour angle alone but stays finite.
    pub fn new(sidereal: &SiderealTime, equatorial: &EquatorialCoordinates, latitude: f64) -> Self {
        let hour_angle = sidereal.local_radians - equatorial.right_ascension;
        let latitude = latitude * RAD;
        let cos_latitude = latitude.cos();
        let sin_latitude = latitude.sin();
        let cos_hour_angle = hour_angle.cos();

        let zenith = clamped_acos(
            cos_latitude * cos_hour_angle * equatorial.declination.cos()
                + equatorial.declination.sin() * sin_latitude,
        );

        let y = -hour_angle.sin();
        let x = equatorial.declination.tan() * cos_latitude - sin_latitude * cos_hour_angle;
        let azimuth = wrap_two_pi(y.atan2(x));

        Self {
            hour_angle,
            azimuth,
            zenith,
        }
    }
}
