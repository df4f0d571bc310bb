#[allow(unused_imports)] // will be unused on std targets
use core_maths::CoreFloat;

use crate::ecliptic::EclipticCoordinates;
use crate::math::{clamped_asin, wrap_two_pi};

/// Geocentric equatorial coordinates of the Sun, in radians.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct EquatorialCoordinates {
    /// Right ascension in `[0, 2π)`
    pub right_ascension: f64,
    /// Declination in `[-π/2, π/2]`
    pub declination: f64,
}

impl EquatorialCoordinates {
    /// Rotates the ecliptic longitude by the obliquity onto the celestial equator.
    ///
    /// The Sun's ecliptic latitude is taken as zero. Right ascension uses the
    /// two-argument `atan2` so the quadrant survives, then is wrapped into `[0, 2π)`.
    pub fn from_ecliptic(ecliptic: &EclipticCoordinates) -> Self {
        let sin_longitude = ecliptic.longitude.sin();
        let y = ecliptic.obliquity.cos() * sin_longitude;
        let x = ecliptic.longitude.cos();
        let right_ascension = wrap_two_pi(y.atan2(x));
        let declination = clamped_asin(ecliptic.obliquity.sin() * sin_longitude);
        Self {
            right_ascension,
            declination,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::f64::consts::{FRAC_PI_2, PI, TAU};

    fn ecliptic(longitude: f64) -> EclipticCoordinates {
        EclipticCoordinates {
            omega: 0.0,
            mean_longitude: longitude,
            mean_anomaly: 0.0,
            longitude,
            obliquity: 0.409_092_8,
        }
    }

    #[test]
    fn equinoxes_and_solstices() {
        let march = EquatorialCoordinates::from_ecliptic(&ecliptic(0.0));
        assert_eq!(march.right_ascension, 0.0);
        assert_eq!(march.declination, 0.0);

        let june = EquatorialCoordinates::from_ecliptic(&ecliptic(FRAC_PI_2));
        assert!((june.right_ascension - FRAC_PI_2).abs() < 1e-12);
        assert!((june.declination - 0.409_092_8).abs() < 1e-12);

        let september = EquatorialCoordinates::from_ecliptic(&ecliptic(PI));
        assert!((september.right_ascension - PI).abs() < 1e-12);
        assert!(september.declination.abs() < 1e-12);

        let december = EquatorialCoordinates::from_ecliptic(&ecliptic(1.5 * PI));
        assert!((december.right_ascension - 1.5 * PI).abs() < 1e-12);
        assert!((december.declination + 0.409_092_8).abs() < 1e-12);
    }

    #[test]
    fn right_ascension_keeps_quadrant() {
        // atan(y/x) would fold the third quadrant onto the first
        let q3 = EquatorialCoordinates::from_ecliptic(&ecliptic(PI + 0.5));
        assert!(q3.right_ascension > PI && q3.right_ascension < 1.5 * PI);
        let q4 = EquatorialCoordinates::from_ecliptic(&ecliptic(-0.5));
        assert!(q4.right_ascension > 1.5 * PI && q4.right_ascension < TAU);
    }

    #[test]
    fn unreduced_longitude_gives_same_result() {
        let base = EquatorialCoordinates::from_ecliptic(&ecliptic(1.2));
        let wound = EquatorialCoordinates::from_ecliptic(&ecliptic(1.2 + 40.0 * TAU));
        assert!((base.right_ascension - wound.right_ascension).abs() < 1e-11);
        assert!((base.declination - wound.declination).abs() < 1e-11);
    }
}
