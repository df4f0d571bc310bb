//! Ecliptic coordinates of the Sun from days elapsed since J2000.0.
//!
//! All angles are in radians and deliberately left unreduced: the linear
//! terms grow without bound and may exceed 2π. Everything downstream only
//! feeds them to periodic functions.

#[allow(unused_imports)] // will be unused on std targets
use core_maths::CoreFloat;

// Longitude of the Moon's ascending node, drives the nutation terms
const OMEGA_0: f64 = 2.1429;
const OMEGA_RATE: f64 = 0.001_039_459_4;

const MEAN_LONGITUDE_0: f64 = 4.895_063_0;
const MEAN_LONGITUDE_RATE: f64 = 0.017_202_791_698;

const MEAN_ANOMALY_0: f64 = 6.240_060_0;
const MEAN_ANOMALY_RATE: f64 = 0.017_201_969_9;

// Equation of centre, aberration and nutation in longitude
const CENTER_1: f64 = 0.033_416_07;
const CENTER_2: f64 = 0.000_348_94;
const ABERRATION: f64 = 0.000_113_4;
const NUTATION_LONGITUDE: f64 = 0.000_020_3;

const OBLIQUITY_0: f64 = 0.409_092_8;
const OBLIQUITY_RATE: f64 = 6.2140e-9;
const NUTATION_OBLIQUITY: f64 = 0.000_039_6;

/// The Sun's ecliptic position and the obliquity of the ecliptic, in radians.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct EclipticCoordinates {
    /// Longitude of the lunar ascending node
    pub omega: f64,
    /// Mean longitude of the Sun
    pub mean_longitude: f64,
    /// Mean anomaly of the Sun
    pub mean_anomaly: f64,
    /// Apparent ecliptic longitude of the Sun
    pub longitude: f64,
    /// Obliquity of the ecliptic
    pub obliquity: f64,
}

impl EclipticCoordinates {
    /// Evaluates the fitted series at `elapsed_days` since J2000.0.
    pub fn from_elapsed_days(elapsed_days: f64) -> Self {
        let d = elapsed_days;
        let omega = OMEGA_0 - OMEGA_RATE * d;
        let mean_longitude = MEAN_LONGITUDE_0 + MEAN_LONGITUDE_RATE * d;
        let mean_anomaly = MEAN_ANOMALY_0 + MEAN_ANOMALY_RATE * d;
        let longitude = mean_longitude + CENTER_1 * mean_anomaly.sin() + CENTER_2 * (2.0 * mean_anomaly).sin()
            - ABERRATION
            - NUTATION_LONGITUDE * omega.sin();
        let obliquity = OBLIQUITY_0 - OBLIQUITY_RATE * d + NUTATION_OBLIQUITY * omega.cos();
        Self {
            omega,
            mean_longitude,
            mean_anomaly,
            longitude,
            obliquity,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::f64::consts::TAU;

    #[test]
    fn at_epoch_terms_are_the_constants() {
        let e = EclipticCoordinates::from_elapsed_days(0.0);
        assert_eq!(e.omega, 2.1429);
        assert_eq!(e.mean_longitude, 4.8950630);
        assert_eq!(e.mean_anomaly, 6.2400600);
        let expected_longitude = 4.8950630 + 0.03341607 * 6.2400600_f64.sin() + 0.00034894 * 12.4801200_f64.sin()
            - 0.0001134
            - 0.0000203 * 2.1429_f64.sin();
        assert!((e.longitude - expected_longitude).abs() < 1e-15);
        assert!((e.obliquity - (0.4090928 + 0.0000396 * 2.1429_f64.cos())).abs() < 1e-15);
    }

    #[test]
    fn longitude_is_not_reduced() {
        // Twenty years on, the mean longitude has wound past many turns
        let e = EclipticCoordinates::from_elapsed_days(7305.0);
        assert!(e.mean_longitude > 10.0 * TAU);
        assert!(e.longitude > 10.0 * TAU);
    }

    #[test]
    fn obliquity_stays_near_23_44_degrees() {
        for d in [-20000.0, -3650.0, 0.0, 3650.0, 20000.0] {
            let e = EclipticCoordinates::from_elapsed_days(d);
            assert!((e.obliquity.to_degrees() - 23.44).abs() < 0.02, "d = {d}: {}", e.obliquity.to_degrees());
        }
    }

    #[test]
    fn longitude_advances_about_one_degree_per_day() {
        let a = EclipticCoordinates::from_elapsed_days(8572.0);
        let b = EclipticCoordinates::from_elapsed_days(8573.0);
        let step = (b.longitude - a.longitude).to_degrees();
        assert!((0.9..1.1).contains(&step), "step {step}");
    }
}
