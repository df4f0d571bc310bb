#[allow(unused_imports)] // will be unused on std targets
use core_maths::CoreFloat;

/// Mean radius of the Earth in km.
pub const EARTH_MEAN_RADIUS_KM: f64 = 6371.01;
/// Astronomical unit in km.
pub const ASTRONOMICAL_UNIT_KM: f64 = 149_597_890.0;

/// Parallax in zenith angle for a geocentric `zenith` (radians).
///
/// First-order term only, about 8.8 arcseconds at the horizon. The observer
/// is assumed to sit on the mean sphere, so altitude above sea level plays
/// no part.
pub fn parallax(zenith: f64) -> f64 {
    (EARTH_MEAN_RADIUS_KM / ASTRONOMICAL_UNIT_KM) * zenith.sin()
}

/// Topocentric zenith angle: `zenith + parallax(zenith)`.
pub fn correct_zenith(zenith: f64) -> f64 {
    zenith + parallax(zenith)
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::f64::consts::{FRAC_PI_2, PI};

    #[test]
    fn no_parallax_overhead() {
        assert_eq!(parallax(0.0), 0.0);
        assert_eq!(correct_zenith(0.0), 0.0);
    }

    #[test]
    fn horizon_parallax_is_about_8_8_arcseconds() {
        let arcsec = parallax(FRAC_PI_2).to_degrees() * 3600.0;
        assert!((arcsec - 8.784).abs() < 0.01, "{arcsec}");
    }

    #[test]
    fn correction_only_increases_zenith_above_and_below_horizon() {
        for z in [0.1, 0.5, 1.0, 1.5, 2.0, 3.0] {
            assert!(correct_zenith(z) > z);
        }
        assert!(correct_zenith(PI) - PI < 1e-15);
    }
}
