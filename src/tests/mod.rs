extern crate std;

use crate::sun_position;
use core::f64::consts::{PI, TAU};

#[test]
fn j2000_noon_at_greenwich() {
    let pos = sun_position(2000, 1, 1, 12.0, 0.0, 0.0, 0.0, 0.0);
    assert!((pos.azimuth - 3.107_806_275_573_458_3).abs() < 1e-9);
    assert!((pos.zenith - 0.402_253_894_216_109).abs() < 1e-9);
}

#[test]
fn june_solstice_noon_on_null_island() {
    // The Sun stands over the Tropic of Cancer, so from the equator it is
    // about one obliquity north of the zenith.
    let pos = sun_position(2023, 6, 21, 12.0, 0.0, 0.0, 0.0, 0.0);
    assert!((pos.zenith - 0.409_158_162_964_042_9).abs() < 1e-9);
    assert!((pos.azimuth - 0.017_655_908_029_620_48).abs() < 1e-9);
    assert!((pos.zenith.to_degrees() - 23.44).abs() < 0.1);
}

#[test]
fn june_solstice_noon_on_tropic_is_near_overhead() {
    let pos = sun_position(2023, 6, 21, 12.0, 0.0, 0.0, 23.44, 0.0);
    assert!(pos.zenith < 0.01);
}

#[test]
fn northern_temperate_noon_is_due_south() {
    // Near local apparent noon in Almería on the June solstice
    let pos = sun_position(2023, 6, 21, 12.0, 11.0, 0.0, 37.0914, -2.3581);
    assert!((pos.azimuth - PI).abs() < 2.0_f64.to_radians(), "{}", pos.azimuth_degrees());
    assert!((pos.zenith_degrees() - (37.0914 - 23.44)).abs() < 0.5);
}

#[test]
fn published_algorithm_sample() {
    // Same output as an independent port of the published C code
    let pos = sun_position(1900, 1, 1, 0.0, 0.0, 0.0, 8.810983605709731, 50.80941535042398);
    assert!((pos.azimuth_degrees() - 112.824_776_919_019_5).abs() < 1e-9);
    assert!((pos.zenith_degrees() - 130.168_997_660_038_34).abs() < 1e-9);
}

#[test]
fn poles_do_not_produce_nan() {
    for latitude in [90.0, -90.0] {
        for month in 1..=12 {
            for hour in [0.0, 6.0, 12.0, 18.0] {
                let pos = sun_position(2023, month, 15, hour, 0.0, 0.0, latitude, 0.0);
                assert!(pos.azimuth.is_finite() && pos.zenith.is_finite(), "{latitude} {month} {hour}");
                assert!((0.0..TAU).contains(&pos.azimuth));
            }
        }
    }
}

#[test]
fn nan_input_propagates() {
    let pos = sun_position(2023, 6, 21, f64::NAN, 0.0, 0.0, 10.0, 10.0);
    assert!(pos.zenith.is_nan());
    let pos = sun_position(2023, 6, 21, 12.0, 0.0, 0.0, f64::NAN, 10.0);
    assert!(pos.zenith.is_nan());
}

#[test]
fn longitude_conventions_agree() {
    // 74°W given as -74 or as 286 east
    let west = sun_position(2024, 10, 31, 18.0, 15.0, 30.0, 40.7, -74.0);
    let east = sun_position(2024, 10, 31, 18.0, 15.0, 30.0, 40.7, 286.0);
    assert!((west.azimuth - east.azimuth).abs() < 1e-9);
    assert!((west.zenith - east.zenith).abs() < 1e-9);
}
