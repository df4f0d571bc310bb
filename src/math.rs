use core::f64::consts::TAU;

#[allow(unused_imports)] // will be unused on std targets
use core_maths::CoreFloat;

/// Integer division that truncates toward zero.
///
/// The day-number formula depends on this rounding for its negative
/// intermediate `(month - 14) / 12`, which must be `-1` for January and
/// February and `0` otherwise. Floor division gives `-2` and `-1` and
/// shifts every date.
///
/// # Examples
///
/// ```
/// # fn div_trunc(a: i64, b: i64) -> i64 { a / b }
/// assert_eq!(div_trunc(-13, 12), -1); // floor would give -2
/// assert_eq!(div_trunc(-11, 12), 0);  // floor would give -1
/// assert_eq!(div_trunc(9933339, 4), 2483334);
/// ```
pub(crate) const fn div_trunc(numerator: i64, denominator: i64) -> i64 {
    // `/` on Rust integers is defined to round toward zero.
    numerator / denominator
}

/// Wraps the output of `atan2` (range `(-π, π]`) into `[0, 2π)`.
///
/// Only negative angles are shifted, matching how right ascension and
/// azimuth are normalized. A negative angle so small that adding 2π rounds
/// to exactly 2π maps to 0. `NaN` passes through.
pub(crate) fn wrap_two_pi(angle: f64) -> f64 {
    if angle >= 0.0 || angle.is_nan() {
        return angle;
    }
    let wrapped = angle + TAU;
    if wrapped >= TAU {
        0.0
    } else {
        wrapped
    }
}

/// `asin` with its argument clamped to `[-1, 1]`.
///
/// Rounding can push a mathematically bounded product a few ulps past ±1,
/// which would turn the result into `NaN`. A `NaN` argument stays `NaN`.
pub(crate) fn clamped_asin(x: f64) -> f64 {
    x.clamp(-1.0, 1.0).asin()
}

/// `acos` with its argument clamped to `[-1, 1]`. See [`clamped_asin`].
pub(crate) fn clamped_acos(x: f64) -> f64 {
    x.clamp(-1.0, 1.0).acos()
}
