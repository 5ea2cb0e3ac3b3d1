//! Angle and rounding helpers shared by the distance and bearing engines.

/// Normalise an angle in degrees into `[0, 360)`.
///
/// Uses `(deg + 360) % 360` and folds the floating-point edge case where a
/// tiny negative input rounds up to exactly 360.
#[inline]
pub fn normalize_degrees(deg: f64) -> f64 {
    let d = (deg % 360.0 + 360.0) % 360.0;
    if d >= 360.0 { 0.0 } else { d }
}

/// Wrap a longitude in degrees into `[-180, 180]`.
///
/// Values already in range are returned unchanged, so `180.0` stays `180.0`.
#[inline]
pub fn normalize_longitude(deg: f64) -> f64 {
    if (-180.0..=180.0).contains(&deg) {
        return deg;
    }
    let wrapped = (deg + 180.0).rem_euclid(360.0) - 180.0;
    if wrapped < -180.0 { wrapped + 360.0 } else { wrapped }
}

/// Round `value` to `places` decimal places (half away from zero).
#[inline]
pub fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}
