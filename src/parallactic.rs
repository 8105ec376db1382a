//! # Parallactic angle
//!
//! Computes the parallactic angle of an object from its hour angle, its declination, and
//! the observer's latitude, following Equation 14.1 of Jean Meeus' *Astronomical
//! Algorithms* (2nd edition).
//!
//! Atmospheric differential refraction smears an object's light along the great circle
//! through the object and the zenith (Filippenko 1982, PASP 94, 715), so a spectral slit
//! aligned with the parallactic angle loses the least flux. This is the quantity the
//! slit-angle solver in [`slit_angle`](crate::slit_angle) tries to match.

use crate::constants::{Degree, Hour, DEGREES_PER_HOUR, RADEG};
use crate::obsplan_errors::ObsplanError;

/// Parallactic angle of an object at a given hour angle.
///
/// The angle is measured in degrees, positive from North rotating toward East, and lies
/// in `[-180, 180]`. It is antisymmetric in the hour angle: the computation runs on
/// `|H|` and the sign of `H` is restored at the end. `atan` alone only determines the
/// angle modulo 180°; the sign of the denominator picks the correct half, adding 180°
/// when the object stands between the zenith and the pole.
///
/// Arguments
/// ---------
/// * `hour_angle`: object's hour angle in hours, negative east of the meridian
/// * `declination`: object's declination in degrees
/// * `latitude`: observer's geographic latitude in degrees
///   (see [`MAUNA_KEA_LATITUDE`](crate::constants::MAUNA_KEA_LATITUDE))
///
/// Return
/// ------
/// * The parallactic angle in degrees in `[-180, 180]`, or
///   [`ObsplanError::DomainError`] for a declination outside `[-90, 90]` or an hour
///   angle outside `[-12, 12]`.
pub fn parallactic_angle(
    hour_angle: Hour,
    declination: Degree,
    latitude: Degree,
) -> Result<Degree, ObsplanError> {
    if !(-90.0..=90.0).contains(&declination) {
        return Err(ObsplanError::DomainError(format!(
            "declination must lie in [-90, 90] degrees, got {declination}"
        )));
    }
    if !(-12.0..=12.0).contains(&hour_angle) {
        return Err(ObsplanError::DomainError(format!(
            "hour angle must lie in [-12, 12] hours, got {hour_angle}"
        )));
    }

    let sign = if hour_angle < 0.0 { -1.0 } else { 1.0 };
    let h = hour_angle.abs() * DEGREES_PER_HOUR * RADEG;
    let delta = declination * RADEG;
    let phi = latitude * RADEG;

    let denom = phi.tan() * delta.cos() - delta.sin() * h.cos();
    let mut q = (h.sin() / denom).atan() / RADEG;
    if denom < 0.0 {
        q += 180.0;
    }

    Ok(sign * q)
}
