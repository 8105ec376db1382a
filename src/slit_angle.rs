//! # Optimal slit position angle
//!
//! Chooses the slit position angle closest to an object's parallactic angle while
//! honoring the mechanical bounds the spectrograph places on the slit orientation
//! relative to the mask.
//!
//! ## Overview
//! -----------------
//! The ideal slit PA equals the parallactic angle (see [`parallactic`](crate::parallactic)),
//! but the mask-design software only accepts slits whose angle to the mask's own PA lies
//! in a closed band `[min_offset, max_offset]`. The solver folds both angles into a
//! half-circle — a slit has no direction, so PA and PA + 180° cut the same aperture —
//! and then clamps the parallactic angle to the nearest edge of the allowed band on
//! whichever side of the mask angle it falls.

use crate::constants::{Degree, Hour};
use crate::obsplan_errors::ObsplanError;
use crate::parallactic::parallactic_angle;

/// Best allowable slit position angle for an object observed at a given hour angle.
///
/// Arguments
/// ---------
/// * `mask_pa`: the mask's position angle in degrees, must lie in `[0, 360]`
/// * `hour_angle`: object's hour angle in hours, negative east of the meridian
/// * `declination`: object's declination in degrees
/// * `latitude`: observer's geographic latitude in degrees
/// * `min_offset`: minimum |slit PA − mask PA| accepted by the instrument \[degrees\]
///   (see [`DEFAULT_MIN_SLIT_OFFSET`](crate::constants::DEFAULT_MIN_SLIT_OFFSET))
/// * `max_offset`: maximum |slit PA − mask PA| accepted by the instrument \[degrees\]
///   (see [`DEFAULT_MAX_SLIT_OFFSET`](crate::constants::DEFAULT_MAX_SLIT_OFFSET))
///
/// Return
/// ------
/// * The slit PA in degrees: the parallactic angle itself when it already lies in the
///   allowed band, otherwise the nearest band edge on the object's side of the mask
///   angle. [`ObsplanError::DomainError`] for an out-of-range `mask_pa` or hour
///   angle/declination, [`ObsplanError::InternalError`] if the parallactic angle ever
///   leaves `[-180, 180]`.
pub fn optimal_slit_pa(
    mask_pa: Degree,
    hour_angle: Hour,
    declination: Degree,
    latitude: Degree,
    min_offset: Degree,
    max_offset: Degree,
) -> Result<Degree, ObsplanError> {
    if !(0.0..=360.0).contains(&mask_pa) {
        return Err(ObsplanError::DomainError(format!(
            "mask PA must lie in [0, 360] degrees, got {mask_pa}; check the ds9 region \
             angle"
        )));
    }

    let mut pa_obj = parallactic_angle(hour_angle, declination, latitude)?;
    if !(-180.0..=180.0).contains(&pa_obj) {
        return Err(ObsplanError::InternalError(format!(
            "parallactic angle {pa_obj} outside [-180, 180]"
        )));
    }

    // fold both angles into a half circle: a slit is orientation-symmetric under 180°.
    // The mask itself is not (offcenter guider camera), so mask_pa is folded into a
    // separate working value.
    if pa_obj < 0.0 {
        pa_obj += 180.0;
    }
    let mask_prime = if mask_pa > 180.0 {
        mask_pa - 180.0
    } else {
        mask_pa
    };

    let d = mask_prime - pa_obj;
    let pa_slit = if d >= 0.0 {
        if d < min_offset {
            mask_prime - min_offset
        } else if d <= max_offset {
            pa_obj
        } else {
            mask_prime - max_offset
        }
    } else if -d < min_offset {
        mask_prime + min_offset
    } else if -d <= max_offset {
        pa_obj
    } else {
        mask_prime + max_offset
    };

    Ok(pa_slit)
}

#[cfg(test)]
mod slit_angle_test {
    use super::*;
    use crate::constants::{
        DEFAULT_MAX_SLIT_OFFSET, DEFAULT_MIN_SLIT_OFFSET, MAUNA_KEA_LATITUDE,
    };
    use approx::assert_relative_eq;

    fn solve(mask_pa: f64, h: f64, delta: f64) -> f64 {
        optimal_slit_pa(
            mask_pa,
            h,
            delta,
            MAUNA_KEA_LATITUDE,
            DEFAULT_MIN_SLIT_OFFSET,
            DEFAULT_MAX_SLIT_OFFSET,
        )
        .unwrap()
    }

    fn folded_pa_obj(h: f64, delta: f64) -> f64 {
        let q = parallactic_angle(h, delta, MAUNA_KEA_LATITUDE).unwrap();
        if q < 0.0 {
            q + 180.0
        } else {
            q
        }
    }

    #[test]
    fn test_in_band_returns_parallactic_angle() {
        // delta south of zenith at H=-2h gives a folded pa_obj well away from 90
        let pa_obj = folded_pa_obj(-2.0, 10.0);
        let mask_pa = pa_obj + 15.0;
        assert_relative_eq!(solve(mask_pa, -2.0, 10.0), pa_obj);

        // object ahead of the mask angle works symmetrically
        let mask_pa = pa_obj - 15.0;
        assert_relative_eq!(solve(mask_pa, -2.0, 10.0), pa_obj);
    }

    #[test]
    fn test_too_close_clamps_to_min_offset() {
        let pa_obj = folded_pa_obj(-2.0, 10.0);

        let mask_pa = pa_obj + 2.0;
        assert_relative_eq!(solve(mask_pa, -2.0, 10.0), mask_pa - 5.0);

        let mask_pa = pa_obj - 2.0;
        assert_relative_eq!(solve(mask_pa, -2.0, 10.0), mask_pa + 5.0);
    }

    #[test]
    fn test_too_far_clamps_to_max_offset() {
        let pa_obj = folded_pa_obj(-2.0, 10.0);

        let mask_pa = pa_obj + 50.0;
        assert_relative_eq!(solve(mask_pa, -2.0, 10.0), mask_pa - 30.0);

        let mask_pa = pa_obj - 50.0;
        assert_relative_eq!(solve(mask_pa, -2.0, 10.0), mask_pa + 30.0);
    }

    #[test]
    fn test_mask_pa_above_180_is_folded() {
        let pa_obj = folded_pa_obj(-2.0, 10.0);
        let mask_pa = pa_obj + 15.0;
        // adding 180 to the mask angle must not change the outcome
        assert_relative_eq!(solve(mask_pa + 180.0, -2.0, 10.0), solve(mask_pa, -2.0, 10.0));
    }

    #[test]
    fn test_band_invariant_holds_everywhere() {
        for mask_pa in [0.0, 30.0, 90.0, 150.0, 179.0, 200.0, 275.0, 359.0] {
            for h in [-5.0, -2.0, -0.5, 0.5, 2.0, 5.0] {
                for delta in [-40.0, 0.0, 10.0, 45.0] {
                    let pa_slit = solve(mask_pa, h, delta);
                    let mask_prime = if mask_pa > 180.0 {
                        mask_pa - 180.0
                    } else {
                        mask_pa
                    };
                    let pa_obj = folded_pa_obj(h, delta);
                    let sep = (pa_slit - mask_prime).abs();
                    let obj_sep = (pa_obj - mask_prime).abs();
                    if (5.0..=30.0).contains(&obj_sep) {
                        assert_relative_eq!(pa_slit, pa_obj);
                    } else {
                        assert!(
                            (5.0..=30.0).contains(&sep),
                            "slit PA {pa_slit} out of band for mask {mask_pa}, H={h}, \
                             delta={delta}"
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn test_mask_pa_domain_guard() {
        assert!(matches!(
            optimal_slit_pa(-1.0, 0.0, 10.0, MAUNA_KEA_LATITUDE, 5.0, 30.0),
            Err(ObsplanError::DomainError(_))
        ));
        assert!(matches!(
            optimal_slit_pa(360.1, 0.0, 10.0, MAUNA_KEA_LATITUDE, 5.0, 30.0),
            Err(ObsplanError::DomainError(_))
        ));
        // 360 itself is accepted and folded
        assert!(optimal_slit_pa(360.0, -2.0, 10.0, MAUNA_KEA_LATITUDE, 5.0, 30.0).is_ok());
    }
}
