//! # Mask footprint containment
//!
//! Rotates catalog coordinates into the mask-centered frame and tests them against the
//! rectangular footprint of a [`MaskRegion`](crate::mask_region::MaskRegion).
//!
//! ## Frames & conventions
//! -----------------
//! The mask frame is a tangent-plane approximation centered on the mask: offsets from the
//! mask center in degrees, with the RA offset scaled by `cos(dec_center)` so that both axes
//! measure true angular distance, then rotated by the mask's position angle. The masks are
//! a few arcminutes across, so the flat approximation is well within slit tolerances.
//!
//! Rotating the *coordinates* into the mask frame is the inverse of rotating the mask onto
//! the sky, which for the offset vector `(dx, dy)` is the plain 2-D rotation by the mask
//! angle applied here via [`Rotation2`].

use nalgebra::{Rotation2, Vector2};

use crate::constants::{Degree, ARCSEC_PER_DEGREE, RADEG};
use crate::mask_region::MaskRegion;
use crate::obsplan_errors::ObsplanError;

/// Classify catalog objects as inside or outside the mask footprint.
///
/// Objects exactly on the footprint boundary are included.
///
/// Arguments
/// ---------
/// * `region`: the mask footprint
/// * `ra`: object right ascensions \[degrees\]
/// * `dec`: object declinations \[degrees\], same length as `ra`
///
/// Return
/// ------
/// * One `bool` per object (`true` = inside), or
///   [`ObsplanError::MismatchedArrayLengths`] if the slices disagree in length.
pub fn containment_mask(
    region: &MaskRegion,
    ra: &[Degree],
    dec: &[Degree],
) -> Result<Vec<bool>, ObsplanError> {
    if ra.len() != dec.len() {
        return Err(ObsplanError::MismatchedArrayLengths(ra.len(), dec.len()));
    }

    let rot = mask_frame_rotation(region);
    let half_width = region.width / (2.0 * ARCSEC_PER_DEGREE);
    let half_height = region.height / (2.0 * ARCSEC_PER_DEGREE);
    let cos_dec = (region.center_dec * RADEG).cos();

    Ok(ra
        .iter()
        .zip(dec)
        .map(|(&ra_i, &dec_i)| {
            let offset = Vector2::new(
                (ra_i - region.center_ra) * cos_dec,
                dec_i - region.center_dec,
            );
            let primed = rot * offset;
            primed.x.abs() <= half_width && primed.y.abs() <= half_height
        })
        .collect())
}

/// Test a single sky position against the mask footprint.
pub fn contains(region: &MaskRegion, ra: Degree, dec: Degree) -> bool {
    let rot = mask_frame_rotation(region);
    let cos_dec = (region.center_dec * RADEG).cos();
    let primed = rot * Vector2::new((ra - region.center_ra) * cos_dec, dec - region.center_dec);
    primed.x.abs() <= region.width / (2.0 * ARCSEC_PER_DEGREE)
        && primed.y.abs() <= region.height / (2.0 * ARCSEC_PER_DEGREE)
}

/// Rotation taking tangent-plane offsets into the mask's primed frame.
fn mask_frame_rotation(region: &MaskRegion) -> Rotation2<f64> {
    Rotation2::new(region.angle * RADEG)
}
