//! # Slit length from galaxy shape
//!
//! Projects a galaxy's elliptical extent onto the chosen slit axis and pads both slit
//! ends with sky, yielding the `len1`/`len2` values the mask-design software expects.

use crate::constants::{ArcSec, Degree, RADEG};
use crate::obsplan_errors::ObsplanError;

/// Sky padding on either end of a slit, in arcseconds.
///
/// `near` pads the `len1` end, `far` the `len2` end.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SkyBuffer {
    pub near: ArcSec,
    pub far: ArcSec,
}

impl SkyBuffer {
    pub fn new(near: ArcSec, far: ArcSec) -> Self {
        SkyBuffer { near, far }
    }

    /// Equal sky on both slit ends.
    pub fn symmetric(sky: ArcSec) -> Self {
        SkyBuffer {
            near: sky,
            far: sky,
        }
    }
}

impl Default for SkyBuffer {
    /// 1.5 arcseconds of sky on each end, the usual faint-galaxy choice.
    fn default() -> Self {
        SkyBuffer::symmetric(1.5)
    }
}

/// Slit half-lengths for one object.
///
/// A galaxy with neither minor axis nor position angle is treated as circular: its
/// projected half-size is `major` for any slit angle. A galaxy with both is an ellipse,
/// whose radius along the slit axis is
/// `sqrt((major·cos(pa_slit − pa_gal))² + (minor·sin(pa_slit − pa_gal))²)`.
///
/// Arguments
/// ---------
/// * `slit_pa`: position angle of the slit's long axis \[degrees\]
/// * `sky`: sky padding added to each slit end \[arcsec\]
/// * `major`: galaxy radius along its major axis \[arcsec\]
/// * `minor`: galaxy radius along its minor axis \[arcsec\], `None` for a circular galaxy
/// * `galaxy_pa`: position angle of the galaxy's major axis \[degrees\], `None` for a
///   circular galaxy
///
/// Return
/// ------
/// * `(len1, len2)` in arcseconds, or [`ObsplanError::PartialGalaxyShape`] when exactly
///   one of `minor` and `galaxy_pa` is given.
pub fn slit_length(
    slit_pa: Degree,
    sky: SkyBuffer,
    major: ArcSec,
    minor: Option<ArcSec>,
    galaxy_pa: Option<Degree>,
) -> Result<(ArcSec, ArcSec), ObsplanError> {
    let radius = match (minor, galaxy_pa) {
        (None, None) => major,
        (Some(minor), Some(galaxy_pa)) => {
            let offset = (slit_pa - galaxy_pa) * RADEG;
            ((major * offset.cos()).powi(2) + (minor * offset.sin()).powi(2)).sqrt()
        }
        _ => return Err(ObsplanError::PartialGalaxyShape),
    };
    Ok((radius + sky.near, radius + sky.far))
}

/// Slit half-lengths over a catalog slice sharing one slit angle.
///
/// `minor` and `galaxy_pa`, when given, must match `major` in length; all objects are
/// then elliptical. Omitting both treats every object as circular.
///
/// Return
/// ------
/// * One `(len1, len2)` per object, or [`ObsplanError::MismatchedArrayLengths`] /
///   [`ObsplanError::PartialGalaxyShape`] on malformed input.
pub fn slit_lengths(
    slit_pa: Degree,
    sky: SkyBuffer,
    major: &[ArcSec],
    minor: Option<&[ArcSec]>,
    galaxy_pa: Option<&[Degree]>,
) -> Result<Vec<(ArcSec, ArcSec)>, ObsplanError> {
    for axis in [minor, galaxy_pa].into_iter().flatten() {
        if axis.len() != major.len() {
            return Err(ObsplanError::MismatchedArrayLengths(major.len(), axis.len()));
        }
    }

    major
        .iter()
        .enumerate()
        .map(|(i, &a)| {
            slit_length(
                slit_pa,
                sky,
                a,
                minor.map(|b| b[i]),
                galaxy_pa.map(|pa| pa[i]),
            )
        })
        .collect()
}
