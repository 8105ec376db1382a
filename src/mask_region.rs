//! # Slit-mask footprint definition
//!
//! Parses the ds9 region file describing the slit-mask footprint into a [`MaskRegion`].
//!
//! ## Overview
//! -----------------
//! The mask is a single rotated rectangle on the sky. It is drawn in ds9 with the
//! Coordinate/WCS/Degrees and Size/WCS/Arcmin options, which produces a line of the form
//!
//! ```text
//! box(260.743,30.521,300",966",45)
//! ```
//!
//! i.e. center RA and Dec in degrees, width and height in arcseconds, and the mask's own
//! position angle in degrees (+CCW from North towards East; the guider camera sits in the
//! North-East quadrant at angle 0).
//!
//! ## Error Handling
//! -----------------
//! A file without a parsable `box(...)` line yields
//! [`ObsplanError::RegionParseError`](crate::obsplan_errors::ObsplanError::RegionParseError).
//! A mask angle outside `[0, 360)` yields
//! [`ObsplanError::DomainError`](crate::obsplan_errors::ObsplanError::DomainError): the mask
//! angle is a global input shared by every slit, so it fails hard at parse time.

use std::fs;

use camino::Utf8Path;
use regex::Regex;

use crate::constants::{ArcSec, Degree};
use crate::obsplan_errors::ObsplanError;

/// Rectangular slit-mask footprint on the sky.
///
/// Fields
/// -----------------
/// * `center_ra` – RA of the mask center \[degrees\]
/// * `center_dec` – Dec of the mask center \[degrees\]
/// * `width` – extent along the mask x-axis \[arcsec\]
/// * `height` – extent along the mask y-axis \[arcsec\]
/// * `angle` – mask position angle, +CCW from North towards East \[degrees\], in `[0, 360)`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MaskRegion {
    pub center_ra: Degree,
    pub center_dec: Degree,
    pub width: ArcSec,
    pub height: ArcSec,
    pub angle: Degree,
}

impl MaskRegion {
    /// Build a [`MaskRegion`], enforcing the mask-angle invariant.
    ///
    /// Arguments
    /// ---------
    /// * `center_ra`: RA of the mask center in degrees
    /// * `center_dec`: Dec of the mask center in degrees
    /// * `width`: mask width in arcseconds
    /// * `height`: mask height in arcseconds
    /// * `angle`: mask position angle in degrees, must lie in `[0, 360)`
    ///
    /// Return
    /// ------
    /// * The validated region, or [`ObsplanError::DomainError`] if the angle is out of range.
    pub fn new(
        center_ra: Degree,
        center_dec: Degree,
        width: ArcSec,
        height: ArcSec,
        angle: Degree,
    ) -> Result<Self, ObsplanError> {
        if !(0.0..360.0).contains(&angle) {
            return Err(ObsplanError::DomainError(format!(
                "mask angle must lie in [0, 360), got {angle}"
            )));
        }
        Ok(MaskRegion {
            center_ra,
            center_dec,
            width,
            height,
            angle,
        })
    }

    /// Read a [`MaskRegion`] from a ds9 region file.
    ///
    /// The first `box(...)` line found in the file is used; any other region shapes or
    /// comment lines are ignored.
    ///
    /// Arguments
    /// ---------
    /// * `path`: path of the ds9 region file
    ///
    /// Return
    /// ------
    /// * The parsed region, or an [`ObsplanError`] if the file cannot be read, contains
    ///   no box definition, or carries an out-of-range mask angle.
    pub fn from_reg_file(path: &Utf8Path) -> Result<Self, ObsplanError> {
        let content = fs::read_to_string(path)?;
        Self::from_reg_str(&content)
    }

    /// Parse a [`MaskRegion`] from the text of a ds9 region file.
    pub fn from_reg_str(content: &str) -> Result<Self, ObsplanError> {
        let box_regex = Regex::new(
            r#"box\((-?[0-9]*\.?[0-9]+),(-?[0-9]*\.?[0-9]+),([0-9]*\.?[0-9]+)",([0-9]*\.?[0-9]+)",([0-9]*\.?[0-9]+)"#,
        )
        .unwrap();

        let caps = box_regex.captures(content).ok_or_else(|| {
            ObsplanError::RegionParseError(
                "no box(ra,dec,w\",h\",angle) line found; the region must be saved with \
                 Coordinate/WCS/Degrees and Size/WCS/Arcmin options"
                    .to_string(),
            )
        })?;

        // capture groups only match valid float syntax, parse cannot fail
        let field = |i: usize| caps[i].parse::<f64>().unwrap();
        Self::new(field(1), field(2), field(3), field(4), field(5))
    }
}

#[cfg(test)]
mod mask_region_test {
    use super::*;

    #[test]
    fn test_parse_box_line() {
        let region =
            MaskRegion::from_reg_str("box(260.743,30.521,300\",966\",45)").unwrap();
        assert_eq!(region.center_ra, 260.743);
        assert_eq!(region.center_dec, 30.521);
        assert_eq!(region.width, 300.0);
        assert_eq!(region.height, 966.0);
        assert_eq!(region.angle, 45.0);
    }

    #[test]
    fn test_parse_skips_comments_and_other_shapes() {
        let content = "# Region file format: DS9 version 4.1\n\
                       global color=green\n\
                       fk5\n\
                       circle(100.0,30.0,5\")\n\
                       box(100.0,-2.5,300\",966\",137.2)\n";
        let region = MaskRegion::from_reg_str(content).unwrap();
        assert_eq!(region.center_dec, -2.5);
        assert_eq!(region.angle, 137.2);
    }

    #[test]
    fn test_missing_box_is_an_error() {
        let err = MaskRegion::from_reg_str("circle(100.0,30.0,5\")").unwrap_err();
        assert!(matches!(err, ObsplanError::RegionParseError(_)));
    }

    #[test]
    fn test_angle_out_of_range() {
        let err = MaskRegion::new(100.0, 30.0, 300.0, 966.0, 360.0).unwrap_err();
        assert!(matches!(err, ObsplanError::DomainError(_)));

        let err = MaskRegion::from_reg_str("box(100.0,30.0,300\",966\",361.5)").unwrap_err();
        assert!(matches!(err, ObsplanError::DomainError(_)));
    }
}
