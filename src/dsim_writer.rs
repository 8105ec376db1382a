//! # dsim catalog output
//!
//! Serializes a planned mask into the flat-file catalog consumed by the DEIMOS slit-mask
//! design software (dsimulator), following the format outlined at
//! <http://www.ucolick.org/~phillips/deimos_ref/masks.html>.
//!
//! ## File layout
//! -----------------
//! 1. A comment banner and the `#ttypeN` column declarations.
//! 2. The mask information line: `prefix  RA_hours  Dec  2000  PA=angle`.
//! 3. One line per guide star (priority code −1) and alignment star (−2).
//! 4. One tab-delimited line per galaxy in the column order
//!    `objid, ra, dec, equinox, magnitude, priority_code, passband, sample, selectflag,
//!    pa_slit, len1, len2`.
//!
//! Sexagesimal formatting comes from [`conversion`](crate::conversion); everything here
//! writes to any [`std::io::Write`], so output can go to a file or a test buffer alike.

use std::io::Write;

use crate::catalog::CatalogObject;
use crate::constants::{ArcSec, Degree, ObjectId};
use crate::conversion::{deg_to_sexagesimal_dec, deg_to_sexagesimal_ra};
use crate::mask_region::MaskRegion;
use crate::obsplan_errors::ObsplanError;

/// One galaxy line of the dsim catalog.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GalaxyRow {
    pub id: ObjectId,
    pub ra: Degree,
    pub dec: Degree,
    pub magnitude: f64,
    pub priority_code: i32,
    pub sample: u32,
    pub select_flag: u8,
    pub slit_pa: Degree,
    pub len_near: ArcSec,
    pub len_far: ArcSec,
}

/// Write the dsim comment banner, column declarations, and mask information line.
///
/// Arguments
/// ---------
/// * `out`: output sink
/// * `prefix`: mask name used as the identifier of the mask information line
/// * `region`: the mask footprint; its center and angle go into the `PA=` line
pub fn write_header<W: Write>(
    out: &mut W,
    prefix: &str,
    region: &MaskRegion,
) -> Result<(), ObsplanError> {
    out.write_all(
        b"#This catalog was created by obsplan and is intended to be used\n\
          #as input to the deimos slitmask software following the format\n\
          #outlined at http://www.ucolick.org/~phillips/deimos_ref/masks.html\n\
          #ttype1 = objid\n\
          #ttype2 = ra\n\
          #ttype3 = dec\n\
          #ttype4 = equinox\n\
          #ttype5 = magnitude\n\
          #ttype6 = priority_code\n\
          #ttype7 = passband\n\
          #ttype8 = sample\n\
          #ttype9 = selectflag\n\
          #ttype10 = pa_slit\n\
          #ttype11 = len1\n\
          #ttype12 = len2\n",
    )?;
    writeln!(
        out,
        "{}\t{:0.6}\t{:0.6}\t2000\tPA={:0.2}",
        prefix,
        region.center_ra / 15.0,
        region.center_dec,
        region.angle
    )?;
    Ok(())
}

/// Write one line per guide star (dsim priority code −1).
///
/// Star ids are looked up among `objects`; an id with no catalog counterpart is an
/// [`ObsplanError::ObjectNotFound`].
pub fn write_guide_stars<W: Write>(
    out: &mut W,
    ids: &[ObjectId],
    objects: &[CatalogObject],
    equinox: &str,
    passband: &str,
) -> Result<(), ObsplanError> {
    write_stars(out, ids, objects, equinox, passband, -1)
}

/// Write one line per alignment star (dsim priority code −2).
pub fn write_align_stars<W: Write>(
    out: &mut W,
    ids: &[ObjectId],
    objects: &[CatalogObject],
    equinox: &str,
    passband: &str,
) -> Result<(), ObsplanError> {
    write_stars(out, ids, objects, equinox, passband, -2)
}

fn write_stars<W: Write>(
    out: &mut W,
    ids: &[ObjectId],
    objects: &[CatalogObject],
    equinox: &str,
    passband: &str,
    priority_code: i32,
) -> Result<(), ObsplanError> {
    for &id in ids {
        let star = objects
            .iter()
            .find(|object| object.id == id)
            .ok_or(ObsplanError::ObjectNotFound(id))?;
        // same column order as the declared header: priority_code before passband
        writeln!(
            out,
            "{}  {}  {}  {}  {:0.2}  {}  {}  0  1",
            id,
            deg_to_sexagesimal_ra(star.ra),
            deg_to_sexagesimal_dec(star.dec),
            equinox,
            star.magnitude,
            priority_code,
            passband
        )?;
    }
    Ok(())
}

/// Write the tab-delimited galaxy lines.
pub fn write_galaxies<W: Write>(
    out: &mut W,
    rows: &[GalaxyRow],
    equinox: &str,
    passband: &str,
) -> Result<(), ObsplanError> {
    for row in rows {
        writeln!(
            out,
            "{}\t{}\t{}\t{}\t{:0.2}\t{}\t{}\t{}\t{}\t{:0.2}\t{:0.1}\t{:0.1}",
            row.id,
            deg_to_sexagesimal_ra(row.ra),
            deg_to_sexagesimal_dec(row.dec),
            equinox,
            row.magnitude,
            row.priority_code,
            passband,
            row.sample,
            row.select_flag,
            row.slit_pa,
            row.len_near,
            row.len_far
        )?;
    }
    Ok(())
}
