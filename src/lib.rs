//! # obsplan
//!
//! Planning of multi-object spectroscopy slit masks for the DEIMOS spectrograph.
//!
//! Given a target catalog and a ds9 region describing the mask footprint, `obsplan`
//! selects the objects falling on the mask, solves the optimal slit position angle
//! (as close to the parallactic angle as the instrument's slit-angle band allows),
//! computes per-object slit lengths from galaxy shapes, and writes the flat-file
//! catalog consumed by the dsimulator mask-design software.
//!
//! ## Pipeline
//!
//! 1. [`mask_region`] – parse the ds9 `box(...)` region into a [`MaskRegion`](mask_region::MaskRegion).
//! 2. [`catalog`] – read the ttype target catalog; build exclusion/preselection masks.
//! 3. [`footprint`] – rotate coordinates into the mask frame and test containment.
//! 4. [`parallactic`] / [`slit_angle`] – parallactic angle and the band-constrained slit PA.
//! 5. [`slit_length`] – project galaxy ellipses onto the slit axis and add sky.
//! 6. [`planner`] – façade running 3–5 over a catalog with per-object error accumulation.
//! 7. [`dsim_writer`] – emit the dsim catalog (header, star records, galaxy rows).

pub mod catalog;
pub mod constants;
pub mod conversion;
pub mod dsim_writer;
pub mod footprint;
pub mod mask_region;
pub mod obsplan_errors;
pub mod parallactic;
pub mod planner;
pub mod slit_angle;
pub mod slit_length;
