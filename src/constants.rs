//! # Constants and type definitions for obsplan
//!
//! This module centralizes the **conversion factors**, **site defaults**, and **common type
//! definitions** used throughout the `obsplan` library.
//!
//! ## Overview
//!
//! - Unit conversions (degrees ↔ radians, hours → degrees, arcseconds ↔ degrees)
//! - Core type aliases used across the crate
//! - Default observing-site and slit-geometry parameters
//!
//! All angles on the sky follow the position-angle convention: degrees, positive from
//! North rotating toward East.

// -------------------------------------------------------------------------------------------------
// Unit conversions
// -------------------------------------------------------------------------------------------------

/// Degrees → radians
pub const RADEG: f64 = std::f64::consts::PI / 180.0;

/// Arcseconds per degree
pub const ARCSEC_PER_DEGREE: f64 = 3600.0;

/// Degrees of sky rotation per hour of hour angle
pub const DEGREES_PER_HOUR: f64 = 15.0;

// -------------------------------------------------------------------------------------------------
// Site and instrument defaults
// -------------------------------------------------------------------------------------------------

/// Geographic latitude of the Mauna Kea summit in degrees, the default observer site
pub const MAUNA_KEA_LATITUDE: Degree = 19.82525;

/// Minimum allowed angle between a slit PA and the mask PA (degrees).
/// The mask-design software rejects slits cut too close to the mask's own axis.
pub const DEFAULT_MIN_SLIT_OFFSET: Degree = 5.0;

/// Maximum allowed angle between a slit PA and the mask PA (degrees)
pub const DEFAULT_MAX_SLIT_OFFSET: Degree = 30.0;

// -------------------------------------------------------------------------------------------------
// Type aliases
// -------------------------------------------------------------------------------------------------

/// Angle in degrees
pub type Degree = f64;
/// Angle in arcseconds
pub type ArcSec = f64;
/// Angle in radians
pub type Radian = f64;
/// Hour angle in hours (negative east of the meridian, positive west)
pub type Hour = f64;
/// Catalog object identifier
pub type ObjectId = u64;
