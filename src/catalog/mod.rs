//! # Target catalog ingestion
//!
//! Reads the whitespace-delimited "ttype" flat-file catalogs used by the survey
//! reduction pipelines and exposes **named-column** access over them.
//!
//! ## File format
//! -----------------
//! Header comment lines declare the column layout:
//!
//! ```text
//! #ttype1 = objID
//! #ttype2 = ra
//! #ttype3 = dec
//! 775311575  260.743  30.521  ...
//! ```
//!
//! `#ttypeN = name` binds `name` to the `N`-th (1-based) whitespace-separated field of
//! every data row. All data cells are numeric. Other `#` lines are ignored.
//!
//! ## Modules
//! -----------------
//! * [`selection`](crate::catalog::selection) – exclusion masks, preselection flags, and
//!   sample assignment over catalog columns.

pub mod selection;

use std::collections::HashMap;
use std::fs;

use camino::Utf8Path;
use regex::Regex;

use crate::constants::{ArcSec, Degree, ObjectId};
use crate::obsplan_errors::ObsplanError;

/// One catalog target, as consumed by the planning pipeline.
///
/// `minor_axis_radius` and `galaxy_position_angle` are both absent for a galaxy modeled
/// as circular, and both present for an elliptical one. Mixed specification is rejected
/// when slit lengths are computed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CatalogObject {
    pub id: ObjectId,
    /// Right ascension \[degrees\]
    pub ra: Degree,
    /// Declination \[degrees\]
    pub dec: Degree,
    pub magnitude: f64,
    /// Galaxy radius along the major axis \[arcsec\]
    pub major_axis_radius: ArcSec,
    /// Galaxy radius along the minor axis \[arcsec\]
    pub minor_axis_radius: Option<ArcSec>,
    /// Position angle of the major axis, +CCW from North towards East \[degrees\]
    pub galaxy_position_angle: Option<Degree>,
}

/// Column names holding the galaxy shape parameters.
///
/// `minor` and `position_angle` must be given together or not at all; a single one is a
/// [`ObsplanError::PartialGalaxyShape`] at extraction time, since the whole catalog
/// would be malformed.
#[derive(Debug, Clone, Copy)]
pub struct ShapeColumns<'a> {
    pub major: &'a str,
    pub minor: Option<&'a str>,
    pub position_angle: Option<&'a str>,
}

impl<'a> ShapeColumns<'a> {
    /// Circular galaxies: only a major-axis radius column.
    pub fn circular(major: &'a str) -> Self {
        ShapeColumns {
            major,
            minor: None,
            position_angle: None,
        }
    }

    /// Elliptical galaxies: major, minor, and position-angle columns.
    pub fn elliptical(major: &'a str, minor: &'a str, position_angle: &'a str) -> Self {
        ShapeColumns {
            major,
            minor: Some(minor),
            position_angle: Some(position_angle),
        }
    }
}

/// An in-memory ttype catalog: a name → column map over numeric rows.
#[derive(Debug, Clone)]
pub struct Catalog {
    columns: HashMap<String, usize>,
    rows: Vec<Vec<f64>>,
}

impl Catalog {
    /// Read a ttype catalog file.
    ///
    /// Arguments
    /// ---------
    /// * `path`: path of the whitespace-delimited catalog with `#ttypeN = name` headers
    ///
    /// Return
    /// ------
    /// * The parsed catalog, or an [`ObsplanError`] on I/O failure or malformed content.
    pub fn from_ttype_file(path: &Utf8Path) -> Result<Self, ObsplanError> {
        let content = fs::read_to_string(path)?;
        Self::from_ttype_str(&content)
    }

    /// Parse a ttype catalog from text.
    ///
    /// Errors
    /// ------
    /// * No `#ttype` header line at all
    /// * A data row with a different field count than the header declares
    /// * A non-numeric data cell
    pub fn from_ttype_str(content: &str) -> Result<Self, ObsplanError> {
        let ttype_regex = Regex::new(r"^#ttype([0-9]+)\s*=\s*(\S+)").unwrap();

        let mut columns = HashMap::new();
        let mut rows = Vec::new();

        for (lineno, line) in content.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            if let Some(caps) = ttype_regex.captures(line) {
                let index: usize = caps[1].parse().map_err(|_| {
                    ObsplanError::CatalogError(format!(
                        "ttype index out of range on line {}",
                        lineno + 1
                    ))
                })?;
                if index == 0 {
                    return Err(ObsplanError::CatalogError(format!(
                        "ttype indices are 1-based, got ttype0 on line {}",
                        lineno + 1
                    )));
                }
                columns.insert(caps[2].to_string(), index - 1);
                continue;
            }
            if line.starts_with('#') {
                continue;
            }

            let row = line
                .split_whitespace()
                .map(|cell| {
                    cell.parse::<f64>().map_err(|_| {
                        ObsplanError::CatalogError(format!(
                            "non-numeric cell '{}' on line {}",
                            cell,
                            lineno + 1
                        ))
                    })
                })
                .collect::<Result<Vec<f64>, ObsplanError>>()?;
            rows.push(row);
        }

        if columns.is_empty() {
            return Err(ObsplanError::CatalogError(
                "no #ttype header lines found".to_string(),
            ));
        }

        let ncol = columns.values().max().unwrap() + 1;
        if let Some(bad) = rows.iter().position(|row| row.len() < ncol) {
            return Err(ObsplanError::CatalogError(format!(
                "data row {} has {} fields but the header declares {}",
                bad + 1,
                rows[bad].len(),
                ncol
            )));
        }

        Ok(Catalog { columns, rows })
    }

    /// Number of data rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Extract a named column as a vector of floats.
    pub fn column(&self, name: &str) -> Result<Vec<f64>, ObsplanError> {
        let index = *self.columns.get(name).ok_or_else(|| {
            ObsplanError::CatalogError(format!("unknown catalog column '{name}'"))
        })?;
        Ok(self.rows.iter().map(|row| row[index]).collect())
    }

    /// Extract a column that may be absent from the caller's configuration.
    pub fn optional_column(&self, name: Option<&str>) -> Result<Option<Vec<f64>>, ObsplanError> {
        name.map(|n| self.column(n)).transpose()
    }

    /// Extract an integer object-id column.
    pub fn id_column(&self, name: &str) -> Result<Vec<ObjectId>, ObsplanError> {
        Ok(self
            .column(name)?
            .into_iter()
            .map(|v| v.round() as ObjectId)
            .collect())
    }

    /// Build the [`CatalogObject`] records the planner consumes.
    ///
    /// Arguments
    /// ---------
    /// * `id`, `ra`, `dec`, `magnitude`: column names for the core target fields
    /// * `shape`: galaxy shape column names, see [`ShapeColumns`]
    ///
    /// Return
    /// ------
    /// * One [`CatalogObject`] per row, or an [`ObsplanError`] for unknown columns or a
    ///   partially-specified shape configuration.
    pub fn objects(
        &self,
        id: &str,
        ra: &str,
        dec: &str,
        magnitude: &str,
        shape: ShapeColumns,
    ) -> Result<Vec<CatalogObject>, ObsplanError> {
        if shape.minor.is_some() != shape.position_angle.is_some() {
            return Err(ObsplanError::PartialGalaxyShape);
        }

        let ids = self.id_column(id)?;
        let ra = self.column(ra)?;
        let dec = self.column(dec)?;
        let magnitude = self.column(magnitude)?;
        let major = self.column(shape.major)?;
        let minor = self.optional_column(shape.minor)?;
        let galaxy_pa = self.optional_column(shape.position_angle)?;

        Ok((0..self.len())
            .map(|i| CatalogObject {
                id: ids[i],
                ra: ra[i],
                dec: dec[i],
                magnitude: magnitude[i],
                major_axis_radius: major[i],
                minor_axis_radius: minor.as_ref().map(|b| b[i]),
                galaxy_position_angle: galaxy_pa.as_ref().map(|pa| pa[i]),
            })
            .collect())
    }
}

#[cfg(test)]
mod catalog_test {
    use super::*;

    const CATALOG: &str = "\
#This catalog was produced by the survey pipeline
#ttype1 = objID
#ttype2 = ra
#ttype3 = dec
#ttype4 = dered_r
#ttype5 = deVRad_r
775311575  100.001  30.002  21.13  2.4
775311576  100.010  29.995  22.60  1.1
530933312  105.000  30.000  19.02  3.0
";

    #[test]
    fn test_named_column_access() {
        let cat = Catalog::from_ttype_str(CATALOG).unwrap();
        assert_eq!(cat.len(), 3);
        assert_eq!(cat.column("ra").unwrap(), vec![100.001, 100.010, 105.000]);
        assert_eq!(
            cat.id_column("objID").unwrap(),
            vec![775311575, 775311576, 530933312]
        );
    }

    #[test]
    fn test_unknown_column() {
        let cat = Catalog::from_ttype_str(CATALOG).unwrap();
        assert!(matches!(
            cat.column("z_phot").unwrap_err(),
            ObsplanError::CatalogError(_)
        ));
    }

    #[test]
    fn test_missing_header() {
        let err = Catalog::from_ttype_str("1.0 2.0\n3.0 4.0\n").unwrap_err();
        assert!(matches!(err, ObsplanError::CatalogError(_)));
    }

    #[test]
    fn test_ragged_row() {
        let err = Catalog::from_ttype_str("#ttype1 = a\n#ttype2 = b\n1.0\n").unwrap_err();
        assert!(matches!(err, ObsplanError::CatalogError(_)));
    }

    #[test]
    fn test_non_numeric_cell() {
        let err = Catalog::from_ttype_str("#ttype1 = a\nNaN?\n").unwrap_err();
        assert!(matches!(err, ObsplanError::CatalogError(_)));
    }

    #[test]
    fn test_objects_circular() {
        let cat = Catalog::from_ttype_str(CATALOG).unwrap();
        let objects = cat
            .objects(
                "objID",
                "ra",
                "dec",
                "dered_r",
                ShapeColumns::circular("deVRad_r"),
            )
            .unwrap();
        assert_eq!(objects.len(), 3);
        assert_eq!(objects[0].id, 775311575);
        assert_eq!(objects[0].major_axis_radius, 2.4);
        assert_eq!(objects[0].minor_axis_radius, None);
        assert_eq!(objects[0].galaxy_position_angle, None);
    }

    #[test]
    fn test_objects_partial_shape_columns() {
        let cat = Catalog::from_ttype_str(CATALOG).unwrap();
        let err = cat
            .objects(
                "objID",
                "ra",
                "dec",
                "dered_r",
                ShapeColumns {
                    major: "deVRad_r",
                    minor: Some("deVRad_r"),
                    position_angle: None,
                },
            )
            .unwrap_err();
        assert_eq!(err, ObsplanError::PartialGalaxyShape);
    }
}
