//! # Mask planning façade
//!
//! Wires the geometric pipeline together: validate the mask region, solve the mask-wide
//! slit position angle, filter the catalog to the mask footprint, and compute per-object
//! slit lengths.
//!
//! ## Error policy
//! -----------------
//! Global inputs fail hard: a bad mask angle or an unphysical hour angle/declination
//! aborts planning with an [`ObsplanError`]. Per-object problems do not: an object with
//! a partially-specified shape is recorded in [`MaskPlan::skipped`] and left out of the
//! mask, and the rest of the catalog is still planned.

use crate::catalog::CatalogObject;
use crate::constants::{
    ArcSec, Degree, Hour, ObjectId, DEFAULT_MAX_SLIT_OFFSET, DEFAULT_MIN_SLIT_OFFSET,
    MAUNA_KEA_LATITUDE,
};
use crate::footprint::containment_mask;
use crate::mask_region::MaskRegion;
use crate::obsplan_errors::ObsplanError;
use crate::slit_angle::optimal_slit_pa;
use crate::slit_length::{slit_length, SkyBuffer};

/// Observing configuration for a mask.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlannerConfig {
    /// Planned hour angle of the mask at observation \[hours\]
    pub hour_angle: Hour,
    /// Observer's geographic latitude \[degrees\]
    pub latitude: Degree,
    /// Sky padding on each slit end
    pub sky: SkyBuffer,
    /// Minimum |slit PA − mask PA| accepted by the instrument \[degrees\]
    pub min_offset: Degree,
    /// Maximum |slit PA − mask PA| accepted by the instrument \[degrees\]
    pub max_offset: Degree,
}

impl Default for PlannerConfig {
    /// Mauna Kea site, transit observation, instrument-default slit-angle band.
    fn default() -> Self {
        PlannerConfig {
            hour_angle: 0.0,
            latitude: MAUNA_KEA_LATITUDE,
            sky: SkyBuffer::default(),
            min_offset: DEFAULT_MIN_SLIT_OFFSET,
            max_offset: DEFAULT_MAX_SLIT_OFFSET,
        }
    }
}

/// Planned slit parameters for one catalog object.
///
/// `position_angle` and the slit lengths are meaningful only when `included` is set.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlitAssignment {
    pub object_id: ObjectId,
    pub included: bool,
    pub position_angle: Degree,
    pub slit_len_near: ArcSec,
    pub slit_len_far: ArcSec,
}

impl SlitAssignment {
    fn excluded(object_id: ObjectId) -> Self {
        SlitAssignment {
            object_id,
            included: false,
            position_angle: 0.0,
            slit_len_near: 0.0,
            slit_len_far: 0.0,
        }
    }
}

/// Result of planning one mask over a catalog.
#[derive(Debug)]
pub struct MaskPlan {
    /// The mask-wide slit position angle \[degrees\]
    pub slit_pa: Degree,
    /// One assignment per input object, in input order
    pub assignments: Vec<SlitAssignment>,
    /// Objects inside the footprint that could not be assigned a slit
    pub skipped: Vec<(ObjectId, ObsplanError)>,
}

impl MaskPlan {
    /// Assignments that received a slit.
    pub fn included(&self) -> impl Iterator<Item = &SlitAssignment> {
        self.assignments.iter().filter(|a| a.included)
    }
}

/// Plan slits for every catalog object falling on the mask.
///
/// The slit position angle is solved once from the mask angle and the mask-center
/// declination at the configured hour angle, then applied to every slit; the `PA=` line
/// of the output catalog carries a single angle per mask.
///
/// Arguments
/// ---------
/// * `region`: the mask footprint (already angle-validated at construction)
/// * `objects`: the target catalog
/// * `config`: observing configuration, see [`PlannerConfig`]
///
/// Return
/// ------
/// * A [`MaskPlan`] with one [`SlitAssignment`] per object, or an [`ObsplanError`] when
///   a global input (mask angle, hour angle, declination) is invalid.
pub fn plan_mask(
    region: &MaskRegion,
    objects: &[CatalogObject],
    config: &PlannerConfig,
) -> Result<MaskPlan, ObsplanError> {
    let slit_pa = optimal_slit_pa(
        region.angle,
        config.hour_angle,
        region.center_dec,
        config.latitude,
        config.min_offset,
        config.max_offset,
    )?;

    let ra: Vec<Degree> = objects.iter().map(|object| object.ra).collect();
    let dec: Vec<Degree> = objects.iter().map(|object| object.dec).collect();
    let inside = containment_mask(region, &ra, &dec)?;

    let mut assignments = Vec::with_capacity(objects.len());
    let mut skipped = Vec::new();

    for (object, inside) in objects.iter().zip(inside) {
        if !inside {
            assignments.push(SlitAssignment::excluded(object.id));
            continue;
        }
        match slit_length(
            slit_pa,
            config.sky,
            object.major_axis_radius,
            object.minor_axis_radius,
            object.galaxy_position_angle,
        ) {
            Ok((len_near, len_far)) => assignments.push(SlitAssignment {
                object_id: object.id,
                included: true,
                position_angle: slit_pa,
                slit_len_near: len_near,
                slit_len_far: len_far,
            }),
            Err(err) => {
                skipped.push((object.id, err));
                assignments.push(SlitAssignment::excluded(object.id));
            }
        }
    }

    Ok(MaskPlan {
        slit_pa,
        assignments,
        skipped,
    })
}

#[cfg(test)]
mod planner_test {
    use super::*;

    fn object(id: ObjectId, ra: f64, dec: f64) -> CatalogObject {
        CatalogObject {
            id,
            ra,
            dec,
            magnitude: 21.0,
            major_axis_radius: 2.0,
            minor_axis_radius: None,
            galaxy_position_angle: None,
        }
    }

    #[test]
    fn test_plan_filters_and_assigns() {
        let region = MaskRegion::new(100.0, 30.0, 300.0, 966.0, 45.0).unwrap();
        let objects = [
            object(1, 100.0, 30.0),  // mask center
            object(2, 105.0, 30.0),  // far outside the footprint
        ];
        let config = PlannerConfig {
            hour_angle: -2.0,
            ..PlannerConfig::default()
        };

        let plan = plan_mask(&region, &objects, &config).unwrap();
        assert_eq!(plan.assignments.len(), 2);
        assert!(plan.assignments[0].included);
        assert!(!plan.assignments[1].included);
        assert!(plan.skipped.is_empty());

        let slit = &plan.assignments[0];
        assert_eq!(slit.position_angle, plan.slit_pa);
        assert_eq!(slit.slit_len_near, 3.5);
        assert_eq!(slit.slit_len_far, 3.5);

        // mask-wide slit PA honors the instrument band around the folded mask angle
        let sep = (plan.slit_pa - 45.0).abs();
        assert!((5.0..=30.0).contains(&sep) || sep < 1e-12);
    }

    #[test]
    fn test_partial_shape_is_skipped_not_fatal() {
        let region = MaskRegion::new(100.0, 30.0, 300.0, 966.0, 45.0).unwrap();
        let mut bad = object(7, 100.0, 30.0);
        bad.minor_axis_radius = Some(1.0); // no position angle
        let objects = [object(1, 100.001, 30.001), bad];

        let plan = plan_mask(&region, &objects, &PlannerConfig::default()).unwrap();
        assert!(plan.assignments[0].included);
        assert!(!plan.assignments[1].included);
        assert_eq!(plan.skipped, vec![(7, ObsplanError::PartialGalaxyShape)]);
        assert_eq!(plan.included().count(), 1);
    }

    #[test]
    fn test_bad_region_angle_is_fatal() {
        // bypass MaskRegion::new validation to exercise the solver guard
        let region = MaskRegion {
            center_ra: 100.0,
            center_dec: 30.0,
            width: 300.0,
            height: 966.0,
            angle: -5.0,
        };
        let err = plan_mask(&region, &[], &PlannerConfig::default()).unwrap_err();
        assert!(matches!(err, ObsplanError::DomainError(_)));
    }
}
