//! # Catalog selection masks
//!
//! Boolean masks and flags derived from object-id lists and sample bounds: exclusion of
//! already-observed targets, preselection of must-have slits, and sample splitting by a
//! catalog parameter (usually magnitude).
//!
//! Id-list matching is a single set-membership pass over the catalog, `O(n + m)` for a
//! catalog of `n` rows and an id list of `m` entries.

use std::collections::HashSet;

use itertools::Itertools;

use crate::constants::ObjectId;
use crate::obsplan_errors::ObsplanError;

/// Mask dropping the objects named in an exclusion list.
///
/// Arguments
/// ---------
/// * `objid`: object ids of the target catalog
/// * `excluded`: ids to remove (e.g. targets already observed on an earlier mask)
///
/// Return
/// ------
/// * One `bool` per catalog object, `false` for excluded objects.
pub fn exclusion_mask(objid: &[ObjectId], excluded: &[ObjectId]) -> Vec<bool> {
    let excluded: HashSet<ObjectId> = excluded.iter().copied().collect();
    objid.iter().map(|id| !excluded.contains(id)).collect()
}

/// Preselection flags for the mask-design software.
///
/// Arguments
/// ---------
/// * `objid`: object ids of the target catalog
/// * `preselected`: ids that must receive a slit regardless of the optimizer
///
/// Return
/// ------
/// * One flag per catalog object: 1 = preselected, 0 = free.
pub fn preselection_flags(objid: &[ObjectId], preselected: &[ObjectId]) -> Vec<u8> {
    let preselected: HashSet<ObjectId> = preselected.iter().copied().collect();
    objid
        .iter()
        .map(|id| u8::from(preselected.contains(id)))
        .collect()
}

/// Split the catalog into selection samples by a single parameter.
///
/// Sample 1 objects are selected first by the mask-design software, then sample 2, and
/// so on; this ordering takes priority over per-object priority codes.
///
/// Arguments
/// ---------
/// * `values`: the splitting parameter per object (e.g. dereddened magnitude)
/// * `bounds`: flattened `(lo, hi)` pairs, one pair per sample in selection order
///
/// Return
/// ------
/// * One sample number per object: the 1-based index of the first pair with
///   `lo <= value <= hi`, or 0 when no pair matches (object deselected).
///   [`ObsplanError::OddSampleBounds`] when `bounds` has odd length.
pub fn assign_samples(values: &[f64], bounds: &[f64]) -> Result<Vec<u32>, ObsplanError> {
    if bounds.len() % 2 != 0 {
        return Err(ObsplanError::OddSampleBounds(bounds.len()));
    }
    let pairs: Vec<(f64, f64)> = bounds.iter().copied().tuples().collect();

    Ok(values
        .iter()
        .map(|&v| {
            pairs
                .iter()
                .position(|&(lo, hi)| v >= lo && v <= hi)
                .map_or(0, |i| i as u32 + 1)
        })
        .collect())
}
