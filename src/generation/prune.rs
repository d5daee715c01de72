//! Ocean-interior cell pruning
//!
//! Removes cells that are "interior to the ocean": below sea level with no
//! land anywhere in their 2-hop neighborhood. Every candidate is evaluated
//! independently against the pre-pruning elevation field and neighbor graph;
//! there is no iterative re-evaluation within a pass.

use glam::DVec2;

use crate::subdivision::Subdivision;
use crate::terrain::ElevationField;

/// Collect the indices of all prunable sites
///
/// A site is pointless iff it is ocean and its entire 2-hop neighborhood is
/// ocean. Land (`elevation >= 0`) anywhere within two hops disqualifies it.
pub fn find_pointless_sites(
    subdivision: &Subdivision,
    elevation: &ElevationField,
) -> Vec<usize> {
    (0..subdivision.site_count())
        .filter(|&index| is_pointless(index, subdivision, elevation))
        .collect()
}

fn is_pointless(index: usize, subdivision: &Subdivision, elevation: &ElevationField) -> bool {
    if elevation.is_land(index) {
        return false;
    }
    for neighbor in subdivision.neighbors(index) {
        if elevation.is_land(neighbor) {
            return false;
        }
        for second_hop in subdivision.neighbors(neighbor) {
            if elevation.is_land(second_hop) {
                return false;
            }
        }
    }
    true
}

/// Remove all pointless sites from the point set
///
/// Removed sites are first marked with a NaN sentinel, then the sequence is
/// compacted by dropping sentinels. Returns the removed count. Site indices
/// are renumbered by the compaction: the caller must rebuild the subdivision
/// and recompute any per-index data (the elevation field in particular).
pub fn prune_pointless(
    points: &mut Vec<DVec2>,
    subdivision: &Subdivision,
    elevation: &ElevationField,
) -> usize {
    debug_assert_eq!(points.len(), subdivision.site_count());
    debug_assert_eq!(points.len(), elevation.len());

    let doomed = find_pointless_sites(subdivision, elevation);
    for &index in &doomed {
        points[index] = DVec2::NAN;
    }
    points.retain(|p| !p.x.is_nan());
    doomed.len()
}
