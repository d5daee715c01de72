//! Elevation synthesis and land/ocean classification
//!
//! Maps each site to a scalar elevation: coherent noise sampled at scaled
//! site coordinates, biased strongly negative as the site approaches the map
//! border. Elevation is the sole classifier for land vs ocean, used both for
//! cell fill color and for pruning eligibility.

mod noise;

pub use noise::{NoiseSource, SimplexNoise};

use crate::subdivision::{Bound, Subdivision};

/// Scale applied to site coordinates before noise sampling
pub(crate) const NOISE_SCALE: f64 = 0.002;

/// Strength of the pull toward ocean near the map border
pub(crate) const BORDER_FALLOFF: f64 = 15.0;

/// Per-site elevation values, stamped with the index epoch they were
/// computed under
///
/// Ephemeral, derived data: recomputed from scratch on every draw and at the
/// start of every prune pass, never updated incrementally. Pruning renumbers
/// site indices, so index-consuming operations reject a field whose epoch no
/// longer matches the generator's.
#[derive(Debug, Clone, PartialEq)]
pub struct ElevationField {
    values: Vec<f64>,
    epoch: u64,
}

impl ElevationField {
    /// Wrap precomputed values (synthetic fields for tests, mainly)
    pub fn from_values(values: Vec<f64>, epoch: u64) -> Self {
        Self { values, epoch }
    }

    /// Number of sites covered
    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// True when no sites are covered
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Elevation of a site
    ///
    /// Values can be large-magnitude negative (non-finite at the border
    /// itself); callers must tolerate both.
    #[inline]
    pub fn value(&self, index: usize) -> f64 {
        self.values[index]
    }

    /// Land iff elevation is at or above sea level
    #[inline]
    pub fn is_land(&self, index: usize) -> bool {
        self.values[index] >= 0.0
    }

    /// Index epoch this field was computed under
    #[inline]
    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    /// All values, in site-index order
    #[inline]
    pub fn values(&self) -> &[f64] {
        &self.values
    }
}

/// Compute the elevation field for every site of a subdivision
pub fn compute_elevation(
    subdivision: &Subdivision,
    noise: &impl NoiseSource,
    epoch: u64,
) -> ElevationField {
    let bound = subdivision.bound();
    let values = (0..subdivision.site_count())
        .map(|index| {
            let site = subdivision.site(index);
            site_elevation(site.x, site.y, bound, noise)
        })
        .collect();
    ElevationField { values, epoch }
}

/// Elevation at raw coordinates: scaled noise minus the border bias
///
/// The bias term `1 / (border_distance * 0.002 * 15)` approaches infinity at
/// the border, pulling edge cells far below sea level.
pub(crate) fn site_elevation(x: f64, y: f64, bound: Bound, noise: &impl NoiseSource) -> f64 {
    let base = noise.sample2(x * NOISE_SCALE, y * NOISE_SCALE);
    base - 1.0 / (border_distance(x, y, bound) * NOISE_SCALE * BORDER_FALLOFF)
}

/// Distance to the nearest of the four bounding edges, in map units
pub(crate) fn border_distance(x: f64, y: f64, bound: Bound) -> f64 {
    (bound.height - y).min(x).min(y).min(bound.width - x)
}
