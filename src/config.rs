//! Map Configuration and Builder
//!
//! This module provides configuration types for Voronoi map generation.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{MapError, Result};
use crate::generation::EDGE_PADDING;

/// Maximum Lloyd relaxation steps allowed per `relax()` call
const MAX_RELAX_STEPS: usize = 50;

/// Configuration for Voronoi map generation
///
/// Fixed for the lifetime of a [`MapGenerator`](crate::MapGenerator) instance.
/// By default the random source and the noise source are entropy-seeded and
/// independent of the generator's seed label; set `rng_seed` / `noise_seed`
/// for reproducible output.
///
/// # Example
///
/// ```rust
/// use voronoi_mapgen::*;
///
/// let config = MapConfigBuilder::new()
///     .dimensions(800.0, 600.0)
///     .unwrap()
///     .point_count(50)
///     .unwrap()
///     .build()
///     .unwrap();
///
/// assert_eq!(config.point_count, 50);
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapConfig {
    /// Map width in world units (bound is always `(0,0)..(width,height)`)
    pub width: f64,

    /// Map height in world units
    pub height: f64,

    /// Number of sites to generate
    pub point_count: usize,

    /// Lloyd relaxation steps performed per `relax()` call
    pub relax_steps: usize,

    /// Explicit seed for the point-sampling random source
    ///
    /// When `None`, sampling is entropy-seeded and two generators with the
    /// same seed label will still produce different maps.
    pub rng_seed: Option<u64>,

    /// Explicit seed for the coherent noise source driving elevation
    ///
    /// When `None`, the noise instance is entropy-seeded independently of
    /// both the seed label and `rng_seed`.
    pub noise_seed: Option<u32>,
}

impl Default for MapConfig {
    fn default() -> Self {
        MapConfigBuilder::new().build().unwrap()
    }
}

/// Builder for creating [`MapConfig`] with validation
///
/// Defaults:
/// - dimensions: 1200 x 800
/// - point_count: 1000
/// - relax_steps: 3
/// - rng_seed / noise_seed: None (entropy-seeded)
#[derive(Debug, Clone)]
pub struct MapConfigBuilder {
    width: f64,
    height: f64,
    point_count: usize,
    relax_steps: usize,
    rng_seed: Option<u64>,
    noise_seed: Option<u32>,
}

impl MapConfigBuilder {
    /// Create a new builder with default values
    pub fn new() -> Self {
        Self {
            width: 1200.0,
            height: 800.0,
            point_count: 1000,
            relax_steps: 3,
            rng_seed: None,
            noise_seed: None,
        }
    }

    /// Set the map dimensions
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if either side leaves less than one unit of
    /// interior once the edge padding is subtracted on both sides.
    pub fn dimensions(mut self, width: f64, height: f64) -> Result<Self> {
        let min_side = 2.0 * EDGE_PADDING + 1.0;
        if !width.is_finite() || !height.is_finite() || width < min_side || height < min_side {
            return Err(MapError::InvalidConfig(format!(
                "map dimensions must be at least {}x{} (got {}x{})",
                min_side, min_side, width, height
            )));
        }
        self.width = width;
        self.height = height;
        Ok(self)
    }

    /// Set the number of sites to generate
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` for fewer than 3 points (the subdivision
    /// engine needs a non-degenerate triangulation).
    pub fn point_count(mut self, count: usize) -> Result<Self> {
        if count < 3 {
            return Err(MapError::InvalidConfig(format!(
                "point count must be >= 3 (got {})",
                count
            )));
        }
        self.point_count = count;
        Ok(self)
    }

    /// Set the number of Lloyd relaxation steps per `relax()` call
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if steps > 50 (excessive and impractical)
    pub fn relax_steps(mut self, steps: usize) -> Result<Self> {
        if steps > MAX_RELAX_STEPS {
            return Err(MapError::InvalidConfig(format!(
                "relax steps must be <= {} (got {})",
                MAX_RELAX_STEPS, steps
            )));
        }
        self.relax_steps = steps;
        Ok(self)
    }

    /// Seed the point-sampling random source for reproducible layouts
    pub fn rng_seed(mut self, seed: u64) -> Self {
        self.rng_seed = Some(seed);
        self
    }

    /// Seed the elevation noise source for reproducible terrain
    pub fn noise_seed(mut self, seed: u32) -> Self {
        self.noise_seed = Some(seed);
        self
    }

    /// Build the configuration
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if the requested point count exceeds the
    /// number of distinct integer coordinates inside the padded bound;
    /// uniqueness is enforced by rejection-resampling, which could not
    /// terminate in that case.
    pub fn build(self) -> Result<MapConfig> {
        let grid_capacity = ((self.width - 2.0 * EDGE_PADDING).floor()
            * (self.height - 2.0 * EDGE_PADDING).floor()) as usize;
        if self.point_count > grid_capacity {
            return Err(MapError::InvalidConfig(format!(
                "point count {} exceeds the {} distinct integer positions inside the padded bound",
                self.point_count, grid_capacity
            )));
        }

        Ok(MapConfig {
            width: self.width,
            height: self.height,
            point_count: self.point_count,
            relax_steps: self.relax_steps,
            rng_seed: self.rng_seed,
            noise_seed: self.noise_seed,
        })
    }
}

impl Default for MapConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
