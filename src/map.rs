//! Map generator orchestration
//!
//! Owns the full pipeline: point set, subdivision, relaxation counter,
//! elevation synthesis, pruning and primitive emission. A generator instance
//! is single-threaded and exclusively owned by its driver; every mutating
//! pass runs to completion before returning.

use glam::DVec2;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::config::MapConfig;
use crate::error::{MapError, Result};
use crate::generation::{generate_map_points, lloyd_relaxation, prune_pointless, LloydOptions};
use crate::render::{DrawSettings, MapPalette, RenderSink};
use crate::subdivision::{Bound, Subdivision};
use crate::terrain::{compute_elevation, ElevationField, SimplexNoise};

/// A 2D Voronoi map generator
///
/// Exclusively owns its point set; the subdivision is derived data, rebuilt
/// in full after every mutating pass. The *index epoch* counts those
/// rebuilds: per-index caches (the elevation field) carry the epoch they
/// were computed under and are rejected once stale.
///
/// The seed label is an identity/reproducibility label only — it is
/// displayed but does not feed the random or noise sources. Use
/// [`MapConfig::rng_seed`] / [`MapConfig::noise_seed`] for actual
/// reproducibility.
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
/// let mut map = MapGenerator::with_seed(config, "test").unwrap();
/// assert_eq!(map.active_points(), 50);
///
/// map.relax().unwrap();
/// map.prune().unwrap();
///
/// let mut sink = RecordingSink::new();
/// map.draw(&mut sink, &DrawSettings::default());
/// assert!(sink.primitive_count() > 0);
/// ```
pub struct MapGenerator {
    config: MapConfig,
    seed: String,
    points: Vec<DVec2>,
    subdivision: Subdivision,
    noise: SimplexNoise,
    palette: MapPalette,
    steps_done: usize,
    epoch: u64,
}

impl MapGenerator {
    /// Generate a map with a random 4-digit seed label
    pub fn new(config: MapConfig) -> Result<Self> {
        let label = rand::thread_rng().gen_range(1..=9999u32).to_string();
        Self::with_seed(config, label)
    }

    /// Generate a map with an explicit seed label
    ///
    /// # Errors
    ///
    /// Returns `GenerationFailed` if the subdivision engine rejects the
    /// generated point set (cannot happen for valid configurations).
    pub fn with_seed(config: MapConfig, seed: impl Into<String>) -> Result<Self> {
        let mut rng = match config.rng_seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };
        let points = generate_map_points(config.point_count, config.width, config.height, &mut rng);
        let subdivision = Subdivision::build(&points, Bound::new(config.width, config.height))?;
        let noise = match config.noise_seed {
            Some(seed) => SimplexNoise::new(seed),
            None => SimplexNoise::from_entropy(),
        };

        Ok(Self {
            config,
            seed: seed.into(),
            points,
            subdivision,
            noise,
            palette: MapPalette::default(),
            steps_done: 0,
            epoch: 0,
        })
    }

    /// Seed label of this map
    #[inline]
    pub fn seed(&self) -> &str {
        &self.seed
    }

    /// Total relaxation steps performed since generation
    #[inline]
    pub fn steps_done(&self) -> usize {
        self.steps_done
    }

    /// Number of currently active sites
    #[inline]
    pub fn active_points(&self) -> usize {
        self.points.len()
    }

    /// Current index epoch (bumped on every index-renumbering rebuild)
    #[inline]
    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    /// Configuration this map was generated from
    #[inline]
    pub fn config(&self) -> &MapConfig {
        &self.config
    }

    /// Current subdivision
    #[inline]
    pub fn subdivision(&self) -> &Subdivision {
        &self.subdivision
    }

    /// Replace the default layer palette
    pub fn set_palette(&mut self, palette: MapPalette) {
        self.palette = palette;
    }

    fn bound(&self) -> Bound {
        Bound::new(self.config.width, self.config.height)
    }

    /// Run the configured number of Lloyd relaxation steps
    ///
    /// Each step replaces every site with its cell centroid and rebuilds the
    /// subdivision; degenerate cells are skipped and can silently shrink the
    /// point set. Returns the accumulated step counter, which only a full
    /// regeneration resets.
    pub fn relax(&mut self) -> Result<usize> {
        if self.config.relax_steps == 0 {
            return Ok(self.steps_done);
        }

        let options = LloydOptions {
            steps: self.config.relax_steps,
        };
        let outcome = lloyd_relaxation(&self.subdivision, options)?;

        self.points = outcome.points;
        self.subdivision = outcome.subdivision;
        self.steps_done += outcome.steps_run;
        self.epoch += 1;
        Ok(self.steps_done)
    }

    /// Compute a fresh elevation field stamped with the current epoch
    pub fn elevation(&self) -> ElevationField {
        compute_elevation(&self.subdivision, &self.noise, self.epoch)
    }

    /// Remove all cells whose 2-hop neighborhood is entirely ocean
    ///
    /// Recomputes the elevation field, prunes against it, rebuilds the
    /// subdivision and bumps the epoch. Returns the removed count.
    pub fn prune(&mut self) -> Result<usize> {
        let elevation = self.elevation();
        self.prune_with(&elevation)
    }

    /// Prune against a caller-held elevation field
    ///
    /// # Errors
    ///
    /// Returns `StaleElevation` if the field was computed under a different
    /// epoch: pruning renumbers site indices, so reusing an old field would
    /// classify the wrong cells.
    pub fn prune_with(&mut self, elevation: &ElevationField) -> Result<usize> {
        if elevation.epoch() != self.epoch {
            return Err(MapError::StaleElevation {
                expected: self.epoch,
                actual: elevation.epoch(),
            });
        }

        let removed = prune_pointless(&mut self.points, &self.subdivision, elevation);
        if removed > 0 {
            self.subdivision = Subdivision::build(&self.points, self.bound())?;
            self.epoch += 1;
        }
        eprintln!(
            "[Prune] removed {} pointless cells, {} remain",
            removed,
            self.points.len()
        );
        Ok(removed)
    }

    /// Emit drawable primitives for every enabled layer
    ///
    /// Layer order matches the original renderer: cell fills, Voronoi edges,
    /// Delaunay edges, site markers, centroid markers. Per-cell polygon or
    /// centroid failures are logged and skipped; they never abort the
    /// remaining cells or layers.
    pub fn draw<S: RenderSink>(&self, sink: &mut S, settings: &DrawSettings) {
        let palette = &self.palette;

        if settings.cell_color {
            let elevation = self.elevation();
            for index in 0..self.subdivision.site_count() {
                match self.subdivision.cell_polygon(index) {
                    Some(ring) => {
                        let color = if elevation.is_land(index) {
                            palette.land
                        } else {
                            palette.ocean
                        };
                        sink.fill_polygon(&ring, color);
                    }
                    None => eprintln!("[Draw] skipping fill for degenerate cell {}", index),
                }
            }
        }

        if settings.voronoi {
            for (from, to) in self.subdivision.voronoi_edges() {
                sink.stroke_edge(from, to, palette.edge_width, palette.voronoi_edge);
            }
        }

        if settings.delaunay {
            for (from, to) in self.subdivision.delaunay_edges() {
                sink.stroke_edge(from, to, palette.edge_width, palette.delaunay_edge);
            }
        }

        if settings.cell_site {
            for point in &self.points {
                sink.fill_circle(*point, palette.marker_radius, palette.site);
            }
        }

        if settings.centroids {
            for index in 0..self.subdivision.site_count() {
                match self.subdivision.cell_centroid(index) {
                    Ok(centroid) => {
                        sink.fill_circle(centroid, palette.marker_radius, palette.centroid)
                    }
                    Err(_) => {
                        eprintln!("[Draw] skipping centroid for degenerate cell {}", index)
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MapConfigBuilder;
    use crate::render::RecordingSink;
    use std::collections::HashSet;

    fn test_config() -> MapConfig {
        MapConfigBuilder::new()
            .dimensions(800.0, 600.0)
            .unwrap()
            .point_count(50)
            .unwrap()
            .relax_steps(1)
            .unwrap()
            .rng_seed(42)
            .noise_seed(42)
            .build()
            .unwrap()
    }

    #[test]
    fn test_generation_produces_unique_points() {
        let map = MapGenerator::with_seed(test_config(), "test").unwrap();

        assert_eq!(map.seed(), "test");
        assert_eq!(map.active_points(), 50);
        assert_eq!(map.subdivision().site_count(), 50);
        assert_eq!(map.steps_done(), 0);
        assert_eq!(map.epoch(), 0);

        let distinct: HashSet<(i64, i64)> = (0..map.subdivision().site_count())
            .map(|i| {
                let site = map.subdivision().site(i);
                (site.x as i64, site.y as i64)
            })
            .collect();
        assert_eq!(distinct.len(), 50);
    }

    #[test]
    fn test_relax_accumulates_steps() {
        let mut map = MapGenerator::with_seed(test_config(), "test").unwrap();

        assert_eq!(map.relax().unwrap(), 1);
        assert_eq!(map.relax().unwrap(), 2);
        assert_eq!(map.steps_done(), 2);
        assert!(map.epoch() >= 2);
    }

    #[test]
    fn test_relax_never_increases_point_count() {
        let mut map = MapGenerator::with_seed(test_config(), "test").unwrap();
        let before = map.active_points();
        map.relax().unwrap();
        assert!(map.active_points() <= before);
    }

    #[test]
    fn test_prune_shrinks_by_removed_count() {
        let mut map = MapGenerator::with_seed(test_config(), "test").unwrap();
        let before = map.active_points();

        let removed = map.prune().unwrap();
        assert_eq!(map.active_points(), before - removed);
        assert_eq!(map.subdivision().site_count(), map.active_points());
    }

    #[test]
    fn test_prune_never_removes_land() {
        let mut map = MapGenerator::with_seed(test_config(), "test").unwrap();
        let elevation = map.elevation();
        let land_before = (0..elevation.len()).filter(|&i| elevation.is_land(i)).count();

        map.prune().unwrap();

        let after = map.elevation();
        let land_after = (0..after.len()).filter(|&i| after.is_land(i)).count();
        assert_eq!(land_after, land_before);
    }

    #[test]
    fn test_stale_elevation_is_rejected() {
        let mut map = MapGenerator::with_seed(test_config(), "test").unwrap();
        let elevation = map.elevation();

        map.relax().unwrap(); // renumbering rebuild, epoch bump

        match map.prune_with(&elevation) {
            Err(MapError::StaleElevation { expected, actual }) => {
                assert_eq!(actual, 0);
                assert_eq!(expected, map.epoch());
            }
            other => panic!("expected StaleElevation, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn test_elevation_matches_active_count() {
        let map = MapGenerator::with_seed(test_config(), "test").unwrap();
        let elevation = map.elevation();
        assert_eq!(elevation.len(), map.active_points());
        assert_eq!(elevation.epoch(), map.epoch());
    }

    #[test]
    fn test_draw_all_layers_emits_primitives() {
        let mut map = MapGenerator::with_seed(test_config(), "test").unwrap();
        map.relax().unwrap();

        let mut sink = RecordingSink::new();
        map.draw(&mut sink, &DrawSettings::default());

        assert!(!sink.polygons.is_empty(), "no cell fills emitted");
        assert!(!sink.edges.is_empty(), "no edges emitted");
        assert!(!sink.circles.is_empty(), "no markers emitted");
    }

    #[test]
    fn test_draw_respects_layer_toggles() {
        let map = MapGenerator::with_seed(test_config(), "test").unwrap();

        let mut sink = RecordingSink::new();
        let settings = DrawSettings {
            cell_color: false,
            voronoi: false,
            delaunay: false,
            cell_site: true,
            centroids: false,
        };
        map.draw(&mut sink, &settings);

        assert!(sink.polygons.is_empty());
        assert!(sink.edges.is_empty());
        assert_eq!(sink.circles.len(), map.active_points());
    }

    #[test]
    fn test_deterministic_config_reproduces_layout() {
        let map1 = MapGenerator::with_seed(test_config(), "a").unwrap();
        let map2 = MapGenerator::with_seed(test_config(), "b").unwrap();

        // the seed label is cosmetic; layout comes from rng_seed
        let sites1: Vec<DVec2> = (0..50).map(|i| map1.subdivision().site(i)).collect();
        let sites2: Vec<DVec2> = (0..50).map(|i| map2.subdivision().site(i)).collect();
        assert_eq!(sites1, sites2);
    }
}
