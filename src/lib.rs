//! Voronoi-based 2D map generation
//!
//! Generates a 2D map partition from random points using the
//! Voronoi/Delaunay duality, smooths it with Lloyd relaxation, derives a
//! pseudo-elevation field from coherent noise with a distance-to-border
//! bias, prunes ocean-interior cells and emits drawable primitives for
//! togglable visual layers.
//!
//! # Quick Start
//!
//! ```rust
//! use voronoi_mapgen::*;
//!
//! let config = MapConfigBuilder::new()
//!     .dimensions(800.0, 600.0)
//!     .unwrap()
//!     .point_count(200)
//!     .unwrap()
//!     .rng_seed(42)
//!     .noise_seed(42)
//!     .build()
//!     .unwrap();
//!
//! let mut map = MapGenerator::with_seed(config, "demo").unwrap();
//! map.relax().unwrap();
//! map.prune().unwrap();
//!
//! let mut sink = SvgSink::new(800.0, 600.0);
//! map.draw(&mut sink, &DrawSettings::default());
//! let svg = sink.finish();
//! assert!(svg.contains("<polygon"));
//! ```
//!
//! # Pipeline
//!
//! 1. **Point sampling** — unique integer-coordinate points inside the
//!    padded bound, canonically sorted.
//! 2. **Subdivision** — Delaunay triangulation and clipped Voronoi diagram
//!    via the external engine, wrapped by [`Subdivision`].
//! 3. **Lloyd relaxation** — each site moves to its cell centroid, the
//!    subdivision is rebuilt per step.
//! 4. **Elevation** — simplex noise at scaled coordinates minus a border
//!    bias; `>= 0` is land, everything else ocean.
//! 5. **Pruning** — cells whose 2-hop neighborhood is entirely ocean are
//!    removed and the diagram rebuilt.
//! 6. **Drawing** — primitives per enabled layer go to any [`RenderSink`].

// Modules
pub mod config;
pub mod error;
pub mod generation;
pub mod map;
pub mod render;
pub mod subdivision;
pub mod terrain;

// Re-export core types for convenience
pub use config::{MapConfig, MapConfigBuilder};
pub use error::{MapError, Result};
pub use generation::{
    find_pointless_sites, generate_map_points, lloyd_relaxation, prune_pointless, sort_points,
    LloydOptions, RelaxOutcome, EDGE_PADDING,
};
pub use map::MapGenerator;
pub use render::{Color, DrawSettings, MapPalette, RecordingSink, RenderSink, SvgSink};
pub use subdivision::{Bound, Subdivision};
pub use terrain::{compute_elevation, ElevationField, NoiseSource, SimplexNoise};

// Re-export glam::DVec2 for convenience
pub use glam::DVec2;
