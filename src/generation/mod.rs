//! Core map generation pipeline
//!
//! Point sampling, Lloyd relaxation and ocean-interior pruning. The
//! subdivision itself lives in [`crate::subdivision`]; elevation synthesis
//! in [`crate::terrain`].

mod lloyd;
mod points;
mod prune;

pub use lloyd::{lloyd_relaxation, LloydOptions, RelaxOutcome};
pub use points::{generate_map_points, sort_points, EDGE_PADDING};
pub use prune::{find_pointless_sites, prune_pointless};
