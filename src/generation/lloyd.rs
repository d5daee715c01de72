//! Lloyd relaxation for map point sets
//!
//! Iteratively replaces each site with the centroid of its Voronoi cell and
//! rebuilds the subdivision, producing a more uniform, honeycomb-like
//! partition. Step N+1 always operates on the diagram resulting from step N.

use glam::DVec2;

use crate::error::Result;
use crate::subdivision::Subdivision;

/// Options for Lloyd relaxation
#[derive(Debug, Clone, Copy)]
pub struct LloydOptions {
    /// Number of relaxation steps to run
    pub steps: usize,
}

impl Default for LloydOptions {
    fn default() -> Self {
        Self { steps: 3 }
    }
}

/// Result of a relaxation run
#[derive(Debug)]
pub struct RelaxOutcome {
    /// Relaxed point set (may be smaller than the input, see `sites_dropped`)
    pub points: Vec<DVec2>,
    /// Subdivision rebuilt from the final point set
    pub subdivision: Subdivision,
    /// Steps actually performed
    pub steps_run: usize,
    /// Sites silently dropped because their cell was degenerate
    ///
    /// Inherited skip-on-failure behavior; surfaced here so callers can
    /// verify the point set did not shrink unexpectedly.
    pub sites_dropped: usize,
    /// Mean site displacement per step, for convergence observation
    pub mean_displacements: Vec<f64>,
}

/// Run Lloyd relaxation against an existing subdivision
///
/// The subdivision is rebuilt after every step; the final rebuild is part of
/// the returned outcome. With `steps == 0` the point set is returned
/// unchanged alongside a fresh rebuild.
///
/// # Errors
///
/// Returns `GenerationFailed` only if a rebuild fails outright (the point
/// set shrank below what the engine accepts). Per-cell degeneracy is logged
/// and skipped.
pub fn lloyd_relaxation(subdivision: &Subdivision, options: LloydOptions) -> Result<RelaxOutcome> {
    let bound = subdivision.bound();
    let mut points: Vec<DVec2> = (0..subdivision.site_count())
        .map(|i| subdivision.site(i))
        .collect();

    let mut current: Option<Subdivision> = None;
    let mut sites_dropped = 0;
    let mut mean_displacements = Vec::with_capacity(options.steps);

    for step in 0..options.steps {
        let source = current.as_ref().unwrap_or(subdivision);
        let (new_points, dropped, mean_displacement) = relax_step(source);

        points = new_points;
        sites_dropped += dropped;
        mean_displacements.push(mean_displacement);
        current = Some(Subdivision::build(&points, bound)?);

        eprintln!(
            "[Lloyd] step {}: {} sites, dropped {}, mean displacement {:.4}",
            step + 1,
            points.len(),
            dropped,
            mean_displacement
        );
    }

    let subdivision = match current {
        Some(built) => built,
        None => Subdivision::build(&points, bound)?,
    };

    Ok(RelaxOutcome {
        points,
        subdivision,
        steps_run: options.steps,
        sites_dropped,
        mean_displacements,
    })
}

/// One relaxation pass: every site moves to its cell centroid
///
/// Sites whose cell polygon or centroid cannot be computed are skipped and
/// drop out of the new point set.
fn relax_step(subdivision: &Subdivision) -> (Vec<DVec2>, usize, f64) {
    let mut new_points = Vec::with_capacity(subdivision.site_count());
    let mut dropped = 0;
    let mut total_displacement = 0.0;

    for index in 0..subdivision.site_count() {
        match subdivision.cell_centroid(index) {
            Ok(centroid) => {
                total_displacement += centroid.distance(subdivision.site(index));
                new_points.push(centroid);
            }
            Err(_) => {
                eprintln!("[Lloyd] skipping degenerate cell {}", index);
                dropped += 1;
            }
        }
    }

    let mean = if new_points.is_empty() {
        0.0
    } else {
        total_displacement / new_points.len() as f64
    };
    (new_points, dropped, mean)
}
