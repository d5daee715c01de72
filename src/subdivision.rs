//! Planar subdivision adapter
//!
//! Thin façade over the external geometric engine ([`voronoice`]). Rebuilt
//! from scratch after every mutation of the point set; never patched in
//! place. Site indices follow the order of the input point slice.
//!
//! Sites at the extreme boundary or involved in degenerate geometry can
//! yield empty cells from the engine. Every consumer treats that as a
//! recoverable per-cell failure, never as fatal to a whole pass.

use std::collections::HashSet;

use delaunator::{next_halfedge, EMPTY};
use geo::{Centroid, LineString, Polygon};
use glam::DVec2;
use voronoice::{BoundingBox, ClipBehavior, Point, Voronoi, VoronoiBuilder};

use crate::error::{MapError, Result};

/// Fixed rectangular bound `(0,0)..(width,height)` of a generated map
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bound {
    /// Extent along the x axis
    pub width: f64,
    /// Extent along the y axis
    pub height: f64,
}

impl Bound {
    /// Create a bound anchored at the origin
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// The engine expects a center-anchored box
    fn bounding_box(&self) -> BoundingBox {
        BoundingBox::new(
            Point {
                x: self.width / 2.0,
                y: self.height / 2.0,
            },
            self.width,
            self.height,
        )
    }
}

/// Delaunay triangulation and clipped Voronoi diagram over a point set
///
/// Derived data: any change to the point set invalidates the subdivision
/// and requires a full [`Subdivision::build`].
#[derive(Debug)]
pub struct Subdivision {
    diagram: Voronoi,
    bound: Bound,
}

impl Subdivision {
    /// Build the subdivision for a point set within a bound
    ///
    /// # Errors
    ///
    /// Returns `GenerationFailed` if the engine rejects the input outright
    /// (fewer than three sites, or fully collinear sites). This is the only
    /// fatal failure in the pipeline; per-cell degeneracy is reported by the
    /// individual accessors instead.
    pub fn build(points: &[DVec2], bound: Bound) -> Result<Self> {
        let sites: Vec<Point> = points.iter().map(|p| Point { x: p.x, y: p.y }).collect();
        let diagram = VoronoiBuilder::default()
            .set_sites(sites)
            .set_bounding_box(bound.bounding_box())
            .set_clip_behavior(ClipBehavior::Clip)
            .build()
            .ok_or_else(|| {
                MapError::GenerationFailed(format!(
                    "subdivision engine rejected {} sites",
                    points.len()
                ))
            })?;
        Ok(Self { diagram, bound })
    }

    /// Number of queryable sites
    #[inline]
    pub fn site_count(&self) -> usize {
        self.diagram.sites().len()
    }

    /// Bound the diagram was clipped to
    #[inline]
    pub fn bound(&self) -> Bound {
        self.bound
    }

    /// Raw coordinates of a site, in input order
    ///
    /// # Panics
    ///
    /// Panics if `index >= site_count()`.
    #[inline]
    pub fn site(&self, index: usize) -> DVec2 {
        let p = &self.diagram.sites()[index];
        DVec2::new(p.x, p.y)
    }

    /// Ordered vertex ring of a site's clipped Voronoi cell
    ///
    /// Returns `None` for out-of-range indices and for degenerate cells
    /// (fewer than three ring vertices), which the engine can produce for
    /// boundary-exotic sites.
    pub fn cell_polygon(&self, index: usize) -> Option<Vec<DVec2>> {
        if index >= self.site_count() {
            return None;
        }
        let ring: Vec<DVec2> = self
            .diagram
            .cell(index)
            .iter_vertices()
            .map(|v| DVec2::new(v.x, v.y))
            .collect();
        if ring.len() < 3 {
            None
        } else {
            Some(ring)
        }
    }

    /// Indices of sites sharing a Delaunay edge with `index`
    pub fn neighbors(&self, index: usize) -> Vec<usize> {
        if index >= self.site_count() {
            return Vec::new();
        }
        self.diagram.cell(index).iter_neighbors().collect()
    }

    /// Area-weighted centroid of a site's cell polygon
    ///
    /// # Errors
    ///
    /// Returns `DegenerateCell` when the ring is empty or the centroid is
    /// undefined. Callers recover by skipping the site.
    pub fn cell_centroid(&self, index: usize) -> Result<DVec2> {
        let ring = self
            .cell_polygon(index)
            .ok_or(MapError::DegenerateCell(index))?;
        let exterior = LineString::from(
            ring.iter().map(|v| (v.x, v.y)).collect::<Vec<(f64, f64)>>(),
        );
        let centroid = Polygon::new(exterior, vec![])
            .centroid()
            .ok_or(MapError::DegenerateCell(index))?;
        Ok(DVec2::new(centroid.x(), centroid.y()))
    }

    /// Every Delaunay edge exactly once, as pairs of site coordinates
    ///
    /// Walks the half-edge structure and keeps an edge when it is either on
    /// the hull or the lesser of its two half-edges.
    pub fn delaunay_edges(&self) -> Vec<(DVec2, DVec2)> {
        let triangulation = self.diagram.triangulation();
        let sites = self.diagram.sites();
        let mut edges = Vec::with_capacity(triangulation.triangles.len() / 2);
        for edge in 0..triangulation.triangles.len() {
            let twin = triangulation.halfedges[edge];
            if twin == EMPTY || edge < twin {
                let p = &sites[triangulation.triangles[edge]];
                let q = &sites[triangulation.triangles[next_halfedge(edge)]];
                edges.push((DVec2::new(p.x, p.y), DVec2::new(q.x, q.y)));
            }
        }
        edges
    }

    /// Boundary segments of every clipped cell ring, deduplicated
    ///
    /// Interior edges are shared verbatim between the two adjacent rings, so
    /// segments are normalized to a canonical direction and deduplicated on
    /// exact coordinates.
    pub fn voronoi_edges(&self) -> Vec<(DVec2, DVec2)> {
        let mut seen: HashSet<(u64, u64, u64, u64)> = HashSet::new();
        let mut edges = Vec::new();
        for index in 0..self.site_count() {
            let Some(ring) = self.cell_polygon(index) else {
                continue;
            };
            for i in 0..ring.len() {
                let mut a = ring[i];
                let mut b = ring[(i + 1) % ring.len()];
                if (b.x, b.y) < (a.x, a.y) {
                    std::mem::swap(&mut a, &mut b);
                }
                let key = (a.x.to_bits(), a.y.to_bits(), b.x.to_bits(), b.y.to_bits());
                if seen.insert(key) {
                    edges.push((a, b));
                }
            }
        }
        edges
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square_sites() -> Vec<DVec2> {
        vec![
            DVec2::new(100.0, 100.0),
            DVec2::new(300.0, 100.0),
            DVec2::new(100.0, 300.0),
            DVec2::new(300.0, 300.0),
            DVec2::new(200.0, 200.0),
        ]
    }

    #[test]
    fn test_build_preserves_site_order() {
        let sites = square_sites();
        let subdivision = Subdivision::build(&sites, Bound::new(400.0, 400.0)).unwrap();

        assert_eq!(subdivision.site_count(), sites.len());
        for (index, site) in sites.iter().enumerate() {
            assert_eq!(subdivision.site(index), *site);
        }
    }

    #[test]
    fn test_build_rejects_degenerate_input() {
        let two = vec![DVec2::new(10.0, 10.0), DVec2::new(20.0, 20.0)];
        assert!(Subdivision::build(&two, Bound::new(100.0, 100.0)).is_err());
    }

    #[test]
    fn test_cell_polygon_interior_site() {
        let subdivision = Subdivision::build(&square_sites(), Bound::new(400.0, 400.0)).unwrap();

        // The center site is surrounded and must have a proper ring
        let ring = subdivision.cell_polygon(4).expect("interior cell");
        assert!(ring.len() >= 3);
        for vertex in &ring {
            assert!(vertex.x >= 0.0 && vertex.x <= 400.0);
            assert!(vertex.y >= 0.0 && vertex.y <= 400.0);
        }
    }

    #[test]
    fn test_cell_polygon_out_of_range() {
        let subdivision = Subdivision::build(&square_sites(), Bound::new(400.0, 400.0)).unwrap();
        assert!(subdivision.cell_polygon(99).is_none());
        assert!(subdivision.neighbors(99).is_empty());
    }

    #[test]
    fn test_center_site_neighbors_all_corners() {
        let subdivision = Subdivision::build(&square_sites(), Bound::new(400.0, 400.0)).unwrap();

        let mut neighbors = subdivision.neighbors(4);
        neighbors.sort();
        assert_eq!(neighbors, vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_cell_centroid_of_symmetric_cell() {
        let subdivision = Subdivision::build(&square_sites(), Bound::new(400.0, 400.0)).unwrap();

        // The center cell is a diamond symmetric about (200, 200)
        let centroid = subdivision.cell_centroid(4).unwrap();
        approx::assert_relative_eq!(centroid.x, 200.0, epsilon = 1e-9);
        approx::assert_relative_eq!(centroid.y, 200.0, epsilon = 1e-9);
    }

    #[test]
    fn test_delaunay_edges_unique_and_nonempty() {
        let subdivision = Subdivision::build(&square_sites(), Bound::new(400.0, 400.0)).unwrap();

        let edges = subdivision.delaunay_edges();
        // 5 sites triangulate into 4 triangles sharing interior edges:
        // 8 distinct edges (4 hull + 4 spokes to the center site)
        assert_eq!(edges.len(), 8);
    }

    #[test]
    fn test_voronoi_edges_deduplicated() {
        let subdivision = Subdivision::build(&square_sites(), Bound::new(400.0, 400.0)).unwrap();

        let edges = subdivision.voronoi_edges();
        assert!(!edges.is_empty());
        // every segment canonicalized, so no pair may repeat
        let mut seen = std::collections::HashSet::new();
        for (a, b) in &edges {
            let key = (a.x.to_bits(), a.y.to_bits(), b.x.to_bits(), b.y.to_bits());
            assert!(seen.insert(key));
        }
    }
}
