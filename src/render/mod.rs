//! Rendering surface
//!
//! The generator emits backend-agnostic drawable primitives (filled
//! polygons, stroked edges, filled circles) to a [`RenderSink`]. Shells plug
//! in their own sink; [`SvgSink`] renders to an SVG document and
//! [`RecordingSink`] captures the primitive stream for inspection.

mod colors;
mod svg;

pub use colors::{Color, MapPalette};
pub use svg::SvgSink;

use glam::DVec2;

/// Visual layer toggles
///
/// All layers are enabled by default.
#[derive(Debug, Clone, Copy)]
pub struct DrawSettings {
    /// Fill each cell by land/ocean classification
    pub cell_color: bool,
    /// Stroke Voronoi cell boundaries
    pub voronoi: bool,
    /// Stroke Delaunay triangulation edges
    pub delaunay: bool,
    /// Mark each site
    pub cell_site: bool,
    /// Mark each cell centroid
    pub centroids: bool,
}

impl Default for DrawSettings {
    fn default() -> Self {
        Self {
            cell_color: true,
            voronoi: true,
            delaunay: true,
            cell_site: true,
            centroids: true,
        }
    }
}

/// Drawing primitive consumer
///
/// Implementations are pure I/O sinks; all geometry and color decisions are
/// made by the caller.
pub trait RenderSink {
    /// Fill a closed polygon given by its vertex ring
    fn fill_polygon(&mut self, vertices: &[DVec2], color: Color);
    /// Stroke a single line segment
    fn stroke_edge(&mut self, from: DVec2, to: DVec2, width: f64, color: Color);
    /// Fill a circle
    fn fill_circle(&mut self, center: DVec2, radius: f64, color: Color);
}

/// Sink that records every primitive it receives
///
/// Useful in tests and for shells that batch primitives before uploading
/// them to a renderer.
#[derive(Debug, Default)]
pub struct RecordingSink {
    /// Recorded polygon fills
    pub polygons: Vec<(Vec<DVec2>, Color)>,
    /// Recorded edge strokes
    pub edges: Vec<(DVec2, DVec2, f64, Color)>,
    /// Recorded circle fills
    pub circles: Vec<(DVec2, f64, Color)>,
}

impl RecordingSink {
    /// Create an empty sink
    pub fn new() -> Self {
        Self::default()
    }

    /// Total primitives recorded across all kinds
    pub fn primitive_count(&self) -> usize {
        self.polygons.len() + self.edges.len() + self.circles.len()
    }
}

impl RenderSink for RecordingSink {
    fn fill_polygon(&mut self, vertices: &[DVec2], color: Color) {
        self.polygons.push((vertices.to_vec(), color));
    }

    fn stroke_edge(&mut self, from: DVec2, to: DVec2, width: f64, color: Color) {
        self.edges.push((from, to, width, color));
    }

    fn fill_circle(&mut self, center: DVec2, radius: f64, color: Color) {
        self.circles.push((center, radius, color));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_sink_captures_primitives() {
        let mut sink = RecordingSink::new();
        let color = [1.0, 0.0, 0.0, 1.0];

        sink.fill_polygon(
            &[
                DVec2::new(0.0, 0.0),
                DVec2::new(1.0, 0.0),
                DVec2::new(0.0, 1.0),
            ],
            color,
        );
        sink.stroke_edge(DVec2::ZERO, DVec2::ONE, 2.0, color);
        sink.fill_circle(DVec2::new(5.0, 5.0), 3.0, color);

        assert_eq!(sink.polygons.len(), 1);
        assert_eq!(sink.edges.len(), 1);
        assert_eq!(sink.circles.len(), 1);
        assert_eq!(sink.primitive_count(), 3);
    }

    #[test]
    fn test_default_settings_enable_all_layers() {
        let settings = DrawSettings::default();
        assert!(settings.cell_color);
        assert!(settings.voronoi);
        assert!(settings.delaunay);
        assert!(settings.cell_site);
        assert!(settings.centroids);
    }
}
