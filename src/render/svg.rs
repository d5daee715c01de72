//! SVG rendering sink
//!
//! Renders the primitive stream to a standalone SVG document, giving the
//! crate a usable output path without any windowing shell.

use std::fmt::Write;

use glam::DVec2;

use super::{Color, RenderSink};

/// Sink that accumulates primitives into an SVG document
///
/// # Example
///
/// ```rust
/// use voronoi_mapgen::*;
///
/// let mut sink = SvgSink::new(100.0, 100.0);
/// sink.fill_circle(DVec2::new(50.0, 50.0), 5.0, [1.0, 0.0, 0.0, 1.0]);
/// let svg = sink.finish();
/// assert!(svg.starts_with("<svg"));
/// assert!(svg.contains("<circle"));
/// ```
pub struct SvgSink {
    width: f64,
    height: f64,
    background: Option<Color>,
    body: String,
}

impl SvgSink {
    /// Create a sink for a document of the given size
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            background: None,
            body: String::new(),
        }
    }

    /// Fill the document background before any primitives
    pub fn with_background(mut self, color: Color) -> Self {
        self.background = Some(color);
        self
    }

    /// Consume the sink and produce the SVG document
    pub fn finish(self) -> String {
        let mut doc = format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\">\n",
            w = self.width,
            h = self.height
        );
        if let Some(color) = self.background {
            doc.push_str(&format!(
                "  <rect width=\"{}\" height=\"{}\" fill=\"{}\"/>\n",
                self.width,
                self.height,
                rgb(color)
            ));
        }
        doc.push_str(&self.body);
        doc.push_str("</svg>\n");
        doc
    }
}

fn rgb(color: Color) -> String {
    format!(
        "rgb({},{},{})",
        (color[0] * 255.0).round() as u8,
        (color[1] * 255.0).round() as u8,
        (color[2] * 255.0).round() as u8
    )
}

impl RenderSink for SvgSink {
    fn fill_polygon(&mut self, vertices: &[DVec2], color: Color) {
        let mut points = String::with_capacity(vertices.len() * 12);
        for v in vertices {
            let _ = write!(points, "{:.2},{:.2} ", v.x, v.y);
        }
        let _ = writeln!(
            self.body,
            "  <polygon points=\"{}\" fill=\"{}\" fill-opacity=\"{}\"/>",
            points.trim_end(),
            rgb(color),
            color[3]
        );
    }

    fn stroke_edge(&mut self, from: DVec2, to: DVec2, width: f64, color: Color) {
        let _ = writeln!(
            self.body,
            "  <line x1=\"{:.2}\" y1=\"{:.2}\" x2=\"{:.2}\" y2=\"{:.2}\" stroke=\"{}\" stroke-width=\"{}\" stroke-opacity=\"{}\"/>",
            from.x, from.y, to.x, to.y,
            rgb(color),
            width,
            color[3]
        );
    }

    fn fill_circle(&mut self, center: DVec2, radius: f64, color: Color) {
        let _ = writeln!(
            self.body,
            "  <circle cx=\"{:.2}\" cy=\"{:.2}\" r=\"{}\" fill=\"{}\" fill-opacity=\"{}\"/>",
            center.x, center.y, radius,
            rgb(color),
            color[3]
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_structure() {
        let mut sink = SvgSink::new(200.0, 100.0).with_background([0.0, 0.0, 0.0, 1.0]);
        sink.fill_polygon(
            &[
                DVec2::new(10.0, 10.0),
                DVec2::new(50.0, 10.0),
                DVec2::new(30.0, 40.0),
            ],
            [0.5, 0.5, 0.5, 1.0],
        );
        sink.stroke_edge(DVec2::ZERO, DVec2::new(200.0, 100.0), 2.0, [1.0, 1.0, 1.0, 1.0]);
        sink.fill_circle(DVec2::new(100.0, 50.0), 5.0, [1.0, 0.0, 0.0, 0.5]);

        let doc = sink.finish();
        assert!(doc.starts_with("<svg"));
        assert!(doc.contains("<rect"));
        assert!(doc.contains("<polygon"));
        assert!(doc.contains("<line"));
        assert!(doc.contains("<circle"));
        assert!(doc.ends_with("</svg>\n"));
    }

    #[test]
    fn test_rgb_formatting() {
        assert_eq!(rgb([1.0, 0.0, 0.5, 1.0]), "rgb(255,0,128)");
        assert_eq!(rgb([0.259, 0.259, 0.412, 1.0]), "rgb(66,66,105)");
    }
}
