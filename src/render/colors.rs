//! Layer palette for map drawing

/// RGBA color type
pub type Color = [f32; 4];

/// Colors and stroke metrics for every visual layer
#[derive(Debug, Clone)]
pub struct MapPalette {
    /// Fill for cells below sea level (#424269)
    pub ocean: Color,
    /// Fill for cells at or above sea level (#d1a882)
    pub land: Color,
    /// Voronoi edge stroke (#cecece)
    pub voronoi_edge: Color,
    /// Delaunay edge stroke (#42a786)
    pub delaunay_edge: Color,
    /// Site marker fill (translucent white)
    pub site: Color,
    /// Centroid marker fill (translucent #d95d39)
    pub centroid: Color,
    /// Stroke width for both edge layers
    pub edge_width: f64,
    /// Radius for site and centroid markers
    pub marker_radius: f64,
}

impl Default for MapPalette {
    fn default() -> Self {
        Self {
            ocean: [0.259, 0.259, 0.412, 1.0],
            land: [0.820, 0.659, 0.510, 1.0],
            voronoi_edge: [0.808, 0.808, 0.808, 1.0],
            delaunay_edge: [0.259, 0.655, 0.525, 1.0],
            site: [1.0, 1.0, 1.0, 0.75],
            centroid: [0.851, 0.365, 0.224, 0.5],
            edge_width: 2.0,
            marker_radius: 5.0,
        }
    }
}
