use foundation::{LonLat, mean_center};

/// Building geometry as loaded from a dataset.
#[derive(Debug, Clone, PartialEq)]
pub enum Footprint {
    Point(LonLat),
    /// Outer ring first, then holes.
    Polygon(Vec<Vec<LonLat>>),
    MultiPolygon(Vec<Vec<Vec<LonLat>>>),
}

impl Footprint {
    /// Representative position for centering and heatmap weighting: the
    /// vertex mean over the outer ring(s). `None` for degenerate geometry.
    pub fn centroid(&self) -> Option<LonLat> {
        match self {
            Footprint::Point(p) => Some(*p),
            Footprint::Polygon(rings) => mean_center(rings.first()?),
            Footprint::MultiPolygon(polys) => {
                let mut outer: Vec<LonLat> = Vec::new();
                for rings in polys {
                    if let Some(ring) = rings.first() {
                        outer.extend_from_slice(ring);
                    }
                }
                mean_center(&outer)
            }
        }
    }
}
