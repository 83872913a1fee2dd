use foundation::LonLat;
use scene::Footprint;
use serde::Serialize;

/// Feature geometry in a renderer-neutral, GeoJSON-shaped form.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", content = "coordinates")]
pub enum FeatureGeometry {
    Point([f64; 2]),
    Polygon(Vec<Vec<[f64; 2]>>),
    MultiPolygon(Vec<Vec<Vec<[f64; 2]>>>),
}

impl From<&Footprint> for FeatureGeometry {
    fn from(footprint: &Footprint) -> Self {
        match footprint {
            Footprint::Point(p) => FeatureGeometry::Point(position(*p)),
            Footprint::Polygon(rings) => FeatureGeometry::Polygon(ring_positions(rings)),
            Footprint::MultiPolygon(polys) => {
                FeatureGeometry::MultiPolygon(polys.iter().map(|p| ring_positions(p)).collect())
            }
        }
    }
}

fn position(p: LonLat) -> [f64; 2] {
    [p.lon_deg, p.lat_deg]
}

fn ring_positions(rings: &[Vec<LonLat>]) -> Vec<Vec<[f64; 2]>> {
    rings
        .iter()
        .map(|ring| ring.iter().map(|p| position(*p)).collect())
        .collect()
}

/// One filtered feature with its precomputed visual state.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LayerFeature {
    pub geometry: FeatureGeometry,
    pub year: i32,
    pub elevation: f64,
    pub color: [u8; 3],
}

/// The extruded building layer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GeometryLayer {
    pub features: Vec<LayerFeature>,
    pub extruded: bool,
    pub opacity: f64,
    pub pickable: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeatmapPoint {
    pub position: [f64; 2],
    /// Raw construction year; density weighting follows the data, not the
    /// encoding.
    pub weight: f64,
}

/// Density overlay weighted by construction year.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeatmapLayer {
    pub points: Vec<HeatmapPoint>,
    pub radius_pixels: u32,
    pub opacity: f64,
    pub intensity: f64,
    pub threshold: f64,
    pub color_range: [[u8; 4]; 5],
}

/// Camera framing for one city.
#[derive(Debug, Copy, Clone, PartialEq, Serialize)]
pub struct ViewState {
    pub latitude: f64,
    pub longitude: f64,
    pub zoom: f64,
    pub pitch: f64,
}

/// Hover tooltip surfacing the raw construction year.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Tooltip {
    pub html: &'static str,
    pub background_color: &'static str,
    pub text_color: &'static str,
}

/// Everything the external renderer needs for one cursor tick.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LayerStack {
    pub cursor_year: i32,
    pub style_url: &'static str,
    pub geometry: GeometryLayer,
    pub heatmap: Option<HeatmapLayer>,
    pub view: ViewState,
    pub tooltip: Tooltip,
}
