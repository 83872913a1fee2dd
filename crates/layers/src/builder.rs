use foundation::Year;
use scene::{City, visible_at};

use crate::descriptor::{
    FeatureGeometry, GeometryLayer, HeatmapLayer, HeatmapPoint, LayerFeature, LayerStack, Tooltip,
    ViewState,
};
use crate::style::ViewOptions;
use crate::symbology::{
    CITY_PITCH, CITY_ZOOM, GEOMETRY_OPACITY, HEATMAP_COLOR_RANGE, HEATMAP_INTENSITY,
    HEATMAP_OPACITY, HEATMAP_RADIUS_PIXELS, HEATMAP_THRESHOLD, TOOLTIP_TEMPLATE,
};

/// Builds the per-tick layer stack for one city.
///
/// A pure function of its inputs; `city` is only read. The visible set is
/// the buildings whose construction year is known and at or before the
/// cursor.
pub fn build(city: &City, cursor: Year, options: &ViewOptions) -> LayerStack {
    let visible = visible_at(&city.buildings, cursor);

    let mut features = Vec::with_capacity(visible.len());
    let mut heat_points = Vec::with_capacity(visible.len());
    for building in visible {
        // visible_at only yields dated buildings.
        let Some(year) = building.year else { continue };

        features.push(LayerFeature {
            geometry: FeatureGeometry::from(&building.footprint),
            year: year.0,
            elevation: building.elevation,
            color: [building.color.r, building.color.g, building.color.b],
        });
        heat_points.push(HeatmapPoint {
            position: [building.centroid.lon_deg, building.centroid.lat_deg],
            weight: f64::from(year.0),
        });
    }

    let geometry = GeometryLayer {
        features,
        extruded: true,
        opacity: GEOMETRY_OPACITY,
        pickable: true,
    };

    let heatmap = options.show_heatmap.then(|| HeatmapLayer {
        points: heat_points,
        radius_pixels: HEATMAP_RADIUS_PIXELS,
        opacity: HEATMAP_OPACITY,
        intensity: HEATMAP_INTENSITY,
        threshold: HEATMAP_THRESHOLD,
        color_range: HEATMAP_COLOR_RANGE.map(|c| [c.r, c.g, c.b, c.a]),
    });

    LayerStack {
        cursor_year: cursor.0,
        style_url: options.style.style_url(),
        geometry,
        heatmap,
        view: ViewState {
            latitude: city.center.lat_deg,
            longitude: city.center.lon_deg,
            zoom: CITY_ZOOM,
            pitch: CITY_PITCH,
        },
        tooltip: Tooltip {
            html: TOOLTIP_TEMPLATE,
            background_color: "black",
            text_color: "white",
        },
    }
}
