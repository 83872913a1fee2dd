use foundation::Rgba;

pub const GEOMETRY_OPACITY: f64 = 0.7;

pub const HEATMAP_RADIUS_PIXELS: u32 = 40;
pub const HEATMAP_OPACITY: f64 = 0.4;
pub const HEATMAP_INTENSITY: f64 = 1.0;
pub const HEATMAP_THRESHOLD: f64 = 0.3;

/// Density ramp from sparse (blue) through cyan, green, yellow to dense (red).
pub const HEATMAP_COLOR_RANGE: [Rgba; 5] = [
    Rgba::new(0, 0, 255, 100),
    Rgba::new(0, 255, 255, 150),
    Rgba::new(0, 255, 0, 200),
    Rgba::new(255, 255, 0, 200),
    Rgba::new(255, 0, 0, 255),
];

/// Fixed camera framing per city, independent of the cursor.
pub const CITY_ZOOM: f64 = 11.0;
pub const CITY_PITCH: f64 = 45.0;

pub const TOOLTIP_TEMPLATE: &str = "Construction Year: {start_date}";
