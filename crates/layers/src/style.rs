use serde::Serialize;

/// Base map styles the renderer understands. The style identifier is passed
/// through opaquely; the core never interprets it.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
pub enum MapStyle {
    Light,
    Dark,
    Satellite,
    Outdoors,
}

impl MapStyle {
    pub fn style_url(self) -> &'static str {
        match self {
            MapStyle::Light => "mapbox://styles/mapbox/light-v10",
            MapStyle::Dark => "mapbox://styles/mapbox/dark-v10",
            MapStyle::Satellite => "mapbox://styles/mapbox/satellite-v9",
            MapStyle::Outdoors => "mapbox://styles/mapbox/outdoors-v11",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "light" => Some(MapStyle::Light),
            "dark" => Some(MapStyle::Dark),
            "satellite" => Some(MapStyle::Satellite),
            "outdoors" => Some(MapStyle::Outdoors),
            _ => None,
        }
    }
}

/// Display options forwarded from the UI layer, consumed opaquely by the
/// layer builder.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct ViewOptions {
    pub style: MapStyle,
    pub show_heatmap: bool,
}

impl Default for ViewOptions {
    fn default() -> Self {
        Self {
            style: MapStyle::Light,
            show_heatmap: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::MapStyle;

    #[test]
    fn style_names_resolve_case_insensitively() {
        assert_eq!(MapStyle::from_name("light"), Some(MapStyle::Light));
        assert_eq!(MapStyle::from_name("Dark"), Some(MapStyle::Dark));
        assert_eq!(MapStyle::from_name("SATELLITE"), Some(MapStyle::Satellite));
        assert_eq!(MapStyle::from_name("outdoors"), Some(MapStyle::Outdoors));
        assert_eq!(MapStyle::from_name("neon"), None);
    }

    #[test]
    fn every_style_has_a_url() {
        for style in [
            MapStyle::Light,
            MapStyle::Dark,
            MapStyle::Satellite,
            MapStyle::Outdoors,
        ] {
            assert!(style.style_url().starts_with("mapbox://styles/mapbox/"));
        }
    }
}
