use foundation::{LonLat, Rgb, Year, YearDomain};

use crate::encoding::encode;
use crate::footprint::Footprint;

/// One building footprint plus its derived visual state.
///
/// Derived fields are computed once at ingest and never mutated afterward.
/// `elevation` is in `[0, 100]` whenever `year` is present and NaN when it
/// is absent; `color` is a function of `year` alone.
#[derive(Debug, Clone, PartialEq)]
pub struct Building {
    pub footprint: Footprint,
    pub year: Option<Year>,
    pub elevation: f64,
    pub color: Rgb,
    pub centroid: LonLat,
}

impl Building {
    pub fn new(
        footprint: Footprint,
        year: Option<Year>,
        centroid: LonLat,
        domain: YearDomain,
    ) -> Self {
        let encoding = encode(year, domain);
        Self {
            footprint,
            year,
            elevation: encoding.elevation,
            color: encoding.color,
            centroid,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Building;
    use crate::encoding::UNDATED_COLOR;
    use crate::footprint::Footprint;
    use foundation::{LonLat, Year, YearDomain};

    #[test]
    fn new_applies_the_encoding() {
        let b = Building::new(
            Footprint::Point(LonLat::new(0.0, 0.0)),
            Some(Year(2025)),
            LonLat::new(0.0, 0.0),
            YearDomain::default(),
        );
        assert_eq!(b.elevation, 100.0);
        assert_eq!(b.color.b, 0);
    }

    #[test]
    fn undated_building_is_gray() {
        let b = Building::new(
            Footprint::Point(LonLat::new(0.0, 0.0)),
            None,
            LonLat::new(0.0, 0.0),
            YearDomain::default(),
        );
        assert!(b.elevation.is_nan());
        assert_eq!(b.color, UNDATED_COLOR);
    }
}
