use foundation::{Rgb, Year, YearDomain};

/// Neutral gray for features with no construction year.
pub const UNDATED_COLOR: Rgb = Rgb::new(200, 200, 200);

/// Derived visual state for one feature.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Encoding {
    pub elevation: f64,
    pub color: Rgb,
}

/// Maps a construction year to its visual encoding.
///
/// Pure and per-feature independent, so it can be applied to a whole
/// dataset in any order (or in parallel). An absent year yields NaN
/// elevation (never zero) and neutral gray. A present year normalizes into
/// the domain, clamped: elevation is `t * 100`, the blue channel is
/// `255 * (1 - t)` — older buildings render darker and shorter, newer
/// lighter and taller.
pub fn encode(year: Option<Year>, domain: YearDomain) -> Encoding {
    let Some(year) = year else {
        return Encoding {
            elevation: f64::NAN,
            color: UNDATED_COLOR,
        };
    };

    let t = domain.normalized(year);
    Encoding {
        elevation: t * 100.0,
        color: Rgb::new(0, 0, (255.0 * (1.0 - t)).round() as u8),
    }
}

#[cfg(test)]
mod tests {
    use super::{UNDATED_COLOR, encode};
    use foundation::{Rgb, Year, YearDomain};

    fn domain() -> YearDomain {
        YearDomain::default()
    }

    #[test]
    fn elevation_spans_zero_to_one_hundred() {
        assert_eq!(encode(Some(Year(1850)), domain()).elevation, 0.0);
        assert_eq!(encode(Some(Year(2025)), domain()).elevation, 100.0);
    }

    #[test]
    fn elevation_matches_linear_formula() {
        for y in 1850..=2025 {
            let expected = (y - 1850) as f64 / 175.0 * 100.0;
            assert_eq!(encode(Some(Year(y)), domain()).elevation, expected);
        }
    }

    #[test]
    fn elevation_is_strictly_increasing() {
        let mut prev = -1.0;
        for y in 1850..=2025 {
            let e = encode(Some(Year(y)), domain()).elevation;
            assert!(e > prev, "elevation must increase at year {y}");
            prev = e;
        }
    }

    #[test]
    fn blue_channel_matches_formula_and_decreases() {
        let mut prev = u16::MAX;
        for y in 1850..=2025 {
            let t = (y - 1850) as f64 / 175.0;
            let expected = (255.0 * (1.0 - t)).round() as u8;
            let c = encode(Some(Year(y)), domain()).color;
            assert_eq!(c, Rgb::new(0, 0, expected));
            assert!(u16::from(c.b) <= prev);
            prev = u16::from(c.b);
        }
        assert_eq!(encode(Some(Year(1850)), domain()).color.b, 255);
        assert_eq!(encode(Some(Year(2025)), domain()).color.b, 0);
    }

    #[test]
    fn absent_year_is_gray_with_nan_elevation() {
        let e = encode(None, domain());
        assert!(e.elevation.is_nan());
        assert_eq!(e.color, UNDATED_COLOR);
    }

    #[test]
    fn out_of_domain_years_clamp_to_endpoints() {
        let low = encode(Some(Year(1700)), domain());
        assert_eq!(low, encode(Some(Year(1850)), domain()));
        let high = encode(Some(Year(2300)), domain());
        assert_eq!(high, encode(Some(Year(2025)), domain()));
    }
}
