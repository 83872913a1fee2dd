/// Geographic position in degrees.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct LonLat {
    pub lon_deg: f64,
    pub lat_deg: f64,
}

impl LonLat {
    pub fn new(lon_deg: f64, lat_deg: f64) -> Self {
        Self { lon_deg, lat_deg }
    }
}

/// Mean position of a point set. `None` for an empty set.
pub fn mean_center(points: &[LonLat]) -> Option<LonLat> {
    if points.is_empty() {
        return None;
    }
    let mut lon = 0.0;
    let mut lat = 0.0;
    for p in points {
        lon += p.lon_deg;
        lat += p.lat_deg;
    }
    let n = points.len() as f64;
    Some(LonLat::new(lon / n, lat / n))
}

#[cfg(test)]
mod tests {
    use super::{LonLat, mean_center};

    #[test]
    fn mean_center_averages_coordinates() {
        let pts = [LonLat::new(0.0, 10.0), LonLat::new(2.0, 20.0)];
        let c = mean_center(&pts).unwrap();
        assert_eq!(c.lon_deg, 1.0);
        assert_eq!(c.lat_deg, 15.0);
    }

    #[test]
    fn mean_center_of_empty_set_is_none() {
        assert!(mean_center(&[]).is_none());
    }
}
