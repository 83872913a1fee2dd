use foundation::Year;

use crate::building::Building;

/// Buildings visible at a cursor year.
///
/// A building is included iff its construction year is known and does not
/// exceed the cursor. Undated buildings never show, regardless of cursor.
/// For a fixed dataset the result at year `y` is a subset of the result at
/// any `y' >= y`.
pub fn visible_at(buildings: &[Building], cursor: Year) -> Vec<&Building> {
    buildings
        .iter()
        .filter(|b| matches!(b.year, Some(y) if y <= cursor))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::visible_at;
    use crate::building::Building;
    use crate::footprint::Footprint;
    use foundation::{LonLat, Year, YearDomain};

    fn building(year: Option<i32>) -> Building {
        Building::new(
            Footprint::Point(LonLat::new(0.0, 0.0)),
            year.map(Year),
            LonLat::new(0.0, 0.0),
            YearDomain::default(),
        )
    }

    fn sample() -> Vec<Building> {
        vec![
            building(Some(1860)),
            building(Some(1900)),
            building(Some(1955)),
            building(None),
            building(Some(2020)),
        ]
    }

    #[test]
    fn includes_only_buildings_at_or_before_cursor() {
        let set = sample();
        let visible = visible_at(&set, Year(1900));
        let years: Vec<_> = visible.iter().map(|b| b.year.unwrap().0).collect();
        assert_eq!(years, vec![1860, 1900]);
    }

    #[test]
    fn undated_buildings_never_show() {
        let set = sample();
        let visible = visible_at(&set, Year(2025));
        assert_eq!(visible.len(), 4);
        assert!(visible.iter().all(|b| b.year.is_some()));
    }

    #[test]
    fn visibility_is_monotonic_in_the_cursor() {
        let set = sample();
        let mut prev = 0usize;
        for y in (1850..=2025).step_by(5) {
            let n = visible_at(&set, Year(y)).len();
            assert!(n >= prev, "visible set shrank at year {y}");
            prev = n;
        }
    }

    #[test]
    fn empty_dataset_yields_empty_view() {
        assert!(visible_at(&[], Year(2000)).is_empty());
    }
}
