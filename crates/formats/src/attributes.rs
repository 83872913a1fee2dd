use foundation::Year;
use serde_json::{Map, Value};

/// Attribute key carrying the construction year in the cleaned datasets.
pub const CONSTRUCTION_YEAR_KEY: &str = "start_date";

/// Coerces a feature attribute to a calendar year.
///
/// Numbers round to the nearest year and numeric strings are trimmed and
/// parsed. Missing, null, non-finite, or otherwise non-coercible values map
/// to `None`, never to an error; the feature still loads.
pub fn coerce_year(properties: &Map<String, Value>, key: &str) -> Option<Year> {
    let raw = match properties.get(key)? {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => s.trim().parse::<f64>().ok()?,
        _ => return None,
    };
    if !raw.is_finite() {
        return None;
    }
    Some(Year(raw.round() as i32))
}

#[cfg(test)]
mod tests {
    use super::{CONSTRUCTION_YEAR_KEY, coerce_year};
    use foundation::Year;
    use serde_json::{Map, Value, json};

    fn props(value: Value) -> Map<String, Value> {
        let mut m = Map::new();
        m.insert(CONSTRUCTION_YEAR_KEY.to_string(), value);
        m
    }

    #[test]
    fn coerces_integer_years() {
        let p = props(json!(1905));
        assert_eq!(coerce_year(&p, CONSTRUCTION_YEAR_KEY), Some(Year(1905)));
    }

    #[test]
    fn rounds_fractional_years() {
        let p = props(json!(1987.6));
        assert_eq!(coerce_year(&p, CONSTRUCTION_YEAR_KEY), Some(Year(1988)));
    }

    #[test]
    fn coerces_numeric_strings() {
        let p = props(json!("  1923 "));
        assert_eq!(coerce_year(&p, CONSTRUCTION_YEAR_KEY), Some(Year(1923)));
    }

    #[test]
    fn non_numeric_values_are_absent() {
        for v in [json!("circa 1900"), json!(null), json!(true), json!([1900])] {
            let p = props(v);
            assert_eq!(coerce_year(&p, CONSTRUCTION_YEAR_KEY), None);
        }
    }

    #[test]
    fn missing_key_is_absent() {
        let p = Map::new();
        assert_eq!(coerce_year(&p, CONSTRUCTION_YEAR_KEY), None);
    }

    #[test]
    fn non_finite_strings_are_absent() {
        let p = props(json!("NaN"));
        assert_eq!(coerce_year(&p, CONSTRUCTION_YEAR_KEY), None);
    }
}
