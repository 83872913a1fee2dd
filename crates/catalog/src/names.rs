/// Suffix a file must carry to be discovered as a dataset.
pub const DATASET_SUFFIX: &str = "_clean.geojson";

/// Codes whose display name does not title-case cleanly.
const NAME_CORRECTIONS: &[(&str, &str)] = &[
    ("sg", "Singapore"),
    ("nyc", "New York City"),
    ("par", "Paris"),
];

/// Extracts the dataset code from a file name, if it follows the
/// `<code>_clean.geojson` convention.
pub fn dataset_code(file_name: &str) -> Option<&str> {
    let code = file_name.strip_suffix(DATASET_SUFFIX)?;
    if code.is_empty() { None } else { Some(code) }
}

/// Derives a display name from a dataset code: correction table first,
/// title case with underscores as spaces otherwise.
pub fn display_name(code: &str) -> String {
    let key = code.to_ascii_lowercase();
    for (known, name) in NAME_CORRECTIONS {
        if *known == key {
            return (*name).to_string();
        }
    }
    title_case(&key.replace('_', " "))
}

fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for (i, word) in s.split(' ').enumerate() {
        if i > 0 {
            out.push(' ');
        }
        let mut chars = word.chars();
        if let Some(first) = chars.next() {
            out.extend(first.to_uppercase());
            out.push_str(chars.as_str());
        }
    }
    out
}
