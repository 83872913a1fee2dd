use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use foundation::{LonLat, YearDomain, mean_center};
use formats::{CONSTRUCTION_YEAR_KEY, FeatureCollection, GeoGeometry, coerce_year};
use scene::{Building, City, Footprint};
use tracing::{debug, info, warn};

use crate::names::{DATASET_SUFFIX, dataset_code, display_name};

/// One skipped dataset and the reason it was skipped.
#[derive(Debug, Clone, PartialEq)]
pub struct DatasetDiagnostic {
    pub path: PathBuf,
    pub reason: String,
}

/// The immutable city registry built once by discovery.
///
/// Keyed by display name; `BTreeMap` keeps lookup and presentation order
/// stable. Queried for the rest of the session, never re-scanned.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct CityRegistry {
    pub cities: BTreeMap<String, City>,
    pub skipped: Vec<DatasetDiagnostic>,
}

impl CityRegistry {
    pub fn get(&self, display_name: &str) -> Option<&City> {
        self.cities.get(display_name)
    }

    pub fn city_names(&self) -> Vec<&str> {
        self.cities.keys().map(String::as_str).collect()
    }

    pub fn len(&self) -> usize {
        self.cities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }
}

#[derive(Debug)]
pub enum CatalogError {
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl std::fmt::Display for CatalogError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CatalogError::Io { path, source } => {
                write!(f, "failed to scan {}: {source}", path.display())
            }
        }
    }
}

impl std::error::Error for CatalogError {}

/// Scans `dir` for `<code>_clean.geojson` datasets and loads each into a
/// [`City`], using the default construction-year domain.
pub fn discover(dir: impl AsRef<Path>) -> Result<CityRegistry, CatalogError> {
    discover_with_domain(dir, YearDomain::default())
}

/// Discovery with an explicit encoding domain.
///
/// A file that fails to read or parse is skipped with a diagnostic and a
/// `warn` log line; it never aborts discovery of the other cities. Candidate
/// files are processed in sorted order so the registry is deterministic.
/// Only a directory-level scan failure is an error.
pub fn discover_with_domain(
    dir: impl AsRef<Path>,
    domain: YearDomain,
) -> Result<CityRegistry, CatalogError> {
    let dir = dir.as_ref();
    let entries = fs::read_dir(dir).map_err(|e| CatalogError::Io {
        path: dir.to_path_buf(),
        source: e,
    })?;

    let mut paths: Vec<PathBuf> = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| CatalogError::Io {
            path: dir.to_path_buf(),
            source: e,
        })?;
        let path = entry.path();
        let Some(name) = path.file_name().and_then(|s| s.to_str()) else {
            continue;
        };
        if name.ends_with(DATASET_SUFFIX) && path.is_file() {
            paths.push(path);
        }
    }
    paths.sort();

    let mut registry = CityRegistry::default();
    for path in paths {
        match load_city(&path, domain) {
            Ok(city) => {
                info!(
                    city = %city.name,
                    buildings = city.buildings.len(),
                    "loaded dataset"
                );
                registry.cities.insert(city.name.clone(), city);
            }
            Err(reason) => {
                warn!(path = %path.display(), %reason, "skipping dataset");
                registry.skipped.push(DatasetDiagnostic { path, reason });
            }
        }
    }

    Ok(registry)
}

fn load_city(path: &Path, domain: YearDomain) -> Result<City, String> {
    let file_name = path
        .file_name()
        .and_then(|s| s.to_str())
        .ok_or_else(|| "invalid file name".to_string())?;
    let code = dataset_code(file_name)
        .ok_or_else(|| "file does not follow the dataset naming convention".to_string())?
        .to_ascii_lowercase();

    let payload = fs::read_to_string(path).map_err(|e| format!("read failed: {e}"))?;
    let fc = FeatureCollection::from_geojson_str(&payload).map_err(|e| e.to_string())?;

    let mut buildings = Vec::with_capacity(fc.features.len());
    for feature in fc.features {
        let footprint = footprint_from(feature.geometry);
        let Some(centroid) = footprint.centroid() else {
            debug!(dataset = %code, "dropping feature with degenerate geometry");
            continue;
        };
        let year = coerce_year(&feature.properties, CONSTRUCTION_YEAR_KEY);
        buildings.push(Building::new(footprint, year, centroid, domain));
    }

    let centroids: Vec<LonLat> = buildings.iter().map(|b| b.centroid).collect();
    let center = mean_center(&centroids)
        .ok_or_else(|| "dataset has no usable features".to_string())?;

    Ok(City {
        name: display_name(&code),
        id: code,
        buildings,
        center,
    })
}

fn footprint_from(geometry: GeoGeometry) -> Footprint {
    match geometry {
        GeoGeometry::Point(p) => Footprint::Point(p),
        GeoGeometry::Polygon(rings) => Footprint::Polygon(rings),
        GeoGeometry::MultiPolygon(polys) => Footprint::MultiPolygon(polys),
    }
}
