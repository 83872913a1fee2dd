use foundation::LonLat;

use crate::building::Building;

/// A named dataset: one city's buildings and its map center.
///
/// Built once at discovery and read-only afterward; render ticks only ever
/// derive filtered views from it.
#[derive(Debug, Clone, PartialEq)]
pub struct City {
    /// Canonical lower-cased dataset code (e.g. `sg`).
    pub id: String,
    /// Display name (e.g. `Singapore`).
    pub name: String,
    pub buildings: Vec<Building>,
    /// Mean of all building centroids.
    pub center: LonLat,
}
