pub mod attributes;
pub mod geojson;

pub use attributes::*;
pub use geojson::*;
