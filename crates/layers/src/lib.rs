pub mod builder;
pub mod descriptor;
pub mod style;
pub mod symbology;

pub use builder::*;
pub use descriptor::*;
pub use style::*;
pub use symbology::*;
