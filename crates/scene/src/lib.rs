pub mod building;
pub mod city;
pub mod encoding;
pub mod footprint;
pub mod temporal;

pub use building::*;
pub use city::*;
pub use encoding::*;
pub use footprint::*;
pub use temporal::*;
