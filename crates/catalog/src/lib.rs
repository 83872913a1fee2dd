pub mod discover;
pub mod names;

pub use discover::*;
pub use names::*;
