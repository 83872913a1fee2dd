pub mod controller;
pub mod cursor;
pub mod speed;

pub use controller::*;
pub use cursor::*;
pub use speed::*;
