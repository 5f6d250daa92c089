pub mod input;
pub mod mapping;

pub use input::*;
pub use mapping::*;
