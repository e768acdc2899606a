mod character;
mod label;
mod resources;
mod transform;

pub use character::*;
pub use label::*;
pub use resources::*;
pub use transform::*;
