mod first_person;
mod movement;

pub use first_person::*;
pub use movement::*;
