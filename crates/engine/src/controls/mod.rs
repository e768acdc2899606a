mod config;
mod controller;
mod error;
mod head_bob;
mod input_state;
mod look;
mod motion;
mod pointer_lock;
mod sound;

pub use config::*;
pub use controller::*;
pub use error::*;
pub use head_bob::*;
pub use input_state::*;
pub use look::*;
pub use motion::*;
pub use pointer_lock::*;
pub use sound::*;
