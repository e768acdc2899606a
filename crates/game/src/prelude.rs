pub use wayfarer_engine::prelude::*;
