pub use crate::components::*;
pub use crate::controls::*;
pub use crate::input::*;

pub use bevy_ecs::prelude::{Component, Entity, Mut, Query, Res, ResMut, Resource, World};
pub use nalgebra::{Point3, UnitQuaternion, Vector3};
