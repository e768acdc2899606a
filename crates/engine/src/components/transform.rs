use crate::prelude::*;

#[derive(Component, Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    pub position: Point3<f32>,
    pub rotation: UnitQuaternion<f32>,
}

impl Transform {
    pub fn from_position(position: Point3<f32>) -> Self {
        Self {
            position,
            ..Default::default()
        }
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Point3::origin(),
            rotation: UnitQuaternion::identity(),
        }
    }
}
