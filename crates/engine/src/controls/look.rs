use crate::components::Owner;

use nalgebra::{UnitQuaternion, Vector3};
use std::f32::consts::FRAC_PI_2;

/// Radians of rotation per unit of raw pointer movement
pub const POINTER_SENSITIVITY: f32 = 0.001;

/// Turns pointer deltas into yaw on the body and pitch on the head
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LookController {
    yaw: f32,
    pitch: f32,
}

impl LookController {
    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    /// Apply one pointer sample and write the orientation straight away
    pub fn pointer_moved(&mut self, dx: f32, dy: f32, looking_speed: f32, owner: &mut impl Owner) {
        self.yaw -= dx * POINTER_SENSITIVITY * looking_speed;
        self.pitch -= dy * POINTER_SENSITIVITY * looking_speed;

        self.pitch = self.pitch.clamp(-FRAC_PI_2, FRAC_PI_2);

        self.apply(owner);
    }

    /// Set the orientation as given. Callers keep pitch in range themselves.
    pub fn set_rotation(&mut self, yaw: f32, pitch: f32, owner: &mut impl Owner) {
        self.yaw = yaw;
        self.pitch = pitch;

        self.apply(owner);
    }

    fn apply(&self, owner: &mut impl Owner) {
        owner.set_rotation(UnitQuaternion::from_axis_angle(&Vector3::y_axis(), self.yaw));
        owner.head_mut().rotation = UnitQuaternion::from_axis_angle(&Vector3::x_axis(), self.pitch);
    }
}
