use super::{ControlParameters, InputState};
use crate::components::Owner;

use nalgebra::Vector3;

/// Integrates the body's velocity in its own local frame.
///
/// Local velocity is the persistent state; the world velocity written to the
/// owner is recomputed from it every tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MotionIntegrator {
    velocity: Vector3<f32>,
}

impl Default for MotionIntegrator {
    fn default() -> Self {
        Self {
            velocity: Vector3::zeros(),
        }
    }
}

impl MotionIntegrator {
    pub fn local_velocity(&self) -> Vector3<f32> {
        self.velocity
    }

    pub fn tick(
        &mut self,
        delta_time: f32,
        input: &InputState,
        parameters: &ControlParameters,
        owner: &mut impl Owner,
    ) {
        // Floors at zero instead of flipping sign when braking_power * dt > 1
        let damping = (1.0 - parameters.braking_power * delta_time).max(0.0);
        self.velocity.x *= damping;
        self.velocity.z *= damping;

        let direction = input.direction();
        let step = parameters.acceleration * delta_time;

        if input.depth_active() {
            self.velocity.z -= direction.z * step;
        }
        if input.lateral_active() {
            self.velocity.x -= direction.x * step;
        }

        owner.set_velocity(owner.rotation() * self.velocity);
    }
}
