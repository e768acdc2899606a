use crate::prelude::*;

/// Capabilities the first-person controls need from the entity they drive.
///
/// The controls never own the entity. They read its rotation, height and speed
/// and write its rotation, velocity and head pose.
pub trait Owner {
    fn rotation(&self) -> UnitQuaternion<f32>;
    fn set_rotation(&mut self, rotation: UnitQuaternion<f32>);
    fn height(&self) -> f32;
    fn set_velocity(&mut self, velocity: Vector3<f32>);
    /// Magnitude of the current velocity
    fn speed(&self) -> f32;
    fn head_mut(&mut self) -> &mut Transform;
}

/// A walking body with a head that sits `height` units above its origin
#[derive(Component, Clone, Debug)]
pub struct Character {
    pub transform: Transform,
    /// World space velocity
    pub velocity: Vector3<f32>,
    pub height: f32,
    /// Head pose, local to `transform`
    pub head: Transform,
}

impl Character {
    pub fn new(position: Point3<f32>, height: f32) -> Self {
        Self {
            transform: Transform::from_position(position),
            velocity: Vector3::zeros(),
            height,
            head: Transform::from_position(Point3::new(0.0, height, 0.0)),
        }
    }

    /// Move the body along its velocity
    pub fn advance(&mut self, delta_time: f32) {
        self.transform.position += self.velocity * delta_time;
    }
}

impl Default for Character {
    fn default() -> Self {
        Self::new(Point3::origin(), 1.8)
    }
}

impl Owner for Character {
    fn rotation(&self) -> UnitQuaternion<f32> {
        self.transform.rotation
    }

    fn set_rotation(&mut self, rotation: UnitQuaternion<f32>) {
        self.transform.rotation = rotation;
    }

    fn height(&self) -> f32 {
        self.height
    }

    fn set_velocity(&mut self, velocity: Vector3<f32>) {
        self.velocity = velocity;
    }

    fn speed(&self) -> f32 {
        self.velocity.magnitude()
    }

    fn head_mut(&mut self) -> &mut Transform {
        &mut self.head
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_speed_is_velocity_magnitude() {
        let mut character = Character::default();
        character.set_velocity(Vector3::new(3.0, 0.0, -4.0));
        assert!((character.speed() - 5.0).abs() < 0.001);
    }

    #[test]
    fn test_advance_moves_along_velocity() {
        let mut character = Character::new(Point3::new(1.0, 0.0, 0.0), 1.5);
        character.velocity = Vector3::new(0.0, 0.0, -2.0);
        character.advance(0.5);
        assert!((character.transform.position.z - (-1.0)).abs() < 0.001);
        assert!((character.transform.position.x - 1.0).abs() < 0.001);
    }
}
