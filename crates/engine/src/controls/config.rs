/// Tuning constants for [`FirstPersonControls`](super::FirstPersonControls).
///
/// Fixed for the lifetime of a controller; build a new controller to change them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControlParameters {
    /// Velocity gained per second while a direction key is held
    pub acceleration: f32,
    /// Fraction of velocity removed per second
    pub braking_power: f32,
    /// Multiplier on pointer look sensitivity
    pub looking_speed: f32,
    /// Head bob frequency relative to movement speed
    pub head_movement: f32,
}

impl Default for ControlParameters {
    fn default() -> Self {
        Self {
            acceleration: 40.0,
            braking_power: 10.0,
            looking_speed: 1.0,
            head_movement: 1.5,
        }
    }
}

impl ControlParameters {
    pub fn with_acceleration(mut self, acceleration: f32) -> Self {
        self.acceleration = acceleration;
        self
    }

    pub fn with_braking_power(mut self, braking_power: f32) -> Self {
        self.braking_power = braking_power;
        self
    }

    pub fn with_looking_speed(mut self, looking_speed: f32) -> Self {
        self.looking_speed = looking_speed;
        self
    }

    pub fn with_head_movement(mut self, head_movement: f32) -> Self {
        self.head_movement = head_movement;
        self
    }
}
