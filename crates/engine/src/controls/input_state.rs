use nalgebra::Vector3;
use winit::keyboard::KeyCode;

/// Movement actions the keyboard can drive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    Forward,
    Backward,
    Left,
    Right,
}

impl KeyAction {
    /// Arrow keys and WASD both map onto the four actions
    pub fn from_key(key: KeyCode) -> Option<Self> {
        match key {
            KeyCode::ArrowUp | KeyCode::KeyW => Some(KeyAction::Forward),
            KeyCode::ArrowLeft | KeyCode::KeyA => Some(KeyAction::Left),
            KeyCode::ArrowDown | KeyCode::KeyS => Some(KeyAction::Backward),
            KeyCode::ArrowRight | KeyCode::KeyD => Some(KeyAction::Right),
            _ => None,
        }
    }
}

/// Which movement actions are currently held
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputState {
    pub forward: bool,
    pub backward: bool,
    pub left: bool,
    pub right: bool,
}

impl InputState {
    pub fn set_action(&mut self, action: KeyAction, pressed: bool) {
        match action {
            KeyAction::Forward => self.forward = pressed,
            KeyAction::Backward => self.backward = pressed,
            KeyAction::Left => self.left = pressed,
            KeyAction::Right => self.right = pressed,
        }
    }

    /// Apply a key press or release. Returns false for keys with no binding.
    pub fn set_key(&mut self, key: KeyCode, pressed: bool) -> bool {
        match KeyAction::from_key(key) {
            Some(action) => {
                self.set_action(action, pressed);
                true
            }
            None => false,
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn depth_active(&self) -> bool {
        self.forward || self.backward
    }

    pub fn lateral_active(&self) -> bool {
        self.left || self.right
    }

    /// Local movement direction: +z forward, +x left. Unit length unless idle
    /// or cancelled out, in which case it is zero.
    pub fn direction(&self) -> Vector3<f32> {
        let direction = Vector3::new(
            self.left as i8 as f32 - self.right as i8 as f32,
            0.0,
            self.forward as i8 as f32 - self.backward as i8 as f32,
        );

        direction.try_normalize(f32::EPSILON).unwrap_or(direction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_redundant_bindings_share_an_action() {
        assert_eq!(KeyAction::from_key(KeyCode::KeyW), Some(KeyAction::Forward));
        assert_eq!(KeyAction::from_key(KeyCode::ArrowUp), Some(KeyAction::Forward));
        assert_eq!(KeyAction::from_key(KeyCode::KeyA), Some(KeyAction::Left));
        assert_eq!(KeyAction::from_key(KeyCode::ArrowLeft), Some(KeyAction::Left));
        assert_eq!(KeyAction::from_key(KeyCode::KeyS), Some(KeyAction::Backward));
        assert_eq!(KeyAction::from_key(KeyCode::ArrowDown), Some(KeyAction::Backward));
        assert_eq!(KeyAction::from_key(KeyCode::KeyD), Some(KeyAction::Right));
        assert_eq!(KeyAction::from_key(KeyCode::ArrowRight), Some(KeyAction::Right));
    }

    #[test]
    fn test_unbound_keys_are_ignored() {
        let mut input = InputState::default();
        assert!(!input.set_key(KeyCode::Space, true));
        assert_eq!(input, InputState::default());
    }

    #[test]
    fn test_direction_is_unit_for_single_pairs() {
        let mut input = InputState::default();
        input.set_action(KeyAction::Forward, true);
        assert!((input.direction().magnitude() - 1.0).abs() < 0.001);
        assert!((input.direction().z - 1.0).abs() < 0.001);

        input.set_action(KeyAction::Right, true);
        let direction = input.direction();
        assert!((direction.magnitude() - 1.0).abs() < 0.001);
        assert!(direction.x < 0.0);
        assert!(direction.z > 0.0);
    }

    #[test]
    fn test_direction_is_zero_when_idle_or_cancelled() {
        let mut input = InputState::default();
        assert_eq!(input.direction(), Vector3::zeros());

        input.set_action(KeyAction::Forward, true);
        input.set_action(KeyAction::Backward, true);
        input.set_action(KeyAction::Left, true);
        input.set_action(KeyAction::Right, true);
        assert_eq!(input.direction(), Vector3::zeros());
        assert!(input.depth_active());
        assert!(input.lateral_active());
    }

    #[test]
    fn test_release_clears_action() {
        let mut input = InputState::default();
        input.set_key(KeyCode::KeyD, true);
        assert!(input.right);
        input.set_key(KeyCode::ArrowRight, false);
        assert!(!input.right);

        input.set_key(KeyCode::KeyW, true);
        input.clear();
        assert_eq!(input, InputState::default());
    }
}
