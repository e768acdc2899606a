use super::ControlsError;

use std::collections::HashMap;

/// A playable sound handle. `play` must not block.
pub trait Sound: Send + Sync {
    fn play(&self);
}

/// Named sounds the controls may trigger, filled in by the caller before the
/// first tick
#[derive(Default)]
pub struct SoundRegistry {
    sounds: HashMap<String, Box<dyn Sound>>,
}

impl SoundRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a sound, replacing any previous one with the same name
    pub fn insert(&mut self, name: impl Into<String>, sound: impl Sound + 'static) {
        self.sounds.insert(name.into(), Box::new(sound));
    }

    pub fn get(&self, name: &str) -> Result<&dyn Sound, ControlsError> {
        self.sounds
            .get(name)
            .map(|sound| sound.as_ref())
            .ok_or_else(|| ControlsError::MissingSound(name.to_string()))
    }

    pub fn play(&self, name: &str) -> Result<(), ControlsError> {
        self.get(name)?.play();
        Ok(())
    }
}
