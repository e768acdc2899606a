use super::*;
use crate::components::Owner;
use crate::input::{InputEvent, InputSource};

use bevy_ecs::component::Component;

/// First-person controls: keyboard locomotion, pointer look, head bob and
/// footsteps for one owner.
///
/// Host frames call [`handle_event`](Self::handle_event) for each queued input
/// event, then [`tick`](Self::tick) once.
#[derive(Component, Default)]
pub struct FirstPersonControls {
    parameters: ControlParameters,
    input: InputState,
    look: LookController,
    motion: MotionIntegrator,
    head_bob: HeadBobEngine,
    lifecycle: PointerLockLifecycle,
    sounds: SoundRegistry,
}

impl FirstPersonControls {
    pub fn new(parameters: ControlParameters) -> Self {
        Self {
            parameters,
            ..Default::default()
        }
    }

    pub fn with_sound(mut self, name: impl Into<String>, sound: impl Sound + 'static) -> Self {
        self.sounds.insert(name, sound);
        self
    }

    pub fn input(&self) -> &InputState {
        &self.input
    }

    pub fn yaw(&self) -> f32 {
        self.look.yaw()
    }

    pub fn pitch(&self) -> f32 {
        self.look.pitch()
    }

    pub fn lock_state(&self) -> LockState {
        self.lifecycle.state()
    }

    pub fn is_connected(&self) -> bool {
        self.lifecycle.is_connected()
    }

    pub fn connect(&mut self, source: &mut dyn InputSource) {
        self.lifecycle.connect(source);
    }

    pub fn disconnect(&mut self, source: &mut dyn InputSource) {
        self.lifecycle.disconnect(source);
        // Key releases are no longer delivered
        self.input.clear();
    }

    /// Register for lock and unlock notifications
    pub fn subscribe(&mut self, listener: impl FnMut(LockEvent) + Send + Sync + 'static) -> SubscriptionId {
        self.lifecycle.subscribe(listener)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.lifecycle.unsubscribe(id)
    }

    pub fn set_rotation(&mut self, yaw: f32, pitch: f32, owner: &mut impl Owner) {
        self.look.set_rotation(yaw, pitch, owner);
    }

    /// Apply one host event. Events on channels the controls are not
    /// listening to are ignored.
    ///
    /// Lock listeners only receive the [`LockEvent`] and cannot reach the
    /// controls while they run. Callers that need to react with the controls
    /// themselves (disconnect, reconnect, move the owner) use the returned
    /// event instead.
    pub fn handle_event(
        &mut self,
        event: InputEvent,
        source: &mut dyn InputSource,
        owner: &mut impl Owner,
    ) -> Option<LockEvent> {
        if !self.lifecycle.is_listening(event.channel()) {
            return None;
        }

        match event {
            InputEvent::PointerMove { dx, dy } => {
                self.look
                    .pointer_moved(dx, dy, self.parameters.looking_speed, owner);
            }
            InputEvent::KeyDown(key) => {
                self.input.set_key(key, true);
            }
            InputEvent::KeyUp(key) => {
                self.input.set_key(key, false);
            }
            InputEvent::PointerLockChange => {
                let lock_event = self.lifecycle.handle_lock_change(source);
                if lock_event == LockEvent::Unlock {
                    self.input.clear();
                }
                return Some(lock_event);
            }
            InputEvent::PointerLockError => self.lifecycle.handle_lock_error(),
        }

        None
    }

    /// Advance movement then head bob. Negative or non-finite deltas are
    /// treated as zero.
    pub fn tick(
        &mut self,
        delta_time: f32,
        owner: &mut impl Owner,
    ) -> Result<Option<Footstep>, ControlsError> {
        let delta_time = if !delta_time.is_finite() || delta_time < 0.0 {
            log::warn!("Invalid frame delta {}, clamping to zero", delta_time);
            0.0
        } else {
            delta_time
        };

        self.motion
            .tick(delta_time, &self.input, &self.parameters, owner);

        let speed = owner.speed();
        self.head_bob
            .tick(delta_time, speed, &self.parameters, owner, &self.sounds)
    }
}
