use super::{ControlParameters, ControlsError, SoundRegistry};
use crate::components::Owner;

/// Peak vertical head offset while walking
pub const BOB_HEIGHT: f32 = 0.06;
/// Peak sideways head offset while walking
pub const BOB_SWAY: f32 = 0.08;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Footstep {
    Left,
    Right,
}

impl Footstep {
    /// Name of the sound played for this step
    pub fn sound_name(&self) -> &'static str {
        match self {
            Footstep::Left => "leftStep",
            Footstep::Right => "rightStep",
        }
    }
}

/// Procedural head bob with footsteps on each half period.
///
/// A footstep fires whenever the sign of `cos(phase)` changes: a drop plays the
/// right step, a rise plays the left one. The phase accumulates in `f64`;
/// head offsets are narrowed to `f32` after the trigonometry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeadBobEngine {
    phase: f64,
    sign: f32,
}

impl Default for HeadBobEngine {
    fn default() -> Self {
        Self {
            phase: 0.0,
            sign: 1.0,
        }
    }
}

impl HeadBobEngine {
    pub fn phase(&self) -> f64 {
        self.phase
    }

    pub fn tick(
        &mut self,
        delta_time: f32,
        speed: f32,
        parameters: &ControlParameters,
        owner: &mut impl Owner,
        sounds: &SoundRegistry,
    ) -> Result<Option<Footstep>, ControlsError> {
        self.phase += f64::from(delta_time * speed * parameters.head_movement);

        let motion = self.phase.sin() as f32;
        let height = owner.height();
        let head = owner.head_mut();
        head.position.x = motion * BOB_SWAY;
        head.position.y = motion.abs() * BOB_HEIGHT + height;

        let sign = sign_of(self.phase.cos());
        let step = if sign < self.sign {
            Some(Footstep::Right)
        } else if sign > self.sign {
            Some(Footstep::Left)
        } else {
            None
        };

        if let Some(step) = step {
            self.sign = sign;
            sounds.play(step.sound_name())?;
        }

        Ok(step)
    }
}

/// -1, 0 or 1; zero stays zero
fn sign_of(value: f64) -> f32 {
    if value > 0.0 {
        1.0
    } else if value < 0.0 {
        -1.0
    } else {
        0.0
    }
}
