use crate::prelude::*;

/// Stand-in footstep that writes to the log instead of an audio device
pub struct FootstepSound {
    foot: &'static str,
}

impl FootstepSound {
    pub fn new(foot: &'static str) -> Self {
        Self { foot }
    }
}

impl Sound for FootstepSound {
    fn play(&self) {
        log::info!("*{} step*", self.foot);
    }
}
