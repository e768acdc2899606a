use crate::prelude::*;

use bevy_ecs::schedule::{IntoScheduleConfigs, Schedule};
use wayfarer_engine::{Layer, LayerContext};

/// Runs the first-person controls once per frame
pub struct ControlsLayer {
    schedule: Schedule,
}

impl ControlsLayer {
    pub fn new(context: &LayerContext) -> Self {
        {
            let mut world = context.world.lock().unwrap();
            world.init_resource::<Time>();
        }

        let mut schedule = Schedule::default();
        schedule.add_systems(
            (
                crate::systems::update_first_person_controls,
                crate::systems::integrate_characters,
            )
                .chain(),
        );
        Self { schedule }
    }
}

impl Layer for ControlsLayer {
    fn frame(&mut self, context: &LayerContext) {
        let mut world = context.world.lock().unwrap();
        world.insert_resource(Time(context.delta_time));

        self.schedule.run(&mut world);
    }

    fn detach(&mut self, context: &LayerContext) {
        let mut world = context.world.lock().unwrap();
        world.resource_scope(|world, mut hub: Mut<InputHub>| {
            let mut query = world.query::<&mut FirstPersonControls>();
            for mut controls in query.iter_mut(world) {
                controls.disconnect(&mut *hub);
            }
        });
    }
}
