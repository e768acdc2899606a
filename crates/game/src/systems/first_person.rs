use crate::prelude::*;

/// Feed this frame's input to every first-person controller, then tick it.
/// A click on the surface reconnects controllers that lost the pointer.
pub fn update_first_person_controls(
    mut query: Query<(&mut FirstPersonControls, &mut Character)>,
    mut hub: ResMut<InputHub>,
    time: Res<Time>,
) {
    let dt = time.0.as_secs_f32();
    let events = hub.take_events();
    let activate = hub.take_activation();

    for (mut controls, mut character) in query.iter_mut() {
        if activate && !controls.is_connected() {
            controls.connect(&mut *hub);
        }

        for event in &events {
            if controls.handle_event(*event, &mut *hub, &mut *character) == Some(LockEvent::Unlock) {
                log::debug!("Controls released, click to resume");
            }
        }

        if let Err(e) = controls.tick(dt, &mut *character) {
            log::error!("First-person controls failed: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::systems::integrate_characters;
    use bevy_ecs::schedule::{IntoScheduleConfigs, Schedule};
    use std::time::Duration;
    use winit::keyboard::KeyCode;

    struct Silent;

    impl Sound for Silent {
        fn play(&self) {}
    }

    fn setup() -> (World, Schedule, Entity) {
        let mut world = World::new();
        world.insert_resource(InputHub::new());
        world.insert_resource(Time(Duration::from_millis(100)));

        let controls = FirstPersonControls::new(ControlParameters::default())
            .with_sound("leftStep", Silent)
            .with_sound("rightStep", Silent);
        let entity = world.spawn((controls, Character::default())).id();

        let mut schedule = Schedule::default();
        schedule.add_systems((update_first_person_controls, integrate_characters).chain());

        (world, schedule, entity)
    }

    #[test]
    fn test_click_connects_and_requests_lock() {
        let (mut world, mut schedule, entity) = setup();

        schedule.run(&mut world);
        assert!(!world.get::<FirstPersonControls>(entity).unwrap().is_connected());

        world.resource_mut::<InputHub>().request_activation();
        schedule.run(&mut world);

        assert!(world.get::<FirstPersonControls>(entity).unwrap().is_connected());
        assert!(world.resource_mut::<InputHub>().take_lock_request());
    }

    #[test]
    fn test_held_key_moves_character() {
        let (mut world, mut schedule, entity) = setup();

        world.resource_mut::<InputHub>().request_activation();
        schedule.run(&mut world);

        world
            .resource_mut::<InputHub>()
            .push(InputEvent::KeyDown(KeyCode::KeyW));
        schedule.run(&mut world);

        let character = world.get::<Character>(entity).unwrap();
        assert!((character.velocity.z - (-4.0)).abs() < 0.0001);
        assert!((character.transform.position.z - (-0.4)).abs() < 0.0001);
        assert!(character.head.position.y >= character.height);
    }

    #[test]
    fn test_lock_change_reaches_controls() {
        let (mut world, mut schedule, entity) = setup();

        world.resource_mut::<InputHub>().request_activation();
        schedule.run(&mut world);

        {
            let mut hub = world.resource_mut::<InputHub>();
            hub.set_pointer_locked(true);
            hub.push(InputEvent::PointerLockChange);
        }
        schedule.run(&mut world);

        assert_eq!(
            world.get::<FirstPersonControls>(entity).unwrap().lock_state(),
            LockState::ConnectedLocked
        );
    }
}
