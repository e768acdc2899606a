use wayfarer_engine::{ApplicationBuilder, Result, prelude::*};
use winit::event_loop::EventLoop;

mod controls_layer;
mod prelude;
mod sounds;
mod systems;

use controls_layer::ControlsLayer;
use sounds::FootstepSound;

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_module("wayfarer", log::LevelFilter::Debug)
        .filter_module("wayfarer_engine", log::LevelFilter::Debug)
        .init();

    let event_loop = EventLoop::new()?;

    let mut app = ApplicationBuilder::new()
        .title("Wayfarer")
        .add_layer(|context| Box::new(ControlsLayer::new(context)))
        .build();

    let mut player = Character::new(Point3::new(0.0, 0.0, 5.0), 1.8);

    let mut controls = FirstPersonControls::new(ControlParameters::default())
        .with_sound("leftStep", FootstepSound::new("left"))
        .with_sound("rightStep", FootstepSound::new("right"));
    controls.set_rotation(0.0, 0.0, &mut player);
    controls.subscribe(|event| match event {
        LockEvent::Lock => log::info!("Pointer captured, Escape to release"),
        LockEvent::Unlock => log::info!("Pointer released, click to capture again"),
    });

    app.spawn("Player", (player, controls));

    log::info!("Click the window to take control");

    event_loop.run_app(&mut app)?;

    Ok(())
}
