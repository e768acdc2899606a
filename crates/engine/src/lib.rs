use bevy_ecs::world::World;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};
use winit::{application::ApplicationHandler, event::WindowEvent, window::Window};

use crate::input::{InputEvent, InputHub, InputSource};
pub type Result<T> = anyhow::Result<T>;

pub mod components;
pub mod controls;
pub mod input;
pub mod prelude;

pub trait Layer: 'static {
    fn frame(&mut self, context: &LayerContext);
    fn detach(&mut self, context: &LayerContext);
}

pub trait LayerFactory: 'static {
    fn create(&self, context: &LayerContext) -> Box<dyn Layer>;
}

pub struct LayerContext {
    pub window: Arc<Window>,
    pub world: Arc<Mutex<World>>,
    pub delta_time: Duration,
}

pub struct ApplicationBuilder {
    layer_factories: Vec<Box<dyn LayerFactory>>,
    title: String,
}

impl ApplicationBuilder {
    pub fn new() -> Self {
        Self {
            layer_factories: Vec::new(),
            title: "Wayfarer".to_string(),
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn add_layer<F>(mut self, factory_fn: F) -> Self
    where
        F: Fn(&LayerContext) -> Box<dyn Layer> + 'static,
    {
        self.layer_factories
            .push(Box::new(ClosureLayerFactory::new(factory_fn)));
        self
    }

    pub fn build(self) -> Application {
        let world = Arc::new(Mutex::new(World::new()));

        {
            let mut w = world.lock().unwrap();
            w.insert_resource(InputHub::new());
        }

        Application {
            layer_factories: self.layer_factories,
            title: self.title,
            state: None,
            world,
        }
    }
}

impl Default for ApplicationBuilder {
    fn default() -> Self {
        Self::new()
    }
}

struct ClosureLayerFactory<F> {
    factory_fn: F,
}

impl<F> ClosureLayerFactory<F> {
    fn new(factory_fn: F) -> Self {
        Self { factory_fn }
    }
}

impl<F> LayerFactory for ClosureLayerFactory<F>
where
    F: Fn(&LayerContext) -> Box<dyn Layer> + 'static,
{
    fn create(&self, context: &LayerContext) -> Box<dyn Layer> {
        (self.factory_fn)(context)
    }
}

pub struct Application {
    layer_factories: Vec<Box<dyn LayerFactory>>,
    title: String,
    state: Option<ApplicationState>,
    world: Arc<Mutex<World>>,
}

pub struct ApplicationState {
    window: Arc<Window>,
    layers: Vec<Box<dyn Layer>>,
    last_frame_time: Instant,
}

impl Application {
    fn redraw(&mut self) {
        let state = match &mut self.state {
            Some(state) => state,
            None => return,
        };

        let now = Instant::now();
        let delta_time = now.duration_since(state.last_frame_time);
        state.last_frame_time = now;

        let context = LayerContext {
            window: state.window.clone(),
            world: self.world.clone(),
            delta_time,
        };

        for layer in &mut state.layers {
            layer.frame(&context);
        }

        self.world.lock().unwrap().clear_trackers();

        // Layers may have asked for the pointer while running
        self.service_pointer_lock();
    }

    pub fn spawn<B: bevy_ecs::bundle::Bundle>(&mut self, label: impl Into<String>, bundle: B) {
        use crate::prelude::*;
        let bundle = (
            Tag {
                label: label.into(),
            },
            bundle,
        );
        self.world.lock().unwrap().spawn(bundle);
    }

    /// Try to grab the cursor if a capture request is pending and report the
    /// outcome back through the hub
    fn service_pointer_lock(&self) {
        use winit::window::CursorGrabMode;

        let Some(app_state) = &self.state else {
            return;
        };

        let mut world = self.world.lock().unwrap();
        let Some(mut hub) = world.get_resource_mut::<InputHub>() else {
            return;
        };

        if !hub.take_lock_request() {
            return;
        }

        let grabbed = app_state
            .window
            .set_cursor_grab(CursorGrabMode::Locked)
            .or_else(|_| app_state.window.set_cursor_grab(CursorGrabMode::Confined));

        match grabbed {
            Ok(()) => {
                app_state.window.set_cursor_visible(false);
                hub.set_pointer_locked(true);
                hub.push(InputEvent::PointerLockChange);
            }
            Err(e) => {
                log::debug!("Cursor grab refused: {}", e);
                hub.push(InputEvent::PointerLockError);
            }
        }
    }

    fn release_pointer_lock(&self, hub: &mut InputHub) {
        use winit::window::CursorGrabMode;

        if !hub.is_pointer_locked() {
            return;
        }

        if let Some(app_state) = &self.state {
            app_state.window.set_cursor_visible(true);
            if let Err(e) = app_state.window.set_cursor_grab(CursorGrabMode::None) {
                log::warn!("Failed to release cursor: {}", e);
            }
        }

        hub.set_pointer_locked(false);
        hub.push(InputEvent::PointerLockChange);
    }
}

impl ApplicationHandler for Application {
    fn resumed(&mut self, event_loop: &winit::event_loop::ActiveEventLoop) {
        let window_attributes = Window::default_attributes().with_title(self.title.clone());
        let window = match event_loop.create_window(window_attributes) {
            Ok(window) => Arc::new(window),
            Err(e) => {
                log::error!("Unable to create window: {}", e);
                event_loop.exit();
                return;
            }
        };

        let context = LayerContext {
            window: window.clone(),
            world: self.world.clone(),
            delta_time: Duration::ZERO,
        };

        let layers: Vec<Box<dyn Layer>> = self
            .layer_factories
            .iter()
            .map(|factory| factory.create(&context))
            .collect();

        self.state = Some(ApplicationState {
            window,
            layers,
            last_frame_time: Instant::now(),
        });
    }

    fn suspended(&mut self, _event_loop: &winit::event_loop::ActiveEventLoop) {
        if let Some(state) = &mut self.state {
            let context = LayerContext {
                window: state.window.clone(),
                world: self.world.clone(),
                delta_time: Duration::ZERO,
            };

            for layer in &mut state.layers {
                layer.detach(&context);
            }
        }
        self.state = None;
    }

    fn window_event(
        &mut self,
        event_loop: &winit::event_loop::ActiveEventLoop,
        _window_id: winit::window::WindowId,
        event: winit::event::WindowEvent,
    ) {
        // Translate host input for the hub
        {
            use winit::event::{ElementState, MouseButton};
            use winit::keyboard::{KeyCode, PhysicalKey};

            let world = self.world.clone();
            let mut world = world.lock().unwrap();
            if let Some(mut hub) = world.get_resource_mut::<InputHub>() {
                match &event {
                    WindowEvent::KeyboardInput { event: key_event, .. } => {
                        if let PhysicalKey::Code(keycode) = key_event.physical_key {
                            match key_event.state {
                                ElementState::Pressed if keycode == KeyCode::Escape => {
                                    self.release_pointer_lock(&mut hub);
                                }
                                ElementState::Pressed if !key_event.repeat => {
                                    hub.push(InputEvent::KeyDown(keycode));
                                }
                                ElementState::Pressed => {}
                                ElementState::Released => hub.push(InputEvent::KeyUp(keycode)),
                            }
                        }
                    }
                    WindowEvent::MouseInput { state, button, .. } => {
                        if *button == MouseButton::Left && *state == ElementState::Pressed {
                            hub.request_activation();
                        }
                    }
                    WindowEvent::Focused(false) => self.release_pointer_lock(&mut hub),
                    _ => {}
                }
            }
        }

        match event {
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::RedrawRequested => self.redraw(),
            _ => {}
        }
    }

    fn device_event(
        &mut self,
        _event_loop: &winit::event_loop::ActiveEventLoop,
        _device_id: winit::event::DeviceId,
        event: winit::event::DeviceEvent,
    ) {
        use winit::event::DeviceEvent;

        let mut world = self.world.lock().unwrap();
        if let Some(mut hub) = world.get_resource_mut::<InputHub>() {
            if let DeviceEvent::MouseMotion { delta } = event {
                hub.push(InputEvent::PointerMove {
                    dx: delta.0 as f32,
                    dy: delta.1 as f32,
                });
            }
        }
    }

    fn about_to_wait(&mut self, _event_loop: &winit::event_loop::ActiveEventLoop) {
        if let Some(state) = &self.state {
            state.window.request_redraw();
        }
    }
}
