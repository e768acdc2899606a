use bevy_ecs::prelude::*;
use std::collections::HashMap;
use winit::keyboard::KeyCode;

/// Kinds of host notifications a listener can subscribe to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputChannel {
    PointerMove,
    PointerLockChange,
    PointerLockError,
    KeyDown,
    KeyUp,
}

impl InputChannel {
    pub const ALL: [InputChannel; 5] = [
        InputChannel::PointerMove,
        InputChannel::PointerLockChange,
        InputChannel::PointerLockError,
        InputChannel::KeyDown,
        InputChannel::KeyUp,
    ];
}

/// A single notification delivered by the host
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Raw pointer delta in device units
    PointerMove { dx: f32, dy: f32 },
    /// Pointer capture was acquired or released; query the source for which
    PointerLockChange,
    /// The host refused to capture the pointer
    PointerLockError,
    KeyDown(KeyCode),
    KeyUp(KeyCode),
}

impl InputEvent {
    pub fn channel(&self) -> InputChannel {
        match self {
            InputEvent::PointerMove { .. } => InputChannel::PointerMove,
            InputEvent::PointerLockChange => InputChannel::PointerLockChange,
            InputEvent::PointerLockError => InputChannel::PointerLockError,
            InputEvent::KeyDown(_) => InputChannel::KeyDown,
            InputEvent::KeyUp(_) => InputChannel::KeyUp,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerHandle(u64);

/// Where input comes from. Injected into the controls so they never reach for
/// a global event source.
pub trait InputSource {
    fn subscribe(&mut self, channel: InputChannel) -> ListenerHandle;
    /// Unknown or already removed handles are ignored
    fn unsubscribe(&mut self, handle: ListenerHandle);
    /// Ask the host for exclusive pointer capture. The answer arrives later as
    /// a lock change or a lock error.
    fn request_pointer_lock(&mut self);
    /// Whether the pointer is currently captured by this surface
    fn is_pointer_locked(&self) -> bool;
}

/// Resource that queues host input for whoever subscribed to it
#[derive(Resource, Default)]
pub struct InputHub {
    listeners: HashMap<ListenerHandle, InputChannel>,
    next_handle: u64,
    events: Vec<InputEvent>,
    lock_requested: bool,
    pointer_locked: bool,
    activation_requested: bool,
}

impl InputHub {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether at least one listener wants this channel
    pub fn has_listener(&self, channel: InputChannel) -> bool {
        self.listeners.values().any(|c| *c == channel)
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Queue an event. Events nobody listens to are dropped.
    pub fn push(&mut self, event: InputEvent) {
        if self.has_listener(event.channel()) {
            self.events.push(event);
        }
    }

    /// Drain everything queued since the last call, in arrival order
    pub fn take_events(&mut self) -> Vec<InputEvent> {
        std::mem::take(&mut self.events)
    }

    /// Consume a pending capture request
    pub fn take_lock_request(&mut self) -> bool {
        std::mem::take(&mut self.lock_requested)
    }

    /// Record the host's capture state; does not queue a notification
    pub fn set_pointer_locked(&mut self, locked: bool) {
        self.pointer_locked = locked;
    }

    /// The user asked to (re)activate the controls, e.g. by clicking the surface
    pub fn request_activation(&mut self) {
        self.activation_requested = true;
    }

    pub fn take_activation(&mut self) -> bool {
        std::mem::take(&mut self.activation_requested)
    }
}

impl InputSource for InputHub {
    fn subscribe(&mut self, channel: InputChannel) -> ListenerHandle {
        let handle = ListenerHandle(self.next_handle);
        self.next_handle += 1;
        self.listeners.insert(handle, channel);
        log::debug!("Listener {:?} subscribed to {:?}", handle, channel);
        handle
    }

    fn unsubscribe(&mut self, handle: ListenerHandle) {
        if let Some(channel) = self.listeners.remove(&handle) {
            log::debug!("Listener {:?} unsubscribed from {:?}", handle, channel);
            if !self.has_listener(channel) {
                self.events.retain(|event| event.channel() != channel);
            }
        }
    }

    fn request_pointer_lock(&mut self) {
        self.lock_requested = true;
    }

    fn is_pointer_locked(&self) -> bool {
        self.pointer_locked
    }
}
