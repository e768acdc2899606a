use crate::input::{InputChannel, InputSource, ListenerHandle};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LockState {
    Disconnected,
    ConnectedUnlocked,
    ConnectedLocked,
}

/// Notification sent to lock listeners
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LockEvent {
    Lock,
    Unlock,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type LockListener = Box<dyn FnMut(LockEvent) + Send + Sync>;

/// Owns the input subscriptions and the pointer capture state, and tells
/// interested parties when capture is gained or lost
pub struct PointerLockLifecycle {
    state: LockState,
    handles: Vec<(InputChannel, ListenerHandle)>,
    listeners: Vec<(SubscriptionId, LockListener)>,
    next_subscription: u64,
}

impl Default for PointerLockLifecycle {
    fn default() -> Self {
        Self {
            state: LockState::Disconnected,
            handles: Vec::new(),
            listeners: Vec::new(),
            next_subscription: 0,
        }
    }
}

impl PointerLockLifecycle {
    pub fn state(&self) -> LockState {
        self.state
    }

    pub fn is_connected(&self) -> bool {
        self.state != LockState::Disconnected
    }

    /// Whether events on this channel should currently be handled
    pub fn is_listening(&self, channel: InputChannel) -> bool {
        self.handles.iter().any(|(c, _)| *c == channel)
    }

    /// Subscribe to every input channel and ask for pointer capture.
    /// Does nothing when already connected.
    pub fn connect(&mut self, source: &mut dyn InputSource) {
        if self.is_connected() {
            return;
        }

        self.handles = InputChannel::ALL
            .iter()
            .map(|channel| (*channel, source.subscribe(*channel)))
            .collect();
        self.state = LockState::ConnectedUnlocked;

        log::debug!("Controls connected, requesting pointer lock");
        source.request_pointer_lock();
    }

    /// Drop every input subscription. Safe to call in any state.
    pub fn disconnect(&mut self, source: &mut dyn InputSource) {
        if !self.is_connected() {
            return;
        }

        for (_, handle) in self.handles.drain(..) {
            source.unsubscribe(handle);
        }
        self.state = LockState::Disconnected;

        log::debug!("Controls disconnected");
    }

    /// React to the host acquiring or releasing capture
    pub fn handle_lock_change(&mut self, source: &mut dyn InputSource) -> LockEvent {
        let event = if source.is_pointer_locked() {
            self.state = LockState::ConnectedLocked;
            log::info!("Pointer locked");
            LockEvent::Lock
        } else {
            self.disconnect(source);
            log::info!("Pointer unlocked");
            LockEvent::Unlock
        };

        self.emit(event);
        event
    }

    pub fn handle_lock_error(&self) {
        log::warn!("Unable to use pointer lock");
    }

    pub fn subscribe(&mut self, listener: impl FnMut(LockEvent) + Send + Sync + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Returns false if the subscription was unknown
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(existing, _)| *existing != id);
        self.listeners.len() != before
    }

    fn emit(&mut self, event: LockEvent) {
        for (_, listener) in &mut self.listeners {
            listener(event);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::InputHub;
    use std::sync::{Arc, Mutex};

    fn recorder(lifecycle: &mut PointerLockLifecycle) -> Arc<Mutex<Vec<LockEvent>>> {
        let events = Arc::new(Mutex::new(Vec::new()));
        let sink = events.clone();
        lifecycle.subscribe(move |event| sink.lock().unwrap().push(event));
        events
    }

    #[test]
    fn test_connect_subscribes_and_requests_lock() {
        let mut hub = InputHub::new();
        let mut lifecycle = PointerLockLifecycle::default();

        lifecycle.connect(&mut hub);

        assert_eq!(lifecycle.state(), LockState::ConnectedUnlocked);
        assert_eq!(hub.listener_count(), InputChannel::ALL.len());
        for channel in InputChannel::ALL {
            assert!(lifecycle.is_listening(channel));
        }
        assert!(hub.take_lock_request());
    }

    #[test]
    fn test_connect_twice_is_a_noop() {
        let mut hub = InputHub::new();
        let mut lifecycle = PointerLockLifecycle::default();

        lifecycle.connect(&mut hub);
        hub.take_lock_request();
        lifecycle.connect(&mut hub);

        assert_eq!(hub.listener_count(), InputChannel::ALL.len());
        assert!(!hub.take_lock_request());
    }

    #[test]
    fn test_lock_change_emits_lock_once() {
        let mut hub = InputHub::new();
        let mut lifecycle = PointerLockLifecycle::default();
        let events = recorder(&mut lifecycle);

        lifecycle.connect(&mut hub);
        hub.set_pointer_locked(true);
        assert_eq!(lifecycle.handle_lock_change(&mut hub), LockEvent::Lock);

        assert_eq!(lifecycle.state(), LockState::ConnectedLocked);
        assert_eq!(*events.lock().unwrap(), vec![LockEvent::Lock]);
    }

    #[test]
    fn test_losing_lock_disconnects() {
        let mut hub = InputHub::new();
        let mut lifecycle = PointerLockLifecycle::default();
        let events = recorder(&mut lifecycle);

        lifecycle.connect(&mut hub);
        hub.set_pointer_locked(true);
        lifecycle.handle_lock_change(&mut hub);
        hub.set_pointer_locked(false);
        assert_eq!(lifecycle.handle_lock_change(&mut hub), LockEvent::Unlock);

        assert_eq!(lifecycle.state(), LockState::Disconnected);
        assert_eq!(hub.listener_count(), 0);
        assert_eq!(
            *events.lock().unwrap(),
            vec![LockEvent::Lock, LockEvent::Unlock]
        );
    }

    #[test]
    fn test_lock_error_keeps_state() {
        let mut hub = InputHub::new();
        let mut lifecycle = PointerLockLifecycle::default();
        let events = recorder(&mut lifecycle);

        lifecycle.connect(&mut hub);
        lifecycle.handle_lock_error();

        assert_eq!(lifecycle.state(), LockState::ConnectedUnlocked);
        assert!(events.lock().unwrap().is_empty());
    }

    #[test]
    fn test_disconnect_is_idempotent() {
        let mut hub = InputHub::new();
        let mut lifecycle = PointerLockLifecycle::default();

        lifecycle.disconnect(&mut hub);
        assert_eq!(lifecycle.state(), LockState::Disconnected);

        lifecycle.connect(&mut hub);
        lifecycle.disconnect(&mut hub);
        lifecycle.disconnect(&mut hub);
        assert_eq!(lifecycle.state(), LockState::Disconnected);
        assert_eq!(hub.listener_count(), 0);
    }

    #[test]
    fn test_unsubscribed_listener_is_silent() {
        let mut hub = InputHub::new();
        let mut lifecycle = PointerLockLifecycle::default();
        let events = Arc::new(Mutex::new(Vec::new()));
        let sink = events.clone();
        let id = lifecycle.subscribe(move |event| sink.lock().unwrap().push(event));

        assert!(lifecycle.unsubscribe(id));
        assert!(!lifecycle.unsubscribe(id));

        lifecycle.connect(&mut hub);
        hub.set_pointer_locked(true);
        lifecycle.handle_lock_change(&mut hub);
        assert!(events.lock().unwrap().is_empty());
    }
}
