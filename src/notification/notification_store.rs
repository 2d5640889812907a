//! Notification store
//!
//! Owns the session's single [`NotificationState`] and pushes every change to
//! registered subscribers. The store is an ordinary owned value; whoever
//! builds the UI creates one and hands it to the code that needs it.

use std::fmt;
use std::sync::mpsc::{self, Receiver, Sender};

use super::notification_state::{NotificationState, Severity};

/// Handle returned by `subscribe`, used to unsubscribe later
pub type SubscriberId = u64;

type Callback = Box<dyn FnMut(&NotificationState)>;

enum Sink {
    Callback(Callback),
    Channel(Sender<NotificationState>),
}

struct Subscriber {
    id: SubscriberId,
    sink: Sink,
}

impl Subscriber {
    /// Deliver a state; returns false when the subscriber is gone
    fn deliver(&mut self, state: &NotificationState) -> bool {
        match &mut self.sink {
            Sink::Callback(callback) => {
                callback(state);
                true
            }
            Sink::Channel(tx) => tx.send(state.clone()).is_ok(),
        }
    }
}

/// Session-scoped holder for the current notification
pub struct NotificationStore {
    state: NotificationState,
    subscribers: Vec<Subscriber>,
    next_id: SubscriberId,
}

impl Default for NotificationStore {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for NotificationStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NotificationStore")
            .field("state", &self.state)
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}

impl NotificationStore {
    /// Create a store holding the empty (hidden) state
    pub fn new() -> Self {
        Self {
            state: NotificationState::empty(),
            subscribers: Vec::new(),
            next_id: 0,
        }
    }

    /// Current state
    pub fn state(&self) -> &NotificationState {
        &self.state
    }

    pub fn is_visible(&self) -> bool {
        self.state.visible
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }

    /// Show an info notification
    pub fn show(&mut self, message: &str) {
        self.show_with_severity(message, Severity::Info);
    }

    /// Show a notification with the given severity, replacing whatever is visible
    pub fn show_with_severity(&mut self, message: &str, severity: Severity) {
        self.set(NotificationState::shown(message, severity));
    }

    pub fn show_success(&mut self, message: &str) {
        self.show_with_severity(message, Severity::Success);
    }

    pub fn show_error(&mut self, message: &str) {
        self.show_with_severity(message, Severity::Error);
    }

    /// Reset to the empty state. Subscribers are notified even when
    /// nothing was visible.
    pub fn hide(&mut self) {
        self.set(NotificationState::empty());
    }

    /// Register a callback. It is called right away with the current state
    /// and again after every `show*`/`hide` until unsubscribed.
    pub fn subscribe<F>(&mut self, callback: F) -> SubscriberId
    where
        F: FnMut(&NotificationState) + 'static,
    {
        self.register(Sink::Callback(Box::new(callback)))
    }

    /// Register a channel subscriber. The current state is queued
    /// immediately. Dropping the receiver unsubscribes on the next update.
    pub fn subscribe_channel(&mut self) -> (SubscriberId, Receiver<NotificationState>) {
        let (tx, rx) = mpsc::channel();
        let id = self.register(Sink::Channel(tx));
        (id, rx)
    }

    /// Stop notifying a subscriber. Returns false if the id is unknown.
    pub fn unsubscribe(&mut self, id: SubscriberId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|s| s.id != id);
        let removed = self.subscribers.len() != before;

        #[cfg(debug_assertions)]
        log::debug!("Unsubscribe {} (removed: {})", id, removed);

        removed
    }

    fn register(&mut self, sink: Sink) -> SubscriberId {
        let id = self.next_id;
        self.next_id += 1;

        let mut subscriber = Subscriber { id, sink };
        if subscriber.deliver(&self.state) {
            self.subscribers.push(subscriber);
        }

        #[cfg(debug_assertions)]
        log::debug!(
            "Subscriber {} registered, {} active",
            id,
            self.subscribers.len()
        );

        id
    }

    fn set(&mut self, next: NotificationState) {
        #[cfg(debug_assertions)]
        log::debug!(
            "Notification {:?} -> {:?} ({}: {:?})",
            self.state.phase(),
            next.phase(),
            next.severity.label(),
            next.message
        );

        self.state = next;

        let state = &self.state;
        self.subscribers.retain_mut(|subscriber| {
            let alive = subscriber.deliver(state);

            if !alive {
                #[cfg(debug_assertions)]
                log::debug!("Dropping disconnected subscriber {}", subscriber.id);
            }

            alive
        });
    }
}

#[cfg(test)]
#[path = "notification_store_tests.rs"]
mod notification_store_tests;
