use std::sync::mpsc::Receiver;
use std::time::{Duration, Instant};

use crate::config::{Config, NotificationConfig};
use crate::fixture::{Fixture, fixture_render};
use crate::notification::{NotificationState, NotificationStore};

/// Composition root of the viewer.
///
/// Owns the notification store and listens to it through a channel
/// subscription, the same way any other front end would.
pub struct App {
    pub notification: NotificationStore,
    /// Last state delivered to the renderer
    pub displayed: NotificationState,
    pub fixture_text: String,
    pub scroll: u16,
    pub notification_config: NotificationConfig,
    /// Fixture pane height from the last render, used to clamp scrolling
    pub fixture_height: u16,
    updates: Receiver<NotificationState>,
    shown_at: Option<Instant>,
    should_quit: bool,
    dirty: bool,
}

impl App {
    pub fn new(fixture: &Fixture, config: &Config) -> Self {
        let mut notification = NotificationStore::new();
        let (_, updates) = notification.subscribe_channel();

        Self {
            notification,
            displayed: NotificationState::empty(),
            fixture_text: fixture.to_pretty_string(),
            scroll: 0,
            notification_config: config.notification.clone(),
            fixture_height: 0,
            updates,
            shown_at: None,
            should_quit: false,
            dirty: true,
        }
    }

    /// Drain pending notification updates into `displayed`.
    ///
    /// Returns true if any update arrived.
    pub fn poll_notifications(&mut self) -> bool {
        self.poll_notifications_at(Instant::now())
    }

    pub(crate) fn poll_notifications_at(&mut self, now: Instant) -> bool {
        let mut received = false;
        for state in self.updates.try_iter() {
            self.shown_at = state.visible.then_some(now);
            self.displayed = state;
            received = true;
        }

        if received {
            self.dirty = true;
        }
        received
    }

    /// Hide the notification once it has been visible for the configured time.
    ///
    /// Returns true if it was hidden.
    pub fn expire_notification(&mut self, now: Instant) -> bool {
        let Some(timeout) = self.auto_hide() else {
            return false;
        };

        match self.shown_at {
            Some(shown_at) if now.saturating_duration_since(shown_at) >= timeout => {
                #[cfg(debug_assertions)]
                log::debug!("Auto-hiding notification after {:?}", timeout);

                self.notification.hide();
                self.shown_at = None;
                true
            }
            _ => false,
        }
    }

    fn auto_hide(&self) -> Option<Duration> {
        match self.notification_config.auto_hide_ms {
            0 => None,
            ms => Some(Duration::from_millis(ms)),
        }
    }

    pub fn max_scroll(&self) -> u16 {
        fixture_render::max_scroll(self.fixture_text.lines().count(), self.fixture_height)
    }

    pub fn scroll_down(&mut self, lines: u16) {
        self.scroll = self.scroll.saturating_add(lines).min(self.max_scroll());
        self.dirty = true;
    }

    pub fn scroll_up(&mut self, lines: u16) {
        self.scroll = self.scroll.saturating_sub(lines);
        self.dirty = true;
    }

    pub fn scroll_to_top(&mut self) {
        self.scroll = 0;
        self.dirty = true;
    }

    pub fn scroll_to_bottom(&mut self) {
        self.scroll = self.max_scroll();
        self.dirty = true;
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn should_render(&self) -> bool {
        self.dirty
    }

    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub fn clear_dirty(&mut self) {
        self.dirty = false;
    }
}

#[cfg(test)]
#[path = "app_state_tests.rs"]
mod app_state_tests;
