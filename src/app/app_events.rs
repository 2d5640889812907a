use ratatui::crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::io;
use std::time::{Duration, Instant};

use super::app_state::App;

const EVENT_POLL_TIMEOUT: Duration = Duration::from_millis(100);
const PAGE_LINES: u16 = 10;

pub const INFO_MESSAGE: &str = "Snapshot refreshed";
pub const SUCCESS_MESSAGE: &str = "Saved";
pub const ERROR_MESSAGE: &str = "Failed to save snapshot";

impl App {
    pub fn handle_events(&mut self) -> io::Result<()> {
        self.expire_notification(Instant::now());

        if event::poll(EVENT_POLL_TIMEOUT)? {
            match event::read()? {
                Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                    self.handle_key_event(key_event);
                }
                Event::Resize(_, _) => self.mark_dirty(),
                _ => {}
            }
        }
        Ok(())
    }

    pub fn handle_key_event(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            if key.code == KeyCode::Char('c') {
                self.quit();
            }
            return;
        }

        match key.code {
            KeyCode::Char('q') => self.quit(),

            KeyCode::Char('i') => self.notification.show(INFO_MESSAGE),
            KeyCode::Char('s') => self.notification.show_success(SUCCESS_MESSAGE),
            KeyCode::Char('e') => self.notification.show_error(ERROR_MESSAGE),
            KeyCode::Char('h') | KeyCode::Esc => self.notification.hide(),

            KeyCode::Char('j') | KeyCode::Down => self.scroll_down(1),
            KeyCode::Char('k') | KeyCode::Up => self.scroll_up(1),
            KeyCode::PageDown => self.scroll_down(PAGE_LINES),
            KeyCode::PageUp => self.scroll_up(PAGE_LINES),
            KeyCode::Char('g') | KeyCode::Home => self.scroll_to_top(),
            KeyCode::Char('G') | KeyCode::End => self.scroll_to_bottom(),
            _ => {}
        }
    }
}

#[cfg(test)]
#[path = "app_events_tests.rs"]
mod app_events_tests;
