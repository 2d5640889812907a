//! Shared test utilities for snackbar
//!
//! This module provides common test fixtures and helper functions
//! used across multiple test modules.

#[cfg(test)]
pub mod test_helpers {
    use crate::app::App;
    use crate::config::Config;
    use crate::fixture::Fixture;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    /// Small fixture used where the built-in snapshot is too long
    pub const TEST_FIXTURE: &str = r#"{"deviceid": "TEST01", "online": true}"#;

    /// Helper to create App with the built-in fixture and default config
    pub fn test_app() -> App {
        App::new(&Fixture::builtin(), &Config::default())
    }

    /// Helper to create App with a custom config
    pub fn test_app_with_config(config: &Config) -> App {
        App::new(&Fixture::builtin(), config)
    }

    /// Helper to create App around the small test fixture
    pub fn small_app() -> App {
        let fixture = Fixture::parse(TEST_FIXTURE).unwrap();
        App::new(&fixture, &Config::default())
    }

    /// Helper to create a KeyEvent without modifiers
    pub fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    /// Helper to create a KeyEvent with specific modifiers
    pub fn key_with_mods(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }
}
