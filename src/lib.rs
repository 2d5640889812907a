//! snackbar library - transient notification state with a terminal viewer
//!
//! The core is [`notification::NotificationStore`]; the remaining modules make
//! up the terminal front end that subscribes to it.

pub mod app;
pub mod config;
pub mod error;
pub mod fixture;
pub mod notification;
pub mod theme;
pub mod widgets;

#[cfg(test)]
pub mod test_utils;

// Re-export commonly used types for convenience
pub use app::App;
pub use config::Config;
pub use error::SnackbarError;
pub use fixture::Fixture;
pub use notification::{NotificationState, NotificationStore, Severity};
