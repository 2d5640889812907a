//! Notification module for snackbar
//!
//! Holds the single transient notification of a session and pushes every
//! change to its subscribers. Rendering lives alongside so any front end can
//! draw the current state.

mod notification_render;
mod notification_state;
mod notification_store;

pub use notification_render::{notification_area, render_notification, severity_colors};
pub use notification_state::{NotificationState, Phase, Severity};
pub use notification_store::{NotificationStore, SubscriberId};
