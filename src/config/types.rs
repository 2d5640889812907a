// Configuration type definitions

use serde::Deserialize;

/// Where the notification overlay is drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum NotificationPosition {
    #[default]
    TopRight,
    Bottom,
}

/// Notification configuration section
#[derive(Debug, Clone, Deserialize)]
pub struct NotificationConfig {
    /// Milliseconds before the viewer hides a visible notification; 0 keeps it
    #[serde(default = "default_auto_hide_ms")]
    pub auto_hide_ms: u64,
    #[serde(default)]
    pub position: NotificationPosition,
}

fn default_auto_hide_ms() -> u64 {
    3000
}

impl Default for NotificationConfig {
    fn default() -> Self {
        NotificationConfig {
            auto_hide_ms: default_auto_hide_ms(),
            position: NotificationPosition::TopRight,
        }
    }
}

/// Root configuration structure
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub notification: NotificationConfig,
}
