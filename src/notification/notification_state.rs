//! Notification state value
//!
//! Provides the single value a notification store holds: whether a transient
//! message is visible, its text, and its severity.

use serde::{Deserialize, Serialize};

/// Notification severity - determines presentation style
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Neutral message, the default for `show`
    #[default]
    Info,
    /// Confirmation such as "Saved"
    Success,
    /// Failure the user should notice
    Error,
}

impl Severity {
    pub fn label(self) -> &'static str {
        match self {
            Severity::Info => "info",
            Severity::Success => "success",
            Severity::Error => "error",
        }
    }
}

/// Logical phase of the notification state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Hidden,
    Shown,
}

/// The current notification as seen by observers.
///
/// `visible == false` always comes with an empty message and `Info`
/// severity; see [`NotificationState::empty`].
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct NotificationState {
    pub visible: bool,
    pub message: String,
    pub severity: Severity,
}

impl NotificationState {
    /// The canonical hidden value: `{visible: false, message: "", severity: Info}`
    pub fn empty() -> Self {
        Self::default()
    }

    /// A visible notification with the given text and severity
    pub fn shown(message: &str, severity: Severity) -> Self {
        Self {
            visible: true,
            message: message.to_string(),
            severity,
        }
    }

    pub fn phase(&self) -> Phase {
        if self.visible {
            Phase::Shown
        } else {
            Phase::Hidden
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::empty()
    }
}

#[cfg(test)]
#[path = "notification_state_tests.rs"]
mod notification_state_tests;
