//! Notification rendering
//!
//! Provides functions for rendering the notification overlay in the UI.

use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::notification_state::{NotificationState, Severity};
use crate::config::NotificationPosition;
use crate::theme::{self, notification::NotificationColors};
use crate::widgets::popup;

const MARGIN: u16 = 2;
const HEIGHT: u16 = 3; // 1 line content + 2 borders
const MIN_WIDTH: u16 = 6;

/// Colors used for a severity
pub fn severity_colors(severity: Severity) -> NotificationColors {
    match severity {
        Severity::Info => theme::notification::INFO,
        Severity::Success => theme::notification::SUCCESS,
        Severity::Error => theme::notification::ERROR,
    }
}

/// Area the overlay for `state` would occupy, or `None` when nothing is drawn
pub fn notification_area(
    frame_area: Rect,
    state: &NotificationState,
    position: NotificationPosition,
) -> Option<Rect> {
    if !state.visible {
        return None;
    }

    let content = Line::from(format!(" {} ", state.message));
    let width = (content.width() as u16).saturating_add(2).max(MIN_WIDTH); // borders

    let area = match position {
        NotificationPosition::TopRight => {
            popup::top_right_popup(frame_area, width, HEIGHT, MARGIN)
        }
        NotificationPosition::Bottom => {
            popup::bottom_center_popup(frame_area, width, HEIGHT, MARGIN)
        }
    };

    // Don't render if area is too small
    if area.width < 5 || area.height < HEIGHT {
        return None;
    }

    Some(area)
}

/// Render the notification overlay
///
/// Call after the main UI so the overlay lands on top. A hidden state
/// renders nothing.
pub fn render_notification(
    frame: &mut Frame,
    state: &NotificationState,
    position: NotificationPosition,
) {
    let Some(area) = notification_area(frame.area(), state, position) else {
        return;
    };

    let colors = severity_colors(state.severity);

    // Clear background for floating effect
    popup::clear_area(frame, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors.border).bg(colors.bg))
        .style(Style::default().bg(colors.bg));

    let text = Line::from(Span::styled(
        format!(" {} ", state.message),
        Style::default().fg(colors.fg).bg(colors.bg),
    ));

    frame.render_widget(Paragraph::new(text).block(block), area);
}

#[cfg(test)]
#[path = "notification_render_tests.rs"]
mod notification_render_tests;
