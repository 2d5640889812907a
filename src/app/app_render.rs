use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

use super::app_state::App;
use crate::fixture::fixture_render::render_fixture;
use crate::notification::render_notification;
use crate::theme;

const HINTS: &[(&str, &str)] = &[
    ("i", "info"),
    ("s", "success"),
    ("e", "error"),
    ("h", "hide"),
    ("j/k", "scroll"),
    ("q", "quit"),
];

impl App {
    pub fn render(&mut self, frame: &mut Frame) {
        let layout =
            Layout::vertical([Constraint::Min(3), Constraint::Length(1)]).split(frame.area());
        let (fixture_area, help_area) = (layout[0], layout[1]);

        self.fixture_height = fixture_area.height;
        self.scroll = self.scroll.min(self.max_scroll());

        render_fixture(frame, fixture_area, &self.fixture_text, self.scroll);
        render_help_line(frame, help_area);

        // Overlay last so it sits on top of the fixture pane
        render_notification(frame, &self.displayed, self.notification_config.position);
    }
}

fn render_help_line(frame: &mut Frame, area: Rect) {
    let mut spans = Vec::with_capacity(HINTS.len() * 3);
    for (i, (key, desc)) in HINTS.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(
                " • ",
                Style::default().fg(theme::help_line::SEPARATOR),
            ));
        }
        spans.push(Span::styled(*key, Style::default().fg(theme::help_line::KEY)));
        spans.push(Span::styled(
            format!(" {}", desc),
            Style::default().fg(theme::help_line::DESCRIPTION),
        ));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

#[cfg(test)]
#[path = "app_render_tests.rs"]
mod app_render_tests;
