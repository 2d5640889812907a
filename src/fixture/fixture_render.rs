//! Fixture pane rendering

use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::theme;

/// Largest useful scroll offset for `line_count` lines in a pane of `area_height`
pub fn max_scroll(line_count: usize, area_height: u16) -> u16 {
    let viewport = area_height.saturating_sub(2) as usize; // borders
    line_count.saturating_sub(viewport).min(u16::MAX as usize) as u16
}

/// Render the pretty-printed fixture into `area`, scrolled by `scroll` lines
pub fn render_fixture(frame: &mut Frame, area: Rect, text: &str, scroll: u16) {
    let line_count = text.lines().count();
    let scroll = scroll.min(max_scroll(line_count, area.height));

    let position = format!(
        " {}/{} ",
        (scroll as usize + 1).min(line_count.max(1)),
        line_count
    );

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme::fixture::BORDER))
        .title(Line::from(Span::styled(
            " Vehicle snapshot ",
            theme::fixture::TITLE,
        )))
        .title_bottom(
            Line::from(Span::styled(
                position,
                Style::default().fg(theme::fixture::POSITION),
            ))
            .right_aligned(),
        )
        .style(Style::default().bg(theme::fixture::BACKGROUND));

    let lines: Vec<Line> = text
        .lines()
        .map(|l| Line::from(Span::styled(l, Style::default().fg(theme::fixture::TEXT))))
        .collect();

    let paragraph = Paragraph::new(lines).block(block).scroll((scroll, 0));

    frame.render_widget(paragraph, area);
}
