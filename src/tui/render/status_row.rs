use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, Mode};

/// Render the status row (bottom of screen)
pub fn render_status_row(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let width = area.width as usize;

    let line = if let Some(message) = &app.status_message {
        Line::from(Span::styled(
            format!(" {message}"),
            Style::default().fg(app.theme.highlight).bg(bg),
        ))
    } else if app.show_key_hints {
        let hint = match app.mode {
            Mode::Navigate => "i add  Space select  Enter menu  e edit  d delete  q quit",
            Mode::Compose => "Enter details  Esc back",
            Mode::Detail => "Tab next field  Enter save  Esc cancel",
            Mode::Menu => "\u{2191}\u{2193} move  Enter choose  Esc close",
        };
        Line::from(Span::styled(
            format!(" {hint}"),
            Style::default().fg(app.theme.dim).bg(bg),
        ))
    } else {
        Line::from(Span::styled(" ".repeat(width), Style::default().bg(bg)))
    };

    frame.render_widget(
        Paragraph::new(line).style(Style::default().bg(bg)),
        area,
    );
}
