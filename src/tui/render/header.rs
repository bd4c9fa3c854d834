use chrono::{Local, Timelike};
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::App;

/// Time-of-day greeting shown at the top of the board
pub fn greeting(hour: u32) -> &'static str {
    if hour < 12 {
        "Good Morning."
    } else if hour < 17 {
        "Good Afternoon."
    } else {
        "Good Evening."
    }
}

/// Render the greeting header and today's date
pub fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let now = Local::now();

    let line = Line::from(vec![
        Span::styled(
            format!(" {}", greeting(now.hour())),
            Style::default()
                .fg(app.theme.text_bright)
                .bg(bg)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("  {}", now.format("%A, %B %-d")),
            Style::default().fg(app.theme.dim).bg(bg),
        ),
    ]);

    frame.render_widget(Paragraph::new(line).style(Style::default().bg(bg)), area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn greeting_buckets() {
        assert_eq!(greeting(0), "Good Morning.");
        assert_eq!(greeting(11), "Good Morning.");
        assert_eq!(greeting(12), "Good Afternoon.");
        assert_eq!(greeting(16), "Good Afternoon.");
        assert_eq!(greeting(17), "Good Evening.");
        assert_eq!(greeting(23), "Good Evening.");
    }
}
