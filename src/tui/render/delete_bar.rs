use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::App;

/// Render the bulk-delete bar. Only called while the selection is non-empty.
pub fn render_delete_bar(frame: &mut Frame, app: &mut App, area: Rect) {
    let bg = app.theme.selection_bg;
    let count = app.selection.len();
    let label = format!(
        " Delete {count} item{}? ",
        if count == 1 { "" } else { "s" }
    );

    let delete_label = " Delete ";
    let cancel_label = " Cancel ";
    let spans = vec![
        Span::styled(label.clone(), Style::default().fg(app.theme.text_bright).bg(bg)),
        Span::styled(
            delete_label,
            Style::default()
                .fg(app.theme.text_bright)
                .bg(app.theme.red)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled("  ", Style::default().bg(bg)),
        Span::styled(cancel_label, Style::default().fg(app.theme.text).bg(app.theme.panel)),
    ];

    frame.render_widget(
        Paragraph::new(Line::from(spans)).style(Style::default().bg(bg)),
        area,
    );

    let delete_x = area.x + label.len() as u16;
    app.hit.bar_delete = Rect::new(delete_x, area.y, delete_label.len() as u16, 1);
    app.hit.bar_cancel = Rect::new(
        delete_x + delete_label.len() as u16 + 2,
        area.y,
        cancel_label.len() as u16,
        1,
    );
}
