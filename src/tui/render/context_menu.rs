use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::tui::app::{App, MENU_ACTIONS};

/// Render the context menu anchored at the position it was opened from,
/// nudged back inside the frame when it would overflow
pub fn render_context_menu(frame: &mut Frame, app: &mut App, area: Rect) {
    let Some(menu) = app.context_menu.as_ref() else {
        return;
    };

    let width: u16 = 12;
    let height = MENU_ACTIONS.len() as u16 + 2;
    let x = menu.x.min(area.width.saturating_sub(width));
    let y = menu.y.min(area.height.saturating_sub(height));
    let menu_area = Rect::new(x, y, width, height);

    let bg = app.theme.panel;
    let cursor = menu.cursor;

    frame.render_widget(Clear, menu_area);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(app.theme.dim).bg(bg))
        .style(Style::default().bg(bg));
    let inner = block.inner(menu_area);

    let lines: Vec<Line> = MENU_ACTIONS
        .iter()
        .enumerate()
        .map(|(i, action)| {
            let style = if i == cursor {
                Style::default()
                    .fg(app.theme.background)
                    .bg(app.theme.highlight)
            } else if *action == "Delete" {
                Style::default().fg(app.theme.red).bg(bg)
            } else {
                Style::default().fg(app.theme.text).bg(bg)
            };
            Line::from(Span::styled(format!(" {action:<9}"), style))
        })
        .collect();

    frame.render_widget(Paragraph::new(lines).block(block), menu_area);

    app.hit.menu = menu_area;
    app.hit.menu_rows = (0..MENU_ACTIONS.len() as u16)
        .map(|i| Rect::new(inner.x, inner.y + i, inner.width, 1))
        .collect();
}
