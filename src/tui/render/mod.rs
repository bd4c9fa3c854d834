pub mod context_menu;
pub mod delete_bar;
pub mod detail_modal;
pub mod header;
pub mod input_row;
pub mod list_view;
pub mod status_row;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::Style;
use ratatui::widgets::Block;

use super::app::{App, HitAreas};

/// Main render function, dispatches to sub-renderers. Hit rects are rebuilt
/// from scratch each frame so stale areas from a closed surface cannot
/// swallow clicks.
pub fn render(frame: &mut Frame, app: &mut App) {
    let area = frame.area();
    app.hit = HitAreas::default();

    // Background fill
    let bg_style = Style::default().bg(app.theme.background);
    frame.render_widget(Block::default().style(bg_style), area);

    // Layout: header | quick-add row | board | (delete bar) | status row
    let mut constraints = vec![
        Constraint::Length(2), // greeting header
        Constraint::Length(3), // quick-add input
        Constraint::Min(1),    // item list
    ];
    if app.bulk_bar_visible() {
        constraints.push(Constraint::Length(1));
    }
    constraints.push(Constraint::Length(1)); // status row

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    header::render_header(frame, app, chunks[0]);
    input_row::render_input_row(frame, app, chunks[1]);
    list_view::render_list_view(frame, app, chunks[2]);

    let mut next = 3;
    if app.bulk_bar_visible() {
        delete_bar::render_delete_bar(frame, app, chunks[next]);
        next += 1;
    }
    status_row::render_status_row(frame, app, chunks[next]);

    // Overlays on top of everything
    if app.context_menu.is_some() {
        context_menu::render_context_menu(frame, app, area);
    }
    if app.draft.is_some() {
        detail_modal::render_detail_modal(frame, app, area);
    }
}

pub(super) fn centered_rect_fixed(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + area.width.saturating_sub(width) / 2;
    let y = area.y + area.height.saturating_sub(height) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}
