use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::model::item::{Item, ItemKind};
use crate::tui::app::{App, Mode};
use crate::util::unicode;

/// Render the item list, recording a hit rect per visible row
pub fn render_list_view(frame: &mut Frame, app: &mut App, area: Rect) {
    let bg = app.theme.background;

    if app.store.is_empty() {
        let empty = Paragraph::new(Line::from(Span::styled(
            " Nothing to do. Add your first item above.",
            Style::default().fg(app.theme.dim).bg(bg),
        )))
        .style(Style::default().bg(bg));
        frame.render_widget(empty, area);
        return;
    }

    let height = area.height as usize;
    if height == 0 {
        return;
    }

    // Keep the cursor row inside the viewport
    if app.cursor < app.scroll_offset {
        app.scroll_offset = app.cursor;
    } else if app.cursor >= app.scroll_offset + height {
        app.scroll_offset = app.cursor - height + 1;
    }

    let items: Vec<&Item> = app
        .store
        .iter()
        .skip(app.scroll_offset)
        .take(height)
        .collect();

    let mut lines = Vec::with_capacity(items.len());
    let mut rows = Vec::with_capacity(items.len());
    for (i, item) in items.iter().enumerate() {
        let index = app.scroll_offset + i;
        let row_area = Rect::new(area.x, area.y + i as u16, area.width, 1);
        rows.push((item.id, row_area));
        lines.push(item_line(app, item, index, area.width as usize));
    }
    app.hit.rows = rows;

    frame.render_widget(
        Paragraph::new(lines).style(Style::default().bg(bg)),
        area,
    );
}

fn item_line(app: &App, item: &Item, index: usize, width: usize) -> Line<'static> {
    let selected = app.selection.contains(&item.id);
    let under_cursor = app.mode == Mode::Navigate && index == app.cursor;
    let row_bg = if selected {
        app.theme.selection_bg
    } else if under_cursor {
        app.theme.panel
    } else {
        app.theme.background
    };

    let checkbox = if selected { " [x] " } else { " [ ] " };
    let star = if item.priority { "\u{2605} " } else { "\u{2606} " };
    let star_color = if item.priority {
        app.theme.highlight
    } else {
        app.theme.dim
    };

    let mut text_style = Style::default().fg(app.theme.text).bg(row_bg);
    if under_cursor {
        text_style = text_style.fg(app.theme.text_bright);
    }
    if item.completed {
        text_style = text_style.fg(app.theme.dim).add_modifier(Modifier::CROSSED_OUT);
    }

    // Right side: optional kind tag plus the date
    let date = item.date.format("%b %-d").to_string();
    let tag = match item.kind {
        ItemKind::None => String::new(),
        kind => format!("#{} ", kind.label()),
    };
    let right_width = unicode::display_width(&tag) + unicode::display_width(&date) + 1;

    let left_budget = width
        .saturating_sub(checkbox.len() + 2) // star column is 2 cells
        .saturating_sub(right_width + 1);
    let text = unicode::truncate_to_width(&item.text, left_budget);
    let pad = left_budget.saturating_sub(unicode::display_width(&text));

    let mut spans = vec![
        Span::styled(checkbox.to_string(), Style::default().fg(app.theme.dim).bg(row_bg)),
        Span::styled(star.to_string(), Style::default().fg(star_color).bg(row_bg)),
        Span::styled(text, text_style),
        Span::styled(" ".repeat(pad), Style::default().bg(row_bg)),
    ];
    if !tag.is_empty() {
        spans.push(Span::styled(
            tag,
            Style::default().fg(app.theme.kind_color(item.kind)).bg(row_bg),
        ));
    }
    spans.push(Span::styled(
        format!("{date} "),
        Style::default().fg(app.theme.dim).bg(row_bg),
    ));
    Line::from(spans)
}
