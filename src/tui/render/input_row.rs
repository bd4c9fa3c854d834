use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::tui::app::{App, Mode};
use crate::util::unicode;

/// Render the quick-add input and its Add button, recording their hit rects
pub fn render_input_row(frame: &mut Frame, app: &mut App, area: Rect) {
    let bg = app.theme.background;
    let focused = app.mode == Mode::Compose;

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(10), Constraint::Length(11)])
        .split(area);

    let border_color = if focused {
        app.theme.highlight
    } else {
        app.theme.dim
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color).bg(bg))
        .style(Style::default().bg(bg));
    let inner = block.inner(chunks[0]);
    app.hit.input = inner;

    let line = if app.input.is_empty() && !focused {
        Line::from(Span::styled(
            "Add a new task",
            Style::default().fg(app.theme.dim).bg(bg),
        ))
    } else {
        input_line(app, inner.width as usize)
    };

    frame.render_widget(Paragraph::new(line).block(block), chunks[0]);

    // The Add button
    let button_style = Style::default()
        .fg(app.theme.background)
        .bg(app.theme.highlight)
        .add_modifier(Modifier::BOLD);
    let button = Paragraph::new(Line::from(Span::styled("  + Add  ", button_style)))
        .style(Style::default().bg(bg));
    let button_area = Rect::new(chunks[1].x + 1, chunks[1].y + 1, 9, 1);
    app.hit.add_button = button_area;
    frame.render_widget(button, button_area);
}

/// Input text with a block cursor when focused, scrolled so the cursor
/// stays in view
fn input_line(app: &App, width: usize) -> Line<'static> {
    let text_style = Style::default().fg(app.theme.text_bright).bg(app.theme.background);
    let cursor_style = Style::default().fg(app.theme.highlight).bg(app.theme.background);

    if app.mode != Mode::Compose {
        return Line::from(Span::styled(
            unicode::truncate_to_width(&app.input, width),
            text_style,
        ));
    }

    let cursor = app.input_cursor.min(app.input.len());
    let before = &app.input[..cursor];
    let after = &app.input[cursor..];

    // Keep the cursor visible: drop leading columns when the prefix is wider
    // than the box
    let before_cols = unicode::display_width(before);
    let visible_before = if before_cols + 1 > width {
        let skip = before_cols + 1 - width;
        let start = unicode::display_col_to_byte_offset(before, skip);
        &before[start..]
    } else {
        before
    };

    let mut spans = vec![Span::styled(visible_before.to_string(), text_style)];
    spans.push(Span::styled("\u{258C}", cursor_style));
    let used = unicode::display_width(visible_before) + 1;
    if used < width {
        spans.push(Span::styled(
            unicode::truncate_to_width(after, width - used),
            text_style,
        ));
    }
    Line::from(spans)
}
