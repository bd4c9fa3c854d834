use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::tui::app::{App, DetailFocus};
use crate::util::unicode;

/// Render the detail modal for the open draft, recording hit rects for the
/// fields and buttons
pub fn render_detail_modal(frame: &mut Frame, app: &mut App, area: Rect) {
    let Some(draft) = app.draft.as_ref() else {
        return;
    };

    let width: u16 = 44.min(area.width.saturating_sub(2));
    let height: u16 = 9.min(area.height.saturating_sub(2));
    let modal_area = super::centered_rect_fixed(width, height, area);

    let bg = app.theme.panel;
    let title = if draft.editing.is_some() {
        " Edit Todo "
    } else {
        " Add Todo Details "
    };

    frame.render_widget(Clear, modal_area);
    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .title_style(
            Style::default()
                .fg(app.theme.text_bright)
                .bg(bg)
                .add_modifier(Modifier::BOLD),
        )
        .border_style(Style::default().fg(app.theme.highlight).bg(bg))
        .style(Style::default().bg(bg));
    let inner = block.inner(modal_area);

    let label_style = Style::default().fg(app.theme.dim).bg(bg);
    let field = |focus: DetailFocus, label: &str, value: String| {
        let focused = draft.focus == focus;
        let value_style = if focused {
            Style::default().fg(app.theme.background).bg(app.theme.highlight)
        } else {
            Style::default().fg(app.theme.text_bright).bg(bg)
        };
        Line::from(vec![
            Span::styled(format!(" {label:<9}"), label_style),
            Span::styled(value, value_style),
        ])
    };

    let text_budget = inner.width.saturating_sub(11) as usize;
    let text_value = if draft.focus == DetailFocus::Text {
        let cursor = draft.text_cursor.min(draft.text.len());
        let with_cursor = format!(
            "{}\u{258C}{}",
            &draft.text[..cursor],
            &draft.text[cursor..]
        );
        unicode::truncate_to_width(&with_cursor, text_budget)
    } else {
        unicode::truncate_to_width(&draft.text, text_budget)
    };

    let lines = vec![
        field(DetailFocus::Text, "Task", text_value),
        field(DetailFocus::Date, "Date", draft.date.format("%Y-%m-%d").to_string()),
        field(
            DetailFocus::Priority,
            "Priority",
            if draft.priority { "[x] starred" } else { "[ ] starred" }.to_string(),
        ),
        field(DetailFocus::Kind, "Kind", draft.kind.label().to_string()),
        Line::default(),
        Line::from(vec![
            Span::styled(" ", Style::default().bg(bg)),
            Span::styled(
                "  Save  ",
                Style::default()
                    .fg(app.theme.background)
                    .bg(app.theme.highlight)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled("  ", Style::default().bg(bg)),
            Span::styled(" Cancel ", Style::default().fg(app.theme.text).bg(app.theme.selection_bg)),
        ]),
    ];

    frame.render_widget(Paragraph::new(lines).block(block), modal_area);

    app.hit.modal = modal_area;
    app.hit.modal_fields = [
        DetailFocus::Text,
        DetailFocus::Date,
        DetailFocus::Priority,
        DetailFocus::Kind,
    ]
    .iter()
    .enumerate()
    .map(|(i, focus)| (*focus, Rect::new(inner.x, inner.y + i as u16, inner.width, 1)))
    .collect();
    app.hit.modal_save = Rect::new(inner.x + 1, inner.y + 5, 8, 1);
    app.hit.modal_cancel = Rect::new(inner.x + 11, inner.y + 5, 8, 1);
}
