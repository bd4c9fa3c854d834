mod compose;
mod detail;
mod menu;
mod navigate;

use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;

use super::app::{App, Mode};

use compose::handle_compose;
use detail::handle_detail;
use menu::{handle_menu, menu_click};
use navigate::handle_navigate;

/// Handle a key event in the current mode
pub fn handle_key(app: &mut App, key: KeyEvent) {
    // Ignore bare modifier key presses (Shift, Ctrl, Alt, etc.)
    if matches!(key.code, KeyCode::Modifier(_)) {
        return;
    }
    app.status_message = None;

    match app.mode {
        Mode::Navigate => handle_navigate(app, key),
        Mode::Compose => handle_compose(app, key),
        Mode::Detail => handle_detail(app, key),
        Mode::Menu => handle_menu(app, key),
    }
}

/// Handle a mouse event. Hit rects were recorded by the last render; a
/// surface that was not drawn has a zero rect and never matches.
pub fn handle_mouse(app: &mut App, mouse: MouseEvent) {
    let (col, row) = (mouse.column, mouse.row);

    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            app.status_message = None;
            match app.mode {
                Mode::Detail => modal_click(app, col, row),
                Mode::Menu => {
                    if inside(app.hit.menu, col, row) {
                        menu_click(app, row);
                    } else {
                        // A click anywhere else dismisses the menu and then
                        // acts on whatever was under it, so clicking a row
                        // while a menu is up still toggles that row.
                        app.close_context_menu();
                        board_click(app, col, row);
                    }
                }
                Mode::Navigate | Mode::Compose => board_click(app, col, row),
            }
        }
        MouseEventKind::Down(MouseButton::Right) => {
            if matches!(app.mode, Mode::Navigate | Mode::Compose | Mode::Menu) {
                if let Some(id) = row_at(app, col, row) {
                    app.open_context_menu(id, col, row);
                }
            }
        }
        MouseEventKind::ScrollUp => {
            if app.mode == Mode::Navigate {
                app.cursor = app.cursor.saturating_sub(1);
            }
        }
        MouseEventKind::ScrollDown => {
            if app.mode == Mode::Navigate {
                app.cursor = (app.cursor + 1).min(app.store.len().saturating_sub(1));
            }
        }
        _ => {}
    }
}

/// Left click on the main board surfaces
fn board_click(app: &mut App, col: u16, row: u16) {
    if inside(app.hit.bar_delete, col, row) {
        app.confirm_bulk_delete();
        return;
    }
    if inside(app.hit.bar_cancel, col, row) {
        app.cancel_bulk_delete();
        return;
    }
    if inside(app.hit.add_button, col, row) {
        app.request_add();
        return;
    }
    if inside(app.hit.input, col, row) {
        app.mode = Mode::Compose;
        let target_col = col.saturating_sub(app.hit.input.x) as usize;
        app.input_cursor = crate::util::unicode::display_col_to_byte_offset(&app.input, target_col);
        return;
    }
    if let Some(id) = row_at(app, col, row) {
        app.toggle_selection(id);
        if let Some(index) = app.store.iter().position(|item| item.id == id) {
            app.cursor = index;
        }
        if app.mode == Mode::Compose {
            app.mode = Mode::Navigate;
        }
    }
}

/// Left click inside the detail modal
fn modal_click(app: &mut App, col: u16, row: u16) {
    if inside(app.hit.modal_save, col, row) {
        app.submit_draft();
        return;
    }
    if inside(app.hit.modal_cancel, col, row) {
        app.cancel_draft();
        return;
    }
    let focus = app
        .hit
        .modal_fields
        .iter()
        .find(|(_, rect)| inside(*rect, col, row))
        .map(|(focus, _)| *focus);
    if let (Some(focus), Some(draft)) = (focus, app.draft.as_mut()) {
        draft.focus = focus;
    }
}

fn row_at(app: &App, col: u16, row: u16) -> Option<crate::model::item::ItemId> {
    app.hit
        .rows
        .iter()
        .find(|(_, rect)| inside(*rect, col, row))
        .map(|(id, _)| *id)
}

fn inside(rect: Rect, col: u16, row: u16) -> bool {
    col >= rect.x && col < rect.x + rect.width && row >= rect.y && row < rect.y + rect.height
}
