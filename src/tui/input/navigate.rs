use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::tui::app::{App, Mode};

pub(super) fn handle_navigate(app: &mut App, key: KeyEvent) {
    match (key.modifiers, key.code) {
        // Quit: q or Ctrl-C
        (KeyModifiers::NONE, KeyCode::Char('q'))
        | (KeyModifiers::CONTROL, KeyCode::Char('c')) => {
            app.should_quit = true;
        }

        // Cursor movement
        (KeyModifiers::NONE, KeyCode::Char('j')) | (_, KeyCode::Down) => {
            app.cursor = (app.cursor + 1).min(app.store.len().saturating_sub(1));
        }
        (KeyModifiers::NONE, KeyCode::Char('k')) | (_, KeyCode::Up) => {
            app.cursor = app.cursor.saturating_sub(1);
        }
        (KeyModifiers::NONE, KeyCode::Char('g')) | (_, KeyCode::Home) => {
            app.cursor = 0;
        }
        (KeyModifiers::SHIFT, KeyCode::Char('G')) | (_, KeyCode::End) => {
            app.cursor = app.store.len().saturating_sub(1);
        }

        // Focus the quick-add input
        (KeyModifiers::NONE, KeyCode::Char('i')) => {
            app.mode = Mode::Compose;
        }

        // Toggle selection on the cursor item
        (KeyModifiers::NONE, KeyCode::Char(' ') | KeyCode::Char('x')) => {
            if let Some(id) = app.cursor_item_id() {
                app.toggle_selection(id);
            }
        }

        // Context menu for the cursor item, anchored at its row
        (KeyModifiers::NONE, KeyCode::Char('m')) | (_, KeyCode::Enter) => {
            if let Some(id) = app.cursor_item_id() {
                let anchor = app
                    .hit
                    .rows
                    .iter()
                    .find(|(row_id, _)| *row_id == id)
                    .map(|(_, rect)| (rect.x + 2, rect.y + 1))
                    .unwrap_or((0, 0));
                app.open_context_menu(id, anchor.0, anchor.1);
            }
        }

        // Edit / delete shortcuts for the cursor item
        (KeyModifiers::NONE, KeyCode::Char('e')) => {
            if let Some(id) = app.cursor_item_id() {
                app.request_edit(id);
            }
        }
        (KeyModifiers::NONE, KeyCode::Char('d')) => {
            if let Some(id) = app.cursor_item_id() {
                app.request_delete(id);
            }
        }

        // Bulk delete bar
        (KeyModifiers::SHIFT, KeyCode::Char('D')) => {
            if app.bulk_bar_visible() {
                app.confirm_bulk_delete();
            }
        }
        (_, KeyCode::Esc) => {
            app.cancel_bulk_delete();
        }

        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::config::Config;
    use crate::model::item::ItemKind;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn app_with_items(n: usize) -> App {
        let mut app = App::new(&Config::default());
        for i in 0..n {
            app.store
                .create(&format!("item {i}"), App::today(), false, ItemKind::None)
                .unwrap();
        }
        app
    }

    #[test]
    fn cursor_moves_and_clamps() {
        let mut app = app_with_items(2);
        handle_navigate(&mut app, key(KeyCode::Down));
        assert_eq!(app.cursor, 1);
        handle_navigate(&mut app, key(KeyCode::Down));
        assert_eq!(app.cursor, 1);
        handle_navigate(&mut app, key(KeyCode::Up));
        assert_eq!(app.cursor, 0);
        handle_navigate(&mut app, key(KeyCode::Up));
        assert_eq!(app.cursor, 0);
    }

    #[test]
    fn space_toggles_selection_under_cursor() {
        let mut app = app_with_items(2);
        handle_navigate(&mut app, key(KeyCode::Char(' ')));
        assert_eq!(app.selection.len(), 1);
        handle_navigate(&mut app, key(KeyCode::Char(' ')));
        assert!(app.selection.is_empty());
    }

    #[test]
    fn esc_drops_selection() {
        let mut app = app_with_items(2);
        handle_navigate(&mut app, key(KeyCode::Char(' ')));
        handle_navigate(&mut app, key(KeyCode::Esc));
        assert!(app.selection.is_empty());
        assert_eq!(app.store.len(), 2);
    }

    #[test]
    fn enter_opens_menu_for_cursor_item() {
        let mut app = app_with_items(2);
        app.cursor = 1;
        handle_navigate(&mut app, key(KeyCode::Enter));
        let menu = app.context_menu.as_ref().unwrap();
        assert_eq!(menu.target, app.store.nth(1).unwrap().id);
        assert_eq!(app.mode, Mode::Menu);
    }

    #[test]
    fn keys_on_empty_board_are_noops() {
        let mut app = app_with_items(0);
        handle_navigate(&mut app, key(KeyCode::Enter));
        handle_navigate(&mut app, key(KeyCode::Char(' ')));
        handle_navigate(&mut app, key(KeyCode::Char('d')));
        assert!(app.context_menu.is_none());
        assert!(app.selection.is_empty());
    }

    #[test]
    fn quit_keys() {
        let mut app = app_with_items(1);
        handle_navigate(&mut app, key(KeyCode::Char('q')));
        assert!(app.should_quit);
    }
}
