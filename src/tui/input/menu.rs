use crossterm::event::{KeyCode, KeyEvent};

use crate::tui::app::{App, MENU_ACTIONS};

pub(super) fn handle_menu(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => {
            app.close_context_menu();
        }
        KeyCode::Down | KeyCode::Char('j') => {
            if let Some(menu) = app.context_menu.as_mut() {
                menu.cursor = (menu.cursor + 1).min(MENU_ACTIONS.len() - 1);
            }
        }
        KeyCode::Up | KeyCode::Char('k') => {
            if let Some(menu) = app.context_menu.as_mut() {
                menu.cursor = menu.cursor.saturating_sub(1);
            }
        }
        KeyCode::Enter => {
            if let Some((cursor, target)) = app.context_menu.as_ref().map(|m| (m.cursor, m.target)) {
                activate(app, cursor, target);
            }
        }
        KeyCode::Char('e') => {
            if let Some(target) = app.context_menu.as_ref().map(|m| m.target) {
                app.request_edit(target);
            }
        }
        KeyCode::Char('d') => {
            if let Some(target) = app.context_menu.as_ref().map(|m| m.target) {
                app.request_delete(target);
            }
        }
        _ => {}
    }
}

/// Left click on a menu row. Row rects were recorded by the last render.
pub(super) fn menu_click(app: &mut App, row: u16) {
    let target = match app.context_menu.as_ref() {
        Some(menu) => menu.target,
        None => return,
    };
    let action = app
        .hit
        .menu_rows
        .iter()
        .position(|rect| row >= rect.y && row < rect.y + rect.height);
    if let Some(action) = action {
        activate(app, action, target);
    }
}

fn activate(app: &mut App, action: usize, target: crate::model::item::ItemId) {
    match MENU_ACTIONS.get(action) {
        Some(&"Edit") => app.request_edit(target),
        Some(&"Delete") => app.request_delete(target),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::config::Config;
    use crate::model::item::ItemKind;
    use crate::tui::app::Mode;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn app_with_menu() -> App {
        let mut app = App::new(&Config::default());
        app.store
            .create("Wash car", App::today(), false, ItemKind::None)
            .unwrap();
        let id = app.store.nth(0).unwrap().id;
        app.open_context_menu(id, 10, 5);
        app
    }

    #[test]
    fn escape_closes_menu() {
        let mut app = app_with_menu();
        handle_menu(&mut app, key(KeyCode::Esc));
        assert!(app.context_menu.is_none());
        assert_eq!(app.mode, Mode::Navigate);
    }

    #[test]
    fn cursor_stays_within_actions() {
        let mut app = app_with_menu();
        handle_menu(&mut app, key(KeyCode::Down));
        handle_menu(&mut app, key(KeyCode::Down));
        assert_eq!(app.context_menu.as_ref().unwrap().cursor, 1);
        handle_menu(&mut app, key(KeyCode::Up));
        handle_menu(&mut app, key(KeyCode::Up));
        assert_eq!(app.context_menu.as_ref().unwrap().cursor, 0);
    }

    #[test]
    fn enter_on_edit_opens_detail() {
        let mut app = app_with_menu();
        handle_menu(&mut app, key(KeyCode::Enter));
        assert_eq!(app.mode, Mode::Detail);
        assert!(app.context_menu.is_none());
        assert_eq!(app.draft.as_ref().unwrap().text, "Wash car");
    }

    #[test]
    fn enter_on_delete_removes_target() {
        let mut app = app_with_menu();
        handle_menu(&mut app, key(KeyCode::Down));
        handle_menu(&mut app, key(KeyCode::Enter));
        assert!(app.store.is_empty());
        assert!(app.context_menu.is_none());
        assert_eq!(app.mode, Mode::Navigate);
    }

    #[test]
    fn shortcut_keys_act_on_target() {
        let mut app = app_with_menu();
        handle_menu(&mut app, key(KeyCode::Char('d')));
        assert!(app.store.is_empty());
    }
}
