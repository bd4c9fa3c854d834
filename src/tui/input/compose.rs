use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::tui::app::{App, Mode};
use crate::util::unicode;

/// Key handling while the quick-add input has focus. Enter hands off to the
/// detail modal; the text itself is not committed from here.
pub(super) fn handle_compose(app: &mut App, key: KeyEvent) {
    match (key.modifiers, key.code) {
        (_, KeyCode::Esc) => {
            app.mode = Mode::Navigate;
        }
        (_, KeyCode::Enter) => {
            app.request_add();
        }

        // Cursor movement
        (KeyModifiers::NONE, KeyCode::Left) => {
            if let Some(prev) = unicode::prev_grapheme_boundary(&app.input, app.input_cursor) {
                app.input_cursor = prev;
            }
        }
        (KeyModifiers::NONE, KeyCode::Right) => {
            if let Some(next) = unicode::next_grapheme_boundary(&app.input, app.input_cursor) {
                app.input_cursor = next;
            }
        }
        (KeyModifiers::CONTROL, KeyCode::Left) => {
            app.input_cursor = unicode::word_boundary_left(&app.input, app.input_cursor);
        }
        (KeyModifiers::CONTROL, KeyCode::Right) => {
            app.input_cursor = unicode::word_boundary_right(&app.input, app.input_cursor);
        }
        (_, KeyCode::Home) => {
            app.input_cursor = 0;
        }
        (_, KeyCode::End) => {
            app.input_cursor = app.input.len();
        }

        // Deletion
        (_, KeyCode::Backspace) => {
            if let Some(prev) = unicode::prev_grapheme_boundary(&app.input, app.input_cursor) {
                app.input.replace_range(prev..app.input_cursor, "");
                app.input_cursor = prev;
            }
        }
        (_, KeyCode::Delete) => {
            if let Some(next) = unicode::next_grapheme_boundary(&app.input, app.input_cursor) {
                app.input.replace_range(app.input_cursor..next, "");
            }
        }
        (KeyModifiers::CONTROL, KeyCode::Char('w')) => {
            let start = unicode::word_boundary_left(&app.input, app.input_cursor);
            app.input.replace_range(start..app.input_cursor, "");
            app.input_cursor = start;
        }
        (KeyModifiers::CONTROL, KeyCode::Char('u')) => {
            app.input.clear();
            app.input_cursor = 0;
        }

        // Insertion
        (KeyModifiers::NONE | KeyModifiers::SHIFT, KeyCode::Char(c)) => {
            app.input.insert(app.input_cursor, c);
            app.input_cursor += c.len_utf8();
        }

        _ => {}
    }
}
