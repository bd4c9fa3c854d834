use chrono::{Days, Months};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::tui::app::{App, DetailFocus, DraftField};
use crate::util::unicode;

/// Key handling inside the detail modal. All edits go through the draft;
/// the store is untouched until submit.
pub(super) fn handle_detail(app: &mut App, key: KeyEvent) {
    match (key.modifiers, key.code) {
        (_, KeyCode::Esc) => {
            app.cancel_draft();
            return;
        }
        (_, KeyCode::Enter) => {
            app.submit_draft();
            return;
        }
        (_, KeyCode::Tab) => {
            if let Some(draft) = app.draft.as_mut() {
                draft.focus = draft.focus.next();
            }
            return;
        }
        (_, KeyCode::BackTab) => {
            if let Some(draft) = app.draft.as_mut() {
                draft.focus = draft.focus.prev();
            }
            return;
        }
        _ => {}
    }

    let Some(focus) = app.draft.as_ref().map(|d| d.focus) else {
        return;
    };
    match focus {
        DetailFocus::Text => edit_text(app, key),
        DetailFocus::Date => edit_date(app, key),
        DetailFocus::Priority => {
            if matches!(key.code, KeyCode::Char(' ')) {
                let priority = app.draft.as_ref().map(|d| d.priority).unwrap_or(false);
                app.update_draft_field(DraftField::Priority(!priority));
            }
        }
        DetailFocus::Kind => {
            let kind = match app.draft.as_ref() {
                Some(draft) => draft.kind,
                None => return,
            };
            match key.code {
                KeyCode::Char(' ') | KeyCode::Right => {
                    app.update_draft_field(DraftField::Kind(kind.next()));
                }
                KeyCode::Left => {
                    app.update_draft_field(DraftField::Kind(kind.prev()));
                }
                _ => {}
            }
        }
    }
}

fn edit_text(app: &mut App, key: KeyEvent) {
    let Some(draft) = app.draft.as_mut() else {
        return;
    };
    match (key.modifiers, key.code) {
        (KeyModifiers::NONE, KeyCode::Left) => {
            if let Some(prev) = unicode::prev_grapheme_boundary(&draft.text, draft.text_cursor) {
                draft.text_cursor = prev;
            }
        }
        (KeyModifiers::NONE, KeyCode::Right) => {
            if let Some(next) = unicode::next_grapheme_boundary(&draft.text, draft.text_cursor) {
                draft.text_cursor = next;
            }
        }
        (_, KeyCode::Home) => draft.text_cursor = 0,
        (_, KeyCode::End) => draft.text_cursor = draft.text.len(),
        (_, KeyCode::Backspace) => {
            if let Some(prev) = unicode::prev_grapheme_boundary(&draft.text, draft.text_cursor) {
                draft.text.replace_range(prev..draft.text_cursor, "");
                draft.text_cursor = prev;
            }
        }
        (_, KeyCode::Delete) => {
            if let Some(next) = unicode::next_grapheme_boundary(&draft.text, draft.text_cursor) {
                draft.text.replace_range(draft.text_cursor..next, "");
            }
        }
        (KeyModifiers::NONE | KeyModifiers::SHIFT, KeyCode::Char(c)) => {
            draft.text.insert(draft.text_cursor, c);
            draft.text_cursor += c.len_utf8();
        }
        _ => {}
    }
}

fn edit_date(app: &mut App, key: KeyEvent) {
    let Some(date) = app.draft.as_ref().map(|d| d.date) else {
        return;
    };
    let next = match key.code {
        KeyCode::Left | KeyCode::Char('-') => date.checked_sub_days(Days::new(1)),
        KeyCode::Right | KeyCode::Char('+') | KeyCode::Char('=') => {
            date.checked_add_days(Days::new(1))
        }
        KeyCode::PageDown => date.checked_sub_months(Months::new(1)),
        KeyCode::PageUp => date.checked_add_months(Months::new(1)),
        KeyCode::Char('t') => Some(App::today()),
        _ => None,
    };
    if let Some(next) = next {
        app.update_draft_field(DraftField::Date(next));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::config::Config;
    use crate::model::item::ItemKind;
    use crate::tui::app::Mode;
    use chrono::NaiveDate;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn detail_app() -> App {
        let mut app = App::new(&Config::default());
        app.input = "Buy milk".to_string();
        app.request_add();
        app
    }

    fn draft(app: &App) -> &crate::tui::app::Draft {
        app.draft.as_ref().unwrap()
    }

    #[test]
    fn tab_cycles_focus_forward_and_back() {
        let mut app = detail_app();
        assert_eq!(draft(&app).focus, DetailFocus::Date);
        handle_detail(&mut app, key(KeyCode::Tab));
        assert_eq!(draft(&app).focus, DetailFocus::Priority);
        handle_detail(&mut app, key(KeyCode::BackTab));
        assert_eq!(draft(&app).focus, DetailFocus::Date);
    }

    #[test]
    fn date_arrows_step_days() {
        let mut app = detail_app();
        app.update_draft_field(DraftField::Date(
            NaiveDate::from_ymd_opt(2025, 6, 15).unwrap(),
        ));
        handle_detail(&mut app, key(KeyCode::Right));
        assert_eq!(
            draft(&app).date,
            NaiveDate::from_ymd_opt(2025, 6, 16).unwrap()
        );
        handle_detail(&mut app, key(KeyCode::Left));
        handle_detail(&mut app, key(KeyCode::Left));
        assert_eq!(
            draft(&app).date,
            NaiveDate::from_ymd_opt(2025, 6, 14).unwrap()
        );
    }

    #[test]
    fn date_page_keys_step_months() {
        let mut app = detail_app();
        app.update_draft_field(DraftField::Date(
            NaiveDate::from_ymd_opt(2025, 1, 31).unwrap(),
        ));
        handle_detail(&mut app, key(KeyCode::PageUp));
        // Clamped to the shorter month
        assert_eq!(
            draft(&app).date,
            NaiveDate::from_ymd_opt(2025, 2, 28).unwrap()
        );
    }

    #[test]
    fn space_toggles_priority() {
        let mut app = detail_app();
        handle_detail(&mut app, key(KeyCode::Tab)); // Date -> Priority
        handle_detail(&mut app, key(KeyCode::Char(' ')));
        assert!(draft(&app).priority);
        handle_detail(&mut app, key(KeyCode::Char(' ')));
        assert!(!draft(&app).priority);
    }

    #[test]
    fn kind_cycles_both_directions() {
        let mut app = detail_app();
        handle_detail(&mut app, key(KeyCode::Tab)); // Priority
        handle_detail(&mut app, key(KeyCode::Tab)); // Kind
        handle_detail(&mut app, key(KeyCode::Right));
        assert_eq!(draft(&app).kind, ItemKind::Reminder);
        handle_detail(&mut app, key(KeyCode::Left));
        assert_eq!(draft(&app).kind, ItemKind::None);
    }

    #[test]
    fn text_focus_edits_draft_text() {
        let mut app = detail_app();
        handle_detail(&mut app, key(KeyCode::BackTab)); // Date -> Text
        handle_detail(&mut app, key(KeyCode::Backspace));
        handle_detail(&mut app, key(KeyCode::Char('K')));
        assert_eq!(draft(&app).text, "Buy milK");
    }

    #[test]
    fn enter_submits_and_escape_cancels() {
        let mut app = detail_app();
        handle_detail(&mut app, key(KeyCode::Enter));
        assert_eq!(app.store.len(), 1);
        assert_eq!(app.mode, Mode::Navigate);

        app.input = "Another".to_string();
        app.request_add();
        handle_detail(&mut app, key(KeyCode::Esc));
        assert_eq!(app.store.len(), 1);
        assert_eq!(app.mode, Mode::Compose);
    }
}
