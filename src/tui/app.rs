use std::collections::HashSet;
use std::io;
use std::time::Duration;

use chrono::{Days, Local, NaiveDate};
use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind,
};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::Rect;

use crate::model::config::Config;
use crate::model::item::{ItemId, ItemKind};
use crate::store::ItemStore;

use super::theme::Theme;
use super::{input, render};

/// Which input handler is active
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Browsing the board
    Navigate,
    /// Typing into the quick-add input
    Compose,
    /// Detail modal open (new item or edit)
    Detail,
    /// Context menu open over an item row
    Menu,
}

/// Context-menu entries, in display order
pub const MENU_ACTIONS: [&str; 2] = ["Edit", "Delete"];

/// An open context menu. At most one exists at a time; opening a second
/// replaces this one directly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContextMenu {
    pub target: ItemId,
    pub x: u16,
    pub y: u16,
    pub cursor: usize,
}

/// Focused field inside the detail modal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailFocus {
    Text,
    Date,
    Priority,
    Kind,
}

impl DetailFocus {
    pub fn next(self) -> Self {
        match self {
            DetailFocus::Text => DetailFocus::Date,
            DetailFocus::Date => DetailFocus::Priority,
            DetailFocus::Priority => DetailFocus::Kind,
            DetailFocus::Kind => DetailFocus::Text,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            DetailFocus::Text => DetailFocus::Kind,
            DetailFocus::Date => DetailFocus::Text,
            DetailFocus::Priority => DetailFocus::Date,
            DetailFocus::Kind => DetailFocus::Priority,
        }
    }
}

/// In-flight item fields while the detail modal is open. Nothing touches the
/// store until the draft is submitted; cancel throws the whole thing away.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Draft {
    pub text: String,
    pub text_cursor: usize,
    pub date: NaiveDate,
    pub priority: bool,
    pub kind: ItemKind,
    /// `Some(id)` when editing an existing item, `None` for a new one
    pub editing: Option<ItemId>,
    pub focus: DetailFocus,
}

/// A single draft field update
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DraftField {
    Text(String),
    Date(NaiveDate),
    Priority(bool),
    Kind(ItemKind),
}

/// Screen rectangles recorded during render, used for mouse hit-testing on
/// the next event. Zero-sized rects never match, so a surface that was not
/// drawn is inert.
#[derive(Debug, Default)]
pub struct HitAreas {
    pub input: Rect,
    pub add_button: Rect,
    pub rows: Vec<(ItemId, Rect)>,
    pub menu: Rect,
    pub menu_rows: Vec<Rect>,
    pub bar_delete: Rect,
    pub bar_cancel: Rect,
    pub modal: Rect,
    pub modal_fields: Vec<(DetailFocus, Rect)>,
    pub modal_save: Rect,
    pub modal_cancel: Rect,
}

/// Application state
pub struct App {
    pub store: ItemStore,
    pub mode: Mode,
    pub theme: Theme,
    pub show_key_hints: bool,
    pub should_quit: bool,

    /// Quick-add input buffer and byte cursor
    pub input: String,
    pub input_cursor: usize,

    /// Board cursor (index into insertion order) and scroll offset
    pub cursor: usize,
    pub scroll_offset: usize,

    pub selection: HashSet<ItemId>,
    pub context_menu: Option<ContextMenu>,
    pub draft: Option<Draft>,
    pub status_message: Option<String>,

    pub hit: HitAreas,
}

impl App {
    pub fn new(config: &Config) -> Self {
        App {
            store: ItemStore::new(),
            mode: Mode::Navigate,
            theme: Theme::from_config(config),
            show_key_hints: config.ui.show_key_hints,
            should_quit: false,
            input: String::new(),
            input_cursor: 0,
            cursor: 0,
            scroll_offset: 0,
            selection: HashSet::new(),
            context_menu: None,
            draft: None,
            status_message: None,
            hit: HitAreas::default(),
        }
    }

    pub fn today() -> NaiveDate {
        Local::now().date_naive()
    }

    pub fn cursor_item_id(&self) -> Option<ItemId> {
        self.store.nth(self.cursor).map(|item| item.id)
    }

    /// Seed a few items for `--sample`
    pub fn seed_sample_items(&mut self) {
        let today = Self::today();
        let plus = |n: u64| today.checked_add_days(Days::new(n)).unwrap_or(today);
        let _ = self
            .store
            .create("Water the plants", today, false, ItemKind::None);
        let _ = self
            .store
            .create("Renew passport", plus(1), true, ItemKind::Reminder);
        let _ = self
            .store
            .create("Server backup check", plus(2), false, ItemKind::Alert);
        let _ = self
            .store
            .create("Sort photo library", plus(7), false, ItemKind::Tag);
    }

    // --- compose / detail session ---

    /// Open the detail modal seeded from the quick-add input. Gated on the
    /// trimmed input being non-empty; otherwise nothing happens.
    pub fn request_add(&mut self) {
        if self.input.trim().is_empty() {
            return;
        }
        self.draft = Some(Draft {
            text: self.input.clone(),
            text_cursor: self.input.len(),
            date: Self::today(),
            priority: false,
            kind: ItemKind::None,
            editing: None,
            focus: DetailFocus::Date,
        });
        self.mode = Mode::Detail;
    }

    /// Open the detail modal seeded from an existing item. Closes the context
    /// menu first. If the item vanished in the meantime this is a no-op.
    pub fn request_edit(&mut self, id: ItemId) {
        self.close_context_menu();
        let Some(item) = self.store.get(id) else {
            return;
        };
        self.input = item.text.clone();
        self.input_cursor = self.input.len();
        self.draft = Some(Draft {
            text: item.text.clone(),
            text_cursor: item.text.len(),
            date: item.date,
            priority: item.priority,
            kind: item.kind,
            editing: Some(id),
            focus: DetailFocus::Date,
        });
        self.mode = Mode::Detail;
    }

    /// Apply one field change to the open draft. No-op without a draft.
    pub fn update_draft_field(&mut self, field: DraftField) {
        let Some(draft) = self.draft.as_mut() else {
            return;
        };
        match field {
            DraftField::Text(text) => {
                draft.text_cursor = text.len();
                draft.text = text;
            }
            DraftField::Date(date) => draft.date = date,
            DraftField::Priority(priority) => draft.priority = priority,
            DraftField::Kind(kind) => draft.kind = kind,
        }
    }

    /// Commit the draft: update in place when editing, append otherwise.
    /// A draft whose text emptied out commits nothing; either way the session
    /// ends and the quick-add input clears.
    pub fn submit_draft(&mut self) {
        let Some(draft) = self.draft.take() else {
            return;
        };
        let result = match draft.editing {
            Some(id) => self
                .store
                .update(id, &draft.text, draft.date, draft.priority, draft.kind)
                .map(|_| id),
            None => self
                .store
                .create(&draft.text, draft.date, draft.priority, draft.kind),
        };
        let _ = result;
        self.input.clear();
        self.input_cursor = 0;
        self.mode = Mode::Navigate;
    }

    /// Abandon the draft. The quick-add input keeps its text so the user can
    /// keep typing where they left off.
    pub fn cancel_draft(&mut self) {
        self.draft = None;
        self.mode = Mode::Compose;
    }

    // --- context menu ---

    /// Open the menu anchored at the click position. Opening while another
    /// menu is up replaces it. Unknown ids are ignored.
    pub fn open_context_menu(&mut self, id: ItemId, x: u16, y: u16) {
        if !self.store.contains(id) {
            return;
        }
        self.context_menu = Some(ContextMenu {
            target: id,
            x,
            y,
            cursor: 0,
        });
        self.mode = Mode::Menu;
    }

    /// Close the menu if open. Closing a closed menu is fine.
    pub fn close_context_menu(&mut self) {
        self.context_menu = None;
        if self.mode == Mode::Menu {
            self.mode = Mode::Navigate;
        }
    }

    /// Delete a single item from its context menu
    pub fn request_delete(&mut self, id: ItemId) {
        self.close_context_menu();
        let mut ids = HashSet::new();
        ids.insert(id);
        self.remove_items(&ids);
    }

    // --- selection / bulk delete ---

    /// Toggle an item's membership in the selection. Ids not on the board
    /// are ignored.
    pub fn toggle_selection(&mut self, id: ItemId) {
        if !self.store.contains(id) {
            return;
        }
        if !self.selection.remove(&id) {
            self.selection.insert(id);
        }
    }

    /// The bulk-delete bar shows exactly when the selection is non-empty
    pub fn bulk_bar_visible(&self) -> bool {
        !self.selection.is_empty()
    }

    /// Delete everything selected and clear the selection
    pub fn confirm_bulk_delete(&mut self) {
        let ids = self.selection.clone();
        let removed = self.remove_items(&ids);
        self.status_message = Some(format!(
            "deleted {} item{}",
            removed,
            if removed == 1 { "" } else { "s" }
        ));
    }

    /// Keep the items, drop the selection
    pub fn cancel_bulk_delete(&mut self) {
        self.selection.clear();
    }

    /// Single entry point for deletions. Keeps the dependent state straight:
    /// deleted ids leave the selection, a menu whose target died closes, and
    /// the cursor clamps back onto the board.
    fn remove_items(&mut self, ids: &HashSet<ItemId>) -> usize {
        let removed = self.store.delete_many(ids);
        self.selection.retain(|id| !ids.contains(id));
        if let Some(menu) = &self.context_menu {
            if !self.store.contains(menu.target) {
                self.close_context_menu();
            }
        }
        self.clamp_cursor();
        removed
    }

    pub fn clamp_cursor(&mut self) {
        self.cursor = self.cursor.min(self.store.len().saturating_sub(1));
    }
}

/// Run the TUI application
pub fn run(mut app: App) -> Result<(), Box<dyn std::error::Error>> {
    // Setup terminal. Mouse capture stays on for the whole session so clicks
    // anywhere on the board reach the app.
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Install panic hook to restore terminal on panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
        original_hook(panic_info);
    }));

    let result = run_event_loop(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        terminal.draw(|frame| render::render(frame, app))?;

        if event::poll(Duration::from_millis(250))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    input::handle_key(app, key);
                }
                Event::Mouse(mouse) => {
                    input::handle_mouse(app, mouse);
                }
                _ => {}
            }
        }

        if app.should_quit {
            break;
        }
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
