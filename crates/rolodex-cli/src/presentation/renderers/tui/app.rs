//! Renderer-side state for the browse screen
//!
//! Holds the latest snapshot from the handler plus everything that is purely
//! presentational: input mode, the raw search text, cursor, and modal scroll.
//! Key presses either mutate this state locally or translate into
//! `RendererSignal`s for the handler; never both silently.

use crossterm::event::{KeyCode, KeyEvent};
use rolodex_types::UserId;

use super::components::{DetailComponent, UserListComponent};
use super::tui_event::RendererSignal;
use crate::presentation::view_models::BrowseScreenViewModel;

/// Which element owns the keyboard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum InputMode {
    Browse,
    Search,
}

pub(crate) struct AppState {
    pub screen: BrowseScreenViewModel,
    pub input_mode: InputMode,
    /// Raw search text as typed; the handler normalizes it for matching
    pub search_input: String,
    pub user_list: UserListComponent,
    pub detail: DetailComponent,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            screen: BrowseScreenViewModel::default(),
            input_mode: InputMode::Browse,
            search_input: String::new(),
            user_list: UserListComponent::new(),
            detail: DetailComponent::new(),
        }
    }

    /// Absorb a fresh snapshot from the handler
    pub fn apply(&mut self, screen: BrowseScreenViewModel) {
        if screen.modal.is_none() {
            self.detail.reset();
        }
        self.screen = screen;
    }

    /// Translate a key press into domain signals.
    ///
    /// UI-only motion (cursor, modal scroll) is absorbed here and produces
    /// an empty vec.
    pub fn handle_key(&mut self, key: KeyEvent) -> Vec<RendererSignal> {
        match self.input_mode {
            InputMode::Search => self.handle_search_key(key),
            InputMode::Browse => self.handle_browse_key(key),
        }
    }

    fn handle_search_key(&mut self, key: KeyEvent) -> Vec<RendererSignal> {
        match key.code {
            // Both leave editing; the term stays applied either way
            KeyCode::Enter | KeyCode::Esc => {
                self.input_mode = InputMode::Browse;
                vec![]
            }
            KeyCode::Backspace => {
                self.search_input.pop();
                vec![RendererSignal::SearchChanged(self.search_input.clone())]
            }
            KeyCode::Char(c) => {
                self.search_input.push(c);
                vec![RendererSignal::SearchChanged(self.search_input.clone())]
            }
            _ => vec![],
        }
    }

    fn handle_browse_key(&mut self, key: KeyEvent) -> Vec<RendererSignal> {
        // The modal captures everything except quit while it is open
        if self.screen.modal.is_some() {
            return match key.code {
                KeyCode::Esc | KeyCode::Char('x') => vec![RendererSignal::CloseDetail],
                KeyCode::Char('q') => vec![RendererSignal::Quit],
                _ => {
                    self.detail.handle_input(key);
                    vec![]
                }
            };
        }

        match key.code {
            KeyCode::Char('q') => vec![RendererSignal::Quit],
            KeyCode::Char('/') => {
                self.input_mode = InputMode::Search;
                vec![]
            }
            KeyCode::Char('c') => vec![RendererSignal::CycleCompany],
            KeyCode::Char('s') => vec![RendererSignal::CycleSort],
            KeyCode::Char('r') => vec![RendererSignal::Reload],
            KeyCode::Enter => match self.selected_user() {
                Some(id) => vec![RendererSignal::OpenDetail(id)],
                None => vec![],
            },
            _ => {
                self.user_list.handle_input(key, self.screen.rows.len());
                vec![]
            }
        }
    }

    fn selected_user(&self) -> Option<UserId> {
        self.user_list
            .selected()
            .and_then(|index| self.screen.rows.get(index))
            .map(|row| row.id)
    }
}
