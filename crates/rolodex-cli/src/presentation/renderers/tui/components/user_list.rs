//! User List Component
//!
//! Encapsulates the table cursor and its key handling. Selection lives here,
//! never in the ViewModel, and is re-clamped against the rows on every draw.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState},
};

use crate::presentation::view_models::BrowseScreenViewModel;

pub(crate) struct UserListComponent {
    /// List state (scroll position, selection) - PRIVATE
    state: ListState,
}

impl UserListComponent {
    pub fn new() -> Self {
        Self {
            state: ListState::default(),
        }
    }

    /// Handle keyboard input
    ///
    /// Returns true if the input was handled.
    pub fn handle_input(&mut self, key: KeyEvent, data_len: usize) -> bool {
        match key.code {
            KeyCode::Char('j') | KeyCode::Down => {
                self.next(data_len);
                true
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.previous();
                true
            }
            KeyCode::PageDown => {
                self.page_down(data_len);
                true
            }
            KeyCode::PageUp => {
                self.page_up();
                true
            }
            KeyCode::Home => {
                self.scroll_to_top();
                true
            }
            KeyCode::End => {
                self.scroll_to_bottom(data_len);
                true
            }
            _ => false,
        }
    }

    pub fn selected(&self) -> Option<usize> {
        self.state.selected()
    }

    /// Render the user table with index safety
    pub fn render(&mut self, f: &mut Frame, area: Rect, screen: &BrowseScreenViewModel) {
        let rows = &screen.rows;

        // Index Safety: Clamp selection to data bounds
        if rows.is_empty() {
            self.state.select(None);
        } else {
            match self.state.selected() {
                Some(selected) if selected >= rows.len() => {
                    self.state.select(Some(rows.len() - 1));
                }
                None => self.state.select(Some(0)),
                _ => {}
            }
        }

        let items: Vec<ListItem> = rows
            .iter()
            .map(|row| {
                ListItem::new(Line::from(vec![
                    Span::styled(
                        format!("{:<22}", row.name),
                        Style::default().add_modifier(Modifier::BOLD),
                    ),
                    Span::raw(format!("{:<28}", row.email)),
                    Span::styled(
                        format!("{:<22}", row.company),
                        Style::default().fg(Color::Cyan),
                    ),
                    Span::raw(row.city.clone()),
                ]))
            })
            .collect();

        let title = format!(" Users ({} of {}) ", screen.shown, screen.total);
        let list = List::new(items)
            .block(Block::default().title(title).borders(Borders::ALL))
            .highlight_style(
                Style::default()
                    .bg(Color::DarkGray)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("> ");

        f.render_stateful_widget(list, area, &mut self.state);
    }

    // Private state manipulation methods

    fn next(&mut self, data_len: usize) {
        if data_len == 0 {
            return;
        }

        let next = match self.state.selected() {
            Some(i) => {
                if i >= data_len - 1 {
                    i
                } else {
                    i + 1
                }
            }
            None => 0,
        };
        self.state.select(Some(next));
    }

    fn previous(&mut self) {
        let prev = match self.state.selected() {
            Some(i) if i > 0 => i - 1,
            Some(i) => i,
            None => 0,
        };
        self.state.select(Some(prev));
    }

    fn page_down(&mut self, data_len: usize) {
        if data_len == 0 {
            return;
        }

        let next = match self.state.selected() {
            Some(i) => (i + 10).min(data_len - 1),
            None => 0,
        };
        self.state.select(Some(next));
    }

    fn page_up(&mut self) {
        let prev = match self.state.selected() {
            Some(i) => i.saturating_sub(10),
            None => 0,
        };
        self.state.select(Some(prev));
    }

    fn scroll_to_top(&mut self) {
        self.state.select(Some(0));
    }

    fn scroll_to_bottom(&mut self, data_len: usize) {
        if data_len > 0 {
            self.state.select(Some(data_len - 1));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_cursor_walks_and_stops_at_ends() {
        let mut list = UserListComponent::new();

        list.handle_input(key(KeyCode::Down), 3);
        assert_eq!(list.selected(), Some(0));

        list.handle_input(key(KeyCode::Down), 3);
        list.handle_input(key(KeyCode::Down), 3);
        assert_eq!(list.selected(), Some(2));

        // Stays put at the bottom
        list.handle_input(key(KeyCode::Down), 3);
        assert_eq!(list.selected(), Some(2));

        list.handle_input(key(KeyCode::Up), 3);
        assert_eq!(list.selected(), Some(1));
    }

    #[test]
    fn test_page_and_jump_keys() {
        let mut list = UserListComponent::new();

        list.handle_input(key(KeyCode::PageDown), 25);
        assert_eq!(list.selected(), Some(0));
        list.handle_input(key(KeyCode::PageDown), 25);
        assert_eq!(list.selected(), Some(10));

        list.handle_input(key(KeyCode::End), 25);
        assert_eq!(list.selected(), Some(24));

        list.handle_input(key(KeyCode::Home), 25);
        assert_eq!(list.selected(), Some(0));
    }

    #[test]
    fn test_empty_list_ignores_motion() {
        let mut list = UserListComponent::new();

        list.handle_input(key(KeyCode::Down), 0);
        assert_eq!(list.selected(), None);
    }

    #[test]
    fn test_unhandled_key_reports_false() {
        let mut list = UserListComponent::new();
        assert!(!list.handle_input(key(KeyCode::Char('z')), 3));
    }
}
