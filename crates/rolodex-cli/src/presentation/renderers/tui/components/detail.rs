//! Profile Overlay Component
//!
//! Renders the selected user's profile as a centered modal over the table
//! and owns its scroll offset. The overlay is display-only; opening and
//! closing are handler decisions relayed as signals.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

use crate::presentation::view_models::UserDetailViewModel;

pub(crate) struct DetailComponent {
    scroll: u16,
}

impl DetailComponent {
    pub fn new() -> Self {
        Self { scroll: 0 }
    }

    /// Forget the scroll position once the overlay closes
    pub fn reset(&mut self) {
        self.scroll = 0;
    }

    /// Handle keyboard input
    ///
    /// Returns true if the input was handled.
    pub fn handle_input(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Char('j') | KeyCode::Down => {
                self.scroll = self.scroll.saturating_add(1);
                true
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.scroll = self.scroll.saturating_sub(1);
                true
            }
            KeyCode::PageDown => {
                self.scroll = self.scroll.saturating_add(10);
                true
            }
            KeyCode::PageUp => {
                self.scroll = self.scroll.saturating_sub(10);
                true
            }
            KeyCode::Home => {
                self.scroll = 0;
                true
            }
            _ => false,
        }
    }

    /// Render the overlay centered over `area`
    pub fn render(&mut self, f: &mut Frame, area: Rect, modal: &UserDetailViewModel) {
        let overlay = centered_rect(70, 80, area);

        let label = Style::default().add_modifier(Modifier::DIM);
        let heading = Style::default().add_modifier(Modifier::BOLD);

        let mut lines: Vec<Line> = vec![
            Line::from(vec![
                Span::styled("username ", label),
                Span::raw(modal.username.clone()),
            ]),
            Line::from(vec![
                Span::styled("email    ", label),
                Span::raw(modal.email.clone()),
            ]),
            Line::from(vec![
                Span::styled("phone    ", label),
                Span::raw(modal.phone.clone()),
            ]),
            Line::from(vec![
                Span::styled("website  ", label),
                Span::raw(modal.website.clone()),
            ]),
            Line::default(),
            Line::from(Span::styled("Address", heading)),
            Line::from(format!("  {}", modal.street_line)),
            Line::from(format!("  {}", modal.city_line)),
            Line::default(),
            Line::from(Span::styled("Company", heading)),
            Line::from(format!("  {}", modal.company)),
            Line::from(Span::styled(
                format!("  \"{}\"", modal.catch_phrase),
                Style::default().fg(Color::Cyan),
            )),
            Line::default(),
            Line::from(Span::styled(
                format!("Posts ({})", modal.posts.len()),
                heading,
            )),
        ];

        if modal.posts.is_empty() {
            lines.push(Line::from("  (none)"));
        }
        for (index, post) in modal.posts.iter().enumerate() {
            lines.push(Line::from(Span::styled(
                format!("  {}. {}", index + 1, post.title),
                Style::default().add_modifier(Modifier::BOLD),
            )));
            for body_line in post.body.lines() {
                lines.push(Line::from(Span::styled(
                    format!("     {}", body_line),
                    label,
                )));
            }
        }

        // Clamp scroll so the last line stays reachable
        let max_scroll = lines.len().saturating_sub(1) as u16;
        if self.scroll > max_scroll {
            self.scroll = max_scroll;
        }

        let block = Block::default()
            .title(format!(" {} ", modal.name))
            .title_style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
            .borders(Borders::ALL);

        let paragraph = Paragraph::new(Text::from(lines))
            .block(block)
            .wrap(Wrap { trim: false })
            .scroll((self.scroll, 0));

        f.render_widget(Clear, overlay);
        f.render_widget(paragraph, overlay);
    }
}

/// Center a percent-sized rect inside `r`
fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let vertical = Layout::vertical([
        Constraint::Percentage((100 - percent_y) / 2),
        Constraint::Percentage(percent_y),
        Constraint::Percentage((100 - percent_y) / 2),
    ])
    .split(r);

    let horizontal = Layout::horizontal([
        Constraint::Percentage((100 - percent_x) / 2),
        Constraint::Percentage(percent_x),
        Constraint::Percentage((100 - percent_x) / 2),
    ])
    .split(vertical[1]);

    horizontal[1]
}
