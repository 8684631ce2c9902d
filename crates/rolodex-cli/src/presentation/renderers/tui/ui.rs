//! Screen layout for the browse TUI
//!
//! Filter bar on top, main panel in the middle, status and key hints at the
//! bottom. The profile modal draws last so it sits above everything.

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::app::{AppState, InputMode};
use crate::presentation::view_models::PhaseViewModel;

pub(crate) fn draw(f: &mut Frame, state: &mut AppState) {
    let chunks = Layout::vertical([
        Constraint::Length(3), // filter bar
        Constraint::Min(5),    // main panel
        Constraint::Length(1), // status line
        Constraint::Length(1), // key hints
    ])
    .split(f.area());

    draw_filter_bar(f, chunks[0], state);
    draw_main_panel(f, chunks[1], state);
    draw_status_line(f, chunks[2], state);
    draw_key_hints(f, chunks[3], state);

    if let Some(modal) = &state.screen.modal {
        state.detail.render(f, f.area(), modal);
    }
}

fn draw_filter_bar(f: &mut Frame, area: Rect, state: &AppState) {
    let chunks = Layout::horizontal([
        Constraint::Percentage(50),
        Constraint::Percentage(25),
        Constraint::Percentage(25),
    ])
    .split(area);

    let editing = state.input_mode == InputMode::Search;
    let search_border = if editing {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    };

    let search = Paragraph::new(state.search_input.as_str()).block(
        Block::default()
            .title(" Search (/) ")
            .borders(Borders::ALL)
            .border_style(search_border),
    );
    f.render_widget(search, chunks[0]);

    if editing {
        // Park the terminal cursor at the end of the input
        let x = chunks[0].x + 1 + state.search_input.chars().count() as u16;
        f.set_cursor_position((x.min(chunks[0].right().saturating_sub(2)), chunks[0].y + 1));
    }

    let company = Paragraph::new(state.screen.company.as_str())
        .block(Block::default().title(" Company (c) ").borders(Borders::ALL));
    f.render_widget(company, chunks[1]);

    let sort = Paragraph::new(state.screen.sort.as_str())
        .block(Block::default().title(" Sort (s) ").borders(Borders::ALL));
    f.render_widget(sort, chunks[2]);
}

fn draw_main_panel(f: &mut Frame, area: Rect, state: &mut AppState) {
    match &state.screen.phase {
        PhaseViewModel::Loading => {
            let loading = Paragraph::new("Loading directory...")
                .block(Block::default().title(" Users ").borders(Borders::ALL));
            f.render_widget(loading, area);
        }
        PhaseViewModel::Error { message } => {
            let text = vec![
                Line::from(Span::styled(
                    message.clone(),
                    Style::default().fg(Color::Red),
                )),
                Line::default(),
                Line::from("Press r to retry."),
            ];
            let error =
                Paragraph::new(text).block(Block::default().title(" Error ").borders(Borders::ALL));
            f.render_widget(error, area);
        }
        PhaseViewModel::Empty => {
            let title = format!(" Users (0 of {}) ", state.screen.total);
            let empty = Paragraph::new("No users match the active filters.")
                .block(Block::default().title(title).borders(Borders::ALL));
            f.render_widget(empty, area);
        }
        PhaseViewModel::List => {
            state.user_list.render(f, area, &state.screen);
        }
    }
}

fn draw_status_line(f: &mut Frame, area: Rect, state: &AppState) {
    let line = if let Some(name) = &state.screen.pending_detail {
        Line::from(Span::styled(
            format!("Loading profile for {}...", name),
            Style::default().fg(Color::Yellow),
        ))
    } else if let Some(notice) = &state.screen.notification {
        Line::from(Span::styled(
            notice.clone(),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ))
    } else {
        Line::from(Span::styled(
            format!("{} of {} users", state.screen.shown, state.screen.total),
            Style::default().add_modifier(Modifier::DIM),
        ))
    };

    f.render_widget(Paragraph::new(line), area);
}

fn draw_key_hints(f: &mut Frame, area: Rect, state: &AppState) {
    let hints = if state.screen.modal.is_some() {
        "esc/x close  j/k scroll  q quit"
    } else if state.input_mode == InputMode::Search {
        "type to search  enter/esc done"
    } else {
        "/ search  c company  s sort  enter open  r reload  q quit"
    };

    f.render_widget(
        Paragraph::new(Span::styled(
            hints,
            Style::default().add_modifier(Modifier::DIM),
        )),
        area,
    );
}
