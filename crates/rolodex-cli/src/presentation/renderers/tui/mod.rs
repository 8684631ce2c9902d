//! TUI renderer for the browse command
//!
//! Receives `BrowseScreenViewModel` snapshots over a channel and draws them
//! with Ratatui. Owns the terminal and every piece of UI-only state; domain
//! changes are requested from the handler via `RendererSignal` and come back
//! as the next snapshot.

mod app;
mod components;
mod tui_event;
mod ui;

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::sync::mpsc::{Receiver, Sender};
use std::time::Duration;

use app::AppState;
pub use tui_event::{RendererSignal, TuiEvent};

pub struct TuiRenderer {
    signal_tx: Option<Sender<RendererSignal>>,
}

impl TuiRenderer {
    pub fn new() -> Self {
        Self { signal_tx: None }
    }

    /// Attach the channel that carries domain signals back to the handler
    pub fn with_signal_sender(mut self, tx: Sender<RendererSignal>) -> Self {
        self.signal_tx = Some(tx);
        self
    }

    /// Main event loop for TUI rendering
    ///
    /// This function:
    /// 1. Sets up the terminal in raw mode
    /// 2. Receives ViewModel updates via channel
    /// 3. Handles keyboard input
    /// 4. Cleans up the terminal on exit
    pub fn run(self, rx: Receiver<TuiEvent>) -> Result<()> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        ctrlc::set_handler(move || {
            let _ = disable_raw_mode();
            let _ = execute!(io::stdout(), LeaveAlternateScreen);
            std::process::exit(0);
        })?;

        let result = self.event_loop(&mut terminal, rx);

        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        result
    }

    fn event_loop(
        &self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
        rx: Receiver<TuiEvent>,
    ) -> Result<()> {
        let mut app_state = AppState::new();
        let mut should_quit = false;
        let tick_rate = Duration::from_millis(250);

        while !should_quit {
            terminal.draw(|f| ui::draw(f, &mut app_state))?;

            // Handle input with timeout (allows periodic redraws)
            if event::poll(tick_rate)? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        for signal in app_state.handle_key(key) {
                            if signal == RendererSignal::Quit {
                                should_quit = true;
                            }
                            self.send_signal(signal);
                        }
                    }
                }
            }

            // Drain snapshots from the handler (non-blocking)
            while let Ok(tui_event) = rx.try_recv() {
                match tui_event {
                    TuiEvent::Update(screen) => app_state.apply(*screen),
                }
            }
        }

        Ok(())
    }

    fn send_signal(&self, signal: RendererSignal) {
        if let Some(tx) = &self.signal_tx {
            // A hung-up handler means we are shutting down anyway
            let _ = tx.send(signal);
        }
    }
}

impl Default for TuiRenderer {
    fn default() -> Self {
        Self::new()
    }
}
