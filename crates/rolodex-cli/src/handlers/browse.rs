//! Browse Handler for the TUI
//!
//! This module implements the Handler (Controller) that:
//! - Owns the domain state (`DirectoryState`)
//! - Spawns fetches on the async runtime and collects their completions
//! - Calls the Presenter to build ViewModels
//! - Sends ViewModels to the Renderer via channel
//!
//! The renderer runs on its own thread; the coordinator loop stays on the
//! caller's thread and multiplexes renderer signals with fetch completions.

use std::sync::Arc;
use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender};
use std::thread;
use std::time::Duration;

use anyhow::Result;
use is_terminal::IsTerminal;
use tokio::runtime::{Handle, Runtime};
use tracing::warn;

use crate::presentation::presenters::build_screen_view_model;
use crate::presentation::renderers::tui::{RendererSignal, TuiEvent, TuiRenderer};
use rolodex_api::{DirectorySource, load_detail};
use rolodex_engine::DirectoryState;
use rolodex_types::{User, UserDetail, UserId};

/// Completions from spawned fetch tasks
enum LoadEvent {
    Users(rolodex_api::Result<Vec<User>>),
    Detail {
        user: UserId,
        result: rolodex_api::Result<UserDetail>,
    },
}

/// Main entry point for the interactive browser
pub fn handle(source: Arc<dyn DirectorySource>, runtime: &Runtime) -> Result<()> {
    if !std::io::stdout().is_terminal() {
        anyhow::bail!("'browse' needs a terminal; use 'users list' for scripted output");
    }

    // Create channels for bidirectional communication
    let (event_tx, event_rx) = mpsc::channel(); // Handler -> Renderer (snapshots)
    let (signal_tx, signal_rx) = mpsc::channel(); // Renderer -> Handler (signals)

    // Spawn TUI renderer thread
    let renderer_handle = thread::spawn(move || {
        let renderer = TuiRenderer::new().with_signal_sender(signal_tx);
        renderer.run(event_rx)
    });

    // Run the coordinator in this thread
    let result = run_coordinator(source, runtime.handle().clone(), event_tx, signal_rx);

    // Wait for the TUI to finish
    let renderer_result = match renderer_handle.join() {
        Ok(render_result) => render_result,
        Err(panic) => {
            eprintln!("TUI thread panicked: {:?}", panic);
            Ok(())
        }
    };

    result.and(renderer_result)
}

/// Handler state that manages domain data
struct BrowseCoordinator {
    state: DirectoryState,
    source: Arc<dyn DirectorySource>,
    runtime: Handle,
    /// Sender to the TUI renderer
    tx: Sender<TuiEvent>,
    /// Sender handed to spawned fetch tasks
    load_tx: Sender<LoadEvent>,
}

impl BrowseCoordinator {
    fn new(
        source: Arc<dyn DirectorySource>,
        runtime: Handle,
        tx: Sender<TuiEvent>,
        load_tx: Sender<LoadEvent>,
    ) -> Self {
        Self {
            state: DirectoryState::new(),
            source,
            runtime,
            tx,
            load_tx,
        }
    }

    fn start_users_load(&self) {
        let source = Arc::clone(&self.source);
        let load_tx = self.load_tx.clone();
        self.runtime.spawn(async move {
            let result = source.fetch_users().await;
            let _ = load_tx.send(LoadEvent::Users(result));
        });
    }

    fn start_detail_load(&self, id: UserId) {
        let source = Arc::clone(&self.source);
        let load_tx = self.load_tx.clone();
        self.runtime.spawn(async move {
            let result = load_detail(source.as_ref(), id).await;
            let _ = load_tx.send(LoadEvent::Detail { user: id, result });
        });
    }

    /// Returns false when the session should end
    fn apply_signal(&mut self, signal: RendererSignal) -> bool {
        match signal {
            RendererSignal::Quit => return false,
            RendererSignal::SearchChanged(raw) => self.state.set_search(&raw),
            RendererSignal::CycleCompany => self.state.cycle_company(),
            RendererSignal::CycleSort => self.state.cycle_sort(),
            RendererSignal::Reload => {
                self.state.reload();
                self.start_users_load();
            }
            RendererSignal::OpenDetail(id) => {
                if self.state.select(id) {
                    self.start_detail_load(id);
                }
            }
            RendererSignal::CloseDetail => self.state.close_detail(),
        }

        self.send_update();
        true
    }

    fn apply_load(&mut self, event: LoadEvent) {
        match event {
            LoadEvent::Users(Ok(users)) => self.state.users_loaded(users),
            LoadEvent::Users(Err(err)) => {
                warn!(error = %err, "directory fetch failed");
                self.state.load_failed(err.to_string());
            }
            LoadEvent::Detail {
                user,
                result: Ok(detail),
            } => self.state.detail_loaded(user, detail),
            LoadEvent::Detail {
                user,
                result: Err(err),
            } => {
                warn!(error = %err, "profile fetch failed");
                self.state.detail_failed(user, err.to_string());
            }
        }

        self.send_update();
    }

    /// Send updated ViewModel to renderer
    fn send_update(&self) {
        let screen = build_screen_view_model(&self.state);
        // Ignore errors if the renderer has quit
        let _ = self.tx.send(TuiEvent::Update(Box::new(screen)));
    }
}

/// Coordinator loop: multiplex renderer signals and fetch completions
fn run_coordinator(
    source: Arc<dyn DirectorySource>,
    runtime: Handle,
    tx: Sender<TuiEvent>,
    signal_rx: Receiver<RendererSignal>,
) -> Result<()> {
    let (load_tx, load_rx) = mpsc::channel();
    let mut coordinator = BrowseCoordinator::new(source, runtime, tx, load_tx);

    coordinator.start_users_load();
    coordinator.send_update();

    let poll_timeout = Duration::from_millis(100);

    loop {
        // Fetch completions first so snapshots stay fresh
        while let Ok(event) = load_rx.try_recv() {
            coordinator.apply_load(event);
        }

        match signal_rx.recv_timeout(poll_timeout) {
            Ok(signal) => {
                if !coordinator.apply_signal(signal) {
                    break;
                }
            }
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::view_models::{BrowseScreenViewModel, PhaseViewModel};
    use rolodex_testing::FixtureDirectory;

    fn coordinator_with(
        source: FixtureDirectory,
    ) -> (
        BrowseCoordinator,
        Receiver<TuiEvent>,
        Receiver<LoadEvent>,
        Runtime,
    ) {
        let runtime = Runtime::new().expect("runtime");
        let (event_tx, event_rx) = mpsc::channel();
        let (load_tx, load_rx) = mpsc::channel();
        let coordinator = BrowseCoordinator::new(
            Arc::new(source),
            runtime.handle().clone(),
            event_tx,
            load_tx,
        );
        (coordinator, event_rx, load_rx, runtime)
    }

    fn latest_screen(rx: &Receiver<TuiEvent>) -> Box<BrowseScreenViewModel> {
        let mut last = None;
        while let Ok(TuiEvent::Update(screen)) = rx.try_recv() {
            last = Some(screen);
        }
        last.expect("expected at least one snapshot")
    }

    fn recv_load(rx: &Receiver<LoadEvent>) -> LoadEvent {
        rx.recv_timeout(Duration::from_secs(5))
            .expect("load completion")
    }

    fn user_id(raw: u64) -> UserId {
        UserId::new(raw).expect("nonzero id")
    }

    #[test]
    fn test_users_load_flows_into_ready_snapshot() {
        let (mut coordinator, event_rx, load_rx, _runtime) =
            coordinator_with(FixtureDirectory::new());

        coordinator.start_users_load();
        coordinator.apply_load(recv_load(&load_rx));

        let screen = latest_screen(&event_rx);
        assert_eq!(screen.phase, PhaseViewModel::List);
        assert_eq!(screen.total, 5);
    }

    #[test]
    fn test_failed_load_snapshots_error_then_reload_recovers() {
        let (mut coordinator, event_rx, load_rx, _runtime) =
            coordinator_with(FixtureDirectory::new().failing_users());

        coordinator.start_users_load();
        coordinator.apply_load(recv_load(&load_rx));

        let screen = latest_screen(&event_rx);
        assert!(matches!(screen.phase, PhaseViewModel::Error { .. }));

        // Retry puts the screen back into Loading while the fetch runs
        assert!(coordinator.apply_signal(RendererSignal::Reload));
        let screen = latest_screen(&event_rx);
        assert_eq!(screen.phase, PhaseViewModel::Loading);
    }

    #[test]
    fn test_search_signal_reshapes_the_visible_rows() {
        let (mut coordinator, event_rx, load_rx, _runtime) =
            coordinator_with(FixtureDirectory::new());

        coordinator.start_users_load();
        coordinator.apply_load(recv_load(&load_rx));

        coordinator.apply_signal(RendererSignal::SearchChanged("erv".to_string()));

        let screen = latest_screen(&event_rx);
        assert_eq!(screen.shown, 1);
        assert_eq!(screen.rows[0].name, "Ervin Howell");
        assert_eq!(screen.total, 5);
    }

    #[test]
    fn test_open_detail_success_opens_the_modal() {
        let (mut coordinator, event_rx, load_rx, _runtime) =
            coordinator_with(FixtureDirectory::new());

        coordinator.start_users_load();
        coordinator.apply_load(recv_load(&load_rx));

        coordinator.apply_signal(RendererSignal::OpenDetail(user_id(1)));
        let screen = latest_screen(&event_rx);
        assert_eq!(screen.pending_detail.as_deref(), Some("Leanne Graham"));

        coordinator.apply_load(recv_load(&load_rx));
        let screen = latest_screen(&event_rx);
        let modal = screen.modal.expect("modal should be open");
        assert_eq!(modal.name, "Leanne Graham");

        coordinator.apply_signal(RendererSignal::CloseDetail);
        let screen = latest_screen(&event_rx);
        assert!(screen.modal.is_none());
    }

    #[test]
    fn test_detail_failure_keeps_the_list_up_with_a_notification() {
        let (mut coordinator, event_rx, load_rx, _runtime) =
            coordinator_with(FixtureDirectory::new().failing_posts());

        coordinator.start_users_load();
        coordinator.apply_load(recv_load(&load_rx));

        coordinator.apply_signal(RendererSignal::OpenDetail(user_id(1)));
        coordinator.apply_load(recv_load(&load_rx));

        let screen = latest_screen(&event_rx);
        assert_eq!(screen.phase, PhaseViewModel::List);
        assert!(screen.modal.is_none());
        assert!(screen.pending_detail.is_none());
        assert!(screen.notification.is_some());
    }

    #[test]
    fn test_quit_signal_ends_the_session() {
        let (mut coordinator, _event_rx, _load_rx, _runtime) =
            coordinator_with(FixtureDirectory::new());

        assert!(!coordinator.apply_signal(RendererSignal::Quit));
    }
}
