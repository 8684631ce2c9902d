//! Channel protocol between the browse handler and the TUI renderer

use crate::presentation::view_models::BrowseScreenViewModel;
use rolodex_types::UserId;

/// Events flowing handler -> renderer
pub enum TuiEvent {
    /// Replace the screen with a fresh snapshot
    Update(Box<BrowseScreenViewModel>),
}

/// Signals flowing renderer -> handler
///
/// Domain actions only. Pure UI motion (cursor, scroll) never leaves the
/// renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RendererSignal {
    Quit,
    /// The search box changed; carries the full raw text, not a delta
    SearchChanged(String),
    CycleCompany,
    CycleSort,
    Reload,
    OpenDetail(UserId),
    CloseDetail,
}
