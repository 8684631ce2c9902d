//! ViewModel for the interactive browser
//!
//! The complete data contract for the TUI renderer. The renderer should be
//! able to draw the whole screen from this snapshot alone; it never reaches
//! back into domain state.

use serde::Serialize;

use super::directory::{UserDetailViewModel, UserRowViewModel};

/// What the main panel is showing
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum PhaseViewModel {
    /// Initial fetch (or reload) in flight
    Loading,
    /// Fetch failed; the message is the full story
    Error { message: String },
    /// Directory loaded and at least one row visible
    List,
    /// Directory loaded but the active filters match nothing
    Empty,
}

/// Complete screen state for the browser
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BrowseScreenViewModel {
    pub phase: PhaseViewModel,
    pub rows: Vec<UserRowViewModel>,
    /// Rows surviving the active filters
    pub shown: usize,
    /// Rows in the unfiltered directory
    pub total: usize,
    /// Normalized search term currently applied
    pub search: String,
    /// Active company filter label ("all" when disabled)
    pub company: String,
    /// Active sort label ("default" when unsorted)
    pub sort: String,
    /// Profile overlay, when open
    pub modal: Option<UserDetailViewModel>,
    /// Name of the user whose profile is being fetched
    pub pending_detail: Option<String>,
    /// One-line notice (detail fetch failures land here)
    pub notification: Option<String>,
}

impl Default for BrowseScreenViewModel {
    fn default() -> Self {
        Self {
            phase: PhaseViewModel::Loading,
            rows: Vec::new(),
            shown: 0,
            total: 0,
            search: String::new(),
            company: "all".to_string(),
            sort: "default".to_string(),
            modal: None,
            pending_detail: None,
            notification: None,
        }
    }
}
