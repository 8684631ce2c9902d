//! Explicit view state owned by a single coordinating component.
//!
//! Interactive flows keep exactly one `DirectoryState` per run. Input
//! signals and fetch completions mutate it through the transition methods;
//! everything displayed derives from `visible()` and the phase accessors.
//! The full user set is only ever replaced wholesale, and stale detail
//! completions are discarded by the phase guards, so no other
//! synchronization is needed.

use rolodex_types::{User, UserDetail, UserId};

use crate::filter::CompanyFilter;
use crate::sort::{SortSpec, cycle_sort};
use crate::term::SearchTerm;
use crate::view::{DirectoryQuery, apply, unique_companies};

/// Phase of the full-set fetch; drives the three mutually-exclusive regions
/// (loading, error, content).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadPhase {
    /// Fetch in flight
    Loading,
    /// Full set available; content (list or empty-state) is on display
    Ready,
    /// Fetch failed; error region with a retry action is on display
    Failed { message: String },
}

/// Phase of the detail overlay, independent of the load phase
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailPhase {
    Hidden,
    /// Detail load in flight for one user; the overlay stays closed
    Pending { user: UserId },
    /// Detail on display
    Open { detail: UserDetail },
}

/// The session's entire view state: full user set, query, phases, and the
/// one-shot notification line.
#[derive(Debug, Clone)]
pub struct DirectoryState {
    users: Vec<User>,
    query: DirectoryQuery,
    phase: LoadPhase,
    detail: DetailPhase,
    notification: Option<String>,
}

impl DirectoryState {
    /// A fresh state enters Loading immediately; construction coincides
    /// with the first fetch being issued.
    pub fn new() -> Self {
        Self {
            users: Vec::new(),
            query: DirectoryQuery::default(),
            phase: LoadPhase::Loading,
            detail: DetailPhase::Hidden,
            notification: None,
        }
    }

    // ------------------------------------------------------------------
    // Full-set load transitions
    // ------------------------------------------------------------------

    /// Retry from the error region or reload from content; either way the
    /// loading region takes over. The query survives so the user does not
    /// lose search input across a retry.
    pub fn reload(&mut self) {
        self.phase = LoadPhase::Loading;
        self.notification = None;
    }

    /// Replace the full set wholesale and show content.
    pub fn users_loaded(&mut self, users: Vec<User>) {
        self.users = users;
        self.phase = LoadPhase::Ready;
    }

    pub fn load_failed(&mut self, message: String) {
        self.phase = LoadPhase::Failed { message };
    }

    // ------------------------------------------------------------------
    // Query transitions
    // ------------------------------------------------------------------

    pub fn set_search(&mut self, raw: &str) {
        self.query.search = SearchTerm::new(raw);
    }

    pub fn set_company(&mut self, filter: CompanyFilter) {
        self.query.company = filter;
    }

    pub fn cycle_company(&mut self) {
        let companies = self.companies();
        self.query.company = self.query.company.cycle(&companies);
    }

    pub fn set_sort(&mut self, sort: Option<SortSpec>) {
        self.query.sort = sort;
    }

    pub fn cycle_sort(&mut self) {
        self.query.sort = cycle_sort(self.query.sort);
    }

    // ------------------------------------------------------------------
    // Detail overlay transitions
    // ------------------------------------------------------------------

    /// Begin a detail load for the selected user. Returns whether a fetch
    /// should be issued; selection is ignored until content is on display.
    /// Selecting again while a load is pending retargets it (last wins).
    pub fn select(&mut self, id: UserId) -> bool {
        if self.phase != LoadPhase::Ready {
            return false;
        }
        self.notification = None;
        self.detail = DetailPhase::Pending { user: id };
        true
    }

    /// Open the overlay if this completion is still the pending one.
    pub fn detail_loaded(&mut self, id: UserId, detail: UserDetail) {
        if self.detail == (DetailPhase::Pending { user: id }) {
            self.detail = DetailPhase::Open { detail };
        }
    }

    /// A failed detail load leaves the overlay closed and surfaces the
    /// message as a notification. Stale failures are discarded like stale
    /// successes.
    pub fn detail_failed(&mut self, id: UserId, message: String) {
        if self.detail == (DetailPhase::Pending { user: id }) {
            self.detail = DetailPhase::Hidden;
            self.notification = Some(message);
        }
    }

    /// Dismiss the overlay (close action or escape).
    pub fn close_detail(&mut self) {
        self.detail = DetailPhase::Hidden;
    }

    // ------------------------------------------------------------------
    // Derived views
    // ------------------------------------------------------------------

    /// The displayed list: filters then sort over the full set.
    pub fn visible(&self) -> Vec<User> {
        apply(&self.users, &self.query)
    }

    /// Filter options derived from the full set.
    pub fn companies(&self) -> Vec<String> {
        unique_companies(&self.users)
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn query(&self) -> &DirectoryQuery {
        &self.query
    }

    pub fn phase(&self) -> &LoadPhase {
        &self.phase
    }

    pub fn detail(&self) -> &DetailPhase {
        &self.detail
    }

    pub fn notification(&self) -> Option<&str> {
        self.notification.as_deref()
    }
}

impl Default for DirectoryState {
    fn default() -> Self {
        Self::new()
    }
}
