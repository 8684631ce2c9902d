//! Presenter for the interactive browser
//!
//! Builds the complete screen snapshot from the handler's `DirectoryState`.
//! Pure function; the handler calls it after every state change and ships the
//! result to the renderer.

use crate::presentation::presenters::directory::{present_user_detail, present_user_row};
use crate::presentation::view_models::{BrowseScreenViewModel, PhaseViewModel};
use rolodex_engine::{DetailPhase, DirectoryState, LoadPhase};
use rolodex_types::UserId;

pub fn build_screen_view_model(state: &DirectoryState) -> BrowseScreenViewModel {
    let visible = state.visible();
    let rows: Vec<_> = visible.iter().map(present_user_row).collect();

    let phase = match state.phase() {
        LoadPhase::Loading => PhaseViewModel::Loading,
        LoadPhase::Failed { message } => PhaseViewModel::Error {
            message: message.clone(),
        },
        LoadPhase::Ready if rows.is_empty() => PhaseViewModel::Empty,
        LoadPhase::Ready => PhaseViewModel::List,
    };

    let (modal, pending_detail) = match state.detail() {
        DetailPhase::Hidden => (None, None),
        DetailPhase::Pending { user } => (None, Some(pending_label(state, *user))),
        DetailPhase::Open { detail } => (Some(present_user_detail(detail)), None),
    };

    BrowseScreenViewModel {
        phase,
        shown: rows.len(),
        rows,
        total: state.users().len(),
        search: state.query().search.as_str().to_string(),
        company: state.query().company.to_string(),
        sort: state
            .query()
            .sort
            .map(|spec| spec.to_string())
            .unwrap_or_else(|| "default".to_string()),
        modal,
        pending_detail,
        notification: state.notification().map(str::to_string),
    }
}

fn pending_label(state: &DirectoryState, id: UserId) -> String {
    state
        .users()
        .iter()
        .find(|user| user.id == id)
        .map(|user| user.name.clone())
        .unwrap_or_else(|| format!("user {}", id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rolodex_testing::fixtures::{sample_posts, sample_users};
    use rolodex_types::UserDetail;

    fn loaded_state() -> DirectoryState {
        let mut state = DirectoryState::new();
        state.users_loaded(sample_users());
        state
    }

    #[test]
    fn test_initial_state_presents_loading() {
        let state = DirectoryState::new();
        let vm = build_screen_view_model(&state);

        assert_eq!(vm.phase, PhaseViewModel::Loading);
        assert!(vm.rows.is_empty());
    }

    #[test]
    fn test_loaded_state_presents_list() {
        let vm = build_screen_view_model(&loaded_state());

        assert_eq!(vm.phase, PhaseViewModel::List);
        assert_eq!(vm.shown, 5);
        assert_eq!(vm.total, 5);
        assert_eq!(vm.sort, "default");
        assert_eq!(vm.company, "all");
    }

    #[test]
    fn test_unmatched_search_presents_empty_not_error() {
        let mut state = loaded_state();
        state.set_search("zzzz");

        let vm = build_screen_view_model(&state);

        assert_eq!(vm.phase, PhaseViewModel::Empty);
        assert_eq!(vm.shown, 0);
        assert_eq!(vm.total, 5);
    }

    #[test]
    fn test_failed_load_presents_error_message() {
        let mut state = DirectoryState::new();
        state.load_failed("connection refused".to_string());

        let vm = build_screen_view_model(&state);

        assert_eq!(
            vm.phase,
            PhaseViewModel::Error {
                message: "connection refused".to_string()
            }
        );
    }

    #[test]
    fn test_pending_detail_is_labelled_with_name() {
        let mut state = loaded_state();
        let id = state.users()[0].id;
        assert!(state.select(id));

        let vm = build_screen_view_model(&state);

        assert_eq!(vm.pending_detail.as_deref(), Some("Leanne Graham"));
        assert!(vm.modal.is_none());
    }

    #[test]
    fn test_open_detail_presents_modal() {
        let mut state = loaded_state();
        let user = state.users()[0].clone();
        assert!(state.select(user.id));
        state.detail_loaded(user.id, UserDetail::new(user.clone(), sample_posts(user.id)));

        let vm = build_screen_view_model(&state);

        let modal = vm.modal.expect("modal should be open");
        assert_eq!(modal.name, "Leanne Graham");
        assert_eq!(modal.posts.len(), 3);
        assert!(vm.pending_detail.is_none());
    }

    #[test]
    fn test_failed_detail_presents_notification_without_modal() {
        let mut state = loaded_state();
        let id = state.users()[0].id;
        assert!(state.select(id));
        state.detail_failed(id, "posts for user 1 unavailable".to_string());

        let vm = build_screen_view_model(&state);

        assert!(vm.modal.is_none());
        assert!(vm.pending_detail.is_none());
        assert_eq!(
            vm.notification.as_deref(),
            Some("posts for user 1 unavailable")
        );
    }
}
