use crate::navigation::loader::{LoadError, LoadState};
use crate::navigation::page::PageKind;
use crate::security::guard::{Decision, Redirect};

/// What the guarded outlet shows for one navigation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum View {
    Loading,
    Render(PageKind),
    Redirect(Redirect),
    LoadFailed(LoadError),
}

/// Folds the guard decision and the page load into a single view. Either
/// side still pending gives one `Loading`, and a load belonging to another
/// page counts as pending.
pub fn compose(decision: Decision, load: Option<&LoadState>, page: PageKind) -> View {
    match decision {
        Decision::Deny(redirect) => View::Redirect(redirect),
        Decision::Pending => View::Loading,
        Decision::Admit => match load {
            Some(LoadState::Ready(loaded)) if *loaded == page => View::Render(page),
            Some(LoadState::Failed(failed, error)) if *failed == page => View::LoadFailed(error.clone()),
            _ => View::Loading,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::navigation::page::SettingsFeature;

    const CHAT: PageKind = PageKind::WorkspaceChat;
    const AGENTS: PageKind = PageKind::Settings(SettingsFeature::Agents);

    fn fetch_error(page: PageKind) -> LoadError {
        LoadError::Fetch {
            page,
            reason: "chunk 404".to_owned(),
        }
    }

    #[test]
    fn denial_wins_over_load_state() {
        let ready = LoadState::Ready(AGENTS);
        assert_eq!(
            compose(Decision::Deny(Redirect::Forbidden), Some(&ready), AGENTS),
            View::Redirect(Redirect::Forbidden)
        );
    }

    #[test]
    fn any_pending_side_is_a_single_loading_view() {
        let ready = LoadState::Ready(CHAT);

        assert_eq!(compose(Decision::Pending, Some(&ready), CHAT), View::Loading);
        assert_eq!(compose(Decision::Pending, None, CHAT), View::Loading);
        assert_eq!(compose(Decision::Admit, None, CHAT), View::Loading);
        assert_eq!(compose(Decision::Admit, Some(&LoadState::Pending), CHAT), View::Loading);
    }

    #[test]
    fn admitted_and_loaded_renders() {
        let ready = LoadState::Ready(CHAT);
        assert_eq!(compose(Decision::Admit, Some(&ready), CHAT), View::Render(CHAT));
    }

    #[test]
    fn stale_page_is_never_rendered() {
        // user left the chat for agents while the chat was still loading
        let stale = LoadState::Ready(CHAT);
        assert_eq!(compose(Decision::Admit, Some(&stale), AGENTS), View::Loading);

        let stale_failure = LoadState::Failed(CHAT, fetch_error(CHAT));
        assert_eq!(compose(Decision::Admit, Some(&stale_failure), AGENTS), View::Loading);
    }

    #[test]
    fn failure_of_current_page_is_surfaced() {
        let failed = LoadState::Failed(AGENTS, fetch_error(AGENTS));
        assert_eq!(
            compose(Decision::Admit, Some(&failed), AGENTS),
            View::LoadFailed(fetch_error(AGENTS))
        );
    }
}
