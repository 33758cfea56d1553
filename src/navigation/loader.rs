use std::collections::HashSet;
use std::future::Future;
use std::sync::Mutex;
use std::sync::atomic::{AtomicU64, Ordering};

use derive_more::Display;
use dioxus::logger::tracing;
use futures::future::{self, BoxFuture};

use crate::navigation::page::PageKind;
use crate::security::guard::Decision;

#[derive(Debug, Display, Clone, PartialEq, Eq)]
pub enum LoadError {
    #[display("failed to fetch page {page}: {reason}")]
    Fetch { page: PageKind, reason: String },
}

impl std::error::Error for LoadError {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState {
    Pending,
    Ready(PageKind),
    Failed(PageKind, LoadError),
}

/// Where page implementations come from.
pub trait PageSource {
    fn fetch(&self, page: PageKind) -> BoxFuture<'static, Result<(), LoadError>>;
}

/// Every page is compiled into the bundle, so fetching always succeeds.
///
/// Dioxus 0.6 does not split the wasm bundle, so nothing is fetched here yet.
/// A `PageSource` that pulls split chunks is where that would plug in; the
/// pending, failed and retry paths already run through `LazyPages`.
#[derive(Debug, Default, Clone, Copy)]
pub struct BundledPages;

impl PageSource for BundledPages {
    fn fetch(&self, _page: PageKind) -> BoxFuture<'static, Result<(), LoadError>> {
        Box::pin(future::ready(Ok(())))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket(u64);

/// Fetches pages on first navigation and remembers the ones that arrived.
/// Failures are not remembered, so loading again retries.
pub struct LazyPages<S> {
    source: S,
    loaded: Mutex<HashSet<PageKind>>,
    generation: AtomicU64,
}

impl<S: PageSource> LazyPages<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            loaded: Mutex::new(HashSet::new()),
            generation: AtomicU64::new(0),
        }
    }

    /// Cached state of `page` for a navigation the guard decided on. Pages
    /// the guard has not admitted always read as pending.
    pub fn peek(&self, decision: Decision, page: PageKind) -> LoadState {
        if decision == Decision::Admit && self.is_loaded(page) {
            LoadState::Ready(page)
        } else {
            LoadState::Pending
        }
    }

    fn is_loaded(&self, page: PageKind) -> bool {
        self.loaded
            .lock()
            .map(|loaded| loaded.contains(&page))
            .unwrap_or(false)
    }

    fn begin(&self) -> LoadTicket {
        LoadTicket(self.generation.fetch_add(1, Ordering::AcqRel) + 1)
    }

    fn is_current(&self, ticket: LoadTicket) -> bool {
        self.generation.load(Ordering::Acquire) == ticket.0
    }

    /// Starts loading `page` and supersedes any load started before. Nothing
    /// is fetched unless the guard admitted the navigation. The returned
    /// future yields `None` when the page is not admitted or another load was
    /// started in the meantime; neither result may be rendered.
    pub fn load(&self, decision: Decision, page: PageKind) -> impl Future<Output = Option<LoadState>> + '_ {
        let ticket = self.begin();

        async move {
            if decision != Decision::Admit {
                return None;
            }

            let state = if self.is_loaded(page) {
                LoadState::Ready(page)
            } else {
                tracing::debug!("fetching page {page}");

                match self.source.fetch(page).await {
                    Ok(()) => {
                        if let Ok(mut loaded) = self.loaded.lock() {
                            loaded.insert(page);
                        }
                        LoadState::Ready(page)
                    }
                    Err(error) => {
                        tracing::error!("{error}");
                        LoadState::Failed(page, error)
                    }
                }
            };

            if !self.is_current(ticket) {
                tracing::debug!("discarding superseded load of {page}");
                return None;
            }

            Some(state)
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::sync::atomic::AtomicUsize;

    use futures::executor::block_on;

    use super::*;
    use crate::navigation::page::SettingsFeature;
    use crate::security::guard::Redirect;

    const ADMIT: Decision = Decision::Admit;

    #[derive(Default, Clone)]
    struct CountingSource {
        fetches: Arc<AtomicUsize>,
        failures_left: Arc<AtomicUsize>,
    }

    impl CountingSource {
        fn failing(times: usize) -> Self {
            let source = Self::default();
            source.failures_left.store(times, Ordering::SeqCst);
            source
        }

        fn fetches(&self) -> usize {
            self.fetches.load(Ordering::SeqCst)
        }
    }

    impl PageSource for CountingSource {
        fn fetch(&self, page: PageKind) -> BoxFuture<'static, Result<(), LoadError>> {
            self.fetches.fetch_add(1, Ordering::SeqCst);

            let failed = self
                .failures_left
                .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |left| left.checked_sub(1))
                .is_ok();

            if failed {
                return Box::pin(future::ready(Err(LoadError::Fetch {
                    page,
                    reason: "connection reset".to_owned(),
                })));
            }

            Box::pin(future::ready(Ok(())))
        }
    }

    #[test]
    fn first_navigation_fetches_then_caches() {
        let source = CountingSource::default();
        let pages = LazyPages::new(source.clone());

        assert_eq!(pages.peek(ADMIT, PageKind::Main), LoadState::Pending);
        assert_eq!(block_on(pages.load(ADMIT, PageKind::Main)), Some(LoadState::Ready(PageKind::Main)));
        assert_eq!(block_on(pages.load(ADMIT, PageKind::Main)), Some(LoadState::Ready(PageKind::Main)));

        assert_eq!(source.fetches(), 1);
        assert_eq!(pages.peek(ADMIT, PageKind::Main), LoadState::Ready(PageKind::Main));
    }

    #[test]
    fn failed_fetch_is_reported_and_retried() {
        let source = CountingSource::failing(1);
        let pages = LazyPages::new(source.clone());

        let state = block_on(pages.load(ADMIT, PageKind::FineTuning));
        assert!(matches!(
            state,
            Some(LoadState::Failed(PageKind::FineTuning, LoadError::Fetch { .. }))
        ));
        assert_eq!(pages.peek(ADMIT, PageKind::FineTuning), LoadState::Pending);

        let state = block_on(pages.load(ADMIT, PageKind::FineTuning));
        assert_eq!(state, Some(LoadState::Ready(PageKind::FineTuning)));
        assert_eq!(source.fetches(), 2);
    }

    #[test]
    fn superseded_load_is_discarded() {
        let pages = LazyPages::new(CountingSource::default());
        let chat = PageKind::WorkspaceChat;
        let users = PageKind::Settings(SettingsFeature::Users);

        let stale = pages.load(ADMIT, chat);
        let current = pages.load(ADMIT, users);

        assert_eq!(block_on(stale), None);
        assert_eq!(block_on(current), Some(LoadState::Ready(users)));

        // the stale fetch still landed in the cache for next time
        assert_eq!(pages.peek(ADMIT, chat), LoadState::Ready(chat));
    }

    #[test]
    fn bundled_pages_always_resolve() {
        let pages = LazyPages::new(BundledPages);
        let state = block_on(pages.load(ADMIT, PageKind::Onboarding));

        assert_eq!(state, Some(LoadState::Ready(PageKind::Onboarding)));
    }

    #[test]
    fn nothing_is_fetched_before_admission() {
        let source = CountingSource::default();
        let pages = LazyPages::new(source.clone());

        for decision in [
            Decision::Pending,
            Decision::Deny(Redirect::Login),
            Decision::Deny(Redirect::Forbidden),
        ] {
            assert_eq!(block_on(pages.load(decision, PageKind::FineTuning)), None);
            assert_eq!(pages.peek(decision, PageKind::FineTuning), LoadState::Pending);
        }

        assert_eq!(source.fetches(), 0);
    }

    #[test]
    fn cached_page_stays_hidden_from_denied_navigation() {
        let pages = LazyPages::new(CountingSource::default());
        block_on(pages.load(ADMIT, PageKind::FineTuning));

        let denied = Decision::Deny(Redirect::Forbidden);
        assert_eq!(pages.peek(denied, PageKind::FineTuning), LoadState::Pending);
        assert_eq!(block_on(pages.load(denied, PageKind::FineTuning)), None);
    }

    #[test]
    fn denied_navigation_supersedes_an_earlier_load() {
        let pages = LazyPages::new(CountingSource::default());

        let earlier = pages.load(ADMIT, PageKind::WorkspaceChat);
        let denied = pages.load(Decision::Deny(Redirect::Login), PageKind::FineTuning);

        assert_eq!(block_on(earlier), None);
        assert_eq!(block_on(denied), None);
    }
}
