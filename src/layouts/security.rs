use crate::{
    components::loader::{FullScreenLoader, PageLoadError},
    navigation::{
        loader::{BundledPages, LazyPages, LoadState},
        table::RouteTable,
        view::{View, compose},
    },
    providers::toast::{ToastKind, use_toasts},
    router::Route,
    security::{
        guard::{self, Redirect},
        session::use_session,
    },
};
use dioxus::{logger::tracing, prelude::*};
use std::sync::Arc;

/// Wraps every route: checks the session against the route's requirement and
/// only then loads the page and renders the outlet.
#[component]
pub fn GuardLayout() -> Element {
    let route = use_route::<Route>();
    let table = use_context::<Arc<RouteTable>>();
    let pages = use_context::<Arc<LazyPages<BundledPages>>>();
    let session = use_session();
    let toasts = use_toasts();

    let page = route.page();
    let required = table.requirement(&route.to_string(), page);
    let decision = guard::evaluate(required, &session.state());

    let cached = pages.peek(decision, page);

    let mut load = use_resource(use_reactive((&decision, &page), move |(decision, page)| {
        let pages = Arc::clone(&pages);
        let mut toasts = toasts;

        async move {
            let state = pages.load(decision, page).await;

            if let Some(LoadState::Failed(_, error)) = &state {
                toasts.push(ToastKind::Error, error.to_string());
            }

            state
        }
    }));

    let view = {
        let loaded = load.read();
        let state = match &cached {
            LoadState::Ready(_) => Some(&cached),
            _ => (*loaded).as_ref().and_then(Option::as_ref),
        };
        compose(decision, state, page)
    };

    match view {
        View::Loading => rsx! {
            FullScreenLoader {}
        },
        View::Render(_) => rsx! {
            Outlet::<Route> {}
        },
        View::Redirect(to) => rsx! {
            RedirectTo { to }
        },
        View::LoadFailed(error) => rsx! {
            PageLoadError {
                message: error.to_string(),
                on_retry: move |_| load.restart(),
            }
        },
    }
}

#[component]
fn RedirectTo(to: Redirect) -> Element {
    let navigator = use_navigator();
    let toasts = use_toasts();

    use_effect(use_reactive((&to,), move |(to,)| {
        tracing::debug!("redirecting to {to}");

        if to == Redirect::Forbidden {
            let mut toasts = toasts;
            toasts.push(ToastKind::Warning, "You do not have access to that page.");
        }

        if let Some(failure) = navigator.replace(Route::from(to)) {
            tracing::error!("redirect to {to} failed: {failure:?}");
        }
    }));

    rsx! {
        FullScreenLoader {}
    }
}
