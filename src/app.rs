use std::sync::Arc;

use dioxus::{logger::tracing, prelude::*};

use crate::{
    navigation::{
        loader::{BundledPages, LazyPages},
        table::RouteTable,
    },
    providers::{
        logo::use_logo_provider,
        pfp::use_pfp_provider,
        toast::{ToastContainer, use_toast_provider},
    },
    router::Route,
    security::session::{SessionConfig, use_session_provider},
};

#[component]
pub fn App() -> Element {
    let config = use_hook(SessionConfig::from_build_env);

    use_session_provider(config);
    use_logo_provider();
    use_pfp_provider(config);
    use_toast_provider();
    use_context_provider(|| Arc::new(LazyPages::new(BundledPages)));

    let table = use_hook(|| {
        let table = RouteTable::standard().map(Arc::new);
        if let Ok(table) = &table {
            tracing::debug!("serving {} routes", table.definitions().count());
        }
        table
    });

    let body = match table {
        Ok(table) => rsx! {
            Routes { table }
        },
        Err(error) => {
            tracing::error!("{error}");
            rsx! {
                p { "{error}" }
            }
        }
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("/assets/main.css") }

        {body}
        ToastContainer {}
    }
}

#[component]
fn Routes(table: Arc<RouteTable>) -> Element {
    use_context_provider(|| Arc::clone(&table));

    rsx! {
        Router::<Route> {}
    }
}
