use dioxus::prelude::*;

use crate::providers::logo::use_logo;

/// The one placeholder shown while the session or the page is pending.
#[component]
pub fn FullScreenLoader() -> Element {
    let logo = use_logo().logo();

    rsx! {
        div {
            class: "fixed inset-0 grid place-items-center",
            img {
                src: "{logo}",
                alt: "logo",
            }
            p {
                "Loading..."
            }
        }
    }
}

#[component]
pub fn PageLoadError(message: String, on_retry: EventHandler<MouseEvent>) -> Element {
    rsx! {
        div {
            class: "p-10 grid gap-5",
            p {
                "{message}"
            }
            button {
                onclick: move |event| on_retry.call(event),
                class: "bg-green-600 text-white p-4 rounded",

                "Retry"
            }
        }
    }
}
