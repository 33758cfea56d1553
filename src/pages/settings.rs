use dioxus::prelude::*;

use crate::navigation::page::SettingsFeature;

#[component]
pub fn SettingsPage(feature: SettingsFeature) -> Element {
    rsx! {
        div {
            class: "p-10 grid gap-5",
            p {
                "Settings: {feature}"
            }
        }
    }
}

#[component]
pub fn LiveDocumentSyncPage() -> Element {
    rsx! {
        div {
            class: "p-10 grid gap-5",
            p {
                "Live document sync"
            }
        }
    }
}
