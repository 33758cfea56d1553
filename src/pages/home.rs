use dioxus::prelude::*;

use crate::providers::pfp::use_pfp;

#[component]
pub fn HomePage() -> Element {
    let avatar = use_pfp().avatar().map(|avatar| {
        rsx! {
            img {
                class: "w-8 h-8 rounded-full",
                src: "{avatar}",
                alt: "profile picture",
            }
        }
    });

    rsx! {
        div {
            class: "p-10 grid gap-5",

            {avatar}

            span {
                class: "grid overflow-x-auto",
                "Workspaces"
            }
        }
    }
}
