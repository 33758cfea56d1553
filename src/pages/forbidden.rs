use dioxus::prelude::*;

use crate::router::Route;

#[component]
pub fn ForbiddenPage() -> Element {
    rsx! {
        div {
            class: "p-10 grid gap-5",
            p {
               "You do not have access to this page. Ask an administrator."
            }
            Link {
                to: Route::Home {},
                "Back to workspaces"
            }
        }
    }
}
