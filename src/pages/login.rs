use dioxus::prelude::*;

#[component]
pub fn LoginPage() -> Element {
    rsx! {
        div {
            class: "p-10 grid gap-5",
            p {
                "Sign in"
            }
        }
    }
}
