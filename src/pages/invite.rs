use dioxus::prelude::*;

#[component]
pub fn InvitePage(code: String) -> Element {
    rsx! {
        div {
            class: "p-10 grid gap-5",
            p {
                "Invitation {code}"
            }
        }
    }
}
