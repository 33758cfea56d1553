use dioxus::prelude::*;

#[component]
pub fn FineTuningPage() -> Element {
    rsx! {
        div {
            class: "p-10 grid gap-5",
            p {
                "Fine-tuning"
            }
        }
    }
}
