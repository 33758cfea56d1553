use dioxus::prelude::*;

#[component]
pub fn OnboardingPage() -> Element {
    onboarding_flow("home")
}

#[component]
pub fn OnboardingStepPage(step: String) -> Element {
    onboarding_flow(&step)
}

fn onboarding_flow(step: &str) -> Element {
    rsx! {
        div {
            class: "p-10 grid gap-5",
            p {
                "Onboarding: {step}"
            }
        }
    }
}
