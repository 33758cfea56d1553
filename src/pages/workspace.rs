use dioxus::prelude::*;

#[component]
pub fn WorkspaceChatPage(slug: String) -> Element {
    workspace_chat(&slug, None)
}

#[component]
pub fn WorkspaceThreadPage(slug: String, thread_slug: String) -> Element {
    workspace_chat(&slug, Some(&thread_slug))
}

fn workspace_chat(slug: &str, thread_slug: Option<&str>) -> Element {
    let thread = thread_slug.map(|thread_slug| {
        rsx! {
            span {
                "Thread {thread_slug}"
            }
        }
    });

    rsx! {
        div {
            class: "p-10 grid gap-5",
            span {
                class: "grid overflow-x-auto",
                "Workspace {slug}"
            }
            {thread}
        }
    }
}

#[component]
pub fn WorkspaceSettingsPage(slug: String, tab: String) -> Element {
    rsx! {
        div {
            class: "p-10 grid gap-5",
            p {
                "Workspace {slug} settings: {tab}"
            }
        }
    }
}
