use std::collections::VecDeque;

use derive_more::Display;
use dioxus::prelude::*;

const MAX_TOASTS: usize = 5;

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    #[display("warning")]
    Warning,
    #[display("error")]
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
}

/// Newest toasts last; the oldest is dropped once the queue is full.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ToastQueue {
    next_id: u64,
    toasts: VecDeque<Toast>,
}

impl ToastQueue {
    pub fn push(&mut self, kind: ToastKind, message: impl Into<String>) -> u64 {
        self.next_id += 1;
        self.toasts.push_back(Toast {
            id: self.next_id,
            kind,
            message: message.into(),
        });

        while self.toasts.len() > MAX_TOASTS {
            self.toasts.pop_front();
        }

        self.next_id
    }

    pub fn dismiss(&mut self, id: u64) -> bool {
        let before = self.toasts.len();
        self.toasts.retain(|toast| toast.id != id);
        self.toasts.len() != before
    }

    pub fn toasts(&self) -> impl Iterator<Item = &Toast> {
        self.toasts.iter()
    }
}

#[derive(Clone, Copy)]
pub struct Toasts {
    queue: Signal<ToastQueue>,
}

impl Toasts {
    pub fn push(&mut self, kind: ToastKind, message: impl Into<String>) {
        self.queue.write().push(kind, message);
    }

    pub fn dismiss(&mut self, id: u64) {
        self.queue.write().dismiss(id);
    }

    fn current(&self) -> Vec<Toast> {
        self.queue.read().toasts().cloned().collect()
    }
}

pub fn use_toast_provider() -> Toasts {
    let queue = use_signal(ToastQueue::default);

    use_context_provider(|| Toasts { queue })
}

pub fn use_toasts() -> Toasts {
    use_context::<Toasts>()
}

#[component]
pub fn ToastContainer() -> Element {
    let mut toasts = use_toasts();

    rsx! {
        div {
            class: "fixed bottom-4 right-4 grid gap-2",
            for toast in toasts.current() {
                div {
                    key: "{toast.id}",
                    class: "toast toast-{toast.kind}",
                    span {
                        "{toast.message}"
                    }
                    button {
                        onclick: move |_| toasts.dismiss(toast.id),
                        "Dismiss"
                    }
                }
            }
        }
    }
}
