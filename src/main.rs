mod app;
mod components;
mod layouts;
mod navigation;
mod pages;
mod providers;
mod router;
mod security;

fn main() {
    dioxus::launch(app::App);
}
