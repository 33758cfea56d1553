use dioxus::prelude::*;

const BUNDLED_LOGO: Asset = asset!("/assets/logo.svg");

/// A custom logo set at build time through `WORKSPACE_LOGO_URL` replaces the
/// bundled one.
pub fn logo_source(custom: Option<&str>, bundled: &str) -> String {
    match custom.map(str::trim) {
        Some(url) if !url.is_empty() => url.to_owned(),
        _ => bundled.to_owned(),
    }
}

#[derive(Clone, Copy)]
pub struct LogoContext {
    logo: ReadOnlySignal<String>,
}

impl LogoContext {
    pub fn logo(&self) -> String {
        self.logo.cloned()
    }
}

pub fn use_logo_provider() -> LogoContext {
    let logo = use_signal(|| logo_source(option_env!("WORKSPACE_LOGO_URL"), &BUNDLED_LOGO.to_string()));

    use_context_provider(|| LogoContext { logo: logo.into() })
}

pub fn use_logo() -> LogoContext {
    use_context::<LogoContext>()
}
