use dioxus::{logger::tracing, prelude::*};
use serde::Deserialize;

use crate::security::session::{SessionConfig, USER_KEY};
use crate::security::storage::SessionStore;

#[derive(Debug, Deserialize)]
struct StoredProfile {
    id: i64,
    #[serde(rename = "pfpFilename", default)]
    pfp_filename: Option<String>,
}

/// Avatar URL for the signed-in user, if they uploaded one.
pub fn stored_avatar(store: &impl SessionStore) -> anyhow::Result<Option<String>> {
    let Some(user) = store.get_item(USER_KEY)? else {
        return Ok(None);
    };

    let profile = serde_json::from_str::<StoredProfile>(&user)?;

    Ok(profile
        .pfp_filename
        .map(|_| format!("/api/system/pfp/{id}", id = profile.id)))
}

#[derive(Clone, Copy)]
pub struct PfpContext {
    avatar: ReadOnlySignal<Option<String>>,
}

impl PfpContext {
    pub fn avatar(&self) -> Option<String> {
        self.avatar.cloned()
    }
}

pub fn use_pfp_provider(config: SessionConfig) -> PfpContext {
    let mut avatar = use_signal(|| None);

    use_effect(move || match stored_avatar(&config.persistence()) {
        Ok(found) => avatar.set(found),
        Err(error) => tracing::warn!("no avatar: {error:?}"),
    });

    use_context_provider(|| PfpContext { avatar: avatar.into() })
}

pub fn use_pfp() -> PfpContext {
    use_context::<PfpContext>()
}
