use std::str::FromStr;

use anyhow::anyhow;
use dioxus::{logger::tracing, prelude::*};
use serde::Deserialize;

use crate::security::role::{Identity, Role};
use crate::security::storage::{SessionStore, StorageType};
use crate::security::token::TokenClaims;

pub const USER_KEY: &str = "anythingllm_user";
const TOKEN_KEY: &str = "anythingllm_authToken";

/// How the instance authenticates its visitors.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum AuthMode {
    /// Single user, no password: every visitor owns the instance.
    Open,
    /// Single user behind a password: a valid token is enough.
    Password,
    #[default]
    MultiUser,
}

impl FromStr for AuthMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "open" => Ok(Self::Open),
            "password" => Ok(Self::Password),
            "multi-user" => Ok(Self::MultiUser),
            other => Err(format!("unknown auth mode {other:?}")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionState {
    Loading,
    Resolved(Identity),
}

#[derive(Debug, Deserialize)]
struct StoredUser {
    role: Role,
}

#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct SessionConfig {
    auth_mode: AuthMode,
    persistence: StorageType,
}

/// Parses a build-time setting, falling back to the default when it is unset
/// or unreadable.
fn build_setting<T: FromStr<Err = String> + Default>(name: &str, value: Option<&str>) -> T {
    match value.map(str::parse::<T>) {
        Some(Ok(value)) => value,
        Some(Err(error)) => {
            tracing::warn!("{name}: {error}, using the default");
            T::default()
        }
        None => T::default(),
    }
}

impl SessionConfig {
    /// Settings baked in at build time through `WORKSPACE_AUTH_MODE`
    /// (`open`, `password`, `multi-user`) and `WORKSPACE_SESSION_STORAGE`
    /// (`local`, `session`).
    pub fn from_build_env() -> Self {
        Self::default()
            .with_auth_mode(build_setting("WORKSPACE_AUTH_MODE", option_env!("WORKSPACE_AUTH_MODE")))
            .with_persistence(build_setting(
                "WORKSPACE_SESSION_STORAGE",
                option_env!("WORKSPACE_SESSION_STORAGE"),
            ))
    }

    pub fn with_auth_mode(mut self, mode: AuthMode) -> Self {
        self.auth_mode = mode;
        self
    }

    pub fn with_persistence(mut self, persistence: StorageType) -> Self {
        self.persistence = persistence;
        self
    }

    pub fn persistence(&self) -> StorageType {
        self.persistence
    }

    /// Identity for whatever `store` currently holds. A stored session that
    /// can't be read is treated as signed out.
    pub fn resolve(&self, store: &impl SessionStore, now: i64) -> Identity {
        match self.try_resolve(store, now) {
            Ok(identity) => identity,
            Err(error) => {
                tracing::warn!("discarding stored session: {error:?}");
                Identity::anonymous()
            }
        }
    }

    /// Re-reads a resolved session against `now`, so expiry and sign-in or
    /// sign-out since the last read are picked up. A session still loading
    /// stays loading.
    pub fn refresh(&self, state: &SessionState, store: &impl SessionStore, now: i64) -> SessionState {
        match state {
            SessionState::Loading => SessionState::Loading,
            SessionState::Resolved(_) => SessionState::Resolved(self.resolve(store, now)),
        }
    }

    fn try_resolve(&self, store: &impl SessionStore, now: i64) -> anyhow::Result<Identity> {
        if self.auth_mode == AuthMode::Open {
            return Ok(Identity::authenticated(Role::Admin));
        }

        let Some(token) = store.get_item(TOKEN_KEY)? else {
            return Ok(Identity::anonymous());
        };

        let claims = token
            .parse::<TokenClaims>()
            .map_err(|err| anyhow!("invalid auth token: {err}"))?;

        if claims.is_expired_at(now) {
            tracing::debug!("auth token expired");
            return Ok(Identity::anonymous());
        }

        if self.auth_mode == AuthMode::Password {
            return Ok(Identity::authenticated(Role::Admin));
        }

        let Some(user) = store.get_item(USER_KEY)? else {
            return Ok(Identity::anonymous());
        };

        let user = serde_json::from_str::<StoredUser>(&user)?;

        Ok(Identity::authenticated(user.role))
    }
}

/// Read-only handle on the session, provided once at the application root.
#[derive(Clone, Copy)]
pub struct SessionContext {
    state: ReadOnlySignal<SessionState>,
    config: SessionConfig,
}

impl SessionContext {
    /// Current session, checked against storage and the clock on every call.
    /// Components calling this re-render when the provider resolves.
    pub fn state(&self) -> SessionState {
        let state = self.state.cloned();
        self.config
            .refresh(&state, &self.config.persistence, chrono::Utc::now().timestamp())
    }
}

/// Installs the session provider. Starts out `Loading` and resolves from
/// browser storage once mounted.
pub fn use_session_provider(config: SessionConfig) -> SessionContext {
    let mut state = use_signal(|| SessionState::Loading);

    use_effect(move || {
        let identity = config.resolve(&config.persistence, chrono::Utc::now().timestamp());
        tracing::debug!("session resolved: {identity:?}");
        state.set(SessionState::Resolved(identity));
    });

    use_context_provider(|| SessionContext {
        state: state.into(),
        config,
    })
}

pub fn use_session() -> SessionContext {
    use_context::<SessionContext>()
}
