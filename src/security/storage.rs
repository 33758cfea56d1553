use std::str::FromStr;

use anyhow::anyhow;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageType {
    LocalStorage,
    SessionStorage,
}

impl Default for StorageType {
    fn default() -> Self {
        Self::LocalStorage
    }
}

impl FromStr for StorageType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "local" => Ok(Self::LocalStorage),
            "session" => Ok(Self::SessionStorage),
            other => Err(format!("unknown storage {other:?}")),
        }
    }
}

/// Read side of whatever persists the signed-in session.
pub trait SessionStore {
    fn get_item(&self, key: &str) -> anyhow::Result<Option<String>>;
}

impl StorageType {
    fn open(&self) -> anyhow::Result<web_sys::Storage> {
        match self {
            Self::LocalStorage => {
                let Some(storage) = local_storage() else {
                    anyhow::bail!("no local storage available");
                };
                Ok(storage)
            }
            Self::SessionStorage => {
                let Some(storage) = session_storage() else {
                    anyhow::bail!("no session storage available");
                };
                Ok(storage)
            }
        }
    }
}

impl SessionStore for StorageType {
    fn get_item(&self, key: &str) -> anyhow::Result<Option<String>> {
        self.open()?
            .get_item(key)
            .map_err(|err| anyhow!("failed to read {key}: {err:?}"))
    }
}

pub fn local_storage() -> Option<web_sys::Storage> {
    if let Some(window) = web_sys::window() {
        if let Ok(storage) = window.local_storage() {
            return storage;
        }
    }
    None
}

pub fn session_storage() -> Option<web_sys::Storage> {
    if let Some(window) = web_sys::window() {
        if let Ok(storage) = window.session_storage() {
            return storage;
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn storage_names_parse() {
        assert_eq!("local".parse::<StorageType>(), Ok(StorageType::LocalStorage));
        assert_eq!("session".parse::<StorageType>(), Ok(StorageType::SessionStorage));
        assert!("cookie".parse::<StorageType>().is_err());
    }
}
