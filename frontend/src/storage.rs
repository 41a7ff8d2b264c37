use gloo_storage::errors::StorageError;
use gloo_storage::{LocalStorage, Storage};
use serde::Serialize;
use serde::de::DeserializeOwned;

pub const CONFIG_KEY: &str = "chat.config";
pub const REQ_PARAMS_KEY: &str = "chat.req_params";
pub const SESSION_KEY: &str = "chat.session";

#[derive(Debug, thiserror::Error)]
pub enum PersistError {
    #[error("failed to write `{key}` to local storage")]
    Write {
        key: &'static str,
        #[source]
        source: StorageError,
    },
}

/// Reads a stored record, falling back to its default when missing or unreadable.
pub fn load<T: DeserializeOwned + Default>(key: &'static str) -> T {
    match LocalStorage::get(key) {
        Ok(value) => value,
        Err(StorageError::KeyNotFound(_)) => T::default(),
        Err(e) => {
            tracing::warn!("Discarding unreadable `{}`: {:?}", key, e);
            T::default()
        }
    }
}

pub fn save<T: Serialize>(key: &'static str, value: &T) -> Result<(), PersistError> {
    LocalStorage::set(key, value).map_err(|source| PersistError::Write { key, source })
}

pub fn clear(key: &'static str) {
    LocalStorage::delete(key);
}
