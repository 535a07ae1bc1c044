//! Credential and profile stores over a key-value store

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tasks_core::{CredentialStore, KeyValueStore, ProfileStore};
use tasks_domain::constants::{CREDENTIALS_STORAGE_KEY, PROFILE_STORAGE_KEY};
use tasks_domain::{CredentialPair, Profile, Result};
use tracing::warn;

use crate::errors::InfraError;

/// Session state kept under the `auth` and `profile` keys of `S`
///
/// An entry that no longer deserializes is treated as absent.
#[derive(Debug)]
pub struct PersistedSession<S> {
    store: S,
}

impl<S: KeyValueStore> PersistedSession<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    async fn read<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>> {
        let Some(value) = self.store.get(key).await? else {
            return Ok(None);
        };

        match serde_json::from_value(value) {
            Ok(decoded) => Ok(Some(decoded)),
            Err(err) => {
                warn!(key, error = %err, "session_store.corrupt_entry_ignored");
                Ok(None)
            }
        }
    }

    async fn write<T: Serialize>(&self, key: &str, value: Option<&T>) -> Result<()> {
        match value {
            Some(value) => {
                let value = serde_json::to_value(value).map_err(InfraError::from)?;
                self.store.set(key, value).await
            }
            None => self.store.remove(key).await,
        }
    }
}

#[async_trait]
impl<S: KeyValueStore> CredentialStore for PersistedSession<S> {
    async fn get(&self) -> Result<Option<CredentialPair>> {
        self.read(CREDENTIALS_STORAGE_KEY).await
    }

    async fn set(&self, pair: Option<CredentialPair>) -> Result<()> {
        self.write(CREDENTIALS_STORAGE_KEY, pair.as_ref()).await
    }
}

#[async_trait]
impl<S: KeyValueStore> ProfileStore for PersistedSession<S> {
    async fn get(&self) -> Result<Option<Profile>> {
        self.read(PROFILE_STORAGE_KEY).await
    }

    async fn set(&self, profile: Option<Profile>) -> Result<()> {
        self.write(PROFILE_STORAGE_KEY, profile.as_ref()).await
    }
}
