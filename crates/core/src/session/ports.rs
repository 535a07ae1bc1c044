//! Port interfaces for session state and account operations
//!
//! These traits define the boundaries between the session logic and the
//! infrastructure that persists state and talks to the remote API.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;
use tasks_domain::{CredentialPair, Profile, Result};

/// Persistent key-value storage for session state
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Read the value stored under `key`
    async fn get(&self, key: &str) -> Result<Option<Value>>;

    /// Store `value` under `key`, replacing any previous value
    async fn set(&self, key: &str, value: Value) -> Result<()>;

    /// Remove `key`; removing a missing key is not an error
    async fn remove(&self, key: &str) -> Result<()>;
}

#[async_trait]
impl<T: KeyValueStore + ?Sized> KeyValueStore for Arc<T> {
    async fn get(&self, key: &str) -> Result<Option<Value>> {
        (**self).get(key).await
    }

    async fn set(&self, key: &str, value: Value) -> Result<()> {
        (**self).set(key, value).await
    }

    async fn remove(&self, key: &str) -> Result<()> {
        (**self).remove(key).await
    }
}

/// Holder of the single live credential pair
///
/// Shared by every in-flight request. Writes are last-writer-wins; no lock is
/// held across a refresh.
#[async_trait]
pub trait CredentialStore: Send + Sync {
    /// Current credential pair, if logged in
    async fn get(&self) -> Result<Option<CredentialPair>>;

    /// Replace the pair; `None` clears it (logout)
    async fn set(&self, pair: Option<CredentialPair>) -> Result<()>;
}

/// Holder of the authenticated user's profile
#[async_trait]
pub trait ProfileStore: Send + Sync {
    /// Stored profile, if logged in
    async fn get(&self) -> Result<Option<Profile>>;

    /// Replace the profile; `None` clears it
    async fn set(&self, profile: Option<Profile>) -> Result<()>;
}

/// Remote account operations used by the session service
#[async_trait]
pub trait AccountGateway: Send + Sync {
    /// Exchange email and password for a credential pair
    async fn authenticate(&self, email: &str, password: &str) -> Result<CredentialPair>;

    /// Create an account; `true` when the server reports it as created
    async fn register(&self, email: &str, display_name: &str, password: &str) -> Result<bool>;

    /// Fetch the profile of the currently authenticated user
    async fn fetch_profile(&self) -> Result<Profile>;
}
