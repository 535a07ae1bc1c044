#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use serde_json::{json, Value};
use tasks_core::{CredentialStore, ProfileStore};
use tasks_domain::{CredentialPair, Profile};
use tasks_infra::{AuthenticatedHttpClient, InMemoryKeyValueStore, PersistedSession, TasksApi};
use wiremock::MockServer;

pub type MemorySession = PersistedSession<InMemoryKeyValueStore>;

/// Mock API server plus a client wired to an in-memory session.
pub struct TestApi {
    pub server: MockServer,
    pub session: Arc<MemorySession>,
    pub http: Arc<AuthenticatedHttpClient>,
    pub api: TasksApi,
}

impl TestApi {
    pub async fn start() -> Self {
        Self::with_timeout(Duration::from_secs(2)).await
    }

    pub async fn with_timeout(timeout: Duration) -> Self {
        let server = MockServer::start().await;
        let session = Arc::new(PersistedSession::new(InMemoryKeyValueStore::new()));
        let http = Arc::new(
            AuthenticatedHttpClient::builder()
                .base_url(server.uri())
                .timeout(timeout)
                .credentials(session.clone())
                .profile_store(session.clone())
                .build()
                .expect("client should build"),
        );
        let api = TasksApi::new(http.clone());
        Self { server, session, http, api }
    }

    pub async fn logged_in(access: &str, refresh: &str) -> Self {
        let test = Self::start().await;
        test.set_credentials(Some(CredentialPair::new(access, refresh))).await;
        ProfileStore::set(&*test.session, Some(profile())).await.expect("store profile");
        test
    }

    pub async fn set_credentials(&self, pair: Option<CredentialPair>) {
        CredentialStore::set(&*self.session, pair).await.expect("store credentials");
    }

    pub async fn credentials(&self) -> Option<CredentialPair> {
        CredentialStore::get(&*self.session).await.expect("read credentials")
    }

    pub async fn stored_profile(&self) -> Option<Profile> {
        ProfileStore::get(&*self.session).await.expect("read profile")
    }

    /// Number of requests the server saw for `path`.
    pub async fn hits(&self, path: &str) -> usize {
        self.server
            .received_requests()
            .await
            .unwrap_or_default()
            .iter()
            .filter(|r| r.url.path() == path)
            .count()
    }
}

pub fn profile() -> Profile {
    Profile {
        id: "user-1".into(),
        email: "ada@example.com".into(),
        display_name: "Ada".into(),
        profile_photo_uri: None,
        email_verified: true,
    }
}

pub fn profile_json() -> Value {
    json!({
        "id": "user-1",
        "email": "ada@example.com",
        "displayName": "Ada",
        "emailVerified": true
    })
}

pub fn pair_json(access: &str, refresh: &str) -> Value {
    json!({ "access": access, "refresh": refresh })
}

pub fn list_json(id: &str, title: &str) -> Value {
    json!({
        "id": id,
        "title": title,
        "color": "BLUE",
        "icon": null,
        "description": null,
        "showIndexNumbers": false,
        "sortType": "ORDINAL",
        "sortDirection": "ASCENDING",
        "dateCreated": "2024-03-01T10:00:00Z",
        "lastModified": "2024-03-02T10:00:00Z"
    })
}

pub fn task_json(id: &str, list_id: &str, label: &str) -> Value {
    json!({
        "id": id,
        "listId": list_id,
        "label": label,
        "details": null,
        "isCompleted": false,
        "isStarred": false,
        "ordinal": 0,
        "dueDate": null,
        "dateCreated": "2024-03-01T10:00:00Z",
        "lastModified": "2024-03-01T10:00:00Z"
    })
}
