#![allow(dead_code)]

use serde_json::{json, Value};
use tasks_app::AppContext;
use tasks_domain::{ApiConfig, Config, StorageConfig};
use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Application context wired to a mock API and a temporary session file.
pub struct TestApp {
    pub server: MockServer,
    pub ctx: AppContext,
    pub temp_dir: TempDir,
}

impl TestApp {
    pub async fn start() -> Self {
        let server = MockServer::start().await;
        let temp_dir = TempDir::new().expect("temp dir");
        let ctx = AppContext::with_config(config_for(&server, &temp_dir))
            .await
            .expect("context should build");
        Self { server, ctx, temp_dir }
    }

    /// Mount login + profile mocks and log in through the command layer.
    pub async fn logged_in() -> Self {
        let app = Self::start().await;
        app.mount_login("access-1", "refresh-1").await;
        tasks_app::login(&app.ctx, "ada@example.com", "pw").await.expect("login");
        app
    }

    pub async fn mount_login(&self, access: &str, refresh: &str) {
        Mock::given(method("POST"))
            .and(path("/auth/login"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({ "access": access, "refresh": refresh })),
            )
            .mount(&self.server)
            .await;
        Mock::given(method("GET"))
            .and(path("/profile"))
            .respond_with(ResponseTemplate::new(200).set_body_json(profile_json()))
            .mount(&self.server)
            .await;
    }
}

pub fn config_for(server: &MockServer, temp_dir: &TempDir) -> Config {
    Config {
        api: ApiConfig { base_url: server.uri(), timeout_secs: 2 },
        storage: StorageConfig {
            path: Some(temp_dir.path().join("session.json").to_string_lossy().into_owned()),
        },
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

pub fn list_json(id: &str, title: &str) -> Value {
    json!({
        "id": id,
        "title": title,
        "showIndexNumbers": true,
        "sortType": "LABEL",
        "sortDirection": "DESCENDING",
        "dateCreated": "2024-05-01T08:30:00Z",
        "lastModified": "2024-05-01T08:30:00Z"
    })
}

pub fn task_json(id: &str, list_id: &str, label: &str, ordinal: i64) -> Value {
    json!({
        "id": id,
        "listId": list_id,
        "label": label,
        "isCompleted": false,
        "isStarred": true,
        "ordinal": ordinal,
        "dateCreated": "2024-05-01T08:30:00Z",
        "lastModified": "2024-05-01T08:30:00Z"
    })
}
