//! Application context - dependency injection container

use std::sync::Arc;

use tasks_core::{CredentialStore, KeyValueStore, ProfileStore, SessionService};
use tasks_domain::{Config, Result, TasksError};
use tasks_infra::{
    config, AuthenticatedHttpClient, FileKeyValueStore, InMemoryKeyValueStore, PersistedSession,
    TasksApi,
};
use tracing::info;

/// Session state over whichever key-value store the configuration selects
pub type AppSession = PersistedSession<Arc<dyn KeyValueStore>>;

const USER_AGENT: &str = concat!("tasks-app/", env!("CARGO_PKG_VERSION"));

/// Application context - holds all services and dependencies
pub struct AppContext {
    pub config: Config,
    pub api: Arc<TasksApi>,
    pub session: Arc<SessionService>,
    pub store: Arc<AppSession>,
}

impl AppContext {
    /// Build the context from configuration found in the environment, a
    /// config file, or defaults.
    ///
    /// # Errors
    /// Returns an error if the configuration is invalid or the session file
    /// cannot be opened.
    pub async fn new() -> Result<Self> {
        let config = config::load()?;
        Self::with_config(config).await
    }

    /// Build the context from an explicit configuration.
    ///
    /// # Errors
    /// Returns an error if `config` fails validation, the HTTP client cannot
    /// be built, or the session file cannot be opened.
    pub async fn with_config(config: Config) -> Result<Self> {
        config.validate()?;

        let kv: Arc<dyn KeyValueStore> = match &config.storage.path {
            Some(path) => Arc::new(FileKeyValueStore::open(path).await?),
            None => Arc::new(InMemoryKeyValueStore::new()),
        };
        let store = Arc::new(PersistedSession::new(kv));

        let credentials: Arc<dyn CredentialStore> = store.clone();
        let profile: Arc<dyn ProfileStore> = store.clone();

        let http = AuthenticatedHttpClient::builder()
            .api_config(&config.api)
            .user_agent(USER_AGENT)
            .credentials(credentials.clone())
            .profile_store(profile.clone())
            .build()
            .map_err(TasksError::from)?;
        let api = Arc::new(TasksApi::new(Arc::new(http)));

        let session = Arc::new(SessionService::new(api.clone(), credentials, profile));

        info!(
            base_url = %config.api.base_url,
            persistent = config.storage.path.is_some(),
            "app_context.initialized"
        );

        Ok(Self { config, api, session, store })
    }
}
