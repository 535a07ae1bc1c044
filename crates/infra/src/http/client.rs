use std::sync::Arc;
use std::time::Duration;

use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::{Client as ReqwestClient, Response, StatusCode};
use tasks_core::{
    on_unauthorized, Attempt, CredentialStore, ProfileStore, RequestState, UnauthorizedAction,
};
use tasks_domain::constants::{
    DEFAULT_API_BASE_URL, DEFAULT_REQUEST_TIMEOUT_SECS, REFRESH_PATH, REQUEST_ID_HEADER,
};
use tasks_domain::{ApiConfig, CredentialPair, TasksError};
use tracing::{debug, info, instrument, warn};

use super::request::OutboundRequest;
use super::response::read_body;
use crate::api::errors::{ApiError, AuthExhaustedReason};
use crate::errors::InfraError;

/// HTTP client that signs every request with the stored access credential
/// and renews it once when the API answers 401.
///
/// Network failures and non-401 responses are returned untouched. The
/// refresh call runs on a separate bare client so it is never signed or
/// intercepted itself.
#[derive(Clone)]
pub struct AuthenticatedHttpClient {
    client: ReqwestClient,
    refresh_client: ReqwestClient,
    base_url: String,
    timeout: Duration,
    credentials: Arc<dyn CredentialStore>,
    profile: Option<Arc<dyn ProfileStore>>,
}

impl AuthenticatedHttpClient {
    /// Start building a new client.
    pub fn builder() -> AuthenticatedHttpClientBuilder {
        AuthenticatedHttpClientBuilder::default()
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Send `request`, refreshing the credential pair and replaying at most
    /// once if the first attempt is unauthorized.
    ///
    /// # Errors
    /// - `Network` / `Timeout` when an attempt never produced a response
    /// - `AuthExhausted` when the session was cleared after a 401
    /// - `Business` with status 401 when the replayed request is unauthorized
    /// - `Storage` when the credential store fails
    #[instrument(
        name = "http_send",
        skip(self, request),
        fields(request_id = %request.id(), method = %request.method(), path = %request.path())
    )]
    pub async fn send(&self, request: &OutboundRequest) -> Result<Response, ApiError> {
        let mut attempt = Attempt::Initial;

        loop {
            let access = self.credentials.get().await?.map(|pair| pair.access);
            debug!(state = %RequestState::Sent(attempt), "sending HTTP request");

            let response = self.transmit(request, access.as_deref()).await?;
            let status = response.status();
            let state = RequestState::after_response(attempt, status.as_u16());
            debug!(attempt = attempt.number(), %status, %state, "received HTTP response");

            if status != StatusCode::UNAUTHORIZED {
                return Ok(response);
            }

            let refresh = self
                .credentials
                .get()
                .await?
                .and_then(|pair| pair.refresh_token().map(str::to_owned));

            match (on_unauthorized(attempt, refresh.is_some()), refresh) {
                (UnauthorizedAction::Refresh, Some(token)) => {
                    match self.exchange_refresh(&token).await {
                        Ok(pair) => {
                            self.credentials.set(Some(pair)).await?;
                            debug!(state = %RequestState::RetryingAfterRefresh, "credentials renewed");
                        }
                        Err(reason) => {
                            warn!(state = %RequestState::RefreshFailed, %reason, "credential refresh failed");
                            self.clear_session().await?;
                            return Err(ApiError::AuthExhausted(reason));
                        }
                    }

                    match attempt.next() {
                        Some(next) => attempt = next,
                        None => return Err(unauthorized(response).await),
                    }
                }
                (UnauthorizedAction::Propagate, _) => {
                    warn!(state = %RequestState::PropagateError, "request unauthorized after refresh");
                    return Err(unauthorized(response).await);
                }
                _ => {
                    warn!(state = %RequestState::NoRefreshToken, "no refresh credential, logging out");
                    self.clear_session().await?;
                    let body = read_body(response).await;
                    return Err(ApiError::AuthExhausted(AuthExhaustedReason::NoRefreshCredential {
                        body,
                    }));
                }
            }
        }
    }

    /// Exchange a refresh credential for a new pair on the bare client.
    ///
    /// The pair is returned, not stored.
    pub async fn refresh(&self, refresh_token: &str) -> Result<CredentialPair, ApiError> {
        self.exchange_refresh(refresh_token).await.map_err(ApiError::AuthExhausted)
    }

    async fn exchange_refresh(&self, refresh_token: &str) -> Result<CredentialPair, AuthExhaustedReason> {
        let url = format!("{}{}", self.base_url, REFRESH_PATH);
        let response = self
            .refresh_client
            .post(&url)
            .header(CONTENT_TYPE, "text/plain; charset=utf-8")
            .header(ACCEPT, "application/json")
            .body(refresh_token.to_owned())
            .send()
            .await
            .map_err(|err| {
                if err.is_timeout() {
                    AuthExhaustedReason::RefreshTimedOut(self.timeout)
                } else {
                    AuthExhaustedReason::RefreshFailed(err.to_string())
                }
            })?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(AuthExhaustedReason::RefreshRejected(status));
        }

        let pair = response.json::<CredentialPair>().await.map_err(|err| {
            AuthExhaustedReason::RefreshFailed(format!("invalid refresh response: {}", err))
        })?;
        info!("credential pair refreshed");
        Ok(pair)
    }

    async fn transmit(
        &self,
        request: &OutboundRequest,
        access: Option<&str>,
    ) -> Result<Response, ApiError> {
        let url = format!("{}{}", self.base_url, request.path());
        let mut builder = self
            .client
            .request(request.method().clone(), &url)
            .header(REQUEST_ID_HEADER, request.id().to_string())
            .header(ACCEPT, "application/json");

        if let Some(token) = access {
            builder = builder.bearer_auth(token);
        }

        let builder = request.body().apply(builder)?;
        builder.send().await.map_err(|err| self.transport_error(err))
    }

    fn transport_error(&self, err: reqwest::Error) -> ApiError {
        if err.is_timeout() {
            warn!(timeout_ms = self.timeout.as_millis() as u64, "HTTP request timed out");
            return ApiError::Timeout(self.timeout);
        }
        debug!(error = %err, "HTTP request failed");
        ApiError::Network(err.to_string())
    }

    async fn clear_session(&self) -> Result<(), ApiError> {
        self.credentials.set(None).await?;
        if let Some(profile) = &self.profile {
            profile.set(None).await?;
        }
        Ok(())
    }
}

/// A 401 that is returned to the caller as-is, body included.
async fn unauthorized(response: Response) -> ApiError {
    let status = response.status();
    ApiError::Business { status, body: read_body(response).await }
}

/// Builder for [`AuthenticatedHttpClient`].
pub struct AuthenticatedHttpClientBuilder {
    base_url: String,
    timeout: Duration,
    user_agent: Option<String>,
    credentials: Option<Arc<dyn CredentialStore>>,
    profile: Option<Arc<dyn ProfileStore>>,
}

impl Default for AuthenticatedHttpClientBuilder {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
            user_agent: None,
            credentials: None,
            profile: None,
        }
    }
}

impl AuthenticatedHttpClientBuilder {
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Per-attempt timeout, applied to both the API and the refresh client.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Base URL and timeout from loaded configuration.
    pub fn api_config(self, config: &ApiConfig) -> Self {
        self.base_url(config.base_url.clone()).timeout(config.timeout())
    }

    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = Some(agent.into());
        self
    }

    pub fn credentials(mut self, store: Arc<dyn CredentialStore>) -> Self {
        self.credentials = Some(store);
        self
    }

    /// Profile store cleared together with the credentials on logout.
    pub fn profile_store(mut self, store: Arc<dyn ProfileStore>) -> Self {
        self.profile = Some(store);
        self
    }

    pub fn build(self) -> Result<AuthenticatedHttpClient, ApiError> {
        let client = self.reqwest_client()?;
        let refresh_client = self.reqwest_client()?;

        let credentials = self
            .credentials
            .ok_or_else(|| ApiError::Config("a credential store is required".into()))?;

        Ok(AuthenticatedHttpClient {
            client,
            refresh_client,
            base_url: self.base_url.trim_end_matches('/').to_string(),
            timeout: self.timeout,
            credentials,
            profile: self.profile,
        })
    }

    fn reqwest_client(&self) -> Result<ReqwestClient, ApiError> {
        let mut builder = ReqwestClient::builder().timeout(self.timeout).no_proxy();
        if let Some(agent) = &self.user_agent {
            builder = builder.user_agent(agent.clone());
        }

        builder.build().map_err(|err| {
            let infra: InfraError = err.into();
            match TasksError::from(infra) {
                TasksError::Config(msg) => ApiError::Config(msg),
                other => ApiError::Config(other.to_string()),
            }
        })
    }
}
