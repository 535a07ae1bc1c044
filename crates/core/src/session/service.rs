//! Session service
//!
//! Creates, inspects and destroys the logged-in session. A session exists
//! when a profile is stored; credentials alone (e.g. mid-login) do not count.

use std::sync::Arc;

use tasks_domain::{Profile, Result, TasksError};
use tracing::{debug, info, instrument, warn};

use super::ports::{AccountGateway, CredentialStore, ProfileStore};

/// Login, signup and logout on top of the account gateway and session stores
pub struct SessionService {
    gateway: Arc<dyn AccountGateway>,
    credentials: Arc<dyn CredentialStore>,
    profile: Arc<dyn ProfileStore>,
}

impl SessionService {
    pub fn new(
        gateway: Arc<dyn AccountGateway>,
        credentials: Arc<dyn CredentialStore>,
        profile: Arc<dyn ProfileStore>,
    ) -> Self {
        Self { gateway, credentials, profile }
    }

    /// Authenticate, store the issued credentials, then fetch and store the
    /// user's profile.
    ///
    /// # Errors
    /// - `InvalidInput` when email or password is blank
    /// - whatever the gateway or stores report; credentials already stored
    ///   are left in place if only the profile fetch fails
    #[instrument(skip(self, password))]
    pub async fn login(&self, email: &str, password: &str) -> Result<Profile> {
        let email = email.trim();
        if email.is_empty() || password.is_empty() {
            return Err(TasksError::InvalidInput("email and password are required".into()));
        }

        let tokens = self.gateway.authenticate(email, password).await?;
        self.credentials.set(Some(tokens)).await?;
        debug!("credentials stored, fetching profile");

        let profile = self.gateway.fetch_profile().await?;
        self.profile.set(Some(profile.clone())).await?;

        info!(user_id = %profile.id, "login successful");
        Ok(profile)
    }

    /// Register a new account and log straight into it.
    ///
    /// # Errors
    /// - `InvalidInput` when any field is blank
    /// - `Rejected` when the server accepts the call but does not report the
    ///   account as created
    #[instrument(skip(self, password))]
    pub async fn signup(&self, email: &str, display_name: &str, password: &str) -> Result<Profile> {
        let email = email.trim();
        let display_name = display_name.trim();
        if email.is_empty() || display_name.is_empty() || password.is_empty() {
            return Err(TasksError::InvalidInput(
                "email, display name and password are required".into(),
            ));
        }

        if !self.gateway.register(email, display_name, password).await? {
            warn!("registration was not confirmed by the server");
            return Err(TasksError::Rejected("account was not created".into()));
        }

        info!("account created");
        self.login(email, password).await
    }

    /// Forget credentials and profile.
    pub async fn logout(&self) -> Result<()> {
        self.credentials.set(None).await?;
        self.profile.set(None).await?;
        info!("logged out");
        Ok(())
    }

    pub async fn is_authenticated(&self) -> Result<bool> {
        Ok(self.profile.get().await?.is_some())
    }

    pub async fn current_profile(&self) -> Result<Option<Profile>> {
        self.profile.get().await
    }

    /// Re-fetch the profile from the API and store it.
    pub async fn refresh_profile(&self) -> Result<Profile> {
        let profile = self.gateway.fetch_profile().await?;
        self.profile.set(Some(profile.clone())).await?;
        Ok(profile)
    }
}
