//! Account operations for the session service
//!
//! Implements the core [`AccountGateway`] port on top of [`TasksApi`].

use async_trait::async_trait;
use tasks_core::AccountGateway;
use tasks_domain::{CredentialPair, LoginRequest, Profile, RegisterRequest, Result};

use super::client::TasksApi;

#[async_trait]
impl AccountGateway for TasksApi {
    async fn authenticate(&self, email: &str, password: &str) -> Result<CredentialPair> {
        let request = LoginRequest { email: email.to_string(), password: password.to_string() };
        Ok(self.login(&request).await?)
    }

    async fn register(&self, email: &str, display_name: &str, password: &str) -> Result<bool> {
        let request = RegisterRequest {
            email: email.to_string(),
            display_name: display_name.to_string(),
            password: password.to_string(),
        };
        Ok(TasksApi::register(self, &request).await?)
    }

    async fn fetch_profile(&self) -> Result<Profile> {
        Ok(self.get_profile().await?)
    }
}
