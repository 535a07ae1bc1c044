//! Session types
//!
//! The credential pair issued by login/refresh and the profile of the
//! authenticated user. Both are persisted between runs.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Access and refresh credentials for one logged-in session
///
/// Exactly one pair is live at a time: created on login, replaced on refresh,
/// cleared on logout or when the session cannot be renewed.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CredentialPair {
    /// Short-lived bearer token attached to every API call
    pub access: String,
    /// Longer-lived token exchanged for a new pair
    pub refresh: String,
}

impl CredentialPair {
    pub fn new(access: impl Into<String>, refresh: impl Into<String>) -> Self {
        Self { access: access.into(), refresh: refresh.into() }
    }

    /// Refresh token, if the server issued a usable one.
    pub fn refresh_token(&self) -> Option<&str> {
        (!self.refresh.trim().is_empty()).then_some(self.refresh.as_str())
    }
}

// Token material stays out of logs.
impl fmt::Debug for CredentialPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CredentialPair")
            .field("access", &"<redacted>")
            .field("refresh", &"<redacted>")
            .finish()
    }
}

/// Profile of the authenticated user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub id: String,
    pub email: String,
    pub display_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_photo_uri: Option<String>,
    #[serde(default)]
    pub email_verified: bool,
}
