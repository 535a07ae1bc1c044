//! What to do when the API rejects a request's credentials
//!
//! A logical request moves through:
//!
//! ```text
//! NotSent → Sent → { Succeeded | FailedNonAuth | Unauthorized }
//! Unauthorized → { RetryingAfterRefresh → Sent (replay)
//!                | RefreshFailed → PropagateError
//!                | NoRefreshToken → PropagateError }
//! ```
//!
//! The replay is the request's last attempt: a second 401 is handed back to
//! the caller without another refresh, so one request can never loop.

use std::fmt;

/// Which transmission of a logical request is in flight
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Attempt {
    /// First transmission
    Initial,
    /// The single replay after a successful refresh
    Replay,
}

impl Attempt {
    /// The attempt that follows this one, if any.
    pub const fn next(self) -> Option<Self> {
        match self {
            Self::Initial => Some(Self::Replay),
            Self::Replay => None,
        }
    }

    /// One-based attempt number, for logs.
    pub const fn number(self) -> u8 {
        match self {
            Self::Initial => 1,
            Self::Replay => 2,
        }
    }
}

/// Action to take after a 401
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnauthorizedAction {
    /// Hand the 401 back unchanged; stored credentials are kept
    Propagate,
    /// Exchange the refresh credential, then replay the request once
    Refresh,
    /// Clear stored credentials and surface the failure
    Logout,
}

/// Decide how to react to a 401.
///
/// `refresh_available` must reflect the credential store at the moment the
/// 401 was observed, not the pair the request was signed with.
pub const fn on_unauthorized(attempt: Attempt, refresh_available: bool) -> UnauthorizedAction {
    match (attempt, refresh_available) {
        (Attempt::Replay, _) => UnauthorizedAction::Propagate,
        (Attempt::Initial, true) => UnauthorizedAction::Refresh,
        (Attempt::Initial, false) => UnauthorizedAction::Logout,
    }
}

/// Lifecycle state of one logical request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestState {
    NotSent,
    Sent(Attempt),
    Succeeded,
    FailedNonAuth,
    Unauthorized(Attempt),
    RetryingAfterRefresh,
    RefreshFailed,
    NoRefreshToken,
    PropagateError,
}

impl RequestState {
    /// Whether the request has reached a state it cannot leave.
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Succeeded | Self::FailedNonAuth | Self::PropagateError)
    }

    /// State entered after a response with the given status arrives for
    /// `attempt`.
    pub const fn after_response(attempt: Attempt, status: u16) -> Self {
        match status {
            401 => Self::Unauthorized(attempt),
            200..=299 => Self::Succeeded,
            _ => Self::FailedNonAuth,
        }
    }
}

impl fmt::Display for RequestState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotSent => write!(f, "not_sent"),
            Self::Sent(attempt) => write!(f, "sent(attempt={})", attempt.number()),
            Self::Succeeded => write!(f, "succeeded"),
            Self::FailedNonAuth => write!(f, "failed_non_auth"),
            Self::Unauthorized(attempt) => write!(f, "unauthorized(attempt={})", attempt.number()),
            Self::RetryingAfterRefresh => write!(f, "retrying_after_refresh"),
            Self::RefreshFailed => write!(f, "refresh_failed"),
            Self::NoRefreshToken => write!(f, "no_refresh_token"),
            Self::PropagateError => write!(f, "propagate_error"),
        }
    }
}
