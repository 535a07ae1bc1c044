//! # Tasks Core
//!
//! Pure client logic layer - no HTTP or filesystem code.
//!
//! This crate contains:
//! - Port interfaces (traits) for session persistence and account calls
//! - The decision table applied when the API answers 401
//! - The session service behind login, signup and logout
//!
//! ## Architecture Principles
//! - Only depends on `tasks-domain`
//! - All I/O behind traits implemented in `tasks-infra`
//! - Pure, testable logic

pub mod auth;
pub mod session;

// Re-export specific items to avoid ambiguity
pub use auth::policy::{on_unauthorized, Attempt, RequestState, UnauthorizedAction};
pub use session::ports::{AccountGateway, CredentialStore, KeyValueStore, ProfileStore};
pub use session::service::SessionService;
