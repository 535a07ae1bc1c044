//! # Tasks Infrastructure
//!
//! Infrastructure implementations of core ports.
//!
//! This crate contains:
//! - The authenticated HTTP client and its one-shot credential refresh
//! - The typed task API endpoint catalogue
//! - In-memory and file-backed session stores
//! - Configuration loading
//!
//! ## Architecture
//! - Implements traits defined in `tasks-core`
//! - Contains all "impure" code (network and filesystem I/O)

pub mod api;
pub mod config;
pub mod errors;
pub mod http;
pub mod storage;

// Re-export commonly used items
pub use api::{ApiError, ApiErrorCategory, AuthExhaustedReason, TasksApi};
pub use errors::InfraError;
pub use http::{AuthenticatedHttpClient, MultipartPart, OutboundRequest, RequestBody};
pub use storage::{FileKeyValueStore, InMemoryKeyValueStore, PersistedSession};
