//! Task API client
//!
//! [`TasksApi`] exposes every remote endpoint as a typed async method and
//! implements the core [`AccountGateway`](tasks_core::AccountGateway) port.
//! All calls go through the [`AuthenticatedHttpClient`](crate::http::AuthenticatedHttpClient),
//! so an expired access credential is renewed transparently.

pub mod auth;
pub mod client;
pub mod errors;

pub use client::TasksApi;
pub use errors::{ApiError, ApiErrorCategory, AuthExhaustedReason};
