//! Authenticated HTTP transport for the task API.

pub mod client;
pub mod request;
pub mod response;

pub use client::{AuthenticatedHttpClient, AuthenticatedHttpClientBuilder};
pub use request::{MultipartPart, OutboundRequest, RequestBody};
pub use response::{expect_json, expect_status};
