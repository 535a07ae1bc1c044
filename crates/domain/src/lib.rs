//! # Tasks Domain
//!
//! Business domain types and models for the task list client.
//!
//! This crate contains:
//! - Session types (`CredentialPair`, `Profile`)
//! - Task list and task models mirrored from the remote API
//! - Request payloads sent to the API
//! - Domain error types and Result definitions
//! - Configuration structures
//!
//! ## Architecture
//! - No dependencies on other workspace crates
//! - Only external dependencies allowed
//! - Pure domain models and data structures

pub mod config;
pub mod constants;
pub mod errors;
pub mod types;

// Re-export commonly used items
pub use config::*;
pub use errors::*;
pub use types::*;
