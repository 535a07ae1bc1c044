//! # Tasks App
//!
//! Application layer - commands and main entry point.
//!
//! This crate contains:
//! - Commands the rendering layer calls (login, lists, tasks, ...)
//! - Application context (dependency injection)
//! - Logging setup
//!
//! ## Architecture
//! - Depends on `domain`, `core`, and `infra`
//! - Wires the session service to the authenticated API client

pub mod commands;
pub mod context;
pub mod utils;

// Re-export for convenience
pub use commands::*;
pub use context::*;
