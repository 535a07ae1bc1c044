//! Credential-expiry handling rules shared by HTTP client implementations.

pub mod policy;
