//! Session state: persisted credentials and profile, and the service that
//! creates and destroys them.

pub mod ports;
pub mod service;
