//! Key-value persistence for session state.
//!
//! [`PersistedSession`] layers the credential and profile stores on top of
//! any [`KeyValueStore`](tasks_core::KeyValueStore).

pub mod file;
pub mod memory;
pub mod session;

pub use file::FileKeyValueStore;
pub use memory::InMemoryKeyValueStore;
pub use session::PersistedSession;
