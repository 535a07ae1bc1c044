//! Domain types and models
//!
//! Wire shapes shared with the remote task API. All JSON is camelCase; enum
//! values are SCREAMING_SNAKE_CASE as the API emits them.

pub mod list;
pub mod requests;
pub mod session;
pub mod task;

pub use list::{ListColor, ListIcon, ListMember, SortDirection, SortType, TaskList};
pub use requests::*;
pub use session::{CredentialPair, Profile};
pub use task::Task;
