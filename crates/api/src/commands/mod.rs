//! Commands invoked by the rendering layer
//!
//! Each command takes the [`AppContext`](crate::AppContext), logs its outcome
//! and returns a displayable `String` error.

pub mod lists;
pub mod members;
pub mod profile;
pub mod session;
pub mod tasks;

pub use lists::{create_list, delete_list, get_lists};
pub use members::invite_member;
pub use profile::get_profile;
pub use session::{is_authenticated, login, logout, signup};
pub use tasks::{clear_completed, create_task, get_tasks, move_task, update_task};
