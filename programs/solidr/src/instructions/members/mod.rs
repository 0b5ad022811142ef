mod add_session_member;
mod delete_session_member;
mod join_session_as_member;
mod update_session_member;

pub use add_session_member::*;
pub use delete_session_member::*;
pub use join_session_as_member::*;
pub use update_session_member::*;
