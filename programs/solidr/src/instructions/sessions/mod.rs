mod close_session;
mod delete_session;
mod open_session;
mod set_session_token_hash;
mod update_session;

pub use close_session::*;
pub use delete_session::*;
pub use open_session::*;
pub use set_session_token_hash::*;
pub use update_session::*;
