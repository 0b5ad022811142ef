mod expense;
mod global;
mod member;
mod refund;
mod session;

pub use expense::*;
pub use global::*;
pub use member::*;
pub use refund::*;
pub use session::*;
