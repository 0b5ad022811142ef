mod expenses;
mod initialize;
mod members;
mod refunds;
mod sessions;

pub use expenses::*;
pub use initialize::*;
pub use members::*;
pub use refunds::*;
pub use sessions::*;
