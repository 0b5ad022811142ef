mod add_refund;
mod delete_refund;

pub use add_refund::*;
pub use delete_refund::*;
