mod add_expense;
mod add_expense_participants;
mod delete_expense;
mod remove_expense_participants;
mod update_expense;

pub use add_expense::*;
pub use add_expense_participants::*;
pub use delete_expense::*;
pub use remove_expense_participants::*;
pub use update_expense::*;
