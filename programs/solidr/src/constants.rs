/// Maximum byte length of a session name
pub const MAX_SESSION_NAME_LEN: usize = 20;
/// Maximum byte length of a session description
pub const MAX_SESSION_DESCRIPTION_LEN: usize = 80;
/// Maximum byte length of a member nickname
pub const MAX_MEMBER_NAME_LEN: usize = 40;
/// Maximum byte length of an expense name
pub const MAX_EXPENSE_NAME_LEN: usize = 20;
/// Maximum number of participants (owner included) of one expense
pub const MAX_EXPENSE_PARTICIPANTS: usize = 20;

/// Invitation hash value meaning "no active invitation link"
pub const MISSING_INVITATION_HASH: [u8; 32] = [0; 32];

/// Balances closer to zero than this are considered settled
pub const BALANCE_EPSILON: f64 = 1e-6;
