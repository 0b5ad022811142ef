use anchor_lang::prelude::*;

/// Event emitted when a session is opened
#[event]
pub struct SessionOpened {
    pub session_id: u64,
}

/// Event emitted when session name or description changes
#[event]
pub struct SessionUpdated {
    pub session_id: u64,
}

/// Event emitted when a session is closed
#[event]
pub struct SessionClosed {
    pub session_id: u64,
}

/// Event emitted when a closed session is deleted
#[event]
pub struct SessionDeleted {
    pub session_id: u64,
}

/// Event emitted when a member is registered, by the admin or through an invitation link
#[event]
pub struct MemberAdded {
    pub session_id: u64,
    pub addr: Pubkey,
    pub name: String,
    pub is_admin: bool,
}

#[event]
pub struct MemberUpdated {
    pub session_id: u64,
    pub addr: Pubkey,
    pub name: String,
}

#[event]
pub struct MemberDeleted {
    pub session_id: u64,
    pub addr: Pubkey,
    pub name: String,
}

#[event]
pub struct ExpenseAdded {
    pub session_id: u64,
    pub expense_id: u16,
}

#[event]
pub struct ExpenseUpdated {
    pub session_id: u64,
    pub expense_id: u16,
}

#[event]
pub struct ExpenseDeleted {
    pub session_id: u64,
    pub expense_id: u16,
}

/// Event emitted once per participant joining an expense
#[event]
pub struct ExpenseParticipantAdded {
    pub session_id: u64,
    pub expense_id: u16,
    pub member_pubkey: Pubkey,
}

/// Event emitted once per participant leaving an expense
#[event]
pub struct ExpenseParticipantRemoved {
    pub session_id: u64,
    pub expense_id: u16,
    pub member_pubkey: Pubkey,
}

#[event]
pub struct RefundAdded {
    pub session_id: u64,
    pub refund_id: u16,
}

#[event]
pub struct RefundDeleted {
    pub session_id: u64,
    pub refund_id: u16,
}
