use anchor_lang::prelude::*;

pub mod constants;
pub mod error;
pub mod events;
pub mod instructions;
pub mod invitation;
pub mod prices;
pub mod security;
pub mod settlement;
pub mod state;
pub mod utils;

use instructions::*;

declare_id!("7kUL66rcAhxgisSeBtXoH7Pn9C5hWZa4m2Bp9mRcwtmv");

/// Solidr shares expenses between the members of a session and settles them
/// with native SOL refunds
#[program]
pub mod solidr {
    use super::*;

    /// Create the global session counter
    pub fn initialize(ctx: Context<Initialize>) -> Result<()> {
        instructions::initialize(ctx)
    }

    /// Open a new session administered by the signer, who becomes its first member
    pub fn open_session(
        ctx: Context<OpenSession>,
        name: String,
        description: String,
        member_name: String,
    ) -> Result<()> {
        instructions::open_session(ctx, name, description, member_name)
    }

    pub fn update_session(
        ctx: Context<UpdateSession>,
        name: String,
        description: String,
    ) -> Result<()> {
        instructions::update_session(ctx, name, description)
    }

    pub fn close_session(ctx: Context<CloseSession>) -> Result<()> {
        instructions::close_session(ctx)
    }

    /// Delete a closed session, optionally with its records passed as remaining accounts
    pub fn delete_session(ctx: Context<DeleteSession>) -> Result<()> {
        instructions::delete_session(ctx)
    }

    pub fn add_session_member(
        ctx: Context<AddSessionMember>,
        addr: Pubkey,
        name: String,
    ) -> Result<()> {
        instructions::add_session_member(ctx, addr, name)
    }

    /// Commit the hash of a new invitation token, revoking the previous one
    pub fn set_session_token_hash(
        ctx: Context<SetSessionTokenHash>,
        hash: [u8; 32],
    ) -> Result<()> {
        instructions::set_session_token_hash(ctx, hash)
    }

    /// Join a session with the invitation token shared by its admin
    pub fn join_session_as_member(
        ctx: Context<JoinSessionAsMember>,
        name: String,
        token: String,
    ) -> Result<()> {
        instructions::join_session_as_member(ctx, name, token)
    }

    pub fn update_session_member(
        ctx: Context<UpdateSessionMember>,
        addr: Pubkey,
        name: String,
    ) -> Result<()> {
        instructions::update_session_member(ctx, addr, name)
    }

    pub fn delete_session_member(ctx: Context<DeleteSessionMember>, addr: Pubkey) -> Result<()> {
        instructions::delete_session_member(ctx, addr)
    }

    /// Record an expense paid by the signer and shared with `participants`
    pub fn add_expense(
        ctx: Context<AddExpense>,
        name: String,
        amount: f32,
        participants: Vec<Pubkey>,
    ) -> Result<()> {
        instructions::add_expense(ctx, name, amount, participants)
    }

    pub fn update_expense(ctx: Context<UpdateExpense>, name: String, amount: f32) -> Result<()> {
        instructions::update_expense(ctx, name, amount)
    }

    pub fn add_expense_participants(
        ctx: Context<AddExpenseParticipants>,
        participants: Vec<Pubkey>,
    ) -> Result<()> {
        instructions::add_expense_participants(ctx, participants)
    }

    pub fn remove_expense_participants(
        ctx: Context<RemoveExpenseParticipants>,
        participants: Vec<Pubkey>,
    ) -> Result<()> {
        instructions::remove_expense_participants(ctx, participants)
    }

    pub fn delete_expense(ctx: Context<DeleteExpense>) -> Result<()> {
        instructions::delete_expense(ctx)
    }

    /// Pay another member in lamports and record the refund in session currency
    pub fn add_refund(
        ctx: Context<AddRefund>,
        amount: f32,
        amount_in_lamports: u64,
    ) -> Result<()> {
        instructions::add_refund(ctx, amount, amount_in_lamports)
    }

    pub fn delete_refund(ctx: Context<DeleteRefund>) -> Result<()> {
        instructions::delete_refund(ctx)
    }
}
