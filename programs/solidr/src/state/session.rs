use anchor_lang::prelude::*;

use crate::{
    constants::MISSING_INVITATION_HASH, error::SolidrError, invitation::InvitationToken,
    security::validation, ID,
};

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq, InitSpace)]
pub enum SessionStatus {
    Opened,
    Closed,
}

/// A group of members sharing expenses, administered by its creator
#[account]
#[derive(Debug, InitSpace)]
pub struct SessionAccount {
    pub session_id: u64,
    #[max_len(20)]
    pub name: String,
    #[max_len(80)]
    pub description: String,
    pub admin: Pubkey,
    /// Next expense id to allocate
    pub expenses_count: u16,
    /// Next refund id to allocate
    pub refunds_count: u16,
    pub status: SessionStatus,
    /// sha256 of the current invitation token, all zeroes when none
    pub invitation_hash: [u8; 32],
    pub bump: u8,
}

impl SessionAccount {
    pub const PREFIX_SEED: &'static [u8] = b"session";

    pub fn find_address(session_id: u64) -> (Pubkey, u8) {
        Pubkey::find_program_address(&[Self::PREFIX_SEED, &session_id.to_le_bytes()], &ID)
    }

    pub fn new(session_id: u64, admin: Pubkey, name: String, description: String, bump: u8) -> Self {
        Self {
            session_id,
            name,
            description,
            admin,
            expenses_count: 0,
            refunds_count: 0,
            status: SessionStatus::Opened,
            invitation_hash: MISSING_INVITATION_HASH,
            bump,
        }
    }

    pub fn is_opened(&self) -> bool {
        self.status == SessionStatus::Opened
    }

    pub fn require_opened(&self) -> Result<()> {
        require!(self.is_opened(), SolidrError::SessionClosed);
        Ok(())
    }

    pub fn require_closed(&self) -> Result<()> {
        require!(!self.is_opened(), SolidrError::SessionNotClosed);
        Ok(())
    }

    pub fn update(&mut self, name: String, description: String) -> Result<()> {
        self.require_opened()?;
        validation::validate_session_info(&name, &description)?;
        self.name = name;
        self.description = description;
        Ok(())
    }

    /// Opened -> Closed. Any pending invitation link dies with the session.
    pub fn mark_closed(&mut self) -> Result<()> {
        self.require_opened()?;
        self.status = SessionStatus::Closed;
        self.invitation_hash = MISSING_INVITATION_HASH;
        Ok(())
    }

    /// Replaces the invitation commitment, invalidating previously shared links
    pub fn set_invitation_hash(&mut self, hash: [u8; 32]) -> Result<()> {
        self.require_opened()?;
        self.invitation_hash = hash;
        Ok(())
    }

    /// Checks a token against the stored commitment. The commitment stays in
    /// place so a single link can be shared with the whole group.
    pub fn verify_invitation(&self, token: &str) -> Result<()> {
        require!(
            self.invitation_hash != MISSING_INVITATION_HASH,
            SolidrError::MissingInvitationHash
        );
        require!(
            InvitationToken::hash(token) == self.invitation_hash,
            SolidrError::InvalidInvitationHash
        );
        Ok(())
    }

    pub fn next_expense_id(&mut self) -> Result<u16> {
        let expense_id = self.expenses_count;
        self.expenses_count = expense_id
            .checked_add(1)
            .ok_or(SolidrError::Overflow)?;
        Ok(expense_id)
    }

    pub fn next_refund_id(&mut self) -> Result<u16> {
        let refund_id = self.refunds_count;
        self.refunds_count = refund_id.checked_add(1).ok_or(SolidrError::Overflow)?;
        Ok(refund_id)
    }
}
