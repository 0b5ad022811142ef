use anchor_lang::prelude::*;

use crate::constants::{
    MAX_EXPENSE_NAME_LEN, MAX_EXPENSE_PARTICIPANTS, MAX_MEMBER_NAME_LEN,
    MAX_SESSION_DESCRIPTION_LEN, MAX_SESSION_NAME_LEN,
};

/// Field validation shared by every instruction that writes user input
pub mod validation {
    use super::*;
    use crate::error::SolidrError;

    /// Validate session name and description sizes
    pub fn validate_session_info(name: &str, description: &str) -> Result<()> {
        require!(
            name.len() <= MAX_SESSION_NAME_LEN,
            SolidrError::SessionNameTooLong
        );
        require!(
            description.len() <= MAX_SESSION_DESCRIPTION_LEN,
            SolidrError::SessionDescriptionTooLong
        );
        Ok(())
    }

    /// Reject the all-zero key, which marks an unwritten member record
    pub fn validate_member_address(addr: &Pubkey) -> Result<()> {
        require_keys_neq!(
            *addr,
            Pubkey::default(),
            SolidrError::InvalidMemberAddress
        );
        Ok(())
    }

    /// Validate member nickname size
    pub fn validate_member_name(name: &str) -> Result<()> {
        require!(
            name.len() <= MAX_MEMBER_NAME_LEN,
            SolidrError::MemberNameTooLong
        );
        Ok(())
    }

    /// Validate expense name and amount
    pub fn validate_expense(name: &str, amount: f32) -> Result<()> {
        require!(
            amount.is_finite() && amount > 0.0,
            SolidrError::ExpenseAmountMustBeGreaterThanZero
        );
        require!(
            name.len() <= MAX_EXPENSE_NAME_LEN,
            SolidrError::ExpenseNameTooLong
        );
        Ok(())
    }

    /// Validate the size of an expense participant list, owner included
    pub fn validate_participants_count(count: usize) -> Result<()> {
        require!(
            count <= MAX_EXPENSE_PARTICIPANTS,
            SolidrError::MaxParticipantsReached
        );
        Ok(())
    }

    /// Validate refund amount expressed in session currency
    pub fn validate_refund_amount(amount: f32) -> Result<()> {
        require!(
            amount.is_finite() && amount > 0.0,
            SolidrError::RefundAmountMustBeGreaterThanZero
        );
        Ok(())
    }

    /// Validate that remaining accounts line up with an argument list
    pub fn validate_remaining_accounts(accounts: &[AccountInfo], expected: usize) -> Result<()> {
        require!(
            accounts.len() == expected,
            SolidrError::InvalidRemainingAccounts
        );
        Ok(())
    }
}
