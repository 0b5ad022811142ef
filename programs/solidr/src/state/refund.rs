use anchor_lang::prelude::*;

use crate::ID;

/// A payment from one member to another, recorded to settle balances
#[account]
#[derive(Debug, InitSpace)]
pub struct RefundAccount {
    pub session_id: u64,
    pub refund_id: u16,
    pub date: i64,
    pub from: Pubkey,
    pub to: Pubkey,
    /// In session currency
    pub amount: f32,
    /// Lamports actually moved from `from` to `to`
    pub amount_in_lamports: u64,
    pub bump: u8,
}

impl RefundAccount {
    pub const PREFIX_SEED: &'static [u8] = b"refund";

    pub fn find_address(session_id: u64, refund_id: u16) -> (Pubkey, u8) {
        Pubkey::find_program_address(
            &[
                Self::PREFIX_SEED,
                &session_id.to_le_bytes(),
                &refund_id.to_le_bytes(),
            ],
            &ID,
        )
    }
}
