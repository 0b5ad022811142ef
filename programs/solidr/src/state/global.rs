use anchor_lang::prelude::*;

use crate::{error::SolidrError, ID};

/// Program-wide singleton allocating session ids
#[account]
#[derive(Debug, InitSpace)]
pub struct GlobalAccount {
    pub session_count: u64,
    pub bump: u8,
}

impl GlobalAccount {
    pub const PREFIX_SEED: &'static [u8] = b"global";

    pub fn find_address() -> (Pubkey, u8) {
        Pubkey::find_program_address(&[Self::PREFIX_SEED], &ID)
    }

    /// Hands out the current counter value and moves the counter forward
    pub fn next_session_id(&mut self) -> Result<u64> {
        let session_id = self.session_count;
        self.session_count = session_id
            .checked_add(1)
            .ok_or(SolidrError::Overflow)?;
        Ok(session_id)
    }
}
