use anchor_lang::prelude::*;

use crate::{error::SolidrError, state::SessionAccount, ID};

/// Registration of one address inside one session
#[account]
#[derive(Debug, InitSpace)]
pub struct MemberAccount {
    pub session_id: u64,
    pub addr: Pubkey,
    #[max_len(40)]
    pub name: String,
    pub is_admin: bool,
    /// Number of expenses and refunds this member takes part in
    pub participations: u16,
    pub bump: u8,
}

impl MemberAccount {
    pub const PREFIX_SEED: &'static [u8] = b"member";

    pub fn find_address(session_id: u64, addr: &Pubkey) -> (Pubkey, u8) {
        Pubkey::find_program_address(
            &[Self::PREFIX_SEED, &session_id.to_le_bytes(), addr.as_ref()],
            &ID,
        )
    }

    pub fn new(session_id: u64, addr: Pubkey, name: String, is_admin: bool, bump: u8) -> Self {
        Self {
            session_id,
            addr,
            name,
            is_admin,
            participations: 0,
            bump,
        }
    }

    /// An `init_if_needed` record that has never been written still holds the default address
    pub fn is_registered(&self) -> bool {
        self.addr != Pubkey::default()
    }

    /// Nicknames can be changed by their owner or by the session admin
    pub fn require_can_update(&self, signer: &Pubkey, session: &SessionAccount) -> Result<()> {
        require!(
            self.addr == *signer || session.admin == *signer,
            SolidrError::ForbiddenAsNonOwner
        );
        Ok(())
    }

    pub fn require_removable(&self) -> Result<()> {
        require!(!self.is_admin, SolidrError::CannotRemoveSessionAdmin);
        require!(
            self.participations == 0,
            SolidrError::MemberHasParticipations
        );
        Ok(())
    }

    pub fn add_participation(&mut self) -> Result<()> {
        self.participations = self
            .participations
            .checked_add(1)
            .ok_or(SolidrError::Overflow)?;
        Ok(())
    }

    pub fn release_participation(&mut self) -> Result<()> {
        self.participations = self
            .participations
            .checked_sub(1)
            .ok_or(SolidrError::Overflow)?;
        Ok(())
    }

    /// Loads the member record of `addr` in `session_id` from a raw account.
    /// Any account that is not exactly that record fails with `error`.
    pub fn load(
        info: &AccountInfo,
        session_id: u64,
        addr: &Pubkey,
        error: SolidrError,
    ) -> Result<Self> {
        if *info.owner != ID || info.data_is_empty() {
            return Err(error.into());
        }

        let member = {
            let data = info.try_borrow_data()?;
            let mut src: &[u8] = &data;
            Self::try_deserialize(&mut src).map_err(|_| error)?
        };

        let expected = Pubkey::create_program_address(
            &[
                Self::PREFIX_SEED,
                &session_id.to_le_bytes(),
                addr.as_ref(),
                &[member.bump],
            ],
            &ID,
        )
        .map_err(|_| error)?;
        if expected != info.key() || member.session_id != session_id || member.addr != *addr {
            return Err(error.into());
        }

        Ok(member)
    }

    /// Writes the record back into an account previously checked by `load`
    pub fn store(&self, info: &AccountInfo) -> Result<()> {
        require!(info.is_writable, SolidrError::InvalidRemainingAccounts);
        let mut data = info.try_borrow_mut_data()?;
        let mut dst: &mut [u8] = &mut data;
        self.try_serialize(&mut dst)?;
        Ok(())
    }
}
