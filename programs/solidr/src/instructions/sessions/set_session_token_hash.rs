use anchor_lang::prelude::*;

use crate::{error::SolidrError, state::SessionAccount};

/// Stores the SHA-256 of a freshly generated invitation token
pub fn set_session_token_hash(ctx: Context<SetSessionTokenHash>, hash: [u8; 32]) -> Result<()> {
    let session = &mut ctx.accounts.session;
    session.set_invitation_hash(hash)?;

    msg!("Session {} invitation link renewed", session.session_id);
    Ok(())
}

#[derive(Accounts)]
pub struct SetSessionTokenHash<'info> {
    pub admin: Signer<'info>,

    #[account(
        mut,
        seeds = [SessionAccount::PREFIX_SEED, session.session_id.to_le_bytes().as_ref()],
        bump = session.bump,
        has_one = admin @ SolidrError::ForbiddenAsNonAdmin
    )]
    pub session: Box<Account<'info, SessionAccount>>,
}
