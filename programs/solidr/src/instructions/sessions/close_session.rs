use anchor_lang::prelude::*;

use crate::{error::SolidrError, events::SessionClosed, state::SessionAccount};

/// Freezes the session. Members, expenses and refunds become read-only.
pub fn close_session(ctx: Context<CloseSession>) -> Result<()> {
    let session = &mut ctx.accounts.session;
    session.mark_closed()?;

    msg!("Session {} closed", session.session_id);
    emit!(SessionClosed {
        session_id: session.session_id
    });
    Ok(())
}

#[derive(Accounts)]
pub struct CloseSession<'info> {
    pub admin: Signer<'info>,

    #[account(
        mut,
        seeds = [SessionAccount::PREFIX_SEED, session.session_id.to_le_bytes().as_ref()],
        bump = session.bump,
        has_one = admin @ SolidrError::ForbiddenAsNonAdmin
    )]
    pub session: Box<Account<'info, SessionAccount>>,
}
