use anchor_lang::prelude::*;

use crate::{error::SolidrError, events::SessionDeleted, state::SessionAccount, utils};

/// Removes a closed session. Member, expense and refund records of the session
/// may be passed as remaining accounts to be closed along with it.
pub fn delete_session(ctx: Context<DeleteSession>) -> Result<()> {
    let session = &ctx.accounts.session;
    session.require_closed()?;

    let released = utils::release_session_records(
        ctx.remaining_accounts,
        session.session_id,
        &ctx.accounts.admin.to_account_info(),
    )?;

    msg!(
        "Session {} deleted, {} records released",
        session.session_id,
        released
    );
    emit!(SessionDeleted {
        session_id: session.session_id
    });
    Ok(())
}

#[derive(Accounts)]
pub struct DeleteSession<'info> {
    #[account(mut)]
    pub admin: Signer<'info>,

    #[account(
        mut,
        seeds = [SessionAccount::PREFIX_SEED, session.session_id.to_le_bytes().as_ref()],
        bump = session.bump,
        has_one = admin @ SolidrError::ForbiddenAsNonAdmin,
        close = admin
    )]
    pub session: Box<Account<'info, SessionAccount>>,
}
