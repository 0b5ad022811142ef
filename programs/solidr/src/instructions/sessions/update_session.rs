use anchor_lang::prelude::*;

use crate::{error::SolidrError, events::SessionUpdated, state::SessionAccount};

pub fn update_session(ctx: Context<UpdateSession>, name: String, description: String) -> Result<()> {
    let session = &mut ctx.accounts.session;
    session.update(name, description)?;

    msg!("Session {} updated", session.session_id);
    emit!(SessionUpdated {
        session_id: session.session_id
    });
    Ok(())
}

#[derive(Accounts)]
pub struct UpdateSession<'info> {
    pub admin: Signer<'info>,

    #[account(
        mut,
        seeds = [SessionAccount::PREFIX_SEED, session.session_id.to_le_bytes().as_ref()],
        bump = session.bump,
        has_one = admin @ SolidrError::ForbiddenAsNonAdmin
    )]
    pub session: Box<Account<'info, SessionAccount>>,
}
