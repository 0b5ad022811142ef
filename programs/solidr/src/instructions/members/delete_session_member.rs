use anchor_lang::prelude::*;

use crate::{
    error::SolidrError,
    events::MemberDeleted,
    state::{MemberAccount, SessionAccount},
};

/// Unregisters a member who no longer takes part in any expense or refund
pub fn delete_session_member(ctx: Context<DeleteSessionMember>, addr: Pubkey) -> Result<()> {
    let session = &ctx.accounts.session;
    session.require_opened()?;

    let member = &ctx.accounts.member;
    member.require_removable()?;

    msg!("Member {} removed from session {}", addr, session.session_id);
    emit!(MemberDeleted {
        session_id: session.session_id,
        addr,
        name: member.name.clone(),
    });
    Ok(())
}

#[derive(Accounts)]
#[instruction(addr: Pubkey)]
pub struct DeleteSessionMember<'info> {
    #[account(mut)]
    pub admin: Signer<'info>,

    #[account(
        seeds = [SessionAccount::PREFIX_SEED, session.session_id.to_le_bytes().as_ref()],
        bump = session.bump,
        has_one = admin @ SolidrError::ForbiddenAsNonAdmin
    )]
    pub session: Box<Account<'info, SessionAccount>>,

    #[account(
        mut,
        seeds = [
            MemberAccount::PREFIX_SEED,
            session.session_id.to_le_bytes().as_ref(),
            addr.as_ref()
        ],
        bump = member.bump,
        close = admin
    )]
    pub member: Box<Account<'info, MemberAccount>>,
}
