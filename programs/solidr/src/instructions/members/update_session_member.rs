use anchor_lang::prelude::*;

use crate::{
    events::MemberUpdated,
    security::validation,
    state::{MemberAccount, SessionAccount},
};

pub fn update_session_member(
    ctx: Context<UpdateSessionMember>,
    addr: Pubkey,
    name: String,
) -> Result<()> {
    let session = &ctx.accounts.session;
    session.require_opened()?;

    let member = &mut ctx.accounts.member;
    member.require_can_update(&ctx.accounts.signer.key(), session)?;
    validation::validate_member_name(&name)?;
    member.name = name.clone();

    msg!("Member {} renamed in session {}", addr, session.session_id);
    emit!(MemberUpdated {
        session_id: session.session_id,
        addr,
        name,
    });
    Ok(())
}

#[derive(Accounts)]
#[instruction(addr: Pubkey)]
pub struct UpdateSessionMember<'info> {
    pub signer: Signer<'info>,

    #[account(
        seeds = [SessionAccount::PREFIX_SEED, session.session_id.to_le_bytes().as_ref()],
        bump = session.bump
    )]
    pub session: Box<Account<'info, SessionAccount>>,

    #[account(
        mut,
        seeds = [
            MemberAccount::PREFIX_SEED,
            session.session_id.to_le_bytes().as_ref(),
            addr.as_ref()
        ],
        bump = member.bump
    )]
    pub member: Box<Account<'info, MemberAccount>>,
}
