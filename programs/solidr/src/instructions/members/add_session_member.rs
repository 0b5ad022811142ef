use anchor_lang::prelude::*;

use crate::{
    error::SolidrError,
    events::MemberAdded,
    security::validation,
    state::{MemberAccount, SessionAccount},
};

pub fn add_session_member(ctx: Context<AddSessionMember>, addr: Pubkey, name: String) -> Result<()> {
    let session = &ctx.accounts.session;
    session.require_opened()?;
    validation::validate_member_address(&addr)?;
    validation::validate_member_name(&name)?;

    let member = &mut ctx.accounts.member;
    require!(!member.is_registered(), SolidrError::MemberAlreadyExists);
    member.set_inner(MemberAccount::new(
        session.session_id,
        addr,
        name.clone(),
        false,
        ctx.bumps.member,
    ));

    msg!("Member {} added to session {}", addr, session.session_id);
    emit!(MemberAdded {
        session_id: session.session_id,
        addr,
        name,
        is_admin: false,
    });
    Ok(())
}

#[derive(Accounts)]
#[instruction(addr: Pubkey)]
pub struct AddSessionMember<'info> {
    #[account(mut)]
    pub admin: Signer<'info>,

    #[account(
        seeds = [SessionAccount::PREFIX_SEED, session.session_id.to_le_bytes().as_ref()],
        bump = session.bump,
        has_one = admin @ SolidrError::ForbiddenAsNonAdmin
    )]
    pub session: Box<Account<'info, SessionAccount>>,

    #[account(
        init_if_needed,
        payer = admin,
        space = 8 + MemberAccount::INIT_SPACE,
        seeds = [
            MemberAccount::PREFIX_SEED,
            session.session_id.to_le_bytes().as_ref(),
            addr.as_ref()
        ],
        bump
    )]
    pub member: Box<Account<'info, MemberAccount>>,

    pub system_program: Program<'info, System>,
}
