use anchor_lang::prelude::*;

use crate::{
    error::SolidrError,
    events::MemberAdded,
    security::validation,
    state::{MemberAccount, SessionAccount},
};

/// Self-registration through an invitation link shared by the admin
pub fn join_session_as_member(
    ctx: Context<JoinSessionAsMember>,
    name: String,
    token: String,
) -> Result<()> {
    let session = &ctx.accounts.session;
    session.require_opened()?;
    session.verify_invitation(&token)?;
    validation::validate_member_name(&name)?;

    let addr = ctx.accounts.signer.key();
    let member = &mut ctx.accounts.member;
    require!(!member.is_registered(), SolidrError::MemberAlreadyExists);
    member.set_inner(MemberAccount::new(
        session.session_id,
        addr,
        name.clone(),
        false,
        ctx.bumps.member,
    ));

    msg!("Member {} joined session {}", addr, session.session_id);
    emit!(MemberAdded {
        session_id: session.session_id,
        addr,
        name,
        is_admin: false,
    });
    Ok(())
}

#[derive(Accounts)]
pub struct JoinSessionAsMember<'info> {
    #[account(mut)]
    pub signer: Signer<'info>,

    #[account(
        seeds = [SessionAccount::PREFIX_SEED, session.session_id.to_le_bytes().as_ref()],
        bump = session.bump
    )]
    pub session: Box<Account<'info, SessionAccount>>,

    #[account(
        init_if_needed,
        payer = signer,
        space = 8 + MemberAccount::INIT_SPACE,
        seeds = [
            MemberAccount::PREFIX_SEED,
            session.session_id.to_le_bytes().as_ref(),
            signer.key().as_ref()
        ],
        bump
    )]
    pub member: Box<Account<'info, MemberAccount>>,

    pub system_program: Program<'info, System>,
}
