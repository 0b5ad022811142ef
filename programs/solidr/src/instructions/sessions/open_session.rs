use anchor_lang::prelude::*;

use crate::{
    events::{MemberAdded, SessionOpened},
    security::validation,
    state::{GlobalAccount, MemberAccount, SessionAccount},
};

pub fn open_session(
    ctx: Context<OpenSession>,
    name: String,
    description: String,
    member_name: String,
) -> Result<()> {
    validation::validate_session_info(&name, &description)?;
    validation::validate_member_name(&member_name)?;

    let admin = ctx.accounts.admin.key();
    let session_id = ctx.accounts.global.next_session_id()?;

    ctx.accounts.session.set_inner(SessionAccount::new(
        session_id,
        admin,
        name,
        description,
        ctx.bumps.session,
    ));
    ctx.accounts.member.set_inner(MemberAccount::new(
        session_id,
        admin,
        member_name.clone(),
        true,
        ctx.bumps.member,
    ));

    msg!("Session {} opened by {}", session_id, admin);
    emit!(SessionOpened { session_id });
    emit!(MemberAdded {
        session_id,
        addr: admin,
        name: member_name,
        is_admin: true,
    });
    Ok(())
}

#[derive(Accounts)]
pub struct OpenSession<'info> {
    #[account(mut)]
    pub admin: Signer<'info>,

    #[account(
        mut,
        seeds = [GlobalAccount::PREFIX_SEED],
        bump = global.bump
    )]
    pub global: Box<Account<'info, GlobalAccount>>,

    #[account(
        init,
        payer = admin,
        space = 8 + SessionAccount::INIT_SPACE,
        seeds = [SessionAccount::PREFIX_SEED, global.session_count.to_le_bytes().as_ref()],
        bump
    )]
    pub session: Box<Account<'info, SessionAccount>>,

    /// Creator's registration, flagged as admin
    #[account(
        init,
        payer = admin,
        space = 8 + MemberAccount::INIT_SPACE,
        seeds = [
            MemberAccount::PREFIX_SEED,
            global.session_count.to_le_bytes().as_ref(),
            admin.key().as_ref()
        ],
        bump
    )]
    pub member: Box<Account<'info, MemberAccount>>,

    pub system_program: Program<'info, System>,
}
