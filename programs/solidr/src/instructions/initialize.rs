use anchor_lang::prelude::*;

use crate::state::GlobalAccount;

pub fn initialize(ctx: Context<Initialize>) -> Result<()> {
    let global = &mut ctx.accounts.global;
    global.session_count = 0;
    global.bump = ctx.bumps.global;

    msg!("Solidr initialized by {}", ctx.accounts.signer.key());
    Ok(())
}

#[derive(Accounts)]
pub struct Initialize<'info> {
    #[account(mut)]
    pub signer: Signer<'info>,

    #[account(
        init,
        payer = signer,
        space = 8 + GlobalAccount::INIT_SPACE,
        seeds = [GlobalAccount::PREFIX_SEED],
        bump
    )]
    pub global: Box<Account<'info, GlobalAccount>>,

    pub system_program: Program<'info, System>,
}
