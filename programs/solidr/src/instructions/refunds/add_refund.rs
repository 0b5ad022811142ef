use anchor_lang::prelude::*;

use crate::{
    error::SolidrError,
    events::RefundAdded,
    security::validation,
    state::{MemberAccount, RefundAccount, SessionAccount},
    utils,
};

/// Pays `amount_in_lamports` from the signer to another member and records
/// `amount` (session currency) against their balances.
///
/// The lamport amount comes from the client, see `prices::convert_to_lamports`.
pub fn add_refund(ctx: Context<AddRefund>, amount: f32, amount_in_lamports: u64) -> Result<()> {
    let from = ctx.accounts.from.key();
    let to = ctx.accounts.to.key();
    let session = &mut ctx.accounts.session;
    let session_id = session.session_id;

    let from_info = ctx.accounts.from_member.to_account_info();
    let to_info = ctx.accounts.to_member.to_account_info();
    let mut from_member =
        MemberAccount::load(&from_info, session_id, &from, SolidrError::NotSessionMember)?;
    let mut to_member =
        MemberAccount::load(&to_info, session_id, &to, SolidrError::NotSessionMember)?;
    session.require_opened()?;
    require_keys_neq!(from, to, SolidrError::InvalidRefundRecipient);
    validation::validate_refund_amount(amount)?;

    utils::transfer_lamports(
        ctx.accounts.from.to_account_info(),
        ctx.accounts.to.to_account_info(),
        ctx.accounts.system_program.to_account_info(),
        amount_in_lamports,
    )?;

    let refund_id = session.next_refund_id()?;
    from_member.add_participation()?;
    from_member.store(&from_info)?;
    to_member.add_participation()?;
    to_member.store(&to_info)?;

    ctx.accounts.refund.set_inner(RefundAccount {
        session_id,
        refund_id,
        date: Clock::get()?.unix_timestamp,
        from,
        to,
        amount,
        amount_in_lamports,
        bump: ctx.bumps.refund,
    });

    msg!(
        "Refund {} of session {}: {} lamports from {} to {}",
        refund_id,
        session_id,
        amount_in_lamports,
        from,
        to
    );
    emit!(RefundAdded {
        session_id,
        refund_id
    });
    Ok(())
}

#[derive(Accounts)]
pub struct AddRefund<'info> {
    #[account(mut)]
    pub from: Signer<'info>,

    #[account(mut)]
    pub to: SystemAccount<'info>,

    #[account(
        mut,
        seeds = [SessionAccount::PREFIX_SEED, session.session_id.to_le_bytes().as_ref()],
        bump = session.bump
    )]
    pub session: Box<Account<'info, SessionAccount>>,

    /// CHECK: sender's member record, verified by `MemberAccount::load`
    #[account(mut)]
    pub from_member: UncheckedAccount<'info>,

    /// CHECK: recipient's member record, verified by `MemberAccount::load`
    #[account(mut)]
    pub to_member: UncheckedAccount<'info>,

    #[account(
        init,
        payer = from,
        space = 8 + RefundAccount::INIT_SPACE,
        seeds = [
            RefundAccount::PREFIX_SEED,
            session.session_id.to_le_bytes().as_ref(),
            session.refunds_count.to_le_bytes().as_ref()
        ],
        bump
    )]
    pub refund: Box<Account<'info, RefundAccount>>,

    pub system_program: Program<'info, System>,
}
