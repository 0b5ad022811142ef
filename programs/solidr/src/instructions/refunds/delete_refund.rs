use anchor_lang::prelude::*;

use crate::{
    error::SolidrError,
    events::RefundDeleted,
    state::{RefundAccount, SessionAccount},
};

/// Drops the record of a refund once the session is closed. Lamports already
/// paid stay with the recipient.
pub fn delete_refund(ctx: Context<DeleteRefund>) -> Result<()> {
    ctx.accounts.session.require_closed()?;

    let refund = &ctx.accounts.refund;
    msg!(
        "Refund {} deleted from session {}",
        refund.refund_id,
        refund.session_id
    );
    emit!(RefundDeleted {
        session_id: refund.session_id,
        refund_id: refund.refund_id,
    });
    Ok(())
}

#[derive(Accounts)]
pub struct DeleteRefund<'info> {
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
            RefundAccount::PREFIX_SEED,
            session.session_id.to_le_bytes().as_ref(),
            refund.refund_id.to_le_bytes().as_ref()
        ],
        bump = refund.bump,
        close = admin
    )]
    pub refund: Box<Account<'info, RefundAccount>>,
}
