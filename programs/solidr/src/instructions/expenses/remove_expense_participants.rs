use anchor_lang::prelude::*;

use crate::{
    error::SolidrError,
    events::ExpenseParticipantRemoved,
    state::{ExpenseAccount, MemberAccount, SessionAccount},
    utils,
};

/// Remaining accounts: the member record of each entry of `participants`, in order.
pub fn remove_expense_participants(
    ctx: Context<RemoveExpenseParticipants>,
    participants: Vec<Pubkey>,
) -> Result<()> {
    ctx.accounts.session.require_opened()?;

    let expense = &mut ctx.accounts.expense;
    let removed = expense.remove_participants(&participants)?;
    utils::update_participant_records(
        ctx.remaining_accounts,
        &participants,
        &removed,
        expense.session_id,
        MemberAccount::release_participation,
    )?;

    msg!(
        "{} participants removed from expense {}",
        removed.len(),
        expense.expense_id
    );
    for member_pubkey in removed {
        emit!(ExpenseParticipantRemoved {
            session_id: expense.session_id,
            expense_id: expense.expense_id,
            member_pubkey,
        });
    }
    Ok(())
}

#[derive(Accounts)]
pub struct RemoveExpenseParticipants<'info> {
    pub owner: Signer<'info>,

    #[account(
        seeds = [SessionAccount::PREFIX_SEED, session.session_id.to_le_bytes().as_ref()],
        bump = session.bump
    )]
    pub session: Box<Account<'info, SessionAccount>>,

    #[account(
        mut,
        seeds = [
            ExpenseAccount::PREFIX_SEED,
            session.session_id.to_le_bytes().as_ref(),
            expense.expense_id.to_le_bytes().as_ref()
        ],
        bump = expense.bump,
        has_one = owner @ SolidrError::NotExpenseOwner
    )]
    pub expense: Box<Account<'info, ExpenseAccount>>,
}
