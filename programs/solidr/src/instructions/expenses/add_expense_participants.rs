use anchor_lang::prelude::*;

use crate::{
    error::SolidrError,
    events::ExpenseParticipantAdded,
    state::{ExpenseAccount, MemberAccount, SessionAccount},
    utils,
};

/// Remaining accounts: the member record of each entry of `participants`, in order.
pub fn add_expense_participants(
    ctx: Context<AddExpenseParticipants>,
    participants: Vec<Pubkey>,
) -> Result<()> {
    ctx.accounts.session.require_opened()?;

    let expense = &mut ctx.accounts.expense;
    let added = expense.add_participants(&participants)?;
    utils::update_participant_records(
        ctx.remaining_accounts,
        &participants,
        &added,
        expense.session_id,
        MemberAccount::add_participation,
    )?;

    msg!(
        "{} participants added to expense {}",
        added.len(),
        expense.expense_id
    );
    for member_pubkey in added {
        emit!(ExpenseParticipantAdded {
            session_id: expense.session_id,
            expense_id: expense.expense_id,
            member_pubkey,
        });
    }
    Ok(())
}

#[derive(Accounts)]
pub struct AddExpenseParticipants<'info> {
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
