use anchor_lang::prelude::*;

use crate::{
    error::SolidrError,
    events::ExpenseDeleted,
    state::{ExpenseAccount, MemberAccount, SessionAccount},
    utils,
};

/// Remaining accounts: the member record of every participant other than the
/// owner, in participant order.
pub fn delete_expense(ctx: Context<DeleteExpense>) -> Result<()> {
    ctx.accounts.session.require_opened()?;

    let expense = &ctx.accounts.expense;
    let others: Vec<Pubkey> = expense
        .participants
        .iter()
        .filter(|participant| **participant != expense.owner)
        .copied()
        .collect();
    utils::update_participant_records(
        ctx.remaining_accounts,
        &others,
        &others,
        expense.session_id,
        MemberAccount::release_participation,
    )?;
    ctx.accounts.member.release_participation()?;

    msg!(
        "Expense {} deleted from session {}",
        expense.expense_id,
        expense.session_id
    );
    emit!(ExpenseDeleted {
        session_id: expense.session_id,
        expense_id: expense.expense_id,
    });
    Ok(())
}

#[derive(Accounts)]
pub struct DeleteExpense<'info> {
    #[account(mut)]
    pub owner: Signer<'info>,

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
            owner.key().as_ref()
        ],
        bump = member.bump
    )]
    pub member: Box<Account<'info, MemberAccount>>,

    #[account(
        mut,
        seeds = [
            ExpenseAccount::PREFIX_SEED,
            session.session_id.to_le_bytes().as_ref(),
            expense.expense_id.to_le_bytes().as_ref()
        ],
        bump = expense.bump,
        has_one = owner @ SolidrError::NotExpenseOwner,
        close = owner
    )]
    pub expense: Box<Account<'info, ExpenseAccount>>,
}
