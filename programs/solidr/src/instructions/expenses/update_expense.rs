use anchor_lang::prelude::*;

use crate::{
    error::SolidrError,
    events::ExpenseUpdated,
    state::{ExpenseAccount, SessionAccount},
};

pub fn update_expense(ctx: Context<UpdateExpense>, name: String, amount: f32) -> Result<()> {
    ctx.accounts.session.require_opened()?;

    let expense = &mut ctx.accounts.expense;
    expense.update(name, amount)?;

    msg!(
        "Expense {} of session {} updated",
        expense.expense_id,
        expense.session_id
    );
    emit!(ExpenseUpdated {
        session_id: expense.session_id,
        expense_id: expense.expense_id,
    });
    Ok(())
}

#[derive(Accounts)]
pub struct UpdateExpense<'info> {
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
