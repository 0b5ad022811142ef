use anchor_lang::prelude::*;

use crate::{
    error::SolidrError,
    events::{ExpenseAdded, ExpenseParticipantAdded},
    security::validation,
    state::{ExpenseAccount, MemberAccount, SessionAccount},
    utils,
};

/// Records an expense paid by the signer.
///
/// Remaining accounts: the member record of each entry of `participants`, in
/// the same order.
pub fn add_expense(
    ctx: Context<AddExpense>,
    name: String,
    amount: f32,
    participants: Vec<Pubkey>,
) -> Result<()> {
    let owner = ctx.accounts.owner.key();
    let session = &mut ctx.accounts.session;
    let session_id = session.session_id;

    let owner_info = ctx.accounts.member.to_account_info();
    let mut owner_member =
        MemberAccount::load(&owner_info, session_id, &owner, SolidrError::NotSessionMember)?;
    session.require_opened()?;
    validation::validate_expense(&name, amount)?;
    validation::validate_participants_count(participants.len())?;

    let expense_id = session.next_expense_id()?;
    let mut expense = ExpenseAccount::new(
        session_id,
        expense_id,
        Clock::get()?.unix_timestamp,
        owner,
        name,
        amount,
        ctx.bumps.expense,
    );
    let added = expense.add_participants(&participants)?;

    utils::update_participant_records(
        ctx.remaining_accounts,
        &participants,
        &added,
        session_id,
        MemberAccount::add_participation,
    )?;
    owner_member.add_participation()?;
    owner_member.store(&owner_info)?;

    ctx.accounts.expense.set_inner(expense);

    msg!(
        "Expense {} added to session {} by {}",
        expense_id,
        session_id,
        owner
    );
    emit!(ExpenseAdded {
        session_id,
        expense_id
    });
    for member_pubkey in added {
        emit!(ExpenseParticipantAdded {
            session_id,
            expense_id,
            member_pubkey,
        });
    }
    Ok(())
}

#[derive(Accounts)]
pub struct AddExpense<'info> {
    #[account(mut)]
    pub owner: Signer<'info>,

    #[account(
        mut,
        seeds = [SessionAccount::PREFIX_SEED, session.session_id.to_le_bytes().as_ref()],
        bump = session.bump
    )]
    pub session: Box<Account<'info, SessionAccount>>,

    /// CHECK: owner's member record, verified by `MemberAccount::load`
    #[account(mut)]
    pub member: UncheckedAccount<'info>,

    #[account(
        init,
        payer = owner,
        space = 8 + ExpenseAccount::INIT_SPACE,
        seeds = [
            ExpenseAccount::PREFIX_SEED,
            session.session_id.to_le_bytes().as_ref(),
            session.expenses_count.to_le_bytes().as_ref()
        ],
        bump
    )]
    pub expense: Box<Account<'info, ExpenseAccount>>,

    pub system_program: Program<'info, System>,
}
