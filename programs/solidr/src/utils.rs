use anchor_lang::{prelude::*, system_program};

use crate::{
    error::SolidrError,
    security::validation,
    state::{ExpenseAccount, MemberAccount, RefundAccount},
    ID,
};

/// Walks member records passed as remaining accounts, one per entry of
/// `participants` and in the same order. Every record must belong to the
/// session, which proves membership. Members listed in `touched` get `update`
/// applied once and are written back.
pub fn update_participant_records<F>(
    records: &[AccountInfo],
    participants: &[Pubkey],
    touched: &[Pubkey],
    session_id: u64,
    mut update: F,
) -> Result<()>
where
    F: FnMut(&mut MemberAccount) -> Result<()>,
{
    validation::validate_remaining_accounts(records, participants.len())?;

    let mut updated: Vec<Pubkey> = Vec::with_capacity(touched.len());
    for (info, addr) in records.iter().zip(participants) {
        let mut member =
            MemberAccount::load(info, session_id, addr, SolidrError::ParticipantNotMember)?;
        if touched.contains(addr) && !updated.contains(addr) {
            update(&mut member)?;
            member.store(info)?;
            updated.push(*addr);
        }
    }

    Ok(())
}

pub fn transfer_lamports<'info>(
    from: AccountInfo<'info>,
    to: AccountInfo<'info>,
    system_program_info: AccountInfo<'info>,
    lamports: u64,
) -> Result<()> {
    let cpi_context = CpiContext::new(
        system_program_info,
        system_program::Transfer { from, to },
    );
    system_program::transfer(cpi_context, lamports)
}

/// Moves all lamports of `source` to `destination` and wipes its data
pub fn close_record(source: &AccountInfo, destination: &AccountInfo) -> Result<()> {
    let dest_starting_lamports = destination.lamports();
    let source_lamports = source.lamports();

    **destination.try_borrow_mut_lamports()? = dest_starting_lamports
        .checked_add(source_lamports)
        .ok_or(SolidrError::Overflow)?;
    **source.try_borrow_mut_lamports()? = 0;

    source.try_borrow_mut_data()?.fill(0);
    Ok(())
}

/// Closes member, expense and refund records of `session_id` into `destination`.
/// Returns the number of records released.
pub fn release_session_records(
    records: &[AccountInfo],
    session_id: u64,
    destination: &AccountInfo,
) -> Result<usize> {
    for info in records {
        require_session_record(info, session_id)?;
        close_record(info, destination)?;
    }
    Ok(records.len())
}

fn require_session_record(info: &AccountInfo, session_id: u64) -> Result<()> {
    require!(
        *info.owner == ID && info.is_writable,
        SolidrError::ForeignSessionRecord
    );

    let data = info.try_borrow_data()?;
    require!(data.len() >= 16, SolidrError::ForeignSessionRecord);

    let (discriminator, rest) = data.split_at(8);
    require!(
        [
            MemberAccount::DISCRIMINATOR,
            ExpenseAccount::DISCRIMINATOR,
            RefundAccount::DISCRIMINATOR,
        ]
        .iter()
        .any(|expected| *expected == discriminator),
        SolidrError::ForeignSessionRecord
    );
    require!(
        rest[..8] == session_id.to_le_bytes(),
        SolidrError::ForeignSessionRecord
    );
    Ok(())
}
