use anchor_lang::prelude::*;

use crate::{error::SolidrError, security::validation, ID};

/// An amount paid by one member and shared evenly between participants
#[account]
#[derive(Debug, InitSpace)]
pub struct ExpenseAccount {
    pub session_id: u64,
    pub expense_id: u16,
    pub date: i64,
    pub owner: Pubkey,
    pub amount: f32,
    #[max_len(20)]
    pub name: String,
    /// Owner first, then other members in insertion order
    #[max_len(20)]
    pub participants: Vec<Pubkey>,
    pub bump: u8,
}

impl ExpenseAccount {
    pub const PREFIX_SEED: &'static [u8] = b"expense";

    pub fn find_address(session_id: u64, expense_id: u16) -> (Pubkey, u8) {
        Pubkey::find_program_address(
            &[
                Self::PREFIX_SEED,
                &session_id.to_le_bytes(),
                &expense_id.to_le_bytes(),
            ],
            &ID,
        )
    }

    pub fn new(
        session_id: u64,
        expense_id: u16,
        date: i64,
        owner: Pubkey,
        name: String,
        amount: f32,
        bump: u8,
    ) -> Self {
        Self {
            session_id,
            expense_id,
            date,
            owner,
            amount,
            name,
            participants: vec![owner],
            bump,
        }
    }

    pub fn update(&mut self, name: String, amount: f32) -> Result<()> {
        validation::validate_expense(&name, amount)?;
        self.name = name;
        self.amount = amount;
        Ok(())
    }

    /// Appends members not yet listed and returns the ones actually added
    pub fn add_participants(&mut self, candidates: &[Pubkey]) -> Result<Vec<Pubkey>> {
        let mut added: Vec<Pubkey> = Vec::new();
        for candidate in candidates {
            if !self.participants.contains(candidate) && !added.contains(candidate) {
                added.push(*candidate);
            }
        }
        validation::validate_participants_count(self.participants.len() + added.len())?;
        self.participants.extend_from_slice(&added);
        Ok(added)
    }

    /// Drops listed members and returns the ones actually removed
    pub fn remove_participants(&mut self, members: &[Pubkey]) -> Result<Vec<Pubkey>> {
        require!(
            !members.contains(&self.owner),
            SolidrError::CannotRemoveExpenseOwner
        );
        let removed: Vec<Pubkey> = self
            .participants
            .iter()
            .filter(|participant| members.contains(*participant))
            .copied()
            .collect();
        self.participants
            .retain(|participant| !removed.contains(participant));
        Ok(removed)
    }

    /// Part of the amount owed by each participant
    pub fn share(&self) -> Result<f64> {
        require!(!self.participants.is_empty(), SolidrError::DivisionByZero);
        Ok(self.amount as f64 / self.participants.len() as f64)
    }
}
