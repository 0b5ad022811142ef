use anchor_lang::prelude::*;

use crate::{
    constants::BALANCE_EPSILON,
    state::{ExpenseAccount, MemberAccount, RefundAccount},
};

#[derive(Clone, Debug, PartialEq)]
pub struct MemberBalance {
    pub owner: Pubkey,
    /// `total_paid - total_cost`, moved by refunds. Positive means the member is owed money.
    pub balance: f64,
    pub total_cost: f64,
    pub total_paid: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct MemberTransfer {
    pub from: Pubkey,
    pub to: Pubkey,
    pub amount: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct SessionBalance {
    /// One entry per member, in member order
    pub balances: Vec<MemberBalance>,
    /// Suggested payments settling every balance
    pub transfers: Vec<MemberTransfer>,
    pub total_expenses: f64,
    pub total_refunds: f64,
    pub my_total_cost: f64,
}

/// Computes balances and settlement transfers for a snapshot of one session.
///
/// Each expense is split equally between its participants. Refunds move
/// `amount` of credit from the receiver to the sender. Addresses referenced by
/// records but absent from `members` are appended after them so that balances
/// always sum to zero.
pub fn compute_balance(
    members: &[MemberAccount],
    expenses: &[ExpenseAccount],
    refunds: &[RefundAccount],
    me: Option<&Pubkey>,
) -> Result<SessionBalance> {
    let mut balances: Vec<MemberBalance> = members
        .iter()
        .map(|member| MemberBalance {
            owner: member.addr,
            balance: 0.0,
            total_cost: 0.0,
            total_paid: 0.0,
        })
        .collect();

    let mut total_expenses = 0.0;
    for expense in expenses {
        let amount = expense.amount as f64;
        let share = expense.share()?;
        balance_of(&mut balances, &expense.owner).total_paid += amount;
        for participant in &expense.participants {
            balance_of(&mut balances, participant).total_cost += share;
        }
        total_expenses += amount;
    }

    for entry in balances.iter_mut() {
        entry.balance = entry.total_paid - entry.total_cost;
    }

    let mut total_refunds = 0.0;
    for refund in refunds {
        let amount = refund.amount as f64;
        balance_of(&mut balances, &refund.from).balance += amount;
        balance_of(&mut balances, &refund.to).balance -= amount;
        total_refunds += amount;
    }

    let my_total_cost = me
        .and_then(|me| balances.iter().find(|entry| entry.owner == *me))
        .map_or(0.0, |entry| entry.total_cost);

    let transfers = settle(&balances);

    Ok(SessionBalance {
        balances,
        transfers,
        total_expenses,
        total_refunds,
        my_total_cost,
    })
}

fn balance_of<'a>(balances: &'a mut Vec<MemberBalance>, owner: &Pubkey) -> &'a mut MemberBalance {
    let index = match balances.iter().position(|entry| entry.owner == *owner) {
        Some(index) => index,
        None => {
            balances.push(MemberBalance {
                owner: *owner,
                balance: 0.0,
                total_cost: 0.0,
                total_paid: 0.0,
            });
            balances.len() - 1
        }
    };
    &mut balances[index]
}

/// Greedy netting: the largest debtor repeatedly pays the largest creditor.
/// Each step clears at least one side, so at most `n - 1` transfers come out.
fn settle(balances: &[MemberBalance]) -> Vec<MemberTransfer> {
    let mut remaining: Vec<(Pubkey, f64)> = balances
        .iter()
        .map(|entry| (entry.owner, entry.balance))
        .collect();
    let mut transfers = Vec::new();

    loop {
        let (Some(creditor), Some(debtor)) = (largest_creditor(&remaining), largest_debtor(&remaining))
        else {
            break;
        };

        let amount = remaining[creditor].1.min(-remaining[debtor].1);
        remaining[creditor].1 -= amount;
        remaining[debtor].1 += amount;
        transfers.push(MemberTransfer {
            from: remaining[debtor].0,
            to: remaining[creditor].0,
            amount,
        });
    }

    transfers
}

// Ties resolve to the first entry in member order.
fn largest_creditor(remaining: &[(Pubkey, f64)]) -> Option<usize> {
    let mut best: Option<usize> = None;
    for (index, (_, balance)) in remaining.iter().enumerate() {
        if *balance > BALANCE_EPSILON && best.map_or(true, |best| *balance > remaining[best].1) {
            best = Some(index);
        }
    }
    best
}

fn largest_debtor(remaining: &[(Pubkey, f64)]) -> Option<usize> {
    let mut best: Option<usize> = None;
    for (index, (_, balance)) in remaining.iter().enumerate() {
        if *balance < -BALANCE_EPSILON && best.map_or(true, |best| *balance < remaining[best].1) {
            best = Some(index);
        }
    }
    best
}
