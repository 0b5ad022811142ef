use anchor_lang::{prelude::*, solana_program::native_token::LAMPORTS_PER_SOL};

use crate::error::SolidrError;

/// Oracle quote of one SOL in session currency, `price * 10^exponent`
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Price {
    pub price: i64,
    pub conf: u64,
    pub exponent: i32,
    pub publish_time: i64,
}

/// Converts a session-currency amount into lamports, rounded to the cent.
///
/// Client-side helper exported with the crate; no instruction calls it.
/// `add_refund` trusts the caller's `amount_in_lamports`, which clients derive
/// from a quote with this function.
pub fn convert_to_lamports(amount: f64, price: &Price) -> Result<u64> {
    require!(
        amount.is_finite() && amount > 0.0,
        SolidrError::RefundAmountMustBeGreaterThanZero
    );
    let cents = (amount * 100.0).round();
    require!(cents < u64::MAX as f64, SolidrError::Overflow);
    let amount_in_cents = cents as u64;

    let exp = 10_i64
        .checked_pow(price.exponent.unsigned_abs())
        .ok_or(SolidrError::Overflow)?;
    let scaled_price = if price.exponent < 0 {
        price.price.checked_div(exp)
    } else {
        price.price.checked_mul(exp)
    }
    .ok_or(SolidrError::Overflow)?;
    require!(scaled_price > 0, SolidrError::DivisionByZero);

    let lamports = LAMPORTS_PER_SOL
        .checked_mul(amount_in_cents)
        .ok_or(SolidrError::Overflow)?
        .checked_div(scaled_price as u64)
        .ok_or(SolidrError::DivisionByZero)?;

    Ok(lamports / 100)
}
