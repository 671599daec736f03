//! Basis-point fee calculator
//!
//! ```text
//! fee = floor(gross * fee_bps / 10_000)
//! net = gross - fee
//! ```
//!
//! The product is taken in `u128`, so any `u64` gross amount is safe.

use anchor_lang::prelude::*;

use crate::constants::{BPS_DENOMINATOR, MAX_FEE_BPS};
use crate::error::PrivacyError;

/// Result of splitting a gross amount into the part that moves and the fee.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FeeSplit {
    pub net: u64,
    pub fee: u64,
}

/// Reject fee rates above 100%.
pub fn validate_fee_bps(fee_bps: u16) -> Result<()> {
    require!(fee_bps <= MAX_FEE_BPS, PrivacyError::FeeTooHigh);
    Ok(())
}

/// Split `gross` into net amount and fee for the given rate.
pub fn compute_net(gross: u64, fee_bps: u16) -> Result<FeeSplit> {
    validate_fee_bps(fee_bps)?;

    let fee = (gross as u128)
        .checked_mul(fee_bps as u128)
        .ok_or(error!(PrivacyError::Overflow))?
        / BPS_DENOMINATOR as u128;
    let fee = u64::try_from(fee).map_err(|_| error!(PrivacyError::Overflow))?;

    let net = gross
        .checked_sub(fee)
        .ok_or(error!(PrivacyError::Overflow))?;

    Ok(FeeSplit { net, fee })
}
