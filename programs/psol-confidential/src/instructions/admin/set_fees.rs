//! Set Fees Instruction
//!
//! Replaces both fee rates. New rates apply to the next deposit or
//! withdrawal; fees already accrued in the vault are unaffected.

use anchor_lang::prelude::*;

use crate::constants::POOL_SEED;
use crate::error::PrivacyError;
use crate::events::FeesUpdated;
use crate::state::PrivacyPool;

/// Accounts for set_fees instruction.
#[derive(Accounts)]
pub struct SetFees<'info> {
    #[account(
        mut,
        seeds = [POOL_SEED],
        bump = pool.bump,
        has_one = authority @ PrivacyError::Unauthorized,
    )]
    pub pool: Account<'info, PrivacyPool>,

    pub authority: Signer<'info>,
}

pub fn handler(ctx: Context<SetFees>, deposit_fee_bps: u16, withdraw_fee_bps: u16) -> Result<()> {
    let authority = ctx.accounts.authority.key();
    let pool = &mut ctx.accounts.pool;

    pool.set_fees(&authority, deposit_fee_bps, withdraw_fee_bps)?;

    emit!(FeesUpdated {
        pool: pool.key(),
        authority,
        deposit_fee_bps,
        withdraw_fee_bps,
        timestamp: Clock::get()?.unix_timestamp,
    });

    msg!("Fees updated: deposit {}bps, withdraw {}bps", deposit_fee_bps, withdraw_fee_bps);

    Ok(())
}
