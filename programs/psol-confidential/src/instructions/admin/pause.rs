//! Pause Pool Instruction
//!
//! Emergency stop - disables deposits, withdrawals and transfers.
//! Only callable by pool authority.

use anchor_lang::prelude::*;

use crate::constants::POOL_SEED;
use crate::error::PrivacyError;
use crate::events::PoolPaused;
use crate::state::PrivacyPool;

/// Accounts for pause_pool instruction.
#[derive(Accounts)]
pub struct PausePool<'info> {
    #[account(
        mut,
        seeds = [POOL_SEED],
        bump = pool.bump,
        has_one = authority @ PrivacyError::Unauthorized,
    )]
    pub pool: Account<'info, PrivacyPool>,

    /// Pool authority (must sign).
    pub authority: Signer<'info>,
}

pub fn handler(ctx: Context<PausePool>) -> Result<()> {
    let authority = ctx.accounts.authority.key();
    let pool = &mut ctx.accounts.pool;

    pool.set_paused(&authority, true)?;

    emit!(PoolPaused {
        pool: pool.key(),
        authority,
        timestamp: Clock::get()?.unix_timestamp,
    });

    msg!("Pool paused by authority");

    Ok(())
}
