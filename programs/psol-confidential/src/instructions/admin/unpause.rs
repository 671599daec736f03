//! Unpause Pool Instruction

use anchor_lang::prelude::*;

use crate::constants::POOL_SEED;
use crate::error::PrivacyError;
use crate::events::PoolUnpaused;
use crate::state::PrivacyPool;

/// Accounts for unpause_pool instruction.
#[derive(Accounts)]
pub struct UnpausePool<'info> {
    #[account(
        mut,
        seeds = [POOL_SEED],
        bump = pool.bump,
        has_one = authority @ PrivacyError::Unauthorized,
    )]
    pub pool: Account<'info, PrivacyPool>,

    pub authority: Signer<'info>,
}

pub fn handler(ctx: Context<UnpausePool>) -> Result<()> {
    let authority = ctx.accounts.authority.key();
    let pool = &mut ctx.accounts.pool;

    pool.set_paused(&authority, false)?;

    emit!(PoolUnpaused {
        pool: pool.key(),
        authority,
        timestamp: Clock::get()?.unix_timestamp,
    });

    msg!("Pool unpaused");

    Ok(())
}
