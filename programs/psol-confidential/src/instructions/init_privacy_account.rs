//! Init Privacy Account Instruction
//!
//! Opens the signer's privacy account. A second call for the same owner
//! fails with `DuplicateAccount`.

use anchor_lang::prelude::*;

use crate::constants::{POOL_SEED, PRIVACY_ACCOUNT_SEED};
use crate::events::AccountOpened;
use crate::ledger::{Ledger, LedgerClock};
use crate::state::{PrivacyAccount, PrivacyPool};

#[derive(Accounts)]
pub struct InitPrivacyAccount<'info> {
    #[account(
        mut,
        seeds = [POOL_SEED],
        bump = pool.bump,
    )]
    pub pool: Account<'info, PrivacyPool>,

    #[account(
        init_if_needed,
        payer = owner,
        space = PrivacyAccount::LEN,
        seeds = [PRIVACY_ACCOUNT_SEED, owner.key().as_ref()],
        bump
    )]
    pub privacy_account: Account<'info, PrivacyAccount>,

    #[account(mut)]
    pub owner: Signer<'info>,

    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<InitPrivacyAccount>) -> Result<()> {
    let clock = Clock::get()?;
    let pool_key = ctx.accounts.pool.key();
    let account_key = ctx.accounts.privacy_account.key();
    let owner = ctx.accounts.owner.key();

    Ledger::program().open_account(
        &pool_key,
        &mut ctx.accounts.pool,
        &mut ctx.accounts.privacy_account,
        owner,
        ctx.bumps.privacy_account,
        LedgerClock::from(&clock),
    )?;

    emit!(AccountOpened {
        pool: pool_key,
        owner,
        privacy_account: account_key,
        total_accounts: ctx.accounts.pool.total_accounts,
        timestamp: clock.unix_timestamp,
    });

    msg!("Privacy account opened for {}", owner);
    Ok(())
}
