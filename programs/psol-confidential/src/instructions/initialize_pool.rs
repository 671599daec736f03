//! Initialize Pool Instruction
//!
//! Creates the singleton pool registry and its vault. Running it a second
//! time fails with `AlreadyInitialized` instead of a raw allocation error,
//! which is why both records use `init_if_needed`.

use anchor_lang::prelude::*;

use crate::constants::{POOL_SEED, VAULT_SEED};
use crate::events::PoolInitialized;
use crate::state::{PoolVault, PrivacyPool};

#[derive(Accounts)]
pub struct InitializePool<'info> {
    #[account(
        init_if_needed,
        payer = authority,
        space = PrivacyPool::LEN,
        seeds = [POOL_SEED],
        bump
    )]
    pub pool: Box<Account<'info, PrivacyPool>>,

    #[account(
        init_if_needed,
        payer = authority,
        space = PoolVault::LEN,
        seeds = [VAULT_SEED, pool.key().as_ref()],
        bump
    )]
    pub vault: Box<Account<'info, PoolVault>>,

    #[account(mut)]
    pub authority: Signer<'info>,

    pub system_program: Program<'info, System>,
}

pub fn handler(
    ctx: Context<InitializePool>,
    deposit_fee_bps: u16,
    withdraw_fee_bps: u16,
) -> Result<()> {
    let pool_key = ctx.accounts.pool.key();
    let vault_key = ctx.accounts.vault.key();
    let pool = &mut ctx.accounts.pool;
    let vault = &mut ctx.accounts.vault;

    pool.initialize(
        ctx.accounts.authority.key(),
        vault_key,
        deposit_fee_bps,
        withdraw_fee_bps,
        ctx.bumps.pool,
    )?;
    vault.initialize(pool_key, ctx.bumps.vault);

    emit!(PoolInitialized {
        pool: pool_key,
        authority: pool.authority,
        vault: vault_key,
        deposit_fee_bps,
        withdraw_fee_bps,
        timestamp: Clock::get()?.unix_timestamp,
    });

    msg!("Privacy pool initialized");
    msg!("Vault: {}", vault_key);
    msg!("Deposit fee: {}bps", deposit_fee_bps);
    msg!("Withdraw fee: {}bps", withdraw_fee_bps);

    Ok(())
}
