//! Deposit Instruction
//!
//! Moves `amount` lamports from the owner into the vault and credits
//! `amount - fee` to the owner's encrypted balance.
//!
//! # Fee Accounting
//! ```text
//! fee = floor(amount * deposit_fee_bps / 10_000)
//! vault.balance       += amount
//! vault.accrued_fees  += fee
//! account balance     += amount - fee
//! pool.total_locked   += amount - fee
//! ```

use anchor_lang::prelude::*;
use anchor_lang::system_program;

use crate::constants::{POOL_SEED, PRIVACY_ACCOUNT_SEED, VAULT_SEED};
use crate::error::PrivacyError;
use crate::events::DepositEvent;
use crate::ledger::{Ledger, LedgerClock};
use crate::state::{PoolVault, PrivacyAccount, PrivacyPool};

/// Accounts for deposit instruction.
#[derive(Accounts)]
pub struct Deposit<'info> {
    #[account(
        mut,
        seeds = [POOL_SEED],
        bump = pool.bump,
    )]
    pub pool: Account<'info, PrivacyPool>,

    #[account(
        mut,
        seeds = [VAULT_SEED, pool.key().as_ref()],
        bump = vault.bump,
        constraint = vault.pool == pool.key() @ PrivacyError::Unauthorized,
    )]
    pub vault: Account<'info, PoolVault>,

    /// Ownership is checked by the ledger so a mismatch reports `Unauthorized`.
    #[account(
        mut,
        seeds = [PRIVACY_ACCOUNT_SEED, privacy_account.owner.as_ref()],
        bump = privacy_account.bump,
    )]
    pub privacy_account: Account<'info, PrivacyAccount>,

    #[account(mut)]
    pub user: Signer<'info>,

    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<Deposit>, amount: u64) -> Result<()> {
    let clock = Clock::get()?;
    let pool_key = ctx.accounts.pool.key();
    let user = ctx.accounts.user.key();

    // ========== LEDGER UPDATE ==========

    let receipt = Ledger::program().deposit(
        &pool_key,
        &mut ctx.accounts.pool,
        &mut ctx.accounts.vault,
        &mut ctx.accounts.privacy_account,
        &user,
        amount,
        LedgerClock::from(&clock),
    )?;

    // ========== LAMPORT TRANSFER ==========

    system_program::transfer(
        CpiContext::new(
            ctx.accounts.system_program.to_account_info(),
            system_program::Transfer {
                from: ctx.accounts.user.to_account_info(),
                to: ctx.accounts.vault.to_account_info(),
            },
        ),
        receipt.gross,
    )?;

    // ========== EVENT EMISSION ==========

    emit!(DepositEvent {
        pool: pool_key,
        owner: user,
        amount: receipt.gross,
        fee: receipt.fee,
        net_amount: receipt.net,
        nonce: ctx.accounts.privacy_account.nonce,
        total_locked: ctx.accounts.pool.total_locked,
        timestamp: clock.unix_timestamp,
    });

    msg!("Deposited {} lamports (fee: {})", receipt.net, receipt.fee);
    msg!("Total locked: {}", ctx.accounts.pool.total_locked);

    Ok(())
}
