//! Withdraw Instruction
//!
//! Debits the full `amount` from the owner's encrypted balance, pays
//! `amount - fee` from the vault to `recipient`, and consumes the
//! nullifier token so the same withdrawal can never be replayed.
//!
//! # Flow
//! 1. Pool not paused, signer owns the privacy account
//! 2. Nullifier marker not yet consumed (`NullifierAlreadyUsed`)
//! 3. Balance covers `amount` (`InsufficientBalance`)
//! 4. Proof accepted by the configured verifier (`InvalidProof`)
//! 5. Vault bookkeeping covers the payout (`InsufficientFunds`)
//! 6. State committed, marker consumed last, lamports moved
//!
//! The marker PDA uses `init_if_needed` so a replay reaches the ledger and
//! fails with `NullifierAlreadyUsed` rather than an allocation error.

use anchor_lang::prelude::*;

use crate::constants::{NULLIFIER_SEED, POOL_SEED, PRIVACY_ACCOUNT_SEED, VAULT_SEED};
use crate::error::PrivacyError;
use crate::events::WithdrawEvent;
use crate::ledger::{Ledger, LedgerClock, WithdrawRequest};
use crate::state::{PoolVault, PrivacyAccount, PrivacyPool, SpentNullifier};

/// Accounts for withdraw instruction.
#[derive(Accounts)]
#[instruction(amount: u64, nullifier: [u8; 32])]
pub struct Withdraw<'info> {
    #[account(
        mut,
        seeds = [POOL_SEED],
        bump = pool.bump,
    )]
    pub pool: Box<Account<'info, PrivacyPool>>,

    #[account(
        mut,
        seeds = [VAULT_SEED, pool.key().as_ref()],
        bump = vault.bump,
        constraint = vault.pool == pool.key() @ PrivacyError::Unauthorized,
    )]
    pub vault: Box<Account<'info, PoolVault>>,

    #[account(
        mut,
        seeds = [PRIVACY_ACCOUNT_SEED, privacy_account.owner.as_ref()],
        bump = privacy_account.bump,
    )]
    pub privacy_account: Box<Account<'info, PrivacyAccount>>,

    #[account(
        init_if_needed,
        payer = owner,
        space = SpentNullifier::LEN,
        seeds = [NULLIFIER_SEED, nullifier.as_ref()],
        bump
    )]
    pub nullifier_account: Box<Account<'info, SpentNullifier>>,

    /// CHECK: Recipient can be any address except the vault.
    #[account(
        mut,
        constraint = recipient.key() != vault.key() @ PrivacyError::InvalidRecipient,
    )]
    pub recipient: UncheckedAccount<'info>,

    #[account(mut)]
    pub owner: Signer<'info>,

    pub system_program: Program<'info, System>,
}

pub fn handler(
    ctx: Context<Withdraw>,
    amount: u64,
    nullifier: [u8; 32],
    proof: Vec<u8>,
) -> Result<()> {
    let clock = Clock::get()?;
    let pool_key = ctx.accounts.pool.key();
    let owner = ctx.accounts.owner.key();
    let recipient = ctx.accounts.recipient.key();

    // ========== LEDGER UPDATE ==========

    let request = WithdrawRequest {
        caller: owner,
        nullifier,
        amount,
        proof: &proof,
    };
    let receipt = Ledger::program().withdraw(
        &pool_key,
        &mut ctx.accounts.pool,
        &mut ctx.accounts.vault,
        &mut ctx.accounts.privacy_account,
        &mut ctx.accounts.nullifier_account,
        ctx.bumps.nullifier_account,
        &request,
        LedgerClock::from(&clock),
    )?;

    // ========== LAMPORT TRANSFER ==========

    // The vault is owned by this program, so lamports move directly.
    let vault_info = ctx.accounts.vault.to_account_info();
    let recipient_info = ctx.accounts.recipient.to_account_info();

    let vault_lamports = vault_info
        .lamports()
        .checked_sub(receipt.net)
        .ok_or(error!(PrivacyError::InsufficientFunds))?;
    let recipient_lamports = recipient_info
        .lamports()
        .checked_add(receipt.net)
        .ok_or(error!(PrivacyError::Overflow))?;

    **vault_info.try_borrow_mut_lamports()? = vault_lamports;
    **recipient_info.try_borrow_mut_lamports()? = recipient_lamports;

    // ========== EVENT EMISSION ==========

    emit!(WithdrawEvent {
        pool: pool_key,
        owner,
        recipient,
        nullifier,
        amount: receipt.gross,
        fee: receipt.fee,
        net_amount: receipt.net,
        total_locked: ctx.accounts.pool.total_locked,
        timestamp: clock.unix_timestamp,
    });

    msg!("Withdrew {} lamports (fee: {})", receipt.net, receipt.fee);
    msg!("Nullifier: {:?}", &nullifier[..8]); // Only log first 8 bytes
    msg!("Total locked: {}", ctx.accounts.pool.total_locked);

    Ok(())
}
