//! Private Transfer Instruction
//!
//! Moves an encrypted amount from the signer's privacy account to another
//! open privacy account in the same pool. No lamports move and the pool
//! totals are unchanged, so nothing about the amount becomes public.
//!
//! # Same account on both sides
//! Anchor's account validation may reject a writable account passed twice
//! before the `SelfTransfer` constraint below is evaluated, so a client can
//! see either error. The ledger itself always answers `SelfTransfer` when
//! both records share an owner.

use anchor_lang::prelude::*;

use crate::constants::{POOL_SEED, PRIVACY_ACCOUNT_SEED};
use crate::error::PrivacyError;
use crate::events::TransferEvent;
use crate::ledger::{Ledger, LedgerClock, TransferRequest};
use crate::state::{PrivacyAccount, PrivacyPool};

/// Accounts for private_transfer instruction.
#[derive(Accounts)]
pub struct PrivateTransfer<'info> {
    #[account(
        seeds = [POOL_SEED],
        bump = pool.bump,
    )]
    pub pool: Account<'info, PrivacyPool>,

    #[account(
        mut,
        seeds = [PRIVACY_ACCOUNT_SEED, sender_account.owner.as_ref()],
        bump = sender_account.bump,
    )]
    pub sender_account: Account<'info, PrivacyAccount>,

    #[account(
        mut,
        seeds = [PRIVACY_ACCOUNT_SEED, recipient_account.owner.as_ref()],
        bump = recipient_account.bump,
        constraint = recipient_account.key() != sender_account.key() @ PrivacyError::SelfTransfer,
    )]
    pub recipient_account: Account<'info, PrivacyAccount>,

    pub sender: Signer<'info>,
}

pub fn handler(
    ctx: Context<PrivateTransfer>,
    encrypted_amount: [u8; 64],
    proof: Vec<u8>,
) -> Result<()> {
    let clock = Clock::get()?;
    let pool_key = ctx.accounts.pool.key();

    let request = TransferRequest {
        caller: ctx.accounts.sender.key(),
        encrypted_amount,
        proof: &proof,
    };
    Ledger::program().transfer(
        &pool_key,
        &ctx.accounts.pool,
        &mut ctx.accounts.sender_account,
        &mut ctx.accounts.recipient_account,
        &request,
        LedgerClock::from(&clock),
    )?;

    emit!(TransferEvent {
        pool: pool_key,
        sender_account: ctx.accounts.sender_account.key(),
        recipient_account: ctx.accounts.recipient_account.key(),
        sender_nonce: ctx.accounts.sender_account.nonce,
        recipient_nonce: ctx.accounts.recipient_account.nonce,
        timestamp: clock.unix_timestamp,
    });

    msg!("Private transfer complete");

    Ok(())
}
