//! pSol Confidential Ledger
//!
//! Per-owner privacy accounts holding encrypted balances, backed by a
//! single pool vault. Value enters through `deposit`, moves privately
//! between accounts through `private_transfer`, and leaves through
//! `withdraw`, which consumes a one-time nullifier token.
//!
//! State transitions live in [`ledger`]; the instruction handlers load
//! accounts, call the ledger, move lamports and emit events.

use anchor_lang::prelude::*;

pub mod constants;
pub mod crypto;
pub mod error;
pub mod events;
pub mod fees;
pub mod instructions;
pub mod ledger;
pub mod pda;
pub mod state;


use instructions::*;

declare_id!("2dJdyxoGmAoJLsZh7h8ma8xeyoaj7uiHFgrsgUAQMojv");

#[program]
pub mod psol_confidential {
    use super::*;

    pub fn initialize_pool(
        ctx: Context<InitializePool>,
        deposit_fee_bps: u16,
        withdraw_fee_bps: u16,
    ) -> Result<()> {
        instructions::initialize_pool::handler(ctx, deposit_fee_bps, withdraw_fee_bps)
    }

    pub fn init_privacy_account(ctx: Context<InitPrivacyAccount>) -> Result<()> {
        instructions::init_privacy_account::handler(ctx)
    }

    pub fn deposit(ctx: Context<Deposit>, amount: u64) -> Result<()> {
        instructions::deposit::handler(ctx, amount)
    }

    pub fn withdraw(
        ctx: Context<Withdraw>,
        amount: u64,
        nullifier: [u8; 32],
        proof: Vec<u8>,
    ) -> Result<()> {
        instructions::withdraw::handler(ctx, amount, nullifier, proof)
    }

    pub fn private_transfer(
        ctx: Context<PrivateTransfer>,
        encrypted_amount: [u8; 64],
        proof: Vec<u8>,
    ) -> Result<()> {
        instructions::private_transfer::handler(ctx, encrypted_amount, proof)
    }

    pub fn pause_pool(ctx: Context<PausePool>) -> Result<()> {
        instructions::admin::pause::handler(ctx)
    }

    pub fn unpause_pool(ctx: Context<UnpausePool>) -> Result<()> {
        instructions::admin::unpause::handler(ctx)
    }

    pub fn set_fees(
        ctx: Context<SetFees>,
        deposit_fee_bps: u16,
        withdraw_fee_bps: u16,
    ) -> Result<()> {
        instructions::admin::set_fees::handler(ctx, deposit_fee_bps, withdraw_fee_bps)
    }
}
