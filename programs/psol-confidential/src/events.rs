//! Events for the pSol confidential ledger
//!
//! Amounts appear only where value crosses the pool boundary (deposit,
//! withdraw). Transfers publish nonces, never amounts.

use anchor_lang::prelude::*;

#[event]
pub struct PoolInitialized {
    pub pool: Pubkey,
    pub authority: Pubkey,
    pub vault: Pubkey,
    pub deposit_fee_bps: u16,
    pub withdraw_fee_bps: u16,
    pub timestamp: i64,
}

#[event]
pub struct AccountOpened {
    pub pool: Pubkey,
    pub owner: Pubkey,
    pub privacy_account: Pubkey,
    pub total_accounts: u64,
    pub timestamp: i64,
}

#[event]
pub struct DepositEvent {
    pub pool: Pubkey,
    pub owner: Pubkey,
    pub amount: u64,
    pub fee: u64,
    pub net_amount: u64,
    pub nonce: u64,
    pub total_locked: u64,
    pub timestamp: i64,
}

#[event]
pub struct WithdrawEvent {
    pub pool: Pubkey,
    pub owner: Pubkey,
    pub recipient: Pubkey,
    pub nullifier: [u8; 32],
    pub amount: u64,
    pub fee: u64,
    pub net_amount: u64,
    pub total_locked: u64,
    pub timestamp: i64,
}

#[event]
pub struct TransferEvent {
    pub pool: Pubkey,
    pub sender_account: Pubkey,
    pub recipient_account: Pubkey,
    pub sender_nonce: u64,
    pub recipient_nonce: u64,
    pub timestamp: i64,
}

#[event]
pub struct PoolPaused {
    pub pool: Pubkey,
    pub authority: Pubkey,
    pub timestamp: i64,
}

#[event]
pub struct PoolUnpaused {
    pub pool: Pubkey,
    pub authority: Pubkey,
    pub timestamp: i64,
}

#[event]
pub struct FeesUpdated {
    pub pool: Pubkey,
    pub authority: Pubkey,
    pub deposit_fee_bps: u16,
    pub withdraw_fee_bps: u16,
    pub timestamp: i64,
}
