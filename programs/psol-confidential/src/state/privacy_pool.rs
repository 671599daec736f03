//! Privacy pool registry
//!
//! Stores the authority, fee configuration, pause flag and the aggregate
//! counters for every account opened under the pool.
//!
//! # Single writer
//! `total_accounts` and `total_locked` are only written by the hooks on
//! this type. Ledger operations hand deltas to the hooks instead of
//! assigning the fields themselves.

use anchor_lang::prelude::*;

use crate::error::PrivacyError;
use crate::fees::validate_fee_bps;

/// Pool registry account.
///
/// PDA Seeds: `[b"privacy_pool"]`
#[account]
#[derive(Default, Debug, PartialEq, Eq)]
pub struct PrivacyPool {
    /// Pool authority (admin) - can pause and change fees
    pub authority: Pubkey,

    /// Vault PDA address (cached for convenience)
    pub vault: Pubkey,

    /// Net value held across all privacy accounts
    pub total_locked: u64,

    /// Privacy accounts ever opened under this pool
    pub total_accounts: u64,

    /// Deposit fee in basis points
    pub deposit_fee_bps: u16,

    /// Withdraw fee in basis points
    pub withdraw_fee_bps: u16,

    /// Blocks deposit, withdraw and transfer when true
    pub paused: bool,

    /// PDA bump seed
    pub bump: u8,
}

impl PrivacyPool {
    /// Account space calculation
    pub const LEN: usize = 8 // discriminator
        + 32 // authority
        + 32 // vault
        + 8  // total_locked
        + 8  // total_accounts
        + 2  // deposit_fee_bps
        + 2  // withdraw_fee_bps
        + 1  // paused
        + 1; // bump

    pub fn is_initialized(&self) -> bool {
        self.authority != Pubkey::default()
    }

    /// Initialize the pool record. Fails if it already holds a pool.
    pub fn initialize(
        &mut self,
        authority: Pubkey,
        vault: Pubkey,
        deposit_fee_bps: u16,
        withdraw_fee_bps: u16,
        bump: u8,
    ) -> Result<()> {
        require!(!self.is_initialized(), PrivacyError::AlreadyInitialized);
        require!(authority != Pubkey::default(), PrivacyError::Unauthorized);
        validate_fee_bps(deposit_fee_bps)?;
        validate_fee_bps(withdraw_fee_bps)?;

        self.authority = authority;
        self.vault = vault;
        self.total_locked = 0;
        self.total_accounts = 0;
        self.deposit_fee_bps = deposit_fee_bps;
        self.withdraw_fee_bps = withdraw_fee_bps;
        self.paused = false;
        self.bump = bump;
        Ok(())
    }

    /// Check if pool is not paused
    pub fn require_not_paused(&self) -> Result<()> {
        require!(!self.paused, PrivacyError::PoolPaused);
        Ok(())
    }

    pub fn require_authority(&self, caller: &Pubkey) -> Result<()> {
        require_keys_eq!(self.authority, *caller, PrivacyError::Unauthorized);
        Ok(())
    }

    /// Set pause state (authority only)
    pub fn set_paused(&mut self, caller: &Pubkey, paused: bool) -> Result<()> {
        self.require_authority(caller)?;
        self.paused = paused;
        Ok(())
    }

    /// Replace both fee rates (authority only)
    pub fn set_fees(
        &mut self,
        caller: &Pubkey,
        deposit_fee_bps: u16,
        withdraw_fee_bps: u16,
    ) -> Result<()> {
        self.require_authority(caller)?;
        validate_fee_bps(deposit_fee_bps)?;
        validate_fee_bps(withdraw_fee_bps)?;
        self.deposit_fee_bps = deposit_fee_bps;
        self.withdraw_fee_bps = withdraw_fee_bps;
        Ok(())
    }

    /// Count a newly opened privacy account (checked arithmetic)
    pub fn on_account_created(&mut self) -> Result<()> {
        self.total_accounts = self
            .total_accounts
            .checked_add(1)
            .ok_or(error!(PrivacyError::Overflow))?;
        Ok(())
    }

    /// Apply a signed change to `total_locked`.
    pub fn on_value_locked(&mut self, delta: i128) -> Result<()> {
        let next = (self.total_locked as i128)
            .checked_add(delta)
            .ok_or(error!(PrivacyError::Overflow))?;
        self.total_locked = u64::try_from(next).map_err(|_| error!(PrivacyError::Overflow))?;
        Ok(())
    }
}
