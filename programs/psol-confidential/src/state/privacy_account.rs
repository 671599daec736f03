//! Per-owner privacy account
//!
//! One account per owner. The balance lives in `encrypted_balance` and is
//! only ever touched through the ledger capabilities, never decoded here.
//! `commitment` always matches the current balance, owner and nonce.

use anchor_lang::prelude::*;

use crate::constants::ENCRYPTED_BALANCE_LEN;
use crate::crypto::{balance_commitment, EncryptedBalance};
use crate::error::PrivacyError;

/// Privacy account.
///
/// PDA Seeds: `[b"privacy_account", owner.key().as_ref()]`
#[account]
#[derive(Debug, PartialEq, Eq)]
pub struct PrivacyAccount {
    /// Owner of this account, immutable once set
    pub owner: Pubkey,

    /// Pool this account belongs to
    pub pool: Pubkey,

    /// Encrypted balance container
    pub encrypted_balance: EncryptedBalance,

    /// Commitment to `(owner, encrypted_balance, nonce)`
    pub commitment: [u8; 32],

    /// Bumped by exactly one on every deposit, withdraw or transfer
    pub nonce: u64,

    /// Cumulative net deposits
    pub total_deposits: u64,

    /// Cumulative gross withdrawals
    pub total_withdrawals: u64,

    /// Slot of the last mutation
    pub last_update: u64,

    /// PDA bump seed
    pub bump: u8,
}

impl Default for PrivacyAccount {
    fn default() -> Self {
        Self {
            owner: Pubkey::default(),
            pool: Pubkey::default(),
            encrypted_balance: [0u8; ENCRYPTED_BALANCE_LEN],
            commitment: [0u8; 32],
            nonce: 0,
            total_deposits: 0,
            total_withdrawals: 0,
            last_update: 0,
            bump: 0,
        }
    }
}

impl PrivacyAccount {
    pub const LEN: usize = 8 // discriminator
        + 32 // owner
        + 32 // pool
        + ENCRYPTED_BALANCE_LEN // encrypted_balance
        + 32 // commitment
        + 8  // nonce
        + 8  // total_deposits
        + 8  // total_withdrawals
        + 8  // last_update
        + 1; // bump

    pub fn is_open(&self) -> bool {
        self.owner != Pubkey::default()
    }

    /// Bind the account to `owner`. Fails if it was opened before.
    pub fn open(
        &mut self,
        pool: Pubkey,
        owner: Pubkey,
        initial_balance: EncryptedBalance,
        bump: u8,
        slot: u64,
    ) -> Result<()> {
        require!(!self.is_open(), PrivacyError::DuplicateAccount);
        require!(owner != Pubkey::default(), PrivacyError::Unauthorized);

        self.owner = owner;
        self.pool = pool;
        self.encrypted_balance = initial_balance;
        self.nonce = 0;
        self.total_deposits = 0;
        self.total_withdrawals = 0;
        self.last_update = slot;
        self.bump = bump;
        self.refresh_commitment();
        Ok(())
    }

    pub fn require_open(&self) -> Result<()> {
        require!(self.is_open(), PrivacyError::AccountNotOpen);
        Ok(())
    }

    pub fn require_owner(&self, caller: &Pubkey) -> Result<()> {
        self.require_open()?;
        require_keys_eq!(self.owner, *caller, PrivacyError::Unauthorized);
        Ok(())
    }

    pub fn advance_nonce(&mut self, slot: u64) -> Result<()> {
        self.nonce = self
            .nonce
            .checked_add(1)
            .ok_or(error!(PrivacyError::Overflow))?;
        self.last_update = slot;
        Ok(())
    }

    /// Recompute `commitment` from the current balance and nonce.
    pub fn refresh_commitment(&mut self) {
        self.commitment = balance_commitment(&self.owner, &self.encrypted_balance, self.nonce);
    }

    pub fn record_deposit(&mut self, net: u64) -> Result<()> {
        self.total_deposits = self
            .total_deposits
            .checked_add(net)
            .ok_or(error!(PrivacyError::Overflow))?;
        Ok(())
    }

    pub fn record_withdrawal(&mut self, gross: u64) -> Result<()> {
        self.total_withdrawals = self
            .total_withdrawals
            .checked_add(gross)
            .ok_or(error!(PrivacyError::Overflow))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_account_size() {
        assert_eq!(PrivacyAccount::LEN, 8 + 32 + 32 + 64 + 32 + 8 * 4 + 1);
    }

    #[test]
    fn test_open_once() {
        let owner = Pubkey::new_unique();
        let mut account = PrivacyAccount::default();
        assert!(!account.is_open());

        account
            .open(Pubkey::new_unique(), owner, [0u8; 64], 254, 10)
            .unwrap();
        assert!(account.is_open());
        assert_eq!(account.owner, owner);
        assert_eq!(account.nonce, 0);
        assert_eq!(account.last_update, 10);
        assert_eq!(account.commitment, balance_commitment(&owner, &[0u8; 64], 0));

        let err = account
            .open(Pubkey::new_unique(), Pubkey::new_unique(), [0u8; 64], 1, 11)
            .unwrap_err();
        assert_eq!(err, PrivacyError::DuplicateAccount.into());
        assert_eq!(account.owner, owner);
    }

    #[test]
    fn test_owner_check() {
        let owner = Pubkey::new_unique();
        let mut account = PrivacyAccount::default();
        assert_eq!(
            account.require_owner(&owner).unwrap_err(),
            PrivacyError::AccountNotOpen.into()
        );

        account.open(Pubkey::new_unique(), owner, [0u8; 64], 1, 0).unwrap();
        assert!(account.require_owner(&owner).is_ok());
        assert_eq!(
            account.require_owner(&Pubkey::new_unique()).unwrap_err(),
            PrivacyError::Unauthorized.into()
        );
    }

    #[test]
    fn test_nonce_overflow() {
        let mut account = PrivacyAccount {
            nonce: u64::MAX,
            ..Default::default()
        };
        assert!(account.advance_nonce(1).is_err());
        assert_eq!(account.nonce, u64::MAX);
    }
}
