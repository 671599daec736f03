//! Custodial vault backing the pool
//!
//! The vault PDA is owned by this program and holds the deposited
//! lamports on top of its rent reserve. `balance` tracks those lamports
//! independently of the ledger, so a ledger bug can never pay out more
//! than was deposited.
//!
//! # Fee policy
//! Fees never leave the vault. Deposit fees arrive as part of the gross
//! transfer and withdraw fees are the part of the debit that is not paid
//! out. Both are counted in `accrued_fees`, giving
//! `balance == pool.total_locked + accrued_fees`.

use anchor_lang::prelude::*;

use crate::error::PrivacyError;

/// Vault state account.
///
/// PDA Seeds: `[b"vault", pool.key().as_ref()]`
#[account]
#[derive(Default, Debug, PartialEq, Eq)]
pub struct PoolVault {
    /// Parent pool
    pub pool: Pubkey,

    /// Custodial lamports above the rent reserve
    pub balance: u64,

    /// Fees retained so far (part of `balance`)
    pub accrued_fees: u64,

    /// PDA bump seed
    pub bump: u8,
}

impl PoolVault {
    pub const LEN: usize = 8 // discriminator
        + 32 // pool
        + 8  // balance
        + 8  // accrued_fees
        + 1; // bump

    pub fn initialize(&mut self, pool: Pubkey, bump: u8) {
        self.pool = pool;
        self.balance = 0;
        self.accrued_fees = 0;
        self.bump = bump;
    }

    pub fn credit(&mut self, amount: u64) -> Result<()> {
        self.balance = self
            .balance
            .checked_add(amount)
            .ok_or(error!(PrivacyError::Overflow))?;
        Ok(())
    }

    /// Never lets `balance` go negative, whatever the ledger says.
    pub fn debit(&mut self, amount: u64) -> Result<()> {
        self.balance = self
            .balance
            .checked_sub(amount)
            .ok_or(error!(PrivacyError::InsufficientFunds))?;
        Ok(())
    }

    pub fn accrue_fee(&mut self, fee: u64) -> Result<()> {
        self.accrued_fees = self
            .accrued_fees
            .checked_add(fee)
            .ok_or(error!(PrivacyError::Overflow))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credit_then_debit() {
        let mut vault = PoolVault::default();
        vault.credit(1_000).unwrap();
        vault.debit(400).unwrap();
        assert_eq!(vault.balance, 600);
    }

    #[test]
    fn test_debit_past_zero_rejected() {
        let mut vault = PoolVault::default();
        vault.credit(10).unwrap();
        let err = vault.debit(11).unwrap_err();
        assert_eq!(err, PrivacyError::InsufficientFunds.into());
        assert_eq!(vault.balance, 10);
    }

    #[test]
    fn test_credit_overflow_rejected() {
        let mut vault = PoolVault::default();
        vault.credit(u64::MAX).unwrap();
        assert!(vault.credit(1).is_err());
        assert_eq!(vault.balance, u64::MAX);
    }
}
