//! Applies encrypted deltas to encrypted balances
//!
//! A real deployment would add ciphertexts homomorphically and rely on a
//! range proof for non-negativity. The plaintext applier decodes both
//! sides and uses checked arithmetic instead.

use anchor_lang::prelude::*;

use super::balance_codec::{BalanceCodec, EncryptedBalance, PlaintextCodec};
use crate::error::PrivacyError;

/// Balance arithmetic over the stored container.
pub trait ConfidentialAmountApplier {
    /// `balance + delta`
    fn credit(&self, balance: &EncryptedBalance, delta: &EncryptedBalance)
        -> Result<EncryptedBalance>;

    /// `balance - delta`, failing with `InsufficientBalance` when negative.
    fn debit(&self, balance: &EncryptedBalance, delta: &EncryptedBalance)
        -> Result<EncryptedBalance>;
}

/// Applier for plaintext containers.
#[derive(Clone, Copy, Debug, Default)]
pub struct PlaintextApplier {
    codec: PlaintextCodec,
}

impl PlaintextApplier {
    pub const fn new() -> Self {
        Self {
            codec: PlaintextCodec,
        }
    }
}

impl ConfidentialAmountApplier for PlaintextApplier {
    fn credit(
        &self,
        balance: &EncryptedBalance,
        delta: &EncryptedBalance,
    ) -> Result<EncryptedBalance> {
        let sum = self
            .codec
            .decode(balance)
            .checked_add(self.codec.decode(delta))
            .ok_or(error!(PrivacyError::Overflow))?;
        Ok(self.codec.encode(sum))
    }

    fn debit(
        &self,
        balance: &EncryptedBalance,
        delta: &EncryptedBalance,
    ) -> Result<EncryptedBalance> {
        let remaining = self
            .codec
            .decode(balance)
            .checked_sub(self.codec.decode(delta))
            .ok_or(error!(PrivacyError::InsufficientBalance))?;
        Ok(self.codec.encode(remaining))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn enc(v: u64) -> EncryptedBalance {
        PlaintextCodec.encode(v)
    }

    #[test]
    fn test_credit_and_debit() {
        let applier = PlaintextApplier::new();
        let after_credit = applier.credit(&enc(100), &enc(50)).unwrap();
        assert_eq!(PlaintextCodec.decode(&after_credit), 150);

        let after_debit = applier.debit(&after_credit, &enc(150)).unwrap();
        assert_eq!(PlaintextCodec.decode(&after_debit), 0);
    }

    #[test]
    fn test_debit_below_zero_rejected() {
        let err = PlaintextApplier::new().debit(&enc(10), &enc(11)).unwrap_err();
        assert_eq!(err, PrivacyError::InsufficientBalance.into());
    }

    #[test]
    fn test_credit_overflow_rejected() {
        let err = PlaintextApplier::new().credit(&enc(u64::MAX), &enc(1)).unwrap_err();
        assert_eq!(err, PrivacyError::Overflow.into());
    }

    #[test]
    fn test_zero_delta_is_identity() {
        let applier = PlaintextApplier::new();
        let zero = [0u8; 64];
        assert_eq!(applier.debit(&enc(7), &zero).unwrap(), enc(7));
        assert_eq!(applier.credit(&enc(7), &zero).unwrap(), enc(7));
    }
}
