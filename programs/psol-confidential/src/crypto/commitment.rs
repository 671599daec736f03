//! Per-account balance commitment
//!
//! ```text
//! commitment = sha256("commitment" || owner || encrypted_balance || nonce_le)
//! ```
//!
//! Binds the current balance container to its owner and nonce. Every
//! successful balance change moves the nonce, so each state of an account
//! gets a distinct commitment that clients can check off-chain.

use anchor_lang::prelude::Pubkey;
use solana_program::hash::hashv;

use super::balance_codec::EncryptedBalance;
use crate::constants::COMMITMENT_SEED;

pub fn balance_commitment(owner: &Pubkey, balance: &EncryptedBalance, nonce: u64) -> [u8; 32] {
    hashv(&[
        COMMITMENT_SEED,
        owner.as_ref(),
        balance.as_ref(),
        &nonce.to_le_bytes(),
    ])
    .to_bytes()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_commitment_is_deterministic() {
        let owner = Pubkey::new_unique();
        let balance = [3u8; 64];
        assert_eq!(
            balance_commitment(&owner, &balance, 1),
            balance_commitment(&owner, &balance, 1)
        );
    }

    #[test]
    fn test_every_input_is_bound() {
        let owner = Pubkey::new_unique();
        let base = balance_commitment(&owner, &[0u8; 64], 0);
        assert_ne!(base, balance_commitment(&Pubkey::new_unique(), &[0u8; 64], 0));
        assert_ne!(base, balance_commitment(&owner, &[1u8; 64], 0));
        assert_ne!(base, balance_commitment(&owner, &[0u8; 64], 1));
    }

    #[test]
    fn test_separate_from_nullifier_domain() {
        let owner = Pubkey::new_unique();
        let token = super::super::derive_nullifier(&owner, 0);
        assert_ne!(balance_commitment(&owner, &[0u8; 64], 0), token);
    }
}
