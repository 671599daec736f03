//! Proof verification seam
//!
//! Proofs are opaque blobs. The ledger builds a [`ProofContext`] holding
//! the public values the proof must be bound to and asks the configured
//! [`ProofVerifier`] for a yes/no answer.
//!
//! # Shipped verifiers
//! - [`StructuralVerifier`]: program default. Checks the blob shape only.
//! - [`AcceptAllVerifier`]: `cfg(test)` / `dev-mode` builds only.

use anchor_lang::prelude::*;

use super::balance_codec::EncryptedBalance;
use crate::constants::{MAX_PROOF_LEN, MIN_PROOF_LEN};

/// Which operation a proof authorizes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProofKind {
    Withdraw,
    Transfer,
}

/// Public values a proof is checked against.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ProofContext {
    Withdraw {
        pool: Pubkey,
        owner: Pubkey,
        /// Account nonce before the withdrawal
        nonce: u64,
        nullifier: [u8; 32],
        amount: u64,
    },
    Transfer {
        pool: Pubkey,
        sender: Pubkey,
        recipient: Pubkey,
        /// Sender nonce before the transfer
        nonce: u64,
        encrypted_amount: EncryptedBalance,
    },
}

impl ProofContext {
    pub fn kind(&self) -> ProofKind {
        match self {
            ProofContext::Withdraw { .. } => ProofKind::Withdraw,
            ProofContext::Transfer { .. } => ProofKind::Transfer,
        }
    }
}

pub trait ProofVerifier {
    fn verify(&self, proof: &[u8], context: &ProofContext) -> bool;
}

/// Accepts any blob of `MIN_PROOF_LEN..=MAX_PROOF_LEN` bytes without
/// reading it.
///
/// Clients currently submit zero-filled 32-byte placeholders, so content
/// is not inspected. An empty blob is never a proof. Replace with a pairing-based verifier when a circuit exists.
#[derive(Clone, Copy, Debug, Default)]
pub struct StructuralVerifier;

impl ProofVerifier for StructuralVerifier {
    fn verify(&self, proof: &[u8], _context: &ProofContext) -> bool {
        (MIN_PROOF_LEN..=MAX_PROOF_LEN).contains(&proof.len())
    }
}

/// Accepts everything. Never compiled into production builds.
#[cfg(any(test, feature = "dev-mode"))]
#[derive(Clone, Copy, Debug, Default)]
pub struct AcceptAllVerifier;

#[cfg(any(test, feature = "dev-mode"))]
impl ProofVerifier for AcceptAllVerifier {
    fn verify(&self, _proof: &[u8], _context: &ProofContext) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn withdraw_context() -> ProofContext {
        ProofContext::Withdraw {
            pool: Pubkey::new_unique(),
            owner: Pubkey::new_unique(),
            nonce: 3,
            nullifier: [1u8; 32],
            amount: 500,
        }
    }

    #[test]
    fn test_placeholder_proof_accepted() {
        let ctx = withdraw_context();
        assert!(StructuralVerifier.verify(&[0u8; MIN_PROOF_LEN], &ctx));
        assert!(StructuralVerifier.verify(&[0u8; MAX_PROOF_LEN], &ctx));
    }

    #[test]
    fn test_short_proof_rejected() {
        let ctx = withdraw_context();
        assert!(!StructuralVerifier.verify(&[], &ctx));
        assert!(!StructuralVerifier.verify(&[0u8; MIN_PROOF_LEN - 1], &ctx));
        assert!(AcceptAllVerifier.verify(&[], &ctx));
    }

    #[test]
    fn test_oversized_proof_rejected() {
        let ctx = withdraw_context();
        assert!(!StructuralVerifier.verify(&[0u8; MAX_PROOF_LEN + 1], &ctx));
        assert!(AcceptAllVerifier.verify(&[0u8; MAX_PROOF_LEN + 1], &ctx));
    }

    #[test]
    fn test_context_kind() {
        assert_eq!(withdraw_context().kind(), ProofKind::Withdraw);
        let transfer = ProofContext::Transfer {
            pool: Pubkey::new_unique(),
            sender: Pubkey::new_unique(),
            recipient: Pubkey::new_unique(),
            nonce: 0,
            encrypted_amount: [0u8; 64],
        };
        assert_eq!(transfer.kind(), ProofKind::Transfer);
    }
}
