//! Confidential-amount capabilities for the pSol ledger
//!
//! The ledger state machine never looks inside a balance or a proof. It
//! goes through three seams instead:
//!
//! - [`BalanceCodec`] maps plaintext amounts to the stored container
//! - [`ConfidentialAmountApplier`] adds/subtracts encrypted deltas
//! - [`ProofVerifier`] accepts or rejects opaque proof blobs
//!
//! The shipped implementations keep plaintext in the low 8 bytes of the
//! container. A commitment scheme or a real proof system replaces these
//! types without touching `ledger.rs`.

pub mod amount_applier;
pub mod balance_codec;
pub mod commitment;
pub mod nullifier;
pub mod proof_verifier;

pub use amount_applier::{ConfidentialAmountApplier, PlaintextApplier};
pub use balance_codec::{BalanceCodec, EncryptedBalance, PlaintextCodec};
pub use commitment::balance_commitment;
pub use nullifier::derive_nullifier;
pub use proof_verifier::{ProofContext, ProofKind, ProofVerifier, StructuralVerifier};

#[cfg(any(test, feature = "dev-mode"))]
pub use proof_verifier::AcceptAllVerifier;
