//! Protocol constants for the pSol confidential ledger

/// Seed for the singleton pool record.
pub const POOL_SEED: &[u8] = b"privacy_pool";

/// Seed prefix for the pool vault, followed by the pool address.
pub const VAULT_SEED: &[u8] = b"vault";

/// Seed prefix for per-owner privacy accounts, followed by the owner.
pub const PRIVACY_ACCOUNT_SEED: &[u8] = b"privacy_account";

/// Seed prefix for spent nullifier markers, followed by the token.
pub const NULLIFIER_SEED: &[u8] = b"nullifier";

/// 1 bps = 1/10_000
pub const BPS_DENOMINATOR: u64 = 10_000;

/// Upper bound for any configured fee rate (100%).
pub const MAX_FEE_BPS: u16 = 10_000;

/// 0.10%
pub const DEFAULT_DEPOSIT_FEE_BPS: u16 = 10;

/// 0.10%
pub const DEFAULT_WITHDRAW_FEE_BPS: u16 = 10;

/// Width of the encrypted balance container.
pub const ENCRYPTED_BALANCE_LEN: usize = 64;

/// Seed prefix for per-account balance commitments.
pub const COMMITMENT_SEED: &[u8] = b"commitment";

/// Smallest proof blob accepted by the structural verifier.
pub const MIN_PROOF_LEN: usize = 32;

/// Largest proof blob accepted by the structural verifier.
pub const MAX_PROOF_LEN: usize = 512;
