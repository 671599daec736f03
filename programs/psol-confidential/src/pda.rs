//! Program derived addresses for every ledger record
//!
//! All addresses are derivable offline from the program id and the seeds
//! below, so clients never need an on-chain lookup before first use.
//!
//! | Record           | Seeds                              |
//! |------------------|------------------------------------|
//! | `PrivacyPool`    | `["privacy_pool"]`                 |
//! | `PoolVault`      | `["vault", pool]`                  |
//! | `PrivacyAccount` | `["privacy_account", owner]`       |
//! | `SpentNullifier` | `["nullifier", token]`             |
//!
//! A derived address is never on the ed25519 curve, so nobody holds a
//! private key for it and only this program can sign for it.

use anchor_lang::prelude::*;

use crate::constants::{NULLIFIER_SEED, POOL_SEED, PRIVACY_ACCOUNT_SEED, VAULT_SEED};
use crate::error::PrivacyError;

/// Derive the address and bump for `seeds` under `program_id`.
///
/// Fails with `AddressExhausted` when no bump produces an off-curve point.
pub fn derive_address(program_id: &Pubkey, seeds: &[&[u8]]) -> Result<(Pubkey, u8)> {
    Pubkey::try_find_program_address(seeds, program_id)
        .ok_or(error!(PrivacyError::AddressExhausted))
}

pub fn pool_address(program_id: &Pubkey) -> Result<(Pubkey, u8)> {
    derive_address(program_id, &[POOL_SEED])
}

pub fn vault_address(program_id: &Pubkey, pool: &Pubkey) -> Result<(Pubkey, u8)> {
    derive_address(program_id, &[VAULT_SEED, pool.as_ref()])
}

pub fn privacy_account_address(program_id: &Pubkey, owner: &Pubkey) -> Result<(Pubkey, u8)> {
    derive_address(program_id, &[PRIVACY_ACCOUNT_SEED, owner.as_ref()])
}

pub fn nullifier_address(program_id: &Pubkey, token: &[u8; 32]) -> Result<(Pubkey, u8)> {
    derive_address(program_id, &[NULLIFIER_SEED, token.as_ref()])
}
