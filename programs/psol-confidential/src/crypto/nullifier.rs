//! Client-side nullifier derivation
//!
//! Any 32-byte value works as a nullifier token. This helper binds the
//! token to the owner and the account nonce, so a client gets a fresh
//! token per withdrawal without keeping extra state:
//! ```text
//! token = sha256("nullifier" || owner || nonce_le)
//! ```

use anchor_lang::prelude::Pubkey;
use solana_program::hash::hashv;

use crate::constants::NULLIFIER_SEED;

pub fn derive_nullifier(owner: &Pubkey, nonce: u64) -> [u8; 32] {
    hashv(&[NULLIFIER_SEED, owner.as_ref(), &nonce.to_le_bytes()]).to_bytes()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nullifier_is_deterministic() {
        let owner = Pubkey::new_unique();
        assert_eq!(derive_nullifier(&owner, 1), derive_nullifier(&owner, 1));
    }

    #[test]
    fn test_nonce_changes_token() {
        let owner = Pubkey::new_unique();
        assert_ne!(derive_nullifier(&owner, 1), derive_nullifier(&owner, 2));
    }

    #[test]
    fn test_owner_changes_token() {
        let a = Pubkey::new_unique();
        let b = Pubkey::new_unique();
        assert_ne!(derive_nullifier(&a, 0), derive_nullifier(&b, 0));
    }
}
