//! Spent nullifier markers using the per-nullifier PDA pattern
//!
//! Each consumed token gets its own account, so "is this token spent?"
//! is an O(1) existence check and the set grows without a capacity limit.
//!
//! # Anti-Replay Mechanism
//! 1. Client picks a fresh 32-byte token for each withdrawal
//! 2. Program derives the marker PDA from the token
//! 3. Marker already consumed → reject with `NullifierAlreadyUsed`
//! 4. Otherwise the withdrawal runs and consumes the marker as its last step
//!
//! Markers are never closed, so the set is append-only.

use anchor_lang::prelude::*;

use crate::error::PrivacyError;

/// Spent nullifier marker account.
///
/// PDA Seeds: `[b"nullifier", nullifier.as_ref()]`
#[account]
#[derive(Default, Debug, PartialEq, Eq)]
pub struct SpentNullifier {
    /// Pool the token was spent in; default while unconsumed
    pub pool: Pubkey,

    /// The consumed token
    pub nullifier: [u8; 32],

    /// Account owner that consumed it
    pub owner: Pubkey,

    /// Slot number when consumed (for indexing)
    pub spent_slot: u64,

    /// Unix timestamp when consumed
    pub spent_at: i64,

    /// PDA bump seed
    pub bump: u8,
}

impl SpentNullifier {
    /// Account space (minimal to reduce rent costs)
    pub const LEN: usize = 8 // discriminator
        + 32                 // pool
        + 32                 // nullifier
        + 32                 // owner
        + 8                  // spent_slot
        + 8                  // spent_at
        + 1;                 // bump

    pub fn is_consumed(&self) -> bool {
        self.pool != Pubkey::default()
    }

    pub fn require_unconsumed(&self) -> Result<()> {
        require!(!self.is_consumed(), PrivacyError::NullifierAlreadyUsed);
        Ok(())
    }

    /// Mark the token as spent. Check and write happen in one call.
    pub fn consume(
        &mut self,
        pool: Pubkey,
        nullifier: [u8; 32],
        owner: Pubkey,
        spent_slot: u64,
        spent_at: i64,
        bump: u8,
    ) -> Result<()> {
        self.require_unconsumed()?;
        require!(pool != Pubkey::default(), PrivacyError::Unauthorized);

        self.pool = pool;
        self.nullifier = nullifier;
        self.owner = owner;
        self.spent_slot = spent_slot;
        self.spent_at = spent_at;
        self.bump = bump;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_consume_once() {
        let pool = Pubkey::new_unique();
        let mut marker = SpentNullifier::default();
        assert!(!marker.is_consumed());

        marker
            .consume(pool, [1u8; 32], Pubkey::new_unique(), 5, 1_700_000_000, 253)
            .unwrap();
        assert!(marker.is_consumed());

        let snapshot = marker.clone();
        let err = marker
            .consume(pool, [1u8; 32], Pubkey::new_unique(), 6, 1_700_000_001, 253)
            .unwrap_err();
        assert_eq!(err, PrivacyError::NullifierAlreadyUsed.into());
        assert_eq!(marker, snapshot);
    }

    #[test]
    fn test_nullifier_size() {
        assert_eq!(SpentNullifier::LEN, 8 + 32 * 3 + 8 + 8 + 1);
    }
}
