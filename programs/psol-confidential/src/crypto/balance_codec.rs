//! Encrypted balance container and its codec
//!
//! # Layout (plaintext codec)
//! ```text
//! bytes 0..8   u64 balance, little-endian
//! bytes 8..64  zero
//! ```
//! Clients read the balance back with `readBigUInt64LE` on the stored
//! bytes, so this layout is part of the account format.

use crate::constants::ENCRYPTED_BALANCE_LEN;

/// Fixed-width balance container stored in every privacy account.
pub type EncryptedBalance = [u8; ENCRYPTED_BALANCE_LEN];

/// Converts plaintext amounts to and from the stored container.
pub trait BalanceCodec {
    fn encode(&self, value: u64) -> EncryptedBalance;

    fn decode(&self, balance: &EncryptedBalance) -> u64;
}

/// Development codec: the container carries the plaintext amount.
#[derive(Clone, Copy, Debug, Default)]
pub struct PlaintextCodec;

impl BalanceCodec for PlaintextCodec {
    fn encode(&self, value: u64) -> EncryptedBalance {
        let mut out = [0u8; ENCRYPTED_BALANCE_LEN];
        out[..8].copy_from_slice(&value.to_le_bytes());
        out
    }

    fn decode(&self, balance: &EncryptedBalance) -> u64 {
        let mut low = [0u8; 8];
        low.copy_from_slice(&balance[..8]);
        u64::from_le_bytes(low)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_low_bytes_are_little_endian() {
        let encoded = PlaintextCodec.encode(0x0102_0304_0506_0708);
        assert_eq!(&encoded[..8], &[0x08, 0x07, 0x06, 0x05, 0x04, 0x03, 0x02, 0x01]);
        assert!(encoded[8..].iter().all(|&b| b == 0));
    }

    #[test]
    fn test_zero_container_is_zero_balance() {
        assert_eq!(PlaintextCodec.decode(&[0u8; ENCRYPTED_BALANCE_LEN]), 0);
    }

    #[test]
    fn test_decode_ignores_high_bytes() {
        let mut container = PlaintextCodec.encode(42);
        container[63] = 0xFF;
        assert_eq!(PlaintextCodec.decode(&container), 42);
    }
}
