//! Unified error types for the pSol confidential ledger
//!
//! Error codes are stable across versions for client compatibility.
//! Every variant is terminal: the caller has to change an input before
//! resubmitting.

use anchor_lang::prelude::*;

#[error_code]
pub enum PrivacyError {
    // ========== Lifecycle Errors ==========

    /// Pool record already holds an initialized pool
    #[msg("Privacy pool is already initialized")]
    AlreadyInitialized, // 6000

    /// Owner already has a privacy account in this pool
    #[msg("Privacy account already exists for this owner")]
    DuplicateAccount, // 6001

    /// Target privacy account has never been opened
    #[msg("Privacy account is not open")]
    AccountNotOpen, // 6002

    // ========== Authorization Errors ==========

    /// Signer is not the account owner or pool authority
    #[msg("Unauthorized: signer does not control this record")]
    Unauthorized, // 6003

    /// Pool is paused
    #[msg("Pool is paused")]
    PoolPaused, // 6004

    // ========== Balance Errors ==========

    /// Amount must be greater than zero
    #[msg("Invalid amount: must be greater than zero")]
    InvalidAmount, // 6005

    /// Withdrawal or transfer exceeds the account balance
    #[msg("Insufficient balance in privacy account")]
    InsufficientBalance, // 6006

    /// Vault bookkeeping cannot cover the payout
    #[msg("Insufficient funds in pool vault")]
    InsufficientFunds, // 6007

    /// Arithmetic overflow occurred
    #[msg("Arithmetic overflow")]
    Overflow, // 6008

    /// Fee rate above 10_000 basis points
    #[msg("Fee basis points too high")]
    FeeTooHigh, // 6009

    // ========== Nullifier / Proof Errors ==========

    /// Nullifier token has already been consumed (replay attempt)
    #[msg("Nullifier already used")]
    NullifierAlreadyUsed, // 6010

    /// Proof rejected by the configured verifier
    #[msg("Invalid proof")]
    InvalidProof, // 6011

    // ========== Address / Routing Errors ==========

    /// No bump in 0..=255 yields an off-curve address
    #[msg("Unable to derive a program address for these seeds")]
    AddressExhausted, // 6012

    /// Withdrawal recipient cannot be the vault itself
    #[msg("Recipient cannot be the pool vault")]
    InvalidRecipient, // 6013

    /// Sender and recipient privacy accounts are the same record
    #[msg("Cannot transfer to the same privacy account")]
    SelfTransfer, // 6014
}
