//! Privacy account ledger
//!
//! Host-independent state transitions for opening accounts, deposits,
//! withdrawals and private transfers. Instruction handlers load the
//! records, call into [`Ledger`], then move lamports and emit events.
//!
//! # Atomicity
//! Every operation validates first, then applies its changes to copies of
//! the records it touches, and only assigns the copies back once every
//! step succeeded. A failed call leaves all records exactly as they were.
//!
//! Every successful operation advances the nonce of each account it
//! touches and refreshes that account's balance commitment.
//!
//! # Capabilities
//! Balances are handled through [`BalanceCodec`] and
//! [`ConfidentialAmountApplier`], proofs through [`ProofVerifier`].
//! [`Ledger::program`] is the configuration the on-chain program runs with.

use anchor_lang::prelude::*;

use crate::crypto::{
    BalanceCodec, ConfidentialAmountApplier, EncryptedBalance, PlaintextApplier, PlaintextCodec,
    ProofContext, ProofVerifier,
};
use crate::error::PrivacyError;
use crate::fees::compute_net;
use crate::state::{PoolVault, PrivacyAccount, PrivacyPool, SpentNullifier};

static PLAINTEXT_CODEC: PlaintextCodec = PlaintextCodec;
static PLAINTEXT_APPLIER: PlaintextApplier = PlaintextApplier::new();

#[cfg(not(feature = "dev-mode"))]
static PROGRAM_VERIFIER: crate::crypto::StructuralVerifier = crate::crypto::StructuralVerifier;
#[cfg(feature = "dev-mode")]
static PROGRAM_VERIFIER: crate::crypto::AcceptAllVerifier = crate::crypto::AcceptAllVerifier;

/// Slot and wall-clock time of the operation, read by the caller.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LedgerClock {
    pub slot: u64,
    pub unix_timestamp: i64,
}

impl From<&Clock> for LedgerClock {
    fn from(clock: &Clock) -> Self {
        Self {
            slot: clock.slot,
            unix_timestamp: clock.unix_timestamp,
        }
    }
}

/// Value movement produced by a deposit or withdrawal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Receipt {
    /// Amount requested by the owner
    pub gross: u64,
    /// Amount credited to the ledger (deposit) or paid out (withdraw)
    pub net: u64,
    /// Retained in the vault
    pub fee: u64,
}

#[derive(Clone, Debug)]
pub struct WithdrawRequest<'p> {
    pub caller: Pubkey,
    pub nullifier: [u8; 32],
    pub amount: u64,
    pub proof: &'p [u8],
}

#[derive(Clone, Debug)]
pub struct TransferRequest<'p> {
    pub caller: Pubkey,
    pub encrypted_amount: EncryptedBalance,
    pub proof: &'p [u8],
}

/// Ledger engine bound to a set of capabilities.
#[derive(Clone, Copy)]
pub struct Ledger<'a> {
    codec: &'a dyn BalanceCodec,
    applier: &'a dyn ConfidentialAmountApplier,
    verifier: &'a dyn ProofVerifier,
}

impl Ledger<'static> {
    /// Plaintext balances and the build's configured proof verifier.
    pub fn program() -> Self {
        Ledger::new(&PLAINTEXT_CODEC, &PLAINTEXT_APPLIER, &PROGRAM_VERIFIER)
    }
}

impl<'a> Ledger<'a> {
    pub fn new(
        codec: &'a dyn BalanceCodec,
        applier: &'a dyn ConfidentialAmountApplier,
        verifier: &'a dyn ProofVerifier,
    ) -> Self {
        Self {
            codec,
            applier,
            verifier,
        }
    }

    /// Open `account` for `owner` and count it in the pool.
    ///
    /// Not gated by the pause flag: opening an account moves no value.
    pub fn open_account(
        &self,
        pool_key: &Pubkey,
        pool: &mut PrivacyPool,
        account: &mut PrivacyAccount,
        owner: Pubkey,
        bump: u8,
        clock: LedgerClock,
    ) -> Result<()> {
        let mut next_account = account.clone();
        next_account.open(*pool_key, owner, self.codec.encode(0), bump, clock.slot)?;

        let mut next_pool = pool.clone();
        next_pool.on_account_created()?;

        *account = next_account;
        *pool = next_pool;
        Ok(())
    }

    /// Credit `gross - fee` to the caller's account.
    ///
    /// The vault receives the full `gross`; the fee stays in it.
    #[allow(clippy::too_many_arguments)]
    pub fn deposit(
        &self,
        pool_key: &Pubkey,
        pool: &mut PrivacyPool,
        vault: &mut PoolVault,
        account: &mut PrivacyAccount,
        caller: &Pubkey,
        gross: u64,
        clock: LedgerClock,
    ) -> Result<Receipt> {
        require!(gross > 0, PrivacyError::InvalidAmount);
        pool.require_not_paused()?;
        account.require_owner(caller)?;
        require_keys_eq!(account.pool, *pool_key, PrivacyError::Unauthorized);

        let split = compute_net(gross, pool.deposit_fee_bps)?;

        let mut next_account = account.clone();
        next_account.encrypted_balance = self
            .applier
            .credit(&account.encrypted_balance, &self.codec.encode(split.net))?;
        next_account.record_deposit(split.net)?;
        next_account.advance_nonce(clock.slot)?;
        next_account.refresh_commitment();

        let mut next_vault = vault.clone();
        next_vault.credit(gross)?;
        next_vault.accrue_fee(split.fee)?;

        let mut next_pool = pool.clone();
        next_pool.on_value_locked(i128::from(split.net))?;

        *account = next_account;
        *vault = next_vault;
        *pool = next_pool;

        Ok(Receipt {
            gross,
            net: split.net,
            fee: split.fee,
        })
    }

    /// Debit the full `amount` from the caller's account and release
    /// `amount - fee` from the vault.
    ///
    /// The nullifier marker is written last; any earlier failure leaves
    /// the token unspent.
    #[allow(clippy::too_many_arguments)]
    pub fn withdraw(
        &self,
        pool_key: &Pubkey,
        pool: &mut PrivacyPool,
        vault: &mut PoolVault,
        account: &mut PrivacyAccount,
        marker: &mut SpentNullifier,
        marker_bump: u8,
        request: &WithdrawRequest<'_>,
        clock: LedgerClock,
    ) -> Result<Receipt> {
        let gross = request.amount;

        // ========== VALIDATION ==========

        require!(gross > 0, PrivacyError::InvalidAmount);
        pool.require_not_paused()?;
        account.require_owner(&request.caller)?;
        require_keys_eq!(account.pool, *pool_key, PrivacyError::Unauthorized);
        marker.require_unconsumed()?;

        let next_balance = self
            .applier
            .debit(&account.encrypted_balance, &self.codec.encode(gross))?;

        let context = ProofContext::Withdraw {
            pool: *pool_key,
            owner: account.owner,
            nonce: account.nonce,
            nullifier: request.nullifier,
            amount: gross,
        };
        require!(
            self.verifier.verify(request.proof, &context),
            PrivacyError::InvalidProof
        );

        let split = compute_net(gross, pool.withdraw_fee_bps)?;

        // ========== STAGING ==========

        let mut next_vault = vault.clone();
        next_vault.debit(split.net)?;
        next_vault.accrue_fee(split.fee)?;

        let mut next_pool = pool.clone();
        next_pool.on_value_locked(-i128::from(gross))?;

        let mut next_account = account.clone();
        next_account.encrypted_balance = next_balance;
        next_account.record_withdrawal(gross)?;
        next_account.advance_nonce(clock.slot)?;
        next_account.refresh_commitment();

        let mut next_marker = marker.clone();
        next_marker.consume(
            *pool_key,
            request.nullifier,
            account.owner,
            clock.slot,
            clock.unix_timestamp,
            marker_bump,
        )?;

        // ========== COMMIT ==========

        *vault = next_vault;
        *pool = next_pool;
        *account = next_account;
        *marker = next_marker;

        Ok(Receipt {
            gross,
            net: split.net,
            fee: split.fee,
        })
    }

    /// Move an encrypted amount between two accounts of the same pool.
    ///
    /// Pool totals and the vault are untouched.
    pub fn transfer(
        &self,
        pool_key: &Pubkey,
        pool: &PrivacyPool,
        sender: &mut PrivacyAccount,
        recipient: &mut PrivacyAccount,
        request: &TransferRequest<'_>,
        clock: LedgerClock,
    ) -> Result<()> {
        pool.require_not_paused()?;
        sender.require_owner(&request.caller)?;
        recipient.require_open()?;
        require_keys_eq!(sender.pool, *pool_key, PrivacyError::Unauthorized);
        require_keys_eq!(recipient.pool, *pool_key, PrivacyError::Unauthorized);
        require!(sender.owner != recipient.owner, PrivacyError::SelfTransfer);

        let context = ProofContext::Transfer {
            pool: *pool_key,
            sender: sender.owner,
            recipient: recipient.owner,
            nonce: sender.nonce,
            encrypted_amount: request.encrypted_amount,
        };
        require!(
            self.verifier.verify(request.proof, &context),
            PrivacyError::InvalidProof
        );

        let mut next_sender = sender.clone();
        next_sender.encrypted_balance = self
            .applier
            .debit(&sender.encrypted_balance, &request.encrypted_amount)?;
        next_sender.advance_nonce(clock.slot)?;
        next_sender.refresh_commitment();

        let mut next_recipient = recipient.clone();
        next_recipient.encrypted_balance = self
            .applier
            .credit(&recipient.encrypted_balance, &request.encrypted_amount)?;
        next_recipient.advance_nonce(clock.slot)?;
        next_recipient.refresh_commitment();

        *sender = next_sender;
        *recipient = next_recipient;
        Ok(())
    }
}
