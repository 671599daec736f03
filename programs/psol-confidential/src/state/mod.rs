//! State account definitions for the pSol confidential ledger

pub mod pool_vault;
pub mod privacy_account;
pub mod privacy_pool;
pub mod spent_nullifier;

pub use pool_vault::PoolVault;
pub use privacy_account::PrivacyAccount;
pub use privacy_pool::PrivacyPool;
pub use spent_nullifier::SpentNullifier;
