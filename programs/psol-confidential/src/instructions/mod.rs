//! Instruction handlers for the pSol confidential ledger

pub mod admin;
pub mod deposit;
pub mod init_privacy_account;
pub mod initialize_pool;
pub mod private_transfer;
pub mod withdraw;

pub use admin::*;
pub use deposit::*;
pub use init_privacy_account::*;
pub use initialize_pool::*;
pub use private_transfer::*;
pub use withdraw::*;
