//! Admin Instructions for the pSol confidential pool

pub mod pause;
pub mod set_fees;
pub mod unpause;

pub use pause::*;
pub use set_fees::*;
pub use unpause::*;
