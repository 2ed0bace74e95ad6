//! Poly Token Contract
//!
//! A cw20-compatible fungible token ledger. The owner may bind a lock proxy,
//! which is then allowed to move balances in and out of its escrow without an
//! allowance. The initial supply can be minted straight into that escrow so
//! the token starts out fully backed by the remote chain.
//!
//! Instantiated with `cross_chain`, the token instead acts as its own lock
//! proxy: `Lock` escrows into the contract and `Unlock` pays out of it.

pub mod contract;
pub mod cross_chain;
pub mod error;
pub mod ledger;
pub mod msg;
pub mod query;
pub mod state;

pub use crate::error::ContractError;
