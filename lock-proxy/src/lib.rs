//! Poly Lock Proxy Contract
//!
//! Outbound, `Lock` moves the caller's tokens into this contract's escrow and
//! asks the cross-chain manager to deliver an `unlock` to the proxy bound for
//! the destination chain. Inbound, the manager calls `Unlock` once the message
//! is proven, and the escrow pays out to the recipient.
//!
//! Remote proxies and assets are identified by the bytes the remote chain uses
//! for them; both tables are maintained by the owner.

pub mod contract;
pub mod error;
pub mod execute;
pub mod msg;
pub mod query;
pub mod state;

pub use crate::error::ContractError;
