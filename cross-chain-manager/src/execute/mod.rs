//! Execute handlers for the cross-chain manager.
//!
//! - `consensus` - genesis installation and peer set rotation
//! - `outbound` - registering messages for the relay chain
//! - `inbound` - proving and dispatching messages from the relay chain

mod consensus;
mod inbound;
mod outbound;

pub use consensus::*;
pub use inbound::*;
pub use outbound::*;
