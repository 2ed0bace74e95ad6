//! Execute handlers for the lock proxy.
//!
//! - `admin` - ownership, manager and binding tables
//! - `transfer` - Lock and Unlock

mod admin;
mod transfer;

pub use admin::*;
pub use transfer::*;
