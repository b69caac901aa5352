//! Data Wrappers
//!
//! Typed adapters over the JSON the Tellus server returns.

pub mod tell;
pub mod user;

pub use tell::{Tell, TellData};
pub use user::{TellusUser, UserCache, UserData};
