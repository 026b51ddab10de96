//! Fundamental types for Congress.
//!
//! This crate defines the core types shared across every other crate in the workspace:
//! participant addresses, token amounts, and the audit events emitted by the
//! trust and mint-proposal engines.

pub mod address;
pub mod amount;
pub mod error;
pub mod event;

pub use address::Address;
pub use amount::TokenAmount;
pub use error::TypesError;
pub use event::CongressEvent;
