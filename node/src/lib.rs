//! Congress: trust-gated voting and quorum-approved minting.
//!
//! The node crate wires the engines together behind the [`Congress`] facade:
//! - Voters declare trust; majority trust grants and withdraws voting rights
//! - Voters propose and back mints; a majority executes the mint exactly once
//! - The governed asset ledger performs the mint, all-or-nothing
//! - Every committed call is logged, returned as a receipt, and fanned out
//!
//! It also carries the ambient pieces a running instance needs: TOML
//! configuration, structured logging, and tracing spans.

pub mod config;
pub mod congress;
pub mod error;
pub mod event;
pub mod logging;
pub mod tracing_spans;

pub use config::CongressConfig;
pub use congress::Congress;
pub use error::CongressError;
pub use event::{CongressRecord, EventBus};
pub use logging::{init_logging, LogFormat};
