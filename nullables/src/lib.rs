//! Nullable infrastructure for deterministic testing.
//!
//! Collaborators outside Congress (the governed asset ledger) sit behind
//! traits. This crate provides test-friendly implementations that:
//! - Return deterministic values
//! - Can be controlled programmatically
//! - Record every call for later inspection
//!
//! Usage: swap real implementations for nullables in tests.

pub mod ledger;

pub use ledger::{NullLedger, RecordedMint};
