//! Pre-built [`tracing::Span`] constructors for Congress operations.
//!
//! Consistent span names and field sets make it easy to filter and correlate
//! one call's log lines, whatever subscriber is installed.

use congress_types::Address;
use tracing::{info_span, Span};

/// Span covering one caller-facing Congress call (`trust`, `untrust`,
/// `set_token`, `mint`).
pub fn call_span(operation: &str, caller: &Address) -> Span {
    info_span!("congress_call", op = %operation, caller = %caller)
}

/// Span covering the replay of a whole call script.
pub fn replay_span(script: &str, calls: usize) -> Span {
    info_span!("replay", script = %script, calls = %calls)
}
