//! Trust-derived voting membership.
//!
//! Voters declare binary trust in other addresses. An address becomes a voter
//! once a majority of the current voter set trusts it, and loses its vote when
//! its trust falls below that majority:
//! 1. **Trust graph**: directed issuer → subject edges, one per ordered pair.
//! 2. **Voter registry**: the materialized voter set, seeded by a genesis voter.
//! 3. **Controller**: validates callers, mutates the graph, and re-evaluates the
//!    single affected subject, emitting audit events.
//!
//! Membership is re-evaluated only for the subject whose incoming edges changed;
//! a flip never cascades to other voters within the same call. Adding trust can
//! only grant a vote and removing trust can only revoke one.

pub mod controller;
pub mod error;
pub mod graph;
pub mod quorum;
pub mod voters;

pub use controller::TrustController;
pub use error::TrustError;
pub use graph::TrustGraph;
pub use quorum::{is_majority, threshold};
pub use voters::{EdgeChange, MembershipChange, VoterRegistry};
