//! Mint governance for Congress.
//!
//! Minting the governed asset is the one privileged action. Any current voter
//! may propose a mint; identical `(to, amount, batch_code)` requests are the
//! same proposal. Once a majority of the *current* voter set has backed it, the
//! mint executes exactly once, as the last step of the call that crossed the
//! threshold.

pub mod error;
pub mod executor;
pub mod proposal;
pub mod proposals;

pub use error::GovernanceError;
pub use executor::MintExecutor;
pub use proposal::{MintProposal, ProposalKey, ProposalStatus};
pub use proposals::MintProposalLedger;
