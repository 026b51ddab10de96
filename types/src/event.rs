//! Audit events emitted by the trust and mint-proposal engines.
//!
//! Events are append-only: once a call commits, its events are never
//! rewritten or removed. They are the only externally observable trail of
//! how voting power and minting decisions evolved.

use crate::{Address, TokenAmount};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event")]
pub enum CongressEvent {
    /// `issuer` declared trust in `subject`.
    TrustSet { issuer: Address, subject: Address },
    /// `issuer` withdrew its trust in `subject`.
    TrustUnset { issuer: Address, subject: Address },
    /// `voter` gained voting rights.
    VoteGranted { voter: Address },
    /// `voter` lost voting rights.
    VoteRevoked { voter: Address },
    /// A mint proposal was opened.
    MintProposalAdded {
        to: Address,
        amount: TokenAmount,
        batch_code: String,
    },
    /// A voter backed a mint proposal.
    MintProposalVoted {
        voter: Address,
        to: Address,
        amount: TokenAmount,
        batch_code: String,
    },
    /// A mint proposal reached quorum and was executed.
    MintProposalExecuted {
        to: Address,
        amount: TokenAmount,
        batch_code: String,
    },
}

impl CongressEvent {
    /// Event name as it appears in the audit log.
    pub fn name(&self) -> &'static str {
        match self {
            Self::TrustSet { .. } => "TrustSet",
            Self::TrustUnset { .. } => "TrustUnset",
            Self::VoteGranted { .. } => "VoteGranted",
            Self::VoteRevoked { .. } => "VoteRevoked",
            Self::MintProposalAdded { .. } => "MintProposalAdded",
            Self::MintProposalVoted { .. } => "MintProposalVoted",
            Self::MintProposalExecuted { .. } => "MintProposalExecuted",
        }
    }
}
