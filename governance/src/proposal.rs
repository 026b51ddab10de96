//! Mint proposals and their lifecycle.

use congress_types::{Address, TokenAmount};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Identity of a mint proposal: its exact parameters.
///
/// Two requests with the same recipient, amount, and batch code are the same
/// proposal; there is no separate proposal id.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ProposalKey {
    pub to: Address,
    pub amount: TokenAmount,
    pub batch_code: String,
}

impl ProposalKey {
    pub fn new(to: Address, amount: TokenAmount, batch_code: impl Into<String>) -> Self {
        Self {
            to,
            amount,
            batch_code: batch_code.into(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProposalStatus {
    /// Collecting votes.
    Pending,
    /// Quorum reached and the mint performed. Terminal.
    Executed,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MintProposal {
    pub key: ProposalKey,
    /// Voters who backed the proposal. Votes stay counted even if the voter
    /// later loses voting rights.
    pub votes: BTreeSet<Address>,
    pub status: ProposalStatus,
}

impl MintProposal {
    pub fn new(key: ProposalKey) -> Self {
        Self {
            key,
            votes: BTreeSet::new(),
            status: ProposalStatus::Pending,
        }
    }

    pub fn vote_count(&self) -> u32 {
        self.votes.len() as u32
    }

    pub fn is_executed(&self) -> bool {
        self.status == ProposalStatus::Executed
    }
}
