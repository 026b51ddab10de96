//! Trust controller: validates trust requests, mutates the graph and keeps the
//! voter registry in step with it.

use crate::error::TrustError;
use crate::graph::TrustGraph;
use crate::voters::{EdgeChange, MembershipChange, VoterRegistry};
use congress_types::{Address, CongressEvent};

/// Owns the trust graph, the voter registry, and the governed ledger binding.
///
/// Every mutating call validates all preconditions before its first write, so a
/// rejected call leaves the controller untouched.
#[derive(Clone, Debug)]
pub struct TrustController {
    graph: TrustGraph,
    voters: VoterRegistry,
    /// Address of the asset ledger this trust graph governs.
    token: Option<Address>,
}

impl TrustController {
    /// Bootstrap with `genesis` as the sole voter and no ledger bound.
    pub fn new(genesis: Address) -> Self {
        Self {
            graph: TrustGraph::new(),
            voters: VoterRegistry::bootstrap(genesis),
            token: None,
        }
    }

    pub fn graph(&self) -> &TrustGraph {
        &self.graph
    }

    pub fn voters(&self) -> &VoterRegistry {
        &self.voters
    }

    pub fn token(&self) -> Option<Address> {
        self.token
    }

    /// Fail with `NotAVoter` unless `caller` currently holds voting rights.
    pub fn ensure_voter(&self, caller: &Address) -> Result<(), TrustError> {
        if self.voters.is_voter(caller) {
            Ok(())
        } else {
            Err(TrustError::NotAVoter(*caller))
        }
    }

    /// Whether binding `ledger` on behalf of `caller` would succeed.
    pub fn check_set_token(&self, caller: &Address, ledger: &Address) -> Result<(), TrustError> {
        self.ensure_voter(caller)?;
        if let Some(bound) = self.token {
            return Err(TrustError::AlreadyConfigured(bound));
        }
        if ledger.is_zero() {
            return Err(TrustError::InvalidAddress(*ledger));
        }
        Ok(())
    }

    /// Bind the governed asset ledger. Allowed exactly once.
    pub fn set_token(&mut self, caller: &Address, ledger: Address) -> Result<(), TrustError> {
        self.check_set_token(caller, &ledger)?;
        self.token = Some(ledger);
        Ok(())
    }

    /// `caller` declares trust in `subject`.
    ///
    /// Emits `TrustSet`, followed by `VoteGranted` when the new edge lifts the
    /// subject to a majority. The zero address can never be trusted.
    pub fn trust(
        &mut self,
        caller: Address,
        subject: Address,
    ) -> Result<Vec<CongressEvent>, TrustError> {
        self.ensure_callable(&caller)?;
        if subject.is_zero() {
            return Err(TrustError::InvalidAddress(subject));
        }
        let total = self.graph.add_edge(caller, subject)?;
        let mut events = vec![CongressEvent::TrustSet {
            issuer: caller,
            subject,
        }];
        events.extend(self.reevaluate(subject, total, EdgeChange::Added));
        Ok(events)
    }

    /// `caller` withdraws its trust in `subject`.
    ///
    /// Emits `TrustUnset`, followed by `VoteRevoked` when the subject drops
    /// below a majority. Self-untrust fails with `EdgeNotFound` because a
    /// self-edge can never exist.
    pub fn untrust(
        &mut self,
        caller: Address,
        subject: Address,
    ) -> Result<Vec<CongressEvent>, TrustError> {
        self.ensure_callable(&caller)?;
        let total = self.graph.remove_edge(caller, subject)?;
        let mut events = vec![CongressEvent::TrustUnset {
            issuer: caller,
            subject,
        }];
        events.extend(self.reevaluate(subject, total, EdgeChange::Removed));
        Ok(events)
    }

    fn ensure_callable(&self, caller: &Address) -> Result<(), TrustError> {
        if self.token.is_none() {
            return Err(TrustError::TokenNotConfigured);
        }
        self.ensure_voter(caller)
    }

    fn reevaluate(
        &mut self,
        subject: Address,
        total_trust: u32,
        change: EdgeChange,
    ) -> Option<CongressEvent> {
        self.voters
            .reevaluate_membership(subject, total_trust, change)
            .map(|change| match change {
                MembershipChange::Granted => CongressEvent::VoteGranted { voter: subject },
                MembershipChange::Revoked => CongressEvent::VoteRevoked { voter: subject },
            })
    }
}
