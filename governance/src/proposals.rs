//! Mint proposal ledger: records votes and executes proposals at quorum.

use crate::error::GovernanceError;
use crate::executor::MintExecutor;
use crate::proposal::{MintProposal, ProposalKey, ProposalStatus};
use congress_trust::{quorum, VoterRegistry};
use congress_types::{Address, CongressEvent, TokenAmount};
use std::collections::HashMap;

/// All mint proposals, pending and executed, keyed by their parameters.
#[derive(Clone, Debug, Default)]
pub struct MintProposalLedger {
    proposals: HashMap<ProposalKey, MintProposal>,
}

impl MintProposalLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open the proposal `(to, amount, batch_code)` if needed and record
    /// `caller`'s vote on it.
    ///
    /// When the vote brings the proposal to a majority of `voters`, the mint
    /// is handed to `executor` before anything is recorded; if the executor
    /// fails, the proposal ledger is left exactly as it was.
    ///
    /// Voting on an executed proposal, or voting twice, is accepted and does
    /// nothing.
    pub fn propose_or_vote<E>(
        &mut self,
        caller: Address,
        to: Address,
        amount: TokenAmount,
        batch_code: &str,
        voters: &VoterRegistry,
        executor: &mut E,
    ) -> Result<Vec<CongressEvent>, GovernanceError>
    where
        E: MintExecutor + ?Sized,
    {
        if !voters.is_voter(&caller) {
            return Err(GovernanceError::NotAVoter(caller));
        }
        if amount.is_zero() {
            return Err(GovernanceError::InvalidAmount);
        }

        let key = ProposalKey::new(to, amount, batch_code);
        let (created, votes_after) = match self.proposals.get(&key) {
            Some(proposal) if proposal.is_executed() => {
                tracing::debug!(%to, %amount, batch_code, "vote on executed proposal ignored");
                return Ok(Vec::new());
            }
            Some(proposal) if proposal.votes.contains(&caller) => {
                tracing::debug!(%caller, batch_code, "repeat vote ignored");
                return Ok(Vec::new());
            }
            Some(proposal) => (false, proposal.vote_count() + 1),
            None => (true, 1),
        };

        let executes = quorum::is_majority(votes_after, voters.count());
        if executes {
            executor.execute_mint(&to, amount)?;
        }

        let proposal = self
            .proposals
            .entry(key)
            .or_insert_with_key(|key| MintProposal::new(key.clone()));
        proposal.votes.insert(caller);

        let mut events = Vec::with_capacity(3);
        if created {
            events.push(CongressEvent::MintProposalAdded {
                to,
                amount,
                batch_code: batch_code.to_string(),
            });
        }
        events.push(CongressEvent::MintProposalVoted {
            voter: caller,
            to,
            amount,
            batch_code: batch_code.to_string(),
        });
        if executes {
            proposal.status = ProposalStatus::Executed;
            tracing::debug!(
                %to,
                %amount,
                batch_code,
                votes = votes_after,
                "mint proposal executed"
            );
            events.push(CongressEvent::MintProposalExecuted {
                to,
                amount,
                batch_code: batch_code.to_string(),
            });
        }
        Ok(events)
    }

    pub fn proposal(&self, key: &ProposalKey) -> Option<&MintProposal> {
        self.proposals.get(key)
    }

    /// Proposals still collecting votes, ordered by key.
    pub fn pending(&self) -> Vec<&MintProposal> {
        let mut pending: Vec<&MintProposal> = self
            .proposals
            .values()
            .filter(|p| !p.is_executed())
            .collect();
        pending.sort_by(|a, b| a.key.cmp(&b.key));
        pending
    }

    pub fn executed_count(&self) -> usize {
        self.proposals.values().filter(|p| p.is_executed()).count()
    }

    pub fn len(&self) -> usize {
        self.proposals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.proposals.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use congress_trust::EdgeChange;

    fn addr(n: u8) -> Address {
        Address::new([n; 20])
    }

    /// Executor that records every mint it performs.
    #[derive(Default)]
    struct Recorder {
        mints: Vec<(Address, TokenAmount)>,
    }

    impl MintExecutor for Recorder {
        fn execute_mint(
            &mut self,
            to: &Address,
            amount: TokenAmount,
        ) -> Result<(), GovernanceError> {
            self.mints.push((*to, amount));
            Ok(())
        }
    }

    /// Registry with voters 0..n, grown through the normal re-evaluation rule.
    fn registry(n: u8) -> VoterRegistry {
        let mut registry = VoterRegistry::bootstrap(addr(0));
        for i in 1..n {
            let needed = quorum::threshold(registry.count());
            registry.reevaluate_membership(addr(i), needed, EdgeChange::Added);
        }
        assert_eq!(registry.count(), n as u32);
        registry
    }

    fn names(events: &[CongressEvent]) -> Vec<&'static str> {
        events.iter().map(CongressEvent::name).collect()
    }

    #[test]
    fn single_voter_executes_immediately() {
        let voters = registry(1);
        let mut ledger = MintProposalLedger::new();
        let mut exec = Recorder::default();

        let events = ledger
            .propose_or_vote(addr(0), addr(9), TokenAmount::new(100), "batch1", &voters, &mut exec)
            .unwrap();

        assert_eq!(
            names(&events),
            vec!["MintProposalAdded", "MintProposalVoted", "MintProposalExecuted"]
        );
        assert_eq!(exec.mints, vec![(addr(9), TokenAmount::new(100))]);
        let key = ProposalKey::new(addr(9), TokenAmount::new(100), "batch1");
        assert!(ledger.proposal(&key).unwrap().is_executed());
    }

    #[test]
    fn executed_proposal_is_not_re_executed() {
        let voters = registry(1);
        let mut ledger = MintProposalLedger::new();
        let mut exec = Recorder::default();
        ledger
            .propose_or_vote(addr(0), addr(9), TokenAmount::new(100), "batch1", &voters, &mut exec)
            .unwrap();

        let events = ledger
            .propose_or_vote(addr(0), addr(9), TokenAmount::new(100), "batch1", &voters, &mut exec)
            .unwrap();
        assert!(events.is_empty());
        assert_eq!(exec.mints.len(), 1);
        assert_eq!(ledger.len(), 1);
    }

    #[test]
    fn majority_of_three_needs_two_votes() {
        let voters = registry(3);
        let mut ledger = MintProposalLedger::new();
        let mut exec = Recorder::default();

        let events = ledger
            .propose_or_vote(addr(0), addr(9), TokenAmount::new(5), "b", &voters, &mut exec)
            .unwrap();
        assert_eq!(names(&events), vec!["MintProposalAdded", "MintProposalVoted"]);
        assert!(exec.mints.is_empty());
        assert_eq!(ledger.pending().len(), 1);

        let events = ledger
            .propose_or_vote(addr(2), addr(9), TokenAmount::new(5), "b", &voters, &mut exec)
            .unwrap();
        assert_eq!(names(&events), vec!["MintProposalVoted", "MintProposalExecuted"]);
        assert_eq!(exec.mints.len(), 1);
        assert!(ledger.pending().is_empty());
        assert_eq!(ledger.executed_count(), 1);
    }

    #[test]
    fn repeat_vote_is_idempotent() {
        let voters = registry(3);
        let mut ledger = MintProposalLedger::new();
        let mut exec = Recorder::default();
        ledger
            .propose_or_vote(addr(1), addr(9), TokenAmount::new(5), "b", &voters, &mut exec)
            .unwrap();
        let events = ledger
            .propose_or_vote(addr(1), addr(9), TokenAmount::new(5), "b", &voters, &mut exec)
            .unwrap();
        assert!(events.is_empty());
        let key = ProposalKey::new(addr(9), TokenAmount::new(5), "b");
        assert_eq!(ledger.proposal(&key).unwrap().vote_count(), 1);
        assert!(exec.mints.is_empty());
    }

    #[test]
    fn different_parameters_are_different_proposals() {
        let voters = registry(3);
        let mut ledger = MintProposalLedger::new();
        let mut exec = Recorder::default();
        ledger
            .propose_or_vote(addr(0), addr(9), TokenAmount::new(5), "a", &voters, &mut exec)
            .unwrap();
        ledger
            .propose_or_vote(addr(1), addr(9), TokenAmount::new(5), "b", &voters, &mut exec)
            .unwrap();
        ledger
            .propose_or_vote(addr(2), addr(9), TokenAmount::new(6), "a", &voters, &mut exec)
            .unwrap();
        assert_eq!(ledger.len(), 3);
        assert!(exec.mints.is_empty());
    }

    #[test]
    fn non_voter_rejected() {
        let voters = registry(1);
        let mut ledger = MintProposalLedger::new();
        let mut exec = Recorder::default();
        let result = ledger.propose_or_vote(
            addr(1),
            addr(0),
            TokenAmount::new(1),
            "big brother batch",
            &voters,
            &mut exec,
        );
        assert_eq!(result, Err(GovernanceError::NotAVoter(addr(1))));
        assert!(ledger.is_empty());
    }

    #[test]
    fn zero_amount_rejected() {
        let voters = registry(1);
        let mut ledger = MintProposalLedger::new();
        let mut exec = Recorder::default();
        let result =
            ledger.propose_or_vote(addr(0), addr(9), TokenAmount::ZERO, "b", &voters, &mut exec);
        assert_eq!(result, Err(GovernanceError::InvalidAmount));
        assert!(ledger.is_empty());
    }

    #[test]
    fn failed_execution_leaves_no_trace() {
        let voters = registry(1);
        let mut ledger = MintProposalLedger::new();
        let mut failing = |_: &Address, _: TokenAmount| -> Result<(), GovernanceError> {
            Err(GovernanceError::Execution("ledger rejected mint".into()))
        };
        let result = ledger.propose_or_vote(
            addr(0),
            addr(9),
            TokenAmount::new(5),
            "b",
            &voters,
            &mut failing,
        );
        assert_eq!(
            result,
            Err(GovernanceError::Execution("ledger rejected mint".into()))
        );
        assert!(ledger.is_empty());
    }

    #[test]
    fn failed_execution_keeps_earlier_votes_only() {
        let voters = registry(3);
        let mut ledger = MintProposalLedger::new();
        let mut exec = Recorder::default();
        ledger
            .propose_or_vote(addr(0), addr(9), TokenAmount::new(5), "b", &voters, &mut exec)
            .unwrap();

        let mut failing = |_: &Address, _: TokenAmount| -> Result<(), GovernanceError> {
            Err(GovernanceError::Execution("boom".into()))
        };
        assert!(ledger
            .propose_or_vote(addr(1), addr(9), TokenAmount::new(5), "b", &voters, &mut failing)
            .is_err());

        let key = ProposalKey::new(addr(9), TokenAmount::new(5), "b");
        let proposal = ledger.proposal(&key).unwrap();
        assert_eq!(proposal.votes.iter().copied().collect::<Vec<_>>(), vec![addr(0)]);
        assert_eq!(proposal.status, ProposalStatus::Pending);

        // A retry through a working ledger completes normally.
        let events = ledger
            .propose_or_vote(addr(1), addr(9), TokenAmount::new(5), "b", &voters, &mut exec)
            .unwrap();
        assert_eq!(names(&events), vec!["MintProposalVoted", "MintProposalExecuted"]);
    }

    #[test]
    fn votes_measured_against_current_voter_count() {
        let mut voters = registry(2);
        let mut ledger = MintProposalLedger::new();
        let mut exec = Recorder::default();
        ledger
            .propose_or_vote(addr(1), addr(9), TokenAmount::new(5), "b", &voters, &mut exec)
            .unwrap();
        assert!(exec.mints.is_empty());

        // addr(1) loses its seat; its vote still counts, and one more vote
        // out of a single remaining voter is already a majority.
        voters.reevaluate_membership(addr(1), 0, EdgeChange::Removed);
        let events = ledger
            .propose_or_vote(addr(0), addr(9), TokenAmount::new(5), "b", &voters, &mut exec)
            .unwrap();
        assert_eq!(names(&events), vec!["MintProposalVoted", "MintProposalExecuted"]);
        assert_eq!(exec.mints.len(), 1);
    }
}
