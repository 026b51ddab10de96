//! The materialized voter set.

use crate::quorum;
use congress_types::Address;
use std::collections::HashSet;

/// Which way a subject's incoming trust just moved.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EdgeChange {
    Added,
    Removed,
}

/// How a re-evaluation changed a subject's standing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MembershipChange {
    Granted,
    Revoked,
}

/// Addresses currently holding voting rights.
///
/// Membership is never edited directly: it only changes through
/// [`VoterRegistry::reevaluate_membership`], driven by trust-edge mutations.
#[derive(Clone, Debug)]
pub struct VoterRegistry {
    genesis: Address,
    members: HashSet<Address>,
}

impl VoterRegistry {
    /// Create the registry with `genesis` as its sole voter.
    pub fn bootstrap(genesis: Address) -> Self {
        let mut members = HashSet::new();
        members.insert(genesis);
        Self { genesis, members }
    }

    /// The address seeded at bootstrap. It may since have been revoked.
    pub fn genesis(&self) -> Address {
        self.genesis
    }

    pub fn is_voter(&self, address: &Address) -> bool {
        self.members.contains(address)
    }

    pub fn count(&self) -> u32 {
        self.members.len() as u32
    }

    /// All current voters, in address order.
    pub fn voters(&self) -> Vec<Address> {
        let mut voters: Vec<Address> = self.members.iter().copied().collect();
        voters.sort();
        voters
    }

    /// Bring `subject`'s membership in line with its just-updated total trust.
    ///
    /// The majority is measured against the voter count *before* this call
    /// changes anything. Only `subject` is touched. Standing only moves in the
    /// direction of the edge change: an added edge can grant but never revoke,
    /// a removed edge can revoke but never grant.
    pub fn reevaluate_membership(
        &mut self,
        subject: Address,
        total_trust: u32,
        change: EdgeChange,
    ) -> Option<MembershipChange> {
        let should_vote = quorum::is_majority(total_trust, self.count());
        let is_voter = self.members.contains(&subject);
        match (change, should_vote, is_voter) {
            (EdgeChange::Added, true, false) => {
                self.members.insert(subject);
                Some(MembershipChange::Granted)
            }
            (EdgeChange::Removed, false, true) => {
                self.members.remove(&subject);
                Some(MembershipChange::Revoked)
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn addr(n: u8) -> Address {
        Address::new([n; 20])
    }

    #[test]
    fn bootstrap_seeds_single_voter() {
        let registry = VoterRegistry::bootstrap(addr(1));
        assert_eq!(registry.count(), 1);
        assert!(registry.is_voter(&addr(1)));
        assert!(!registry.is_voter(&addr(2)));
        assert_eq!(registry.genesis(), addr(1));
        assert_eq!(registry.voters(), vec![addr(1)]);
    }

    #[test]
    fn grant_when_trust_reaches_majority() {
        let mut registry = VoterRegistry::bootstrap(addr(1));
        assert_eq!(
            registry.reevaluate_membership(addr(2), 1, EdgeChange::Added),
            Some(MembershipChange::Granted)
        );
        assert_eq!(registry.count(), 2);
    }

    #[test]
    fn majority_measured_before_the_change() {
        let mut registry = VoterRegistry::bootstrap(addr(1));
        registry.reevaluate_membership(addr(2), 1, EdgeChange::Added);
        // Two voters: one trust is not enough, two is.
        assert_eq!(registry.reevaluate_membership(addr(3), 1, EdgeChange::Added), None);
        assert_eq!(
            registry.reevaluate_membership(addr(3), 2, EdgeChange::Added),
            Some(MembershipChange::Granted)
        );
        assert_eq!(registry.count(), 3);
    }

    #[test]
    fn revoke_when_trust_drops_below_majority() {
        let mut registry = VoterRegistry::bootstrap(addr(1));
        registry.reevaluate_membership(addr(2), 1, EdgeChange::Added);
        assert_eq!(
            registry.reevaluate_membership(addr(2), 0, EdgeChange::Removed),
            Some(MembershipChange::Revoked)
        );
        assert_eq!(registry.count(), 1);
        assert!(!registry.is_voter(&addr(2)));
    }

    #[test]
    fn unchanged_standing_is_a_noop() {
        let mut registry = VoterRegistry::bootstrap(addr(1));
        registry.reevaluate_membership(addr(2), 1, EdgeChange::Added);
        assert_eq!(registry.reevaluate_membership(addr(2), 2, EdgeChange::Added), None);
        assert_eq!(registry.reevaluate_membership(addr(3), 0, EdgeChange::Removed), None);
        assert_eq!(registry.count(), 2);
    }

    #[test]
    fn added_edge_never_revokes() {
        let mut registry = VoterRegistry::bootstrap(addr(1));
        registry.reevaluate_membership(addr(2), 1, EdgeChange::Added);
        // Genesis holds its seat with no trust; a first edge towards it falls
        // short of two voters but must not cost it the vote.
        assert_eq!(registry.reevaluate_membership(addr(1), 1, EdgeChange::Added), None);
        assert!(registry.is_voter(&addr(1)));
        assert_eq!(registry.count(), 2);
    }

    #[test]
    fn removed_edge_never_grants() {
        let mut registry = VoterRegistry::bootstrap(addr(1));
        // One voter: a remaining trust of 1 is a majority, but losing an edge
        // cannot hand out a vote.
        assert_eq!(registry.reevaluate_membership(addr(2), 1, EdgeChange::Removed), None);
        assert!(!registry.is_voter(&addr(2)));
        assert_eq!(registry.count(), 1);
    }

    #[test]
    fn genesis_revoked_when_its_trust_degrades() {
        let mut registry = VoterRegistry::bootstrap(addr(1));
        registry.reevaluate_membership(addr(2), 1, EdgeChange::Added);
        assert_eq!(
            registry.reevaluate_membership(addr(1), 0, EdgeChange::Removed),
            Some(MembershipChange::Revoked)
        );
        assert!(!registry.is_voter(&addr(1)));
        assert_eq!(registry.genesis(), addr(1));
    }
}
