//! Directed trust edges and per-subject trust totals.

use crate::error::TrustError;
use congress_types::Address;
use std::collections::{HashMap, HashSet};

/// Bookkeeping for issuer → subject trust edges.
///
/// Holds no policy: it does not know who is a voter. Edges persist even if
/// their issuer later loses voting rights, so a subject's total trust counts
/// every live edge regardless of the issuer's current standing.
#[derive(Clone, Debug, Default)]
pub struct TrustGraph {
    /// Subject → issuers currently trusting it. The set size is the subject's
    /// total trust.
    incoming: HashMap<Address, HashSet<Address>>,
    /// Reverse index: issuer → subjects it currently trusts.
    outgoing: HashMap<Address, HashSet<Address>>,
    edge_count: usize,
}

impl TrustGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert the edge `issuer → subject`, returning the subject's new total trust.
    pub fn add_edge(&mut self, issuer: Address, subject: Address) -> Result<u32, TrustError> {
        if issuer == subject {
            return Err(TrustError::SelfTrust(issuer));
        }
        let issuers = self.incoming.entry(subject).or_default();
        if !issuers.insert(issuer) {
            return Err(TrustError::DuplicateEdge { issuer, subject });
        }
        let total = issuers.len() as u32;
        self.outgoing.entry(issuer).or_default().insert(subject);
        self.edge_count += 1;
        Ok(total)
    }

    /// Delete the edge `issuer → subject`, returning the subject's new total trust.
    pub fn remove_edge(&mut self, issuer: Address, subject: Address) -> Result<u32, TrustError> {
        let Some(issuers) = self.incoming.get_mut(&subject) else {
            return Err(TrustError::EdgeNotFound { issuer, subject });
        };
        if !issuers.remove(&issuer) {
            return Err(TrustError::EdgeNotFound { issuer, subject });
        }
        let total = issuers.len() as u32;
        if total == 0 {
            self.incoming.remove(&subject);
        }
        if let Some(subjects) = self.outgoing.get_mut(&issuer) {
            subjects.remove(&subject);
            if subjects.is_empty() {
                self.outgoing.remove(&issuer);
            }
        }
        self.edge_count -= 1;
        Ok(total)
    }

    /// Number of distinct issuers trusting `subject`; 0 if none.
    pub fn total_trust(&self, subject: &Address) -> u32 {
        self.incoming
            .get(subject)
            .map_or(0, |issuers| issuers.len() as u32)
    }

    pub fn has_edge(&self, issuer: &Address, subject: &Address) -> bool {
        self.incoming
            .get(subject)
            .is_some_and(|issuers| issuers.contains(issuer))
    }

    /// Issuers trusting `subject`, in address order.
    pub fn issuers_of(&self, subject: &Address) -> Vec<Address> {
        let mut issuers: Vec<Address> = self
            .incoming
            .get(subject)
            .map(|set| set.iter().copied().collect())
            .unwrap_or_default();
        issuers.sort();
        issuers
    }

    /// Subjects trusted by `issuer`, in address order.
    pub fn subjects_of(&self, issuer: &Address) -> Vec<Address> {
        let mut subjects: Vec<Address> = self
            .outgoing
            .get(issuer)
            .map(|set| set.iter().copied().collect())
            .unwrap_or_default();
        subjects.sort();
        subjects
    }

    pub fn edge_count(&self) -> usize {
        self.edge_count
    }
}
