//! The Congress facade: one object exposing every caller-facing operation.
//!
//! Each mutating call runs inside a [`call_span`], validates everything before
//! its first write, and either commits completely or leaves no trace. On commit
//! its records are appended to the audit log and fanned out to subscribers.

use congress_governance::{
    GovernanceError, MintExecutor, MintProposal, MintProposalLedger, ProposalKey,
};
use congress_ledger::{AssetLedger, MintReceipt};
use congress_trust::{quorum, TrustController, TrustError, TrustGraph};
use congress_types::{Address, CongressEvent, TokenAmount};

use crate::config::CongressConfig;
use crate::event::{CongressRecord, EventBus};
use crate::tracing_spans::call_span;
use crate::CongressError;

/// Trust-gated voting and quorum-approved minting over an asset ledger `L`.
#[derive(Debug)]
pub struct Congress<L> {
    /// Identity used as the minter when calling into the ledger.
    address: Address,
    trust: TrustController,
    proposals: MintProposalLedger,
    ledger: Option<L>,
    /// Append-only audit log of committed Congress events.
    log: Vec<CongressEvent>,
    bus: EventBus,
}

impl<L: AssetLedger> Congress<L> {
    /// A congress at `address` with `genesis` as its only voter and no ledger
    /// bound yet. The zero address cannot be the genesis voter.
    pub fn new(address: Address, genesis: Address) -> Result<Self, CongressError> {
        if genesis.is_zero() {
            return Err(TrustError::InvalidAddress(genesis).into());
        }
        Ok(Self {
            address,
            trust: TrustController::new(genesis),
            proposals: MintProposalLedger::new(),
            ledger: None,
            log: Vec::new(),
            bus: EventBus::new(),
        })
    }

    /// A congress whose ledger is bound at construction, on behalf of the
    /// genesis voter.
    pub fn with_token(
        address: Address,
        genesis: Address,
        ledger: L,
    ) -> Result<Self, CongressError> {
        let mut congress = Self::new(address, genesis)?;
        congress.set_token(genesis, ledger)?;
        Ok(congress)
    }

    pub fn from_config(config: &CongressConfig) -> Result<Self, CongressError> {
        Self::new(config.address, config.genesis)
    }

    /// Bind the governed ledger. Allowed once, and only for a current voter.
    pub fn set_token(&mut self, caller: Address, ledger: L) -> Result<(), CongressError> {
        let span = call_span("set_token", &caller);
        let _enter = span.enter();

        let ledger_address = ledger.address();
        let result = self.trust.set_token(&caller, ledger_address);
        if let Err(err) = &result {
            tracing::debug!(error = %err, ledger = %ledger_address, "set_token rejected");
        }
        result?;
        self.ledger = Some(ledger);
        tracing::info!(ledger = %ledger_address, "token ledger bound");
        Ok(())
    }

    /// `caller` declares trust in `subject`. Returns the call's records.
    pub fn trust(
        &mut self,
        caller: Address,
        subject: Address,
    ) -> Result<Vec<CongressRecord>, CongressError> {
        let span = call_span("trust", &caller);
        let _enter = span.enter();

        let result = self.trust.trust(caller, subject);
        self.finish_trust_call(result, &subject)
    }

    /// `caller` withdraws its trust in `subject`. Returns the call's records.
    pub fn untrust(
        &mut self,
        caller: Address,
        subject: Address,
    ) -> Result<Vec<CongressRecord>, CongressError> {
        let span = call_span("untrust", &caller);
        let _enter = span.enter();

        let result = self.trust.untrust(caller, subject);
        self.finish_trust_call(result, &subject)
    }

    /// `caller` proposes, or votes for, minting `amount` to `to` under
    /// `batch_code`.
    ///
    /// The vote that brings the proposal to a majority of the current voters
    /// executes the mint on the bound ledger. If the ledger rejects the mint,
    /// the whole call is rejected and nothing is recorded.
    pub fn mint(
        &mut self,
        caller: Address,
        to: Address,
        amount: TokenAmount,
        batch_code: &str,
    ) -> Result<Vec<CongressRecord>, CongressError> {
        let span = call_span("mint", &caller);
        let _enter = span.enter();

        let Some(ledger) = self.ledger.as_mut() else {
            tracing::debug!("mint rejected: no token ledger bound");
            return Err(TrustError::TokenNotConfigured.into());
        };
        let mut bound = BoundLedger {
            ledger,
            minter: self.address,
            receipt: None,
        };
        let result = self.proposals.propose_or_vote(
            caller,
            to,
            amount,
            batch_code,
            self.trust.voters(),
            &mut bound,
        );
        let receipt = bound.receipt.take();

        let events = match result {
            Ok(events) => events,
            Err(GovernanceError::Execution(reason)) => {
                tracing::warn!(
                    %to,
                    %amount,
                    batch_code,
                    %reason,
                    "ledger rejected mint, vote rolled back"
                );
                return Err(GovernanceError::Execution(reason).into());
            }
            Err(err) => {
                tracing::debug!(error = %err, "mint rejected");
                return Err(err.into());
            }
        };

        if events
            .iter()
            .any(|e| matches!(e, CongressEvent::MintProposalExecuted { .. }))
        {
            tracing::info!(%to, %amount, batch_code, "mint proposal executed");
        }

        let mut records: Vec<CongressRecord> =
            events.into_iter().map(CongressRecord::Congress).collect();
        if let Some(receipt) = receipt {
            records.extend(receipt.into_events().map(CongressRecord::Ledger));
        }
        self.commit(&records);
        Ok(records)
    }

    /// Register a listener for the records of every committed call.
    pub fn subscribe(&mut self, listener: Box<dyn Fn(&CongressRecord) + Send + Sync>) {
        self.bus.subscribe(listener);
    }

    // ── Queries ────────────────────────────────────────────────────────

    pub fn address(&self) -> Address {
        self.address
    }

    pub fn genesis(&self) -> Address {
        self.trust.voters().genesis()
    }

    pub fn is_voter(&self, addr: &Address) -> bool {
        self.trust.voters().is_voter(addr)
    }

    pub fn voters_count(&self) -> u32 {
        self.trust.voters().count()
    }

    /// Current voters, sorted.
    pub fn voters(&self) -> Vec<Address> {
        self.trust.voters().voters()
    }

    pub fn total_trust(&self, subject: &Address) -> u32 {
        self.trust.graph().total_trust(subject)
    }

    /// Whether `votes` is a majority of the current voter count.
    pub fn is_majority(&self, votes: u32) -> bool {
        quorum::is_majority(votes, self.voters_count())
    }

    pub fn graph(&self) -> &TrustGraph {
        self.trust.graph()
    }

    /// The bound ledger, if any.
    pub fn token(&self) -> Option<&L> {
        self.ledger.as_ref()
    }

    /// Mutable access to the bound ledger, for operations Congress does not
    /// govern (transfers, burner registration).
    pub fn token_mut(&mut self) -> Option<&mut L> {
        self.ledger.as_mut()
    }

    pub fn token_address(&self) -> Option<Address> {
        self.trust.token()
    }

    pub fn proposal(&self, key: &ProposalKey) -> Option<&MintProposal> {
        self.proposals.proposal(key)
    }

    pub fn proposals(&self) -> &MintProposalLedger {
        &self.proposals
    }

    /// Every committed Congress event, oldest first.
    pub fn events(&self) -> &[CongressEvent] {
        &self.log
    }

    fn finish_trust_call(
        &mut self,
        result: Result<Vec<CongressEvent>, TrustError>,
        subject: &Address,
    ) -> Result<Vec<CongressRecord>, CongressError> {
        let events = result.map_err(|err| {
            tracing::debug!(error = %err, %subject, "trust call rejected");
            err
        })?;
        for event in &events {
            match event {
                CongressEvent::VoteGranted { voter } => {
                    tracing::info!(%voter, voters = self.voters_count(), "vote granted");
                }
                CongressEvent::VoteRevoked { voter } => {
                    tracing::info!(%voter, voters = self.voters_count(), "vote revoked");
                }
                _ => {}
            }
        }
        let records: Vec<CongressRecord> =
            events.into_iter().map(CongressRecord::Congress).collect();
        self.commit(&records);
        Ok(records)
    }

    fn commit(&mut self, records: &[CongressRecord]) {
        for record in records {
            if let CongressRecord::Congress(event) = record {
                self.log.push(event.clone());
            }
            self.bus.emit(record);
        }
    }
}

/// Adapts the bound ledger to the proposal ledger's executor seam, minting on
/// behalf of the congress and keeping the ledger's receipt.
struct BoundLedger<'a, L> {
    ledger: &'a mut L,
    minter: Address,
    receipt: Option<MintReceipt>,
}

impl<L: AssetLedger> MintExecutor for BoundLedger<'_, L> {
    fn execute_mint(&mut self, to: &Address, amount: TokenAmount) -> Result<(), GovernanceError> {
        let receipt = self
            .ledger
            .mint(&self.minter, to, amount)
            .map_err(|e| GovernanceError::Execution(e.to_string()))?;
        self.receipt = Some(receipt);
        Ok(())
    }
}
