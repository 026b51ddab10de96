//! Call scripts: a JSON list of Congress calls replayed against a fresh
//! congress bound to the reference token.

use std::collections::BTreeSet;

use congress_ledger::{AssetLedger, TokenLedger};
use congress_node::{Congress, CongressConfig, CongressError, CongressRecord};
use congress_types::{Address, TokenAmount};
use serde::{Deserialize, Serialize};

/// One caller-facing call, as written in a script file.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Call {
    /// Bind a reference token deployed at `token`, minted by the congress.
    SetToken { caller: Address, token: Address },
    Trust { caller: Address, subject: Address },
    Untrust { caller: Address, subject: Address },
    Mint {
        caller: Address,
        to: Address,
        amount: TokenAmount,
        batch_code: String,
    },
}

impl Call {
    pub fn op(&self) -> &'static str {
        match self {
            Self::SetToken { .. } => "set_token",
            Self::Trust { .. } => "trust",
            Self::Untrust { .. } => "untrust",
            Self::Mint { .. } => "mint",
        }
    }
}

pub fn parse_script(json: &str) -> Result<Vec<Call>, serde_json::Error> {
    serde_json::from_str(json)
}

/// The outcome of one replayed call: its records, or why it was rejected.
#[derive(Debug, Serialize)]
pub struct CallOutcome {
    pub call: usize,
    pub op: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub records: Option<Vec<CongressRecord>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl CallOutcome {
    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }
}

#[derive(Debug, Serialize)]
pub struct Balance {
    pub owner: Address,
    pub balance: TokenAmount,
}

/// State after the whole script has been applied.
#[derive(Debug, Serialize)]
pub struct Summary {
    pub voters: Vec<Address>,
    pub token: Option<Address>,
    pub total_supply: TokenAmount,
    /// Balances of every mint recipient named in the script.
    pub balances: Vec<Balance>,
    pub accepted: usize,
    pub rejected: usize,
}

/// Replays scripts against a congress built from configuration.
pub struct Replayer {
    congress: Congress<TokenLedger>,
    recipients: BTreeSet<Address>,
    accepted: usize,
    rejected: usize,
}

impl Replayer {
    pub fn new(config: &CongressConfig) -> Result<Self, CongressError> {
        Ok(Self {
            congress: Congress::from_config(config)?,
            recipients: BTreeSet::new(),
            accepted: 0,
            rejected: 0,
        })
    }

    pub fn congress(&self) -> &Congress<TokenLedger> {
        &self.congress
    }

    /// Apply one call; a rejection is reported in the outcome, not returned
    /// as an error.
    pub fn apply(&mut self, index: usize, call: &Call) -> CallOutcome {
        let result = self.dispatch(call);
        let (records, error) = match result {
            Ok(records) => {
                self.accepted += 1;
                (Some(records), None)
            }
            Err(err) => {
                self.rejected += 1;
                tracing::debug!(call = index, op = call.op(), error = %err, "call rejected");
                (None, Some(err.to_string()))
            }
        };
        CallOutcome {
            call: index,
            op: call.op(),
            records,
            error,
        }
    }

    fn dispatch(&mut self, call: &Call) -> Result<Vec<CongressRecord>, CongressError> {
        match call {
            Call::SetToken { caller, token } => {
                let ledger = TokenLedger::new(*token, self.congress.address());
                self.congress.set_token(*caller, ledger)?;
                Ok(Vec::new())
            }
            Call::Trust { caller, subject } => self.congress.trust(*caller, *subject),
            Call::Untrust { caller, subject } => self.congress.untrust(*caller, *subject),
            Call::Mint {
                caller,
                to,
                amount,
                batch_code,
            } => {
                self.recipients.insert(*to);
                self.congress.mint(*caller, *to, *amount, batch_code)
            }
        }
    }

    pub fn summary(&self) -> Summary {
        let token = self.congress.token();
        let balances = self
            .recipients
            .iter()
            .map(|owner| Balance {
                owner: *owner,
                balance: token.map(|t| t.balance_of(owner)).unwrap_or_default(),
            })
            .collect();
        Summary {
            voters: self.congress.voters(),
            token: self.congress.token_address(),
            total_supply: token.map(|t| t.total_supply()).unwrap_or_default(),
            balances,
            accepted: self.accepted,
            rejected: self.rejected,
        }
    }
}
