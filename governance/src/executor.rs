//! The seam to the asset ledger that performs an approved mint.

use crate::error::GovernanceError;
use congress_types::{Address, TokenAmount};

/// Performs the mint once a proposal reaches quorum.
///
/// Implementations must be all-or-nothing: on `Err` the ledger is unchanged,
/// and the proposal ledger discards the whole vote transition.
pub trait MintExecutor {
    fn execute_mint(&mut self, to: &Address, amount: TokenAmount) -> Result<(), GovernanceError>;
}

impl<F> MintExecutor for F
where
    F: FnMut(&Address, TokenAmount) -> Result<(), GovernanceError>,
{
    fn execute_mint(&mut self, to: &Address, amount: TokenAmount) -> Result<(), GovernanceError> {
        self(to, amount)
    }
}
