//! The capability Congress needs from the ledger it governs.

use crate::error::LedgerError;
use crate::event::MintReceipt;
use congress_types::{Address, TokenAmount};

/// A balance-and-supply ledger that Congress can mint into.
///
/// `mint` must be all-or-nothing: when it returns `Err`, balances and supply
/// are exactly as before the call.
pub trait AssetLedger {
    /// The address the ledger is bound under.
    fn address(&self) -> Address;

    /// Create `amount` new units for `to`, on behalf of `minter`.
    fn mint(
        &mut self,
        minter: &Address,
        to: &Address,
        amount: TokenAmount,
    ) -> Result<MintReceipt, LedgerError>;

    fn balance_of(&self, owner: &Address) -> TokenAmount;

    fn total_supply(&self) -> TokenAmount;
}
