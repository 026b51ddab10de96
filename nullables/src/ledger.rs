//! Nullable asset ledger that records mints and fails on demand.

use congress_ledger::{AssetLedger, LedgerError, MintReceipt};
use congress_types::{Address, TokenAmount};
use std::collections::HashMap;

/// A mint accepted by the [`NullLedger`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RecordedMint {
    pub minter: Address,
    pub to: Address,
    pub amount: TokenAmount,
}

/// A deterministic asset ledger for testing.
///
/// Accepts mints from anyone unless told to reject them. Rejected mints leave
/// no trace in balances, supply, or the recorded call list.
#[derive(Clone, Debug)]
pub struct NullLedger {
    address: Address,
    mints: Vec<RecordedMint>,
    balances: HashMap<Address, TokenAmount>,
    total_supply: TokenAmount,
    /// Number of upcoming mints to reject.
    reject_next: usize,
    reject_all: bool,
}

impl NullLedger {
    pub fn new(address: Address) -> Self {
        Self {
            address,
            mints: Vec::new(),
            balances: HashMap::new(),
            total_supply: TokenAmount::ZERO,
            reject_next: 0,
            reject_all: false,
        }
    }

    /// A ledger that rejects every mint.
    pub fn rejecting(address: Address) -> Self {
        Self {
            reject_all: true,
            ..Self::new(address)
        }
    }

    /// Reject the next `count` mints, then accept again.
    pub fn reject_next(&mut self, count: usize) {
        self.reject_next = count;
    }

    /// Every accepted mint, in order.
    pub fn mints(&self) -> &[RecordedMint] {
        &self.mints
    }

    pub fn mint_count(&self) -> usize {
        self.mints.len()
    }
}

impl AssetLedger for NullLedger {
    fn address(&self) -> Address {
        self.address
    }

    fn mint(
        &mut self,
        minter: &Address,
        to: &Address,
        amount: TokenAmount,
    ) -> Result<MintReceipt, LedgerError> {
        if self.reject_all {
            return Err(LedgerError::Rejected("null ledger rejects all mints".into()));
        }
        if self.reject_next > 0 {
            self.reject_next -= 1;
            return Err(LedgerError::Rejected("null ledger scripted rejection".into()));
        }
        let supply = self
            .total_supply
            .checked_add(amount)
            .ok_or(LedgerError::Overflow)?;
        let balance = self
            .balance_of(to)
            .checked_add(amount)
            .ok_or(LedgerError::Overflow)?;
        self.total_supply = supply;
        self.balances.insert(*to, balance);
        self.mints.push(RecordedMint {
            minter: *minter,
            to: *to,
            amount,
        });
        Ok(MintReceipt::new(*to, amount))
    }

    fn balance_of(&self, owner: &Address) -> TokenAmount {
        self.balances.get(owner).copied().unwrap_or_default()
    }

    fn total_supply(&self) -> TokenAmount {
        self.total_supply
    }
}
