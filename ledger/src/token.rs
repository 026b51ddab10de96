//! Reference in-memory token: balances, supply, a single minter, and
//! recipient hooks notified on every incoming transfer.

use crate::asset::AssetLedger;
use crate::error::LedgerError;
use crate::event::{LedgerEvent, MintReceipt};
use crate::recipient::{RecipientAction, TokenBurner, TokenRecipient};
use congress_types::{Address, TokenAmount};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// Display metadata for the token.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenMetadata {
    pub name: String,
    pub symbol: String,
    pub decimals: u8,
}

impl Default for TokenMetadata {
    fn default() -> Self {
        Self {
            name: "UniGoldCoin".to_string(),
            symbol: "UGCC".to_string(),
            decimals: 4,
        }
    }
}

/// A balance-and-supply token with a single authorized minter.
///
/// Every operation checks all of its preconditions before touching a
/// balance, so a rejected call never leaves partial state behind.
#[derive(Clone)]
pub struct TokenLedger {
    address: Address,
    minter: Address,
    metadata: TokenMetadata,
    balances: HashMap<Address, TokenAmount>,
    total_supply: TokenAmount,
    /// Hooks called before a transfer to their address settles.
    recipients: HashMap<Address, Arc<dyn TokenRecipient + Send + Sync>>,
}

impl fmt::Debug for TokenLedger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut recipients: Vec<&Address> = self.recipients.keys().collect();
        recipients.sort();
        f.debug_struct("TokenLedger")
            .field("address", &self.address)
            .field("minter", &self.minter)
            .field("metadata", &self.metadata)
            .field("total_supply", &self.total_supply)
            .field("holders", &self.balances.len())
            .field("recipients", &recipients)
            .finish()
    }
}

impl TokenLedger {
    pub fn new(address: Address, minter: Address) -> Self {
        Self::with_metadata(address, minter, TokenMetadata::default())
    }

    pub fn with_metadata(address: Address, minter: Address, metadata: TokenMetadata) -> Self {
        Self {
            address,
            minter,
            metadata,
            balances: HashMap::new(),
            total_supply: TokenAmount::ZERO,
            recipients: HashMap::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.metadata.name
    }

    pub fn symbol(&self) -> &str {
        &self.metadata.symbol
    }

    pub fn decimals(&self) -> u8 {
        self.metadata.decimals
    }

    pub fn minter(&self) -> Address {
        self.minter
    }

    /// Attach `hook` to `address`; it is consulted on every transfer there.
    pub fn register_recipient(
        &mut self,
        address: Address,
        hook: Arc<dyn TokenRecipient + Send + Sync>,
    ) -> Result<(), LedgerError> {
        if address.is_zero() {
            return Err(LedgerError::InvalidRecipient(address));
        }
        self.recipients.insert(address, hook);
        Ok(())
    }

    /// Place a [`TokenBurner`] bound to this token at `burner`.
    pub fn register_burner(&mut self, burner: Address) -> Result<(), LedgerError> {
        self.register_recipient(burner, Arc::new(TokenBurner::new(self.address)))
    }

    pub fn has_recipient(&self, address: &Address) -> bool {
        self.recipients.contains_key(address)
    }

    /// Move `value` from `from` to `to` with no payload.
    pub fn transfer(
        &mut self,
        from: &Address,
        to: &Address,
        value: TokenAmount,
    ) -> Result<Vec<LedgerEvent>, LedgerError> {
        self.transfer_with_data(from, to, value, &[])
    }

    /// Move `value` from `from` to `to`, handing `data` to the recipient's
    /// hook if it has one.
    ///
    /// A hook that refuses the tokens rejects the transfer. Tokens a hook
    /// burns are destroyed on arrival; the records are then `Burned`,
    /// `Transfer(to → ZERO)`, `Transfer(from → to)`.
    pub fn transfer_with_data(
        &mut self,
        from: &Address,
        to: &Address,
        value: TokenAmount,
        data: &[u8],
    ) -> Result<Vec<LedgerEvent>, LedgerError> {
        if to.is_zero() {
            return Err(LedgerError::InvalidRecipient(*to));
        }
        let available = self.balance_of(from);
        let remaining = available
            .checked_sub(value)
            .ok_or(LedgerError::InsufficientBalance {
                needed: value,
                available,
            })?;
        let credited = if from == to {
            available
        } else {
            self.balance_of(to)
                .checked_add(value)
                .ok_or(LedgerError::Overflow)?
        };

        let action = match self.recipients.get(to) {
            Some(hook) => hook.token_fallback(self.address, *from, value, data)?,
            None => RecipientAction::Keep,
        };

        let sent = LedgerEvent::Transfer {
            from: *from,
            to: *to,
            value,
        };

        if action == RecipientAction::Burn {
            let supply = self
                .total_supply
                .checked_sub(value)
                .ok_or(LedgerError::Overflow)?;
            self.set_balance(*from, remaining);
            self.total_supply = supply;
            return Ok(vec![
                LedgerEvent::Burned { burner: *to, value },
                LedgerEvent::Transfer {
                    from: *to,
                    to: Address::ZERO,
                    value,
                },
                sent,
            ]);
        }

        if from != to {
            self.set_balance(*from, remaining);
            self.set_balance(*to, credited);
        }
        Ok(vec![sent])
    }

    /// Destroy `value` from `burner`'s own balance.
    pub fn burn(
        &mut self,
        burner: &Address,
        value: TokenAmount,
    ) -> Result<Vec<LedgerEvent>, LedgerError> {
        let available = self.balance_of(burner);
        let remaining = available
            .checked_sub(value)
            .ok_or(LedgerError::InsufficientBalance {
                needed: value,
                available,
            })?;
        let supply = self
            .total_supply
            .checked_sub(value)
            .ok_or(LedgerError::Overflow)?;
        self.set_balance(*burner, remaining);
        self.total_supply = supply;
        Ok(vec![
            LedgerEvent::Burned {
                burner: *burner,
                value,
            },
            LedgerEvent::Transfer {
                from: *burner,
                to: Address::ZERO,
                value,
            },
        ])
    }

    fn set_balance(&mut self, owner: Address, amount: TokenAmount) {
        if amount.is_zero() {
            self.balances.remove(&owner);
        } else {
            self.balances.insert(owner, amount);
        }
    }
}

impl AssetLedger for TokenLedger {
    fn address(&self) -> Address {
        self.address
    }

    fn mint(
        &mut self,
        minter: &Address,
        to: &Address,
        amount: TokenAmount,
    ) -> Result<MintReceipt, LedgerError> {
        if *minter != self.minter {
            return Err(LedgerError::Unauthorized(*minter));
        }
        if amount.is_zero() {
            return Err(LedgerError::ZeroAmount);
        }
        if to.is_zero() {
            return Err(LedgerError::InvalidRecipient(*to));
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
        self.set_balance(*to, balance);
        Ok(MintReceipt::new(*to, amount))
    }

    fn balance_of(&self, owner: &Address) -> TokenAmount {
        self.balances.get(owner).copied().unwrap_or_default()
    }

    fn total_supply(&self) -> TokenAmount {
        self.total_supply
    }
}
