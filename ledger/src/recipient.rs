//! Recipients that are notified when tokens arrive.
//!
//! A transfer to an address with a registered [`TokenRecipient`] calls its
//! `token_fallback` before any balance moves. The hook accepts the tokens,
//! asks the ledger to burn them on arrival, or refuses them, in which case
//! the whole transfer is rejected.

use crate::error::LedgerError;
use congress_types::{Address, TokenAmount};

/// What the ledger does with tokens a recipient accepted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RecipientAction {
    /// Credit the recipient's balance.
    Keep,
    /// Destroy the tokens on arrival.
    Burn,
}

/// A recipient hook, invoked by the ledger at `token` for every incoming
/// transfer.
pub trait TokenRecipient {
    fn token_fallback(
        &self,
        token: Address,
        from: Address,
        value: TokenAmount,
        data: &[u8],
    ) -> Result<RecipientAction, LedgerError>;
}

/// A burner bound to one token: it burns what that token sends and refuses
/// transfers from any other ledger.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TokenBurner {
    token: Address,
}

impl TokenBurner {
    pub fn new(token: Address) -> Self {
        Self { token }
    }

    /// The only token this burner accepts.
    pub fn token(&self) -> Address {
        self.token
    }
}

impl TokenRecipient for TokenBurner {
    fn token_fallback(
        &self,
        token: Address,
        _from: Address,
        _value: TokenAmount,
        _data: &[u8],
    ) -> Result<RecipientAction, LedgerError> {
        if token != self.token {
            return Err(LedgerError::ForeignToken {
                expected: self.token,
                got: token,
            });
        }
        Ok(RecipientAction::Burn)
    }
}
