use congress_types::{Address, TokenAmount};
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LedgerError {
    #[error("{0} is not allowed to mint")]
    Unauthorized(Address),

    #[error("amount must be non-zero")]
    ZeroAmount,

    #[error("invalid recipient {0}")]
    InvalidRecipient(Address),

    #[error("insufficient balance: need {needed}, have {available}")]
    InsufficientBalance {
        needed: TokenAmount,
        available: TokenAmount,
    },

    #[error("arithmetic overflow in token supply")]
    Overflow,

    #[error("recipient bound to token {expected} refused tokens from {got}")]
    ForeignToken { expected: Address, got: Address },

    #[error("ledger rejected the operation: {0}")]
    Rejected(String),
}
