//! The asset ledger governed by Congress.
//!
//! Congress never keeps balances itself: an approved mint is delegated to an
//! [`AssetLedger`], which owns balances and supply and records its own
//! mint/transfer events. [`TokenLedger`] is the reference in-memory token;
//! addresses on it can carry a [`TokenRecipient`] hook, such as a
//! [`TokenBurner`].

pub mod asset;
pub mod error;
pub mod event;
pub mod recipient;
pub mod token;

pub use asset::AssetLedger;
pub use error::LedgerError;
pub use event::{LedgerEvent, MintReceipt};
pub use recipient::{RecipientAction, TokenBurner, TokenRecipient};
pub use token::{TokenLedger, TokenMetadata};
