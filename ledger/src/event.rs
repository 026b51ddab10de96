//! Records emitted by an asset ledger.

use congress_types::{Address, TokenAmount};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event")]
pub enum LedgerEvent {
    /// New supply was created for `to`.
    Minted { to: Address, amount: TokenAmount },
    /// Balance moved between holders. Mints come from, and burns go to,
    /// [`Address::ZERO`].
    Transfer {
        from: Address,
        to: Address,
        value: TokenAmount,
    },
    /// Supply was destroyed from `burner`'s balance.
    Burned { burner: Address, value: TokenAmount },
}

impl LedgerEvent {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Minted { .. } => "Minted",
            Self::Transfer { .. } => "Transfer",
            Self::Burned { .. } => "Burned",
        }
    }
}

/// The records produced by one successful mint, in emission order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MintReceipt {
    pub minted: LedgerEvent,
    pub transfer: LedgerEvent,
}

impl MintReceipt {
    pub fn new(to: Address, amount: TokenAmount) -> Self {
        Self {
            minted: LedgerEvent::Minted { to, amount },
            transfer: LedgerEvent::Transfer {
                from: Address::ZERO,
                to,
                value: amount,
            },
        }
    }

    pub fn into_events(self) -> [LedgerEvent; 2] {
        [self.minted, self.transfer]
    }
}
