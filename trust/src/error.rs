use congress_types::Address;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TrustError {
    #[error("{0} is not a voter")]
    NotAVoter(Address),

    #[error("{0} cannot trust itself")]
    SelfTrust(Address),

    #[error("{issuer} already trusts {subject}")]
    DuplicateEdge { issuer: Address, subject: Address },

    #[error("{issuer} does not trust {subject}")]
    EdgeNotFound { issuer: Address, subject: Address },

    #[error("no token ledger has been configured")]
    TokenNotConfigured,

    #[error("token ledger already configured at {0}")]
    AlreadyConfigured(Address),

    #[error("{0} is not a valid address")]
    InvalidAddress(Address),
}
