use congress_types::Address;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum GovernanceError {
    #[error("{0} is not a voter")]
    NotAVoter(Address),

    #[error("mint amount must be positive")]
    InvalidAmount,

    #[error("mint execution failed: {0}")]
    Execution(String),
}
