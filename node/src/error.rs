use thiserror::Error;

#[derive(Debug, Error)]
pub enum CongressError {
    #[error("trust error: {0}")]
    Trust(#[from] congress_trust::TrustError),

    #[error("governance error: {0}")]
    Governance(#[from] congress_governance::GovernanceError),

    #[error("ledger error: {0}")]
    Ledger(#[from] congress_ledger::LedgerError),

    #[error("types error: {0}")]
    Types(#[from] congress_types::TypesError),

    #[error("config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
