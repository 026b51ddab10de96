//! Congress configuration with TOML file support.

use serde::{Deserialize, Serialize};

use congress_types::Address;

use crate::logging::LogFormat;
use crate::CongressError;

/// Configuration for a Congress instance.
///
/// Can be loaded from a TOML file via [`CongressConfig::from_toml_file`] or
/// built programmatically (e.g. for tests). `genesis` has no default and must
/// be present in every file.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CongressConfig {
    /// The congress's own address; a bound token recognizes it as minter.
    #[serde(default = "default_address")]
    pub address: Address,

    /// The bootstrap voter.
    pub genesis: Address,

    /// Log format: "human" or "json".
    #[serde(default = "default_log_format")]
    pub log_format: String,

    /// Log level filter: "trace", "debug", "info", "warn", "error".
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

// ── Serde default helpers ──────────────────────────────────────────────

fn default_address() -> Address {
    let mut bytes = [0u8; Address::LEN];
    bytes[Address::LEN - 2..].copy_from_slice(&[0xC0, 0x01]);
    Address::new(bytes)
}

fn default_log_format() -> String {
    "human".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

// ── Impl ───────────────────────────────────────────────────────────────

impl CongressConfig {
    /// A configuration with the given genesis voter and defaults elsewhere.
    pub fn new(genesis: Address) -> Self {
        Self {
            address: default_address(),
            genesis,
            log_format: default_log_format(),
            log_level: default_log_level(),
        }
    }

    /// Load configuration from a TOML file.
    pub fn from_toml_file(path: &str) -> Result<Self, CongressError> {
        let content =
            std::fs::read_to_string(path).map_err(|e| CongressError::Config(e.to_string()))?;
        Self::from_toml_str(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, CongressError> {
        let config: Self = toml::from_str(s).map_err(|e| CongressError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize the configuration to a TOML string.
    pub fn to_toml_string(&self) -> Result<String, CongressError> {
        toml::to_string_pretty(self).map_err(|e| CongressError::Config(e.to_string()))
    }

    pub fn log_format(&self) -> Result<LogFormat, CongressError> {
        self.log_format.parse()
    }

    /// Reject zero identities and unknown log formats.
    pub fn validate(&self) -> Result<(), CongressError> {
        if self.genesis.is_zero() {
            return Err(CongressError::Config(
                "genesis must not be the zero address".into(),
            ));
        }
        if self.address.is_zero() {
            return Err(CongressError::Config(
                "address must not be the zero address".into(),
            ));
        }
        self.log_format()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const GENESIS: &str = "0x00000000000000000000000000000000000000aa";

    #[test]
    fn config_round_trips_through_toml() {
        let config = CongressConfig::new(GENESIS.parse().unwrap());
        let toml_str = config.to_toml_string().unwrap();
        let parsed = CongressConfig::from_toml_str(&toml_str).expect("should parse");
        assert_eq!(parsed, config);
    }

    #[test]
    fn minimal_toml_uses_defaults() {
        let config = CongressConfig::from_toml_str(&format!("genesis = \"{GENESIS}\""))
            .expect("genesis alone should parse");
        assert_eq!(config.address, default_address());
        assert_eq!(config.log_format, "human");
        assert_eq!(config.log_level, "info");
        assert_eq!(config.log_format().unwrap(), LogFormat::Human);
    }

    #[test]
    fn genesis_is_required() {
        let result = CongressConfig::from_toml_str("log_level = \"debug\"");
        assert!(matches!(result, Err(CongressError::Config(_))));
    }

    #[test]
    fn zero_genesis_rejected() {
        let toml = format!("genesis = \"0x{}\"", "00".repeat(20));
        assert!(matches!(
            CongressConfig::from_toml_str(&toml),
            Err(CongressError::Config(_))
        ));
    }

    #[test]
    fn unknown_log_format_rejected() {
        let toml = format!("genesis = \"{GENESIS}\"\nlog_format = \"xml\"");
        assert!(matches!(
            CongressConfig::from_toml_str(&toml),
            Err(CongressError::Config(_))
        ));
    }

    #[test]
    fn malformed_address_rejected() {
        let result = CongressConfig::from_toml_str("genesis = \"0x1234\"");
        assert!(matches!(result, Err(CongressError::Config(_))));
    }

    #[test]
    fn partial_toml_overrides() {
        let toml = format!(
            r#"
            genesis = "{GENESIS}"
            address = "0x00000000000000000000000000000000000000bb"
            log_format = "json"
        "#
        );
        let config = CongressConfig::from_toml_str(&toml).expect("should parse");
        assert_eq!(config.address.to_string(), "0x00000000000000000000000000000000000000bb");
        assert_eq!(config.log_format().unwrap(), LogFormat::Json);
        assert_eq!(config.log_level, "info"); // default
    }

    #[test]
    fn loads_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "genesis = \"{GENESIS}\"").unwrap();
        let path = file.path().to_str().unwrap();
        let config = CongressConfig::from_toml_file(path).unwrap();
        assert_eq!(config.genesis.to_string(), GENESIS);
    }

    #[test]
    fn missing_file_returns_config_error() {
        let result = CongressConfig::from_toml_file("/nonexistent/congress.toml");
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert!(matches!(err, CongressError::Config(_)));
    }
}
