//! Congress daemon: replays call scripts against a configured congress.

mod script;

use anyhow::Context;
use clap::Parser;
use congress_node::{init_logging, tracing_spans, CongressConfig, LogFormat};
use congress_types::Address;
use script::{parse_script, Replayer};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "congressd", about = "Trust-gated congress: replay call scripts")]
struct Cli {
    /// Path to a TOML configuration file. If provided, file settings
    /// are used as the base; CLI flags and env vars override them.
    #[arg(long, env = "CONGRESS_CONFIG")]
    config: Option<PathBuf>,

    /// Genesis voter address (0x-prefixed hex). Required without a config file.
    #[arg(long, env = "CONGRESS_GENESIS")]
    genesis: Option<Address>,

    /// Log level: "trace", "debug", "info", "warn", "error".
    #[arg(long, env = "CONGRESS_LOG_LEVEL")]
    log_level: Option<String>,

    /// Log format: "human" or "json".
    #[arg(long, env = "CONGRESS_LOG_FORMAT")]
    log_format: Option<LogFormat>,

    /// Subcommand.
    #[command(subcommand)]
    command: Command,
}

#[derive(clap::Subcommand)]
enum Command {
    /// Apply a JSON list of calls and print each call's records as JSON lines.
    Replay {
        /// Path to the script file.
        script: PathBuf,
    },
    /// Print a default TOML configuration.
    DefaultConfig,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if let Command::DefaultConfig = cli.command {
        let genesis = cli.genesis.unwrap_or_else(placeholder_genesis);
        print!("{}", CongressConfig::new(genesis).to_toml_string()?);
        return Ok(());
    }

    let config = resolve_config(&cli)?;
    let format = match cli.log_format {
        Some(format) => format,
        None => config.log_format()?,
    };
    init_logging(format, &config.log_level);

    match cli.command {
        Command::Replay { script } => replay(&config, &script),
        Command::DefaultConfig => Ok(()),
    }
}

/// File settings first, then CLI flags and env vars on top.
fn resolve_config(cli: &Cli) -> anyhow::Result<CongressConfig> {
    let mut config = match (&cli.config, cli.genesis) {
        (Some(path), _) => {
            let path = path.to_string_lossy();
            CongressConfig::from_toml_file(&path)
                .with_context(|| format!("loading config from {path}"))?
        }
        (None, Some(genesis)) => CongressConfig::new(genesis),
        (None, None) => anyhow::bail!("either --config or --genesis is required"),
    };
    if let (Some(_), Some(genesis)) = (&cli.config, cli.genesis) {
        config.genesis = genesis;
    }
    if let Some(level) = &cli.log_level {
        config.log_level = level.clone();
    }
    if let Some(format) = cli.log_format {
        config.log_format = format.to_string();
    }
    config.validate().context("invalid configuration")?;
    Ok(config)
}

fn replay(config: &CongressConfig, path: &Path) -> anyhow::Result<()> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("reading script {}", path.display()))?;
    let calls = parse_script(&json).with_context(|| format!("parsing script {}", path.display()))?;

    let span = tracing_spans::replay_span(&path.display().to_string(), calls.len());
    let _enter = span.enter();
    tracing::info!(congress = %config.address, genesis = %config.genesis, "replaying script");

    let mut replayer = Replayer::new(config)?;
    for (index, call) in calls.iter().enumerate() {
        let outcome = replayer.apply(index, call);
        println!("{}", serde_json::to_string(&outcome)?);
    }

    let summary = replayer.summary();
    tracing::info!(
        accepted = summary.accepted,
        rejected = summary.rejected,
        voters = summary.voters.len(),
        "replay finished"
    );
    println!("{}", serde_json::to_string(&summary)?);
    Ok(())
}

fn placeholder_genesis() -> Address {
    let mut bytes = [0u8; Address::LEN];
    bytes[Address::LEN - 1] = 0x01;
    Address::new(bytes)
}
