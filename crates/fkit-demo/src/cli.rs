#![forbid(unsafe_code)]

use std::io::Write;
use std::path::PathBuf;

use clap::Parser;
use thiserror::Error;
use tracing::info;

use crate::config::{ConfigError, ShowcaseConfig};
use crate::logging::{self, LogFormat, LoggingError};
use crate::scenarios::{self, Scenario};

#[derive(Debug, Parser)]
#[command(
    name = "fkit-demo",
    about = "Replay the FrankenKit counter, window-size, and phone book apps",
    version
)]
pub struct Cli {
    /// TOML config file (overrides FKIT_DEMO_CONFIG).
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Emit logs as JSON lines.
    #[arg(long)]
    pub json: bool,

    /// App to replay.
    #[arg(long, value_enum, default_value_t = Scenario::All)]
    pub scenario: Scenario,
}

#[derive(Debug, Error)]
pub enum DemoError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Logging(#[from] LoggingError),
    #[error("failed to write output: {0}")]
    Io(#[from] std::io::Error),
}

pub fn run_from_env() -> Result<(), DemoError> {
    let cli = Cli::parse();
    let config = ShowcaseConfig::load(cli.config.as_deref())?;
    logging::init(LogFormat::from_json_flag(cli.json || config.log_json))?;
    let mut out = std::io::stdout().lock();
    run(&cli, &config, &mut out)
}

/// Replay the selected scenario and write its transcripts to `out`.
pub fn run(cli: &Cli, config: &ShowcaseConfig, out: &mut impl Write) -> Result<(), DemoError> {
    info!(
        scenario = cli.scenario.name(),
        click_step = config.click_step,
        hover_step = config.hover_step,
        "starting showcase"
    );
    for transcript in scenarios::run(cli.scenario, config) {
        write!(out, "{transcript}")?;
    }
    out.flush()?;
    Ok(())
}
