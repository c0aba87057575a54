//! CLI entry for dbgcmd: parses arguments, loads configuration, sets up
//! logging, and drives a console session over the chosen input.
use std::io;
use std::path::PathBuf;

use clap::Parser;
use thiserror::Error;
use tracing_subscriber::EnvFilter;

use crate::command::COMMANDS;
use crate::internal::config::{self, ConfigError, ConsoleConfig};
use crate::internal::input::{ConsoleSource, ScriptSource};
use crate::internal::session::Session;

/// Environment variable holding a `tracing` filter, e.g. `dbgcmd=trace`.
pub const LOG_ENV: &str = "DBGCMD_LOG";

#[derive(Debug, Error)]
pub enum ConsoleError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

// The Cli struct represents the root of the command line interface.
#[derive(Parser, Debug)]
#[command(name = "dbgcmd", about = "dbgcmd: a debugger command console", version)]
pub struct Cli {
    #[arg(
        short = 'e',
        long = "exec",
        value_name = "COMMAND",
        help = "Run a command instead of prompting (repeatable)"
    )]
    pub exec: Vec<String>,

    #[arg(
        short,
        long,
        value_name = "FILE",
        conflicts_with = "exec",
        help = "Replay commands from a file"
    )]
    pub script: Option<PathBuf>,

    #[arg(short, long, value_name = "FILE", help = "Use this config file")]
    pub config: Option<PathBuf>,

    #[arg(long, help = "Override the prompt")]
    pub prompt: Option<String>,

    #[arg(short, long, action = clap::ArgAction::Count, help = "More logging (-v debug, -vv trace)")]
    pub verbose: u8,
}

/// Parse the command line and run a session.
/// - `args`: parse from the process arguments if `None`, otherwise from the given args
pub fn parse(args: Option<&[&str]>) -> Result<(), ConsoleError> {
    let cli = match args {
        Some(args) => {
            Cli::try_parse_from(args).map_err(|e| ConsoleError::InvalidArgument(e.to_string()))?
        }
        None => Cli::parse(),
    };
    run(cli)
}

pub fn run(cli: Cli) -> Result<(), ConsoleError> {
    let mut config = match &cli.config {
        Some(path) => ConsoleConfig::from_file(path)?,
        None => config::load_config(&std::env::current_dir()?),
    };
    if let Some(prompt) = cli.prompt {
        config.prompt = prompt;
    }
    init_tracing(&config.log_level, cli.verbose);

    let init = std::mem::take(&mut config.init);
    let mut session = Session::new(COMMANDS, config);
    session.initialize(&init);

    if !cli.exec.is_empty() {
        session.run(&mut ScriptSource::new(cli.exec));
    } else if let Some(path) = cli.script {
        session.run(&mut ScriptSource::from_file(&path)?);
    } else {
        session.run(&mut ConsoleSource::stdio());
    }
    Ok(())
}

/// Install the global subscriber. Later calls are ignored.
pub fn init_tracing(default_level: &str, verbose: u8) {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| match verbose {
        0 => EnvFilter::new(default_level),
        1 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    });

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}
