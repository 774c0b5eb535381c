//! Loggen - syslog load generator
//!
//! # Usage
//!
//! ```bash
//! # 4 workers, 10000 BSD records each, over TCP
//! loggen send -s 127.0.0.1 --workers 4 --count 10000
//!
//! # IETF records over UDP, settings from a file
//! loggen --config loggen.toml send -t udp -f ietf
//!
//! # Priority lookups
//! loggen pri local0.info
//! loggen pri 134
//! loggen list
//! ```

mod cmd;
mod output;

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use loggen_config::{Config, LogConfig, LogFormat, LogLevel, LogOutput};
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Loggen - syslog load generator
#[derive(Parser, Debug)]
#[command(name = "loggen")]
#[command(version, about, long_about = None, arg_required_else_help = true)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Path to configuration file (error if specified but not found)
    #[arg(short, long, global = true)]
    config: Option<std::path::PathBuf>,

    /// Log level (trace, debug, info, warn, error). Overrides config file.
    #[arg(short, long, global = true)]
    log_level: Option<LogLevel>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Send syslog records to a collector
    Send(cmd::send::SendArgs),

    /// List known facilities and severities
    List,

    /// Convert between facility.severity and its integer value
    Pri(cmd::pri::PriArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Send(args) => {
            let config = load_config(cli.config.as_deref())?;
            let log_level = resolve_log_level(cli.log_level, &config);
            init_logging(log_level, &config.log)?;
            cmd::send::run(args, config).await
        }
        // Lookups only write to stdout
        Command::List => cmd::list::run(),
        Command::Pri(args) => cmd::pri::run(args),
    }
}

/// Load the config file, or defaults when none is given
fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => Config::from_file(path)
            .with_context(|| format!("failed to load config from {}", path.display())),
        None => Ok(Config::default()),
    }
}

/// Resolve log level: CLI flag > config file > default "info"
fn resolve_log_level(cli_level: Option<LogLevel>, config: &Config) -> LogLevel {
    cli_level.unwrap_or(config.log.level)
}

/// Initialize the tracing subscriber for logging
fn init_logging(level: LogLevel, log: &LogConfig) -> Result<()> {
    let filter = EnvFilter::try_new(level.as_str())
        .map_err(|e| anyhow::anyhow!("invalid log level: {}", e))?;

    let (writer, ansi) = match &log.output {
        LogOutput::Stdout => (BoxMakeWriter::new(std::io::stdout), true),
        LogOutput::Stderr => (BoxMakeWriter::new(std::io::stderr), true),
        LogOutput::File(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("failed to open log file {}", path))?;
            (BoxMakeWriter::new(Mutex::new(file)), false)
        }
    };

    let registry = tracing_subscriber::registry().with(filter);

    match log.format {
        LogFormat::Console => registry
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_thread_ids(false)
                    .with_ansi(ansi)
                    .with_writer(writer),
            )
            .init(),
        LogFormat::Json => registry
            .with(fmt::layer().json().with_writer(writer))
            .init(),
    }

    Ok(())
}
