//! getidle - print how long the X11 session has been idle.
//!
//! Prints the time since the last user input, in whole seconds by default,
//! as reported by the MIT-SCREEN-SAVER extension.

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use getidle::{Config, IdleError, OutputFormat, ReportError, X11IdleSource};
use thiserror::Error;
use tracing::{debug, error};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;

/// Exit status when the configuration cannot be loaded.
const EXIT_CONFIG: u8 = 5;

/// Print the X11 idle time.
///
/// With no arguments, prints the seconds since the last user input on the
/// default display.
#[derive(Parser, Debug)]
#[command(name = "getidle")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Display to query instead of $DISPLAY.
    #[arg(short, long)]
    display: Option<String>,

    /// Output format.
    #[arg(short, long, value_enum)]
    format: Option<OutputFormat>,

    /// Path to config file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log level (off, trace, debug, info, warn, error). Logs go to stderr.
    #[arg(long, default_value = "warn")]
    log_level: LevelFilter,
}

/// Failure of a single run, mapped to an exit status.
#[derive(Error, Debug)]
enum RunError {
    #[error("{0:#}")]
    Config(anyhow::Error),

    #[error(transparent)]
    Idle(#[from] IdleError),

    #[error(transparent)]
    Report(#[from] ReportError),
}

impl RunError {
    fn exit_code(&self) -> u8 {
        match self {
            Self::Config(_) => EXIT_CONFIG,
            Self::Idle(e) => e.exit_code(),
            Self::Report(e) => e.exit_code(),
        }
    }
}

fn main() -> ExitCode {
    let args = Args::parse();

    init_logging(args.log_level);

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(RunError::Idle(e @ IdleError::Connect { .. })) => {
            // A missing display exits silently unless debug logging is on.
            debug!("{}", e);
            for diag in X11IdleSource::diagnostics() {
                debug!("  {}", diag);
            }
            ExitCode::from(e.exit_code())
        }
        Err(e) => {
            error!("{}", e);
            ExitCode::from(e.exit_code())
        }
    }
}

/// Initialize logging with the specified level.
fn init_logging(level: LevelFilter) {
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::OFF.into())
        .parse_lossy(format!("getidle={level}"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .init();
}

/// Resolve settings, open the display and print one report line.
fn run(args: Args) -> Result<(), RunError> {
    let config = Config::load_or_default(args.config.as_deref())
        .context("Failed to load configuration")
        .map_err(RunError::Config)?
        .with_overrides(args.display, args.format);

    debug!(
        "Configuration resolved (display={:?}, format={:?})",
        config.display, config.format
    );

    let source = X11IdleSource::connect(config.display.as_deref())?;
    debug!("Querying root window 0x{:x} of screen {}", source.root(), source.screen());

    let stdout = io::stdout();
    getidle::report(&source, config.format, &mut stdout.lock())?;

    Ok(())
}
