//! Rendering of idle reports to a writer.

use std::io::Write;

use serde::Serialize;
use thiserror::Error;
use tracing::debug;

use crate::domain::{IdleInfo, OutputFormat, SaverKind, SaverState};
use crate::idle::{IdleError, IdleSource};

/// Errors that can occur while producing a report.
#[derive(Error, Debug)]
pub enum ReportError {
    #[error(transparent)]
    Idle(#[from] IdleError),

    #[error("Failed to encode report: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("Failed to write report: {0}")]
    Write(#[from] std::io::Error),
}

impl ReportError {
    /// Process exit status for this error.
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::Idle(e) => e.exit_code(),
            Self::Encode(_) | Self::Write(_) => 6,
        }
    }
}

/// JSON shape of a report line.
#[derive(Debug, Serialize)]
struct JsonReport {
    idle_seconds: u64,
    idle_ms: u128,
    until_saver_ms: u128,
    saver_state: SaverState,
    saver_kind: SaverKind,
}

impl From<&IdleInfo> for JsonReport {
    fn from(info: &IdleInfo) -> Self {
        Self {
            idle_seconds: info.idle_seconds(),
            idle_ms: info.idle_millis(),
            until_saver_ms: info.until_saver.as_millis(),
            saver_state: info.saver_state,
            saver_kind: info.saver_kind,
        }
    }
}

/// Render `info` as a single newline-terminated line.
pub fn render(info: &IdleInfo, format: OutputFormat) -> Result<String, serde_json::Error> {
    let line = match format {
        OutputFormat::Seconds => info.idle_seconds().to_string(),
        OutputFormat::Millis => info.idle_millis().to_string(),
        OutputFormat::Json => serde_json::to_string(&JsonReport::from(info))?,
    };
    Ok(format!("{line}\n"))
}

/// Query `source` once and write the rendered line to `out`.
///
/// Nothing is written if the query or encoding fails.
pub fn report<S, W>(source: &S, format: OutputFormat, out: &mut W) -> Result<IdleInfo, ReportError>
where
    S: IdleSource + ?Sized,
    W: Write,
{
    let info = source.query()?;
    debug!(
        "Idle for {:?} (saver state={:?}, kind={:?})",
        info.since_user_input, info.saver_state, info.saver_kind
    );

    let line = render(&info, format)?;
    out.write_all(line.as_bytes())?;
    out.flush()?;

    Ok(info)
}
