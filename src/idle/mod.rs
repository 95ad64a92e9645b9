//! Idle detection module.
//!
//! Provides the `IdleSource` seam and its X11 screen saver implementation.

pub mod x11;

use thiserror::Error;

use crate::domain::IdleInfo;

pub use x11::X11IdleSource;

/// Anything that can report the current idle time.
pub trait IdleSource {
    /// Query idle information once.
    fn query(&self) -> Result<IdleInfo, IdleError>;
}

/// Errors that can occur while querying idle time.
#[derive(Error, Debug)]
pub enum IdleError {
    #[error("Failed to open display {display}: {reason}")]
    Connect { display: String, reason: String },

    #[error("X server does not support the MIT-SCREEN-SAVER extension")]
    ExtensionMissing,

    #[error("Screen saver query failed: {0}")]
    Query(String),
}

impl IdleError {
    /// Process exit status for this error.
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::Connect { .. } => 1,
            Self::ExtensionMissing => 3,
            Self::Query(_) => 4,
        }
    }
}
