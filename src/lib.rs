//! getidle - report how long the X11 session has been idle.
//!
//! Queries the MIT-SCREEN-SAVER extension for the time since the last user
//! input on the default screen's root window.

pub mod config;
pub mod domain;
pub mod idle;
pub mod report;

pub use config::Config;
pub use domain::{IdleInfo, OutputFormat, SaverKind, SaverState};
pub use idle::{IdleError, IdleSource, X11IdleSource};
pub use report::{ReportError, render, report};
