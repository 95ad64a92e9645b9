//! Domain types for idle queries.

use std::time::Duration;

use clap::ValueEnum;
use serde::Deserialize;
use serde::Serialize;

/// Screen saver state as reported by the MIT-SCREEN-SAVER extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SaverState {
    #[default]
    Off,
    On,
    Cycle,
    Disabled,
    Unknown,
}

impl SaverState {
    /// Map the wire value of the `state` reply field.
    pub fn from_wire(value: u8) -> Self {
        match value {
            0 => Self::Off,
            1 => Self::On,
            2 => Self::Cycle,
            3 => Self::Disabled,
            _ => Self::Unknown,
        }
    }
}

/// How the screen saver blanks the screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SaverKind {
    #[default]
    Blanked,
    Internal,
    External,
    Unknown,
}

impl SaverKind {
    /// Map the wire value of the `kind` reply field.
    pub fn from_wire(value: u8) -> Self {
        match value {
            0 => Self::Blanked,
            1 => Self::Internal,
            2 => Self::External,
            _ => Self::Unknown,
        }
    }
}

/// Result of a single idle query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct IdleInfo {
    /// Time since the last user input event.
    pub since_user_input: Duration,

    /// Time until the screen saver activates, or since it activated when on.
    pub until_saver: Duration,

    /// Current screen saver state.
    pub saver_state: SaverState,

    /// Screen saver kind.
    pub saver_kind: SaverKind,
}

impl IdleInfo {
    /// Create an idle record from a millisecond count, leaving saver fields at defaults.
    pub fn from_millis(ms: u32) -> Self {
        Self {
            since_user_input: Duration::from_millis(u64::from(ms)),
            ..Self::default()
        }
    }

    /// Milliseconds since the last user input.
    pub fn idle_millis(&self) -> u128 {
        self.since_user_input.as_millis()
    }

    /// Whole seconds since the last user input, truncated.
    pub fn idle_seconds(&self) -> u64 {
        self.since_user_input.as_secs()
    }
}

/// How the idle time is written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Whole seconds (default).
    #[default]
    Seconds,
    /// Milliseconds.
    Millis,
    /// Single-line JSON object with screen saver details.
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_idle_seconds_truncates() {
        assert_eq!(IdleInfo::from_millis(0).idle_seconds(), 0);
        assert_eq!(IdleInfo::from_millis(999).idle_seconds(), 0);
        assert_eq!(IdleInfo::from_millis(1000).idle_seconds(), 1);
        assert_eq!(IdleInfo::from_millis(61_999).idle_seconds(), 61);
        assert_eq!(IdleInfo::from_millis(u32::MAX).idle_seconds(), 4_294_967);
    }

    #[test]
    fn test_idle_millis() {
        assert_eq!(IdleInfo::from_millis(1234).idle_millis(), 1234);
    }

    #[test]
    fn test_saver_state_from_wire() {
        assert_eq!(SaverState::from_wire(0), SaverState::Off);
        assert_eq!(SaverState::from_wire(1), SaverState::On);
        assert_eq!(SaverState::from_wire(2), SaverState::Cycle);
        assert_eq!(SaverState::from_wire(3), SaverState::Disabled);
        assert_eq!(SaverState::from_wire(42), SaverState::Unknown);
    }

    #[test]
    fn test_saver_kind_from_wire() {
        assert_eq!(SaverKind::from_wire(0), SaverKind::Blanked);
        assert_eq!(SaverKind::from_wire(2), SaverKind::External);
        assert_eq!(SaverKind::from_wire(7), SaverKind::Unknown);
    }

    #[test]
    fn test_output_format_parse_toml() {
        #[derive(Deserialize)]
        struct Wrapper {
            format: OutputFormat,
        }

        let w: Wrapper = toml::from_str(r#"format = "millis""#).unwrap();
        assert_eq!(w.format, OutputFormat::Millis);
    }
}
