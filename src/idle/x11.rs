//! Idle detection via the X11 MIT-SCREEN-SAVER extension.
//!
//! Opens a display connection, resolves the default screen's root window and
//! issues `ScreenSaverQueryInfo` against it.

use std::env;
use std::time::Duration;

use tracing::debug;
use tracing::trace;
use x11rb::connection::{Connection, RequestConnection};
use x11rb::protocol::screensaver;
use x11rb::protocol::screensaver::ConnectionExt as _;
use x11rb::protocol::xproto::Window;
use x11rb::rust_connection::RustConnection;

use super::{IdleError, IdleSource};
use crate::domain::{IdleInfo, SaverKind, SaverState};

/// Idle source backed by an open X11 connection.
///
/// The connection is closed when the source is dropped, on the success and
/// error paths alike.
pub struct X11IdleSource {
    conn: RustConnection,
    root: Window,
    screen: usize,
}

impl X11IdleSource {
    /// Open `display`, or `$DISPLAY` when `None`, and check for the screen saver extension.
    pub fn connect(display: Option<&str>) -> Result<Self, IdleError> {
        let name = display_label(display);
        debug!("Opening display {}", name);

        let (conn, screen) = RustConnection::connect(display).map_err(|e| IdleError::Connect {
            display: name.clone(),
            reason: e.to_string(),
        })?;

        let root = conn
            .setup()
            .roots
            .get(screen)
            .map(|s| s.root)
            .ok_or_else(|| IdleError::Connect {
                display: name.clone(),
                reason: format!("screen {screen} does not exist"),
            })?;

        let ext = conn
            .extension_information(screensaver::X11_EXTENSION_NAME)
            .map_err(|e| IdleError::Query(e.to_string()))?;
        if ext.is_none() {
            return Err(IdleError::ExtensionMissing);
        }

        debug!("Connected to {} (screen {}, root 0x{:x})", name, screen, root);

        Ok(Self { conn, root, screen })
    }

    /// Default screen index of the open display.
    pub fn screen(&self) -> usize {
        self.screen
    }

    /// Root window the query targets.
    pub fn root(&self) -> Window {
        self.root
    }

    /// Get diagnostic information about the X11 environment.
    pub fn diagnostics() -> Vec<String> {
        let mut diags = Vec::new();

        for var in ["DISPLAY", "XAUTHORITY"] {
            match env::var(var) {
                Ok(v) => diags.push(format!("{var}={v}")),
                Err(_) => diags.push(format!("{var}: NOT SET")),
            }
        }

        diags
    }
}

impl IdleSource for X11IdleSource {
    fn query(&self) -> Result<IdleInfo, IdleError> {
        let reply = self
            .conn
            .screensaver_query_info(self.root)
            .map_err(|e| IdleError::Query(e.to_string()))?
            .reply()
            .map_err(|e| IdleError::Query(e.to_string()))?;

        trace!("QueryInfo reply: {:?}", reply);

        Ok(IdleInfo {
            since_user_input: Duration::from_millis(u64::from(reply.ms_since_user_input)),
            until_saver: Duration::from_millis(u64::from(reply.ms_until_server)),
            saver_state: SaverState::from_wire(u8::from(reply.state)),
            saver_kind: SaverKind::from_wire(u8::from(reply.kind)),
        })
    }
}

/// Name used in logs and errors for the display being opened.
fn display_label(display: Option<&str>) -> String {
    match display {
        Some(d) => d.to_string(),
        None => env::var("DISPLAY").unwrap_or_else(|_| "$DISPLAY (unset)".to_string()),
    }
}
