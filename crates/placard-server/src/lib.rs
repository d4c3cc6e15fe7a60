//! HTTP servers for [placard](placard) websites.
//!
//! - [`start_live_server`] serves the static files and resolves every other request through a [`Router`](placard::route::Router), rendering pages on demand.
//! - [`start_preview_web_server`] serves an already built output directory.
use std::fmt::{self, Debug, Formatter};
use std::net::IpAddr;

use thiserror::Error;

mod live;
pub mod logging;
mod preview;
pub mod server_utils;

pub use live::{LiveState, live_router, start_live_server};
pub use preview::{preview_router, start_preview_web_server};

/// Port the servers try first. If it is taken, the next open one is used.
pub const DEFAULT_PORT: u16 = 1864;

#[derive(Debug, Clone)]
pub struct ServerOptions {
    /// Listen on all interfaces (`0.0.0.0`) instead of `127.0.0.1`.
    pub host: bool,
    pub port: u16,
}

impl Default for ServerOptions {
    fn default() -> Self {
        Self {
            host: false,
            port: DEFAULT_PORT,
        }
    }
}

impl ServerOptions {
    pub fn address(&self) -> IpAddr {
        if self.host {
            IpAddr::from([0, 0, 0, 0])
        } else {
            IpAddr::from([127, 0, 0, 1])
        }
    }
}

#[derive(Error)]
pub enum ServerError {
    #[error("No open port found starting from {from}")]
    NoOpenPort { from: u16 },

    #[error("The output directory {0} does not exist. Run a build first.")]
    MissingOutputDir(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl Debug for ServerError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn options_address() {
        assert_eq!(
            ServerOptions::default().address(),
            IpAddr::from([127, 0, 0, 1])
        );
        assert_eq!(
            ServerOptions {
                host: true,
                ..Default::default()
            }
            .address(),
            IpAddr::from([0, 0, 0, 0])
        );
        assert_eq!(ServerOptions::default().port, 1864);
    }
}
