use std::io::{self, ErrorKind};
use std::net::SocketAddr;
use std::time::Duration;

use async_trait::async_trait;
use tokio::net::TcpStream;
use tokio::time::timeout;

use crate::scanner::{PortState, ProbeOutcome, Prober};

/// Full TCP connect probe.
///
/// A port is open when the three-way handshake completes within the timeout.
/// The established stream is dropped right away, so every probe leaves at most
/// one socket behind for the lifetime of the call.
#[derive(Debug, Clone, Copy, Default)]
pub struct TcpProber;

#[async_trait]
impl Prober for TcpProber {
    async fn probe(&self, addr: SocketAddr, probe_timeout: Duration) -> ProbeOutcome {
        let state: PortState = match timeout(probe_timeout, TcpStream::connect(addr)).await {
            Ok(Ok(stream)) => {
                drop(stream);
                PortState::Open
            }
            Ok(Err(e)) => classify_connect_error(&e),
            Err(_elapsed) => PortState::Closed,
        };

        ProbeOutcome::new(addr.port(), state)
    }
}

/// Maps a failed connect to a port state.
///
/// Refusals and timeouts are an answer about the port. Everything else
/// (unreachable network, permission denied, descriptor exhaustion, ...) says
/// nothing about the port and is kept as an error.
pub fn classify_connect_error(err: &io::Error) -> PortState {
    match err.kind() {
        ErrorKind::ConnectionRefused
        | ErrorKind::ConnectionReset
        | ErrorKind::ConnectionAborted
        | ErrorKind::TimedOut => PortState::Closed,
        _ => PortState::Error(err.to_string()),
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
