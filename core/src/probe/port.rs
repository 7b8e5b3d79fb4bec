use std::net::SocketAddr;
use std::time::Duration;

use async_trait::async_trait;
use sweepr_common::network::services::service_name;
use sweepr_common::outcome::ProbeOutcome;
use tokio::net::TcpStream;
use tokio::time::timeout;
use tracing::trace;

use super::Probe;

/// TCP connect check: a completed handshake means the port is open.
#[derive(Debug, Clone, Copy)]
pub struct PortProbe {
    timeout: Duration,
}

impl PortProbe {
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }
}

#[async_trait]
impl Probe for PortProbe {
    type Unit = SocketAddr;

    async fn probe(&self, addr: SocketAddr) -> Option<ProbeOutcome> {
        if !handshake(addr, self.timeout).await {
            return None;
        }

        let port: u16 = addr.port();
        Some(ProbeOutcome::OpenPort {
            port,
            service: service_name(port).to_string(),
        })
    }
}

/// Whether a TCP handshake with `addr` completes within `probe_timeout`.
pub async fn handshake(addr: SocketAddr, probe_timeout: Duration) -> bool {
    match timeout(probe_timeout, TcpStream::connect(addr)).await {
        Ok(Ok(_stream)) => true,
        Ok(Err(e)) => {
            trace!("{addr} refused: {e}");
            false
        }
        Err(_elapsed) => {
            trace!("{addr} timed out");
            false
        }
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
