//! Banner grabbing: connect, optionally nudge the service, read once.

use std::io;
use std::net::{IpAddr, SocketAddr};
use std::time::Duration;

use async_trait::async_trait;
use sweepr_common::network::services::service_name;
use sweepr_common::outcome::ProbeOutcome;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;
use tokio::time::timeout;
use tracing::debug;

use super::Probe;

/// Most bytes read from a service in one grab.
pub const BANNER_READ_LIMIT: usize = 1024;

const HTTP_PORTS: [u16; 2] = [80, 8080];
/// Services that speak first (or, for 443, need a TLS client hello we do not send).
const SERVER_GREETS_PORTS: [u16; 4] = [21, 22, 25, 443];

#[derive(Debug, Clone, Copy)]
pub struct BannerProbe {
    timeout: Duration,
}

impl BannerProbe {
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }
}

#[async_trait]
impl Probe for BannerProbe {
    type Unit = SocketAddr;

    async fn probe(&self, addr: SocketAddr) -> Option<ProbeOutcome> {
        let port: u16 = addr.port();
        let request: Option<Vec<u8>> = request_for(addr.ip(), port);

        let bytes: Vec<u8> = match timeout(self.timeout, grab(addr, request)).await {
            Ok(Ok(bytes)) => bytes,
            Ok(Err(e)) => {
                debug!("Banner grab on {addr} failed: {e}");
                return None;
            }
            Err(_elapsed) => {
                debug!("Banner grab on {addr} timed out");
                return None;
            }
        };

        banner_outcome(port, &bytes)
    }
}

async fn grab(addr: SocketAddr, request: Option<Vec<u8>>) -> io::Result<Vec<u8>> {
    let mut stream: TcpStream = TcpStream::connect(addr).await?;

    if let Some(request) = request {
        stream.write_all(&request).await?;
    }

    let mut buffer: Vec<u8> = vec![0u8; BANNER_READ_LIMIT];
    let read: usize = stream.read(&mut buffer).await?;
    buffer.truncate(read);
    Ok(buffer)
}

fn banner_outcome(port: u16, bytes: &[u8]) -> Option<ProbeOutcome> {
    decode_banner(bytes).map(|text| ProbeOutcome::Banner {
        port,
        service: service_name(port).to_string(),
        text,
    })
}

/// Bytes to send before reading, if the service waits for the client.
///
/// HTTP ports get a minimal `GET /`, server-greeting ports get nothing, and
/// anything else gets a bare line break.
pub fn request_for(ip: IpAddr, port: u16) -> Option<Vec<u8>> {
    if HTTP_PORTS.contains(&port) {
        let host: String = match ip {
            IpAddr::V4(v4) => v4.to_string(),
            IpAddr::V6(v6) => format!("[{v6}]"),
        };
        return Some(format!("GET / HTTP/1.1\r\nHost: {host}\r\n\r\n").into_bytes());
    }
    if SERVER_GREETS_PORTS.contains(&port) {
        return None;
    }
    Some(b"\r\n".to_vec())
}

/// Permissive decode: invalid UTF-8 is dropped, whitespace trimmed, and an
/// empty result counts as no banner.
pub fn decode_banner(bytes: &[u8]) -> Option<String> {
    let text: String = String::from_utf8_lossy(bytes).replace(char::REPLACEMENT_CHARACTER, "");
    let trimmed: &str = text.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
