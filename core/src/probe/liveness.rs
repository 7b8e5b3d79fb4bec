//! Host liveness checks.
//!
//! `Icmp` shells out to the system `ping` for a single echo request, which
//! needs no raw-socket privileges of our own. `Handshake` knocks on one TCP
//! port instead: an accepted *or* refused connection proves something
//! answered at that address.

use std::io::ErrorKind;
use std::net::{IpAddr, SocketAddr};
use std::process::Stdio;
use std::time::Duration;

use async_trait::async_trait;
use sweepr_common::outcome::ProbeOutcome;
use tokio::net::TcpStream;
use tokio::process::Command;
use tokio::time::timeout;
use tracing::debug;

use super::Probe;

/// Extra time granted to the `ping` process on top of its own wait.
const PING_GRACE: Duration = Duration::from_millis(500);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LivenessMethod {
    #[default]
    Icmp,
    Handshake {
        port: u16,
    },
}

#[derive(Debug, Clone, Copy)]
pub struct LivenessProbe {
    method: LivenessMethod,
    timeout: Duration,
}

impl LivenessProbe {
    pub fn new(method: LivenessMethod, timeout: Duration) -> Self {
        Self { method, timeout }
    }
}

#[async_trait]
impl Probe for LivenessProbe {
    type Unit = IpAddr;

    async fn probe(&self, ip: IpAddr) -> Option<ProbeOutcome> {
        let alive: bool = match self.method {
            LivenessMethod::Icmp => ping(ip, self.timeout).await,
            LivenessMethod::Handshake { port } => knock(SocketAddr::new(ip, port), self.timeout).await,
        };
        alive.then_some(ProbeOutcome::Alive { ip })
    }
}

async fn ping(ip: IpAddr, wait: Duration) -> bool {
    let mut command = Command::new("ping");
    command
        .args(ping_args(ip, wait))
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .kill_on_drop(true);

    match timeout(wait + PING_GRACE, command.status()).await {
        Ok(Ok(status)) => status.success(),
        Ok(Err(e)) => {
            debug!("Could not run ping for {ip}: {e}");
            false
        }
        Err(_elapsed) => {
            debug!("Ping for {ip} timed out");
            false
        }
    }
}

/// One echo request, waiting at most `wait` (rounded up to whole seconds on
/// Unix, where `-W` takes seconds).
fn ping_args(ip: IpAddr, wait: Duration) -> Vec<String> {
    if cfg!(windows) {
        let millis: u128 = wait.as_millis().max(1);
        vec!["-n".into(), "1".into(), "-w".into(), millis.to_string(), ip.to_string()]
    } else {
        let secs: u64 = wait.as_secs() + u64::from(wait.subsec_nanos() > 0);
        vec!["-c".into(), "1".into(), "-W".into(), secs.max(1).to_string(), ip.to_string()]
    }
}

async fn knock(addr: SocketAddr, wait: Duration) -> bool {
    match timeout(wait, TcpStream::connect(addr)).await {
        Ok(Ok(_stream)) => true,
        Ok(Err(e)) if e.kind() == ErrorKind::ConnectionRefused => true,
        Ok(Err(e)) => {
            debug!("{addr} unreachable: {e}");
            false
        }
        Err(_elapsed) => false,
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
