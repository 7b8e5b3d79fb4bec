use std::net::{IpAddr, Ipv4Addr};
use std::time::Duration;

use sweepr_common::config::{ProbeKind, ScanConfig};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

pub const LOCALHOST: IpAddr = IpAddr::V4(Ipv4Addr::LOCALHOST);

pub fn fast_config(kind: ProbeKind) -> ScanConfig {
    ScanConfig::for_probe(kind)
        .with_timeout(Duration::from_secs(2))
        .with_stagger_delay(Duration::ZERO)
}

/// A loopback listener that accepts connections until the test ends.
pub async fn open_port() -> (TcpListener, u16) {
    let listener = TcpListener::bind((LOCALHOST, 0)).await.unwrap();
    let port = listener.local_addr().unwrap().port();
    (listener, port)
}

/// A loopback port with nothing listening on it.
pub async fn closed_port() -> u16 {
    let listener = TcpListener::bind((LOCALHOST, 0)).await.unwrap();
    listener.local_addr().unwrap().port()
}

/// Keeps accepting on `listener`, answering every client with `greeting`.
pub fn greet_forever(listener: TcpListener, greeting: &'static [u8]) {
    tokio::spawn(async move {
        while let Ok((mut stream, _)) = listener.accept().await {
            tokio::spawn(async move {
                let _ = stream.write_all(greeting).await;
                let mut sink = [0u8; 64];
                let _ = stream.read(&mut sink).await;
            });
        }
    });
}

/// Accepts and immediately drops every connection.
pub fn accept_forever(listener: TcpListener) {
    tokio::spawn(async move {
        while let Ok((stream, _)) = listener.accept().await {
            drop(stream);
        }
    });
}
