use sweepr_common::config::ProbeKind;
use sweepr_common::outcome::ProbeOutcome;
use sweepr_core::recon::ReconService;

use crate::support::{LOCALHOST, closed_port, fast_config, greet_forever, open_port};

#[tokio::test]
async fn banner_grab_reads_greetings_from_open_ports() {
    let (ssh_like, ssh_port) = open_port().await;
    let (mail_like, mail_port) = open_port().await;
    greet_forever(ssh_like, b"SSH-2.0-OpenSSH_9.6\r\n");
    greet_forever(mail_like, b"220 mail.example.com ESMTP ready\r\n");

    let service = ReconService::new(fast_config(ProbeKind::Banner));
    let results = service.banner_grab(LOCALHOST, &[ssh_port, mail_port]).await;

    let mut banners: Vec<(u16, String)> = results
        .into_iter()
        .filter_map(|outcome| match outcome {
            ProbeOutcome::Banner { port, text, .. } => Some((port, text)),
            _ => None,
        })
        .collect();
    banners.sort();

    let mut expected = vec![
        (ssh_port, "SSH-2.0-OpenSSH_9.6".to_string()),
        (mail_port, "220 mail.example.com ESMTP ready".to_string()),
    ];
    expected.sort();
    assert_eq!(banners, expected);
}

#[tokio::test]
async fn banner_grab_skips_closed_ports() {
    let closed: u16 = closed_port().await;
    let service = ReconService::new(fast_config(ProbeKind::Banner));
    assert!(service.banner_grab(LOCALHOST, &[closed]).await.is_empty());
}
