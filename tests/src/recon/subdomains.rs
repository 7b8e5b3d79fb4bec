use std::collections::HashMap;
use std::io;
use std::net::{IpAddr, Ipv4Addr};

use async_trait::async_trait;
use sweepr_common::config::ProbeKind;
use sweepr_common::error::EnumerationError;
use sweepr_common::outcome::ProbeOutcome;
use sweepr_core::probe::Resolver;
use sweepr_core::recon::ReconService;

use crate::support::fast_config;

struct ZoneResolver {
    zone: HashMap<&'static str, Vec<Ipv4Addr>>,
}

impl ZoneResolver {
    fn example_com() -> Self {
        let mut zone = HashMap::new();
        zone.insert("www.example.com", vec![Ipv4Addr::new(93, 184, 216, 34)]);
        zone.insert(
            "mail.example.com",
            vec![Ipv4Addr::new(93, 184, 216, 40), Ipv4Addr::new(93, 184, 216, 41)],
        );
        Self { zone }
    }
}

#[async_trait]
impl Resolver for ZoneResolver {
    async fn lookup_ipv4(&self, fqdn: &str) -> io::Result<Vec<Ipv4Addr>> {
        self.zone
            .get(fqdn)
            .cloned()
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "NXDOMAIN"))
    }
}

#[tokio::test]
async fn brute_force_keeps_only_resolving_names() {
    let labels: Vec<String> = ["www", "mail", "zzz-nonexistent"]
        .into_iter()
        .map(String::from)
        .collect();

    let service = ReconService::new(fast_config(ProbeKind::Subdomain));
    let results = service
        .brute_force_with("example.com", labels, ZoneResolver::example_com())
        .await
        .unwrap();

    assert_eq!(results.len(), 2);
    let sorted = results.sorted();
    assert_eq!(
        sorted[0],
        ProbeOutcome::ResolvedSubdomain {
            fqdn: "mail.example.com".into(),
            ips: vec![
                IpAddr::V4(Ipv4Addr::new(93, 184, 216, 40)),
                IpAddr::V4(Ipv4Addr::new(93, 184, 216, 41)),
            ],
        }
    );
    assert_eq!(
        sorted[1],
        ProbeOutcome::ResolvedSubdomain {
            fqdn: "www.example.com".into(),
            ips: vec![IpAddr::V4(Ipv4Addr::new(93, 184, 216, 34))],
        }
    );
}

#[tokio::test]
async fn missing_wordlist_fails_before_any_lookup() {
    let service = ReconService::new(fast_config(ProbeKind::Subdomain));
    let path = std::env::temp_dir().join("sweepr-no-such-wordlist.txt");
    let err = service
        .brute_force_subdomains("example.com", &path)
        .await
        .unwrap_err();
    assert!(matches!(err, EnumerationError::WordlistNotFound { .. }));
}

#[tokio::test]
async fn wordlist_file_drives_the_scan() {
    let path = std::env::temp_dir().join(format!("sweepr-words-{}.txt", std::process::id()));
    std::fs::write(&path, "# common names\nwww\n\n  mail  \nzzz-nonexistent\n").unwrap();

    let labels = sweepr_common::wordlist::load_wordlist(&path).unwrap();
    std::fs::remove_file(&path).unwrap();
    assert_eq!(labels, vec!["www", "mail", "zzz-nonexistent"]);

    let service = ReconService::new(fast_config(ProbeKind::Subdomain));
    let results = service
        .brute_force_with("example.com.", labels, ZoneResolver::example_com())
        .await
        .unwrap();
    assert_eq!(results.len(), 2);
}
