pub mod ports;
pub mod report;
pub mod subdomains;
pub mod sweep;

use std::net::IpAddr;
use std::path::PathBuf;
use std::time::Duration;

use clap::{ArgAction, Parser, Subcommand};
use sweepr_common::config::{ProbeKind, ScanConfig};
use sweepr_common::network::target::TargetSpec;

const DEFAULT_PORTS: &str = "21,22,23,25,53,80,110,143,443,445,3306,3389,5432,8080";

#[derive(Parser)]
#[command(name = "sweepr", version)]
#[command(about = "Bounded-concurrency network reconnaissance.")]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Commands,

    /// Maximum probes in flight [default: 50]
    #[arg(short = 'c', long, global = true)]
    pub concurrency: Option<usize>,

    /// Per-probe timeout in milliseconds [default: depends on the probe]
    #[arg(long, value_name = "MS", global = true)]
    pub timeout: Option<u64>,

    /// Delay between worker launches in milliseconds
    #[arg(long, value_name = "MS", global = true)]
    pub stagger: Option<u64>,

    /// Write the results as JSON to this file
    #[arg(short, long, value_name = "FILE", global = true)]
    pub output: Option<PathBuf>,

    /// Less output; repeat to print only the summary
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub quiet: u8,

    /// Skip the start-up banner
    #[arg(long, global = true)]
    pub no_banner: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Find live hosts among addresses, ranges or CIDR blocks
    #[command(alias = "s")]
    Sweep {
        targets: TargetSpec,
        /// Check liveness with a TCP connect to PORT instead of ping
        #[arg(long, value_name = "PORT")]
        handshake: Option<u16>,
    },
    /// Find open TCP ports on one host
    #[command(alias = "p")]
    Ports {
        target: IpAddr,
        /// Ports to check, e.g. 22,80,8000-8100
        #[arg(short, long, default_value = DEFAULT_PORTS)]
        ports: String,
        /// Grab banners from the open ports
        #[arg(short, long)]
        banner: bool,
    },
    /// Resolve wordlist labels under a domain
    #[command(alias = "d")]
    Subdomains {
        domain: String,
        #[arg(short, long)]
        wordlist: PathBuf,
    },
}

/// Presentation settings shared by every command.
pub struct Config {
    pub quiet: u8,
    pub no_banner: bool,
    pub output: Option<PathBuf>,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn config(&self) -> Config {
        Config {
            quiet: self.quiet,
            no_banner: self.no_banner,
            output: self.output.clone(),
        }
    }

    /// Defaults for `kind`, overridden by whatever was given on the command line.
    pub fn scan_config(&self, kind: ProbeKind) -> ScanConfig {
        let mut scan_cfg = ScanConfig::for_probe(kind);
        if let Some(concurrency) = self.concurrency {
            scan_cfg = scan_cfg.with_max_concurrency(concurrency);
        }
        if let Some(ms) = self.timeout {
            scan_cfg = scan_cfg.with_timeout(Duration::from_millis(ms));
        }
        if let Some(ms) = self.stagger {
            scan_cfg = scan_cfg.with_stagger_delay(Duration::from_millis(ms));
        }
        scan_cfg
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
